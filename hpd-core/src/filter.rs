//! Filter selection and validation.
//!
//! A caller assembles a [`FilterSelection`] from its widgets and calls
//! [`validate`] on demand. Range-order validity ([`is_range_valid`]) and
//! completeness ([`validate`]) are separate predicates: a half-specified range
//! is provisionally valid, yet still incomplete.

use crate::calendar_month::{compare_months, CalendarMonth};
use crate::vocabulary::{AggregationStep, FluidType, SedimentComplex};
use log::debug;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

/// A candidate set of filters for a production dynamics query.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    /// Chosen field IDs (positive integers)
    pub field_ids: BTreeSet<u32>,
    pub fluid_type: FluidType,
    pub sediment_complexes: BTreeSet<SedimentComplex>,
    pub date_from: Option<CalendarMonth>,
    pub date_to: Option<CalendarMonth>,
    pub aggregation_step: AggregationStep,
}

impl FilterSelection {
    pub fn with_fields(mut self, ids: impl IntoIterator<Item = u32>) -> Self {
        self.field_ids.extend(ids);
        self
    }

    pub fn with_complexes(mut self, complexes: impl IntoIterator<Item = SedimentComplex>) -> Self {
        self.sediment_complexes.extend(complexes);
        self
    }

    pub fn with_fluid(mut self, fluid_type: FluidType) -> Self {
        self.fluid_type = fluid_type;
        self
    }

    pub fn with_range(mut self, from: Option<CalendarMonth>, to: Option<CalendarMonth>) -> Self {
        self.date_from = from;
        self.date_to = to;
        self
    }

    pub fn with_step(mut self, step: AggregationStep) -> Self {
        self.aggregation_step = step;
        self
    }
}

/// Why a selection is not yet submittable. Variant order is the reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ValidationReason {
    MissingFields,
    MissingComplexes,
    MissingDates,
    InvalidDateOrder,
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            ValidationReason::MissingFields => "at least one field must be selected",
            ValidationReason::MissingComplexes => "at least one sediment complex must be selected",
            ValidationReason::MissingDates => "both start and end dates are required",
            ValidationReason::InvalidDateOrder => "end date must be on or after start date",
        };
        f.write_str(message)
    }
}

/// Outcome of [`validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Complete,
    Incomplete(Vec<ValidationReason>),
}

impl ValidationResult {
    pub fn is_complete(&self) -> bool {
        matches!(self, ValidationResult::Complete)
    }

    /// The reasons, empty when complete.
    pub fn reasons(&self) -> &[ValidationReason] {
        match self {
            ValidationResult::Complete => &[],
            ValidationResult::Incomplete(reasons) => reasons,
        }
    }
}

/// True when either bound is absent (range not fully picked yet) or `from` is
/// not after `to`.
pub fn is_range_valid(from: Option<&CalendarMonth>, to: Option<&CalendarMonth>) -> bool {
    match (from, to) {
        (Some(from), Some(to)) => compare_months(from, to) != Ordering::Greater,
        _ => true,
    }
}

/// Check a selection for completeness, collecting every applicable reason in
/// the order: missing fields, missing complexes, missing dates, invalid order.
pub fn validate(selection: &FilterSelection) -> ValidationResult {
    let mut reasons = Vec::new();

    if selection.field_ids.is_empty() {
        reasons.push(ValidationReason::MissingFields);
    }
    if selection.sediment_complexes.is_empty() {
        reasons.push(ValidationReason::MissingComplexes);
    }
    match (&selection.date_from, &selection.date_to) {
        (Some(from), Some(to)) => {
            if !is_range_valid(Some(from), Some(to)) {
                reasons.push(ValidationReason::InvalidDateOrder);
            }
        }
        _ => reasons.push(ValidationReason::MissingDates),
    }

    if reasons.is_empty() {
        ValidationResult::Complete
    } else {
        debug!("selection incomplete: {:?}", reasons);
        ValidationResult::Incomplete(reasons)
    }
}
