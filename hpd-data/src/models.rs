//! Request and response payloads of the production dynamics endpoint.
//!
//! Field names and enum spellings match the analytics backend's JSON, so
//! these structs serialize and deserialize with plain `serde_json`.

use chrono::{NaiveDate, NaiveDateTime};
use hpd_core::filter::{validate, FilterSelection, ValidationReason, ValidationResult};
use hpd_core::vocabulary::{AggregationStep, FluidType, SedimentComplex, Unit};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when a request is built from a selection that is not complete.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("selection incomplete: {}", join_reasons(.0))]
pub struct IncompleteSelection(pub Vec<ValidationReason>);

fn join_reasons(reasons: &[ValidationReason]) -> String {
    reasons
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Body of a production dynamics query.
///
/// Dates are the first day of their month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionDynamicsRequest {
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub fluid_type: FluidType,
    pub field_ids: Vec<u32>,
    pub sediment_complexes: Vec<SedimentComplex>,
    pub aggregation_step: AggregationStep,
}

impl ProductionDynamicsRequest {
    /// Build a request from a complete selection. Field IDs and complexes
    /// come out sorted.
    pub fn from_selection(selection: &FilterSelection) -> Result<Self, IncompleteSelection> {
        if let ValidationResult::Incomplete(reasons) = validate(selection) {
            return Err(IncompleteSelection(reasons));
        }
        let (Some(from), Some(to)) = (selection.date_from, selection.date_to) else {
            return Err(IncompleteSelection(vec![ValidationReason::MissingDates]));
        };
        Ok(Self {
            date_from: from.first_day(),
            date_to: to.first_day(),
            fluid_type: selection.fluid_type,
            field_ids: selection.field_ids.iter().copied().collect(),
            sediment_complexes: selection.sediment_complexes.iter().copied().collect(),
            aggregation_step: selection.aggregation_step,
        })
    }
}

/// Echo of the request parameters inside a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataRequest {
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub fluid_type: FluidType,
    pub field_ids: Option<Vec<u32>>,
    pub sediment_complexes: Option<Vec<SedimentComplex>>,
    pub aggregation_step: AggregationStep,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataResponse {
    pub total_fields: usize,
    pub total_periods: usize,
    pub unit: Unit,
    pub generated_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionDynamicsMetadata {
    pub request: MetadataRequest,
    pub response: MetadataResponse,
}

/// Per-period production of one field, aligned with `reporting_dates`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldProductionData {
    pub field_id: u32,
    pub field_name: String,
    pub production_by_period: Vec<f64>,
}

/// Per-period production summed over all fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalProductionData {
    pub production_by_period: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionDynamicsResponse {
    pub metadata: ProductionDynamicsMetadata,
    /// Sorted period keys: "2023", "2023-Q1" or "2023-01"
    pub reporting_dates: Vec<String>,
    pub fields: Vec<FieldProductionData>,
    pub total: TotalProductionData,
}

impl ProductionDynamicsResponse {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn unit(&self) -> Unit {
        self.metadata.response.unit
    }

    pub fn fluid_type(&self) -> FluidType {
        self.metadata.request.fluid_type
    }

    pub fn aggregation_step(&self) -> AggregationStep {
        self.metadata.request.aggregation_step
    }
}
