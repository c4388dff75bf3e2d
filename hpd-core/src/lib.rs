//! Core types for the hydrocarbon production dashboard.
//!
//! This crate provides:
//! - `vocabulary`: the closed enumerations (fluid type, sediment complex,
//!   aggregation step, unit) and their wire spellings
//! - `calendar_month`: month-granularity dates
//! - `month_range`: inclusive month iteration and reporting period keys
//! - `filter`: filter selection and validation
//! - `error`: error types shared by the workspace

pub mod calendar_month;
pub mod error;
pub mod filter;
pub mod month_range;
pub mod vocabulary;

pub use calendar_month::{compare_months, CalendarMonth};
pub use error::{HpdError, ParseError, Result};
pub use filter::{is_range_valid, validate, FilterSelection, ValidationReason, ValidationResult};
pub use month_range::MonthRange;
pub use vocabulary::{AggregationStep, FluidType, SedimentComplex, Unit};
