/// Error types for the dashboard core
use thiserror::Error;

/// Hard failures of the pure core operations.
///
/// Incomplete filter selections are not errors; see
/// [`ValidationResult`](crate::filter::ValidationResult).
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum HpdError {
    /// Calendar month construction with a non-positive year or a month outside 1..=12
    #[error("invalid calendar month: year {year}, month {month}")]
    InvalidDate { year: i32, month: u32 },

    /// Non-finite numeric input to formatting
    #[error("invalid magnitude: {0}")]
    InvalidMagnitude(f64),
}

/// Type alias for Results using HpdError
pub type Result<T> = std::result::Result<T, HpdError>;

/// Failure to parse a vocabulary value or a month from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized {kind}: {input:?}")]
pub struct ParseError {
    pub kind: &'static str,
    pub input: String,
}

impl ParseError {
    pub fn new(kind: &'static str, input: impl Into<String>) -> Self {
        Self {
            kind,
            input: input.into(),
        }
    }
}
