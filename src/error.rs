//! Error types for the input boundary and report output

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("{field} must be a non-negative finite amount, got {value}")]
    InvalidAmount { field: String, value: f64 },

    #[error("retirement age ({retirement_age}) must be greater than current age ({current_age})")]
    InvalidAges { current_age: u32, retirement_age: u32 },

    #[error("age {age} is above the supported maximum of {max}")]
    AgeOutOfRange { age: u32, max: u32 },

    #[error("unknown income frequency: {0:?}")]
    UnknownFrequency(String),

    #[error("unknown income source: {0:?}")]
    UnknownSource(String),

    #[error("income source listed more than once: {0}")]
    DuplicateSource(String),

    #[error("malformed input: {message}")]
    MalformedInput { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlanError>;

/// Reject negative, NaN and infinite amounts
pub(crate) fn check_amount(field: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(PlanError::InvalidAmount {
            field: field.to_string(),
            value,
        })
    }
}
