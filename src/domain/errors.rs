//! Domain errors. Used by ports and use cases.
//!
//! Adapters map prompt and model failures into these.

use thiserror::Error;

/// Fixed message shown to the user whenever a bedtime cannot be derived.
pub const BEDTIME_FAILURE_MESSAGE: &str = "Sorry, there was a problem calculating your bedtime";

/// Failure of a single bedtime calculation.
///
/// Model load and prediction failures share one kind: the caller only ever
/// shows [`BEDTIME_FAILURE_MESSAGE`], the reason is kept for logs and tests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculationError {
    #[error("Prediction model unavailable: {0}")]
    ModelUnavailable(String),
}

impl CalculationError {
    /// Human-readable text for the form.
    pub fn user_message(&self) -> &'static str {
        BEDTIME_FAILURE_MESSAGE
    }
}

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Terminal UI error: {0}")]
    Ui(String),
}
