//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Both variants are fatal: a run that hits either one produces no output.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{field} is out of range: {value} (accepted: {min}..={max})")]
    ConfigurationOutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl DomainError {
    /// Shorthand for an out-of-range configuration value
    pub fn out_of_range(field: impl Into<String>, value: f64, min: f64, max: f64) -> Self {
        DomainError::ConfigurationOutOfRange {
            field: field.into(),
            value,
            min,
            max,
        }
    }

    /// Check if this error was caused by caller-supplied data
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, DomainError::InvalidInput(_))
    }
}
