// src/error.rs
use thiserror::Error;

/// Error types for the bs-sensitivity library
///
/// The pricing functions themselves never fail. These errors come from the
/// boundary: user input validation, sweep configuration and export.
#[derive(Debug, Error)]
pub enum PricingError {
    /// Invalid parameter values
    #[error("Invalid parameter '{parameter}' = {value}: {constraint}")]
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Invalid configuration
    #[error("Invalid configuration for '{field}': {reason}")]
    InvalidConfiguration { field: String, reason: String },

    /// A sensitivity variable name that does not match any contract parameter
    #[error("Unknown sensitivity variable '{0}'")]
    UnknownVariable(String),

    /// Failure while writing an export file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure while serializing a result
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for PricingError {
    fn from(e: serde_json::Error) -> Self {
        PricingError::Serialization(e.to_string())
    }
}

/// Result type alias for bs-sensitivity operations
pub type PricingResult<T> = Result<T, PricingError>;

/// Validation utilities
pub mod validation {
    use super::{PricingError, PricingResult};

    /// Validate that a parameter is within a range
    pub fn validate_range(name: &str, value: f64, min: f64, max: f64) -> PricingResult<()> {
        if value < min || value > max {
            Err(PricingError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: format!("must be in range [{}, {}]", min, max),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> PricingResult<()> {
        if !value.is_finite() {
            Err(PricingError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate the number of sweep intervals
    pub fn validate_sample_count(sample_count: usize) -> PricingResult<()> {
        if sample_count == 0 {
            Err(PricingError::InvalidConfiguration {
                field: "sample_count".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else {
            Ok(())
        }
    }
}
