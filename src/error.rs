// src/error.rs
use thiserror::Error;

/// Errors raised by the option pricer.
///
/// Both variants are raised before any simulation work starts, so a failed
/// call never leaves a partial result behind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricerError {
    /// A market or contract parameter violates its domain
    #[error("Invalid parameter '{parameter}' = {value}: {constraint}")]
    InvalidParameter {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Path count for a pricing run is not strictly positive
    #[error("Invalid sample count {count}: number of simulations must be greater than 0")]
    InvalidSampleCount { count: i64 },
}

/// Result type alias for pricer operations
pub type PricerResult<T> = Result<T, PricerError>;

/// Validation utilities
pub mod validation {
    use super::{PricerError, PricerResult};

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> PricerResult<()> {
        // NaN fails the comparison, so check finiteness first
        validate_finite(name, value)?;
        if value <= 0.0 {
            Err(PricerError::InvalidParameter {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is non-negative
    pub fn validate_non_negative(name: &str, value: f64) -> PricerResult<()> {
        validate_finite(name, value)?;
        if value < 0.0 {
            Err(PricerError::InvalidParameter {
                parameter: name.to_string(),
                value,
                constraint: "must be non-negative (≥ 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> PricerResult<()> {
        if !value.is_finite() {
            Err(PricerError::InvalidParameter {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate a signed path count and convert it to `usize`.
    ///
    /// Embedding code that receives counts as signed integers (a service
    /// payload, a config file) goes through here before calling
    /// [`OptionPricer::calculate_price`](crate::mc::pricer::OptionPricer::calculate_price).
    pub fn validate_sample_count(count: i64) -> PricerResult<usize> {
        if count <= 0 {
            return Err(PricerError::InvalidSampleCount { count });
        }
        usize::try_from(count).map_err(|_| PricerError::InvalidSampleCount { count })
    }
}
