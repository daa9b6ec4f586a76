//! Configuration errors.
//!
//! Every configuration struct in this crate exposes a `validate()` method
//! returning [`ConfigError`]. Runners call it before doing any work, so an
//! invalid setup never produces a partial optimization.

use thiserror::Error;

/// A configuration parameter was rejected during validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A count parameter is below its minimum.
    #[error("{field} must be at least {min}, got {value}")]
    TooSmall {
        field: &'static str,
        min: usize,
        value: usize,
    },

    /// A strictly positive parameter was zero, negative or NaN.
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    /// A non-negative parameter was negative or NaN.
    #[error("{field} must be non-negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    /// A `(low, high)` pair is inverted.
    #[error("{field}: lower bound {low} must not exceed upper bound {high}")]
    InvertedRange {
        field: &'static str,
        low: f64,
        high: f64,
    },

    /// A parameter does not fit inside the city domain.
    #[error("{field} ({value}) must be smaller than the city size ({city_size})")]
    ExceedsCity {
        field: &'static str,
        value: f64,
        city_size: f64,
    },
}

pub(crate) fn ensure_at_least(
    field: &'static str,
    value: usize,
    min: usize,
) -> Result<(), ConfigError> {
    if value < min {
        return Err(ConfigError::TooSmall { field, min, value });
    }
    Ok(())
}

pub(crate) fn ensure_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_nan() || value <= 0.0 {
        return Err(ConfigError::NonPositive { field, value });
    }
    Ok(())
}

pub(crate) fn ensure_non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_nan() || value < 0.0 {
        return Err(ConfigError::Negative { field, value });
    }
    Ok(())
}
