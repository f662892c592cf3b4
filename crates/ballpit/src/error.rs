//! Configuration errors.
//!
//! Stepping a world never fails. Everything that can go wrong is caught when a
//! world, factory or bounds value is built, and is reported with the name of
//! the offending field.

use thiserror::Error;

/// Invalid simulation configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    /// A `[min, max]` range with `min > max`.
    #[error("{field}: min ({min}) must not exceed max ({max})")]
    InvalidRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    /// A value that must be strictly positive.
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    /// A value that must be zero or positive.
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    /// NaN or infinity where a finite number is required.
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    /// A count that must be at least one.
    #[error("{field} must be at least 1")]
    ZeroCount { field: &'static str },

    /// The body palette has no colors to draw from.
    #[error("palette must contain at least one color")]
    EmptyPalette,
}

/// Result type for configuration checks.
pub type ConfigResult<T> = std::result::Result<T, ConfigurationError>;

pub(crate) fn ensure_finite(field: &'static str, value: f64) -> ConfigResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigurationError::NotFinite { field, value })
    }
}

pub(crate) fn ensure_positive(field: &'static str, value: f64) -> ConfigResult<f64> {
    ensure_finite(field, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigurationError::NonPositive { field, value })
    }
}

pub(crate) fn ensure_non_negative(field: &'static str, value: f64) -> ConfigResult<f64> {
    ensure_finite(field, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigurationError::Negative { field, value })
    }
}
