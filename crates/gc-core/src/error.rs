//! Great-circle error type.
//!
//! The unchecked maths never fails: NaN and infinities simply propagate.
//! `GcError` is returned only by the validating entry points (`try_*`
//! functions and `Sphere::new`).

use thiserror::Error;

/// The error type shared by `gc-core` and `gc-sphere`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GcError {
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("invalid cyclic range [{low}, {high})")]
    InvalidRange { low: f64, high: f64 },

    #[error("configuration error: {0}")]
    Config(String),
}

impl GcError {
    /// Return `Ok(value)` if `value` is finite, otherwise a `NonFinite` error
    /// tagged with `field`.
    #[inline]
    pub fn check_finite(field: &'static str, value: f64) -> GcResult<f64> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(GcError::NonFinite { field, value })
        }
    }
}

/// Shorthand result type for all `gc-*` crates.
pub type GcResult<T> = Result<T, GcError>;
