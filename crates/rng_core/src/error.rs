//! Error types for request validation.
//!
//! Every failure is reported before the first sample is drawn, so a failed
//! call never yields a partial sequence.

use thiserror::Error;

/// Validation failure for a [`GenerationRequest`](crate::GenerationRequest).
///
/// # Examples
///
/// ```
/// use rng_core::GenerationError;
///
/// let err = GenerationError::InvalidRange { min: 10.0, max: 5.0 };
/// assert_eq!(
///     err.to_string(),
///     "Minimum value must be less than maximum value (min = 10, max = 5)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    /// `min >= max`.
    #[error("Minimum value must be less than maximum value (min = {min}, max = {max})")]
    InvalidRange {
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
    },

    /// `quantity <= 0`.
    #[error("Quantity must be greater than zero (got {0})")]
    InvalidQuantity(i64),

    /// Quantity above the engine's per-request limit.
    #[error("Quantity {quantity} exceeds the limit of {limit} values per request")]
    QuantityTooLarge {
        /// Requested quantity.
        quantity: i64,
        /// Engine limit.
        limit: u64,
    },

    /// A bound is NaN or infinite.
    #[error("Bound '{name}' must be a finite number (got {value})")]
    NonFiniteBound {
        /// Either `"min"` or `"max"`.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// A bound has a fractional part while decimals are disabled.
    #[error("Bound '{name}' must be a whole number when decimals are disabled (got {value})")]
    FractionalBound {
        /// Either `"min"` or `"max"`.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// Integer-mode range too wide for `f64` to represent every member.
    #[error(
        "Integer range [{min}, {max}] exceeds exact f64 precision: bounds and \
         range size must not exceed 2^53"
    )]
    IntegerPrecision {
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
    },
}
