//! Generation request value and builder.
//!
//! A [`GenerationRequest`] is an immutable, caller-constructed description of
//! one batch: the bounds, how many values to draw, whether decimals are
//! allowed and which entropy source to use. Requests carry no identity and no
//! state between calls.

use crate::error::GenerationError;
use crate::source::SourceKind;

/// Default lower bound.
pub const DEFAULT_MIN: f64 = 1.0;

/// Default upper bound.
pub const DEFAULT_MAX: f64 = 100.0;

/// Default number of values per request.
pub const DEFAULT_QUANTITY: i64 = 10;

/// 2^53, the largest magnitude up to which `f64` holds every integer exactly.
pub const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Parameters for a single batch of random numbers.
///
/// Bounds are inclusive in integer mode and half-open (`[min, max)`) in
/// decimal mode. `quantity` is signed so that non-positive input can be
/// represented and rejected by [`validate`](Self::validate).
///
/// # Examples
///
/// ```rust
/// use rng_core::GenerationRequest;
///
/// let request = GenerationRequest::new(1.0, 6.0, 5).with_secure(false);
///
/// assert_eq!(request.min(), 1.0);
/// assert_eq!(request.max(), 6.0);
/// assert_eq!(request.quantity(), 5);
/// assert!(!request.allow_decimals());
/// assert!(!request.secure());
/// assert!(request.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GenerationRequest {
    min: f64,
    max: f64,
    quantity: i64,
    allow_decimals: bool,
    secure: bool,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            quantity: DEFAULT_QUANTITY,
            allow_decimals: false,
            secure: true,
        }
    }
}

impl GenerationRequest {
    /// Creates an integer-mode request using the secure source.
    ///
    /// No validation happens here; see [`validate`](Self::validate).
    #[inline]
    pub fn new(min: f64, max: f64, quantity: i64) -> Self {
        Self {
            min,
            max,
            quantity,
            ..Self::default()
        }
    }

    /// Creates a new request builder.
    #[inline]
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }

    /// Returns a copy with decimal sampling switched on or off.
    #[inline]
    pub fn with_decimals(mut self, allow_decimals: bool) -> Self {
        self.allow_decimals = allow_decimals;
        self
    }

    /// Returns a copy selecting the secure or standard source.
    #[inline]
    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Lower bound.
    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Number of values requested.
    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Whether decimal (half-open) sampling is selected.
    #[inline]
    pub fn allow_decimals(&self) -> bool {
        self.allow_decimals
    }

    /// Whether the secure entropy source is requested.
    #[inline]
    pub fn secure(&self) -> bool {
        self.secure
    }

    /// Entropy source selected by the `secure` flag.
    #[inline]
    pub fn source_kind(&self) -> SourceKind {
        SourceKind::from_secure_flag(self.secure)
    }

    /// Checks the request-intrinsic invariants.
    ///
    /// The range check runs first, so `min >= max` is reported as
    /// [`GenerationError::InvalidRange`] whatever the other fields hold.
    ///
    /// # Errors
    ///
    /// - [`GenerationError::InvalidRange`] if `min >= max`
    /// - [`GenerationError::InvalidQuantity`] if `quantity <= 0`
    /// - [`GenerationError::NonFiniteBound`] if a bound is NaN or infinite
    /// - [`GenerationError::FractionalBound`] if decimals are disabled and a
    ///   bound is not a whole number
    /// - [`GenerationError::IntegerPrecision`] if decimals are disabled and a
    ///   bound, or the count of integers in `[min, max]`, exceeds
    ///   [`MAX_EXACT_INTEGER`]
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.min >= self.max {
            return Err(GenerationError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        if self.quantity <= 0 {
            return Err(GenerationError::InvalidQuantity(self.quantity));
        }
        for (name, value) in [("min", self.min), ("max", self.max)] {
            if !value.is_finite() {
                return Err(GenerationError::NonFiniteBound { name, value });
            }
            if !self.allow_decimals && value.fract() != 0.0 {
                return Err(GenerationError::FractionalBound { name, value });
            }
        }
        // max - min is exact below 2^53 and rounds to at least 2^53 above it
        if !self.allow_decimals
            && (self.min.abs() > MAX_EXACT_INTEGER
                || self.max.abs() > MAX_EXACT_INTEGER
                || self.max - self.min >= MAX_EXACT_INTEGER)
        {
            return Err(GenerationError::IntegerPrecision {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Builder for [`GenerationRequest`].
///
/// Unset fields fall back to the request defaults (`1..=100`, ten values,
/// integer mode, secure source). [`build`](Self::build) validates.
///
/// # Examples
///
/// ```rust
/// use rng_core::GenerationRequest;
///
/// let request = GenerationRequest::builder()
///     .min(0.0)
///     .max(1.0)
///     .quantity(3)
///     .allow_decimals(true)
///     .build()
///     .expect("valid request");
///
/// assert!(request.allow_decimals());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct GenerationRequestBuilder {
    min: Option<f64>,
    max: Option<f64>,
    quantity: Option<i64>,
    allow_decimals: Option<bool>,
    secure: Option<bool>,
}

impl GenerationRequestBuilder {
    /// Sets the lower bound.
    #[inline]
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the upper bound.
    #[inline]
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Sets the number of values to draw.
    #[inline]
    pub fn quantity(mut self, quantity: i64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Enables or disables decimal sampling.
    #[inline]
    pub fn allow_decimals(mut self, allow_decimals: bool) -> Self {
        self.allow_decimals = Some(allow_decimals);
        self
    }

    /// Selects the secure (`true`) or standard (`false`) source.
    #[inline]
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = Some(secure);
        self
    }

    /// Builds and validates the request.
    ///
    /// # Errors
    ///
    /// Returns the first invariant violated, as described on
    /// [`GenerationRequest::validate`].
    pub fn build(self) -> Result<GenerationRequest, GenerationError> {
        let defaults = GenerationRequest::default();
        let request = GenerationRequest {
            min: self.min.unwrap_or(defaults.min),
            max: self.max.unwrap_or(defaults.max),
            quantity: self.quantity.unwrap_or(defaults.quantity),
            allow_decimals: self.allow_decimals.unwrap_or(defaults.allow_decimals),
            secure: self.secure.unwrap_or(defaults.secure),
        };

        request.validate()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_request() {
        let request = GenerationRequest::default();
        assert_eq!(request.min(), 1.0);
        assert_eq!(request.max(), 100.0);
        assert_eq!(request.quantity(), 10);
        assert!(!request.allow_decimals());
        assert!(request.secure());
        assert_eq!(request.source_kind(), SourceKind::Secure);
    }

    #[test]
    fn test_builder_valid() {
        let request = GenerationRequest::builder()
            .min(-5.0)
            .max(5.0)
            .quantity(20)
            .secure(false)
            .build()
            .unwrap();

        assert_eq!(request.min(), -5.0);
        assert_eq!(request.max(), 5.0);
        assert_eq!(request.quantity(), 20);
        assert_eq!(request.source_kind(), SourceKind::Standard);
    }

    #[test]
    fn test_builder_partial_uses_defaults() {
        let request = GenerationRequest::builder().quantity(3).build().unwrap();
        assert_eq!(request.min(), DEFAULT_MIN);
        assert_eq!(request.max(), DEFAULT_MAX);
        assert_eq!(request.quantity(), 3);
    }

    #[test]
    fn test_invalid_range() {
        let result = GenerationRequest::new(10.0, 5.0, 3).validate();
        assert_eq!(
            result,
            Err(GenerationError::InvalidRange {
                min: 10.0,
                max: 5.0
            })
        );

        let result = GenerationRequest::new(5.0, 5.0, 3).validate();
        assert!(matches!(result, Err(GenerationError::InvalidRange { .. })));
    }

    #[test]
    fn test_range_checked_before_quantity() {
        let result = GenerationRequest::new(3.0, 1.0, -4).validate();
        assert!(matches!(result, Err(GenerationError::InvalidRange { .. })));
    }

    #[test]
    fn test_invalid_quantity() {
        assert_eq!(
            GenerationRequest::new(1.0, 2.0, 0).validate(),
            Err(GenerationError::InvalidQuantity(0))
        );
        assert_eq!(
            GenerationRequest::new(1.0, 2.0, -7).validate(),
            Err(GenerationError::InvalidQuantity(-7))
        );
    }

    #[test]
    fn test_nan_bound() {
        // NaN fails every comparison, so it slips past the range check
        let result = GenerationRequest::new(f64::NAN, 2.0, 1).validate();
        assert!(matches!(
            result,
            Err(GenerationError::NonFiniteBound { name: "min", .. })
        ));
    }

    #[test]
    fn test_infinite_bound() {
        let result = GenerationRequest::new(0.0, f64::INFINITY, 1)
            .with_decimals(true)
            .validate();
        assert!(matches!(
            result,
            Err(GenerationError::NonFiniteBound { name: "max", .. })
        ));
    }

    #[test]
    fn test_integer_range_beyond_exact_precision() {
        // Inclusive max would need width 2^53 + 1
        let result = GenerationRequest::new(0.0, MAX_EXACT_INTEGER, 1).validate();
        assert_eq!(
            result,
            Err(GenerationError::IntegerPrecision {
                min: 0.0,
                max: MAX_EXACT_INTEGER
            })
        );

        // Neighbours of bounds above 2^53 are not representable
        let result =
            GenerationRequest::new(MAX_EXACT_INTEGER, MAX_EXACT_INTEGER + 2.0, 1).validate();
        assert!(matches!(
            result,
            Err(GenerationError::IntegerPrecision { .. })
        ));

        let result = GenerationRequest::new(-MAX_EXACT_INTEGER / 2.0, MAX_EXACT_INTEGER / 2.0, 1)
            .validate();
        assert!(matches!(
            result,
            Err(GenerationError::IntegerPrecision { .. })
        ));
    }

    #[test]
    fn test_integer_range_at_exact_precision_limit() {
        assert!(GenerationRequest::new(0.0, MAX_EXACT_INTEGER - 1.0, 1)
            .validate()
            .is_ok());
        assert!(GenerationRequest::new(-MAX_EXACT_INTEGER, -1.0, 1)
            .validate()
            .is_ok());

        // Decimal mode has no such limit
        assert!(GenerationRequest::new(0.0, MAX_EXACT_INTEGER * 4.0, 1)
            .with_decimals(true)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_fractional_bound_in_integer_mode() {
        let result = GenerationRequest::new(0.5, 2.0, 1).validate();
        assert_eq!(
            result,
            Err(GenerationError::FractionalBound {
                name: "min",
                value: 0.5
            })
        );

        // Same bounds are fine once decimals are allowed
        assert!(GenerationRequest::new(0.5, 2.0, 1)
            .with_decimals(true)
            .validate()
            .is_ok());
    }
}
