//! Number generation engine.
//!
//! [`NumberGenerator`] validates a [`GenerationRequest`] once, then draws
//! exactly `quantity` samples from a [`RandomSource`] and maps each onto the
//! requested domain:
//!
//! - integer mode: `floor(r * (max - min + 1)) + min`, uniform over `[min, max]`
//! - decimal mode: `r * (max - min) + min`, uniform over `[min, max)`
//!
//! Values are rendered to their shortest round-trip decimal text.

use tracing::debug;

use crate::error::GenerationError;
use crate::request::GenerationRequest;
use crate::result::GenerationResult;
use crate::source::RandomSource;

/// Default per-request quantity limit.
pub const DEFAULT_MAX_QUANTITY: u64 = 10_000;

/// Stateless batch generator.
///
/// Holds only the per-request quantity limit; no state survives between
/// calls, so one engine may be shared freely across threads.
///
/// # Examples
///
/// ```rust
/// use rng_core::{GenerationRequest, NumberGenerator};
///
/// let request = GenerationRequest::new(1.0, 6.0, 5).with_secure(false);
/// let result = NumberGenerator::new().generate(&request).unwrap();
///
/// assert_eq!(result.len(), 5);
/// for value in &result {
///     let n: i64 = value.parse().unwrap();
///     assert!((1..=6).contains(&n));
/// }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberGenerator {
    max_quantity: u64,
}

impl Default for NumberGenerator {
    fn default() -> Self {
        Self {
            max_quantity: DEFAULT_MAX_QUANTITY,
        }
    }
}

impl NumberGenerator {
    /// Creates an engine with [`DEFAULT_MAX_QUANTITY`].
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with a custom per-request limit.
    #[inline]
    pub fn with_max_quantity(max_quantity: u64) -> Self {
        Self { max_quantity }
    }

    /// Returns the per-request quantity limit.
    #[inline]
    pub fn max_quantity(&self) -> u64 {
        self.max_quantity
    }

    /// Validates the request against both its own invariants and this
    /// engine's quantity limit.
    ///
    /// # Errors
    ///
    /// Any error from [`GenerationRequest::validate`], or
    /// [`GenerationError::QuantityTooLarge`].
    pub fn validate(&self, request: &GenerationRequest) -> Result<(), GenerationError> {
        request.validate()?;
        // quantity is positive past request validation
        if request.quantity() as u64 > self.max_quantity {
            return Err(GenerationError::QuantityTooLarge {
                quantity: request.quantity(),
                limit: self.max_quantity,
            });
        }
        Ok(())
    }

    /// Generates a batch using the source selected by `request.secure()`.
    ///
    /// A secure request never fails because the strong-entropy backend is
    /// missing; it degrades to the standard source instead.
    ///
    /// # Errors
    ///
    /// See [`validate`](Self::validate). Nothing is sampled on error.
    pub fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, GenerationError> {
        let kind = request.source_kind();
        debug!(source = %kind, "Selected entropy source");

        let mut source = kind.source();
        self.generate_with(request, &mut source)
    }

    /// Generates a batch drawing from an injected source.
    ///
    /// The request's `secure` flag is ignored; `source` is used as given.
    ///
    /// # Errors
    ///
    /// See [`validate`](Self::validate). Nothing is sampled on error.
    pub fn generate_with<S: RandomSource + ?Sized>(
        &self,
        request: &GenerationRequest,
        source: &mut S,
    ) -> Result<GenerationResult, GenerationError> {
        self.validate(request)?;

        debug!(
            min = request.min(),
            max = request.max(),
            quantity = request.quantity(),
            allow_decimals = request.allow_decimals(),
            "Generating batch"
        );

        let values = (0..request.quantity())
            .map(|_| {
                let r = source.next_unit();
                let value = if request.allow_decimals() {
                    sample_decimal(r, request.min(), request.max())
                } else {
                    sample_integer(r, request.min(), request.max())
                };
                render(value)
            })
            .collect::<Vec<_>>();

        Ok(GenerationResult::from(values))
    }
}

/// Generates a batch with the default engine.
///
/// Shorthand for `NumberGenerator::new().generate(request)`.
///
/// # Errors
///
/// See [`NumberGenerator::validate`].
pub fn generate(request: &GenerationRequest) -> Result<GenerationResult, GenerationError> {
    NumberGenerator::new().generate(request)
}

/// Maps `r` in [0, 1) onto an integer in `[min, max]`.
///
/// `min` and `max` must be whole numbers with `min < max`, magnitudes at most
/// 2^53 and at most 2^53 integers between them, as
/// [`GenerationRequest::validate`] enforces. Every step is then exact.
#[inline]
pub fn sample_integer(r: f64, min: f64, max: f64) -> f64 {
    let width = max - min + 1.0;
    // guards sources that hand out exactly 1.0
    ((r * width).floor() + min).clamp(min, max)
}

/// Maps `r` in [0, 1) onto a real number in `[min, max)`.
///
/// `min` and `max` must be finite with `min < max`.
#[inline]
pub fn sample_decimal(r: f64, min: f64, max: f64) -> f64 {
    let width = max - min;
    let value = if width.is_finite() {
        r * width + min
    } else {
        lerp(r, min, max)
    };
    if value >= max {
        next_below(max)
    } else {
        value.max(min)
    }
}

/// Interpolation that cannot overflow when `max - min` does.
#[inline]
fn lerp(r: f64, min: f64, max: f64) -> f64 {
    min * (1.0 - r) + max * r
}

/// Largest finite `f64` strictly below `x`.
#[inline]
fn next_below(x: f64) -> f64 {
    if x == 0.0 {
        -f64::from_bits(1)
    } else if x > 0.0 {
        f64::from_bits(x.to_bits() - 1)
    } else {
        f64::from_bits(x.to_bits() + 1)
    }
}

/// Canonical decimal text: shortest round-trip form, no negative zero.
#[inline]
fn render(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}
