//! General-purpose PRNG source.

use rand::Rng;

use super::RandomSource;

/// Samples from the thread-local general-purpose PRNG.
///
/// Fast and non-cryptographic. Each draw goes straight to
/// `rand::thread_rng()`, so the source itself holds no state.
///
/// # Examples
///
/// ```rust
/// use rng_core::source::{RandomSource, StandardSource};
///
/// let value = StandardSource.next_unit();
/// assert!(value >= 0.0 && value < 1.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StandardSource;

impl RandomSource for StandardSource {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}
