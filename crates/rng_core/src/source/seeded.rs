//! Seeded pseudo-random source for reproducible sequences.
//!
//! This module provides [`SeededSource`], a seeded PRNG wrapper used by tests
//! and benchmarks where the same input must yield the same batch.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::RandomSource;

/// Reproducible random source.
///
/// The same seed always produces the same sequence of samples. Not a
/// substitute for [`SecureSource`](super::SecureSource): the sequence is fully
/// determined by a 64-bit seed.
///
/// # Examples
///
/// ```rust
/// use rng_core::source::{RandomSource, SeededSource};
///
/// let mut a = SeededSource::from_seed(12345);
/// let mut b = SeededSource::from_seed(12345);
///
/// // Same seed produces identical sequences
/// assert_eq!(a.next_unit(), b.next_unit());
/// ```
#[derive(Clone, Debug)]
pub struct SeededSource {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation (kept for reproducibility tracking).
    seed: u64,
}

impl SeededSource {
    /// Creates a source initialised with the given seed.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Returns the seed used for initialisation.
    ///
    /// Useful for logging and debugging reproducibility issues.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededSource {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.inner.gen()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SeededSource::from_seed(42);
        let mut b = SeededSource::from_seed(42);
        for _ in 0..100 {
            assert_eq!(a.next_unit(), b.next_unit());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = SeededSource::from_seed(1);
        let mut b = SeededSource::from_seed(2);
        let a_values: Vec<f64> = (0..10).map(|_| a.next_unit()).collect();
        let b_values: Vec<f64> = (0..10).map(|_| b.next_unit()).collect();
        assert_ne!(a_values, b_values);
    }

    #[test]
    fn test_seed_accessor() {
        assert_eq!(SeededSource::from_seed(7).seed(), 7);
    }
}
