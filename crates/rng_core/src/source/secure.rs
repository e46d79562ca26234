//! Cryptographically strong source with standard-PRNG fallback.

use rand::rngs::OsRng;
use rand::RngCore;
use tracing::warn;

use super::{RandomSource, StandardSource};

/// 2^32, the normaliser mapping a `u32` draw onto [0, 1).
const U32_RANGE: f64 = 4_294_967_296.0;

/// Samples from a cryptographically strong backend.
///
/// Each draw fetches one `u32` from the backend and divides by 2^32. If the
/// backend reports an error the draw falls back to [`StandardSource`]
/// instead of failing; the first such fallback is logged at `warn` level.
/// Use [`secure_backend_available`](super::secure_backend_available) when a
/// hard guarantee is required.
///
/// The backend defaults to the OS entropy pool (`OsRng`); any `RngCore` may
/// be substituted with [`with_backend`](Self::with_backend).
///
/// # Examples
///
/// ```rust
/// use rng_core::source::{RandomSource, SecureSource};
///
/// let mut source = SecureSource::new();
/// let value = source.next_unit();
/// assert!(value >= 0.0 && value < 1.0);
/// ```
#[derive(Debug, Default)]
pub struct SecureSource<B: RngCore = OsRng> {
    backend: B,
    fallback: StandardSource,
    degraded: bool,
}

impl SecureSource<OsRng> {
    /// Creates a source backed by the OS entropy pool.
    #[inline]
    pub fn new() -> Self {
        Self::with_backend(OsRng)
    }
}

impl<B: RngCore> SecureSource<B> {
    /// Creates a source backed by `backend`.
    #[inline]
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            fallback: StandardSource,
            degraded: false,
        }
    }

    /// Returns `true` once any draw has fallen back to the standard source.
    #[inline]
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }
}

impl<B: RngCore> RandomSource for SecureSource<B> {
    fn next_unit(&mut self) -> f64 {
        let mut bytes = [0u8; 4];
        match self.backend.try_fill_bytes(&mut bytes) {
            Ok(()) => f64::from(u32::from_le_bytes(bytes)) / U32_RANGE,
            Err(err) => {
                if !self.degraded {
                    warn!(error = %err, "Secure entropy backend unavailable; using standard source");
                    self.degraded = true;
                }
                self.fallback.next_unit()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::UnavailableBackend;
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_samples_in_unit_interval() {
        let mut source = SecureSource::new();
        for _ in 0..10_000 {
            let value = source.next_unit();
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn test_normalisation_extremes() {
        // StepRng fills bytes from its u64 stream little-endian first
        let mut source = SecureSource::with_backend(StepRng::new(0, 0));
        assert_eq!(source.next_unit(), 0.0);

        let mut source = SecureSource::with_backend(StepRng::new(u64::from(u32::MAX), 0));
        let top = source.next_unit();
        assert!(top < 1.0);
        assert_eq!(top, f64::from(u32::MAX) / U32_RANGE);
    }

    #[test]
    fn test_normalisation_midpoint() {
        let mut source = SecureSource::with_backend(StepRng::new(1 << 31, 0));
        assert_eq!(source.next_unit(), 0.5);
    }

    #[test]
    fn test_fallback_when_backend_unavailable() {
        let mut source = SecureSource::with_backend(UnavailableBackend);
        assert!(!source.is_degraded());

        for _ in 0..1_000 {
            let value = source.next_unit();
            assert!((0.0..1.0).contains(&value));
        }
        assert!(source.is_degraded());
    }

    #[test]
    fn test_healthy_backend_not_degraded() {
        let mut source = SecureSource::new();
        source.next_unit();
        assert!(!source.is_degraded());
    }
}
