//! # Random Sources
//!
//! This module provides the entropy backends used by the number generator.
//! Every source yields samples uniformly distributed over the half-open
//! interval [0, 1).
//!
//! ## Module Structure
//!
//! - [`SecureSource`]: OS cryptographically strong entropy, normalised from a
//!   `u32`, degrading to the standard source if the backend fails
//! - [`StandardSource`]: the thread-local general-purpose PRNG
//! - [`SeededSource`]: seeded `StdRng` for reproducible sequences
//! - [`ScriptedSource`]: fixed sample script for deterministic tests
//!
//! Production sources are stateless between draws: every sample is a fresh
//! backend call, so there is no seeding or replay in secure mode.
//!
//! ## Usage Example
//!
//! ```rust
//! use rng_core::source::{RandomSource, SourceKind};
//!
//! let mut source = SourceKind::Secure.source();
//! let sample = source.next_unit();
//! assert!((0.0..1.0).contains(&sample));
//! ```

mod scripted;
mod secure;
mod seeded;
mod standard;

use std::fmt;

use rand::rngs::OsRng;
use rand::RngCore;

pub use scripted::ScriptedSource;
pub use secure::SecureSource;
pub use seeded::SeededSource;
pub use standard::StandardSource;

/// A supplier of uniform samples in [0, 1).
///
/// Successive samples must be mutually independent.
pub trait RandomSource {
    /// Draws one sample in the half-open interval [0, 1).
    fn next_unit(&mut self) -> f64;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Entropy backend selected by a request's `secure` flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// OS cryptographically strong entropy, with silent fallback.
    Secure,
    /// General-purpose PRNG.
    Standard,
}

impl SourceKind {
    /// Maps the request flag onto a source kind.
    #[inline]
    pub fn from_secure_flag(secure: bool) -> Self {
        if secure {
            SourceKind::Secure
        } else {
            SourceKind::Standard
        }
    }

    /// Builds the default implementation for this kind.
    pub fn source(self) -> Box<dyn RandomSource + Send> {
        match self {
            SourceKind::Secure => Box::new(SecureSource::new()),
            SourceKind::Standard => Box::new(StandardSource),
        }
    }

    /// Lowercase name, as used in logs and CLI output.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Secure => "secure",
            SourceKind::Standard => "standard",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Probes the OS entropy backend.
///
/// [`SecureSource`] degrades silently when the backend fails. Callers that
/// need a hard guarantee should confirm availability with this first.
pub fn secure_backend_available() -> bool {
    backend_available(&mut OsRng)
}

/// Returns `true` if `backend` can fill a single sample's worth of bytes.
pub fn backend_available<B: RngCore + ?Sized>(backend: &mut B) -> bool {
    let mut sample = [0u8; 4];
    backend.try_fill_bytes(&mut sample).is_ok()
}

#[cfg(test)]
pub(crate) mod testing {
    use rand::RngCore;

    /// Backend whose every draw fails, standing in for a missing CSPRNG.
    pub struct UnavailableBackend;

    impl RngCore for UnavailableBackend {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new("entropy backend unavailable"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::UnavailableBackend;
    use super::*;

    #[test]
    fn test_source_kind_from_flag() {
        assert_eq!(SourceKind::from_secure_flag(true), SourceKind::Secure);
        assert_eq!(SourceKind::from_secure_flag(false), SourceKind::Standard);
    }

    #[test]
    fn test_source_kind_display() {
        assert_eq!(format!("{}", SourceKind::Secure), "secure");
        assert_eq!(format!("{}", SourceKind::Standard), "standard");
    }

    #[test]
    fn test_boxed_sources_stay_in_unit_interval() {
        for kind in [SourceKind::Secure, SourceKind::Standard] {
            let mut source = kind.source();
            for _ in 0..1_000 {
                let value = source.next_unit();
                assert!((0.0..1.0).contains(&value), "{kind}: {value}");
            }
        }
    }

    #[test]
    fn test_backend_available() {
        assert!(backend_available(&mut rand::rngs::mock::StepRng::new(0, 1)));
        assert!(!backend_available(&mut UnavailableBackend));
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn draw<S: RandomSource>(mut source: S) -> f64 {
            source.next_unit()
        }

        let mut inner = ScriptedSource::new(vec![0.25, 0.75]);
        assert_eq!(draw(&mut inner), 0.25);
        assert_eq!(draw(&mut inner), 0.75);
    }
}
