//! # rng_core (Core Layer: Generation Engine)
//!
//! Produces a requested quantity of random numbers inside a caller-specified
//! range, drawing from either a fast general-purpose PRNG or the OS
//! cryptographically strong entropy pool.
//!
//! ## Components
//!
//! - [`source`]: [`RandomSource`] trait and its backends (secure, standard,
//!   seeded, scripted)
//! - [`GenerationRequest`]: immutable request value with builder
//! - [`NumberGenerator`]: validation and integer/decimal sampling
//! - [`GenerationResult`]: ordered batch of rendered values
//!
//! ## Usage Example
//!
//! ```rust
//! use rng_core::{generate, GenerationError, GenerationRequest};
//!
//! // Five dice rolls from the standard source
//! let request = GenerationRequest::new(1.0, 6.0, 5).with_secure(false);
//! let rolls = generate(&request)?;
//! assert_eq!(rolls.len(), 5);
//!
//! // A single decimal in [0, 1)
//! let request = GenerationRequest::new(0.0, 1.0, 1).with_decimals(true);
//! let value: f64 = generate(&request)?.values()[0].parse().unwrap();
//! assert!((0.0..1.0).contains(&value));
//!
//! // Inverted bounds are rejected before any sampling
//! let request = GenerationRequest::new(10.0, 5.0, 3);
//! assert!(matches!(generate(&request), Err(GenerationError::InvalidRange { .. })));
//! # Ok::<(), GenerationError>(())
//! ```
//!
//! ## Known Constraints
//!
//! - **Silent fallback**: a secure request degrades to the standard source if
//!   the OS backend fails. Use [`source::secure_backend_available`] when a
//!   hard guarantee is needed.
//! - **No streaming**: every call returns a complete batch, capped at
//!   [`DEFAULT_MAX_QUANTITY`] values unless the engine is configured otherwise.
//! - **Integer precision**: integer-mode bounds and range size are limited to
//!   [`MAX_EXACT_INTEGER`] (2^53); decimal mode has no such limit.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`GenerationRequest`] and
//!   [`GenerationResult`]

pub mod error;
pub mod generator;
pub mod request;
pub mod result;
pub mod source;

pub use error::GenerationError;
pub use generator::{generate, NumberGenerator, DEFAULT_MAX_QUANTITY};
pub use request::{GenerationRequest, GenerationRequestBuilder, MAX_EXACT_INTEGER};
pub use result::GenerationResult;
pub use source::{RandomSource, SourceKind};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
