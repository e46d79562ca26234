//! CLI error types

use rng_core::GenerationError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Secure entropy backend is unavailable (refusing to degrade with --strict-secure)")]
    SecureBackendUnavailable,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_error_passes_message_through() {
        let err: CliError = GenerationError::InvalidQuantity(0).into();
        assert_eq!(err.to_string(), "Quantity must be greater than zero (got 0)");
    }

    #[test]
    fn test_secure_backend_unavailable_display() {
        assert!(CliError::SecureBackendUnavailable
            .to_string()
            .contains("--strict-secure"));
    }
}
