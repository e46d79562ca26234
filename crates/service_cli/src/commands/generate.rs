//! Generate command implementation
//!
//! Runs one batch through the engine and writes it to stdout.

use std::io::Write;

use rng_core::source::secure_backend_available;
use rng_core::{GenerationResult, NumberGenerator};
use tracing::{debug, info};

use crate::config::{CliConfig, OutputFormat};
use crate::{CliError, Result};

/// Run the generate command
pub fn run(config: &CliConfig, strict_secure: bool) -> Result<()> {
    let rendered = render_batch(config, strict_secure, secure_backend_available)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", rendered)?;
    Ok(())
}

/// Generate a batch and render it in the configured format
///
/// `backend_available` is only consulted for strict secure requests.
pub fn render_batch<F>(
    config: &CliConfig,
    strict_secure: bool,
    backend_available: F,
) -> Result<String>
where
    F: FnOnce() -> bool,
{
    let request = &config.request;

    if strict_secure && request.secure() && !backend_available() {
        return Err(CliError::SecureBackendUnavailable);
    }

    let engine = NumberGenerator::with_max_quantity(config.max_quantity);
    let result = engine.generate(request)?;

    info!(
        count = result.len(),
        source = %request.source_kind(),
        "Generation complete"
    );

    format_result(&result, config.format)
}

/// Render a batch as newline-joined lines or a JSON array
pub fn format_result(result: &GenerationResult, format: OutputFormat) -> Result<String> {
    debug!(%format, "Formatting output");
    match format {
        OutputFormat::Lines => Ok(result.join_lines()),
        OutputFormat::Json => Ok(serde_json::to_string(result)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rng_core::{GenerationError, GenerationRequest};

    fn config_for(request: GenerationRequest) -> CliConfig {
        CliConfig {
            request,
            ..CliConfig::default()
        }
    }

    #[test]
    fn test_lines_output() {
        let config = config_for(GenerationRequest::new(1.0, 6.0, 5).with_secure(false));
        let output = render_batch(&config, false, || true).unwrap();

        let lines: Vec<i64> = output.lines().map(|l| l.parse().unwrap()).collect();
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|n| (1..=6).contains(n)));
    }

    #[test]
    fn test_json_output() {
        let mut config = config_for(GenerationRequest::new(0.0, 1.0, 3).with_decimals(true));
        config.format = OutputFormat::Json;
        let output = render_batch(&config, false, || true).unwrap();

        let values: Vec<String> = serde_json::from_str(&output).unwrap();
        assert_eq!(values.len(), 3);
        for value in values {
            let v: f64 = value.parse().unwrap();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_format_result() {
        let result = GenerationResult::from(vec!["7".to_string(), "3".to_string()]);
        assert_eq!(format_result(&result, OutputFormat::Lines).unwrap(), "7\n3");
        assert_eq!(
            format_result(&result, OutputFormat::Json).unwrap(),
            r#"["7","3"]"#
        );
    }

    #[test]
    fn test_engine_error_propagates() {
        let config = config_for(GenerationRequest::new(10.0, 5.0, 3));
        let err = render_batch(&config, false, || true).unwrap_err();
        assert!(matches!(
            err,
            CliError::Generation(GenerationError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_configured_limit_applies() {
        let mut config = config_for(GenerationRequest::new(1.0, 2.0, 11));
        config.max_quantity = 10;
        let err = render_batch(&config, false, || true).unwrap_err();
        assert!(matches!(
            err,
            CliError::Generation(GenerationError::QuantityTooLarge { limit: 10, .. })
        ));
    }

    #[test]
    fn test_strict_secure_refuses_without_backend() {
        let config = config_for(GenerationRequest::new(1.0, 6.0, 1));
        let err = render_batch(&config, true, || false).unwrap_err();
        assert!(matches!(err, CliError::SecureBackendUnavailable));
    }

    #[test]
    fn test_lenient_secure_skips_backend_check() {
        let config = config_for(GenerationRequest::new(1.0, 6.0, 2));
        let output = render_batch(&config, false, || {
            panic!("backend availability checked in lenient mode")
        })
        .unwrap();
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn test_strict_flag_ignored_for_standard_requests() {
        let config = config_for(GenerationRequest::new(1.0, 6.0, 2).with_secure(false));
        assert!(render_batch(&config, true, || false).is_ok());
    }
}
