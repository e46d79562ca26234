//! Check command implementation
//!
//! Reports entropy backend availability and the effective configuration.

use rng_core::source::secure_backend_available;
use rng_core::NumberGenerator;
use tracing::{info, warn};

use crate::config::CliConfig;
use crate::Result;

/// Run the check command
pub fn run(config: &CliConfig) -> Result<()> {
    let available = secure_backend_available();
    if available {
        info!("Secure entropy backend available");
    } else {
        warn!("Secure entropy backend unavailable; secure requests will degrade");
    }

    println!("{}", report(config, available));
    Ok(())
}

/// Build the human-readable check report
pub fn report(config: &CliConfig, secure_available: bool) -> String {
    let request = &config.request;
    let engine = NumberGenerator::with_max_quantity(config.max_quantity);

    let effective_source = match (request.secure(), secure_available) {
        (true, false) => "standard (secure requested, backend unavailable)".to_string(),
        _ => request.source_kind().to_string(),
    };
    let validity = match engine.validate(request) {
        Ok(()) => "valid".to_string(),
        Err(err) => format!("invalid: {}", err),
    };

    [
        format!("rng_core v{}", rng_core::VERSION),
        format!(
            "Secure backend:  {}",
            if secure_available {
                "available"
            } else {
                "unavailable"
            }
        ),
        format!("Source:          {}", effective_source),
        format!(
            "Request:         min={} max={} quantity={} decimals={}",
            request.min(),
            request.max(),
            request.quantity(),
            request.allow_decimals()
        ),
        format!("Request status:  {}", validity),
        format!("Max quantity:    {}", config.max_quantity),
        format!("Output format:   {}", config.format),
        format!("Log level:       {}", config.log_level),
    ]
    .join("\n")
}
