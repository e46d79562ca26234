//! rng - Command Line Random Number Generator
//!
//! Operational entry point for the `rng_core` generation engine.
//!
//! # Commands
//!
//! - `rng generate --min 1 --max 6 -n 5` - Generate a batch of numbers
//! - `rng check` - Report entropy backend availability and effective config
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate only builds a request from
//! configuration and renders the engine's result. Logs go to stderr so that
//! stdout carries nothing but generated values.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use config::{build_config, CliArgs, RequestOverrides};

/// Range-bounded random number generator
#[derive(Parser)]
#[command(name = "rng")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a batch of random numbers
    Generate {
        /// Lower bound
        #[arg(long, allow_negative_numbers = true)]
        min: Option<f64>,

        /// Upper bound (inclusive for integers, exclusive for decimals)
        #[arg(long, allow_negative_numbers = true)]
        max: Option<f64>,

        /// Number of values to generate
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        quantity: Option<i64>,

        /// Generate decimals in [min, max) instead of integers in [min, max]
        #[arg(short, long, conflicts_with = "integers")]
        decimals: bool,

        /// Generate integers, overriding decimals enabled by config or env
        #[arg(long)]
        integers: bool,

        /// Use the secure entropy source, overriding config or env
        #[arg(long, conflicts_with = "insecure")]
        secure: bool,

        /// Use the standard PRNG instead of the secure entropy source
        #[arg(long, conflicts_with = "strict_secure")]
        insecure: bool,

        /// Fail instead of degrading when the secure backend is unavailable
        #[arg(long)]
        strict_secure: bool,

        /// Output format (lines, json)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Check entropy backend availability and effective configuration
    Check,
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Paired on/off switches; `None` leaves the configured value in place
fn flag_override(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut args = CliArgs {
        config_file: cli.config,
        verbose: cli.verbose,
        ..Default::default()
    };

    let strict_secure = match &cli.command {
        Commands::Generate {
            min,
            max,
            quantity,
            decimals,
            integers,
            secure,
            insecure,
            strict_secure,
            format,
        } => {
            args.request = RequestOverrides {
                min: *min,
                max: *max,
                quantity: *quantity,
                allow_decimals: flag_override(*decimals, *integers),
                secure: flag_override(*secure, *insecure),
            };
            args.format = format.clone();
            *strict_secure
        }
        Commands::Check => false,
    };

    let config = build_config(&args)?;
    init_tracing(config.log_level.as_filter_str());

    debug!(
        request = ?config.request,
        max_quantity = config.max_quantity,
        format = %config.format,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Generate { .. } => commands::generate::run(&config, strict_secure),
        Commands::Check => commands::check::run(&config),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Command failed");
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
