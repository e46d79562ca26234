//! CLI configuration management
//!
//! Handles loading configuration from a TOML file, environment variables and
//! command-line arguments.
//!
//! Priority (highest to lowest):
//! 1. CLI arguments
//! 2. Environment variables
//! 3. Config file
//! 4. Default values

use std::path::{Path, PathBuf};
use std::str::FromStr;

use rng_core::{GenerationRequest, DEFAULT_MAX_QUANTITY};
use serde::Deserialize;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: lines, json")]
    InvalidFormat(String),

    #[error("Invalid max quantity: {0}. Must be at least 1")]
    InvalidMaxQuantity(u64),

    #[error("Environment variable {name} has invalid value '{value}'")]
    EnvError { name: &'static str, value: String },

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels accepted by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// How a generated batch is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One value per line (the "copy all" form)
    #[default]
    Lines,
    /// JSON array of strings
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lines" | "text" => Ok(OutputFormat::Lines),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Lines => write!(f, "lines"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Effective CLI configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Request used when flags do not override it
    pub request: GenerationRequest,
    /// Per-request quantity limit handed to the engine
    pub max_quantity: u64,
    /// Log level
    pub log_level: LogLevel,
    /// Output format
    pub format: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            request: GenerationRequest::default(),
            max_quantity: DEFAULT_MAX_QUANTITY,
            log_level: LogLevel::default(),
            format: OutputFormat::default(),
        }
    }
}

/// Optional overrides for individual request fields
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RequestOverrides {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub quantity: Option<i64>,
    pub allow_decimals: Option<bool>,
    pub secure: Option<bool>,
}

impl RequestOverrides {
    /// Apply the set fields on top of `request`
    pub fn apply(&self, request: GenerationRequest) -> GenerationRequest {
        GenerationRequest::new(
            self.min.unwrap_or(request.min()),
            self.max.unwrap_or(request.max()),
            self.quantity.unwrap_or(request.quantity()),
        )
        .with_decimals(self.allow_decimals.unwrap_or(request.allow_decimals()))
        .with_secure(self.secure.unwrap_or(request.secure()))
    }
}

/// CLI arguments relevant to configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Request field overrides
    pub request: RequestOverrides,
    /// Output format override
    pub format: Option<String>,
    /// Force debug logging
    pub verbose: bool,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: CliConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Overlay values from the process environment
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(|name| std::env::var(name).ok())
    }

    /// Overlay values from an environment lookup function
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let overrides = RequestOverrides {
            min: env_parse(&lookup, "RNG_MIN")?,
            max: env_parse(&lookup, "RNG_MAX")?,
            quantity: env_parse(&lookup, "RNG_QUANTITY")?,
            allow_decimals: env_bool(&lookup, "RNG_ALLOW_DECIMALS")?,
            secure: env_bool(&lookup, "RNG_SECURE")?,
        };
        self.request = overrides.apply(self.request);

        if let Some(limit) = env_parse(&lookup, "RNG_MAX_QUANTITY")? {
            self.max_quantity = limit;
        }
        if let Some(level) = lookup("RNG_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(format) = lookup("RNG_FORMAT") {
            self.format = OutputFormat::from_str(&format)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        self.request = cli.request.apply(self.request);
        if let Some(format) = &cli.format {
            self.format = OutputFormat::from_str(format)?;
        }
        if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
        Ok(())
    }

    /// Validate the configuration
    ///
    /// The request itself is validated by the engine at generation time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_quantity == 0 {
            return Err(ConfigError::InvalidMaxQuantity(self.max_quantity));
        }
        Ok(())
    }
}

fn env_parse<F, T>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(name)
        .map(|value| {
            value
                .trim()
                .parse()
                .map_err(|_| ConfigError::EnvError { name, value })
        })
        .transpose()
}

fn env_bool<F>(lookup: &F, name: &'static str) -> Result<Option<bool>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|value| match value.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => Err(ConfigError::EnvError { name, value }),
        })
        .transpose()
}

/// Build configuration from all sources
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };

    config.apply_env()?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}
