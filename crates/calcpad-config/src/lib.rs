#![deny(unsafe_code)]

//! Configuration loading and validation for Calcpad.
//!
//! Loads TOML configuration files and validates them before anything in the
//! workspace sees them. [`AppConfig`] is the central configuration structure;
//! every section is optional and falls back to its defaults.
//!
//! ## TOML Example
//!
//! ```toml
//! [display]
//! error_marker = "Error"
//! detailed_errors = false
//!
//! [logging]
//! level = "debug"
//! capacity = 500
//!
//! [service]
//! queue_capacity = 64
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Characters the calculator treats as operator delimiters. An error marker
/// containing one of them would be split apart by the tokenizer.
const RESERVED_SYMBOLS: [char; 5] = ['+', '-', '*', '/', '%'];

const VALID_LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

/// Top-level application configuration.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// How the buffer is presented to the rendering collaborator.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Event-dispatch service configuration.
    #[serde(default)]
    pub service: ServiceConfig,
}

/// Display configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Text written into the buffer when an evaluation fails.
    #[serde(default = "default_error_marker")]
    pub error_marker: String,

    /// Append the failure reason to the marker (`"Error: division by zero"`)
    /// instead of showing the bare marker for every failure.
    #[serde(default)]
    pub detailed_errors: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            error_marker: default_error_marker(),
            detailed_errors: false,
        }
    }
}

fn default_error_marker() -> String {
    "Error".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "info", "debug", "trace").
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Number of entries kept by the in-memory log collector.
    #[serde(default = "default_log_capacity")]
    pub capacity: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            capacity: default_log_capacity(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_capacity() -> usize {
    500
}

/// Event-dispatch service configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Bound of the keystroke queue feeding a calculator instance.
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            queue_capacity: default_queue_capacity(),
        }
    }
}

fn default_queue_capacity() -> usize {
    64
}

impl AppConfig {
    /// Load configuration from a TOML file at the given path using async I/O.
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = tokio::fs::read_to_string(path).await?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let marker = &self.display.error_marker;
        if marker.trim().is_empty() {
            return Err(ConfigError::Validation(
                "display.error_marker must not be empty".to_string(),
            ));
        }
        if marker.contains(RESERVED_SYMBOLS) {
            return Err(ConfigError::Validation(format!(
                "display.error_marker must not contain any of {RESERVED_SYMBOLS:?}, got {marker:?}"
            )));
        }
        if marker.trim().parse::<f32>().is_ok() {
            return Err(ConfigError::Validation(format!(
                "display.error_marker must not be a number, got {marker:?}"
            )));
        }

        if !VALID_LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.level must be one of {:?}, got {:?}",
                VALID_LOG_LEVELS, self.logging.level
            )));
        }
        if self.logging.capacity == 0 {
            return Err(ConfigError::Validation(
                "logging.capacity must be at least 1".to_string(),
            ));
        }

        if self.service.queue_capacity == 0 {
            return Err(ConfigError::Validation(
                "service.queue_capacity must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
