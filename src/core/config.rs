//! Configuration parsing and validation.
//!
//! Printer configuration is loaded from an optional TOML file and then
//! overridden by command-line flags. The result is frozen into a
//! [`FormatterConfig`] before the first response is printed.

use crate::printer::{FormatterConfig, OutputFormat};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Output rendering configuration.
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration.
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Output rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format name (only "simple" is rendered here).
    #[serde(default = "default_format")]
    pub format: String,

    /// Print keys and values as lower-case hex.
    #[serde(default)]
    pub hex: bool,

    /// Print only values, never keys.
    #[serde(default)]
    pub print_value_only: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            hex: false,
            print_value_only: false,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Command-line overrides applied on top of the file configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub write_out: Option<String>,
    pub hex: Option<bool>,
    pub print_value_only: Option<bool>,
    pub log_level: Option<String>,
}

// Default value functions

fn default_format() -> String {
    "simple".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

impl Config {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: Config =
            toml::from_str(&content).with_context(|| "failed to parse config file")?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).with_context(|| "failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, otherwise start from defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(ref write_out) = overrides.write_out {
            self.output.format = write_out.clone();
        }
        if let Some(hex) = overrides.hex {
            self.output.hex = hex;
        }
        if let Some(print_value_only) = overrides.print_value_only {
            self.output.print_value_only = print_value_only;
        }
        if let Some(ref log_level) = overrides.log_level {
            self.telemetry.log_level = log_level.clone();
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.validate_output()?;
        self.validate_telemetry()?;
        Ok(())
    }

    fn validate_output(&self) -> Result<()> {
        let format = self.output_format()?;
        if format != OutputFormat::Simple {
            anyhow::bail!(
                "output.format '{}' is not supported; only 'simple' is rendered",
                self.output.format
            );
        }
        Ok(())
    }

    fn validate_telemetry(&self) -> Result<()> {
        let level = self.telemetry.log_level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            anyhow::bail!(
                "telemetry.log_level must be one of {}, got: {}",
                LOG_LEVELS.join(", "),
                self.telemetry.log_level
            );
        }
        Ok(())
    }

    /// Parsed output format.
    pub fn output_format(&self) -> Result<OutputFormat> {
        self.output
            .format
            .parse()
            .with_context(|| format!("output.format '{}' is unknown", self.output.format))
    }

    /// Encoder settings shared by every formatting call.
    pub fn formatter(&self) -> FormatterConfig {
        FormatterConfig {
            hex_encode: self.output.hex,
            value_only: self.output.print_value_only,
        }
    }
}
