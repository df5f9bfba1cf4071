//! Config command implementation.

use crate::core::config::{Config, ConfigOverrides};
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use std::path::Path;

/// Configuration operations.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Validate the configuration file together with command-line flags.
    Validate,
    /// Print the effective configuration.
    Show {
        /// Output format (toml, json).
        #[arg(long, default_value = "toml")]
        format: String,
    },
}

/// Run the config command.
pub fn run_config(
    config_path: Option<&Path>,
    overrides: &ConfigOverrides,
    args: ConfigArgs,
) -> Result<()> {
    let config = effective_config(config_path, overrides)?;
    match args.command {
        ConfigCommand::Validate => {
            println!("configuration is valid");
            Ok(())
        }
        ConfigCommand::Show { format } => {
            println!("{}", show_config(&config, &format)?);
            Ok(())
        }
    }
}

fn effective_config(config_path: Option<&Path>, overrides: &ConfigOverrides) -> Result<Config> {
    let mut config = Config::load(config_path)?;
    config.apply_overrides(overrides);
    config.validate()?;
    Ok(config)
}

fn show_config(config: &Config, format: &str) -> Result<String> {
    match format {
        "json" => serde_json::to_string_pretty(config).context("failed to encode config as JSON"),
        "toml" => toml::to_string_pretty(config).context("failed to encode config as TOML"),
        other => anyhow::bail!("unknown config format: {} (expected toml or json)", other),
    }
}
