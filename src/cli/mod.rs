//! Command-line interface.
//!
//! The printer is driven by `latticectl render`, which reads response
//! documents produced by the client layer and prints them in the configured
//! output format.

pub mod commands;

use crate::core::config::ConfigOverrides;
use clap::{Parser, Subcommand};
use std::path::Path;

/// latticectl - plain-text printer for etcd v3 command results.
#[derive(Parser, Debug)]
#[command(name = "latticectl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path.
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Print keys and values as hex.
    #[arg(long, global = true)]
    pub hex: bool,

    /// Print only values.
    #[arg(long, global = true)]
    pub print_value_only: bool,

    /// Output format (simple, json, table, protobuf, fields).
    #[arg(short = 'w', long, global = true)]
    pub write_out: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Config file given with `--config`, if any.
    pub fn config_path(&self) -> Option<&Path> {
        self.config.as_deref().map(Path::new)
    }

    /// Flags that override the config file. Unset switches leave the file
    /// value alone.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            write_out: self.write_out.clone(),
            hex: self.hex.then_some(true),
            print_value_only: self.print_value_only.then_some(true),
            log_level: self.log_level.clone(),
        }
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print response documents.
    Render(commands::RenderArgs),
    /// Configuration operations.
    Config(commands::ConfigArgs),
}

/// Initialize tracing subscriber if the telemetry feature is enabled.
///
/// `RUST_LOG` takes precedence over `level`. Logs go to stderr so they never
/// mix with printed results.
#[cfg(feature = "telemetry")]
pub fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[cfg(not(feature = "telemetry"))]
pub fn init_tracing(_level: &str) {}
