//! latticectl - command-line entrypoint.
//!
//! Usage:
//!   latticectl render responses.json
//!   latticectl --hex render -
//!   latticectl config validate --config latticectl.toml
//!   latticectl config show --format json

use anyhow::Result;
use clap::Parser;
use latticectl::cli::commands::{run_config, run_render};
use latticectl::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let overrides = cli.overrides();
    let config_path = cli.config_path().map(|p| p.to_path_buf());

    match cli.command {
        Commands::Render(args) => run_render(config_path.as_deref(), &overrides, args),
        Commands::Config(args) => run_config(config_path.as_deref(), &overrides, args),
    }
}
