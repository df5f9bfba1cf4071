//! Render command implementation.

use crate::cli::init_tracing;
use crate::core::config::{Config, ConfigOverrides};
use crate::core::error::PrintResult;
use crate::printer::{new_printer, Printer, Response};
use anyhow::{Context, Result};
use clap::Args;
use std::io::Read;
use std::path::Path;

/// Print response documents.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// File holding one or more JSON response documents (`-` for stdin).
    pub input: Option<String>,
}

/// Run the render command.
pub fn run_render(
    config_path: Option<&Path>,
    overrides: &ConfigOverrides,
    args: RenderArgs,
) -> Result<()> {
    let mut config = Config::load(config_path)?;
    config.apply_overrides(overrides);
    config.validate()?;

    init_tracing(&config.telemetry.log_level);

    let content = read_input(args.input.as_deref())?;
    let mut printer = new_printer(config.output_format()?, config.formatter())?;

    match render_documents(printer.as_mut(), &content) {
        Ok(count) => {
            tracing::debug!(count, "rendered response documents");
            Ok(())
        }
        // The reader went away; nothing left to print to.
        Err(e) if e.is_broken_pipe() => Ok(()),
        Err(e) => Err(e).context("failed to render response"),
    }
}

/// Print every document in `content` in order. Documents may be separated by
/// any amount of whitespace. Returns how many were printed.
pub fn render_documents<P: Printer + ?Sized>(printer: &mut P, content: &str) -> PrintResult<usize> {
    let mut count = 0;
    for response in serde_json::Deserializer::from_str(content).into_iter::<Response>() {
        printer.print(&response?)?;
        count += 1;
    }
    Ok(count)
}

fn read_input(input: Option<&str>) -> Result<String> {
    match input {
        None | Some("-") => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("failed to read response documents from stdin")?;
            Ok(content)
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read response documents: {}", path)),
    }
}
