//! CLI command implementations.

mod config;
mod render;

pub use config::{run_config, ConfigArgs};
pub use render::{render_documents, run_render, RenderArgs};
