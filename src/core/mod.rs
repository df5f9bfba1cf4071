//! Core infrastructure: configuration and error types.

pub mod config;
pub mod error;

pub use config::{Config, ConfigOverrides};
pub use error::{PrintError, PrintResult};
