//! latticectl - plain-text printer for etcd v3 command results.
//!
//! Every etcd v3 client command (get/put/delete/txn/watch, leases, members,
//! endpoints, roles and users) ends by handing a structured response to a
//! printer. This crate holds the default `simple` printer: deterministic,
//! line-oriented text that scripts can parse.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     CLI (render, config)                        │
//! │        --hex │ --print-value-only │ --write-out │ --config      │
//! └─────────────────────────────────────────────────────────────────┘
//!                                  │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                 Response (closed set of kinds)                  │
//! │   KV │ Txn │ Watch │ Lease │ Cluster │ Maintenance │ Auth       │
//! └─────────────────────────────────────────────────────────────────┘
//!                                  │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        SimplePrinter                            │
//! │   KV encoder │ Txn dispatch │ Permission ranges │ Row builders  │
//! └─────────────────────────────────────────────────────────────────┘
//!                                  │
//!                        stdout  /  stderr
//! ```
//!
//! # Module Organization
//!
//! ## Core
//! - [`core::config`] - Configuration parsing and validation
//! - [`core::error`] - Error types
//!
//! ## Responses
//! - [`etcd`] - etcd v3 response shapes
//!
//! ## Printing
//! - [`printer::encoder`] - Key/value rendering
//! - [`printer::perm`] - Permission ranges
//! - [`printer::simple`] - Plain-text rules
//! - [`printer::table`] - Member and endpoint rows
//!
//! ## CLI
//! - [`cli::commands`] - CLI command implementations
//!
//! # Output Guarantees
//!
//! - Lines appear in the order of the response's collections
//! - Only failed health probes are written to stderr
//! - Formatting never mutates the response or the formatter settings
//! - The same response always prints the same bytes

// Core infrastructure
pub mod core;

// Response shapes
pub mod etcd;

// Printers
pub mod printer;

// CLI
pub mod cli;

// Re-exports for convenience
pub use self::core::{config, error};
pub use printer::{new_printer, FormatterConfig, OutputFormat, Printer, Response, SimplePrinter};
