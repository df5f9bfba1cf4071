//! Error types for the printers.
//!
//! Formatting itself cannot fail; the only runtime failure is the output
//! sink refusing a write, which is handed back to the caller unchanged.

use thiserror::Error;

/// Errors raised while rendering a response.
#[derive(Debug, Error)]
pub enum PrintError {
    /// Writing to stdout/stderr (or a test sink) failed.
    #[error("write to output failed: {0}")]
    Io(#[from] std::io::Error),

    /// The requested output format is not rendered by this crate.
    #[error("unsupported output format: {format}")]
    UnsupportedFormat { format: String },

    /// A response document could not be decoded.
    #[error("invalid response document: {message}")]
    InvalidResponse { message: String },
}

impl PrintError {
    /// Create an UnsupportedFormat error.
    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
        }
    }

    /// Create an InvalidResponse error.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    /// Broken pipes are expected when output is piped into `head` and friends.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}

impl From<serde_json::Error> for PrintError {
    fn from(err: serde_json::Error) -> Self {
        Self::invalid_response(err.to_string())
    }
}

/// Result type using PrintError.
pub type PrintResult<T> = Result<T, PrintError>;
