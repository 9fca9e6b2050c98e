//! Centralized error types for mailview.
//!
//! The decode/segment/select core is total over its input domain and never
//! fails; errors here belong to the surrounding surface (reading message
//! files, parsing pre-decoded JSON, config handling).

use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the mailview library.
#[derive(Error, Debug)]
pub enum MailviewError {
    /// I/O error with the associated file path.
    #[error("I/O error reading '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The specified message file does not exist.
    #[error("Message file not found: {0}")]
    FileNotFound(PathBuf),

    /// A pre-decoded JSON input could not be parsed.
    #[error("Invalid pre-decoded message JSON in '{path}': {reason}")]
    InvalidJson { path: PathBuf, reason: String },

    /// An unknown input format name was requested.
    #[error("Unknown input format '{0}'. Supported: raw, json, auto")]
    UnknownFormat(String),
}

/// Convenience alias for `Result<T, MailviewError>`.
pub type Result<T> = std::result::Result<T, MailviewError>;

impl MailviewError {
    /// Create an `Io` variant from a path and an `io::Error`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
