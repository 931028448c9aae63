//! Error types.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that stop the dashboard from starting or running.
#[derive(Debug, Error)]
pub enum Error {
    /// Raw mode, alternate screen or terminal size query failed.
    #[error("terminal i/o failed: {0}")]
    Terminal(#[from] io::Error),

    /// The log file could not be opened.
    #[error("failed to open log file {path}: {source}")]
    LogFile {
        /// Requested log file path.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },

    /// A global tracing subscriber was already installed.
    #[error("failed to install log subscriber: {0}")]
    Logging(String),
}

/// A live-channel payload that is not a block record.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Not JSON, or JSON with missing or mistyped fields.
    #[error("block payload is not a valid record: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for library results.
pub type Result<T, E = Error> = std::result::Result<T, E>;
