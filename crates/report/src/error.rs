//! Export errors.

use std::path::PathBuf;

/// Failure while writing a report to disk.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The output file could not be created.
    #[error("failed to create {path}: {source}")]
    Create {
        /// Target path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// Writing rows failed.
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
    /// JSON serialization failed.
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}
