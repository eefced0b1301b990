//! Report Errors

use std::path::PathBuf;

/// Failures reading or writing report documents
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Filesystem read failed
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
    /// Filesystem write failed
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// File that could not be written
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
    /// File content is not a valid document
    #[error("Invalid document in {}: {source}", path.display())]
    Parse {
        /// Offending file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },
    /// Document could not be serialized
    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
