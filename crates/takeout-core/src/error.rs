//! Error types for takeout-core

use std::path::PathBuf;

/// Result type for takeout-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in takeout-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Target directory missing or not a directory
    #[error("Target directory not found: {path}")]
    TargetNotFound { path: PathBuf },

    /// Format-detection capability could not be reached
    #[error("Format detection unavailable: {message}")]
    DetectorUnavailable { message: String },

    /// Metadata-embedding capability could not be reached
    #[error("Metadata embedding unavailable: {message}")]
    EmbedderUnavailable { message: String },

    /// An external command exited with a failure status
    #[error("{program} exited with status {code}: {stderr}")]
    CommandFailed {
        program: String,
        code: i32,
        stderr: String,
    },

    /// Filesystem error from takeout-fs
    #[error(transparent)]
    Fs(#[from] takeout_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
