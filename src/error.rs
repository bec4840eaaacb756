//! Error type shared by every stage of a run.

use std::path::PathBuf;

/// Errors that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// The configured inputs are unusable (missing root, empty extension set,
    /// malformed config file).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A filesystem read or write failed.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        /// Path the failing operation touched.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The manifest could not be encoded as JSON.
    #[error("failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Command-line arguments were rejected (or help/version was requested).
    #[error(transparent)]
    Cli(#[from] clap::Error),
}

impl RosterError {
    /// Wraps an I/O error with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RosterError>;
