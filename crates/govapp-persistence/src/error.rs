//! Persistence error types.
//!
//! Every storage operation returns a structured error with a user-facing
//! message. The store treats all of them as non-fatal.

use std::path::PathBuf;
use thiserror::Error;

/// Persistence operation error.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// File I/O error.
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot could not be encoded.
    #[error("Failed to serialize state for key '{key}'")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Stored record is not a valid snapshot.
    #[error("Failed to deserialize state stored under key '{key}'")]
    Deserialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Stored record was written with a different schema version.
    #[error("Stored state version {found} does not match expected version {expected}")]
    UnsupportedVersion {
        key: String,
        found: u32,
        expected: u32,
    },

    /// Atomic write failed (temp file couldn't be renamed).
    #[error("Failed to complete save operation")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No platform data directory could be determined.
    #[error("No data directory available on this platform")]
    NoDataDir,
}

impl PersistenceError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => {
                format!("Could not {} the file at {}", operation, path.display())
            }
            Self::Serialization { .. } => {
                "Your session could not be saved on this device.".to_string()
            }
            Self::Deserialization { .. } => {
                "Saved session data was unreadable and has been reset.".to_string()
            }
            Self::UnsupportedVersion { found, .. } => {
                format!(
                    "Saved session data from app version {} was ignored. Please sign in again.",
                    found
                )
            }
            Self::AtomicWriteFailed { target_path, .. } => {
                format!(
                    "Could not save to {}. Please check disk space and permissions.",
                    target_path.display()
                )
            }
            Self::NoDataDir => {
                "Session data will not be kept after the app closes.".to_string()
            }
        }
    }
}

/// Result type alias for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;
