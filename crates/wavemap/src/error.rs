//! Error types for wavemap.
//!
//! This module defines all error types used throughout the wavemap crate.
//! Only root-level failures are errors; per-folder anomalies are reported
//! through the diagnostics channel instead and never abort a scan.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for wavemap operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Scan Errors ===
    /// The scan root does not exist.
    #[error("projects root not found: {path}")]
    RootNotFound {
        /// The missing root path.
        path: PathBuf,
    },

    /// The scan root exists but is not a directory.
    #[error("projects root is not a directory: {path}")]
    NotADirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// Listing the scan root failed.
    #[error("failed to read projects root {path}: {source}")]
    RootRead {
        /// The root path being listed.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// No project with the requested id exists under the root.
    #[error("no project named '{id}' under the projects root")]
    ProjectNotFound {
        /// The requested folder name.
        id: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for wavemap operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a root-not-found error.
    #[must_use]
    pub fn root_not_found(path: impl Into<PathBuf>) -> Self {
        Self::RootNotFound { path: path.into() }
    }

    /// Create a not-a-directory error.
    #[must_use]
    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        Self::NotADirectory { path: path.into() }
    }

    /// Create a project-not-found error.
    #[must_use]
    pub fn project_not_found(id: impl Into<String>) -> Self {
        Self::ProjectNotFound { id: id.into() }
    }

    /// Check if this error means the scan root is missing or unusable.
    #[must_use]
    pub fn is_root_error(&self) -> bool {
        matches!(
            self,
            Self::RootNotFound { .. } | Self::NotADirectory { .. } | Self::RootRead { .. }
        )
    }
}
