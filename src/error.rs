//! Error types for vue-doctor operations.
//!
//! This module defines [`DoctorError`] and a [`Result`] type alias.
//!
//! # Error Handling Strategy
//!
//! - External command failures never reach the report. The
//!   [`Shell`](crate::shell::Shell) seam turns them into empty output.
//! - `DoctorError` covers the few failures that can still surface to
//!   `main`, which logs them and exits successfully anyway.
//! - Use `anyhow::Error` (via `DoctorError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for vue-doctor operations.
#[derive(Debug, Error)]
pub enum DoctorError {
    /// Shell process could not be started.
    #[error("Failed to run command '{command}': {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Project root does not exist or is not a directory.
    #[error("Project directory not found: {path}")]
    ProjectNotFound { path: PathBuf },

    /// IO error wrapper (writing the report).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for vue-doctor operations.
pub type Result<T> = std::result::Result<T, DoctorError>;
