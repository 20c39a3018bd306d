//! Error types for env file loading.
//!
//! Responsibilities:
//! - Define error variants for reading, locating, merging and value parsing.
//! - Keep a distinguishable "not found" signal for strict callers.
//!
//! Does NOT handle:
//! - Missing-file permissiveness (decided by the caller, see `parser.rs` and `loader`).
//!
//! Invariants:
//! - Errors carry paths, variable names and `io::ErrorKind` only.
//! - Errors NEVER include raw env file contents or values, which may be secrets.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading, locating or merging env files.
#[derive(Error, Debug)]
pub enum EnvError {
    /// The env file does not exist.
    ///
    /// Only returned by strict entry points; permissive ones map it to an empty result.
    #[error("Env file not found at {}", .path.display())]
    NotFound { path: PathBuf },

    /// The env file exists but could not be read (permissions, invalid UTF-8, ...).
    #[error(
        "Failed to read env file at {}: {kind}. Hint: set DOTENV_DISABLED=1 to skip .env loading",
        .path.display()
    )]
    Io { path: PathBuf, kind: ErrorKind },

    /// The current working directory could not be determined.
    #[error("Unable to determine current directory: {kind}")]
    CurrentDir { kind: ErrorKind },

    /// An entry cannot be written to the target store.
    #[error("Cannot set environment variable {key:?}: {reason}")]
    InvalidEntry { key: String, reason: &'static str },

    /// A variable is present but does not parse as the requested type.
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },
}

impl EnvError {
    /// Returns true if this error signals a missing env file.
    pub fn is_not_found(&self) -> bool {
        matches!(self, EnvError::NotFound { .. })
    }
}
