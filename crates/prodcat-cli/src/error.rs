//! CLI-specific error types and mappings.
//!
//! Maps port errors to user-facing messages and exit codes.

use prodcat_core::{PathError, SourceError, StoreError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Remote fetch failure.
    #[error("Fetch failed: {0}")]
    Fetch(String),

    /// Snapshot store failure.
    #[error("Store error: {0}")]
    Store(String),

    /// Configuration error (paths, environment).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 1: General error
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Fetch(_) => 1,
            Self::Store(_) => 74,  // EX_IOERR
            Self::Config(_) => 78, // EX_CONFIG
        }
    }
}

impl From<SourceError> for CliError {
    fn from(err: SourceError) -> Self {
        Self::Fetch(err.to_string())
    }
}

impl From<StoreError> for CliError {
    fn from(err: StoreError) -> Self {
        Self::Store(err.to_string())
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        Self::Config(err.to_string())
    }
}
