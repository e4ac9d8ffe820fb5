//! Path utilities for prodcat data directories.
//!
//! Canonical path resolution for the local database. Returns `PathBuf` and
//! `PathError` for clear error handling; no interactive I/O here - the CLI
//! handles user-facing messages separately.

mod database;
mod error;
mod platform;

pub use database::database_path;
pub use error::PathError;
pub use platform::data_root;
