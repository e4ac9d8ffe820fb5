//! CLI adapter for prodcat.
//!
//! The binary entry point lives in `main.rs`; this library exposes the
//! parser, command definitions, bootstrap and handlers so they can be
//! tested without spawning the binary.

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;
pub mod state;

pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
