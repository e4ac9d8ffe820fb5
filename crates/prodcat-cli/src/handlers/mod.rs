//! Command handlers.
//!
//! Each handler takes the composed [`CliContext`](crate::bootstrap::CliContext)
//! and delegates to the ports; printing stays here, decision logic is
//! factored into plain functions so it can be tested with mocked ports.

pub mod categories;
pub mod fetch;
pub mod list;
pub mod status;
