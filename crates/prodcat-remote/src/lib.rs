//! Remote product listing client for prodcat.
//!
//! Fetches the product catalog from a dummyjson-style listing API and maps
//! it into domain products at the port boundary. External code should use
//! [`DefaultCatalogClient`] through the core `CatalogSource` trait.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// Allow private types in public type alias - DefaultCatalogClient is meant to
// be used through the CatalogSource trait, not its internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod port;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultCatalogClient;

// Configuration
pub use config::RemoteConfig;

// Errors
pub use error::{RemoteError, RemoteResult};
