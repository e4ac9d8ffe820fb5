//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter: the `SQLite` store (via prodcat-store) and the
//! remote listing client (via prodcat-remote). Command handlers receive
//! port trait objects and never touch sqlx or reqwest directly.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use prodcat_core::paths::database_path;
use prodcat_core::ports::{CatalogSource, CatalogStore};
use prodcat_remote::{DefaultCatalogClient, RemoteConfig};
use prodcat_store::{SqliteCatalogStore, setup_database};

use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Path to the `SQLite` database file.
    pub database_path: PathBuf,
    /// Remote listing client configuration.
    pub remote: RemoteConfig,
}

impl CliConfig {
    /// Create config with default paths, honoring an optional override.
    ///
    /// Fails with [`CliError::Config`] when no platform data directory can
    /// be resolved or created.
    pub fn with_defaults(database_override: Option<PathBuf>) -> Result<Self, CliError> {
        let database_path = match database_override {
            Some(path) => path,
            None => database_path()?,
        };

        Ok(Self {
            database_path,
            remote: RemoteConfig::default(),
        })
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// Snapshot store for the cached catalog.
    pub store: Arc<dyn CatalogStore>,
    /// Remote catalog source.
    pub source: Arc<dyn CatalogSource>,
    /// Resolved database path, for display.
    pub database_path: PathBuf,
}

impl CliContext {
    /// Access the snapshot store.
    pub fn store(&self) -> &Arc<dyn CatalogStore> {
        &self.store
    }

    /// Access the remote source.
    pub fn source(&self) -> &Arc<dyn CatalogSource> {
        &self.source
    }
}

/// Bootstrap the CLI application.
///
/// Opens the database (creating file and schema if missing), builds the
/// remote client, and assembles the context handed to handlers.
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let pool = setup_database(&config.database_path).await?;
    let store: Arc<dyn CatalogStore> = Arc::new(SqliteCatalogStore::new(pool));

    let client = DefaultCatalogClient::new(config.remote)?;
    let source: Arc<dyn CatalogSource> = Arc::new(client);

    Ok(CliContext {
        store,
        source,
        database_path: config.database_path,
    })
}
