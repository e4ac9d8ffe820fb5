//! Status command handler.
//!
//! Reports the startup state: whether a snapshot exists, how many items
//! it holds, and where the database lives.

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::state::{CatalogState, load_state};

/// Execute the status command.
pub async fn execute(ctx: &CliContext) -> Result<(), CliError> {
    println!("Database: {}", ctx.database_path.display());

    match load_state(ctx.store()).await? {
        CatalogState::Empty => {
            println!("Catalog:  empty (run 'prodcat fetch' to load products)");
        }
        CatalogState::Populated(products) => {
            println!("Catalog:  {} product(s) cached", products.len());
            if let Some(date) = products.iter().map(|p| p.date).max() {
                println!("Fetched:  {}", date.format("%d.%m.%Y"));
            }
        }
    }
    Ok(())
}
