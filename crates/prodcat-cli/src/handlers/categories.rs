//! Categories command handler.
//!
//! Shows the distinct categories present in the cached snapshot, the
//! aggregate a UI would use to build its category selector.

use prodcat_core::summarize_categories;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::state::{CatalogState, load_state};

/// Execute the categories command.
pub async fn execute(ctx: &CliContext) -> Result<(), CliError> {
    match load_state(ctx.store()).await? {
        CatalogState::Empty => {
            println!("No catalog cached yet.");
            println!("Run 'prodcat fetch' to load products from the remote catalog.");
        }
        CatalogState::Populated(products) => {
            let summaries = summarize_categories(&products);
            for summary in &summaries {
                println!("{:<24} {}", summary.category, summary.count);
            }
            println!("\n{} categorie(s).", summaries.len());
        }
    }
    Ok(())
}
