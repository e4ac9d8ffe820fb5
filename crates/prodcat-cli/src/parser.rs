//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;
use std::path::PathBuf;

use crate::commands::Commands;

/// Command-line interface definition for the product catalog tool.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "prodcat")]
#[command(about = "Fetch, cache and browse a product catalog")]
#[command(version)]
pub struct Cli {
    /// Override the database file for this invocation
    #[arg(long = "database", global = true, env = "PRODCAT_DATABASE")]
    pub database: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        // Verify the CLI parser can be constructed
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from(["prodcat", "--verbose", "--database", "/tmp/p.db", "list"]);
        assert!(cli.verbose);
        assert_eq!(cli.database, Some(PathBuf::from("/tmp/p.db")));
    }
}
