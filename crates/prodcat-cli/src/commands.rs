//! Main commands enum and argument parsing helpers.

use clap::Subcommand;

use prodcat_core::SortMode;

/// Available commands for the product catalog tool.
#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the product catalog from the remote listing API
    Fetch {
        /// Replace an existing snapshot instead of refusing
        #[arg(short, long)]
        force: bool,
    },

    /// List cached products with optional filters and sorting
    List {
        /// Only show products in this category (exact match)
        #[arg(short, long)]
        category: Option<String>,

        /// Only show products whose name or description contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Sort order: price-asc, price-desc, date-asc, date-desc
        #[arg(long, value_parser = parse_sort_mode)]
        sort: Option<SortMode>,
    },

    /// Show distinct categories in the cached catalog with counts
    Categories,

    /// Show cache state and database location
    Status,
}

/// clap value parser for [`SortMode`].
fn parse_sort_mode(value: &str) -> Result<SortMode, String> {
    SortMode::parse(value).ok_or_else(|| {
        format!("unknown sort mode '{value}' (expected price-asc, price-desc, date-asc, date-desc)")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Cli;
    use clap::Parser;

    #[test]
    fn test_list_flags_parse() {
        let cli = Cli::parse_from([
            "prodcat", "list", "--category", "beauty", "--search", "mascara", "--sort",
            "price-desc",
        ]);
        match cli.command {
            Some(Commands::List {
                category,
                search,
                sort,
            }) => {
                assert_eq!(category.as_deref(), Some("beauty"));
                assert_eq!(search.as_deref(), Some("mascara"));
                assert_eq!(sort, Some(SortMode::PriceDesc));
            }
            _ => panic!("expected list command"),
        }
    }

    #[test]
    fn test_invalid_sort_mode_is_rejected() {
        let result = Cli::try_parse_from(["prodcat", "list", "--sort", "alphabetical"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_fetch_force_flag() {
        let cli = Cli::parse_from(["prodcat", "fetch", "--force"]);
        match cli.command {
            Some(Commands::Fetch { force }) => assert!(force),
            _ => panic!("expected fetch command"),
        }
    }
}
