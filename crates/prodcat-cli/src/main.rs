//! CLI entry point - the composition root.
//!
//! Wires infrastructure via bootstrap and dispatches commands to handlers.
//! Handlers only see port trait objects through `CliContext`.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use prodcat_cli::{Cli, CliConfig, Commands, bootstrap, handlers};
use prodcat_core::CatalogQuery;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before parsing so PRODCAT_DATABASE works
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging; --verbose raises the default level
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let Some(command) = cli.command else {
        // No command provided - show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = match CliConfig::with_defaults(cli.database) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    };
    let ctx = bootstrap(config).await?;

    let result = match command {
        Commands::Fetch { force } => handlers::fetch::execute(&ctx, force).await,
        Commands::List {
            category,
            search,
            sort,
        } => {
            let query = CatalogQuery {
                category,
                search,
                sort,
            };
            handlers::list::execute(&ctx, &query).await
        }
        Commands::Categories => handlers::categories::execute(&ctx).await,
        Commands::Status => handlers::status::execute(&ctx).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }

    Ok(())
}
