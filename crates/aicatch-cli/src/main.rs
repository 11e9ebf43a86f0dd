//! AICatch CLI - AI tool catalog server and admin console.

use clap::{Parser, Subcommand};
use tracing_subscriber::fmt::format::FmtSpan;

mod commands;
mod input;
mod output;
pub(crate) mod shared;
#[cfg(test)]
mod test_support;

/// AICatch - discover, curate and serve a catalog of AI tools.
#[derive(Debug, Parser)]
#[command(name = "aicatch", version, about)]
struct Cli {
    /// Configuration file path (TOML).
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log output format: plain (default) or json (for log aggregation).
    #[arg(long, global = true, default_value = "plain", value_parser = ["plain", "json"])]
    log_format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start the catalog HTTP server (API + browse page).
    Serve(commands::serve::ServeArgs),
    /// List every tool in the catalog.
    List(commands::list::ListArgs),
    /// Show one tool.
    Get(commands::get::GetArgs),
    /// Add a tool.
    Add(commands::add::AddArgs),
    /// Replace all fields of a tool.
    Edit(commands::edit::EditArgs),
    /// Remove one or more tools (asks for confirmation).
    Remove(commands::remove::RemoveArgs),
    /// Remove every tool, optionally keeping one name.
    DeleteAll(commands::delete_all::DeleteAllArgs),
    /// Import tools from a JSON array.
    Import(commands::import::ImportArgs),
    /// Search and filter the catalog.
    Browse(commands::browse::BrowseArgs),
    /// Show local database statistics and effective configuration.
    Status(commands::status::StatusArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = aicatch_config::load_config(cli.config.as_deref())?;

    // Initialize tracing.
    let filter = match cli.verbose {
        0 => config.logging.level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    match cli.log_format.as_str() {
        "json" => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .init(),
        _ => tracing_subscriber::fmt().with_env_filter(filter).init(),
    };

    tracing::debug!(
        config_file = ?cli.config,
        db = %config.store.database_path,
        policy = %config.auth.policy,
        "AICatch starting"
    );

    match &cli.command {
        Commands::Serve(args) => commands::serve::execute(args, &config).await,
        Commands::List(args) => commands::list::execute(args, &config).await,
        Commands::Get(args) => commands::get::execute(args, &config).await,
        Commands::Add(args) => commands::add::execute(args, &config).await,
        Commands::Edit(args) => commands::edit::execute(args, &config).await,
        Commands::Remove(args) => commands::remove::execute(args, &config).await,
        Commands::DeleteAll(args) => commands::delete_all::execute(args, &config).await,
        Commands::Import(args) => commands::import::execute(args, &config).await,
        Commands::Browse(args) => commands::browse::execute(args, &config).await,
        Commands::Status(args) => commands::status::execute(args, &config).await,
    }
}
