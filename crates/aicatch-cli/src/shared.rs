//! Shared helpers used across CLI commands.
//!
//! Centralises opening the SQLite store and building the HTTP catalog
//! client, so every command resolves flags against the configuration
//! the same way.

use std::sync::Arc;

use aicatch_config::AicatchConfig;
use aicatch_console::{ConsoleError, HttpCatalogClient};
use aicatch_registry::ToolRepository;
use aicatch_store_sqlite::SqliteToolRepository;
use clap::Args;

use crate::output;

/// Connection flags shared by every command that talks to a server.
#[derive(Debug, Clone, Default, Args)]
pub struct ClientArgs {
    /// Catalog server URL (overrides client.base_url).
    #[arg(long)]
    pub url: Option<String>,
    /// Bearer token (overrides client.token).
    #[arg(long)]
    pub token: Option<String>,
}

/// Resolves the database path: `--db` first, then `store.database_path`.
pub fn resolve_db(db: &Option<String>, config: &AicatchConfig) -> String {
    db.clone()
        .unwrap_or_else(|| config.store.database_path.clone())
}

/// Opens the SQLite tool store, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if the database file cannot be created or opened.
pub fn open_repository(path: &str) -> anyhow::Result<Arc<dyn ToolRepository>> {
    if let Some(parent) = std::path::Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let repo =
        SqliteToolRepository::open(path).map_err(|e| anyhow::anyhow!("store error: {e}"))?;
    Ok(Arc::new(repo))
}

/// Builds the HTTP catalog client from flags and `client.*` settings.
///
/// # Errors
///
/// Returns an error if the underlying HTTP client cannot be built.
pub fn build_client(
    args: &ClientArgs,
    config: &AicatchConfig,
) -> anyhow::Result<Arc<HttpCatalogClient>> {
    let base_url = args
        .url
        .clone()
        .unwrap_or_else(|| config.client.base_url.clone());
    let token = args.token.clone().or_else(|| config.client.token.clone());
    let client = HttpCatalogClient::new(base_url, token, config.client.timeout())
        .map_err(|e| anyhow::anyhow!("client init error: {e}"))?;
    tracing::debug!(url = client.base_url(), "catalog client ready");
    Ok(Arc::new(client))
}

/// Prints the diagnostic of a console failure and wraps it for `anyhow`.
pub fn report(context: &str, err: ConsoleError) -> anyhow::Error {
    output::print_diagnostic(&err);
    anyhow::anyhow!("{context}: {err}")
}
