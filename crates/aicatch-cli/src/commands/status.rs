//! `aicatch status` command.
//!
//! Displays local catalog statistics and the effective configuration.

use clap::Args;

use aicatch_config::AicatchConfig;
use aicatch_types::category_options;

use crate::shared;

/// Show catalog statistics and configuration.
#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Database path (overrides store.database_path).
    #[arg(long)]
    pub db: Option<String>,
}

/// Executes the status command.
pub async fn execute(args: &StatusArgs, config: &AicatchConfig) -> anyhow::Result<()> {
    let db_path = shared::resolve_db(&args.db, config);
    let repo = shared::open_repository(&db_path)?;
    let tools = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("store query: {e}"))?;
    let categories = category_options(&tools).len() - 1;

    println!("AICatch Status");
    println!("{}", "─".repeat(40));
    println!("  Version    : {}", env!("CARGO_PKG_VERSION"));
    println!("  Database   : {db_path}");
    println!();
    println!("Catalog");
    println!("  Tools      : {}", tools.len());
    println!("  Categories : {categories}");
    println!();
    println!("Server");
    println!("  Address    : {}", config.server.bind_address());
    println!("  Policy     : {}", config.auth.policy);
    println!("  Theme      : {}", config.ui.theme);
    println!();
    println!("Client");
    println!("  Server URL  : {}", config.client.base_url);
    println!("  Concurrency : {} parallel requests", config.client.concurrency);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aicatch_store_sqlite::SqliteToolRepository;
    use aicatch_registry::ToolRepository;
    use aicatch_types::{ToolDraft, ToolFields};

    #[tokio::test]
    async fn status_empty_store() {
        let dir = tempfile::tempdir().expect("tmp");
        let db = dir.path().join("st.db").to_str().expect("u").to_string();
        let args = StatusArgs { db: Some(db) };
        assert!(execute(&args, &AicatchConfig::default()).await.is_ok());
    }

    #[tokio::test]
    async fn status_with_tools() {
        let dir = tempfile::tempdir().expect("tmp");
        let db = dir.path().join("st2.db").to_str().expect("u").to_string();
        {
            let repo = SqliteToolRepository::open(&db).expect("open");
            repo.create(&ToolDraft::from(ToolFields::new("a", "X", "d", "https://x.example")))
                .await
                .expect("seed");
        }
        let args = StatusArgs { db: Some(db) };
        assert!(execute(&args, &AicatchConfig::default()).await.is_ok());
    }
}
