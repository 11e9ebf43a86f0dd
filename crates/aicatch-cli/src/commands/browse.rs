//! `aicatch browse` command.

use clap::Args;

use aicatch_config::AicatchConfig;
use aicatch_console::BrowseView;
use aicatch_types::ALL_CATEGORIES;

use crate::{output, shared};

/// Search and filter the catalog.
#[derive(Debug, Args)]
pub struct BrowseArgs {
    /// Case-insensitive text matched against tool names.
    #[arg(short, long, default_value = "")]
    pub search: String,
    /// Exact category, or "All".
    #[arg(long, default_value = ALL_CATEGORIES)]
    pub category: String,
    #[command(flatten)]
    pub client: shared::ClientArgs,
}

/// Executes the browse command.
pub async fn execute(args: &BrowseArgs, config: &AicatchConfig) -> anyhow::Result<()> {
    let client = shared::build_client(&args.client, config)?;
    let mut view = BrowseView::new(client);
    view.load()
        .await
        .map_err(|e| shared::report("failed to load tools", e))?;
    view.set_search(&args.search);
    view.set_category(&args.category);

    println!("🔍 AICatch - Discover AI Tools");
    println!("Categories: {}", view.categories().join(", "));
    println!();

    let visible = view.visible();
    if visible.is_empty() {
        output::print_info("No tools match your search.");
        return Ok(());
    }
    for tool in &visible {
        output::print_card(tool);
        println!();
    }
    println!("{} tool(s) shown", visible.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::spawn_server;

    #[tokio::test]
    async fn browse_empty_catalog() {
        let (client, _repo) = spawn_server().await;
        let args = BrowseArgs {
            search: "al".into(),
            category: ALL_CATEGORIES.into(),
            client,
        };
        assert!(execute(&args, &AicatchConfig::default()).await.is_ok());
    }
}
