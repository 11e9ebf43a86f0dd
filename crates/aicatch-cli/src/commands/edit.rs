//! `aicatch edit` command.
//!
//! Replaces all four fields of an existing tool; partial edits are not
//! supported.

use clap::Args;

use aicatch_config::AicatchConfig;
use aicatch_console::AdminPanel;
use aicatch_types::{ToolFields, ToolId};

use crate::{output, shared};

/// Replace all fields of a tool.
#[derive(Debug, Args)]
pub struct EditArgs {
    /// Tool ID.
    pub id: String,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub category: String,
    #[arg(long)]
    pub description: String,
    #[arg(long)]
    pub link: String,
    #[command(flatten)]
    pub client: shared::ClientArgs,
}

/// Executes the edit command.
pub async fn execute(args: &EditArgs, config: &AicatchConfig) -> anyhow::Result<()> {
    let id = ToolId::new(&args.id).map_err(|e| anyhow::anyhow!("invalid tool ID: {e}"))?;
    let client = shared::build_client(&args.client, config)?;
    let mut panel = AdminPanel::new(client);
    panel
        .load()
        .await
        .map_err(|e| shared::report("failed to load tools", e))?;
    panel
        .begin_edit(&id)
        .map_err(|e| shared::report(&format!("cannot edit {id}"), e))?;
    panel.form = ToolFields::new(&args.name, &args.category, &args.description, &args.link);

    let result = panel.submit().await;
    if let Some(notice) = panel.notice() {
        output::print_notice(notice);
    }
    result.map_err(|e| shared::report("edit failed", e))?;
    Ok(())
}
