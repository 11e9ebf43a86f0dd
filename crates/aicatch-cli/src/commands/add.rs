//! `aicatch add` command.

use clap::Args;

use aicatch_config::AicatchConfig;
use aicatch_console::AdminPanel;
use aicatch_types::ToolFields;

use crate::{output, shared};

/// Add a tool to the catalog.
#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub category: String,
    #[arg(long)]
    pub description: String,
    /// Tool URL.
    #[arg(long)]
    pub link: String,
    #[command(flatten)]
    pub client: shared::ClientArgs,
}

/// Executes the add command.
pub async fn execute(args: &AddArgs, config: &AicatchConfig) -> anyhow::Result<()> {
    let client = shared::build_client(&args.client, config)?;
    let mut panel = AdminPanel::new(client);
    panel.form = ToolFields::new(&args.name, &args.category, &args.description, &args.link);

    let result = panel.submit().await;
    if let Some(notice) = panel.notice() {
        output::print_notice(notice);
    }
    let tool = result.map_err(|e| shared::report("add failed", e))?;
    println!("  id: {}", tool.id);
    Ok(())
}
