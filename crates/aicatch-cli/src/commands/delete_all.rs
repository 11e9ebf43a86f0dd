//! `aicatch delete-all` command.
//!
//! Removes every tool in one request. Rows named exactly `--exclude`
//! survive. There is no confirmation prompt.

use clap::Args;

use aicatch_config::AicatchConfig;
use aicatch_console::AdminPanel;

use crate::{output, shared};

/// Remove every tool, optionally keeping one name.
#[derive(Debug, Args)]
pub struct DeleteAllArgs {
    /// Keep tools with exactly this name.
    #[arg(long)]
    pub exclude: Option<String>,
    #[command(flatten)]
    pub client: shared::ClientArgs,
}

/// Executes the delete-all command.
pub async fn execute(args: &DeleteAllArgs, config: &AicatchConfig) -> anyhow::Result<()> {
    let client = shared::build_client(&args.client, config)?;
    let mut panel = AdminPanel::new(client);
    panel.exclude_name = args.exclude.clone().unwrap_or_default();

    let result = panel.delete_all().await;
    if let Some(notice) = panel.notice() {
        output::print_notice(notice);
    }
    let deleted = result.map_err(|e| shared::report("delete-all failed", e))?;
    println!("  {deleted} tool(s) deleted");
    Ok(())
}
