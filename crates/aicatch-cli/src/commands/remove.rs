//! `aicatch remove` command.
//!
//! Deletes the given tools with bounded concurrency after a confirmation
//! prompt (skipped with `--yes`).

use std::collections::BTreeSet;

use clap::Args;
use dialoguer::Confirm;

use aicatch_config::AicatchConfig;
use aicatch_console::{AdminPanel, ConsoleError};
use aicatch_types::ToolId;

use crate::{output, shared};

/// Remove one or more tools.
#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Tool IDs to remove.
    #[arg(required = true, num_args = 1..)]
    pub ids: Vec<String>,
    /// Skip the confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
    #[command(flatten)]
    pub client: shared::ClientArgs,
}

/// Resolves the confirmation: `--yes` skips `ask`, and a prompt that
/// fails (no terminal, interrupted) counts as declined.
fn confirmed(yes: bool, prompt: &str, ask: impl FnOnce(&str) -> dialoguer::Result<bool>) -> bool {
    if yes {
        return true;
    }
    match ask(prompt) {
        Ok(answer) => answer,
        Err(e) => {
            tracing::debug!(error = %e, "confirmation prompt unavailable");
            false
        }
    }
}

fn confirm_on_terminal(prompt: &str) -> dialoguer::Result<bool> {
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
}

/// Executes the remove command.
pub async fn execute(args: &RemoveArgs, config: &AicatchConfig) -> anyhow::Result<()> {
    let ids = args
        .ids
        .iter()
        .map(ToolId::new)
        .collect::<Result<BTreeSet<_>, _>>()
        .map_err(|e| anyhow::anyhow!("invalid tool ID: {e}"))?;

    let client = shared::build_client(&args.client, config)?;
    let mut panel = AdminPanel::new(client).with_concurrency(config.client.concurrency);
    panel
        .load()
        .await
        .map_err(|e| shared::report("failed to load tools", e))?;
    for id in &ids {
        panel.toggle_selected(id);
    }

    let yes = args.yes;
    let result = panel
        .delete_selected(|prompt| confirmed(yes, prompt, confirm_on_terminal))
        .await;
    let report = match result {
        Ok(report) => report,
        Err(ConsoleError::Cancelled) => {
            output::print_info("Nothing removed.");
            return Ok(());
        }
        Err(e) => return Err(shared::report("remove failed", e)),
    };

    for (id, message) in &report.failed {
        output::print_error(&format!("{id}: {message}"));
    }
    if let Some(notice) = panel.notice() {
        output::print_notice(notice);
    }
    if !report.is_success() {
        anyhow::bail!(
            "{} of {} tools could not be removed",
            report.failed.len(),
            report.total()
        );
    }
    Ok(())
}
