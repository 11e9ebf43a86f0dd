//! `aicatch import` command.
//!
//! Reads a JSON array of tools from a file, stdin or `--json` and creates
//! every complete entry with bounded concurrency.

use clap::Args;

use aicatch_config::AicatchConfig;
use aicatch_console::{ImportOutcome, ImportPanel, ItemOutcome};

use crate::{input, output, shared};

/// Import tools from a JSON array.
#[derive(Debug, Args)]
pub struct ImportArgs {
    /// JSON file to import, or `-` for stdin.
    pub file: Option<String>,
    /// Inline JSON array (used when no FILE is given).
    #[arg(long)]
    pub json: Option<String>,
    #[command(flatten)]
    pub client: shared::ClientArgs,
}

/// Executes the import command.
pub async fn execute(args: &ImportArgs, config: &AicatchConfig) -> anyhow::Result<()> {
    let text = input::resolve_input(args.json.as_deref(), args.file.as_deref())?;
    let client = shared::build_client(&args.client, config)?;
    let mut panel = ImportPanel::new(client).with_concurrency(config.client.concurrency);
    panel.input = text;

    let result = panel.import().await;
    if let Ok(ImportOutcome::Completed(report)) = &result {
        for (index, item) in report.items.iter().enumerate() {
            match item {
                ItemOutcome::Created(tool) => {
                    tracing::debug!(index, id = %tool.id, "imported");
                }
                ItemOutcome::Skipped { missing } => output::print_warning(&format!(
                    "entry {index} skipped: missing {}",
                    missing.join(", ")
                )),
                ItemOutcome::Failed { message } => {
                    output::print_error(&format!("entry {index}: {message}"));
                }
            }
        }
        output::print_info(&report.summary());
    }
    if let Some(notice) = panel.notice() {
        output::print_notice(notice);
    }

    match result.map_err(|e| shared::report("import failed", e))? {
        ImportOutcome::Completed(report) if !report.is_success() => {
            anyhow::bail!("import incomplete: {}", report.summary())
        }
        _ => Ok(()),
    }
}
