//! Bulk import of tools from pasted JSON.
//!
//! The input must be a JSON array. Entries missing any of the four fields
//! are skipped; the rest are created with bounded concurrency and every
//! entry gets its own outcome.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use aicatch_types::{Tool, ToolDraft, ToolFields};
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::admin::{SubmitGuard, DEFAULT_CONCURRENCY};
use crate::bulk::run_bounded;
use crate::client::CatalogApi;
use crate::error::ConsoleError;
use crate::notice::Notice;

/// Input that cannot be imported at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("Invalid JSON: {0}")]
    Parse(String),
    #[error("Invalid JSON: Must be an array of tools.")]
    NotAnArray,
}

/// One parsed entry of the input array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannedEntry {
    /// All four fields present.
    Valid(ToolFields),
    /// At least one field absent, empty or not a string.
    Skipped { missing: Vec<&'static str> },
}

/// Parsed import input, one entry per array element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportPlan {
    pub entries: Vec<PlannedEntry>,
}

impl ImportPlan {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries that will be sent to the server.
    pub fn valid_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, PlannedEntry::Valid(_)))
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.len() - self.valid_count()
    }
}

fn string_field(entry: &Value, key: &str) -> Option<String> {
    entry.get(key).and_then(Value::as_str).map(String::from)
}

fn plan_entry(index: usize, entry: &Value) -> PlannedEntry {
    let draft = ToolDraft {
        name: string_field(entry, "name"),
        category: string_field(entry, "category"),
        description: string_field(entry, "description"),
        link: string_field(entry, "link"),
    };
    let missing = draft.missing_fields();
    match draft.require_all() {
        Ok(fields) => PlannedEntry::Valid(fields),
        Err(_) => {
            warn!(index, missing = ?missing, "skipping import entry with missing fields");
            PlannedEntry::Skipped { missing }
        }
    }
}

/// Parses pasted JSON into an [`ImportPlan`].
///
/// # Errors
///
/// `ImportError::Parse` if the text is not JSON, `ImportError::NotAnArray`
/// if it is JSON but not an array.
pub fn parse_import(text: &str) -> Result<ImportPlan, ImportError> {
    let value: Value = serde_json::from_str(text).map_err(|e| ImportError::Parse(e.to_string()))?;
    let Value::Array(items) = value else {
        return Err(ImportError::NotAnArray);
    };
    let entries = items
        .iter()
        .enumerate()
        .map(|(i, entry)| plan_entry(i, entry))
        .collect();
    Ok(ImportPlan { entries })
}

/// Result for a single input entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    Created(Tool),
    Skipped { missing: Vec<&'static str> },
    Failed { message: String },
}

/// Per-entry results of an import, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub items: Vec<ItemOutcome>,
}

impl ImportReport {
    pub fn created(&self) -> usize {
        self.count(|o| matches!(o, ItemOutcome::Created(_)))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, ItemOutcome::Skipped { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, ItemOutcome::Failed { .. }))
    }

    fn count(&self, pred: impl Fn(&ItemOutcome) -> bool) -> usize {
        self.items.iter().filter(|o| pred(o)).count()
    }

    /// True when no create request failed. Skipped entries do not count
    /// as failures.
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// Short human summary, e.g. `2 of 3 imported (1 skipped, 0 failed)`.
    pub fn summary(&self) -> String {
        format!(
            "{} of {} imported ({} skipped, {} failed)",
            self.created(),
            self.items.len(),
            self.skipped(),
            self.failed()
        )
    }
}

/// Overall result of an import run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// The array was empty.
    Nothing,
    Completed(ImportReport),
}

/// Creates every valid entry of `plan` with at most `concurrency`
/// requests in flight.
pub async fn run_import(api: &dyn CatalogApi, plan: ImportPlan, concurrency: usize) -> ImportOutcome {
    if plan.is_empty() {
        return ImportOutcome::Nothing;
    }
    let items = run_bounded(plan.entries, concurrency, |entry| async move {
        match entry {
            PlannedEntry::Skipped { missing } => ItemOutcome::Skipped { missing },
            PlannedEntry::Valid(fields) => match api.create(&fields).await {
                Ok(tool) => ItemOutcome::Created(tool),
                Err(e) => {
                    warn!(name = %fields.name, error = %e, "import entry failed");
                    ItemOutcome::Failed {
                        message: format!("Failed to add tool: {e}"),
                    }
                }
            },
        }
    })
    .await;
    let report = ImportReport { items };
    info!(
        created = report.created(),
        skipped = report.skipped(),
        failed = report.failed(),
        "import finished"
    );
    ImportOutcome::Completed(report)
}

/// View model of the import surface: a text input and a status notice.
pub struct ImportPanel {
    api: Arc<dyn CatalogApi>,
    concurrency: usize,
    submitting: Arc<AtomicBool>,
    /// The pasted JSON text.
    pub input: String,
    notice: Option<Notice>,
}

impl ImportPanel {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self {
            api,
            concurrency: DEFAULT_CONCURRENCY,
            submitting: Arc::new(AtomicBool::new(false)),
            input: String::new(),
            notice: None,
        }
    }

    pub fn with_concurrency(mut self, limit: usize) -> Self {
        self.concurrency = limit.max(1);
        self
    }

    /// Shares the `submitting` flag with the admin panel.
    pub fn with_submitting_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.submitting = flag;
        self
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::SeqCst)
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Imports `self.input`.
    ///
    /// The notice is cleared first, then set to the result: a warning for
    /// an empty array, success when nothing failed, an error otherwise.
    pub async fn import(&mut self) -> Result<ImportOutcome, ConsoleError> {
        self.notice = None;
        let _guard = match SubmitGuard::acquire(&self.submitting) {
            Ok(g) => g,
            Err(e) => {
                self.notice = Some(Notice::error(e.to_string()));
                return Err(e);
            }
        };
        self.import_inner().await
    }

    async fn import_inner(&mut self) -> Result<ImportOutcome, ConsoleError> {
        let plan = match parse_import(&self.input) {
            Ok(plan) => plan,
            Err(e) => {
                self.notice = Some(Notice::error(format!("Import failed: {e}")));
                return Err(ConsoleError::Validation(e.to_string()));
            }
        };
        let outcome = run_import(self.api.as_ref(), plan, self.concurrency).await;
        self.notice = Some(match &outcome {
            ImportOutcome::Nothing => Notice::warning("No tools to import."),
            ImportOutcome::Completed(report) if report.is_success() => {
                Notice::success("Tools imported successfully!")
            }
            ImportOutcome::Completed(report) => {
                Notice::error(format!("Import failed: {}", report.summary()))
            }
        });
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_json() {
        assert!(matches!(parse_import("{oops"), Err(ImportError::Parse(_))));
    }

    #[test]
    fn rejects_non_array() {
        let err = parse_import(r#"{"name":"A"}"#).unwrap_err();
        assert_eq!(err, ImportError::NotAnArray);
        assert_eq!(err.to_string(), "Invalid JSON: Must be an array of tools.");
    }

    #[test]
    fn empty_array_is_empty_plan() {
        let plan = parse_import("[]").unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn classifies_entries() {
        let plan = parse_import(
            r#"[
                {"name":"A","category":"B","description":"C","link":"D","id":"ignored"},
                {"category":"C"},
                {"name":"","category":"B","description":"C","link":"D"},
                {"name":1,"category":"B","description":"C","link":"D"},
                "not an object"
            ]"#,
        )
        .unwrap();
        assert_eq!(plan.len(), 5);
        assert_eq!(plan.valid_count(), 1);
        assert_eq!(plan.skipped_count(), 4);
        assert_eq!(
            plan.entries[0],
            PlannedEntry::Valid(ToolFields::new("A", "B", "C", "D"))
        );
        assert_eq!(
            plan.entries[1],
            PlannedEntry::Skipped {
                missing: vec!["name", "description", "link"]
            }
        );
        assert_eq!(
            plan.entries[3],
            PlannedEntry::Skipped {
                missing: vec!["name"]
            }
        );
    }

    #[test]
    fn skipped_entries_do_not_fail_the_report() {
        let report = ImportReport {
            items: vec![ItemOutcome::Skipped {
                missing: vec!["link"],
            }],
        };
        assert!(report.is_success());
        assert_eq!(report.summary(), "0 of 1 imported (1 skipped, 0 failed)");
    }
}
