//! Admin view model: list, create, edit, delete and bulk delete tools.
//!
//! Mutations merge the record returned by the API into the local list;
//! [`AdminPanel::reconcile`] re-reads the whole catalog when the caller
//! wants to pick up changes made elsewhere.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use aicatch_types::{Tool, ToolFields, ToolId};
use tracing::info;

use crate::bulk::{run_bounded, BulkReport};
use crate::client::CatalogApi;
use crate::error::ConsoleError;
use crate::notice::Notice;

/// Default number of concurrent requests for bulk operations.
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Holds the shared `submitting` flag for the lifetime of one mutation.
pub(crate) struct SubmitGuard(Arc<AtomicBool>);

impl SubmitGuard {
    pub(crate) fn acquire(flag: &Arc<AtomicBool>) -> Result<Self, ConsoleError> {
        if flag.swap(true, Ordering::SeqCst) {
            return Err(ConsoleError::Busy);
        }
        Ok(Self(Arc::clone(flag)))
    }
}

impl Drop for SubmitGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// State and operations of the admin surface.
pub struct AdminPanel {
    api: Arc<dyn CatalogApi>,
    concurrency: usize,
    tools: Vec<Tool>,
    /// Values of the add/edit form.
    pub form: ToolFields,
    editing: Option<ToolId>,
    submitting: Arc<AtomicBool>,
    selected: BTreeSet<ToolId>,
    /// Name kept by "delete all" (empty means none).
    pub exclude_name: String,
    notice: Option<Notice>,
}

impl AdminPanel {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self {
            api,
            concurrency: DEFAULT_CONCURRENCY,
            tools: Vec::new(),
            form: ToolFields::default(),
            editing: None,
            submitting: Arc::new(AtomicBool::new(false)),
            selected: BTreeSet::new(),
            exclude_name: String::new(),
            notice: None,
        }
    }

    /// Sets the fan-out limit of `delete_selected`.
    pub fn with_concurrency(mut self, limit: usize) -> Self {
        self.concurrency = limit.max(1);
        self
    }

    /// Shares the `submitting` flag with another surface (e.g. the import
    /// panel) so their mutations exclude each other.
    pub fn with_submitting_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.submitting = flag;
        self
    }

    pub fn submitting_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.submitting)
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn editing(&self) -> Option<&ToolId> {
        self.editing.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::SeqCst)
    }

    pub fn selected(&self) -> &BTreeSet<ToolId> {
        &self.selected
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Records `err` as an error notice and returns it.
    fn fail<T>(&mut self, prefix: &str, err: ConsoleError) -> Result<T, ConsoleError> {
        let message = match &err {
            ConsoleError::Busy | ConsoleError::Cancelled => err.to_string(),
            _ => format!("{prefix}: {err}."),
        };
        self.notice = Some(Notice::error(message));
        Err(err)
    }

    fn succeed(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice::success(message));
    }

    /// Fetches the catalog, replacing local state.
    pub async fn load(&mut self) -> Result<(), ConsoleError> {
        match self.api.list().await {
            Ok(tools) => {
                self.tools = tools;
                self.prune_selection();
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to fetch tools");
                self.notice = Some(Notice::error("Failed to load tools."));
                Err(e)
            }
        }
    }

    /// Full refresh from the server, dropping selections and the edit
    /// target if their rows disappeared.
    pub async fn reconcile(&mut self) -> Result<(), ConsoleError> {
        self.load().await?;
        let editing_gone = self
            .editing
            .as_ref()
            .is_some_and(|id| !self.tools.iter().any(|t| &t.id == id));
        if editing_gone {
            self.cancel_edit();
        }
        Ok(())
    }

    fn prune_selection(&mut self) {
        let tools = &self.tools;
        self.selected.retain(|id| tools.iter().any(|t| &t.id == id));
    }

    /// Switches to editing `id` with the form pre-filled.
    pub fn begin_edit(&mut self, id: &ToolId) -> Result<(), ConsoleError> {
        if self.is_submitting() {
            return Err(ConsoleError::Busy);
        }
        let tool = self
            .tools
            .iter()
            .find(|t| &t.id == id)
            .ok_or(ConsoleError::NotFound)?;
        self.form = tool.fields();
        self.editing = Some(id.clone());
        Ok(())
    }

    /// Leaves editing mode and clears the form.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.form = ToolFields::default();
    }

    /// Creates (viewing) or updates (editing) from the form.
    ///
    /// All four fields must be non-empty. On success the returned record
    /// is merged into the local list and the form is cleared.
    pub async fn submit(&mut self) -> Result<Tool, ConsoleError> {
        let verb = if self.editing.is_some() { "update" } else { "add" };
        let prefix = format!("Failed to {verb} tool");

        let missing = self.form.missing_fields();
        if !missing.is_empty() {
            let err =
                ConsoleError::Validation(format!("Missing required fields: {}", missing.join(", ")));
            return self.fail(&prefix, err);
        }

        let guard = match SubmitGuard::acquire(&self.submitting) {
            Ok(g) => g,
            Err(e) => return self.fail(&prefix, e),
        };
        let result = match &self.editing {
            Some(id) => self.api.update(id, &self.form).await,
            None => self.api.create(&self.form).await,
        };
        drop(guard);

        let tool = match result {
            Ok(tool) => tool,
            Err(e) => return self.fail(&prefix, e),
        };
        match self.tools.iter_mut().find(|t| t.id == tool.id) {
            Some(slot) => *slot = tool.clone(),
            None => self.tools.push(tool.clone()),
        }
        info!(id = %tool.id, action = verb, "tool saved");
        self.succeed(if verb == "add" { "Tool added!" } else { "Tool updated!" });
        self.cancel_edit();
        Ok(tool)
    }

    /// Deletes one tool and drops it from the local list.
    pub async fn delete(&mut self, id: &ToolId) -> Result<(), ConsoleError> {
        let guard = match SubmitGuard::acquire(&self.submitting) {
            Ok(g) => g,
            Err(e) => return self.fail("Failed to delete tool", e),
        };
        let result = self.api.delete(id).await;
        drop(guard);

        if let Err(e) = result {
            return self.fail("Failed to delete tool", e);
        }
        self.remove_local(std::slice::from_ref(id));
        self.succeed("Tool deleted!");
        Ok(())
    }

    fn remove_local(&mut self, ids: &[ToolId]) {
        self.tools.retain(|t| !ids.contains(&t.id));
        for id in ids {
            self.selected.remove(id);
        }
        if self.editing.as_ref().is_some_and(|e| ids.contains(e)) {
            self.cancel_edit();
        }
    }

    /// Adds `id` to the selection, or removes it if already selected.
    pub fn toggle_selected(&mut self, id: &ToolId) {
        if !self.selected.remove(id) {
            self.selected.insert(id.clone());
        }
    }

    /// Selects every listed tool (`true`) or none (`false`).
    pub fn select_all(&mut self, checked: bool) {
        self.selected.clear();
        if checked {
            self.selected
                .extend(self.tools.iter().map(|t| t.id.clone()));
        }
    }

    /// Deletes every selected tool after `confirm` approves the prompt.
    ///
    /// Requests run with bounded concurrency; only the ids that were
    /// actually deleted leave the list and the selection.
    pub async fn delete_selected<F>(&mut self, confirm: F) -> Result<BulkReport, ConsoleError>
    where
        F: FnOnce(&str) -> bool,
    {
        if self.selected.is_empty() {
            let err = ConsoleError::Validation("No tools selected for deletion.".into());
            self.notice = Some(Notice::error(err.to_string()));
            return Err(err);
        }
        if !confirm(&format!("Remove {} tools?", self.selected.len())) {
            return Err(ConsoleError::Cancelled);
        }

        let guard = match SubmitGuard::acquire(&self.submitting) {
            Ok(g) => g,
            Err(e) => return self.fail("Failed to delete selected tools", e),
        };
        let ids: Vec<ToolId> = self.selected.iter().cloned().collect();
        let api = Arc::clone(&self.api);
        let results = run_bounded(ids, self.concurrency, |id| {
            let api = Arc::clone(&api);
            async move {
                let result = api.delete(&id).await;
                (id, result)
            }
        })
        .await;
        drop(guard);

        let report = BulkReport::from_results(results);
        self.remove_local(&report.succeeded);
        info!(
            deleted = report.succeeded.len(),
            failed = report.failed.len(),
            "selected tools deleted"
        );
        if report.is_success() {
            self.succeed("Selected tools deleted!");
        } else {
            self.notice = Some(Notice::warning(format!(
                "Deleted {} of {} selected tools; {} failed.",
                report.succeeded.len(),
                report.total(),
                report.failed.len()
            )));
        }
        Ok(report)
    }

    /// Deletes every tool except those named exactly `exclude_name`.
    /// Returns the number deleted.
    pub async fn delete_all(&mut self) -> Result<u64, ConsoleError> {
        let guard = match SubmitGuard::acquire(&self.submitting) {
            Ok(g) => g,
            Err(e) => return self.fail("Failed to delete all tools", e),
        };
        let exclude = Some(self.exclude_name.as_str()).filter(|n| !n.is_empty());
        let result = self.api.delete_all(exclude).await;
        drop(guard);

        let response = match result {
            Ok(r) => r,
            Err(e) => return self.fail("Failed to delete all tools", e),
        };
        let gone: Vec<ToolId> = self
            .tools
            .iter()
            .filter(|t| exclude != Some(t.name.as_str()))
            .map(|t| t.id.clone())
            .collect();
        self.remove_local(&gone);
        info!(deleted = response.deleted, "all tools deleted");
        self.succeed("All tools deleted!");
        Ok(response.deleted)
    }
}
