//! Public browse view: fetch once, filter in memory.

use std::sync::Arc;

use aicatch_types::{category_options, BrowseFilter, Tool};

use crate::client::CatalogApi;
use crate::error::ConsoleError;
use crate::notice::Notice;

/// Search box and category selector over a loaded catalog.
pub struct BrowseView {
    api: Arc<dyn CatalogApi>,
    tools: Vec<Tool>,
    filter: BrowseFilter,
    loading: bool,
    notice: Option<Notice>,
}

impl BrowseView {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self {
            api,
            tools: Vec::new(),
            filter: BrowseFilter::default(),
            loading: false,
            notice: None,
        }
    }

    /// Fetches the full catalog. The filter is left as it was.
    pub async fn load(&mut self) -> Result<(), ConsoleError> {
        self.loading = true;
        let result = self.api.list().await;
        self.loading = false;
        match result {
            Ok(tools) => {
                self.tools = tools;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to fetch tools");
                self.notice = Some(Notice::error("Failed to load tools."));
                Err(e)
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn filter(&self) -> &BrowseFilter {
        &self.filter
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.filter.category = category.into();
    }

    /// Tools passing the current filter, in catalog order.
    pub fn visible(&self) -> Vec<&Tool> {
        self.filter.apply(&self.tools)
    }

    /// `"All"` followed by every distinct category.
    pub fn categories(&self) -> Vec<String> {
        category_options(&self.tools)
    }
}
