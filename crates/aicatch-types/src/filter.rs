//! In-memory search and category filtering for the public catalog.

use serde::{Deserialize, Serialize};

use crate::tool::Tool;

/// Sentinel category that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

/// Search text plus category selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseFilter {
    /// Case-insensitive substring matched against the tool name.
    pub search: String,
    /// Exact (case-sensitive) category, or [`ALL_CATEGORIES`].
    pub category: String,
}

impl Default for BrowseFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl BrowseFilter {
    /// Creates a filter from search text and a category selection.
    pub fn new(search: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            category: category.into(),
        }
    }

    /// Returns true if `tool` passes both the search and the category test.
    pub fn matches(&self, tool: &Tool) -> bool {
        let name_hit = tool
            .name
            .to_lowercase()
            .contains(&self.search.to_lowercase());
        let category_hit = self.category == ALL_CATEGORIES || tool.category == self.category;
        name_hit && category_hit
    }

    /// Returns the matching tools, preserving input order.
    pub fn apply<'a>(&self, tools: &'a [Tool]) -> Vec<&'a Tool> {
        tools.iter().filter(|t| self.matches(t)).collect()
    }
}

/// Category choices for the filter control: `"All"` followed by every
/// distinct category in order of first appearance.
pub fn category_options(tools: &[Tool]) -> Vec<String> {
    let mut options = vec![ALL_CATEGORIES.to_string()];
    for tool in tools {
        if !options[1..].contains(&tool.category) {
            options.push(tool.category.clone());
        }
    }
    options
}
