//! Request and response bodies shared by the HTTP API and its clients.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/tools/delete-all`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAllRequest {
    /// Rows with exactly this name survive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_tool_name: Option<String>,
}

/// Plain confirmation or error body: `{"message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Confirmation returned by `POST /api/tools/delete-all`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAllResponse {
    pub message: String,
    /// Number of rows removed.
    #[serde(default)]
    pub deleted: u64,
}
