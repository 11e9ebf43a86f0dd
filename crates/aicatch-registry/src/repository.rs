//! Abstract repository trait (port) for tool storage.

use async_trait::async_trait;
use thiserror::Error;

use aicatch_types::{Tool, ToolDraft, ToolFields, ToolId};

/// Errors returned by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested tool was not found.
    #[error("tool not found: {id}")]
    NotFound { id: String },
    /// A database or I/O error occurred.
    #[error("storage error: {message}")]
    Storage { message: String },
    /// The store rejected the row (missing required column, duplicate key).
    #[error("constraint violation: {message}")]
    Constraint { message: String },
}

/// Abstract trait for tool persistence.
///
/// Each method is an independent single-statement operation; nothing here
/// spans a transaction across calls.
///
/// Implementations live in adapter crates (e.g., `aicatch-store-sqlite`).
#[async_trait]
pub trait ToolRepository: Send + Sync {
    /// Returns every stored tool.
    async fn list(&self) -> Result<Vec<Tool>, RepositoryError>;

    /// Finds a tool by its ID.
    async fn find_by_id(&self, id: &ToolId) -> Result<Option<Tool>, RepositoryError>;

    /// Inserts a new tool and returns it with its store-assigned ID.
    ///
    /// Absent fields are passed through; the store decides whether to
    /// reject them.
    async fn create(&self, draft: &ToolDraft) -> Result<Tool, RepositoryError>;

    /// Replaces all four mutable fields of an existing tool.
    ///
    /// Returns `RepositoryError::NotFound` when `id` does not exist.
    async fn update(&self, id: &ToolId, fields: &ToolFields) -> Result<Tool, RepositoryError>;

    /// Deletes a tool by ID. Returns true if it existed.
    async fn delete(&self, id: &ToolId) -> Result<bool, RepositoryError>;

    /// Deletes every tool whose name differs from `exclude_name`, or every
    /// tool when no (non-empty) name is given. Returns the number deleted.
    async fn delete_all(&self, exclude_name: Option<&str>) -> Result<u64, RepositoryError>;

    /// Number of stored tools.
    async fn count(&self) -> Result<u64, RepositoryError>;
}
