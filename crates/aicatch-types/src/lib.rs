//! # aicatch-types
//!
//! Domain types for the AICatch catalog.
//! This crate contains pure data types with zero external dependencies
//! (except serde for serialization).

pub mod access;
pub mod api;
pub mod error;
pub mod filter;
pub mod theme;
pub mod tool;

// Re-exports for convenience.
pub use access::AccessPolicy;
pub use api::{DeleteAllRequest, DeleteAllResponse, MessageResponse};
pub use error::{CatalogError, DiagnosticError, ErrorKind};
pub use filter::{category_options, BrowseFilter, ALL_CATEGORIES};
pub use theme::ThemeMode;
pub use tool::{Tool, ToolDraft, ToolFields, ToolId};
