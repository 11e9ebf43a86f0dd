//! # aicatch-registry
//!
//! Port definitions (abstract traits) for the tool catalog store.
//! Adapter crates implement these traits.

pub mod repository;

pub use repository::{RepositoryError, ToolRepository};
