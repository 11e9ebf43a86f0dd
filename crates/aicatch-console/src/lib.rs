//! # aicatch-console
//!
//! UI-agnostic view models for the admin, import and browse surfaces of
//! AICatch, driven through the [`CatalogApi`] port. [`HttpCatalogClient`]
//! is the reqwest adapter talking to the catalog HTTP API.

pub mod admin;
pub mod browse;
pub mod bulk;
pub mod client;
pub mod error;
pub mod import;
pub mod notice;

pub use admin::{AdminPanel, DEFAULT_CONCURRENCY};
pub use browse::BrowseView;
pub use bulk::{run_bounded, BulkReport};
pub use client::{CatalogApi, HttpCatalogClient};
pub use error::ConsoleError;
pub use import::{
    parse_import, run_import, ImportError, ImportOutcome, ImportPanel, ImportPlan, ImportReport,
    ItemOutcome, PlannedEntry,
};
pub use notice::{Notice, Severity};
