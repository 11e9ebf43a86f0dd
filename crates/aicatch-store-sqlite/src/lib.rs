//! # aicatch-store-sqlite
//!
//! SQLite adapter for the AICatch catalog.
//! Implements `ToolRepository` with full CRUD operations over a single
//! `tools` table.

pub mod migrations;
pub mod repository;
mod repository_impl;
mod row_mapping;

pub use repository::SqliteToolRepository;
