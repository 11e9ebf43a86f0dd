//! CLI command definitions.

pub mod add;
pub mod browse;
pub mod delete_all;
pub mod edit;
pub mod get;
pub mod import;
pub mod list;
pub mod remove;
pub mod serve;
pub mod status;
