//! Row-to-domain mapping for the SQLite tool repository.
//!
//! Converts raw SQLite rows into `Tool` domain objects and provides
//! the `OptionalExt` helper for query results.

use aicatch_types::{Tool, ToolId};

/// Column list shared across all SELECT queries, in `row_to_tool` order.
pub(crate) const COLS: &str = "id, name, category, description, link, created_at, updated_at";

/// Maps a SQLite row to a `Tool` domain object.
pub(crate) fn row_to_tool(row: &rusqlite::Row<'_>) -> rusqlite::Result<Tool> {
    let id_str: String = row.get(0)?;
    let created_at: String = row.get(5)?;
    let updated_at: Option<String> = row.get(6)?;

    let id = ToolId::new(id_str).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(Tool {
        id,
        name: row.get(1)?,
        category: row.get(2)?,
        description: row.get(3)?,
        link: row.get(4)?,
        updated_at: updated_at.unwrap_or_else(|| created_at.clone()),
        created_at,
    })
}

/// Extension trait for optional query results.
pub(crate) trait OptionalExt<T> {
    /// Converts a "no rows" error into `Ok(None)`.
    fn optional(self) -> Result<Option<T>, rusqlite::Error>;
}

impl<T> OptionalExt<T> for Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>, rusqlite::Error> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
