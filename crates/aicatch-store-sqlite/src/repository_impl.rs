//! `ToolRepository` trait implementation for `SqliteToolRepository`.

use aicatch_registry::{RepositoryError, ToolRepository};
use aicatch_types::{Tool, ToolDraft, ToolFields, ToolId};
use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use rusqlite::params;
use uuid::Uuid;

use crate::repository::SqliteToolRepository;
use crate::row_mapping::{row_to_tool, OptionalExt, COLS};

/// Maps a `rusqlite::Error` to a `RepositoryError::Storage`.
fn map_sqlite_err(e: rusqlite::Error) -> RepositoryError {
    RepositoryError::Storage {
        message: e.to_string(),
    }
}

/// Like `map_sqlite_err`, but surfaces constraint failures separately.
fn map_write_err(e: rusqlite::Error) -> RepositoryError {
    if let rusqlite::Error::SqliteFailure(ref err, _) = e {
        if err.code == rusqlite::ErrorCode::ConstraintViolation {
            return RepositoryError::Constraint {
                message: e.to_string(),
            };
        }
    }
    map_sqlite_err(e)
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[async_trait]
impl ToolRepository for SqliteToolRepository {
    async fn list(&self) -> Result<Vec<Tool>, RepositoryError> {
        let conn = self.lock_conn()?;
        let sql = format!("SELECT {COLS} FROM tools ORDER BY rowid ASC");
        let mut stmt = conn.prepare(&sql).map_err(map_sqlite_err)?;
        let tools = stmt
            .query_map([], row_to_tool)
            .map_err(map_sqlite_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(map_sqlite_err)?;
        Ok(tools)
    }

    async fn find_by_id(&self, id: &ToolId) -> Result<Option<Tool>, RepositoryError> {
        let conn = self.lock_conn()?;
        let sql = format!("SELECT {COLS} FROM tools WHERE id = ?1");
        let mut stmt = conn.prepare(&sql).map_err(map_sqlite_err)?;
        let result = stmt
            .query_row(params![id.as_str()], row_to_tool)
            .optional()
            .map_err(map_sqlite_err)?;
        Ok(result)
    }

    async fn create(&self, draft: &ToolDraft) -> Result<Tool, RepositoryError> {
        let conn = self.lock_conn()?;
        let id = Uuid::new_v4().to_string();
        let stamp = now();
        conn.execute(
            "INSERT INTO tools (id, name, category, description, link, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                id,
                draft.name,
                draft.category,
                draft.description,
                draft.link,
                stamp,
                stamp,
            ],
        )
        .map_err(map_write_err)?;

        let sql = format!("SELECT {COLS} FROM tools WHERE id = ?1");
        conn.query_row(&sql, params![id], row_to_tool)
            .map_err(map_sqlite_err)
    }

    async fn update(&self, id: &ToolId, fields: &ToolFields) -> Result<Tool, RepositoryError> {
        let conn = self.lock_conn()?;
        let affected = conn
            .execute(
                "UPDATE tools SET name=?2, category=?3, description=?4, link=?5, updated_at=?6 \
                 WHERE id=?1",
                params![
                    id.as_str(),
                    fields.name,
                    fields.category,
                    fields.description,
                    fields.link,
                    now(),
                ],
            )
            .map_err(map_write_err)?;
        if affected == 0 {
            return Err(RepositoryError::NotFound { id: id.to_string() });
        }

        let sql = format!("SELECT {COLS} FROM tools WHERE id = ?1");
        conn.query_row(&sql, params![id.as_str()], row_to_tool)
            .map_err(map_sqlite_err)
    }

    async fn delete(&self, id: &ToolId) -> Result<bool, RepositoryError> {
        let conn = self.lock_conn()?;
        let affected = conn
            .execute("DELETE FROM tools WHERE id = ?1", params![id.as_str()])
            .map_err(map_sqlite_err)?;
        Ok(affected > 0)
    }

    async fn delete_all(&self, exclude_name: Option<&str>) -> Result<u64, RepositoryError> {
        let conn = self.lock_conn()?;
        let affected = match exclude_name.filter(|name| !name.is_empty()) {
            Some(name) => conn.execute("DELETE FROM tools WHERE name <> ?1", params![name]),
            None => conn.execute("DELETE FROM tools", []),
        }
        .map_err(map_sqlite_err)?;
        tracing::debug!(affected, exclude = ?exclude_name, "bulk delete");
        Ok(affected as u64)
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let conn = self.lock_conn()?;
        let n: i64 = conn
            .query_row("SELECT COUNT(*) FROM tools", [], |row| row.get(0))
            .map_err(map_sqlite_err)?;
        Ok(n.max(0) as u64)
    }
}
