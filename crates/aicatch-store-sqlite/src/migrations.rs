//! Database schema migrations for the tool catalog.

use aicatch_registry::RepositoryError;
use rusqlite::Connection;

/// Current schema version.
const SCHEMA_VERSION: u32 = 2;

/// Runs all pending migrations on the database.
pub fn run_migrations(conn: &Connection) -> Result<(), RepositoryError> {
    let current = get_schema_version(conn)?;

    if current < 1 {
        migrate_v1(conn)?;
    }
    if current < 2 {
        migrate_v2(conn)?;
    }

    set_schema_version(conn, SCHEMA_VERSION)?;
    Ok(())
}

/// Creates the initial schema (v1).
fn migrate_v1(conn: &Connection) -> Result<(), RepositoryError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS tools (
            id          TEXT PRIMARY KEY NOT NULL,
            name        TEXT NOT NULL,
            category    TEXT NOT NULL,
            description TEXT NOT NULL,
            link        TEXT NOT NULL,
            created_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%SZ', 'now'))
        );

        CREATE INDEX IF NOT EXISTS idx_tools_name ON tools(name);",
    )
    .map_err(|e| RepositoryError::Storage {
        message: format!("migration v1 failed: {e}"),
    })
}

/// Adds the `updated_at` column and backfills it from `created_at` (v2).
fn migrate_v2(conn: &Connection) -> Result<(), RepositoryError> {
    conn.execute_batch(
        "ALTER TABLE tools ADD COLUMN updated_at TEXT;
         UPDATE tools SET updated_at = created_at WHERE updated_at IS NULL;",
    )
    .map_err(|e| RepositoryError::Storage {
        message: format!("migration v2 failed: {e}"),
    })
}

/// Reads the current schema version from PRAGMA user_version.
fn get_schema_version(conn: &Connection) -> Result<u32, RepositoryError> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| RepositoryError::Storage {
            message: format!("failed to read schema version: {e}"),
        })
}

/// Sets the schema version via PRAGMA user_version.
fn set_schema_version(conn: &Connection, version: u32) -> Result<(), RepositoryError> {
    conn.pragma_update(None, "user_version", version)
        .map_err(|e| RepositoryError::Storage {
            message: format!("failed to set schema version: {e}"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_run_on_fresh_db() {
        let conn = Connection::open_in_memory().expect("in-memory db");
        run_migrations(&conn).expect("migrations should succeed");

        let version = get_schema_version(&conn).expect("version");
        assert_eq!(version, SCHEMA_VERSION);
    }

    #[test]
    fn migrations_are_idempotent() {
        let conn = Connection::open_in_memory().expect("in-memory db");
        run_migrations(&conn).expect("first run");
        run_migrations(&conn).expect("second run should also succeed");
    }

    #[test]
    fn v2_backfills_updated_at() {
        let conn = Connection::open_in_memory().expect("in-memory db");
        migrate_v1(&conn).expect("v1");
        set_schema_version(&conn, 1).expect("version");
        conn.execute(
            "INSERT INTO tools (id, name, category, description, link) \
             VALUES ('a', 'A', 'C', 'D', 'L')",
            [],
        )
        .expect("insert");

        run_migrations(&conn).expect("upgrade");

        let (created, updated): (String, String) = conn
            .query_row(
                "SELECT created_at, updated_at FROM tools WHERE id = 'a'",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .expect("row");
        assert_eq!(created, updated);
    }
}
