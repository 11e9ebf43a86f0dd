//! SQLite-backed tool repository handle.

use std::sync::{Mutex, MutexGuard};

use aicatch_registry::RepositoryError;
use rusqlite::Connection;

use crate::migrations::run_migrations;

/// SQLite-backed tool repository.
///
/// A single connection behind a mutex; every repository call holds the
/// lock for exactly one statement.
pub struct SqliteToolRepository {
    conn: Mutex<Connection>,
}

impl SqliteToolRepository {
    /// Opens or creates a SQLite database at the given path and brings its
    /// schema up to date.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the file cannot be opened or a
    /// migration fails.
    pub fn open(path: &str) -> Result<Self, RepositoryError> {
        let conn = Connection::open(path).map_err(|e| RepositoryError::Storage {
            message: format!("cannot open database '{path}': {e}"),
        })?;
        tracing::debug!(path, "opened catalog database");
        Self::from_connection(conn)
    }

    /// Opens a private in-memory database (tests, ephemeral servers).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the schema cannot be created.
    pub fn open_in_memory() -> Result<Self, RepositoryError> {
        let conn = Connection::open_in_memory().map_err(|e| RepositoryError::Storage {
            message: e.to_string(),
        })?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self, RepositoryError> {
        run_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Acquires the connection lock.
    pub(crate) fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>, RepositoryError> {
        self.conn.lock().map_err(|e| RepositoryError::Storage {
            message: e.to_string(),
        })
    }
}
