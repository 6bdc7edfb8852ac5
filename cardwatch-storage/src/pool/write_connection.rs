//! The single write connection a store owns.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use cardwatch_core::errors::CardwatchResult;

use super::pragmas;
use crate::to_storage_err;

/// Serializes all access to one SQLite connection. Single-writer-per-key
/// follows from single-writer-per-store plus the pipeline's key routing.
pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    /// Open a write connection to a database file, applying pragmas.
    pub fn open(path: &Path) -> CardwatchResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        pragmas::apply_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory connection (for testing; does not survive restart).
    pub fn open_in_memory() -> CardwatchResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        pragmas::apply_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run a closure against the connection, holding the lock for its
    /// duration.
    pub fn with_conn_sync<F, T>(&self, f: F) -> CardwatchResult<T>
    where
        F: FnOnce(&Connection) -> CardwatchResult<T>,
    {
        let conn = self
            .conn
            .lock()
            .map_err(|_| to_storage_err("write connection mutex poisoned".to_string()))?;
        f(&conn)
    }
}
