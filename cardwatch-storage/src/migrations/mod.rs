//! Versioned schema migrations, tracked via `PRAGMA user_version`.

mod v001_travel_state;
mod v002_alerts;
mod v003_checkpoints;

use rusqlite::Connection;

use cardwatch_core::errors::{CardwatchError, CardwatchResult, StorageError};

use crate::to_storage_err;

/// Latest schema version.
pub const SCHEMA_VERSION: u32 = 3;

/// Run all pending migrations in order.
pub fn run_migrations(conn: &Connection) -> CardwatchResult<()> {
    let mut version = current_version(conn)?;
    while version < SCHEMA_VERSION {
        let next = version + 1;
        apply(conn, next).map_err(|e| {
            CardwatchError::Storage(StorageError::MigrationFailed {
                version: next,
                reason: e.to_string(),
            })
        })?;
        set_version(conn, next)?;
        version = next;
    }
    Ok(())
}

fn apply(conn: &Connection, version: u32) -> CardwatchResult<()> {
    match version {
        1 => v001_travel_state::migrate(conn),
        2 => v002_alerts::migrate(conn),
        3 => v003_checkpoints::migrate(conn),
        other => Err(CardwatchError::Storage(StorageError::MigrationFailed {
            version: other,
            reason: "unknown schema version".to_string(),
        })),
    }
}

fn current_version(conn: &Connection) -> CardwatchResult<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))
}

fn set_version(conn: &Connection, version: u32) -> CardwatchResult<()> {
    conn.pragma_update(None, "user_version", version)
        .map_err(|e| to_storage_err(e.to_string()))
}
