//! WAL checkpointing and integrity checks.

use rusqlite::Connection;

use cardwatch_core::errors::CardwatchResult;

use crate::to_storage_err;

/// WAL checkpoint.
pub fn wal_checkpoint(conn: &Connection) -> CardwatchResult<()> {
    conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE)")
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Run integrity check. Returns true if database is OK.
pub fn integrity_check(conn: &Connection) -> CardwatchResult<bool> {
    let result: String = conn
        .query_row("PRAGMA integrity_check", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(result == "ok")
}

/// Run incremental vacuum.
pub fn incremental_vacuum(conn: &Connection, pages: u32) -> CardwatchResult<()> {
    conn.execute_batch(&format!("PRAGMA incremental_vacuum({pages})"))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
