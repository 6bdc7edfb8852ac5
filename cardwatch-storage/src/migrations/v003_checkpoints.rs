//! v003: per-shard input-stream checkpoints.

use rusqlite::Connection;

use cardwatch_core::errors::CardwatchResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> CardwatchResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS checkpoints (
            shard_id   INTEGER PRIMARY KEY,
            offset     INTEGER NOT NULL,
            updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
