//! Per-shard checkpoint upsert and lookup.

use rusqlite::{params, Connection, OptionalExtension};

use cardwatch_core::errors::CardwatchResult;
use cardwatch_core::models::Checkpoint;

use crate::to_storage_err;

/// Advance the checkpoint for a shard.
pub fn upsert_checkpoint(conn: &Connection, checkpoint: Checkpoint) -> CardwatchResult<()> {
    conn.execute(
        "INSERT INTO checkpoints (shard_id, offset) VALUES (?1, ?2)
         ON CONFLICT(shard_id) DO UPDATE SET
            offset = excluded.offset,
            updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')",
        params![checkpoint.shard_id, checkpoint.offset as i64],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Last committed checkpoint for a shard.
pub fn get_checkpoint(conn: &Connection, shard_id: u32) -> CardwatchResult<Option<Checkpoint>> {
    conn.query_row(
        "SELECT offset FROM checkpoints WHERE shard_id = ?1",
        params![shard_id],
        |row| row.get::<_, i64>(0),
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
    .map(|offset| {
        offset.map(|offset| Checkpoint {
            shard_id,
            offset: offset as u64,
        })
    })
}
