//! v001: travel_state, one live row per card.

use rusqlite::Connection;

use cardwatch_core::errors::CardwatchResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> CardwatchResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS travel_state (
            card_id            TEXT PRIMARY KEY,
            last_latitude      REAL NOT NULL,
            last_longitude     REAL NOT NULL,
            last_event_time    TEXT NOT NULL,
            last_location_name TEXT NOT NULL,
            updated_at         TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE INDEX IF NOT EXISTS idx_travel_state_event_time
            ON travel_state(last_event_time);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
