//! v002: alerts, append-only with a UNIQUE dedup key for replay safety.

use rusqlite::Connection;

use cardwatch_core::errors::CardwatchResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> CardwatchResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS alerts (
            id                 INTEGER PRIMARY KEY AUTOINCREMENT,
            dedup_key          TEXT NOT NULL UNIQUE,
            card_id            TEXT NOT NULL,
            alert_time         TEXT NOT NULL,
            severity           TEXT NOT NULL,
            distance_km        REAL NOT NULL,
            time_delta_hours   REAL NOT NULL,
            speed_kmh          REAL NOT NULL,
            location_from      TEXT NOT NULL,
            location_to        TEXT NOT NULL,
            transaction_amount REAL NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_alerts_card ON alerts(card_id);
        CREATE INDEX IF NOT EXISTS idx_alerts_time ON alerts(alert_time);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
