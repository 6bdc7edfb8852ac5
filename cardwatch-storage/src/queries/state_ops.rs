//! Upsert, get, delete, and TTL eviction for travel_state rows.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use cardwatch_core::errors::CardwatchResult;
use cardwatch_core::models::TravelState;

use crate::to_storage_err;

/// Upsert the baseline row for a card.
pub fn upsert_state(conn: &Connection, card_id: &str, state: &TravelState) -> CardwatchResult<()> {
    conn.execute(
        "INSERT INTO travel_state (
            card_id, last_latitude, last_longitude, last_event_time, last_location_name
        ) VALUES (?1, ?2, ?3, ?4, ?5)
        ON CONFLICT(card_id) DO UPDATE SET
            last_latitude = excluded.last_latitude,
            last_longitude = excluded.last_longitude,
            last_event_time = excluded.last_event_time,
            last_location_name = excluded.last_location_name,
            updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')",
        params![
            card_id,
            state.last_latitude,
            state.last_longitude,
            state.last_event_time.to_rfc3339(),
            state.last_location_name,
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Fetch the baseline for a card, if present.
pub fn get_state(conn: &Connection, card_id: &str) -> CardwatchResult<Option<TravelState>> {
    conn.query_row(
        "SELECT last_latitude, last_longitude, last_event_time, last_location_name
         FROM travel_state WHERE card_id = ?1",
        params![card_id],
        |row| {
            Ok((
                row.get::<_, f64>(0)?,
                row.get::<_, f64>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
            ))
        },
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))?
    .map(|(lat, lon, time, name)| {
        Ok(TravelState {
            last_latitude: lat,
            last_longitude: lon,
            last_event_time: parse_timestamp(&time)?,
            last_location_name: name,
        })
    })
    .transpose()
}

/// Delete a card's baseline. The next transaction is a cold start.
pub fn delete_state(conn: &Connection, card_id: &str) -> CardwatchResult<()> {
    conn.execute("DELETE FROM travel_state WHERE card_id = ?1", params![card_id])
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Remove entries whose last event is older than the idle TTL. Returns the
/// evicted card ids so the caller can invalidate its cache. A single
/// RETURNING statement, so the reported ids are exactly the deleted rows.
pub fn evict_idle(conn: &Connection, idle_ttl: chrono::Duration) -> CardwatchResult<Vec<String>> {
    let ttl_days = idle_ttl.num_seconds() as f64 / 86_400.0;

    let mut stmt = conn
        .prepare(
            "DELETE FROM travel_state
             WHERE julianday('now') - julianday(last_event_time) > ?1
             RETURNING card_id",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let evicted: Vec<String> = stmt
        .query_map(params![ttl_days], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?
        .collect::<Result<_, _>>()
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(evicted)
}

/// Number of live baselines.
pub fn state_count(conn: &Connection) -> CardwatchResult<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM travel_state", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}

pub(crate) fn parse_timestamp(raw: &str) -> CardwatchResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| to_storage_err(format!("bad timestamp {raw:?}: {e}")))
}
