//! Idempotent alert inserts and read-back.

use rusqlite::{params, Connection, Row};

use cardwatch_core::errors::CardwatchResult;
use cardwatch_core::models::{Alert, Severity};

use super::state_ops::parse_timestamp;
use crate::to_storage_err;

/// Insert an alert, ignoring duplicates on the dedup key. Returns whether
/// a row was newly inserted — false means this transaction pair already
/// alerted (crash-recovery replay).
pub fn insert_alert(conn: &Connection, alert: &Alert) -> CardwatchResult<bool> {
    let changed = conn
        .execute(
            "INSERT OR IGNORE INTO alerts (
                dedup_key, card_id, alert_time, severity, distance_km,
                time_delta_hours, speed_kmh, location_from, location_to,
                transaction_amount
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                alert.dedup_key,
                alert.card_id,
                alert.alert_time.to_rfc3339(),
                alert.severity.to_string(),
                alert.distance_km,
                alert.time_delta_hours,
                alert.speed_kmh,
                alert.location_from,
                alert.location_to,
                alert.transaction_amount,
            ],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(changed > 0)
}

/// All alerts for a card, oldest first.
pub fn alerts_for_card(conn: &Connection, card_id: &str) -> CardwatchResult<Vec<Alert>> {
    let mut stmt = conn
        .prepare(
            "SELECT dedup_key, card_id, alert_time, severity, distance_km,
                    time_delta_hours, speed_kmh, location_from, location_to,
                    transaction_amount
             FROM alerts WHERE card_id = ?1 ORDER BY id",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![card_id], row_to_parts)
        .map_err(|e| to_storage_err(e.to_string()))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.into_iter().map(parts_to_alert).collect()
}

/// Total number of alerts recorded.
pub fn alert_count(conn: &Connection) -> CardwatchResult<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM alerts", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}

type AlertParts = (String, String, String, String, f64, f64, f64, String, String, f64);

fn row_to_parts(row: &Row<'_>) -> rusqlite::Result<AlertParts> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
        row.get(6)?,
        row.get(7)?,
        row.get(8)?,
        row.get(9)?,
    ))
}

fn parts_to_alert(parts: AlertParts) -> CardwatchResult<Alert> {
    let (dedup_key, card_id, alert_time, severity, distance_km, time_delta_hours, speed_kmh, location_from, location_to, transaction_amount) =
        parts;
    let severity = match severity.as_str() {
        "HIGH" => Severity::High,
        "CRITICAL" => Severity::Critical,
        other => return Err(to_storage_err(format!("unknown severity {other:?}"))),
    };
    Ok(Alert {
        card_id,
        alert_time: parse_timestamp(&alert_time)?,
        severity,
        distance_km,
        time_delta_hours,
        speed_kmh,
        location_from,
        location_to,
        transaction_amount,
        dedup_key,
    })
}
