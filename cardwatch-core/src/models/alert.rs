use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Transaction, TravelState};

/// Alert urgency, derived from implied travel speed.
/// Closed enum so classification stays exhaustive and testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    High,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::High => write!(f, "HIGH"),
            Severity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// An impossible-travel alert. Append-only, emitted at most once per
/// triggering transaction pair; `dedup_key` enforces that under replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub card_id: String,
    pub alert_time: DateTime<Utc>,
    pub severity: Severity,
    pub distance_km: f64,
    pub time_delta_hours: f64,
    pub speed_kmh: f64,
    pub location_from: String,
    pub location_to: String,
    pub transaction_amount: f64,
    /// Deterministic idempotency key for the (previous, current)
    /// transaction pair.
    pub dedup_key: String,
}

impl Alert {
    /// Build an alert for the transition from `prev` to `txn`.
    pub fn from_pair(
        txn: &Transaction,
        prev: &TravelState,
        severity: Severity,
        distance_km: f64,
        time_delta_hours: f64,
        speed_kmh: f64,
    ) -> Self {
        Self {
            card_id: txn.card_id.clone(),
            alert_time: Utc::now(),
            severity,
            distance_km,
            time_delta_hours,
            speed_kmh,
            location_from: prev.last_location_name.clone(),
            location_to: txn.merchant_location_name.clone(),
            transaction_amount: txn.amount,
            dedup_key: Self::dedup_key(&txn.card_id, prev.last_event_time, txn.event_time),
        }
    }

    /// blake3 of `card_id | prev_event_time | event_time`. The feed models
    /// no transaction ids, so the timestamp pair identifies the transition.
    pub fn dedup_key(
        card_id: &str,
        prev_event_time: DateTime<Utc>,
        event_time: DateTime<Utc>,
    ) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(card_id.as_bytes());
        hasher.update(b"|");
        hasher.update(prev_event_time.to_rfc3339().as_bytes());
        hasher.update(b"|");
        hasher.update(event_time.to_rfc3339().as_bytes());
        hasher.finalize().to_hex().to_string()
    }
}
