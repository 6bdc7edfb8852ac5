use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Transaction;

/// Per-card baseline: the most recent accepted transaction's location and
/// time. Exactly zero or one live entry per card; evicted after the idle TTL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelState {
    pub last_latitude: f64,
    pub last_longitude: f64,
    pub last_event_time: DateTime<Utc>,
    pub last_location_name: String,
}

impl TravelState {
    /// Baseline derived from an accepted transaction.
    pub fn from_transaction(txn: &Transaction) -> Self {
        Self {
            last_latitude: txn.latitude,
            last_longitude: txn.longitude,
            last_event_time: txn.event_time,
            last_location_name: txn.merchant_location_name.clone(),
        }
    }
}
