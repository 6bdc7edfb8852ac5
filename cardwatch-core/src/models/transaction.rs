use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{CardwatchError, CardwatchResult};

/// One card transaction as it arrives from the broker, keyed by `card_id`.
/// Immutable once ingested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Opaque card identifier, PII-masked upstream.
    pub card_id: String,
    /// Origin timestamp assigned where the transaction happened.
    pub event_time: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    pub amount: f64,
    pub merchant_location_name: String,

    // Pass-through fields from the upstream feed. None of them
    // participate in detection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl Transaction {
    /// Parse a JSON transaction record, rejecting structurally invalid input.
    /// Coordinate range checks stay with the detector so the drop is counted.
    pub fn from_json(raw: &str) -> CardwatchResult<Self> {
        serde_json::from_str(raw).map_err(|e| CardwatchError::InvalidRecord {
            reason: e.to_string(),
        })
    }
}
