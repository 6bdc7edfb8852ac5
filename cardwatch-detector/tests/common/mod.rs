#![allow(dead_code)]

use cardwatch_core::config::DetectorConfig;
use cardwatch_core::models::Transaction;
use cardwatch_detector::DetectorEngine;
use cardwatch_storage::{StateStoreEngine, StoreOptions};
use chrono::{DateTime, TimeZone, Utc};

pub const LONDON: (f64, f64) = (51.5074, -0.1278);
pub const TOKYO: (f64, f64) = (35.6762, 139.6503);
pub const PARIS: (f64, f64) = (48.8566, 2.3522);

pub fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 29, hour, minute, 0).unwrap()
}

pub fn txn(
    card_id: &str,
    event_time: DateTime<Utc>,
    (latitude, longitude): (f64, f64),
    amount: f64,
    place: &str,
) -> Transaction {
    Transaction {
        card_id: card_id.to_string(),
        event_time,
        latitude,
        longitude,
        amount,
        merchant_location_name: place.to_string(),
        transaction_id: None,
        merchant: None,
        merchant_category: None,
        currency: None,
    }
}

pub fn engine() -> DetectorEngine<StateStoreEngine> {
    engine_with_config(DetectorConfig::default())
}

pub fn engine_with_config(config: DetectorConfig) -> DetectorEngine<StateStoreEngine> {
    let store = StateStoreEngine::open_in_memory(&StoreOptions::default())
        .expect("in-memory store");
    DetectorEngine::new(store, config, 0)
}
