#![allow(dead_code)]

use cardwatch_core::models::{Alert, Severity, TravelState};
use chrono::{DateTime, Duration, Utc};

pub fn state_at(lat: f64, lon: f64, event_time: DateTime<Utc>, name: &str) -> TravelState {
    TravelState {
        last_latitude: lat,
        last_longitude: lon,
        last_event_time: event_time,
        last_location_name: name.to_string(),
    }
}

pub fn london_state(event_time: DateTime<Utc>) -> TravelState {
    state_at(51.5074, -0.1278, event_time, "London")
}

pub fn sample_alert(card_id: &str, prev_time: DateTime<Utc>) -> Alert {
    let event_time = prev_time + Duration::minutes(15);
    Alert {
        card_id: card_id.to_string(),
        alert_time: Utc::now(),
        severity: Severity::Critical,
        distance_km: 9560.0,
        time_delta_hours: 0.25,
        speed_kmh: 38_240.0,
        location_from: "London".to_string(),
        location_to: "Tokyo".to_string(),
        transaction_amount: 75.0,
        dedup_key: Alert::dedup_key(card_id, prev_time, event_time),
    }
}
