use cardwatch_core::models::{
    Alert, MetricsSnapshot, Severity, SlaMetric, Transaction, TravelState,
};
use chrono::{TimeZone, Utc};

fn txn(card_id: &str, hour: u32, minute: u32, lat: f64, lon: f64, place: &str) -> Transaction {
    Transaction {
        card_id: card_id.to_string(),
        event_time: Utc.with_ymd_and_hms(2026, 8, 29, hour, minute, 0).unwrap(),
        latitude: lat,
        longitude: lon,
        amount: 50.0,
        merchant_location_name: place.to_string(),
        transaction_id: None,
        merchant: None,
        merchant_category: None,
        currency: None,
    }
}

#[test]
fn travel_state_snapshots_the_transaction() {
    let t = txn("c1", 10, 0, 51.5074, -0.1278, "London");
    let state = TravelState::from_transaction(&t);
    assert_eq!(state.last_latitude, 51.5074);
    assert_eq!(state.last_event_time, t.event_time);
    assert_eq!(state.last_location_name, "London");
}

#[test]
fn alert_round_trips_through_json() {
    let prev = TravelState::from_transaction(&txn("c1", 10, 0, 51.5074, -0.1278, "London"));
    let cur = txn("c1", 10, 15, 35.6762, 139.6503, "Tokyo");
    let alert = Alert::from_pair(&cur, &prev, Severity::Critical, 9560.0, 0.25, 38_240.0);

    let json = serde_json::to_string(&alert).unwrap();
    assert!(json.contains("\"CRITICAL\""));
    assert!(json.contains("\"location_from\":\"London\""));

    let back: Alert = serde_json::from_str(&json).unwrap();
    assert_eq!(back, alert);
}

#[test]
fn sla_metric_names_are_stable() {
    let names: Vec<&str> = SlaMetric::all().iter().map(|m| m.name()).collect();
    assert_eq!(
        names,
        [
            "p95_latency",
            "data_freshness",
            "throughput_per_minute",
            "fraud_detection_rate",
            "false_positive_rate"
        ]
    );
}

#[test]
fn snapshot_fields_default_to_absent() {
    let snapshot = MetricsSnapshot::default();
    assert!(snapshot.p95_latency_seconds.is_none());
    assert!(snapshot.fraud_detection_rate.is_none());
}
