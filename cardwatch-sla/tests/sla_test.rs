//! Integration tests for SLA evaluation, hysteresis, and the scheduler.

use std::sync::{Arc, Mutex};

use cardwatch_core::config::{SlaConfig, SlaThresholds};
use cardwatch_core::models::{MetricsSnapshot, Severity, SlaMetric};
use cardwatch_core::traits::IMetricsProvider;
use cardwatch_core::CardwatchResult;
use cardwatch_sla::{BreachTracker, SlaMonitor, SlaScheduler};

fn full_snapshot() -> MetricsSnapshot {
    MetricsSnapshot {
        p95_latency_seconds: Some(1.2),
        data_freshness_seconds: Some(30.0),
        throughput_per_minute: Some(500.0),
        fraud_detection_rate: Some(0.01),
        false_positive_rate: Some(0.02),
    }
}

#[test]
fn elevated_latency_breaches_as_high() {
    let mut snapshot = full_snapshot();
    snapshot.p95_latency_seconds = Some(6.0);
    let thresholds = SlaThresholds {
        p95_latency_seconds: 5.0,
        ..SlaThresholds::default()
    };

    let evaluation = SlaMonitor::evaluate(&snapshot, &thresholds);

    assert_eq!(evaluation.breaches.len(), 1);
    let breach = &evaluation.breaches[0];
    assert_eq!(breach.metric, SlaMetric::P95Latency);
    assert_eq!(breach.severity, Severity::High);
    assert_eq!(breach.actual_value, 6.0);
    assert_eq!(breach.threshold_value, 5.0);
    assert!(evaluation.monitor_issues.is_empty());
}

#[test]
fn latency_within_threshold_is_healthy() {
    let mut snapshot = full_snapshot();
    snapshot.p95_latency_seconds = Some(4.0);
    let thresholds = SlaThresholds {
        p95_latency_seconds: 5.0,
        ..SlaThresholds::default()
    };

    let evaluation = SlaMonitor::evaluate(&snapshot, &thresholds);
    assert!(evaluation.is_healthy());
}

#[test]
fn stale_data_breaches_as_critical() {
    let mut snapshot = full_snapshot();
    snapshot.data_freshness_seconds = Some(600.0);

    let evaluation = SlaMonitor::evaluate(&snapshot, &SlaThresholds::default());

    assert_eq!(evaluation.breaches.len(), 1);
    assert_eq!(evaluation.breaches[0].metric, SlaMetric::DataFreshness);
    assert_eq!(evaluation.breaches[0].severity, Severity::Critical);
}

#[test]
fn low_throughput_and_detection_rate_breach_below_their_floors() {
    let mut snapshot = full_snapshot();
    snapshot.throughput_per_minute = Some(10.0);
    snapshot.fraud_detection_rate = Some(0.0);

    let evaluation = SlaMonitor::evaluate(&snapshot, &SlaThresholds::default());

    let metrics: Vec<SlaMetric> = evaluation.breaches.iter().map(|b| b.metric).collect();
    assert_eq!(
        metrics,
        vec![SlaMetric::Throughput, SlaMetric::FraudDetectionRate]
    );
    assert!(evaluation
        .breaches
        .iter()
        .all(|b| b.severity == Severity::High));
}

#[test]
fn breaches_follow_fixed_metric_order() {
    let snapshot = MetricsSnapshot {
        p95_latency_seconds: Some(100.0),
        data_freshness_seconds: Some(100_000.0),
        throughput_per_minute: Some(0.0),
        fraud_detection_rate: Some(0.0),
        false_positive_rate: Some(1.0),
    };

    let evaluation = SlaMonitor::evaluate(&snapshot, &SlaThresholds::default());

    let metrics: Vec<SlaMetric> = evaluation.breaches.iter().map(|b| b.metric).collect();
    assert_eq!(metrics, SlaMetric::all().to_vec());
}

#[test]
fn missing_metric_is_a_monitor_issue_not_a_breach() {
    let mut snapshot = full_snapshot();
    snapshot.false_positive_rate = None;

    let evaluation = SlaMonitor::evaluate(&snapshot, &SlaThresholds::default());

    assert!(evaluation.breaches.is_empty());
    assert_eq!(evaluation.monitor_issues.len(), 1);
    assert_eq!(
        evaluation.monitor_issues[0].metric,
        SlaMetric::FalsePositiveRate
    );
}

#[test]
fn sustained_breach_is_suppressed_then_renotified() {
    let mut snapshot = full_snapshot();
    snapshot.p95_latency_seconds = Some(9.0);
    let thresholds = SlaThresholds::default();
    let mut tracker = BreachTracker::new(3);

    let first = SlaMonitor::evaluate(&snapshot, &thresholds);
    assert_eq!(tracker.observe(&first.breaches).len(), 1);

    // Suppressed while the breach persists.
    for _ in 0..2 {
        let cycle = SlaMonitor::evaluate(&snapshot, &thresholds);
        assert!(tracker.observe(&cycle.breaches).is_empty());
    }

    // Third suppressed cycle re-announces.
    let cycle = SlaMonitor::evaluate(&snapshot, &thresholds);
    assert_eq!(tracker.observe(&cycle.breaches).len(), 1);

    // Recovery clears the tracker; the next breach reports immediately.
    snapshot.p95_latency_seconds = Some(1.0);
    let healthy = SlaMonitor::evaluate(&snapshot, &thresholds);
    assert!(tracker.observe(&healthy.breaches).is_empty());
    assert!(tracker.active_metrics().is_empty());

    snapshot.p95_latency_seconds = Some(9.0);
    let again = SlaMonitor::evaluate(&snapshot, &thresholds);
    assert_eq!(tracker.observe(&again.breaches).len(), 1);
}

struct FixedProvider {
    snapshots: Mutex<Vec<MetricsSnapshot>>,
    fallback: MetricsSnapshot,
}

impl IMetricsProvider for FixedProvider {
    fn snapshot(&self) -> CardwatchResult<MetricsSnapshot> {
        let mut queued = self.snapshots.lock().unwrap();
        if queued.is_empty() {
            Ok(self.fallback)
        } else {
            Ok(queued.remove(0))
        }
    }
}

#[tokio::test(start_paused = true)]
async fn scheduler_reports_breach_once_then_suppresses() {
    let mut breaching = full_snapshot();
    breaching.p95_latency_seconds = Some(7.5);
    let provider = Arc::new(FixedProvider {
        snapshots: Mutex::new(Vec::new()),
        fallback: breaching,
    });
    let config = SlaConfig {
        evaluation_interval_secs: 60,
        renotify_every: 10,
        thresholds: SlaThresholds::default(),
    };

    let (handle, mut rx) = SlaScheduler::spawn(provider, config);

    let first = rx.recv().await.expect("first report");
    assert_eq!(first.reported.len(), 1);
    assert_eq!(first.reported[0].metric, SlaMetric::P95Latency);
    assert_eq!(first.evaluation.breaches.len(), 1);

    let second = rx.recv().await.expect("second report");
    assert!(second.reported.is_empty());
    assert_eq!(second.evaluation.breaches.len(), 1);

    drop(rx);
    let _ = handle.await;
}

#[tokio::test(start_paused = true)]
async fn scheduler_samples_live_processing_counters() {
    use cardwatch_detector::ProcessingStats;
    use chrono::Utc;

    let stats = Arc::new(ProcessingStats::new());
    // A handful of transactions, all just processed: fresh data, but
    // throughput and false-positive rate are not yet measurable.
    for _ in 0..5 {
        stats.record_processed(Utc::now(), 0.002);
    }
    stats.record_alert();

    let config = SlaConfig {
        evaluation_interval_secs: 60,
        renotify_every: 10,
        thresholds: SlaThresholds::default(),
    };
    let (handle, mut rx) = SlaScheduler::spawn(Arc::clone(&stats), config);

    let report = rx.recv().await.expect("first report");
    // Latency and freshness are healthy; the absent metrics surface as
    // monitor issues rather than breaches.
    assert!(report
        .evaluation
        .breaches
        .iter()
        .all(|b| b.metric != SlaMetric::P95Latency && b.metric != SlaMetric::DataFreshness));
    let missing: Vec<SlaMetric> = report
        .evaluation
        .monitor_issues
        .iter()
        .map(|i| i.metric)
        .collect();
    assert!(missing.contains(&SlaMetric::Throughput));
    assert!(missing.contains(&SlaMetric::FalsePositiveRate));

    drop(rx);
    let _ = handle.await;
}

#[tokio::test(start_paused = true)]
async fn scheduler_reports_recovery_and_fresh_breach() {
    let mut breaching = full_snapshot();
    breaching.throughput_per_minute = Some(5.0);
    let provider = Arc::new(FixedProvider {
        snapshots: Mutex::new(vec![breaching, full_snapshot()]),
        fallback: breaching,
    });
    let config = SlaConfig {
        evaluation_interval_secs: 60,
        renotify_every: 10,
        thresholds: SlaThresholds::default(),
    };

    let (handle, mut rx) = SlaScheduler::spawn(provider, config);

    let first = rx.recv().await.expect("first report");
    assert_eq!(first.reported.len(), 1);

    let healthy = rx.recv().await.expect("healthy cycle");
    assert!(healthy.reported.is_empty());
    assert!(healthy.evaluation.is_healthy());

    // Breach returns after recovery and is announced again immediately.
    let third = rx.recv().await.expect("third report");
    assert_eq!(third.reported.len(), 1);
    assert_eq!(third.reported[0].metric, SlaMetric::Throughput);

    drop(rx);
    let _ = handle.await;
}
