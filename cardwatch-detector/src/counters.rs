//! Per-shard processing counters and the metrics snapshot they export.

use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Instant;

use cardwatch_core::constants::LATENCY_RESERVOIR_CAPACITY;
use cardwatch_core::errors::CardwatchResult;
use cardwatch_core::models::MetricsSnapshot;
use cardwatch_core::traits::IMetricsProvider;
use chrono::{DateTime, Utc};

/// Counters updated on the hot path plus the derived [`MetricsSnapshot`]
/// the SLA monitor samples. Shared between a shard worker and the
/// metrics provider via `Arc`.
pub struct ProcessingStats {
    processed: AtomicU64,
    alerts: AtomicU64,
    dropped_invalid: AtomicU64,
    dropped_late: AtomicU64,
    /// Newest processed event time, epoch milliseconds. i64::MIN = none yet.
    last_event_time_ms: AtomicI64,
    latencies: Mutex<LatencyReservoir>,
    throughput: Mutex<ThroughputWindow>,
    /// Fed by an external labeling job; absent until one reports.
    false_positive_rate_mille: AtomicI64,
}

impl ProcessingStats {
    pub fn new() -> Self {
        Self {
            processed: AtomicU64::new(0),
            alerts: AtomicU64::new(0),
            dropped_invalid: AtomicU64::new(0),
            dropped_late: AtomicU64::new(0),
            last_event_time_ms: AtomicI64::new(i64::MIN),
            latencies: Mutex::new(LatencyReservoir::new(LATENCY_RESERVOIR_CAPACITY)),
            throughput: Mutex::new(ThroughputWindow::new()),
            false_positive_rate_mille: AtomicI64::new(-1),
        }
    }

    /// Record one accepted transaction.
    pub fn record_processed(&self, event_time: DateTime<Utc>, latency_seconds: f64) {
        self.processed.fetch_add(1, Ordering::Relaxed);
        self.last_event_time_ms
            .fetch_max(event_time.timestamp_millis(), Ordering::Relaxed);
        if let Ok(mut reservoir) = self.latencies.lock() {
            reservoir.push(latency_seconds);
        }
    }

    pub fn record_alert(&self) {
        self.alerts.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_dropped_invalid(&self) {
        self.dropped_invalid.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_dropped_late(&self) {
        self.dropped_late.fetch_add(1, Ordering::Relaxed);
    }

    /// Set the externally-measured false-positive rate, per mille.
    pub fn set_false_positive_rate(&self, rate: f64) {
        self.false_positive_rate_mille
            .store((rate * 1000.0) as i64, Ordering::Relaxed);
    }

    pub fn processed(&self) -> u64 {
        self.processed.load(Ordering::Relaxed)
    }

    pub fn alerts(&self) -> u64 {
        self.alerts.load(Ordering::Relaxed)
    }

    pub fn dropped_invalid(&self) -> u64 {
        self.dropped_invalid.load(Ordering::Relaxed)
    }

    pub fn dropped_late(&self) -> u64 {
        self.dropped_late.load(Ordering::Relaxed)
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}

impl IMetricsProvider for ProcessingStats {
    fn snapshot(&self) -> CardwatchResult<MetricsSnapshot> {
        let processed = self.processed();
        let alerts = self.alerts();

        let p95_latency_seconds = self
            .latencies
            .lock()
            .ok()
            .and_then(|reservoir| reservoir.p95());

        let last_ms = self.last_event_time_ms.load(Ordering::Relaxed);
        let data_freshness_seconds = (last_ms != i64::MIN).then(|| {
            let age_ms = Utc::now().timestamp_millis() - last_ms;
            (age_ms as f64 / 1000.0).max(0.0)
        });

        let throughput_per_minute = self
            .throughput
            .lock()
            .ok()
            .and_then(|mut window| window.rate_per_minute(processed));

        let fraud_detection_rate =
            (processed > 0).then(|| alerts as f64 / processed as f64);

        let fpr_mille = self.false_positive_rate_mille.load(Ordering::Relaxed);
        let false_positive_rate = (fpr_mille >= 0).then(|| fpr_mille as f64 / 1000.0);

        Ok(MetricsSnapshot {
            p95_latency_seconds,
            data_freshness_seconds,
            throughput_per_minute,
            fraud_detection_rate,
            false_positive_rate,
        })
    }
}

/// Bounded ring of recent latencies for the p95 estimate.
struct LatencyReservoir {
    samples: Vec<f64>,
    capacity: usize,
    next: usize,
}

impl LatencyReservoir {
    fn new(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
            capacity,
            next: 0,
        }
    }

    fn push(&mut self, latency_seconds: f64) {
        if self.samples.len() < self.capacity {
            self.samples.push(latency_seconds);
        } else {
            self.samples[self.next] = latency_seconds;
            self.next = (self.next + 1) % self.capacity;
        }
    }

    fn p95(&self) -> Option<f64> {
        if self.samples.is_empty() {
            return None;
        }
        let mut sorted = self.samples.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let rank = ((sorted.len() as f64) * 0.95).ceil() as usize;
        Some(sorted[rank.saturating_sub(1).min(sorted.len() - 1)])
    }
}

/// Throughput measured between successive snapshots.
struct ThroughputWindow {
    last_sample: Option<(Instant, u64)>,
}

impl ThroughputWindow {
    fn new() -> Self {
        Self { last_sample: None }
    }

    fn rate_per_minute(&mut self, processed_total: u64) -> Option<f64> {
        let now = Instant::now();
        let rate = self.last_sample.and_then(|(at, count)| {
            let elapsed = now.duration_since(at).as_secs_f64();
            (elapsed > 0.0)
                .then(|| (processed_total.saturating_sub(count)) as f64 * 60.0 / elapsed)
        });
        self.last_sample = Some((now, processed_total));
        rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn p95_of_uniform_samples() {
        let mut reservoir = LatencyReservoir::new(100);
        for i in 1..=100 {
            reservoir.push(i as f64 / 100.0);
        }
        let p95 = reservoir.p95().unwrap();
        assert!((p95 - 0.95).abs() < 1e-9, "got {p95}");
    }

    #[test]
    fn reservoir_overwrites_oldest_beyond_capacity() {
        let mut reservoir = LatencyReservoir::new(4);
        for i in 0..8 {
            reservoir.push(i as f64);
        }
        assert_eq!(reservoir.samples.len(), 4);
    }

    #[test]
    fn detection_rate_requires_processed_transactions() {
        let stats = ProcessingStats::new();
        assert!(stats.snapshot().unwrap().fraud_detection_rate.is_none());

        stats.record_processed(Utc::now(), 0.01);
        stats.record_alert();
        let snapshot = stats.snapshot().unwrap();
        assert_eq!(snapshot.fraud_detection_rate, Some(1.0));
        assert!(snapshot.data_freshness_seconds.unwrap() < 5.0);
    }

    #[test]
    fn false_positive_rate_is_absent_until_reported() {
        let stats = ProcessingStats::new();
        assert!(stats.snapshot().unwrap().false_positive_rate.is_none());
        stats.set_false_positive_rate(0.02);
        assert_eq!(stats.snapshot().unwrap().false_positive_rate, Some(0.02));
    }
}
