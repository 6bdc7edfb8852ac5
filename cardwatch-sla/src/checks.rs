//! Per-metric threshold checks. Comparison direction and breach severity
//! are implied by metric identity: latency, freshness, and false-positive
//! rate breach above their thresholds; throughput and detection rate
//! breach below theirs; freshness breaches are CRITICAL, the rest HIGH.

use chrono::{DateTime, Utc};

use cardwatch_core::config::SlaThresholds;
use cardwatch_core::models::{MetricsSnapshot, MonitorIssue, Severity, SlaBreach, SlaMetric};

/// Outcome of checking one metric against its threshold.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricCheck {
    Ok,
    Breach(SlaBreach),
    /// The metric was absent from the snapshot — a monitor-health issue,
    /// not a business breach.
    Missing(MonitorIssue),
}

/// Runs threshold checks against a snapshot.
pub struct ThresholdChecker;

impl ThresholdChecker {
    /// Check one metric at the given observation time.
    pub fn check(
        metric: SlaMetric,
        snapshot: &MetricsSnapshot,
        thresholds: &SlaThresholds,
        observed_at: DateTime<Utc>,
    ) -> MetricCheck {
        let (value, threshold) = match metric {
            SlaMetric::P95Latency => (
                snapshot.p95_latency_seconds,
                thresholds.p95_latency_seconds,
            ),
            SlaMetric::DataFreshness => (
                snapshot.data_freshness_seconds,
                thresholds.data_freshness_seconds,
            ),
            SlaMetric::Throughput => (
                snapshot.throughput_per_minute,
                thresholds.min_throughput_per_minute,
            ),
            SlaMetric::FraudDetectionRate => (
                snapshot.fraud_detection_rate,
                thresholds.min_fraud_detection_rate,
            ),
            SlaMetric::FalsePositiveRate => (
                snapshot.false_positive_rate,
                thresholds.max_false_positive_rate,
            ),
        };

        let Some(actual) = value else {
            return MetricCheck::Missing(MonitorIssue {
                metric,
                reason: "metric absent from snapshot".to_string(),
            });
        };

        let breached = match Self::direction(metric) {
            Direction::BreachAbove => actual > threshold,
            Direction::BreachBelow => actual < threshold,
        };
        if breached {
            MetricCheck::Breach(SlaBreach {
                metric,
                severity: Self::breach_severity(metric),
                actual_value: actual,
                threshold_value: threshold,
                observed_at,
            })
        } else {
            MetricCheck::Ok
        }
    }

    fn direction(metric: SlaMetric) -> Direction {
        match metric {
            SlaMetric::P95Latency | SlaMetric::DataFreshness | SlaMetric::FalsePositiveRate => {
                Direction::BreachAbove
            }
            SlaMetric::Throughput | SlaMetric::FraudDetectionRate => Direction::BreachBelow,
        }
    }

    /// Stale data means the whole detection window is suspect, so
    /// freshness escalates.
    fn breach_severity(metric: SlaMetric) -> Severity {
        match metric {
            SlaMetric::DataFreshness => Severity::Critical,
            _ => Severity::High,
        }
    }
}

enum Direction {
    BreachAbove,
    BreachBelow,
}
