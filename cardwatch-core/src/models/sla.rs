use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Severity;

/// The operational metrics the SLA monitor evaluates. Closed enum: the
/// comparison direction and breach severity are implied by metric identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlaMetric {
    P95Latency,
    DataFreshness,
    Throughput,
    FraudDetectionRate,
    FalsePositiveRate,
}

impl SlaMetric {
    /// Canonical metric name used in breach reports and logs.
    pub fn name(self) -> &'static str {
        match self {
            SlaMetric::P95Latency => "p95_latency",
            SlaMetric::DataFreshness => "data_freshness",
            SlaMetric::Throughput => "throughput_per_minute",
            SlaMetric::FraudDetectionRate => "fraud_detection_rate",
            SlaMetric::FalsePositiveRate => "false_positive_rate",
        }
    }

    /// Fixed evaluation order for breach reports.
    pub fn all() -> [SlaMetric; 5] {
        [
            SlaMetric::P95Latency,
            SlaMetric::DataFreshness,
            SlaMetric::Throughput,
            SlaMetric::FraudDetectionRate,
            SlaMetric::FalsePositiveRate,
        ]
    }
}

impl fmt::Display for SlaMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One metric outside its configured range. Ephemeral: recomputed each
/// evaluation cycle, reported but never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlaBreach {
    pub metric: SlaMetric,
    pub severity: Severity,
    pub actual_value: f64,
    pub threshold_value: f64,
    pub observed_at: DateTime<Utc>,
}

/// A monitor-health problem (for example a missing metric), distinct from
/// a business SLA breach.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorIssue {
    pub metric: SlaMetric,
    pub reason: String,
}

/// Point-in-time operational metrics fed to the SLA monitor. Every field
/// is optional so an absent metric is reportable as a monitor issue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// 95th-percentile end-to-end processing latency, seconds.
    pub p95_latency_seconds: Option<f64>,
    /// Age of the newest processed event, seconds.
    pub data_freshness_seconds: Option<f64>,
    pub throughput_per_minute: Option<f64>,
    /// Share of processed transactions that produced an alert.
    pub fraud_detection_rate: Option<f64>,
    pub false_positive_rate: Option<f64>,
}
