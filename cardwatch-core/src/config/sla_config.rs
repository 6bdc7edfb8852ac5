use serde::{Deserialize, Serialize};

use super::defaults;

/// SLA monitoring configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SlaConfig {
    /// Interval between evaluation cycles, seconds.
    pub evaluation_interval_secs: u64,
    /// Re-announce a still-active breach every this many cycles.
    /// 0 disables suppression and reports every cycle.
    pub renotify_every: u64,
    pub thresholds: SlaThresholds,
}

impl Default for SlaConfig {
    fn default() -> Self {
        Self {
            evaluation_interval_secs: defaults::DEFAULT_EVALUATION_INTERVAL_SECS,
            renotify_every: defaults::DEFAULT_RENOTIFY_EVERY,
            thresholds: SlaThresholds::default(),
        }
    }
}

/// Threshold table. Comparison direction is implied by metric identity:
/// latency, freshness, and false-positive rate breach above their
/// thresholds; throughput and detection rate breach below theirs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SlaThresholds {
    pub p95_latency_seconds: f64,
    pub data_freshness_seconds: f64,
    pub min_throughput_per_minute: f64,
    pub min_fraud_detection_rate: f64,
    pub max_false_positive_rate: f64,
}

impl Default for SlaThresholds {
    fn default() -> Self {
        Self {
            p95_latency_seconds: defaults::DEFAULT_P95_LATENCY_SECONDS,
            data_freshness_seconds: defaults::DEFAULT_DATA_FRESHNESS_SECONDS,
            min_throughput_per_minute: defaults::DEFAULT_MIN_THROUGHPUT_PER_MINUTE,
            min_fraud_detection_rate: defaults::DEFAULT_MIN_FRAUD_DETECTION_RATE,
            max_false_positive_rate: defaults::DEFAULT_MAX_FALSE_POSITIVE_RATE,
        }
    }
}
