//! Pure snapshot-in, breaches-out evaluation.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use cardwatch_core::config::SlaThresholds;
use cardwatch_core::models::{MetricsSnapshot, MonitorIssue, SlaBreach, SlaMetric};

use crate::checks::{MetricCheck, ThresholdChecker};

/// Result of one evaluation cycle. Breaches follow the fixed metric
/// order; monitor issues are health problems with the monitoring itself.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SlaEvaluation {
    pub breaches: Vec<SlaBreach>,
    pub monitor_issues: Vec<MonitorIssue>,
}

impl SlaEvaluation {
    pub fn is_healthy(&self) -> bool {
        self.breaches.is_empty()
    }
}

/// Compares metrics snapshots against the threshold table. A pure
/// function of its two inputs; all cross-cycle behavior lives in
/// [`crate::BreachTracker`].
pub struct SlaMonitor;

impl SlaMonitor {
    /// Evaluate every metric in the fixed order and collect breaches and
    /// monitor issues.
    pub fn evaluate(snapshot: &MetricsSnapshot, thresholds: &SlaThresholds) -> SlaEvaluation {
        let observed_at = Utc::now();
        let mut evaluation = SlaEvaluation::default();

        for metric in SlaMetric::all() {
            match ThresholdChecker::check(metric, snapshot, thresholds, observed_at) {
                MetricCheck::Ok => {}
                MetricCheck::Breach(breach) => evaluation.breaches.push(breach),
                MetricCheck::Missing(issue) => evaluation.monitor_issues.push(issue),
            }
        }
        evaluation
    }
}
