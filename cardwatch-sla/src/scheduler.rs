//! Periodic evaluation loop, decoupled from the transaction hot path.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use cardwatch_core::config::SlaConfig;
use cardwatch_core::models::SlaBreach;
use cardwatch_core::traits::IMetricsProvider;

use crate::hysteresis::BreachTracker;
use crate::monitor::{SlaEvaluation, SlaMonitor};

/// One evaluation cycle's output: the full evaluation plus the breaches
/// the hysteresis policy selected for reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlaReport {
    pub evaluation: SlaEvaluation,
    pub reported: Vec<SlaBreach>,
    pub observed_at: DateTime<Utc>,
}

/// Samples a metrics provider on a fixed interval and forwards reports.
pub struct SlaScheduler;

impl SlaScheduler {
    /// Spawn the evaluation loop. The task runs until the report receiver
    /// is dropped. A failed snapshot is a monitor-health problem: it is
    /// logged and the cycle skipped, never an SLA breach.
    pub fn spawn<P>(provider: Arc<P>, config: SlaConfig) -> (JoinHandle<()>, mpsc::Receiver<SlaReport>)
    where
        P: IMetricsProvider + 'static,
    {
        let (tx, rx) = mpsc::channel(16);
        let handle = tokio::spawn(async move {
            let mut tracker = BreachTracker::new(config.renotify_every);
            let mut tick =
                tokio::time::interval(Duration::from_secs(config.evaluation_interval_secs.max(1)));
            tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

            loop {
                tick.tick().await;

                let snapshot = match provider.snapshot() {
                    Ok(snapshot) => snapshot,
                    Err(e) => {
                        tracing::warn!(error = %e, "metrics snapshot failed, skipping cycle");
                        continue;
                    }
                };

                let evaluation = SlaMonitor::evaluate(&snapshot, &config.thresholds);
                for issue in &evaluation.monitor_issues {
                    tracing::debug!(metric = %issue.metric, reason = %issue.reason, "monitor issue");
                }

                let reported = tracker.observe(&evaluation.breaches);
                for breach in &reported {
                    tracing::warn!(
                        metric = %breach.metric,
                        severity = %breach.severity,
                        actual = breach.actual_value,
                        threshold = breach.threshold_value,
                        "SLA breach"
                    );
                }

                let report = SlaReport {
                    evaluation,
                    reported,
                    observed_at: Utc::now(),
                };
                if tx.send(report).await.is_err() {
                    break;
                }
            }
        });
        (handle, rx)
    }
}
