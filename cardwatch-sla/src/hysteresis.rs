//! Cross-cycle breach deduplication.
//!
//! A sustained breach is reported when it first appears, suppressed while
//! it persists, and re-announced every `renotify_every` cycles so it
//! cannot silently stay broken. Clearing a metric resets its tracker.

use std::collections::HashMap;

use cardwatch_core::models::{SlaBreach, SlaMetric};

/// Tracks which metrics are actively breaching and decides what to report
/// this cycle.
#[derive(Debug)]
pub struct BreachTracker {
    /// 0 reports every cycle (suppression disabled).
    renotify_every: u64,
    /// Cycles since each active breach was last reported.
    active: HashMap<SlaMetric, u64>,
}

impl BreachTracker {
    pub fn new(renotify_every: u64) -> Self {
        Self {
            renotify_every,
            active: HashMap::new(),
        }
    }

    /// Feed one cycle's breach list; returns the subset to report.
    pub fn observe(&mut self, breaches: &[SlaBreach]) -> Vec<SlaBreach> {
        // Metrics that stopped breaching recover and will re-report on
        // their next appearance.
        self.active
            .retain(|metric, _| breaches.iter().any(|b| b.metric == *metric));

        let mut reported = Vec::new();
        for breach in breaches {
            match self.active.get_mut(&breach.metric) {
                None => {
                    self.active.insert(breach.metric, 0);
                    reported.push(breach.clone());
                }
                Some(cycles_since_report) => {
                    if self.renotify_every == 0 {
                        reported.push(breach.clone());
                        continue;
                    }
                    *cycles_since_report += 1;
                    if *cycles_since_report >= self.renotify_every {
                        *cycles_since_report = 0;
                        reported.push(breach.clone());
                    }
                }
            }
        }
        reported
    }

    /// Metrics currently in breach.
    pub fn active_metrics(&self) -> Vec<SlaMetric> {
        self.active.keys().copied().collect()
    }
}
