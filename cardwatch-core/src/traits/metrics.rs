use crate::errors::CardwatchResult;
use crate::models::MetricsSnapshot;

/// Periodically-sampled source of operational metrics for the SLA monitor.
pub trait IMetricsProvider: Send + Sync {
    fn snapshot(&self) -> CardwatchResult<MetricsSnapshot>;
}
