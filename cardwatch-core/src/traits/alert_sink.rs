use crate::errors::CardwatchResult;
use crate::models::Alert;

/// Downstream durable append sink for alerts. Delivery is at-least-once;
/// consumers deduplicate on `Alert::dedup_key`. Emission failure is
/// non-fatal — the store's alerts table is the durable record, and
/// consumers recover missed alerts from it.
pub trait IAlertSink: Send + Sync {
    fn emit(&self, alert: &Alert) -> CardwatchResult<()>;
}
