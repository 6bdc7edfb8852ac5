//! Data model: transactions in, alerts and SLA breaches out, travel state
//! and checkpoints in between.

mod alert;
mod checkpoint;
mod sla;
mod transaction;
mod travel_state;

pub use alert::{Alert, Severity};
pub use checkpoint::Checkpoint;
pub use sla::{MetricsSnapshot, MonitorIssue, SlaBreach, SlaMetric};
pub use transaction::Transaction;
pub use travel_state::TravelState;
