//! Collaborator seams: the durable keyed store, the downstream alert sink,
//! and the metrics snapshot provider.

mod alert_sink;
mod metrics;
mod state_store;

pub use alert_sink::IAlertSink;
pub use metrics::IMetricsProvider;
pub use state_store::ITravelStateStore;
