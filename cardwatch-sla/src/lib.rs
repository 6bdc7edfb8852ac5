//! # cardwatch-sla
//!
//! Operational SLA monitoring: pure threshold evaluation over a metrics
//! snapshot, breach hysteresis across evaluation cycles, and a periodic
//! scheduler decoupled from the transaction hot path.

pub mod checks;
pub mod hysteresis;
pub mod monitor;
pub mod scheduler;
pub mod tracing_setup;

pub use hysteresis::BreachTracker;
pub use monitor::{SlaEvaluation, SlaMonitor};
pub use scheduler::{SlaReport, SlaScheduler};
