//! # cardwatch-core
//!
//! Foundation crate for the cardwatch impossible-travel detection system.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CardwatchConfig;
pub use errors::{CardwatchError, CardwatchResult};
pub use models::{
    Alert, Checkpoint, MetricsSnapshot, Severity, SlaBreach, SlaMetric, Transaction, TravelState,
};
