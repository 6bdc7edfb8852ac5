//! # cardwatch-detector
//!
//! The stateful keyed impossible-travel detector: per-card baseline
//! comparison, bounded-lateness watermarking, implied-speed severity
//! classification, atomic alert emission, and the sharded processing
//! pipeline with single-writer-per-key routing.

pub mod classify;
pub mod counters;
pub mod engine;
pub mod lateness;
pub mod pipeline;
pub mod retry;

pub use counters::ProcessingStats;
pub use engine::{DetectorEngine, Outcome};
pub use pipeline::{ShardRouter, ShardStatus};
