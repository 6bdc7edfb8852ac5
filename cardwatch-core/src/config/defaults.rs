//! Default values for every configurable threshold.

// Detector thresholds (business policy, strict `>` comparisons).
pub const DEFAULT_SPEED_THRESHOLD_KMH: f64 = 900.0;
pub const DEFAULT_TIME_GUARD_HOURS: f64 = 2.0;
pub const DEFAULT_CRITICAL_SPEED_THRESHOLD_KMH: f64 = 10_000.0;

// Watermark / state lifetime.
pub const DEFAULT_ALLOWED_LATENESS_SECS: u64 = 300;
pub const DEFAULT_STATE_IDLE_TTL_SECS: u64 = 86_400;

// Pipeline.
pub const DEFAULT_SHARD_COUNT: usize = 4;
pub const DEFAULT_SHARD_CHANNEL_CAPACITY: usize = 1024;
pub const DEFAULT_STORE_RETRY_ATTEMPTS: u32 = 3;
pub const DEFAULT_STORE_RETRY_BASE_DELAY_MS: u64 = 50;

// Storage.
pub const DEFAULT_STATE_CACHE_CAPACITY: u64 = 100_000;

// SLA monitoring.
pub const DEFAULT_EVALUATION_INTERVAL_SECS: u64 = 60;
pub const DEFAULT_RENOTIFY_EVERY: u64 = 10;
pub const DEFAULT_P95_LATENCY_SECONDS: f64 = 5.0;
pub const DEFAULT_DATA_FRESHNESS_SECONDS: f64 = 120.0;
pub const DEFAULT_MIN_THROUGHPUT_PER_MINUTE: f64 = 100.0;
pub const DEFAULT_MIN_FRAUD_DETECTION_RATE: f64 = 0.001;
pub const DEFAULT_MAX_FALSE_POSITIVE_RATE: f64 = 0.05;
