use serde::{Deserialize, Serialize};

use super::defaults;

/// Detector and pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Implied speed above which (strictly) a pair is alertable, km/h.
    pub speed_threshold_kmh: f64,
    /// Time gaps at or above this many hours never alert, regardless of
    /// speed. A single average-speed figure over a long interval is not
    /// evidence of impossibility.
    pub time_guard_hours: f64,
    /// Implied speed above which (strictly) an alert escalates to CRITICAL.
    pub critical_speed_threshold_kmh: f64,
    /// How far behind the stored baseline an event may lag and still be
    /// accepted, seconds.
    pub allowed_lateness_secs: u64,
    /// Idle window after which a card's state is evicted, seconds.
    pub state_idle_ttl_secs: u64,
    /// Number of worker shards the card keyspace is partitioned across.
    pub shard_count: usize,
    /// Per-shard input channel capacity.
    pub shard_channel_capacity: usize,
    /// Store retry budget before a transaction is surfaced as a
    /// processing error.
    pub store_retry_attempts: u32,
    /// Base delay for exponential retry backoff, milliseconds.
    pub store_retry_base_delay_ms: u64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            speed_threshold_kmh: defaults::DEFAULT_SPEED_THRESHOLD_KMH,
            time_guard_hours: defaults::DEFAULT_TIME_GUARD_HOURS,
            critical_speed_threshold_kmh: defaults::DEFAULT_CRITICAL_SPEED_THRESHOLD_KMH,
            allowed_lateness_secs: defaults::DEFAULT_ALLOWED_LATENESS_SECS,
            state_idle_ttl_secs: defaults::DEFAULT_STATE_IDLE_TTL_SECS,
            shard_count: defaults::DEFAULT_SHARD_COUNT,
            shard_channel_capacity: defaults::DEFAULT_SHARD_CHANNEL_CAPACITY,
            store_retry_attempts: defaults::DEFAULT_STORE_RETRY_ATTEMPTS,
            store_retry_base_delay_ms: defaults::DEFAULT_STORE_RETRY_BASE_DELAY_MS,
        }
    }
}

impl DetectorConfig {
    /// Allowed lateness as a chrono duration.
    pub fn allowed_lateness(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.allowed_lateness_secs as i64)
    }

    /// Idle TTL as a chrono duration.
    pub fn state_idle_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.state_idle_ttl_secs as i64)
    }
}
