//! Hot tier in front of the database: a moka cache with `time_to_idle`
//! matching the state idle TTL. Expiry here is only an optimization —
//! a miss falls through to SQLite, and durable rows are removed by
//! `evict_idle` on the engine.

use std::time::Duration;

use moka::sync::Cache;

use cardwatch_core::models::TravelState;

/// Keyed in-process cache of the most recent TravelState per card.
pub struct StateCache {
    inner: Cache<String, TravelState>,
}

impl StateCache {
    pub fn new(capacity: u64, idle_ttl: Duration) -> Self {
        Self {
            inner: Cache::builder()
                .max_capacity(capacity)
                .time_to_idle(idle_ttl)
                .build(),
        }
    }

    pub fn get(&self, card_id: &str) -> Option<TravelState> {
        self.inner.get(card_id)
    }

    pub fn insert(&self, card_id: &str, state: TravelState) {
        self.inner.insert(card_id.to_string(), state);
    }

    pub fn invalidate(&self, card_id: &str) {
        self.inner.invalidate(card_id);
    }
}
