use crate::errors::CardwatchResult;
use crate::models::{Alert, Checkpoint, TravelState};

/// Durable keyed store for per-card travel state.
///
/// Guarantees single-writer-per-key: `get`/`put`/`record_accepted` for the
/// same card are never interleaved (the pipeline routes each card to
/// exactly one shard, and a shard owns one store). Must survive process
/// restart without losing state for active cards — losing state silently
/// degrades the detector to a stateless one with no visible error.
pub trait ITravelStateStore: Send + Sync {
    /// Fetch the current baseline for a card, if any.
    fn get(&self, card_id: &str) -> CardwatchResult<Option<TravelState>>;

    /// Upsert the baseline for a card.
    fn put(&self, card_id: &str, state: &TravelState) -> CardwatchResult<()>;

    /// Remove a card's baseline; the next transaction is a cold start.
    fn delete(&self, card_id: &str) -> CardwatchResult<()>;

    /// The atomic unit of acceptance: upsert the new baseline, durably
    /// record the alert (idempotently, keyed by its dedup key) if one was
    /// warranted, and advance the shard checkpoint — all in one
    /// transaction, so a crash can never lose an alert that advanced
    /// state or double-emit one on replay.
    ///
    /// Returns whether an alert row was newly inserted (false when no
    /// alert was passed or the dedup key already existed).
    fn record_accepted(
        &self,
        card_id: &str,
        state: &TravelState,
        alert: Option<&Alert>,
        checkpoint: Checkpoint,
    ) -> CardwatchResult<bool>;

    /// Last committed checkpoint for a shard, if any.
    fn checkpoint(&self, shard_id: u32) -> CardwatchResult<Option<Checkpoint>>;

    /// Evict entries idle longer than `idle_ttl`. Returns how many were
    /// removed.
    fn evict_idle(&self, idle_ttl: chrono::Duration) -> CardwatchResult<usize>;
}
