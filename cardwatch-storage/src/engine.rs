//! StateStoreEngine — owns the write connection and hot cache, implements
//! ITravelStateStore, runs migrations and the startup recovery check.

use std::path::Path;
use std::time::Duration;

use cardwatch_core::config::{DetectorConfig, StorageConfig};
use cardwatch_core::errors::CardwatchResult;
use cardwatch_core::models::{Alert, Checkpoint, TravelState};
use cardwatch_core::traits::ITravelStateStore;

use crate::cache::StateCache;
use crate::migrations;
use crate::pool::WriteConnection;
use crate::recovery;
use crate::to_storage_err;

/// Tuning knobs for a store instance.
#[derive(Debug, Clone)]
pub struct StoreOptions {
    pub cache_capacity: u64,
    pub idle_ttl: Duration,
}

impl StoreOptions {
    /// Derive options from the loaded configuration.
    pub fn from_config(storage: &StorageConfig, detector: &DetectorConfig) -> Self {
        Self {
            cache_capacity: storage.state_cache_capacity,
            idle_ttl: Duration::from_secs(detector.state_idle_ttl_secs),
        }
    }
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self::from_config(&StorageConfig::default(), &DetectorConfig::default())
    }
}

/// The durable keyed state store. One instance per shard; all writes go
/// through the single connection it owns.
pub struct StateStoreEngine {
    writer: WriteConnection,
    cache: StateCache,
}

impl StateStoreEngine {
    /// Open a store backed by a file on disk. Reopening the same path
    /// recovers all live state and the last checkpoints.
    pub fn open(path: &Path, options: &StoreOptions) -> CardwatchResult<Self> {
        let writer = WriteConnection::open(path)?;
        let engine = Self {
            writer,
            cache: StateCache::new(options.cache_capacity, options.idle_ttl),
        };
        engine.initialize()?;
        Ok(engine)
    }

    /// Open an in-memory store (for testing; does not survive restart).
    pub fn open_in_memory(options: &StoreOptions) -> CardwatchResult<Self> {
        let writer = WriteConnection::open_in_memory()?;
        let engine = Self {
            writer,
            cache: StateCache::new(options.cache_capacity, options.idle_ttl),
        };
        engine.initialize()?;
        Ok(engine)
    }

    /// Run migrations and the startup recovery check.
    fn initialize(&self) -> CardwatchResult<()> {
        self.writer.with_conn_sync(|conn| {
            migrations::run_migrations(conn)?;
            recovery::startup_check(conn)?;
            Ok(())
        })
    }

    /// Total alerts durably recorded.
    pub fn alert_count(&self) -> CardwatchResult<usize> {
        self.writer
            .with_conn_sync(crate::queries::alert_ops::alert_count)
    }

    /// All alerts for a card, oldest first.
    pub fn alerts_for_card(&self, card_id: &str) -> CardwatchResult<Vec<Alert>> {
        self.writer
            .with_conn_sync(|conn| crate::queries::alert_ops::alerts_for_card(conn, card_id))
    }

    /// Number of live baselines.
    pub fn state_count(&self) -> CardwatchResult<usize> {
        self.writer
            .with_conn_sync(crate::queries::state_ops::state_count)
    }
}

impl ITravelStateStore for StateStoreEngine {
    fn get(&self, card_id: &str) -> CardwatchResult<Option<TravelState>> {
        if let Some(state) = self.cache.get(card_id) {
            return Ok(Some(state));
        }
        let state = self
            .writer
            .with_conn_sync(|conn| crate::queries::state_ops::get_state(conn, card_id))?;
        if let Some(ref state) = state {
            self.cache.insert(card_id, state.clone());
        }
        Ok(state)
    }

    fn put(&self, card_id: &str, state: &TravelState) -> CardwatchResult<()> {
        self.writer
            .with_conn_sync(|conn| crate::queries::state_ops::upsert_state(conn, card_id, state))?;
        self.cache.insert(card_id, state.clone());
        Ok(())
    }

    fn delete(&self, card_id: &str) -> CardwatchResult<()> {
        self.writer
            .with_conn_sync(|conn| crate::queries::state_ops::delete_state(conn, card_id))?;
        self.cache.invalidate(card_id);
        Ok(())
    }

    fn record_accepted(
        &self,
        card_id: &str,
        state: &TravelState,
        alert: Option<&Alert>,
        checkpoint: Checkpoint,
    ) -> CardwatchResult<bool> {
        let inserted = self.writer.with_conn_sync(|conn| {
            let tx = conn
                .unchecked_transaction()
                .map_err(|e| to_storage_err(format!("record_accepted begin: {e}")))?;

            let result: CardwatchResult<bool> = (|| {
                crate::queries::state_ops::upsert_state(&tx, card_id, state)?;
                let inserted = match alert {
                    Some(alert) => crate::queries::alert_ops::insert_alert(&tx, alert)?,
                    None => false,
                };
                crate::queries::checkpoint_ops::upsert_checkpoint(&tx, checkpoint)?;
                Ok(inserted)
            })();

            match result {
                Ok(inserted) => {
                    tx.commit()
                        .map_err(|e| to_storage_err(format!("record_accepted commit: {e}")))?;
                    Ok(inserted)
                }
                Err(e) => {
                    let _ = tx.rollback();
                    Err(e)
                }
            }
        })?;
        self.cache.insert(card_id, state.clone());
        Ok(inserted)
    }

    fn checkpoint(&self, shard_id: u32) -> CardwatchResult<Option<Checkpoint>> {
        self.writer
            .with_conn_sync(|conn| crate::queries::checkpoint_ops::get_checkpoint(conn, shard_id))
    }

    fn evict_idle(&self, idle_ttl: chrono::Duration) -> CardwatchResult<usize> {
        let evicted = self
            .writer
            .with_conn_sync(|conn| crate::queries::state_ops::evict_idle(conn, idle_ttl))?;
        for card_id in &evicted {
            self.cache.invalidate(card_id);
        }
        if !evicted.is_empty() {
            tracing::debug!(count = evicted.len(), "evicted idle travel state");
        }
        Ok(evicted.len())
    }
}
