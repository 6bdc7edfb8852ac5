//! Sharded processing pipeline.
//!
//! Transactions are routed by hash(card_id) to one of N worker tasks, each
//! owning its own detector engine and store. Single-writer-per-key follows
//! from the routing; shards share nothing and proceed fully in parallel.
//! A shard that exhausts its store retry budget halts rather than fall
//! back to unsafe stateless processing.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use cardwatch_core::config::DetectorConfig;
use cardwatch_core::errors::{CardwatchError, CardwatchResult};
use cardwatch_core::models::Transaction;
use cardwatch_core::traits::{IAlertSink, ITravelStateStore};

use crate::counters::ProcessingStats;
use crate::engine::{DetectorEngine, Outcome};
use crate::retry;

/// How often each worker sweeps idle state out of its store.
const EVICTION_SWEEP_INTERVAL_SECS: u64 = 3600;

/// Lifecycle of one shard worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShardStatus {
    Running,
    /// The worker exited after an unrecoverable store failure.
    Halted(String),
}

struct Envelope {
    txn: Transaction,
    offset: u64,
}

/// Routes transactions to shard workers and tracks their health.
pub struct ShardRouter {
    senders: Vec<mpsc::Sender<Envelope>>,
    health: Arc<DashMap<u32, ShardStatus>>,
    stats: Vec<Arc<ProcessingStats>>,
    handles: Vec<JoinHandle<CardwatchResult<()>>>,
}

impl ShardRouter {
    /// Spawn one worker per store. `stores.len()` defines the shard count;
    /// each worker owns its store and engine exclusively.
    pub fn spawn<S, K>(stores: Vec<S>, sink: Arc<K>, config: DetectorConfig) -> Self
    where
        S: ITravelStateStore + 'static,
        K: IAlertSink + 'static,
    {
        assert!(!stores.is_empty(), "a router needs at least one shard store");
        let health: Arc<DashMap<u32, ShardStatus>> = Arc::new(DashMap::new());
        let mut senders = Vec::with_capacity(stores.len());
        let mut stats = Vec::with_capacity(stores.len());
        let mut handles = Vec::with_capacity(stores.len());

        for (shard_id, store) in stores.into_iter().enumerate() {
            let shard_id = shard_id as u32;
            let (tx, rx) = mpsc::channel(config.shard_channel_capacity);
            let engine = DetectorEngine::new(store, config.clone(), shard_id);

            health.insert(shard_id, ShardStatus::Running);
            stats.push(engine.stats());
            senders.push(tx);
            handles.push(tokio::spawn(shard_worker(
                engine,
                rx,
                Arc::clone(&sink),
                Arc::clone(&health),
                config.clone(),
            )));
        }

        Self {
            senders,
            health,
            stats,
            handles,
        }
    }

    /// Stable shard assignment for a card. A degenerate shard count of
    /// zero maps everything to shard 0 instead of dividing by zero.
    pub fn shard_for(card_id: &str, shard_count: usize) -> usize {
        let mut hasher = DefaultHasher::new();
        card_id.hash(&mut hasher);
        (hasher.finish() % shard_count.max(1) as u64) as usize
    }

    /// Enqueue a transaction on its owning shard.
    pub async fn route(&self, txn: Transaction, offset: u64) -> CardwatchResult<()> {
        let shard = Self::shard_for(&txn.card_id, self.senders.len());
        self.senders[shard]
            .send(Envelope { txn, offset })
            .await
            .map_err(|_| CardwatchError::ShardUnavailable {
                shard_id: shard as u32,
            })
    }

    /// Current status of one shard.
    pub fn shard_status(&self, shard_id: u32) -> Option<ShardStatus> {
        self.health.get(&shard_id).map(|entry| entry.clone())
    }

    /// Shards that have halted, with their failure messages.
    pub fn halted_shards(&self) -> Vec<(u32, String)> {
        self.health
            .iter()
            .filter_map(|entry| match entry.value() {
                ShardStatus::Halted(reason) => Some((*entry.key(), reason.clone())),
                ShardStatus::Running => None,
            })
            .collect()
    }

    /// Per-shard counters, indexed by shard id.
    pub fn shard_stats(&self) -> &[Arc<ProcessingStats>] {
        &self.stats
    }

    /// Close the input and wait for every worker to drain.
    pub async fn shutdown(self) -> Vec<CardwatchResult<()>> {
        drop(self.senders);
        let mut results = Vec::with_capacity(self.handles.len());
        for handle in self.handles {
            results.push(match handle.await {
                Ok(result) => result,
                Err(e) => Err(CardwatchError::config(format!("worker panicked: {e}"))),
            });
        }
        results
    }
}

async fn shard_worker<S, K>(
    engine: DetectorEngine<S>,
    mut rx: mpsc::Receiver<Envelope>,
    sink: Arc<K>,
    health: Arc<DashMap<u32, ShardStatus>>,
    config: DetectorConfig,
) -> CardwatchResult<()>
where
    S: ITravelStateStore,
    K: IAlertSink,
{
    let shard_id = engine.shard_id();
    let base_delay = Duration::from_millis(config.store_retry_base_delay_ms);
    let mut eviction_tick =
        tokio::time::interval(Duration::from_secs(EVICTION_SWEEP_INTERVAL_SECS));
    eviction_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    eviction_tick.tick().await; // first tick completes immediately

    loop {
        tokio::select! {
            envelope = rx.recv() => {
                let Some(envelope) = envelope else { break };
                let outcome = retry::with_store_retry(
                    config.store_retry_attempts,
                    base_delay,
                    || engine.process(&envelope.txn, envelope.offset),
                )
                .await;

                match outcome {
                    Ok(Outcome::Alerted(alert)) => {
                        // At-least-once delivery downstream; consumers
                        // dedup on the alert's dedup_key. The alerts table
                        // is the durable record: a sink that stays down
                        // past the retry budget loses nothing, consumers
                        // recover missed alerts from the table.
                        let emitted = retry::with_store_retry(
                            config.store_retry_attempts,
                            base_delay,
                            || sink.emit(&alert),
                        )
                        .await;
                        if let Err(e) = emitted {
                            tracing::warn!(
                                shard_id,
                                dedup_key = %alert.dedup_key,
                                error = %e,
                                "alert sink emit failed; alert remains in the alerts table"
                            );
                        }
                    }
                    Ok(_) => {}
                    Err(e) => {
                        tracing::error!(shard_id, error = %e, "halting shard on unrecoverable store failure");
                        health.insert(shard_id, ShardStatus::Halted(e.to_string()));
                        return Err(e);
                    }
                }
            }
            _ = eviction_tick.tick() => {
                if let Err(e) = engine.evict_idle() {
                    tracing::warn!(shard_id, error = %e, "idle-state eviction sweep failed");
                }
            }
        }
    }
    Ok(())
}
