//! DetectorEngine — consumes transactions for one shard, consults and
//! updates the keyed store, and emits alerts for impossible travel.

use std::sync::Arc;
use std::time::Instant;

use cardwatch_core::config::DetectorConfig;
use cardwatch_core::errors::CardwatchResult;
use cardwatch_core::models::{Alert, Checkpoint, Transaction, TravelState};
use cardwatch_core::traits::ITravelStateStore;

use crate::classify;
use crate::counters::ProcessingStats;
use crate::lateness;

/// What processing one transaction did.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// First transaction for the card; baseline created, no alert possible.
    ColdStart,
    /// Accepted and recorded without an alert. Also the result of
    /// replaying an already-alerted pair.
    Recorded,
    /// Accepted, recorded, and a new alert durably emitted.
    Alerted(Alert),
    /// Older than the allowed lateness relative to the baseline; dropped,
    /// state untouched.
    DroppedLate,
    /// Failed coordinate or record validation; dropped.
    DroppedInvalid,
}

/// The per-shard detector. Owns its store: the pipeline routes each card
/// to exactly one shard, so state access is single-writer-per-key.
pub struct DetectorEngine<S> {
    store: S,
    config: DetectorConfig,
    shard_id: u32,
    stats: Arc<ProcessingStats>,
}

impl<S: ITravelStateStore> DetectorEngine<S> {
    pub fn new(store: S, config: DetectorConfig, shard_id: u32) -> Self {
        Self {
            store,
            config,
            shard_id,
            stats: Arc::new(ProcessingStats::new()),
        }
    }

    /// Shared handle to this shard's counters, for metrics sampling.
    pub fn stats(&self) -> Arc<ProcessingStats> {
        Arc::clone(&self.stats)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn shard_id(&self) -> u32 {
        self.shard_id
    }

    /// Process one transaction at the given input-stream offset.
    pub fn process(&self, txn: &Transaction, offset: u64) -> CardwatchResult<Outcome> {
        let started = Instant::now();

        if cardwatch_geo::validate(txn.latitude, txn.longitude).is_err() {
            self.stats.record_dropped_invalid();
            tracing::warn!(
                card_id = %txn.card_id,
                latitude = txn.latitude,
                longitude = txn.longitude,
                "dropping transaction with out-of-range coordinates"
            );
            return Ok(Outcome::DroppedInvalid);
        }

        let checkpoint = Checkpoint {
            shard_id: self.shard_id,
            offset,
        };
        let new_state = TravelState::from_transaction(txn);

        let Some(prev) = self.store.get(&txn.card_id)? else {
            self.store
                .record_accepted(&txn.card_id, &new_state, None, checkpoint)?;
            self.finish(txn, started);
            tracing::debug!(card_id = %txn.card_id, "cold start, baseline created");
            return Ok(Outcome::ColdStart);
        };

        if lateness::beyond_allowed_lateness(
            txn.event_time,
            prev.last_event_time,
            self.config.allowed_lateness(),
        ) {
            self.stats.record_dropped_late();
            tracing::warn!(
                card_id = %txn.card_id,
                event_time = %txn.event_time,
                baseline = %prev.last_event_time,
                "dropping event beyond allowed lateness"
            );
            return Ok(Outcome::DroppedLate);
        }

        let distance_km = cardwatch_geo::haversine_km(
            prev.last_latitude,
            prev.last_longitude,
            txn.latitude,
            txn.longitude,
        )?;
        let time_delta_hours = lateness::time_delta_hours(txn.event_time, prev.last_event_time);
        let speed_kmh = distance_km / time_delta_hours;

        match classify::classify(speed_kmh, time_delta_hours, &self.config) {
            Some(severity) => {
                let alert =
                    Alert::from_pair(txn, &prev, severity, distance_km, time_delta_hours, speed_kmh);
                // Alert emission and state update are one logical unit:
                // the store commits both or neither.
                let inserted =
                    self.store
                        .record_accepted(&txn.card_id, &new_state, Some(&alert), checkpoint)?;
                self.finish(txn, started);
                if inserted {
                    self.stats.record_alert();
                    tracing::info!(
                        card_id = %txn.card_id,
                        severity = %alert.severity,
                        distance_km,
                        time_delta_hours,
                        speed_kmh,
                        from = %alert.location_from,
                        to = %alert.location_to,
                        "impossible travel detected"
                    );
                    Ok(Outcome::Alerted(alert))
                } else {
                    tracing::debug!(card_id = %txn.card_id, "replayed pair, alert already recorded");
                    Ok(Outcome::Recorded)
                }
            }
            None => {
                self.store
                    .record_accepted(&txn.card_id, &new_state, None, checkpoint)?;
                self.finish(txn, started);
                Ok(Outcome::Recorded)
            }
        }
    }

    /// Evict baselines idle longer than the configured TTL.
    pub fn evict_idle(&self) -> CardwatchResult<usize> {
        self.store.evict_idle(self.config.state_idle_ttl())
    }

    /// Last committed checkpoint for this shard.
    pub fn checkpoint(&self) -> CardwatchResult<Option<Checkpoint>> {
        self.store.checkpoint(self.shard_id)
    }

    fn finish(&self, txn: &Transaction, started: Instant) {
        self.stats
            .record_processed(txn.event_time, started.elapsed().as_secs_f64());
    }
}
