//! Restart recovery: the load-bearing reliability property of the store.

mod common;

use cardwatch_core::models::Checkpoint;
use cardwatch_core::traits::ITravelStateStore;
use cardwatch_storage::{StateStoreEngine, StoreOptions};
use chrono::Utc;
use common::{london_state, sample_alert};

#[test]
fn state_alerts_and_checkpoint_survive_reopen() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let db_path = dir.path().join("cardwatch.db");
    let options = StoreOptions::default();
    let now = Utc::now();

    {
        let store = StateStoreEngine::open(&db_path, &options)?;
        let alert = sample_alert("card-1", now);
        let inserted = store.record_accepted(
            "card-1",
            &london_state(now),
            Some(&alert),
            Checkpoint {
                shard_id: 0,
                offset: 41,
            },
        )?;
        assert!(inserted);
    }

    // Fresh engine over the same file: no shared in-process state.
    let store = StateStoreEngine::open(&db_path, &options)?;
    let recovered = store.get("card-1")?.expect("state lost across restart");
    assert_eq!(recovered.last_location_name, "London");
    assert_eq!(store.alert_count()?, 1);
    assert_eq!(
        store.checkpoint(0)?,
        Some(Checkpoint {
            shard_id: 0,
            offset: 41,
        })
    );
    Ok(())
}

#[test]
fn checkpoint_tracks_the_latest_commit() -> anyhow::Result<()> {
    let store = StateStoreEngine::open_in_memory(&StoreOptions::default())?;
    let now = Utc::now();

    for offset in [7u64, 8, 9] {
        store.record_accepted(
            "card-1",
            &london_state(now),
            None,
            Checkpoint {
                shard_id: 2,
                offset,
            },
        )?;
    }
    assert_eq!(store.checkpoint(2)?.unwrap().offset, 9);
    assert!(store.checkpoint(0)?.is_none());
    Ok(())
}
