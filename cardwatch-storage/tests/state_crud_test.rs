mod common;

use cardwatch_core::traits::ITravelStateStore;
use cardwatch_storage::{StateStoreEngine, StoreOptions};
use chrono::{Duration, Utc};
use common::{london_state, state_at};

#[test]
fn get_returns_none_for_unknown_card() -> anyhow::Result<()> {
    let store = StateStoreEngine::open_in_memory(&StoreOptions::default())?;
    assert!(store.get("never-seen")?.is_none());
    Ok(())
}

#[test]
fn put_then_get_round_trips() -> anyhow::Result<()> {
    let store = StateStoreEngine::open_in_memory(&StoreOptions::default())?;
    let state = london_state(Utc::now());
    store.put("card-1", &state)?;
    assert_eq!(store.get("card-1")?.as_ref(), Some(&state));
    Ok(())
}

#[test]
fn put_overwrites_the_previous_baseline() -> anyhow::Result<()> {
    let store = StateStoreEngine::open_in_memory(&StoreOptions::default())?;
    let now = Utc::now();
    store.put("card-1", &london_state(now))?;

    let tokyo = state_at(35.6762, 139.6503, now + Duration::minutes(15), "Tokyo");
    store.put("card-1", &tokyo)?;

    let current = store.get("card-1")?.unwrap();
    assert_eq!(current.last_location_name, "Tokyo");
    assert_eq!(store.state_count()?, 1);
    Ok(())
}

#[test]
fn delete_makes_the_next_read_a_cold_start() -> anyhow::Result<()> {
    let store = StateStoreEngine::open_in_memory(&StoreOptions::default())?;
    store.put("card-1", &london_state(Utc::now()))?;
    store.delete("card-1")?;
    assert!(store.get("card-1")?.is_none());
    Ok(())
}

#[test]
fn cards_are_isolated_from_each_other() -> anyhow::Result<()> {
    let store = StateStoreEngine::open_in_memory(&StoreOptions::default())?;
    let now = Utc::now();
    store.put("card-1", &london_state(now))?;
    store.put("card-2", &state_at(40.7128, -74.0060, now, "New York"))?;

    store.delete("card-1")?;
    assert!(store.get("card-1")?.is_none());
    assert_eq!(store.get("card-2")?.unwrap().last_location_name, "New York");
    Ok(())
}
