use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Durable state store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Database file path. None selects an in-memory database, which does
    /// not survive restart and is only suitable for tests.
    pub db_path: Option<PathBuf>,
    /// Capacity of the in-process hot cache in front of the database.
    pub state_cache_capacity: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            state_cache_capacity: defaults::DEFAULT_STATE_CACHE_CAPACITY,
        }
    }
}
