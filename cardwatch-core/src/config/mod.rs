//! Configuration: per-subsystem structs with serde defaults, aggregated
//! into [`CardwatchConfig`] and loadable from TOML. Every business
//! threshold lives here rather than as an embedded literal.

mod defaults;
mod detector_config;
mod sla_config;
mod storage_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CardwatchError, CardwatchResult};

pub use detector_config::DetectorConfig;
pub use sla_config::{SlaConfig, SlaThresholds};
pub use storage_config::StorageConfig;

/// Top-level configuration for the whole system.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CardwatchConfig {
    pub detector: DetectorConfig,
    pub sla: SlaConfig,
    pub storage: StorageConfig,
}

impl CardwatchConfig {
    /// Parse configuration from a TOML string. Unset keys take defaults.
    pub fn from_toml_str(raw: &str) -> CardwatchResult<Self> {
        toml::from_str(raw).map_err(|e| CardwatchError::config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> CardwatchResult<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| CardwatchError::config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&raw)
    }
}
