//! # cardwatch-storage
//!
//! Durable keyed store for per-card travel state over SQLite: WAL-mode
//! write connection, versioned migrations, atomic state+alert+checkpoint
//! commits, TTL eviction, and a moka idle-TTL hot cache in front of reads.

pub mod cache;
pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;
pub mod recovery;

pub use engine::{StateStoreEngine, StoreOptions};

use cardwatch_core::errors::{CardwatchError, StorageError};

/// Wrap a raw SQLite failure message in the workspace error type.
pub(crate) fn to_storage_err(message: String) -> CardwatchError {
    CardwatchError::Storage(StorageError::SqliteError { message })
}
