//! Error types for the cardwatch workspace.
//!
//! `CardwatchError` is the top-level error every crate returns; per-concern
//! enums (storage) nest inside it via `#[from]`.

mod storage_error;

pub use storage_error::StorageError;

/// Result alias used across the workspace.
pub type CardwatchResult<T> = Result<T, CardwatchError>;

/// Top-level error for all cardwatch operations.
#[derive(Debug, thiserror::Error)]
pub enum CardwatchError {
    /// A coordinate fell outside [-90,90] latitude or [-180,180] longitude.
    /// Recoverable: the caller drops and counts the transaction.
    #[error("invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    /// A transaction record failed validation for a non-coordinate reason.
    #[error("invalid record: {reason}")]
    InvalidRecord { reason: String },

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("config error: {message}")]
    Config { message: String },

    /// The store stayed unavailable through every retry attempt.
    /// The affected shard must halt rather than advance state.
    #[error("store unavailable after {attempts} attempts: {last_error}")]
    StoreExhausted { attempts: u32, last_error: String },

    /// The pipeline channel for a shard closed before the transaction
    /// could be enqueued.
    #[error("shard {shard_id} is no longer accepting transactions")]
    ShardUnavailable { shard_id: u32 },
}

impl CardwatchError {
    /// Build a config error from any displayable cause.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Whether a retry against the store could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Storage(StorageError::SqliteError { .. }))
    }
}
