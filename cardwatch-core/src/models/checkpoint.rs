use serde::{Deserialize, Serialize};

/// Consumed position in the input stream for one shard. Committed in the
/// same store transaction as the state update it covers, so crash-recovery
/// replay starts from a position consistent with the persisted state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub shard_id: u32,
    pub offset: u64,
}
