//! Startup recovery: integrity check, WAL verification, and a best-effort
//! WAL checkpoint when corruption is suspected.

use rusqlite::Connection;

use cardwatch_core::errors::{CardwatchError, CardwatchResult, StorageError};

use crate::pool::pragmas;
use crate::queries::maintenance;

/// Validate the database on open. A failed integrity check after a WAL
/// recovery attempt is unrecoverable: the affected shard must halt rather
/// than run stateless.
pub fn startup_check(conn: &Connection) -> CardwatchResult<()> {
    if !maintenance::integrity_check(conn)? {
        tracing::warn!("integrity check failed, attempting WAL recovery");
        if !attempt_wal_recovery(conn) || !maintenance::integrity_check(conn)? {
            return Err(CardwatchError::Storage(StorageError::CorruptionDetected {
                details: "integrity_check failed after WAL recovery".to_string(),
            }));
        }
    }
    if !pragmas::verify_wal_mode(conn)? {
        tracing::warn!("journal_mode is not WAL; durability guarantees are weaker");
    }
    Ok(())
}

/// Attempt to recover by forcing a WAL checkpoint.
pub fn attempt_wal_recovery(conn: &Connection) -> bool {
    match conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE)") {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("WAL checkpoint recovery failed: {e}");
            false
        }
    }
}
