//! Bounded exponential backoff for transient store failures.

use std::time::Duration;

use cardwatch_core::errors::{CardwatchError, CardwatchResult};

/// Run `op`, retrying on retryable errors up to `attempts` times with
/// exponential backoff starting at `base_delay`. Non-retryable errors
/// surface immediately; exhausting the budget yields `StoreExhausted` so
/// the caller can halt the shard instead of advancing past an unstored
/// transaction.
pub async fn with_store_retry<T, F>(
    attempts: u32,
    base_delay: Duration,
    mut op: F,
) -> CardwatchResult<T>
where
    F: FnMut() -> CardwatchResult<T>,
{
    let attempts = attempts.max(1);
    let mut delay = base_delay;

    for attempt in 1..=attempts {
        match op() {
            Ok(value) => return Ok(value),
            Err(e) if !e.is_retryable() => return Err(e),
            Err(e) if attempt == attempts => {
                return Err(CardwatchError::StoreExhausted {
                    attempts,
                    last_error: e.to_string(),
                });
            }
            Err(e) => {
                tracing::warn!(attempt, error = %e, "store operation failed, backing off");
                tokio::time::sleep(delay).await;
                delay = delay.saturating_mul(2);
            }
        }
    }
    unreachable!("loop returns on the final attempt");
}
