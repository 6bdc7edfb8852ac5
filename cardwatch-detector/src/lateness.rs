//! Bounded-lateness watermark policy.
//!
//! Keeps per-card state numerically safe without requiring strict global
//! ordering of the input stream: events too far behind the baseline are
//! dropped, events accepted within tolerance but non-increasing in time
//! clamp their delta to a positive epsilon.

use cardwatch_core::constants::{MIN_TIME_DELTA_HOURS, SECS_PER_HOUR};
use chrono::{DateTime, Duration, Utc};

/// True when an event lags the stored baseline by more than the allowed
/// lateness and must be dropped without mutating state.
pub fn beyond_allowed_lateness(
    event_time: DateTime<Utc>,
    baseline: DateTime<Utc>,
    allowed: Duration,
) -> bool {
    event_time <= baseline - allowed
}

/// Hours elapsed from the baseline to the event, clamped to
/// [`MIN_TIME_DELTA_HOURS`] so an accepted non-increasing pair can never
/// divide by zero or go negative.
pub fn time_delta_hours(event_time: DateTime<Utc>, baseline: DateTime<Utc>) -> f64 {
    let raw = (event_time - baseline).num_milliseconds() as f64 / (SECS_PER_HOUR * 1000.0);
    if raw <= 0.0 {
        MIN_TIME_DELTA_HOURS
    } else {
        raw
    }
}
