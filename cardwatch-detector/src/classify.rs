//! Severity classification for one (previous, current) transaction pair.

use cardwatch_core::config::DetectorConfig;
use cardwatch_core::models::Severity;

/// Classify an implied travel speed, in this exact order:
///
/// 1. The time guard always takes precedence: at or above
///    `time_guard_hours` no alert is warranted, regardless of how large
///    the speed is. A single average-speed figure over a long interval is
///    not evidence of impossibility.
/// 2. An alert needs `speed_kmh` strictly above `speed_threshold_kmh`.
/// 3. Strictly above `critical_speed_threshold_kmh` escalates to CRITICAL,
///    otherwise HIGH.
pub fn classify(speed_kmh: f64, time_delta_hours: f64, config: &DetectorConfig) -> Option<Severity> {
    if time_delta_hours >= config.time_guard_hours {
        return None;
    }
    if speed_kmh <= config.speed_threshold_kmh {
        return None;
    }
    if speed_kmh > config.critical_speed_threshold_kmh {
        Some(Severity::Critical)
    } else {
        Some(Severity::High)
    }
}
