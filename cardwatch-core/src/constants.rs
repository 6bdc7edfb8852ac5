/// Cardwatch system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Mean Earth radius in kilometers, used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Floor applied to the time delta between two accepted transactions.
/// One second, expressed in hours. Non-increasing timestamps accepted
/// within the lateness bound clamp to this instead of dividing by zero.
pub const MIN_TIME_DELTA_HOURS: f64 = 1.0 / 3600.0;

/// Seconds per hour, for event-time delta conversion.
pub const SECS_PER_HOUR: f64 = 3600.0;

/// Latitude bounds accepted by coordinate validation.
pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);

/// Longitude bounds accepted by coordinate validation.
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// Maximum number of recent processing latencies retained for the
/// p95 estimate exported to the SLA monitor.
pub const LATENCY_RESERVOIR_CAPACITY: usize = 4096;
