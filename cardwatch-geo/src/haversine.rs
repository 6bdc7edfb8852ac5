//! Haversine distance on a spherical Earth, radius 6371 km.

use cardwatch_core::constants::{EARTH_RADIUS_KM, LATITUDE_RANGE, LONGITUDE_RANGE};
use cardwatch_core::errors::{CardwatchError, CardwatchResult};

/// Reject coordinates outside [-90,90] latitude / [-180,180] longitude.
/// NaN fails both bounds checks and is rejected.
pub fn validate(latitude: f64, longitude: f64) -> CardwatchResult<()> {
    let lat_ok = latitude >= LATITUDE_RANGE.0 && latitude <= LATITUDE_RANGE.1;
    let lon_ok = longitude >= LONGITUDE_RANGE.0 && longitude <= LONGITUDE_RANGE.1;
    if lat_ok && lon_ok {
        Ok(())
    } else {
        Err(CardwatchError::InvalidCoordinate {
            latitude,
            longitude,
        })
    }
}

/// Great-circle distance in kilometers between two validated points.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> CardwatchResult<f64> {
    validate(lat1, lon1)?;
    validate(lat2, lon2)?;

    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    // Clamp guards against rounding pushing the argument past 1.0 for
    // antipodal points.
    let c = 2.0 * a.sqrt().clamp(0.0, 1.0).asin();
    Ok(EARTH_RADIUS_KM * c)
}
