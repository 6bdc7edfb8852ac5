use cardwatch_geo::haversine_km;
use proptest::prelude::*;

proptest! {
    /// Distance is symmetric in its arguments.
    #[test]
    fn symmetric(
        lat1 in -90.0f64..=90.0,
        lon1 in -180.0f64..=180.0,
        lat2 in -90.0f64..=90.0,
        lon2 in -180.0f64..=180.0,
    ) {
        let ab = haversine_km(lat1, lon1, lat2, lon2).unwrap();
        let ba = haversine_km(lat2, lon2, lat1, lon1).unwrap();
        prop_assert!((ab - ba).abs() < 1e-6);
    }

    /// Distance is non-negative and bounded by half the Earth's
    /// circumference (pi * R).
    #[test]
    fn bounded(
        lat1 in -90.0f64..=90.0,
        lon1 in -180.0f64..=180.0,
        lat2 in -90.0f64..=90.0,
        lon2 in -180.0f64..=180.0,
    ) {
        let d = haversine_km(lat1, lon1, lat2, lon2).unwrap();
        prop_assert!(d >= 0.0);
        prop_assert!(d <= std::f64::consts::PI * 6371.0 + 1e-6);
    }

    /// A point is at distance zero from itself.
    #[test]
    fn identity(lat in -90.0f64..=90.0, lon in -180.0f64..=180.0) {
        let d = haversine_km(lat, lon, lat, lon).unwrap();
        prop_assert!(d.abs() < 1e-9);
    }
}
