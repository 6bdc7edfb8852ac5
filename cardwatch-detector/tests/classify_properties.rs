use cardwatch_core::config::DetectorConfig;
use cardwatch_core::models::Severity;
use cardwatch_detector::classify::classify;
use proptest::prelude::*;

proptest! {
    /// Wide time gaps never alert, whatever the speed.
    #[test]
    fn time_guard_always_wins(
        speed in 0.0f64..1.0e12,
        dt in 2.0f64..10_000.0,
    ) {
        prop_assert_eq!(classify(speed, dt, &DetectorConfig::default()), None);
    }

    /// Speeds at or below the threshold never alert inside the guard.
    #[test]
    fn slow_travel_never_alerts(
        speed in 0.0f64..=900.0,
        dt in 0.0001f64..2.0,
    ) {
        prop_assert_eq!(classify(speed, dt, &DetectorConfig::default()), None);
    }

    /// Inside the guard and above the threshold always alerts, with
    /// severity matching the critical cutoff.
    #[test]
    fn fast_travel_inside_the_guard_alerts(
        speed in 900.0001f64..1.0e9,
        dt in 0.0001f64..1.9999,
    ) {
        let severity = classify(speed, dt, &DetectorConfig::default());
        if speed > 10_000.0 {
            prop_assert_eq!(severity, Some(Severity::Critical));
        } else {
            prop_assert_eq!(severity, Some(Severity::High));
        }
    }
}
