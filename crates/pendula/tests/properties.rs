//! Property-based tests for the pendula core using proptest.
//!
//! Covers: release geometry invariants, period series monotonicity,
//! sampling grid shape.

use pendula::{
    PendulumConfig, SAMPLE_COUNT, correction_factor, estimate_period, harmonic_period, resolve,
    sample_interval, sample_times,
};
use proptest::prelude::*;
use std::f64::consts::{FRAC_PI_2, PI};

/// A valid (length, height) pair: height strictly inside (−length, length).
fn valid_pendulum() -> impl Strategy<Value = (f64, f64)> {
    (0.1f64..=2.0, -0.999f64..0.999).prop_map(|(length, frac)| (length, frac * length))
}

proptest! {
    /// The bob lies on the circle of radius `length` around the pivot.
    #[test]
    fn bob_on_circle((length, height) in valid_pendulum()) {
        let s = resolve(length, height).unwrap();
        let lhs = s.initial_x * s.initial_x + height * height;
        let rhs = length * length;
        prop_assert!(((lhs - rhs) / rhs).abs() < 1e-9, "{} vs {}", lhs, rhs);
        prop_assert_eq!(s.initial_y, height);
    }

    /// Released on the left: x ≤ 0 and angle in (−π, 0).
    #[test]
    fn release_on_left((length, height) in valid_pendulum()) {
        let s = resolve(length, height).unwrap();
        prop_assert!(s.initial_x <= 0.0);
        prop_assert!(s.angle > -PI && s.angle < 0.0, "angle {}", s.angle);
    }

    /// Validated configs resolve to the same state as `resolve`.
    #[test]
    fn config_matches_resolve((length, height) in valid_pendulum()) {
        let config = PendulumConfig::new(length, height).unwrap();
        prop_assert_eq!(config.initial_state().unwrap(), resolve(length, height).unwrap());
    }

    /// Heights on or beyond ±length are rejected.
    #[test]
    fn out_of_range_height_rejected(length in 0.1f64..=2.0, excess in 0.0f64..5.0) {
        prop_assert!(resolve(length, length + excess).is_err());
        prop_assert!(resolve(length, -length - excess).is_err());
    }

    /// The correction factor grows with |angle| on (0, π/2).
    #[test]
    fn correction_factor_monotone(a in 0.0f64..FRAC_PI_2, b in 0.0f64..FRAC_PI_2) {
        prop_assume!(b - a > 1e-6);
        prop_assert!(correction_factor(a) < correction_factor(b));
        prop_assert!(correction_factor(-a) < correction_factor(-b));
    }

    /// Period scales with the square root of length.
    #[test]
    fn period_scales_with_sqrt_length(length in 0.1f64..=2.0, angle in -3.0f64..0.0) {
        let est = estimate_period(angle, length);
        let ratio = est.harmonic_period / harmonic_period(1.0);
        prop_assert!((ratio - length.sqrt()).abs() < 1e-12);
        prop_assert!(est.period() >= est.harmonic_period);
    }

    /// Sampling grid has N points, uniform spacing 3·T1/N, ends before 3·T1.
    #[test]
    fn sampling_grid(period in 0.5f64..5.0) {
        let times = sample_times(period);
        let delt = sample_interval(period);
        prop_assert_eq!(times.len(), SAMPLE_COUNT);
        prop_assert!((delt - 3.0 * period / 600.0).abs() < 1e-15);
        prop_assert!(times[SAMPLE_COUNT - 1] < 3.0 * period);
    }
}
