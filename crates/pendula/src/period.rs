//! Period of a pendulum released from rest at a finite angle.
//!
//! The true period is the harmonic period `T0 = 2π·√(L/g)` times a
//! correction factor, taken here as the power series of the complete
//! elliptic integral truncated at the 12th power of the amplitude.
//! The series is evaluated at fixed order with no convergence check:
//! accuracy degrades silently as |angle| approaches π.

use crate::constants::{GRAVITY, SERIES_WARN_ANGLE};
use std::f64::consts::PI;
use tracing::{debug, warn};

/// Coefficients of θ², θ⁴, …, θ¹² in `T/T0`.
const SERIES: [f64; 6] = [
    1.0 / 16.0,
    11.0 / 3072.0,
    173.0 / 737280.0,
    22931.0 / 1321205760.0,
    1319183.0 / 951268147200.0,
    233526463.0 / 2009078326886400.0,
];

/// Harmonic period and its large-amplitude correction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodEstimate {
    /// `2π·√(L/g)` (s).
    pub harmonic_period: f64,
    /// Series estimate of `T/T0`, at least 1.
    pub correction_factor: f64,
}

impl PeriodEstimate {
    /// Estimated true period `T1 = T0·Tf` (s).
    pub fn period(&self) -> f64 {
        self.harmonic_period * self.correction_factor
    }
}

/// Small-angle period `2π·√(L/g)`.
pub fn harmonic_period(length: f64) -> f64 {
    2.0 * PI * (length / GRAVITY).sqrt()
}

/// `1 + Σ cₖ·angle^(2k)` for k = 1..6, by Horner's rule in `angle²`.
pub fn correction_factor(angle: f64) -> f64 {
    let a2 = angle * angle;
    let tail = SERIES.iter().rev().fold(0.0, |acc, &c| (acc + c) * a2);
    1.0 + tail
}

/// Estimate the period for a release `angle` (rad) on a rod of `length` (m).
pub fn estimate_period(angle: f64, length: f64) -> PeriodEstimate {
    if angle.abs() > SERIES_WARN_ANGLE {
        warn!(
            angle,
            "release angle is large; the 12th-order period series may be inaccurate"
        );
    }
    let estimate = PeriodEstimate {
        harmonic_period: harmonic_period(length),
        correction_factor: correction_factor(angle),
    };
    debug!(
        harmonic = estimate.harmonic_period,
        factor = estimate.correction_factor,
        period = estimate.period(),
        "estimated period"
    );
    estimate
}
