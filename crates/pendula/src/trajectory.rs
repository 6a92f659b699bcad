//! Sampled pendulum trajectories over three estimated periods.
//!
//! Every trajectory has [`SAMPLE_COUNT`] points spaced `delt = 3·T1/N`
//! apart, starting at `t = 0`. The integrated branches record the angle
//! before each advance, so sample `i` is the state at `times[i]`.

use crate::conservation::{EnergyBaseline, EnergyMonitor};
use crate::constants::{COARSE_DT, FINE_DT, HORIZON_PERIODS, SAMPLE_COUNT};
use crate::integrator::{PendulumDynamics, SwingState, VelocityVerlet, advance};
use std::f64::consts::PI;
use tracing::debug;

/// Sample spacing for a period `T1`.
pub fn sample_interval(period: f64) -> f64 {
    HORIZON_PERIODS * period / SAMPLE_COUNT as f64
}

/// The three angle histories of one run, in degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    /// Sample times (s), `times[i] = i·delt`.
    pub times: Vec<f64>,
    /// Small-angle closed form `θ0·cos(2πt/T1)`.
    pub sinusoidal: Vec<f64>,
    /// Verlet with substep near [`FINE_DT`].
    pub verlet_fine: Vec<f64>,
    /// Verlet with substep near [`COARSE_DT`].
    pub verlet_coarse: Vec<f64>,
    /// Spacing between samples (s).
    pub delt: f64,
    /// Requested substep of the fine branch (s).
    pub fine_dt: f64,
    /// Requested substep of the coarse branch (s).
    pub coarse_dt: f64,
    /// Worst relative energy error of the fine branch over its samples.
    pub fine_energy_error: f64,
    /// Worst relative energy error of the coarse branch over its samples.
    pub coarse_energy_error: f64,
}

impl Trajectory {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Check if there are no samples.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Largest pointwise `|a[i] − b[i]|`.
    pub fn max_abs_difference(a: &[f64], b: &[f64]) -> f64 {
        a.iter()
            .zip(b)
            .map(|(x, y)| (x - y).abs())
            .fold(0.0, f64::max)
    }
}

/// `SAMPLE_COUNT` uniformly spaced times over `[0, 3·T1)`.
pub fn sample_times(period: f64) -> Vec<f64> {
    let delt = sample_interval(period);
    (0..SAMPLE_COUNT).map(|i| i as f64 * delt).collect()
}

/// Small-angle solution `angle°·cos(2πt/T1)` at each of `times`.
pub fn sinusoidal_branch(angle: f64, period: f64, times: &[f64]) -> Vec<f64> {
    let amplitude = angle.to_degrees();
    let omega = 2.0 * PI / period;
    times.iter().map(|&t| amplitude * (omega * t).cos()).collect()
}

/// States of a Verlet run released from rest at `angle`, one per sample.
///
/// Yields [`SAMPLE_COUNT`] states `delt` apart, the first being the
/// release itself, advancing between samples with substeps near `dt`.
pub fn swing_states(
    angle: f64,
    length: f64,
    delt: f64,
    dt: f64,
) -> impl Iterator<Item = SwingState> {
    let dynamics = PendulumDynamics::new(length);
    std::iter::successors(Some(SwingState::at_rest(angle)), move |&state| {
        Some(advance(&VelocityVerlet, &dynamics, state, delt, dt))
    })
    .take(SAMPLE_COUNT)
}

/// Angle history of one Verlet run and its energy behaviour.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchRun {
    /// Sampled angles (degrees).
    pub angles: Vec<f64>,
    /// Worst relative energy error over the sampled states.
    pub energy_error: f64,
}

/// Run one Verlet branch, recording angles and energy error in one pass.
pub fn run_branch(angle: f64, length: f64, delt: f64, dt: f64) -> BranchRun {
    let dynamics = PendulumDynamics::new(length);
    let baseline = EnergyBaseline::new(&dynamics, &SwingState::at_rest(angle));
    let mut angles = Vec::with_capacity(SAMPLE_COUNT);
    let mut energy_error = 0.0_f64;
    for state in swing_states(angle, length, delt, dt) {
        angles.push(state.theta.to_degrees());
        let monitor = EnergyMonitor::check(&baseline, &dynamics, &state);
        energy_error = energy_error.max(monitor.energy_error);
    }
    BranchRun {
        angles,
        energy_error,
    }
}

/// Verlet-integrated angle history (degrees) released from rest at `angle`.
pub fn integrate_branch(angle: f64, length: f64, delt: f64, dt: f64) -> Vec<f64> {
    swing_states(angle, length, delt, dt)
        .map(|state| state.theta.to_degrees())
        .collect()
}

/// Sample the sinusoidal and both Verlet trajectories over three periods.
///
/// The two Verlet branches share nothing and are computed concurrently.
pub fn sample(angle: f64, length: f64, period: f64) -> Trajectory {
    let delt = sample_interval(period);
    let times = sample_times(period);
    let sinusoidal = sinusoidal_branch(angle, period, &times);
    let (fine, coarse) = rayon::join(
        || run_branch(angle, length, delt, FINE_DT),
        || run_branch(angle, length, delt, COARSE_DT),
    );
    debug!(delt, samples = times.len(), "sampled trajectories");

    Trajectory {
        times,
        sinusoidal,
        verlet_fine: fine.angles,
        verlet_coarse: coarse.angles,
        delt,
        fine_dt: FINE_DT,
        coarse_dt: COARSE_DT,
        fine_energy_error: fine.energy_error,
        coarse_energy_error: coarse.energy_error,
    }
}
