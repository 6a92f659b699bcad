//! Energy conservation monitoring.
//!
//! Tracks drift of `E = 0.5·θ̇² − (g/L)·cos θ` relative to its value at
//! release. Purely diagnostic: nothing here corrects the state.

use crate::integrator::{PendulumDynamics, SwingState};
use crate::trajectory::{run_branch, sample_interval};

/// Energy at release.
#[derive(Debug, Clone, Copy)]
pub struct EnergyBaseline {
    pub baseline_energy: f64,
}

impl EnergyBaseline {
    /// Record the energy of `state`.
    pub fn new(dynamics: &PendulumDynamics, state: &SwingState) -> Self {
        Self {
            baseline_energy: dynamics.energy(state),
        }
    }
}

/// Energy error of a state against a baseline.
#[derive(Debug, Clone, Copy)]
pub struct EnergyMonitor {
    /// Relative energy error: |E - E₀| / |E₀|
    pub energy_error: f64,
}

impl EnergyMonitor {
    /// Compare the energy of `state` with `baseline`.
    pub fn check(
        baseline: &EnergyBaseline,
        dynamics: &PendulumDynamics,
        state: &SwingState,
    ) -> Self {
        let energy = dynamics.energy(state);

        // Relative error unless the baseline sits at zero
        let energy_error = if baseline.baseline_energy.abs() > 1e-12 {
            (energy - baseline.baseline_energy).abs() / baseline.baseline_energy.abs()
        } else {
            (energy - baseline.baseline_energy).abs()
        };

        Self { energy_error }
    }

    pub fn is_violated(&self, energy_tol: f64) -> bool {
        self.energy_error > energy_tol
    }
}

/// Worst relative energy error of a Verlet branch over the sampling horizon.
///
/// Runs the branch on its own; [`sample`](crate::trajectory::sample) already
/// reports the same figure for both of its branches.
pub fn energy_drift(angle: f64, length: f64, period: f64, dt: f64) -> f64 {
    run_branch(angle, length, sample_interval(period), dt).energy_error
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{COARSE_DT, FINE_DT};
    use crate::period::estimate_period;

    #[test]
    fn test_monitor_zero_at_baseline() {
        let dynamics = PendulumDynamics::new(1.0);
        let state = SwingState::at_rest(-0.3);
        let baseline = EnergyBaseline::new(&dynamics, &state);
        let monitor = EnergyMonitor::check(&baseline, &dynamics, &state);
        assert_eq!(monitor.energy_error, 0.0);
        assert!(!monitor.is_violated(1e-12));
    }

    #[test]
    fn test_monitor_flags_kick() {
        let dynamics = PendulumDynamics::new(1.0);
        let state = SwingState::at_rest(-0.3);
        let baseline = EnergyBaseline::new(&dynamics, &state);
        let kicked = SwingState {
            theta_dot: 1.0,
            ..state
        };
        let monitor = EnergyMonitor::check(&baseline, &dynamics, &kicked);
        assert!(monitor.is_violated(0.01));
    }

    #[test]
    fn test_absolute_error_for_zero_baseline() {
        // cos θ = 0 at θ = π/2 with no velocity gives E0 = 0.
        let dynamics = PendulumDynamics::new(1.0);
        let state = SwingState::at_rest(std::f64::consts::FRAC_PI_2);
        let baseline = EnergyBaseline::new(&dynamics, &state);
        assert!(baseline.baseline_energy.abs() < 1e-12);
        let moved = SwingState {
            theta_dot: 0.2,
            ..state
        };
        let monitor = EnergyMonitor::check(&baseline, &dynamics, &moved);
        assert!((monitor.energy_error - 0.02).abs() < 1e-12);
    }

    #[test]
    fn test_drift_shrinks_with_substep() {
        let angle = -1.2;
        let period = estimate_period(angle, 1.0).period();
        let coarse = energy_drift(angle, 1.0, period, COARSE_DT);
        let fine = energy_drift(angle, 1.0, period, FINE_DT);
        assert!(fine < coarse, "fine {fine} coarse {coarse}");
        assert!(coarse < 0.01);
    }
}
