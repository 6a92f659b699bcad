//! pendula: simple pendulum trajectories.
//!
//! Compares three descriptions of a pendulum released from rest:
//! - the small-angle (simple harmonic) closed form,
//! - velocity-Verlet integration of `θ̈ = −(g/L)·sin θ` with a fine substep,
//! - the same integration with a coarse substep.
//!
//! The oscillation period used for the sampling horizon comes from a
//! 12th-order power series in the release angle (the elliptic-integral
//! expansion of the true period).
//!
//! ```
//! use pendula::{PendulumConfig, simulate};
//!
//! let config = PendulumConfig::new(1.0, 0.0)?;
//! let run = simulate(&config)?;
//! assert_eq!(run.trajectory.len(), pendula::SAMPLE_COUNT);
//! # Ok::<(), pendula::PendulaError>(())
//! ```

pub mod config;
pub mod conservation;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod integrator;
pub mod period;
pub mod trajectory;

pub use config::{OutputConfig, PendulumConfig, RunConfig};
pub use conservation::{EnergyBaseline, EnergyMonitor, energy_drift};
pub use constants::{COARSE_DT, FINE_DT, GRAVITY, HORIZON_PERIODS, SAMPLE_COUNT};
pub use error::{PendulaError, Result};
pub use geometry::{DiagramLayout, InitialState, resolve};
pub use integrator::{
    Integrator, PendulumDynamics, SemiImplicitEuler, SwingState, VelocityVerlet, advance, substeps,
};
pub use period::{PeriodEstimate, correction_factor, estimate_period, harmonic_period};
pub use trajectory::{
    BranchRun, Trajectory, integrate_branch, run_branch, sample, sample_interval, sample_times,
    sinusoidal_branch, swing_states,
};

use tracing::info;

/// Everything computed for one pendulum run.
#[derive(Debug, Clone)]
pub struct Simulation {
    pub config: PendulumConfig,
    pub initial: InitialState,
    pub period: PeriodEstimate,
    pub trajectory: Trajectory,
}

/// Resolve the release geometry, estimate the period and sample all three
/// trajectories.
///
/// Fails before any integration when the configuration is out of range.
pub fn simulate(config: &PendulumConfig) -> Result<Simulation> {
    let initial = config.initial_state()?;
    let period = estimate_period(initial.angle, config.length);
    let trajectory = sample(initial.angle, config.length, period.period());

    info!(
        length = config.length,
        angle = initial.angle,
        period = period.period(),
        "pendulum run complete"
    );

    Ok(Simulation {
        config: *config,
        initial,
        period,
        trajectory,
    })
}
