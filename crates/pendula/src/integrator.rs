//! Time stepping for `θ̈ = −(g/L)·sin θ`.
//!
//! An [`Integrator`] advances a [`SwingState`] by one substep. [`advance`]
//! covers a whole sampling interval with an integer number of equal
//! substeps, shrinking the requested substep so no partial step is left.

use crate::constants::GRAVITY;

/// Angle and angular velocity of the pendulum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwingState {
    /// Angle from the downward vertical (rad).
    pub theta: f64,
    /// Angular velocity (rad/s).
    pub theta_dot: f64,
}

impl SwingState {
    /// Released from rest at `angle`.
    pub fn at_rest(angle: f64) -> Self {
        Self {
            theta: angle,
            theta_dot: 0.0,
        }
    }
}

/// Right-hand side of the pendulum equation for a given rod length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendulumDynamics {
    /// `g/L` (1/s²).
    pub omega_sq: f64,
}

impl PendulumDynamics {
    pub fn new(length: f64) -> Self {
        Self {
            omega_sq: GRAVITY / length,
        }
    }

    /// Angular acceleration at angle `theta`.
    #[inline]
    pub fn acceleration(&self, theta: f64) -> f64 {
        -self.omega_sq * theta.sin()
    }

    /// Mechanical energy per unit mass and unit length squared:
    /// `0.5·θ̇² − (g/L)·cos θ`.
    pub fn energy(&self, state: &SwingState) -> f64 {
        0.5 * state.theta_dot * state.theta_dot - self.omega_sq * state.theta.cos()
    }
}

/// Pluggable single-step scheme.
pub trait Integrator {
    /// Advance `state` by one substep of length `dt`.
    fn step(&self, dynamics: &PendulumDynamics, state: SwingState, dt: f64) -> SwingState;
}

/// Velocity-Verlet: second order and symplectic.
#[derive(Debug, Clone, Copy, Default)]
pub struct VelocityVerlet;

impl Integrator for VelocityVerlet {
    fn step(&self, dynamics: &PendulumDynamics, state: SwingState, dt: f64) -> SwingState {
        let a = dynamics.acceleration(state.theta);
        let v_half = state.theta_dot + 0.5 * a * dt;
        let theta = state.theta + v_half * dt;
        let a_new = dynamics.acceleration(theta);
        SwingState {
            theta,
            theta_dot: v_half + 0.5 * a_new * dt,
        }
    }
}

/// Semi-implicit Euler: velocity first, then position. First order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SemiImplicitEuler;

impl Integrator for SemiImplicitEuler {
    fn step(&self, dynamics: &PendulumDynamics, state: SwingState, dt: f64) -> SwingState {
        let theta_dot = state.theta_dot + dynamics.acceleration(state.theta) * dt;
        SwingState {
            theta: state.theta + theta_dot * dt,
            theta_dot,
        }
    }
}

/// Number of substeps covering `delt` and the effective substep length.
///
/// `n = round(delt/dt)`, at least 1, and `dt_eff = delt/n` so that `n`
/// equal substeps span `delt` exactly.
pub fn substeps(delt: f64, dt: f64) -> (usize, f64) {
    let n = ((delt / dt).round() as usize).max(1);
    (n, delt / n as f64)
}

/// Advance `state` by one sampling interval `delt` using substeps near `dt`.
pub fn advance<I: Integrator + ?Sized>(
    integrator: &I,
    dynamics: &PendulumDynamics,
    state: SwingState,
    delt: f64,
    dt: f64,
) -> SwingState {
    let (n, dt_eff) = substeps(delt, dt);
    (0..n).fold(state, |s, _| integrator.step(dynamics, s, dt_eff))
}
