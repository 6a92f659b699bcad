//! Console text: intro, release summary, period summary.

use pendula::{InitialState, PendulumConfig, PeriodEstimate};
use std::fmt;

pub const INTRO: &str = "\
This program computes and plots the motion of a simple pendulum.
This is done firstly using the simple harmonic motion approximation
and secondly it is done numerically.

In the limit where both the numerical time step size
and the oscillation amplitude are small
the results should coincide for both methods.
";

/// What the user chose and the geometry derived from it.
pub struct ReleaseSummary<'a> {
    pub config: &'a PendulumConfig,
    pub initial: &'a InitialState,
}

impl fmt::Display for ReleaseSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "The length of your pendulum is {:.6}m", self.config.length)?;
        writeln!(
            f,
            "The initial height (y coordinate) for your pendulum is {:.6}",
            self.initial.initial_y
        )?;
        writeln!(
            f,
            concat!(
                "The initial horizontal displacement of your oscillator ",
                "(the initial x coordinate) is {:.6}",
            ),
            self.initial.initial_x
        )?;
        write!(
            f,
            "The initial angle of your oscillator is {:.6} radians\nor {:.6} degrees",
            self.initial.angle,
            self.initial.angle_degrees()
        )
    }
}

/// Series period and the energy behaviour of both Verlet branches.
pub struct PeriodSummary<'a> {
    pub period: &'a PeriodEstimate,
    /// (substep, worst relative energy error) per branch.
    pub drifts: &'a [(f64, f64)],
}

impl fmt::Display for PeriodSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "The estimated period from the 12th order series is {:.6} seconds",
            self.period.period()
        )?;
        write!(
            f,
            "This is an increase on the harmonic period of {:.6} by a factor of {:.6}",
            self.period.harmonic_period, self.period.correction_factor
        )?;
        for (dt, drift) in self.drifts {
            write!(f, "\nVerlet (dt = {dt}): worst relative energy error {drift:.3e}")?;
        }
        Ok(())
    }
}
