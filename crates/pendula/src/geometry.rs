//! Release geometry: from (length, height) to the initial bob position and angle.
//!
//! The pivot sits at the origin. The bob always starts to the left of the
//! vertical through the pivot, so the horizontal offset takes the negative
//! root and the angle, measured from the downward vertical, is negative.

use crate::config::{check_height, check_length};
use crate::constants::{AXIS_MARGIN_FRACTION, BOB_RADIUS_FRACTION};
use crate::error::Result;
use std::f64::consts::PI;
use tracing::debug;

/// Bob position and angle at release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialState {
    /// Horizontal bob position (m), never positive.
    pub initial_x: f64,
    /// Vertical bob position (m), equal to the configured height.
    pub initial_y: f64,
    /// Angle from the downward vertical (rad), in `(−π, 0)`.
    pub angle: f64,
}

impl InitialState {
    /// Release angle in degrees.
    pub fn angle_degrees(&self) -> f64 {
        self.angle.to_degrees()
    }

    /// Distance from the pivot to the bob.
    pub fn radius(&self) -> f64 {
        self.initial_x.hypot(self.initial_y)
    }

    /// Figure layout for drawing this state on a pendulum of `length`.
    pub fn layout(&self, length: f64) -> DiagramLayout {
        let bob_radius = BOB_RADIUS_FRACTION * length;
        DiagramLayout {
            bob_x: self.initial_x,
            bob_y: self.initial_y,
            bob_radius,
            extent: length + AXIS_MARGIN_FRACTION * length + bob_radius,
        }
    }
}

/// What a renderer needs to draw the static release diagram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagramLayout {
    pub bob_x: f64,
    pub bob_y: f64,
    pub bob_radius: f64,
    /// Both axes span `[−extent, extent]`.
    pub extent: f64,
}

/// Resolve the release geometry, rejecting out-of-range input.
///
/// Fails when `length ∉ [0.1, 2.0]`, when `|initial_height| ≥ length`
/// (which would put `acos` outside its domain) or when either value is
/// not finite.
pub fn resolve(length: f64, initial_height: f64) -> Result<InitialState> {
    check_length(length)?;
    check_height(initial_height, length)?;

    let initial_x = -(length * length - initial_height * initial_height).sqrt();
    let angle = (initial_height / length).acos() - PI;
    debug!(initial_x, angle, "resolved release geometry");
    Ok(InitialState {
        initial_x,
        initial_y: initial_height,
        angle,
    })
}
