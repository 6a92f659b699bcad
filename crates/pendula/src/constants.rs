//! Fixed physical and sampling constants.

/// Gravitational acceleration (m/s²).
pub const GRAVITY: f64 = 9.8;

/// Number of samples in every trajectory.
pub const SAMPLE_COUNT: usize = 600;

/// Trajectories span this many estimated periods.
pub const HORIZON_PERIODS: f64 = 3.0;

/// Substep of the coarse Verlet branch (s).
pub const COARSE_DT: f64 = 0.001;

/// Substep of the fine Verlet branch (s).
pub const FINE_DT: f64 = 0.0005;

/// Shortest supported pendulum (m).
pub const MIN_LENGTH: f64 = 0.1;

/// Longest supported pendulum (m).
pub const MAX_LENGTH: f64 = 2.0;

/// Bob radius as a fraction of the pendulum length.
pub const BOB_RADIUS_FRACTION: f64 = 0.05;

/// Extra axis room beyond the length, as a fraction of the length.
pub const AXIS_MARGIN_FRACTION: f64 = 0.025;

/// Release angles beyond this magnitude (rad) get a warning about the
/// accuracy of the period series.
pub const SERIES_WARN_ANGLE: f64 = 2.0 * std::f64::consts::FRAC_PI_3;
