//! Run configuration: the pendulum itself and where figures go.

use crate::constants::{MAX_LENGTH, MIN_LENGTH};
use crate::error::{PendulaError, Result};
use crate::geometry::{InitialState, resolve};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Pendulum length and release height.
///
/// `0.1 ≤ length ≤ 2.0` and `−length < initial_height < length`.
/// Deserialisation goes through [`PendulumConfig::new`], so a parsed
/// configuration is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedPendulum")]
pub struct PendulumConfig {
    /// Rod length (m).
    pub length: f64,
    /// Height of the bob relative to the pivot at release (m).
    pub initial_height: f64,
}

/// Wire form of [`PendulumConfig`] before range checks.
#[derive(Deserialize)]
struct UncheckedPendulum {
    length: f64,
    initial_height: f64,
}

impl TryFrom<UncheckedPendulum> for PendulumConfig {
    type Error = PendulaError;

    fn try_from(raw: UncheckedPendulum) -> Result<Self> {
        Self::new(raw.length, raw.initial_height)
    }
}

impl PendulumConfig {
    /// Build a validated configuration.
    pub fn new(length: f64, initial_height: f64) -> Result<Self> {
        let config = Self {
            length,
            initial_height,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the length and height ranges.
    pub fn validate(&self) -> Result<()> {
        check_length(self.length)?;
        check_height(self.initial_height, self.length)
    }

    /// Release geometry. Fails for a configuration built by hand with
    /// out-of-range fields.
    pub fn initial_state(&self) -> Result<InitialState> {
        resolve(self.length, self.initial_height)
    }
}

/// Reject lengths outside `[0.1, 2.0]`.
pub fn check_length(length: f64) -> Result<()> {
    if !length.is_finite() {
        return Err(PendulaError::NonFinite("length"));
    }
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        return Err(PendulaError::LengthOutOfRange { length });
    }
    Ok(())
}

/// Reject heights outside the open interval `(−length, length)`.
pub fn check_height(height: f64, length: f64) -> Result<()> {
    if !height.is_finite() {
        return Err(PendulaError::NonFinite("initial height"));
    }
    if height <= -length || height >= length {
        return Err(PendulaError::HeightOutOfRange { height, length });
    }
    Ok(())
}

/// Where and whether to render figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving the figures.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
    /// File name of the initial position diagram.
    #[serde(default = "default_diagram_file")]
    pub diagram_file: String,
    /// File name of the angle/time chart.
    #[serde(default = "default_trajectory_file")]
    pub trajectory_file: String,
    /// Render figures at all.
    #[serde(default = "default_plot")]
    pub plot: bool,
}

fn default_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_diagram_file() -> String {
    "initial_position.png".to_string()
}

fn default_trajectory_file() -> String {
    "trajectory.png".to_string()
}

fn default_plot() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            diagram_file: default_diagram_file(),
            trajectory_file: default_trajectory_file(),
            plot: default_plot(),
        }
    }
}

impl OutputConfig {
    pub fn diagram_path(&self) -> PathBuf {
        self.dir.join(&self.diagram_file)
    }

    pub fn trajectory_path(&self) -> PathBuf {
        self.dir.join(&self.trajectory_file)
    }
}

/// Top-level JSON run file.
///
/// The pendulum is optional; when absent it is collected interactively.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pendulum: Option<PendulumConfig>,
    #[serde(default)]
    pub output: OutputConfig,
}

impl RunConfig {
    /// Parse a run file from a JSON string. Out-of-range pendulums are
    /// rejected while parsing.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a run file from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}
