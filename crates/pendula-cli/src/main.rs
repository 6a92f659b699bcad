//! pendula: interactive simple pendulum simulator.
//!
//! Asks for a pendulum length and release height, prints what follows from
//! them, then draws the release diagram and the angle/time chart comparing
//! the small-angle solution with two Verlet integrations.
//!
//! Usage:
//!   pendula
//!   pendula --length 1.2 --height -0.4 --out-dir figures --no-wait
//!   pendula --config run.json

mod input;
mod summary;

use anyhow::{Context, Result};
use clap::Parser;
use pendula::{PendulumConfig, RunConfig, simulate};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use summary::{INTRO, PeriodSummary, ReleaseSummary};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const DIAGRAM_GATE: &str = concat!(
    "press enter to continue and draw how the pendulum\n",
    "is initially set with zero momentum (i.e. it is initially stationary)",
);

const TRAJECTORY_GATE: &str = concat!(
    "press enter to continue and draw how the pendulum's\n",
    "angle varies with time",
);

#[derive(Parser, Debug)]
#[command(name = "pendula")]
#[command(about = "Simple pendulum: small-angle solution vs. velocity-Verlet integration")]
struct Args {
    /// Pendulum length in metres (0.1 to 2); prompted for when absent
    #[arg(long)]
    length: Option<f64>,

    /// Initial bob height relative to the pivot, strictly between -length and length
    #[arg(long, allow_hyphen_values = true)]
    height: Option<f64>,

    /// JSON run file (pendulum and output settings)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for the rendered figures
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Skip rendering figures
    #[arg(long)]
    no_plot: bool,

    /// Do not wait for enter before each figure
    #[arg(long)]
    no_wait: bool,
}

/// Combine the run file and command line flags, asking for whatever is missing.
fn collect_pendulum<R: BufRead, W: Write>(
    args: &Args,
    from_file: Option<PendulumConfig>,
    reader: &mut R,
    output: &mut W,
) -> Result<PendulumConfig> {
    let length = match args.length.or(from_file.map(|p| p.length)) {
        Some(length) if input::check_length(length).is_ok() => length,
        Some(length) => {
            writeln!(output, "Ignoring out-of-range length {length}")?;
            input::ask_length(reader, output)?
        }
        None => input::ask_length(reader, output)?,
    };
    let height = match args.height.or(from_file.map(|p| p.initial_height)) {
        Some(height) if input::check_height(height, length).is_ok() => height,
        Some(height) => {
            writeln!(output, "Ignoring out-of-range height {height}")?;
            input::ask_height(reader, output, length)?
        }
        None => input::ask_height(reader, output, length)?,
    };
    Ok(PendulumConfig::new(length, height)?)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    debug!(?args, "parsed arguments");

    let mut run = match &args.config {
        Some(path) => RunConfig::from_file(path)
            .with_context(|| format!("failed to load run file {}", path.display()))?,
        None => RunConfig::default(),
    };
    if let Some(dir) = &args.out_dir {
        run.output.dir = dir.clone();
    }
    if args.no_plot {
        run.output.plot = false;
    }

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut output = io::stdout().lock();

    writeln!(output, "{INTRO}")?;
    let config = collect_pendulum(&args, run.pendulum, &mut reader, &mut output)?;

    let sim = simulate(&config).context("failed to simulate the pendulum")?;
    writeln!(
        output,
        "\n{}\n",
        ReleaseSummary {
            config: &config,
            initial: &sim.initial,
        }
    )?;

    if run.output.plot {
        if !args.no_wait {
            input::wait_for_enter(&mut reader, &mut output, DIAGRAM_GATE)?;
        }
        let path = run.output.diagram_path();
        pendula_plot::render_initial_position(&sim.initial, config.length, &path)
            .with_context(|| format!("failed to draw {}", path.display()))?;
        writeln!(output, "Initial position drawn to {}\n", path.display())?;
    }

    let traj = &sim.trajectory;
    let drifts = [
        (traj.coarse_dt, traj.coarse_energy_error),
        (traj.fine_dt, traj.fine_energy_error),
    ];
    writeln!(
        output,
        "{}\n",
        PeriodSummary {
            period: &sim.period,
            drifts: &drifts,
        }
    )?;

    if run.output.plot {
        if !args.no_wait {
            input::wait_for_enter(&mut reader, &mut output, TRAJECTORY_GATE)?;
        }
        let path = run.output.trajectory_path();
        pendula_plot::render_trajectory(&sim.trajectory, &path)
            .with_context(|| format!("failed to draw {}", path.display()))?;
        writeln!(output, "Trajectory drawn to {}", path.display())?;
    }

    info!("done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["pendula"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn test_gate_messages() {
        assert!(DIAGRAM_GATE.contains("pendulum\nis initially set with zero momentum"));
        assert!(TRAJECTORY_GATE.ends_with("pendulum's\nangle varies with time"));
    }

    #[test]
    fn test_flags_skip_prompts() {
        let a = args(&["--length", "1.2", "--height", "-0.4", "--no-wait"]);
        let mut reader = Cursor::new("");
        let mut output = Vec::new();
        let config = collect_pendulum(&a, None, &mut reader, &mut output).unwrap();
        assert_eq!(config, PendulumConfig::new(1.2, -0.4).unwrap());
        assert!(output.is_empty());
    }

    #[test]
    fn test_flags_override_file() {
        let a = args(&["--height", "0.1"]);
        let file = PendulumConfig::new(0.5, -0.2).ok();
        let mut reader = Cursor::new("");
        let mut output = Vec::new();
        let config = collect_pendulum(&a, file, &mut reader, &mut output).unwrap();
        assert_eq!(config.length, 0.5);
        assert_eq!(config.initial_height, 0.1);
    }

    #[test]
    fn test_bad_flag_falls_back_to_prompt() {
        let a = args(&["--length", "1.0", "--height", "3.0"]);
        let mut reader = Cursor::new("0.25\n");
        let mut output = Vec::new();
        let config = collect_pendulum(&a, None, &mut reader, &mut output).unwrap();
        assert_eq!(config.initial_height, 0.25);
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Ignoring out-of-range height 3"));
    }

    #[test]
    fn test_missing_values_are_prompted() {
        let a = args(&[]);
        let mut reader = Cursor::new("x\n0.8\n-0.3\n");
        let mut output = Vec::new();
        let config = collect_pendulum(&a, None, &mut reader, &mut output).unwrap();
        assert_eq!(config, PendulumConfig::new(0.8, -0.3).unwrap());
    }
}
