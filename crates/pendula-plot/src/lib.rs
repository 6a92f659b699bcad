//! Figures for pendula runs.
//!
//! Two PNG figures, drawn with `plotters`:
//! - the release diagram: rod from the pivot at the origin to the bob,
//! - the angle/time chart: sinusoidal and both Verlet histories overlaid.

use pendula::{DiagramLayout, InitialState, Trajectory};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::f64::consts::PI;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("drawing error: {0}")]
    Draw(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("nothing to plot: {0}")]
    Empty(&'static str),
}

pub type Result<T> = std::result::Result<T, PlotError>;

fn draw_err<E: std::fmt::Display>(e: E) -> PlotError {
    PlotError::Draw(e.to_string())
}

/// Pixel size of every figure.
pub const FIGURE_SIZE: (u32, u32) = (1200, 900);

/// Label area reserved on both axes of the release diagram.
const DIAGRAM_LABEL_AREA: u32 = 60;

const DIAGRAM_TITLE: &str = "Initial (stationary) pendulum position";
const TRAJECTORY_TITLE: &str = "pendulum position (angle in degrees) as a function of time";

/// Legend entry for a Verlet branch run with substep `dt`.
pub fn curve_label(dt: f64) -> String {
    format!("dt = {dt}")
}

/// Smallest and largest value over all `series`, padded by 5% of the span.
///
/// A flat set of values gets a unit-wide range around the value.
pub fn value_range(series: &[&[f64]]) -> Option<(f64, f64)> {
    let (lo, hi) = series
        .iter()
        .flat_map(|s| s.iter().copied())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if !lo.is_finite() || !hi.is_finite() {
        return None;
    }
    let pad = if hi > lo { 0.05 * (hi - lo) } else { 0.5 };
    Some((lo - pad, hi + pad))
}

/// Polygon approximating a circle, in data coordinates.
pub fn circle_points(cx: f64, cy: f64, r: f64, segments: usize) -> Vec<(f64, f64)> {
    (0..segments)
        .map(|i| {
            let phi = 2.0 * PI * i as f64 / segments as f64;
            (cx + r * phi.cos(), cy + r * phi.sin())
        })
        .collect()
}

/// Horizontal and vertical margins that centre the largest square in a
/// `width` × `height` area.
pub fn square_margins(width: u32, height: u32) -> (i32, i32) {
    let side = width.min(height);
    (((width - side) / 2) as i32, ((height - side) / 2) as i32)
}

fn square_area<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>) -> DrawingArea<DB, Shift> {
    let (w, h) = area.dim_in_pixel();
    let (dx, dy) = square_margins(w, h);
    area.margin(dy, dy, dx, dx)
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Draw the pendulum at rest at its release point.
pub fn render_initial_position(initial: &InitialState, length: f64, path: &Path) -> Result<()> {
    render_layout(&initial.layout(length), path)
}

/// Draw a release diagram from a precomputed layout.
pub fn render_layout(layout: &DiagramLayout, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    let e = layout.extent;

    let root = BitMapBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    // Square below the caption, equal label areas: the plot itself is
    // square so the bob stays round
    let body = root
        .titled(DIAGRAM_TITLE, ("sans-serif", 32))
        .map_err(draw_err)?;
    let area = square_area(&body);

    let mut chart = ChartBuilder::on(&area)
        .margin(20)
        .x_label_area_size(DIAGRAM_LABEL_AREA)
        .y_label_area_size(DIAGRAM_LABEL_AREA)
        .build_cartesian_2d(-e..e, -e..e)
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .x_desc("x")
        .y_desc("y")
        .draw()
        .map_err(draw_err)?;

    chart
        .draw_series(LineSeries::new(
            vec![(0.0, 0.0), (layout.bob_x, layout.bob_y)],
            BLUE.stroke_width(2),
        ))
        .map_err(draw_err)?;

    chart
        .draw_series(std::iter::once(Polygon::new(
            circle_points(layout.bob_x, layout.bob_y, layout.bob_radius, 64),
            BLUE.filled(),
        )))
        .map_err(draw_err)?;

    root.present().map_err(draw_err)?;
    info!(path = %path.display(), "wrote initial position diagram");
    Ok(())
}

/// Draw the three angle histories against time.
pub fn render_trajectory(trajectory: &Trajectory, path: &Path) -> Result<()> {
    if trajectory.is_empty() {
        return Err(PlotError::Empty("trajectory has no samples"));
    }
    let (y_lo, y_hi) = value_range(&[
        trajectory.sinusoidal.as_slice(),
        trajectory.verlet_fine.as_slice(),
        trajectory.verlet_coarse.as_slice(),
    ])
    .ok_or(PlotError::Empty("trajectory has no finite samples"))?;
    let t_end = trajectory.delt * trajectory.len() as f64;

    ensure_parent(path)?;
    let root = BitMapBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(TRAJECTORY_TITLE, ("sans-serif", 28))
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..t_end, y_lo..y_hi)
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .x_desc("t")
        .y_desc("theta (degrees)")
        .draw()
        .map_err(draw_err)?;

    let curves = [
        ("sinusoidal".to_string(), &trajectory.sinusoidal, RED),
        (curve_label(trajectory.coarse_dt), &trajectory.verlet_coarse, GREEN),
        (curve_label(trajectory.fine_dt), &trajectory.verlet_fine, BLUE),
    ];
    for (label, values, color) in curves {
        chart
            .draw_series(LineSeries::new(
                trajectory.times.iter().copied().zip(values.iter().copied()),
                color.stroke_width(2),
            ))
            .map_err(draw_err)?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::MiddleLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(draw_err)?;

    root.present().map_err(draw_err)?;
    info!(path = %path.display(), "wrote trajectory chart");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_curve_labels() {
        assert_eq!(curve_label(0.001), "dt = 0.001");
        assert_eq!(curve_label(0.0005), "dt = 0.0005");
    }

    #[test]
    fn test_value_range_pads_span() {
        let a = [0.0, 10.0];
        let b = [-10.0, 5.0];
        let (lo, hi) = value_range(&[&a[..], &b[..]]).unwrap();
        assert_relative_eq!(lo, -11.0);
        assert_relative_eq!(hi, 11.0);
    }

    #[test]
    fn test_value_range_flat_and_empty() {
        let flat = [3.0, 3.0];
        assert_eq!(value_range(&[&flat[..]]), Some((2.5, 3.5)));
        assert_eq!(value_range(&[]), None);
    }

    #[test]
    fn test_square_margins_centre_square() {
        assert_eq!(square_margins(1200, 860), (170, 0));
        assert_eq!(square_margins(500, 700), (0, 100));
        assert_eq!(square_margins(400, 400), (0, 0));

        let (dx, dy) = square_margins(1200, 861);
        let side_w = 1200 - 2 * dx as u32;
        let side_h = 861 - 2 * dy as u32;
        assert!(side_w.abs_diff(side_h) <= 1);
    }

    #[test]
    fn test_circle_points_on_radius() {
        let pts = circle_points(-1.0, 0.5, 0.05, 32);
        assert_eq!(pts.len(), 32);
        for (x, y) in pts {
            assert_relative_eq!((x + 1.0).hypot(y - 0.5), 0.05, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_empty_trajectory_rejected() {
        let empty = Trajectory {
            times: Vec::new(),
            sinusoidal: Vec::new(),
            verlet_fine: Vec::new(),
            verlet_coarse: Vec::new(),
            delt: 0.01,
            fine_dt: pendula::FINE_DT,
            coarse_dt: pendula::COARSE_DT,
            fine_energy_error: 0.0,
            coarse_energy_error: 0.0,
        };
        let path = std::env::temp_dir().join("pendula-empty.png");
        assert!(matches!(
            render_trajectory(&empty, &path),
            Err(PlotError::Empty(_))
        ));
    }
}
