//! PNG plots of sampled Bezier geometry.
//!
//! The curve plot follows the usual layout: the sampled curve as a line, the
//! control points as markers joined by their control polygon. Surfaces are
//! drawn as iso-line wireframes of the sampled grid under a 3D projection.

use std::path::Path;

use bez_core::{BezError, Result, Tolerance};
use bez_math::{Aabb2, Aabb3, Point2, Point3};
use plotters::prelude::*;

fn render_err<E: std::fmt::Display>(e: E) -> BezError {
    BezError::Render(e.to_string())
}

/// Padding that keeps the geometry off the plot frame, with a floor for
/// degenerate (single-point) bounds.
fn frame_margin(extent: f64) -> f64 {
    if Tolerance::default_precision().is_zero(extent) {
        1.0
    } else {
        extent * 0.05
    }
}

/// Plot a sampled curve with its control points into a PNG file.
pub fn plot_curve(samples: &[Point2], control_points: &[Point2], path: &Path) -> Result<()> {
    if samples.is_empty() {
        return Err(BezError::InvalidInput("no curve samples to plot".into()));
    }
    // The control hull bounds the samples too, so it fixes the axis ranges.
    let bounds = Aabb2::from_points(control_points)
        .ok_or_else(|| BezError::InvalidInput("no control points to plot".into()))?;
    let bounds = bounds.expand(frame_margin(bounds.extents().length()));

    let root = BitMapBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Bezier Curve", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(32)
        .y_label_area_size(44)
        .build_cartesian_2d(bounds.min.x..bounds.max.x, bounds.min.y..bounds.max.y)
        .map_err(render_err)?;

    chart.configure_mesh().draw().map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(
            samples.iter().map(|p| (p.x, p.y)),
            &BLUE,
        ))
        .map_err(render_err)?
        .label("Bezier curve")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], &BLUE));

    // Control polygon
    chart
        .draw_series(LineSeries::new(
            control_points.iter().map(|p| (p.x, p.y)),
            &RED.mix(0.5),
        ))
        .map_err(render_err)?;

    chart
        .draw_series(
            control_points
                .iter()
                .map(|p| Circle::new((p.x, p.y), 4, RED.filled())),
        )
        .map_err(render_err)?
        .label("Control points")
        .legend(|(x, y)| Circle::new((x + 9, y), 4, RED.filled()));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}

/// Plot a sampled surface grid with its control points into a PNG file.
pub fn plot_surface(
    grid: &[Vec<Point3>],
    control_points: &[Vec<Point3>],
    path: &Path,
) -> Result<()> {
    if grid.is_empty() || grid[0].is_empty() {
        return Err(BezError::InvalidInput("no surface samples to plot".into()));
    }
    let cols = grid[0].len();
    if grid.iter().any(|row| row.len() != cols) {
        return Err(BezError::InvalidInput(
            "sample grid is not rectangular".into(),
        ));
    }

    let controls: Vec<Point3> = control_points.iter().flatten().copied().collect();
    let bounds = Aabb3::from_points(&controls)
        .ok_or_else(|| BezError::InvalidInput("no control points to plot".into()))?;
    let bounds = bounds.expand(frame_margin(bounds.extents().length()));

    let root = BitMapBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Bezier Surface", ("sans-serif", 24))
        .margin(10)
        .build_cartesian_3d(
            bounds.min.x..bounds.max.x,
            bounds.min.y..bounds.max.y,
            bounds.min.z..bounds.max.z,
        )
        .map_err(render_err)?;

    chart.with_projection(|mut pb| {
        pb.pitch = 0.35;
        pb.yaw = 0.7;
        pb.scale = 0.85;
        pb.into_matrix()
    });

    chart.configure_axes().draw().map_err(render_err)?;

    // Wireframe: iso-lines of the sampled grid in both parameter directions
    chart
        .draw_series(LineSeries::new(
            grid[0].iter().map(|p| (p.x, p.y, p.z)),
            &BLUE.mix(0.6),
        ))
        .map_err(render_err)?
        .label("Bezier surface")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], &BLUE));

    for row in &grid[1..] {
        chart
            .draw_series(LineSeries::new(
                row.iter().map(|p| (p.x, p.y, p.z)),
                &BLUE.mix(0.6),
            ))
            .map_err(render_err)?;
    }
    for j in 0..cols {
        chart
            .draw_series(LineSeries::new(
                grid.iter().map(|row| (row[j].x, row[j].y, row[j].z)),
                &BLUE.mix(0.6),
            ))
            .map_err(render_err)?;
    }

    chart
        .draw_series(
            controls
                .iter()
                .map(|p| Circle::new((p.x, p.y, p.z), 4, RED.filled())),
        )
        .map_err(render_err)?
        .label("Control points")
        .legend(|(x, y)| Circle::new((x + 9, y), 4, RED.filled()));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}
