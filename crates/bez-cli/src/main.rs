//! BezEngine demo CLI
//!
//! Renders the two built-in examples: a cubic Bezier curve and a biquadratic
//! Bezier surface, each plotted next to its control points.
//!
//! Outputs in the working directory:
//! - `bezier_curve.png`
//! - `bezier_surface.png`
//! - `bezier_surface.html` (interactive Three.js viewer)
//!
//! Takes no arguments. Exits 0 on success, 1 on failure.

use std::path::Path;
use std::process;

use bez_core::Result;
use bez_geometry::{BezierCurve, BezierSurface};
use bez_math::{dvec2, dvec3};
use bez_render::{export_surface_html, plot_curve, plot_surface};

const CURVE_SAMPLES: usize = 100;
const SURFACE_SAMPLES: usize = 20;

fn run() -> Result<()> {
    let curve = BezierCurve::new(vec![
        dvec2(0.0, 0.0),
        dvec2(1.0, 2.0),
        dvec2(3.0, 3.0),
        dvec2(4.0, 0.0),
    ])?;
    let samples = curve.sample(CURVE_SAMPLES)?;
    plot_curve(&samples, curve.control_points(), Path::new("bezier_curve.png"))?;
    println!(
        "Wrote bezier_curve.png (degree {}, {} samples)",
        curve.degree(),
        samples.len()
    );

    let surface = BezierSurface::new(vec![
        vec![dvec3(0.0, 0.0, 0.0), dvec3(1.0, 0.0, 1.0), dvec3(2.0, 0.0, 0.0)],
        vec![dvec3(0.0, 1.0, 1.0), dvec3(1.0, 1.0, 2.0), dvec3(2.0, 1.0, 1.0)],
        vec![dvec3(0.0, 2.0, 0.0), dvec3(1.0, 2.0, 1.0), dvec3(2.0, 2.0, 0.0)],
    ])?;
    let grid = surface.sample(SURFACE_SAMPLES)?;
    plot_surface(&grid, surface.control_points(), Path::new("bezier_surface.png"))?;
    println!(
        "Wrote bezier_surface.png (bidegree {:?}, {}x{} samples)",
        surface.degrees(),
        grid.len(),
        grid[0].len()
    );

    export_surface_html(
        &grid,
        surface.control_points(),
        Path::new("bezier_surface.html"),
    )?;
    println!("Wrote bezier_surface.html");

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
