//! BezEngine geometry: Bernstein basis, Bezier curves and surfaces.

pub mod bernstein;
pub mod curve;
pub mod surface;

pub use curve::{BezierCurve, SampledCurve};
pub use surface::{BezierSurface, SampledSurface};
