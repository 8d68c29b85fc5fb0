//! Bezier curve evaluation in the plane.

use bez_core::{BezError, Result, Validate};
use bez_math::{DVec2, Point2};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::bernstein::bernstein_row;

/// Points of a curve sampled at uniformly spaced parameters, ordered by `t`.
pub type SampledCurve = Vec<Point2>;

/// A Bezier curve of degree `n` defined by `n + 1` control points.
///
/// The control points are fixed at construction; evaluation is a pure
/// function of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BezierCurve {
    control_points: Vec<Point2>,
}

impl BezierCurve {
    pub fn new(control_points: Vec<Point2>) -> Result<Self> {
        let curve = Self { control_points };
        curve.validate()?;
        Ok(curve)
    }

    /// Polynomial degree, one less than the number of control points.
    pub fn degree(&self) -> usize {
        self.control_points.len() - 1
    }

    pub fn control_points(&self) -> &[Point2] {
        &self.control_points
    }

    /// Evaluate the curve at parameter `t` as the Bernstein-weighted sum of
    /// the control points.
    pub fn point_at(&self, t: f64) -> Point2 {
        let basis = bernstein_row(self.degree(), t);
        let mut point = DVec2::ZERO;
        for (i, &cp) in self.control_points.iter().enumerate() {
            point += basis[i] * cp;
        }
        point
    }

    /// Sample the curve at `num_points` uniformly spaced parameters covering
    /// `[0, 1]` inclusive (a single sample at `t = 0` when `num_points` is 1).
    ///
    /// The first and last samples interpolate the first and last control
    /// points; every sample lies in the convex hull of the control points.
    pub fn sample(&self, num_points: usize) -> Result<SampledCurve> {
        if num_points == 0 {
            return Err(BezError::InvalidInput(
                "num_points must be at least 1".into(),
            ));
        }
        Ok((0..num_points)
            .into_par_iter()
            .map(|i| {
                let t = if num_points == 1 {
                    0.0
                } else {
                    i as f64 / (num_points - 1) as f64
                };
                self.point_at(t)
            })
            .collect())
    }
}

impl Validate for BezierCurve {
    fn validate(&self) -> Result<()> {
        if self.control_points.is_empty() {
            return Err(BezError::InvalidInput(
                "curve needs at least one control point".into(),
            ));
        }
        Ok(())
    }
}
