//! Tensor-product Bezier surface evaluation.

use bez_core::{BezError, Result, Validate};
use bez_math::{DVec3, Point3};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::bernstein::bernstein_row;

/// A grid of surface points sampled at uniformly spaced `(u, v)` parameters,
/// row-major by `u` then `v`.
pub type SampledSurface = Vec<Vec<Point3>>;

/// A bidegree-`(m, n)` Bezier surface defined by an `(m+1) x (n+1)` grid of
/// control points.
///
/// `control_points[i][j]` is the control point at row `i` (u-direction) and
/// column `j` (v-direction). The grid is fixed at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BezierSurface {
    control_points: Vec<Vec<Point3>>,
}

impl BezierSurface {
    pub fn new(control_points: Vec<Vec<Point3>>) -> Result<Self> {
        let surface = Self { control_points };
        surface.validate()?;
        Ok(surface)
    }

    /// Bidegree `(m, n)`: one less than the grid dimensions in u and v.
    pub fn degrees(&self) -> (usize, usize) {
        (
            self.control_points.len() - 1,
            self.control_points[0].len() - 1,
        )
    }

    pub fn control_points(&self) -> &[Vec<Point3>] {
        &self.control_points
    }

    /// Evaluate the surface at parameters `(u, v)` as the tensor-product
    /// double sum of Bernstein weights over the control grid.
    pub fn point_at(&self, u: f64, v: f64) -> Point3 {
        let (m, n) = self.degrees();
        let basis_u = bernstein_row(m, u);
        let basis_v = bernstein_row(n, v);

        let mut point = DVec3::ZERO;
        for i in 0..=m {
            for j in 0..=n {
                point += basis_u[i] * basis_v[j] * self.control_points[i][j];
            }
        }
        point
    }

    /// Sample a `num_points x num_points` grid over `(u, v)` in `[0, 1]^2`,
    /// both axes uniformly spaced and inclusive.
    ///
    /// The four corners of the result interpolate the four corner control
    /// points; every sample lies in the convex hull of the control grid.
    pub fn sample(&self, num_points: usize) -> Result<SampledSurface> {
        if num_points == 0 {
            return Err(BezError::InvalidInput(
                "num_points must be at least 1 per axis".into(),
            ));
        }
        let param = |i: usize| {
            if num_points == 1 {
                0.0
            } else {
                i as f64 / (num_points - 1) as f64
            }
        };
        Ok((0..num_points)
            .into_par_iter()
            .map(|i| {
                let u = param(i);
                (0..num_points).map(|j| self.point_at(u, param(j))).collect()
            })
            .collect())
    }
}

impl Validate for BezierSurface {
    fn validate(&self) -> Result<()> {
        if self.control_points.is_empty() {
            return Err(BezError::InvalidInput(
                "surface needs at least one row of control points".into(),
            ));
        }
        let cols = self.control_points[0].len();
        if cols == 0 {
            return Err(BezError::InvalidInput(
                "surface rows need at least one control point".into(),
            ));
        }
        for (i, row) in self.control_points.iter().enumerate() {
            if row.len() != cols {
                return Err(BezError::InvalidInput(format!(
                    "control grid is not rectangular: row 0 has {} columns, row {} has {}",
                    cols,
                    i,
                    row.len()
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bez_math::{dvec3, Aabb3};

    /// 3x3 grid, z = 0 everywhere except the center row.
    fn dome() -> BezierSurface {
        BezierSurface::new(vec![
            vec![dvec3(0.0, 0.0, 0.0), dvec3(1.0, 0.0, 0.0), dvec3(2.0, 0.0, 0.0)],
            vec![dvec3(0.0, 1.0, 1.0), dvec3(1.0, 1.0, 1.0), dvec3(2.0, 1.0, 1.0)],
            vec![dvec3(0.0, 2.0, 0.0), dvec3(1.0, 2.0, 0.0), dvec3(2.0, 2.0, 0.0)],
        ])
        .unwrap()
    }

    #[test]
    fn test_corner_interpolation() {
        let surface = dome();
        let grid = surface.sample(2).unwrap();
        let cps = surface.control_points();

        assert_eq!(grid[0][0], cps[0][0]);
        assert_eq!(grid[0][1], cps[0][2]);
        assert_eq!(grid[1][0], cps[2][0]);
        assert_eq!(grid[1][1], cps[2][2]);
    }

    #[test]
    fn test_sample_dimensions() {
        let surface = dome();
        for n in [1, 2, 4, 20] {
            let grid = surface.sample(n).unwrap();
            assert_eq!(grid.len(), n);
            for row in &grid {
                assert_eq!(row.len(), n);
            }
        }
    }

    #[test]
    fn test_bilinear_center() {
        let surface = BezierSurface::new(vec![
            vec![dvec3(0.0, 0.0, 0.0), dvec3(1.0, 0.0, 0.0)],
            vec![dvec3(0.0, 1.0, 0.0), dvec3(1.0, 1.0, 0.0)],
        ])
        .unwrap();
        assert_eq!(surface.degrees(), (1, 1));

        let p = surface.point_at(0.5, 0.5);
        assert!((p - dvec3(0.5, 0.5, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_single_sample_is_first_corner() {
        let grid = dome().sample(1).unwrap();
        assert_eq!(grid.len(), 1);
        assert_eq!(grid[0].len(), 1);
        assert_eq!(grid[0][0], dvec3(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_samples_inside_control_hull() {
        let surface = dome();
        let flat: Vec<_> = surface.control_points().iter().flatten().copied().collect();
        let hull = Aabb3::from_points(&flat).unwrap().expand(1e-12);
        for row in surface.sample(15).unwrap() {
            for p in row {
                assert!(hull.contains_point(p), "sample {:?} escaped the hull", p);
            }
        }
    }

    #[test]
    fn test_empty_grid_rejected() {
        assert!(matches!(
            BezierSurface::new(vec![]),
            Err(BezError::InvalidInput(_))
        ));
        assert!(matches!(
            BezierSurface::new(vec![vec![]]),
            Err(BezError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_ragged_grid_rejected() {
        let err = BezierSurface::new(vec![
            vec![dvec3(0.0, 0.0, 0.0), dvec3(1.0, 0.0, 0.0)],
            vec![dvec3(0.0, 1.0, 0.0)],
        ])
        .unwrap_err();
        assert!(matches!(err, BezError::InvalidInput(_)));
    }

    #[test]
    fn test_zero_samples_rejected() {
        let err = dome().sample(0).unwrap_err();
        assert!(matches!(err, BezError::InvalidInput(_)));
    }
}
