use crate::{Point2, Point3, Vector2, Vector3};
use serde::{Deserialize, Serialize};

/// Axis-Aligned Bounding Box in the plane.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Aabb2 {
    pub min: Point2,
    pub max: Point2,
}

impl Aabb2 {
    pub fn new(min: Point2, max: Point2) -> Self {
        Self { min, max }
    }

    pub fn from_points(points: &[Point2]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let mut min = points[0];
        let mut max = points[0];
        for &p in &points[1..] {
            min = min.min(p);
            max = max.max(p);
        }
        Some(Self { min, max })
    }

    pub fn center(&self) -> Point2 {
        (self.min + self.max) * 0.5
    }

    pub fn extents(&self) -> Vector2 {
        self.max - self.min
    }

    pub fn contains_point(&self, p: Point2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    pub fn expand(&self, amount: f64) -> Self {
        let offset = Vector2::splat(amount);
        Self {
            min: self.min - offset,
            max: self.max + offset,
        }
    }
}

/// Axis-Aligned Bounding Box in 3D space.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Aabb3 {
    pub min: Point3,
    pub max: Point3,
}

impl Aabb3 {
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    pub fn from_points(points: &[Point3]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let mut min = points[0];
        let mut max = points[0];
        for &p in &points[1..] {
            min = min.min(p);
            max = max.max(p);
        }
        Some(Self { min, max })
    }

    pub fn center(&self) -> Point3 {
        (self.min + self.max) * 0.5
    }

    pub fn extents(&self) -> Vector3 {
        self.max - self.min
    }

    pub fn contains_point(&self, p: Point3) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    pub fn expand(&self, amount: f64) -> Self {
        let offset = Vector3::splat(amount);
        Self {
            min: self.min - offset,
            max: self.max + offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bez_core::Tolerance;
    use glam::{dvec2, dvec3};

    #[test]
    fn test_aabb2_from_points() {
        let pts = vec![dvec2(1.0, 2.0), dvec2(-1.0, 5.0), dvec2(3.0, -1.0)];
        let aabb = Aabb2::from_points(&pts).unwrap();
        assert_eq!(aabb.min, dvec2(-1.0, -1.0));
        assert_eq!(aabb.max, dvec2(3.0, 5.0));
        assert_relative_eq!(aabb.center().x, 1.0);
        assert_relative_eq!(aabb.center().y, 2.0);
    }

    #[test]
    fn test_aabb2_empty() {
        assert!(Aabb2::from_points(&[]).is_none());
    }

    #[test]
    fn test_aabb2_contains_and_expand() {
        let aabb = Aabb2::new(dvec2(0.0, 0.0), dvec2(1.0, 1.0));
        assert!(aabb.contains_point(dvec2(0.5, 0.5)));
        assert!(!aabb.contains_point(dvec2(1.5, 0.5)));

        let grown = aabb.expand(0.5);
        assert!(grown.contains_point(dvec2(1.4, 0.5)));
        assert_eq!(grown.min, dvec2(-0.5, -0.5));
    }

    #[test]
    fn test_aabb3_from_points() {
        let pts = vec![
            dvec3(1.0, 2.0, 3.0),
            dvec3(-1.0, 5.0, 0.0),
            dvec3(3.0, -1.0, 2.0),
        ];
        let aabb = Aabb3::from_points(&pts).unwrap();
        assert_eq!(aabb.min, dvec3(-1.0, -1.0, 0.0));
        assert_eq!(aabb.max, dvec3(3.0, 5.0, 3.0));
    }

    #[test]
    fn test_aabb3_degenerate_extents() {
        let tol = Tolerance::default_precision();
        let aabb = Aabb3::from_points(&[dvec3(2.0, 2.0, 2.0)]).unwrap();
        assert!(tol.is_zero(aabb.extents().length()));
        assert!(aabb.contains_point(dvec3(2.0, 2.0, 2.0)));
    }
}
