//! Plane model fitted to point triples

use planeseg_core::{ColoredPoint3f, Point3f, Vector3f};

/// A plane described by a unit normal and a reference point on the plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit-length plane normal
    pub normal: Vector3f,
    /// A point on the plane (the first point of the fitting triple)
    pub point: Point3f,
}

impl Plane {
    /// Fit a plane through three points.
    ///
    /// Returns `None` when the points are collinear or coincident, i.e.
    /// when the cross product of the edge vectors has near-zero magnitude
    /// and normalizing it would produce NaN. Callers are expected to
    /// resample a fresh triple in that case.
    pub fn from_points(p1: &Point3f, p2: &Point3f, p3: &Point3f) -> Option<Self> {
        let normal = (p3 - p1).cross(&(p2 - p1));
        if normal.magnitude() < 1e-8 {
            return None;
        }

        Some(Self {
            normal: normal.normalize(),
            point: *p1,
        })
    }

    /// Absolute distance from `query` to the plane.
    ///
    /// This is the true point-to-plane distance because `normal` is unit
    /// length and `point` lies on the plane by construction.
    pub fn distance(&self, query: &Point3f) -> f32 {
        self.normal.dot(&(self.point - query)).abs()
    }

    /// Indices of the points within `threshold` of the plane, ascending.
    pub fn inliers(&self, points: &[ColoredPoint3f], threshold: f32) -> Vec<usize> {
        points
            .iter()
            .enumerate()
            .filter(|(_, p)| self.distance(&p.position) <= threshold)
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normal_is_unit_and_orthogonal() {
        let p1 = Point3f::new(1.0, 2.0, 3.0);
        let p2 = Point3f::new(4.0, -1.0, 2.5);
        let p3 = Point3f::new(-2.0, 0.5, 7.0);

        let plane = Plane::from_points(&p1, &p2, &p3).unwrap();

        assert_relative_eq!(plane.normal.magnitude(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(plane.normal.dot(&(p2 - p1)), 0.0, epsilon = 1e-5);
        assert_relative_eq!(plane.normal.dot(&(p3 - p1)), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_collinear_points_are_degenerate() {
        let p1 = Point3f::new(0.0, 0.0, 0.0);
        let p2 = Point3f::new(1.0, 1.0, 1.0);
        let p3 = Point3f::new(2.0, 2.0, 2.0);

        assert!(Plane::from_points(&p1, &p2, &p3).is_none());
    }

    #[test]
    fn test_coincident_points_are_degenerate() {
        let p = Point3f::new(3.0, -2.0, 1.0);
        assert!(Plane::from_points(&p, &p, &p).is_none());
    }

    #[test]
    fn test_distance_to_reference_point_is_zero() {
        let p1 = Point3f::new(5.0, 5.0, 1.0);
        let p2 = Point3f::new(6.0, 5.0, 1.0);
        let p3 = Point3f::new(5.0, 7.0, 1.0);

        let plane = Plane::from_points(&p1, &p2, &p3).unwrap();
        assert_relative_eq!(plane.distance(&p1), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_distance_from_offset_point() {
        // z = 1 plane
        let p1 = Point3f::new(0.0, 0.0, 1.0);
        let p2 = Point3f::new(1.0, 0.0, 1.0);
        let p3 = Point3f::new(0.0, 1.0, 1.0);

        let plane = Plane::from_points(&p1, &p2, &p3).unwrap();
        assert_relative_eq!(
            plane.distance(&Point3f::new(7.0, -3.0, 4.0)),
            3.0,
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_inlier_indices() {
        let p1 = Point3f::new(0.0, 0.0, 0.0);
        let p2 = Point3f::new(1.0, 0.0, 0.0);
        let p3 = Point3f::new(0.0, 1.0, 0.0);
        let plane = Plane::from_points(&p1, &p2, &p3).unwrap();

        let points = vec![
            ColoredPoint3f::from(Point3f::new(0.5, 0.5, 0.0)),
            ColoredPoint3f::from(Point3f::new(0.5, 0.5, 5.0)),
            ColoredPoint3f::from(Point3f::new(2.0, 2.0, 0.05)),
        ];

        assert_eq!(plane.inliers(&points, 0.1), vec![0, 2]);
    }
}
