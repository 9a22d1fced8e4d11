//! Triangle representation and its derived plane quantities.

use zcast_math::{Point3, Vec3};

/// A triangle in 3D space defined by three corner points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// First corner.
    pub a: Point3,
    /// Second corner.
    pub b: Point3,
    /// Third corner.
    pub c: Point3,
}

impl Triangle {
    /// Create a new triangle from its three corners.
    pub fn new(a: Point3, b: Point3, c: Point3) -> Self {
        Self { a, b, c }
    }

    /// First edge vector `b - a`.
    #[inline]
    pub fn edge_u(&self) -> Vec3 {
        self.b - self.a
    }

    /// Second edge vector `c - a`.
    #[inline]
    pub fn edge_v(&self) -> Vec3 {
        self.c - self.a
    }

    /// Unnormalized plane normal `(b - a) × (c - a)`.
    #[inline]
    pub fn raw_normal(&self) -> Vec3 {
        self.edge_u().cross(&self.edge_v())
    }

    /// Whether the triangle has no well-defined plane.
    ///
    /// True only when the raw normal is exactly the zero vector, i.e. the
    /// corners are coincident or exactly collinear. Nearly-degenerate
    /// triangles with a tiny but nonzero normal are not caught here; their
    /// downstream numeric behavior is undefined.
    pub fn is_degenerate(&self) -> bool {
        let n = self.raw_normal();
        n.x == 0.0 && n.y == 0.0 && n.z == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_vectors() {
        let tri = Triangle::new(
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(3.0, 1.0, 0.0),
            Point3::new(1.0, 4.0, 0.0),
        );
        assert_eq!(tri.edge_u(), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(tri.edge_v(), Vec3::new(0.0, 3.0, 0.0));
    }

    #[test]
    fn test_raw_normal_orientation() {
        let tri = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        );
        assert_eq!(tri.raw_normal(), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_coincident_corners_are_degenerate() {
        let p = Point3::new(2.0, -1.0, 5.0);
        let tri = Triangle::new(p, p, p);
        assert!(tri.is_degenerate());
    }

    #[test]
    fn test_collinear_corners_are_degenerate() {
        let tri = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        );
        assert!(tri.is_degenerate());
    }

    #[test]
    fn test_proper_triangle_is_not_degenerate() {
        let tri = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        );
        assert!(!tri.is_degenerate());
    }
}
