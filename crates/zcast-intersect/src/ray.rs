//! Segment-style ray representation.

use zcast_math::{Point3, Vec3};

/// A ray in 3D space defined by an origin and a target point.
///
/// The ray is the segment `origin + r * (target - origin)`. The direction
/// `target - origin` is deliberately left unnormalized: the intersection
/// parameter `r` is measured in units of it (`r = 1` lands on the target),
/// and the parallel tolerance in the classification kernel applies to the
/// raw direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Point3,
    /// Target point of the ray (the second point spanning the segment).
    pub target: Point3,
}

impl Ray {
    /// Create a new ray from an origin and a target point.
    pub fn new(origin: Point3, target: Point3) -> Self {
        Self { origin, target }
    }

    /// The unnormalized direction `target - origin`.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.target - self.origin
    }

    /// Evaluate the ray at parameter `r`: `origin + r * direction`.
    #[inline]
    pub fn at(&self, r: f64) -> Point3 {
        self.origin + r * self.direction()
    }
}
