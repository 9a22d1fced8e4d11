#![warn(missing_docs)]

//! Math types for zcast.
//!
//! Thin wrappers around nalgebra providing the double-precision point and
//! vector types used throughout zcast, the tolerance constant for the
//! parallel-ray test, and the all-NaN point convention shared by the
//! intersection and raytrace crates.

use nalgebra::Vector3;

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// The componentwise-NaN point used to mark an unset intersection.
///
/// Outputs follow an all-or-nothing convention: an intersection point is
/// either fully finite or NaN in every component, never partially NaN.
pub fn nan_point() -> Point3 {
    Point3::new(f64::NAN, f64::NAN, f64::NAN)
}

/// Test whether a point is the all-NaN marker produced by [`nan_point`].
pub fn is_nan_point(p: &Point3) -> bool {
    p.x.is_nan() && p.y.is_nan() && p.z.is_nan()
}

/// Tolerance constants for the ray-triangle classification.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Threshold on |n·d| below which a ray direction counts as parallel
    /// to a triangle's plane. Applies to the unnormalized direction.
    pub parallel: f64,
}

impl Tolerance {
    /// Default classification tolerance (1e-6 on the parallel test).
    pub const DEFAULT: Self = Self { parallel: 1e-6 };

    /// Check if a direction-normal dot product counts as parallel.
    pub fn is_parallel(&self, b: f64) -> bool {
        b.abs() < self.parallel
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}
