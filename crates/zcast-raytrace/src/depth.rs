//! Per-ray depth extrema over a triangle set.
//!
//! A camera frame is a shared ray origin plus one target point per ray.
//! For each target the full triangle set is tested with the intersection
//! kernel, valid hits are reduced to the smallest and largest |z|, and
//! rays that hit nothing report the empty range. Inputs are expected in
//! the frame whose z axis is the view axis; no transformation happens
//! here.

use serde::{Deserialize, Serialize};
use zcast_intersect::error::{CastError, Result};
use zcast_intersect::{classify_ray_triangle, Ray, Triangle};
use zcast_math::{Point3, Tolerance};

/// Minimum and maximum intersection depth for one camera ray.
///
/// Depth is the absolute z coordinate of a valid intersection point, a
/// distance-along-view-axis proxy. Both ends are NaN when the ray hits no
/// triangle in the set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthRange {
    /// Smallest |z| among the ray's valid intersections.
    pub min: f64,
    /// Largest |z| among the ray's valid intersections.
    pub max: f64,
}

impl DepthRange {
    /// The range reported for a ray that hits nothing.
    pub const EMPTY: Self = Self {
        min: f64::NAN,
        max: f64::NAN,
    };

    /// Whether the ray hit no triangle at all.
    pub fn is_empty(&self) -> bool {
        self.min.is_nan() && self.max.is_nan()
    }
}

/// Raytrace a camera frame against a triangle set with the default
/// tolerance.
///
/// Every ray shares `origin` and aims at its entry of `frame_points`;
/// `tri_a`/`tri_b`/`tri_c` hold the corner arrays of the triangle set.
/// The result is index-aligned with `frame_points`: entry `i` carries the
/// min/max depth of ray `i` over all triangles, or
/// [`DepthRange::EMPTY`] when nothing was hit. An empty triangle set is
/// valid and makes every ray report empty.
///
/// # Errors
///
/// [`CastError::TriangleLengthMismatch`] when the three corner arrays
/// disagree in length.
pub fn raytrace_camera_frame(
    origin: &Point3,
    frame_points: &[Point3],
    tri_a: &[Point3],
    tri_b: &[Point3],
    tri_c: &[Point3],
) -> Result<Vec<DepthRange>> {
    let tol = Tolerance::DEFAULT;
    raytrace_camera_frame_with_tolerance(&tol, origin, frame_points, tri_a, tri_b, tri_c)
}

/// [`raytrace_camera_frame`] with an explicit classification tolerance.
pub fn raytrace_camera_frame_with_tolerance(
    tol: &Tolerance,
    origin: &Point3,
    frame_points: &[Point3],
    tri_a: &[Point3],
    tri_b: &[Point3],
    tri_c: &[Point3],
) -> Result<Vec<DepthRange>> {
    let m = tri_a.len();
    if tri_b.len() != m || tri_c.len() != m {
        return Err(CastError::TriangleLengthMismatch {
            corner_a: m,
            corner_b: tri_b.len(),
            corner_c: tri_c.len(),
        });
    }

    let mut ranges = Vec::with_capacity(frame_points.len());
    for target in frame_points {
        ranges.push(trace_ray(tol, origin, target, tri_a, tri_b, tri_c));
    }

    Ok(ranges)
}

/// Walk one ray over the whole triangle set and fold hit depths.
fn trace_ray(
    tol: &Tolerance,
    origin: &Point3,
    target: &Point3,
    tri_a: &[Point3],
    tri_b: &[Point3],
    tri_c: &[Point3],
) -> DepthRange {
    let ray = Ray::new(*origin, *target);

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut hit_any = false;

    for i in 0..tri_a.len() {
        let tri = Triangle::new(tri_a[i], tri_b[i], tri_c[i]);
        let hit = classify_ray_triangle(&ray, &tri, tol);
        if hit.is_hit() {
            let depth = hit.point.z.abs();
            min = min.min(depth);
            max = max.max(depth);
            hit_any = true;
        }
    }

    if hit_any {
        DepthRange { min, max }
    } else {
        DepthRange::EMPTY
    }
}
