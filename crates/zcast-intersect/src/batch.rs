//! Batched intersection over index-aligned point arrays.
//!
//! The batch entry points map the per-pair kernel across N (ray, triangle)
//! pairs held as five parallel arrays. Outputs preserve one-to-one
//! positional correspondence with the inputs; nothing is sorted, filtered,
//! or broadcast.

use zcast_math::{Point3, Tolerance};

use crate::classify::{classify_ray_triangle, RayTriangleHit};
use crate::error::{CastError, Result};
use crate::ray::Ray;
use crate::triangle::Triangle;

/// Intersect N index-aligned (ray, triangle) pairs with the default
/// tolerance.
///
/// Row `i` pairs the ray `origins[i] → targets[i]` with the triangle
/// `(tri_a[i], tri_b[i], tri_c[i])`. All five slices must share one
/// length; `N = 0` is valid and yields an empty result. The output row
/// carries the outcome flag and (where defined) the intersection point for
/// the same index.
///
/// # Errors
///
/// [`CastError::BatchLengthMismatch`] when the slice lengths disagree.
pub fn intersect_ray_triangles(
    origins: &[Point3],
    targets: &[Point3],
    tri_a: &[Point3],
    tri_b: &[Point3],
    tri_c: &[Point3],
) -> Result<Vec<RayTriangleHit>> {
    let tol = Tolerance::DEFAULT;
    intersect_ray_triangles_with_tolerance(&tol, origins, targets, tri_a, tri_b, tri_c)
}

/// [`intersect_ray_triangles`] with an explicit classification tolerance.
///
/// The default tolerance reproduces the stock classification exactly; a
/// custom one only moves the parallel threshold.
pub fn intersect_ray_triangles_with_tolerance(
    tol: &Tolerance,
    origins: &[Point3],
    targets: &[Point3],
    tri_a: &[Point3],
    tri_b: &[Point3],
    tri_c: &[Point3],
) -> Result<Vec<RayTriangleHit>> {
    let n = origins.len();
    if targets.len() != n || tri_a.len() != n || tri_b.len() != n || tri_c.len() != n {
        return Err(CastError::BatchLengthMismatch {
            origins: n,
            targets: targets.len(),
            corner_a: tri_a.len(),
            corner_b: tri_b.len(),
            corner_c: tri_c.len(),
        });
    }

    let mut hits = Vec::with_capacity(n);
    for i in 0..n {
        let ray = Ray::new(origins[i], targets[i]);
        let tri = Triangle::new(tri_a[i], tri_b[i], tri_c[i]);
        hits.push(classify_ray_triangle(&ray, &tri, tol));
    }

    Ok(hits)
}
