//! Per-pair ray-triangle classification: the intersection kernel.
//!
//! Every (ray, triangle) pair is classified into a four-way outcome rather
//! than failing on degeneracies. The order of the tests is load-bearing:
//! a degenerate triangle wins over everything, the parallel test wins over
//! the plane crossing, and the barycentric stage can only downgrade a
//! would-be hit, never resurrect an earlier miss.

use serde::{Deserialize, Serialize};
use zcast_math::{nan_point, Point3, Tolerance};

use crate::ray::Ray;
use crate::triangle::Triangle;

/// Classification code for one ray-triangle test outcome.
///
/// The discriminants are part of the contract and are stable across
/// versions; [`HitFlag::code`] exposes them as `i32`.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitFlag {
    /// The triangle's normal is exactly zero: no plane to intersect.
    DegenerateTriangle = -1,
    /// No intersection: the ray is parallel and offset from the plane,
    /// crosses the plane behind its origin, or crosses outside the
    /// triangle bounds.
    Miss = 0,
    /// Valid intersection inside the triangle; the intersection point is
    /// set and finite.
    Hit = 1,
    /// The ray lies within the triangle's plane (coplanar, ambiguous).
    InPlane = 2,
}

impl HitFlag {
    /// The integer classification code (-1, 0, 1 or 2).
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Outcome of one ray-triangle test.
///
/// The point field follows two conventions depending on how a miss was
/// produced: misses decided before the plane crossing exists (degenerate
/// triangle, parallel ray, behind-origin crossing) carry the all-NaN
/// marker, while misses from the barycentric outside tests carry the
/// finite plane crossing point as a near-miss record. Callers must filter
/// by flag, not by NaN-ness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayTriangleHit {
    /// Outcome classification for this pair.
    pub flag: HitFlag,
    /// Intersection point; see the struct docs for when it is finite.
    pub point: Point3,
}

impl RayTriangleHit {
    /// Whether this pair produced a valid in-triangle intersection.
    #[inline]
    pub fn is_hit(&self) -> bool {
        self.flag == HitFlag::Hit
    }

    fn unresolved(flag: HitFlag) -> Self {
        Self {
            flag,
            point: nan_point(),
        }
    }
}

/// Classify a single ray against a single triangle.
///
/// The ray is treated as the unbounded-forward segment from its origin
/// through its target: crossings behind the origin are misses, crossings
/// beyond the target are still hits. The parallel test compares `|n·d|`
/// against `tol.parallel` with the unnormalized direction `d`.
///
/// The barycentric inside test uses the loose bound `s ∈ [0,1]` and
/// `t ∈ [0,1]` (a quad, not the `s+t ≤ 1` triangle half). Near-zero Gram
/// determinants below the exactly-degenerate case produce NaN barycentric
/// coordinates that fall through to a hit; this undefined-numeric region
/// is accepted rather than guarded.
pub fn classify_ray_triangle(ray: &Ray, tri: &Triangle, tol: &Tolerance) -> RayTriangleHit {
    let n = tri.raw_normal();

    // A zero normal means no plane; this wins over every other test.
    if n.x == 0.0 && n.y == 0.0 && n.z == 0.0 {
        return RayTriangleHit::unresolved(HitFlag::DegenerateTriangle);
    }

    let d = ray.direction();
    let w0 = ray.origin - tri.a;
    let acoef = -n.dot(&w0);
    let bcoef = n.dot(&d);

    if tol.is_parallel(bcoef) {
        // acoef == 0 puts the origin exactly in the plane, and with a
        // parallel direction the whole ray stays there.
        return if acoef == 0.0 {
            RayTriangleHit::unresolved(HitFlag::InPlane)
        } else {
            RayTriangleHit::unresolved(HitFlag::Miss)
        };
    }

    let r = acoef / bcoef;
    if r < 0.0 {
        // The plane crossing lies behind the ray origin.
        return RayTriangleHit::unresolved(HitFlag::Miss);
    }

    let point = ray.at(r);

    // Barycentric parameters of the crossing point: point = a + s*u + t*v.
    let u = tri.edge_u();
    let v = tri.edge_v();
    let uu = u.dot(&u);
    let uv = u.dot(&v);
    let vv = v.dot(&v);
    let w = point - tri.a;
    let wu = w.dot(&u);
    let wv = w.dot(&v);
    let d_gram = uv * uv - uu * vv;

    // The comparisons are written so that NaN coordinates (near-zero Gram
    // determinant) fail both and fall through.
    let s = (uv * wv - vv * wu) / d_gram;
    if s < 0.0 || s > 1.0 {
        // Outside along the u edge; the crossing point is still recorded.
        return RayTriangleHit {
            flag: HitFlag::Miss,
            point,
        };
    }

    let t = (uv * wu - uu * wv) / d_gram;
    if t < 0.0 || t > 1.0 {
        // Outside along the v edge; same near-miss record.
        return RayTriangleHit {
            flag: HitFlag::Miss,
            point,
        };
    }

    RayTriangleHit {
        flag: HitFlag::Hit,
        point,
    }
}
