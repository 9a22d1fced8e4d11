#![warn(missing_docs)]

//! Batched ray-triangle intersection for zcast.
//!
//! This crate classifies (ray, triangle) pairs geometrically instead of
//! failing on degeneracies: each pair yields a valid in-triangle
//! intersection, a miss, a ray lying inside the triangle's plane, or a
//! degenerate triangle with no plane at all. Rays are segment-style
//! (origin and target point, unnormalized direction) and all inputs are
//! expected in one consistent coordinate frame; no transformation happens
//! here.
//!
//! # Architecture
//!
//! - [`Ray`] - Segment-style ray with origin and target point
//! - [`Triangle`] - Three corners with derived edge and normal quantities
//! - [`classify_ray_triangle`] - The per-pair classification kernel
//! - [`intersect_ray_triangles`] - Batched, index-aligned entry point
//! - [`CastError`] - Rejection of mismatched input array lengths
//!
//! # Example
//!
//! ```
//! use zcast_intersect::{intersect_ray_triangles, HitFlag};
//! use zcast_math::Point3;
//!
//! // One ray fired straight down through a unit triangle at the origin
//! let origins = [Point3::new(0.0, 0.0, 1.0)];
//! let targets = [Point3::new(0.0, 0.0, -1.0)];
//! let tri_a = [Point3::new(0.0, 0.0, 0.0)];
//! let tri_b = [Point3::new(1.0, 0.0, 0.0)];
//! let tri_c = [Point3::new(0.0, 1.0, 0.0)];
//!
//! let hits = intersect_ray_triangles(&origins, &targets, &tri_a, &tri_b, &tri_c).unwrap();
//! assert_eq!(hits[0].flag, HitFlag::Hit);
//! assert!(hits[0].point.z.abs() < 1e-12);
//! ```

pub mod batch;
pub mod classify;
pub mod error;
pub mod ray;
pub mod triangle;

pub use batch::{intersect_ray_triangles, intersect_ray_triangles_with_tolerance};
pub use classify::{classify_ray_triangle, HitFlag, RayTriangleHit};
pub use error::{CastError, Result};
pub use ray::Ray;
pub use triangle::Triangle;
