#![warn(missing_docs)]

//! Camera-frame depth raytracing for zcast.
//!
//! This crate drives the zcast intersection kernel from a camera's point of
//! view: one shared ray origin, a frame of target points, and a triangle set
//! shared by every ray. Each ray is reduced to the minimum and maximum depth
//! (|z| of the intersection point) over all triangles it hits.
//!
//! # Architecture
//!
//! - [`DepthRange`] - Per-ray min/max depth, NaN-empty when nothing is hit
//! - [`raytrace_camera_frame`] - Trace a whole frame against a triangle set
//! - [`raytrace_camera_frame_with_tolerance`] - Same, with an explicit
//!   parallel tolerance
//!
//! # Example
//!
//! ```
//! use zcast_math::Point3;
//! use zcast_raytrace::raytrace_camera_frame;
//!
//! // One triangle in the z = 2 plane, one ray through its interior.
//! let a = [Point3::new(-1.0, -1.0, 2.0)];
//! let b = [Point3::new(3.0, -1.0, 2.0)];
//! let c = [Point3::new(-1.0, 3.0, 2.0)];
//!
//! let origin = Point3::new(0.0, 0.0, 0.0);
//! let frame = [Point3::new(0.0, 0.0, 1.0)];
//!
//! let ranges = raytrace_camera_frame(&origin, &frame, &a, &b, &c).unwrap();
//! assert_eq!(ranges[0].min, 2.0);
//! assert_eq!(ranges[0].max, 2.0);
//! ```

pub use zcast_intersect;
pub use zcast_math;

pub mod depth;

pub use depth::{raytrace_camera_frame, raytrace_camera_frame_with_tolerance, DepthRange};
