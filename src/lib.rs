//! A kernel of closed-form three-dimensional geometry: a point/vector type
//! over floating or exact integer coordinates, plus plane, segment and sphere
//! intersection routines built on it:
//!
//! ```
//! use geom3::space::{p3, v3};
//! use geom3::space::plane::plane_intersection;
//! use geom3::space::segment::seg_seg_distance;
//! use geom3::space::sphere::sphere_sphere_intersection;
//!
//! let corner = plane_intersection(
//!     p3(1.0, 0.0, 0.0), v3(1.0, 0.0, 0.0),
//!     p3(0.0, 2.0, 0.0), v3(0.0, 1.0, 0.0),
//!     p3(0.0, 0.0, 3.0), v3(0.0, 0.0, 1.0),
//! );
//! assert_eq!(corner, p3(1.0, 2.0, 3.0));
//!
//! let d = seg_seg_distance(
//!     p3(0.0, 0.0, 0.0), p3(1.0, 0.0, 0.0),
//!     p3(0.0, 2.0, 0.0), p3(1.0, 2.0, 0.0),
//! );
//! assert_eq!(d, 2.0);
//!
//! let circle = sphere_sphere_intersection(p3(0.0, 0.0, 0.0), 1.0, p3(1.0, 0.0, 0.0), 1.0);
//! assert_eq!(circle.map(|c| c.center), Some(p3(0.5, 0.0, 0.0)));
//! ```
//!
//! Integer coordinates are compared exactly, and anything irrational comes
//! back as `f64`:
//!
//! ```
//! use geom3::space::p3;
//!
//! let a = p3(0i64, 0, 0);
//! let b = p3(3i64, 4, 0);
//! assert_eq!(a.distance2(b), 25);
//! assert_eq!(a.distance(b), 5.0);
//! assert_eq!(p3(4i64, -6, 10).unit(), p3(2, -3, 5));
//! ```
//!
//! Planes, spheres, lines and segments are passed as plain argument pairs.
//! The thin wrappers in [`space`] (e.g. [`space::sphere::Sphere3`]) bundle
//! such a pair and implement the [`util::container::Container`] and
//! [`util::intersect::Intersect`] traits.
extern crate cgmath;

pub mod error;
pub mod space;
pub mod util;

pub use error::GeometryError;
pub use space::{p3, v3, Point3, Vector3};
pub use util::scalar::{Integral, Real, Scalar};
