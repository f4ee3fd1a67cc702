//! Three-dimensional points and the closed-form algorithms built on them.
pub mod plane;
pub mod point;
pub mod query;
pub mod segment;
pub mod sphere;
pub mod triangle;

pub use point::{Point3, Vector3};

pub type Point3f = Point3<f64>;
pub type Point3i = Point3<i64>;

pub fn p3<T>(x: T, y: T, z: T) -> Point3<T> {
    Point3::new(x, y, z)
}

pub fn v3<T>(x: T, y: T, z: T) -> Vector3<T> {
    Point3::new(x, y, z)
}
