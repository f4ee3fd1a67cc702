//! Sphere–sphere and sphere–line intersection, tangents from a point, and the
//! volume of the lens shared by two balls.
//!
//! A sphere is passed as its center and radius. An intersection circle is a
//! [`Circle3`]: its center plus an axis vector that is normal to the circle's
//! plane and as long as the circle's radius.
use cgmath::Rad;
use log::trace;
use num_traits::Float;
use smallvec::SmallVec;

use crate::space::point::{Point3, Vector3};
use crate::space::segment::Line3;
use crate::util::container::{Container, Orientation};
use crate::util::intersect::Intersect;
use crate::util::predicate::{clamp_to_unit_cosine, non_negative, sqr};
use crate::util::scalar::{Real, Scalar};

/// Up to two intersection points, kept inline.
pub type Points<T> = SmallVec<[Point3<T>; 2]>;

/// A circle in space. `axis` is normal to the circle's plane and its length
/// is the radius.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug)]
pub struct Circle3<T> {
    pub center: Point3<T>,
    pub axis: Vector3<T>,
}

impl<T: Scalar> PartialEq for Circle3<T> {
    fn eq(&self, other: &Self) -> bool {
        self.center == other.center && self.axis == other.axis
    }
}

impl<T: Real> Circle3<T> {
    pub fn radius(&self) -> T {
        self.axis.length()
    }

    /// Unit normal of the circle's plane. A circle of radius zero has no
    /// defined plane and reports the x axis.
    pub fn plane_normal(&self) -> Vector3<T> {
        self.axis.unit()
    }

    /// The point at `angle` along the circle, measured from an arbitrary but
    /// fixed direction in the circle's plane.
    pub fn point<A: Into<Rad<T>>>(&self, angle: A) -> Point3<T> {
        let Rad(a) = angle.into();
        let (s, c) = a.sin_cos();
        let r = self.radius();
        let e1 = self.axis.normal().unit();
        let e2 = self.axis.unit().cross(e1);
        self.center + e1 * (r * c) + e2 * (r * s)
    }
}

/// The angle opposite side `a` in a triangle with sides `a`, `b`, `c`.
pub fn interior_angle<T: Real>(a: T, b: T, c: T) -> T {
    let two = T::one() + T::one();
    clamp_to_unit_cosine((b * b + c * c - a * a) / b / c / two).acos()
}

/// The circle where the spheres `(o1, r1)` and `(o2, r2)` meet.
///
/// Spheres with the same center yield `None`, even when they coincide.
pub fn sphere_sphere_intersection<T: Real>(o1: Point3<T>, r1: T, o2: Point3<T>, r2: T) -> Option<Circle3<T>> {
    let d = o1.distance(o2);
    if d.sign() == 0 {
        trace!("spheres share the center {:?}", o1);
        return None;
    }
    let two = T::one() + T::one();
    let v = o2 - o1;
    let a = ((r1 * r1 - r2 * r2) / d + d) / two;
    if (Float::abs(a) - r1).sign() <= 0 {
        let h = non_negative(r1 * r1 - a * a).sqrt();
        Some(Circle3 {
            center: o1 + v.with_length(a),
            axis: v.with_length(h),
        })
    } else {
        None
    }
}

/// The circle of points where tangents from `p` touch the sphere `(o, r)`.
///
/// The tangent points are where the sphere meets the sphere with diameter
/// `o`-`p`. `None` when `p` is inside the sphere.
pub fn tangents<T: Real>(o: Point3<T>, r: T, p: Point3<T>) -> Option<Circle3<T>> {
    let two = T::one() + T::one();
    let d = p.distance(o);
    sphere_sphere_intersection(o, r, (o + p) / two, d / two)
}

/// Where the line through `p` and `q` meets the sphere `(o, r)`.
///
/// A secant gives two points ordered along `q - p`. A tangent gives the touch
/// point once, or twice when `multiple` is set. If `p == q` the "line" through
/// them runs along `(p - o).normal()`.
pub fn sphere_line_intersection<T: Real>(
    o: Point3<T>,
    r: T,
    p: Point3<T>,
    q: Point3<T>,
    multiple: bool,
) -> Points<T> {
    let mut points = Points::new();
    let u = o.project(p, q);
    let d = o.distance(u);
    match (d - r).sign() {
        0 => {
            points.push(u);
            if multiple {
                points.push(u);
            }
        }
        s if s < 0 => {
            let l = non_negative(r * r - d * d).sqrt();
            let v = if p == q {
                trace!("line through {:?} has no direction, using a normal of {:?}", p, u - o);
                (u - o).normal().with_length(l)
            } else {
                (q - p).with_length(l)
            };
            points.push(u - v);
            points.push(u + v);
        }
        _ => {}
    }
    points
}

fn ball_volume<T: Real>(r: T) -> T {
    let three = T::one() + T::one() + T::one();
    let four = three + T::one();
    four * T::PI() * r * r * r / three
}

/// Volume of the cap of a ball of radius `r` whose rim is seen from the
/// center at half-angle `theta`: the cone sector minus its inner cone.
fn cap_volume<T: Real>(r: T, theta: T) -> T {
    let two = T::one() + T::one();
    let three = two + T::one();
    let (s, c) = theta.sin_cos();
    r * r * r * T::PI() * (two * (T::one() - c) - c * sqr(s)) / three
}

/// Volume shared by the balls `(o1, r1)` and `(o2, r2)`.
///
/// Disjoint or touching balls give `0`, and a ball inside the other gives the
/// smaller ball's volume. Otherwise the lens is summed from two caps, each
/// with volume `π·r³·(2(1−cos θ) − cos θ·sin²θ)/3` for its half-angle `θ`.
///
/// This is not the cap formula `r³·(π(1−cos θ)/2 − cos θ·sin²θ)/3` found in
/// older references, which underestimates every lens (it gives `π/6·r³` for a
/// hemisphere). For two unit balls one apart this function returns
/// `5π/12 ≈ 1.3090`, where that formula gives `≈ 0.2736`.
///
/// ```
/// use geom3::space::p3;
/// use geom3::space::sphere::sphere_sphere_intersection_volume;
///
/// let v = sphere_sphere_intersection_volume(p3(0.0f64, 0.0, 0.0), 1.0, p3(1.0, 0.0, 0.0), 1.0);
/// assert!((v - 5.0 * std::f64::consts::PI / 12.0).abs() < 1e-12);
/// ```
pub fn sphere_sphere_intersection_volume<T: Real>(o1: Point3<T>, r1: T, o2: Point3<T>, r2: T) -> T {
    let d = o1.distance(o2);
    if (r1 + r2 - d).sign() <= 0 {
        T::zero()
    } else if (Float::abs(r2 - r1) - d).sign() >= 0 {
        ball_volume(r1.min(r2))
    } else {
        cap_volume(r1, interior_angle(r2, r1, d)) + cap_volume(r2, interior_angle(r1, r2, d))
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug)]
pub struct Sphere3<T> {
    pub center: Point3<T>,
    pub radius: T,
}

impl<T: Scalar> PartialEq for Sphere3<T> {
    fn eq(&self, other: &Self) -> bool {
        self.center == other.center && (self.radius - other.radius).sign() == 0
    }
}

impl<T: Real> Sphere3<T> {
    pub fn new(center: Point3<T>, radius: T) -> Self {
        Sphere3 { center, radius }
    }

    pub fn volume(&self) -> T {
        ball_volume(self.radius)
    }

    pub fn overlap_volume(&self, other: &Sphere3<T>) -> T {
        sphere_sphere_intersection_volume(self.center, self.radius, other.center, other.radius)
    }

    pub fn tangents(&self, p: Point3<T>) -> Option<Circle3<T>> {
        tangents(self.center, self.radius, p)
    }
}

impl<T: Real> Container<Point3<T>> for Sphere3<T> {
    fn contains(&self, p: &Point3<T>) -> Orientation {
        Orientation::from_sign((p.distance(self.center) - self.radius).sign())
    }
}

impl<T: Real> Intersect<Sphere3<T>> for Sphere3<T> {
    type Output = Option<Circle3<T>>;

    fn intersect(&self, knife: Sphere3<T>) -> Option<Circle3<T>> {
        sphere_sphere_intersection(self.center, self.radius, knife.center, knife.radius)
    }
}

impl<T: Real> Intersect<Line3<T>> for Sphere3<T> {
    type Output = Points<T>;

    fn intersect(&self, knife: Line3<T>) -> Points<T> {
        sphere_line_intersection(self.center, self.radius, knife.a, knife.b, false)
    }
}
