//! Intersection tests and distances between lines and segments.
//!
//! Lines and segments are passed as endpoint pairs. [`Line3`], [`Halfline3`]
//! and [`LineSegment3`] wrap such a pair when a named value reads better; they
//! hold nothing else and forward to the free functions and point queries.
use num_traits::Float;

use crate::space::point::Point3;
use crate::util::container::{Container, Orientation};
use crate::util::intersect::Intersect;
use crate::util::scalar::{Real, Scalar};
use crate::util::segment::Segment;

/// Whether the segments `p1`-`p2` and `q1`-`q2` intersect.
///
/// The segments must be coplanar. Each segment's endpoints must then straddle
/// the other's supporting line: if either pair lies strictly on one side there
/// is no intersection, if an endpoint touches the other line the answer is
/// `inclusive`, and otherwise the segments properly cross.
///
/// Collinear segments are not treated specially. Their common direction has a
/// zero cross product, which `unit` turns into the x axis, so the coplanarity
/// test then only looks at the x offset between `p1` and `q1`. Overlapping
/// collinear segments therefore come out as `false` when they are offset along
/// x and as `inclusive` otherwise.
pub fn seg_seg_intersect<T: Real>(
    p1: Point3<T>,
    p2: Point3<T>,
    q1: Point3<T>,
    q2: Point3<T>,
    inclusive: bool,
) -> bool {
    let n = (p2 - p1).cross(q2 - q1).unit();
    if n.dot(q1 - p1).sign() != 0 {
        return false;
    }
    let qv1 = p1.cross_at(p2, q1);
    let qv2 = p1.cross_at(p2, q2);
    let pv1 = q1.cross_at(q2, p1);
    let pv2 = q1.cross_at(q2, p2);
    let sp = pv1.dot(pv2).sign();
    let sq = qv1.dot(qv2).sign();
    if sp > 0 || sq > 0 {
        false
    } else if sp == 0 || sq == 0 {
        inclusive
    } else {
        true
    }
}

/// Distance between the lines through `p1`, `p2` and through `q1`, `q2`.
pub fn line_line_distance<T: Real>(p1: Point3<T>, p2: Point3<T>, q1: Point3<T>, q2: Point3<T>) -> T {
    let c = (p2 - p1).cross(q2 - q1);
    if c.length().sign() == 0 {
        p1.distance_to_line(q1, q2)
    } else {
        Float::abs(c.unit().dot(q1 - p1))
    }
}

/// Distance between the segments `p1`-`p2` and `q1`-`q2`.
pub fn seg_seg_distance<T: Real>(p1: Point3<T>, p2: Point3<T>, q1: Point3<T>, q2: Point3<T>) -> T {
    let c = (p2 - p1).cross(q2 - q1);
    if c.length().sign() != 0 {
        // slide q onto the plane through p parallel to both directions; if the
        // images cross, the closest points are interior to both segments
        let n = c.unit();
        let d = (q1 - p1).dot(n);
        let u1 = q1 - n * d;
        let u2 = q2 - n * d;
        if seg_seg_intersect(p1, p2, u1, u2, true) {
            return Float::abs(d);
        }
    }
    let dp = p1.distance_to_segment(q1, q2).min(p2.distance_to_segment(q1, q2));
    let dq = q1.distance_to_segment(p1, p2).min(q2.distance_to_segment(p1, p2));
    dp.min(dq)
}

macro_rules! two_point_entity {
    ($name:ident) => {
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Clone, Copy, Debug)]
        pub struct $name<T> {
            pub a: Point3<T>,
            pub b: Point3<T>,
        }

        impl<T: Scalar> $name<T> {
            pub fn new(a: Point3<T>, b: Point3<T>) -> Self {
                $name { a, b }
            }
        }

        impl<T: Scalar> PartialEq for $name<T> {
            fn eq(&self, other: &Self) -> bool {
                self.a == other.a && self.b == other.b
            }
        }

        impl<T: Scalar> Segment for $name<T> {
            type Scalar = T;

            fn from_endpoints(a: Point3<T>, b: Point3<T>) -> Self {
                $name { a, b }
            }

            fn start(&self) -> Point3<T> {
                self.a
            }

            fn end(&self) -> Point3<T> {
                self.b
            }
        }
    };
}

two_point_entity!(Line3);
two_point_entity!(Halfline3);
two_point_entity!(LineSegment3);

impl<T: Scalar> Line3<T> {
    pub fn distance_to(&self, p: Point3<T>) -> T::Real {
        p.distance_to_line(self.a, self.b)
    }
}

impl<T: Real> Line3<T> {
    pub fn distance(&self, other: &Line3<T>) -> T {
        line_line_distance(self.a, self.b, other.a, other.b)
    }

    pub fn project(&self, p: Point3<T>) -> Point3<T> {
        p.project(self.a, self.b)
    }
}

impl<T: Scalar> Halfline3<T> {
    pub fn distance_to(&self, p: Point3<T>) -> T::Real {
        p.distance_to_halfline(self.a, self.b)
    }
}

impl<T: Scalar> LineSegment3<T> {
    pub fn distance_to(&self, p: Point3<T>) -> T::Real {
        p.distance_to_segment(self.a, self.b)
    }
}

impl<T: Real> LineSegment3<T> {
    pub fn distance(&self, other: &LineSegment3<T>) -> T {
        seg_seg_distance(self.a, self.b, other.a, other.b)
    }
}

impl<T: Scalar> Container<Point3<T>> for Line3<T> {
    fn contains(&self, p: &Point3<T>) -> Orientation {
        let on = p.on_line(self.a, self.b);
        Orientation::from_membership(on, on)
    }
}

impl<T: Scalar> Container<Point3<T>> for Halfline3<T> {
    fn contains(&self, p: &Point3<T>) -> Orientation {
        Orientation::from_membership(
            p.on_halfline(self.a, self.b, false),
            p.on_halfline(self.a, self.b, true),
        )
    }
}

impl<T: Scalar> Container<Point3<T>> for LineSegment3<T> {
    fn contains(&self, p: &Point3<T>) -> Orientation {
        Orientation::from_membership(
            p.on_segment(self.a, self.b, false),
            p.on_segment(self.a, self.b, true),
        )
    }
}

impl<T: Real> Intersect<LineSegment3<T>> for LineSegment3<T> {
    type Output = bool;

    /// Touching segments count as intersecting.
    fn intersect(&self, knife: LineSegment3<T>) -> bool {
        seg_seg_intersect(self.a, self.b, knife.a, knife.b, true)
    }
}
