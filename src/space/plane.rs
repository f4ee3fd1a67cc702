//! Line–plane and three-plane intersection through triple products.
//!
//! Planes are passed as a point on the plane plus a normal. The unchecked
//! routines divide without looking at the denominator: a line parallel to the
//! plane, or three planes without a single common point, give infinite or NaN
//! coordinates. The `try_` variants reject those inputs instead.
use log::debug;

use crate::error::{GeometryError, Result};
use crate::space::point::{Point3, Vector3};
use crate::space::segment::{Line3, LineSegment3};
use crate::util::container::{Container, Orientation};
use crate::util::intersect::Intersect;
use crate::util::scalar::{Real, Scalar};
use crate::util::segment::Segment;

/// The scalar triple product `a · (b × c)`.
#[inline]
pub fn triple<T: Scalar>(a: Vector3<T>, b: Vector3<T>, c: Vector3<T>) -> T {
    a.dot(b.cross(c))
}

/// Point where the line through `p` and `q` meets the plane `(o, n)`.
///
/// `p` and `q` are interpolated by their signed distances to the plane, which
/// are computed exactly in `T` before switching to the real type.
pub fn line_plane_intersection<T: Scalar>(
    p: Point3<T>,
    q: Point3<T>,
    o: Point3<T>,
    n: Vector3<T>,
) -> Point3<T::Real> {
    let sp = (p - o).dot(n).to_real();
    let sq = (q - o).dot(n).to_real();
    (p.to_real() * -sq + q.to_real() * sp) / (sp - sq)
}

/// Like [`line_plane_intersection`], but fails when the line does not cross
/// the plane in a single point.
pub fn try_line_plane_intersection<T: Scalar>(
    p: Point3<T>,
    q: Point3<T>,
    o: Point3<T>,
    n: Vector3<T>,
) -> Result<Point3<T::Real>> {
    let sp = (p - o).dot(n);
    let sq = (q - o).dot(n);
    if (sp - sq).sign() == 0 {
        debug!("line {:?} -> {:?} does not cross plane {:?}, {:?}", p, q, o, n);
        Err(GeometryError::ParallelLine)
    } else {
        Ok(line_plane_intersection(p, q, o, n))
    }
}

/// The common point of three planes, by Cramer's rule on the normals and the
/// plane offsets `a_i · n_i`.
pub fn plane_intersection<T: Scalar>(
    a1: Point3<T>,
    n1: Vector3<T>,
    a2: Point3<T>,
    n2: Vector3<T>,
    a3: Point3<T>,
    n3: Vector3<T>,
) -> Point3<T::Real> {
    let x = Point3::new(n1.x, n2.x, n3.x);
    let y = Point3::new(n1.y, n2.y, n3.y);
    let z = Point3::new(n1.z, n2.z, n3.z);
    let d = Point3::new(a1.dot(n1), a2.dot(n2), a3.dot(n3));
    let numerator = Point3::new(triple(d, y, z), triple(x, d, z), triple(x, y, d));
    numerator.to_real() / triple(n1, n2, n3).to_real()
}

/// Like [`plane_intersection`], but fails when the normals are linearly
/// dependent.
pub fn try_plane_intersection<T: Scalar>(
    a1: Point3<T>,
    n1: Vector3<T>,
    a2: Point3<T>,
    n2: Vector3<T>,
    a3: Point3<T>,
    n3: Vector3<T>,
) -> Result<Point3<T::Real>> {
    if triple(n1, n2, n3).sign() == 0 {
        debug!("normals {:?}, {:?}, {:?} are dependent", n1, n2, n3);
        Err(GeometryError::DependentNormals)
    } else {
        Ok(plane_intersection(a1, n1, a2, n2, a3, n3))
    }
}

/// The plane through `origin` with `normal`, seen as the halfspace behind it:
/// points on the side the normal points away from are inside.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug)]
pub struct Halfspace3<T> {
    pub origin: Point3<T>,
    pub normal: Vector3<T>,
}

impl<T: Scalar> PartialEq for Halfspace3<T> {
    fn eq(&self, other: &Self) -> bool {
        self.origin == other.origin && self.normal == other.normal
    }
}

impl<T: Scalar> Halfspace3<T> {
    pub fn new(origin: Point3<T>, normal: Vector3<T>) -> Self {
        Halfspace3 { origin, normal }
    }

    /// The plane through `a`, `b`, `c`, oriented counter-clockwise. `None`
    /// if the points are collinear.
    pub fn from_points(a: Point3<T>, b: Point3<T>, c: Point3<T>) -> Option<Self> {
        let normal = a.cross_at(b, c);
        if normal.is_zero() {
            None
        } else {
            Some(Halfspace3 { origin: a, normal })
        }
    }

    /// Builds the plane from the first two points and the first later point
    /// that is not collinear with them.
    pub fn find_from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point3<T>>,
    {
        let mut it = points.into_iter();
        let a = it.next();
        let b = it.next();
        match (a, b) {
            (Some(a), Some(b)) => it.find_map(|c| Self::from_points(a, b, c)),
            _ => None,
        }
    }

    /// Signed distance of `p`; positive on the outside.
    pub fn distance(&self, p: Point3<T>) -> T::Real {
        p.distance_to_plane(self.origin, self.normal)
    }
}

impl<T: Real> Halfspace3<T> {
    pub fn project(&self, p: Point3<T>) -> Point3<T> {
        p.drop_to_plane(self.origin, self.normal)
    }
}

impl<T: Scalar> Container<Point3<T>> for Halfspace3<T> {
    fn contains(&self, p: &Point3<T>) -> Orientation {
        Orientation::from_sign((*p - self.origin).dot(self.normal).sign())
    }
}

impl<T: Scalar> Intersect<Halfspace3<T>> for LineSegment3<T> {
    type Output = Option<Point3<T::Real>>;

    /// The point where the segment reaches the plane. `None` if both endpoints
    /// are strictly on the same side, or both lie in the plane.
    fn intersect(&self, knife: Halfspace3<T>) -> Option<Point3<T::Real>> {
        let oa = knife.contains(&self.start());
        let ob = knife.contains(&self.end());
        if oa == ob {
            None
        } else {
            Some(line_plane_intersection(self.start(), self.end(), knife.origin, knife.normal))
        }
    }
}

impl<T: Scalar> Intersect<Halfspace3<T>> for Line3<T> {
    type Output = Option<Point3<T::Real>>;

    fn intersect(&self, knife: Halfspace3<T>) -> Option<Point3<T::Real>> {
        try_line_plane_intersection(self.start(), self.end(), knife.origin, knife.normal).ok()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::space::{p3, v3};
    use approx::assert_relative_eq;

    #[test]
    fn test_triple() {
        assert_eq!(triple(v3(1, 0, 0), v3(0, 1, 0), v3(0, 0, 1)), 1);
        assert_eq!(triple(v3(0, 1, 0), v3(1, 0, 0), v3(0, 0, 1)), -1);
        assert_eq!(triple(v3(1.0, 2.0, 3.0), v3(2.0, 4.0, 6.0), v3(0.0, 1.0, 5.0)), 0.0);
    }

    #[test]
    fn test_line_plane_intersection() {
        let hit = line_plane_intersection(
            p3(1.0, 2.0, -1.0),
            p3(3.0, 2.0, 3.0),
            p3(0.0, 0.0, 0.0),
            v3(0.0, 0.0, 1.0),
        );
        assert_relative_eq!(hit, p3(1.5, 2.0, 0.0));

        let hit = line_plane_intersection(p3(0, 0, 0), p3(1, 1, 1), p3(0, 0, 3), v3(0, 0, 2));
        assert_relative_eq!(hit, p3(3.0, 3.0, 3.0));

        // the line does not have to reach the plane between p and q
        let hit = line_plane_intersection(
            p3(0.0, 0.0, 1.0),
            p3(1.0, 0.0, 2.0),
            p3(0.0, 0.0, 0.0),
            v3(0.0, 0.0, 1.0),
        );
        assert_relative_eq!(hit, p3(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_parallel_line_plane() {
        let p = p3(0.0, 0.0, 1.0);
        let q = p3(1.0, 0.0, 1.0);
        let o = p3(0.0, 0.0, 0.0);
        let n = v3(0.0, 0.0, 1.0);

        let hit: Point3<f64> = line_plane_intersection(p, q, o, n);
        assert!(!hit.x.is_finite());
        assert_eq!(try_line_plane_intersection(p, q, o, n), Err(GeometryError::ParallelLine));
    }

    #[test]
    fn test_plane_intersection() {
        let hit = plane_intersection(
            p3(1.0, 0.0, 0.0),
            v3(1.0, 0.0, 0.0),
            p3(0.0, 2.0, 0.0),
            v3(0.0, 1.0, 0.0),
            p3(0.0, 0.0, 3.0),
            v3(0.0, 0.0, 1.0),
        );
        assert_eq!(hit, p3(1.0, 2.0, 3.0));

        // x + y = 2, y - z = 0, z = 1
        let hit = plane_intersection(
            p3(2, 0, 0),
            v3(1, 1, 0),
            p3(0, 0, 0),
            v3(0, 1, -1),
            p3(5, 5, 1),
            v3(0, 0, 1),
        );
        assert_relative_eq!(hit, p3(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_dependent_planes() {
        let result = try_plane_intersection(
            p3(0.0, 0.0, 0.0),
            v3(0.0, 0.0, 1.0),
            p3(0.0, 0.0, 1.0),
            v3(0.0, 0.0, 2.0),
            p3(0.0, 0.0, 0.0),
            v3(1.0, 0.0, 0.0),
        );
        assert_eq!(result, Err(GeometryError::DependentNormals));

        let hit: Point3<f64> = plane_intersection(
            p3(0.0, 0.0, 0.0),
            v3(0.0, 0.0, 1.0),
            p3(0.0, 0.0, 1.0),
            v3(0.0, 0.0, 2.0),
            p3(0.0, 0.0, 0.0),
            v3(1.0, 0.0, 0.0),
        );
        assert!(!hit.z.is_finite());
    }

    #[test]
    fn test_halfspace_contains() {
        let hs = Halfspace3::new(p3(0.0, 0.0, 5.0), v3(0.0, 0.0, 1.0));

        assert_eq!(hs.contains(&p3(1.0, 1.0, 0.0)), Orientation::In);
        assert_eq!(hs.contains(&p3(2.0, 0.0, 5.0)), Orientation::On);
        assert_eq!(hs.contains(&p3(2.0, -1.0, 8.0)), Orientation::Out);
        assert_relative_eq!(hs.distance(p3(2.0, -1.0, 8.0)), 3.0);
        assert_eq!(hs.project(p3(2.0, -1.0, 8.0)), p3(2.0, -1.0, 5.0));
    }

    #[test]
    fn test_halfspace_from_points() {
        let hs = Halfspace3::from_points(p3(0, 0, 0), p3(1, 0, 0), p3(0, 1, 0));
        assert_eq!(hs, Some(Halfspace3::new(p3(0, 0, 0), v3(0, 0, 1))));
        assert_eq!(Halfspace3::from_points(p3(0, 0, 0), p3(1, 0, 0), p3(2, 0, 0)), None);

        let hs = Halfspace3::find_from_points(vec![
            p3(0, 0, 0),
            p3(1, 0, 0),
            p3(2, 0, 0),
            p3(0, -1, 0),
        ]);
        assert_eq!(hs, Some(Halfspace3::new(p3(0, 0, 0), v3(0, 0, -1))));
        assert_eq!(Halfspace3::<i64>::find_from_points(vec![p3(0, 0, 0)]), None);
    }

    #[test]
    fn test_segment_cuts_halfspace() {
        let hs = Halfspace3::new(p3(0.0, 0.0, 0.0), v3(0.0, 0.0, 1.0));

        let s = LineSegment3::new(p3(-0.5, -0.5, -1.0), p3(0.5, 0.5, 1.0));
        assert_eq!(s.intersect(hs), Some(p3(0.0, 0.0, 0.0)));

        let s = LineSegment3::new(p3(0.5, 1.0, 2.0), p3(0.5, 2.0, 3.0));
        assert_eq!(s.intersect(hs), None);

        let s = LineSegment3::new(p3(0.5, 0.0, 0.0), p3(0.5, 2.0, 1.0));
        assert_eq!(s.intersect(hs), Some(p3(0.5, 0.0, 0.0)));

        let s = LineSegment3::new(p3(-2.0, 0.0, 0.0), p3(-1.0, 0.0, 0.0));
        assert_eq!(s.intersect(hs), None);
    }

    #[test]
    fn test_line_cuts_halfspace() {
        let hs = Halfspace3::new(p3(0.0, 0.0, 0.0), v3(0.0, 0.0, 1.0));
        let l = Line3::new(p3(0.5, 1.0, 2.0), p3(0.5, 2.0, 3.0));
        assert_eq!(l.intersect(hs), Some(p3(0.5, -1.0, 0.0)));

        let l = Line3::new(p3(0.5, 1.0, 2.0), p3(0.5, 2.0, 2.0));
        assert_eq!(l.intersect(hs), None);
    }
}
