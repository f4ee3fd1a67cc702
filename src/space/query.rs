//! Point-to-primitive queries: projections, rotations, distances and
//! membership tests against lines, halflines, segments, planes and triangles.
//!
//! Primitives are not materialized here. A line, halfline or segment is the
//! pair of points `p`, `q` (halflines start at `p`); a plane is a point `o`
//! on it plus a normal `n`. Coincident `p`, `q` and zero normals are valid
//! input and have a fixed answer in every query:
//!
//! | query                   | degenerate input | result                 |
//! |-------------------------|------------------|------------------------|
//! | `project`, `mirror`     | `p == q`         | `p`, reflection in `p` |
//! | `drop_to_plane`         | `n == 0`         | `o`                    |
//! | `rotate_about`          | `p == q`         | the point unchanged    |
//! | `distance_to_*` (lines) | `p == q`         | distance to `p`        |
//! | `distance_to_plane`     | `n == 0`         | distance to `o`        |
//! | `on_line`               | `p == q`         | point equals `p`       |
use cgmath::Rad;

use crate::space::point::{Point3, Vector3};
use crate::util::scalar::{Real, Scalar};

impl<T: Real> Point3<T> {
    /// Coordinates of `self` in the basis `x`, `y`, `z` anchored at `o`.
    ///
    /// The basis need not be orthogonal, only linearly independent. Use
    /// `Point3::origin()` for `o` to transform a plain vector.
    pub fn transform(self, x: Vector3<T>, y: Vector3<T>, z: Vector3<T>, o: Point3<T>) -> Self {
        let yz = y.cross(z);
        let zx = z.cross(x);
        let xy = x.cross(y);
        let p = self - o;
        Point3::new(
            p.dot(yz) / x.dot(yz),
            p.dot(zx) / y.dot(zx),
            p.dot(xy) / z.dot(xy),
        )
    }

    /// Orthogonal projection onto the line through `p` and `q`.
    pub fn project(self, p: Point3<T>, q: Point3<T>) -> Self {
        if p == q {
            p
        } else {
            p + (q - p) * p.dot_at(q, self) / p.distance2(q)
        }
    }

    /// Reflection through the line through `p` and `q`.
    pub fn mirror(self, p: Point3<T>, q: Point3<T>) -> Self {
        let two = T::one() + T::one();
        self.project(p, q) * two - self
    }

    /// Orthogonal projection onto the plane through `o` with normal `n`.
    pub fn drop_to_plane(self, o: Point3<T>, n: Vector3<T>) -> Self {
        if n.is_zero() {
            o
        } else {
            self - n * (self - o).dot(n) / n.length2()
        }
    }

    /// Rotates about the z axis through the origin; `z` is left untouched.
    pub fn rotate_z<A: Into<Rad<T>>>(self, angle: A) -> Self {
        let Rad(a) = angle.into();
        let (s, c) = a.sin_cos();
        Point3::new(self.x * c - self.y * s, self.x * s + self.y * c, self.z)
    }

    /// Rotates about the axis from `p` to `q`, counter-clockwise when looking
    /// down the axis from `q` towards `p`.
    pub fn rotate_about<A: Into<Rad<T>>>(self, p: Point3<T>, q: Point3<T>, angle: A) -> Self {
        if p == q {
            self
        } else {
            let Rad(a) = angle.into();
            let (s, c) = a.sin_cos();
            let t = self.project(p, q);
            let x = self - t;
            let y = (q - p).unit().cross(x);
            t + x * c + y * s
        }
    }
}

impl<T: Scalar> Point3<T> {
    pub fn distance_to_line(self, p: Point3<T>, q: Point3<T>) -> T::Real {
        if p == q {
            self.distance(p)
        } else {
            self.cross_at(p, q).length() / p.distance(q)
        }
    }

    /// Distance to the halfline starting at `p` through `q`.
    pub fn distance_to_halfline(self, p: Point3<T>, q: Point3<T>) -> T::Real {
        if p == q || p.dot_at(q, self) < T::zero() {
            self.distance(p)
        } else {
            self.distance_to_line(p, q)
        }
    }

    pub fn distance_to_segment(self, p: Point3<T>, q: Point3<T>) -> T::Real {
        if p == q || p.dot_at(q, self) < T::zero() {
            self.distance(p)
        } else if q.dot_at(p, self) < T::zero() {
            self.distance(q)
        } else {
            self.distance_to_line(p, q)
        }
    }

    /// Signed distance to the plane through `o` with normal `n`; positive on
    /// the side `n` points to.
    pub fn distance_to_plane(self, o: Point3<T>, n: Vector3<T>) -> T::Real {
        if n.is_zero() {
            self.distance(o)
        } else {
            (self - o).dot(n).to_real() / n.length()
        }
    }

    pub fn on_line(self, p: Point3<T>, q: Point3<T>) -> bool {
        if p == q {
            self == p
        } else {
            self.cross_at(p, q).length().sign() == 0
        }
    }

    /// Membership in the halfline starting at `p` through `q`. Whether `p`
    /// itself counts is decided by `inclusive`.
    pub fn on_halfline(self, p: Point3<T>, q: Point3<T>, inclusive: bool) -> bool {
        if self == p {
            inclusive
        } else {
            self.on_line(p, q) && p.dot_at(q, self).sign() >= 0
        }
    }

    /// Membership in the segment `p`, `q`. Whether the endpoints count is
    /// decided by `inclusive`.
    pub fn on_segment(self, p: Point3<T>, q: Point3<T>, inclusive: bool) -> bool {
        if self == p || self == q {
            inclusive
        } else {
            self.on_line(p, q) && self.dot_at(p, q).sign() <= 0
        }
    }

    /// Membership in the triangle `u`, `v`, `w`, with the boundary counting
    /// only when `inclusive` is set.
    ///
    /// A collinear triangle is treated as the union of its three edges, so
    /// only boundary points can belong to it.
    pub fn in_triangle(self, u: Point3<T>, v: Point3<T>, w: Point3<T>, inclusive: bool) -> bool {
        let pn = u.cross_at(v, w);
        if pn.length().sign() == 0 {
            return inclusive
                && (self.on_segment(v, w, true)
                    || self.on_segment(w, u, true)
                    || self.on_segment(u, v, true));
        }
        let pn = pn.unit();
        if (self - u).dot(pn).sign() != 0 {
            return false;
        }
        let corners = [u, v, w];
        for i in 0..3 {
            let a = corners[i];
            let b = corners[(i + 1) % 3];
            if self.on_segment(a, b, true) {
                return inclusive;
            } else if self.cross_at(a, b).dot(pn).sign() < 0 {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::space::{p3, v3};
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use cgmath::Deg;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_transform() {
        let x = v3(1.0, 0.0, 0.0);
        let y = v3(1.0, 1.0, 0.0);
        let z = v3(0.0, 0.0, 2.0);
        let o = p3(1.0, 1.0, 1.0);
        let p = o + x * 2.0 + y * 3.0 + z;
        assert_relative_eq!(p.transform(x, y, z, o), p3(2.0, 3.0, 1.0));
        assert_relative_eq!(
            p3(1.0, 2.0, 3.0).transform(x, y, z, Point3::origin()),
            p3(-1.0, 2.0, 1.5)
        );
    }

    #[test]
    fn test_project_and_mirror() {
        let p = p3(0.0, 0.0, 0.0);
        let q = p3(2.0, 0.0, 0.0);
        assert_eq!(p3(1.0, 3.0, 4.0).project(p, q), p3(1.0, 0.0, 0.0));
        assert_eq!(p3(-5.0, 3.0, 4.0).project(p, q), p3(-5.0, 0.0, 0.0));
        assert_eq!(p3(1.0, 3.0, 4.0).mirror(p, q), p3(1.0, -3.0, -4.0));

        assert_eq!(p3(1.0, 3.0, 4.0).project(p, p), p);
        assert_eq!(p3(1.0, 3.0, 4.0).mirror(p, p), p3(-1.0, -3.0, -4.0));
    }

    #[test]
    fn test_drop_to_plane() {
        let o = p3(0.0, 0.0, 1.0);
        let n = v3(0.0, 0.0, 3.0);
        assert_eq!(p3(2.0, 5.0, -4.0).drop_to_plane(o, n), p3(2.0, 5.0, 1.0));
        assert_eq!(p3(2.0, 5.0, 1.0).drop_to_plane(o, n), p3(2.0, 5.0, 1.0));
        assert_eq!(p3(2.0, 5.0, -4.0).drop_to_plane(o, v3(0.0, 0.0, 0.0)), o);
    }

    #[test]
    fn test_rotate_z() {
        assert_abs_diff_eq!(
            p3(1.0, 0.0, 7.0).rotate_z(Rad(FRAC_PI_2)),
            p3(0.0, 1.0, 7.0),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            p3(1.0, 1.0, 0.0).rotate_z(Deg(180.0)),
            p3(-1.0, -1.0, 0.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_rotate_about() {
        let p = p3(0.0, 0.0, 0.0);
        let q = p3(0.0, 0.0, 1.0);
        assert_abs_diff_eq!(
            p3(1.0, 0.0, 0.0).rotate_about(p, q, Deg(90.0)),
            p3(0.0, 1.0, 0.0),
            epsilon = 1e-12
        );

        let p = p3(1.0, 1.0, 0.0);
        let q = p3(1.0, 1.0, 5.0);
        assert_abs_diff_eq!(
            p3(2.0, 1.0, 3.0).rotate_about(p, q, Deg(180.0)),
            p3(0.0, 1.0, 3.0),
            epsilon = 1e-12
        );

        let a = p3(2.0, 1.0, 3.0);
        assert_eq!(a.rotate_about(p, p, Deg(33.0)), a);
        assert_eq!(p3(1.0, 1.0, 2.0).rotate_about(p, q, Deg(45.0)), p3(1.0, 1.0, 2.0));
    }

    #[test]
    fn test_distances() {
        let p = p3(0.0, 0.0, 0.0);
        let q = p3(1.0, 0.0, 0.0);

        assert_relative_eq!(p3(3.0, 4.0, 0.0).distance_to_line(p, q), 4.0);
        assert_relative_eq!(p3(-3.0, 4.0, 0.0).distance_to_line(p, q), 4.0);
        assert_relative_eq!(p3(3.0, 4.0, 0.0).distance_to_line(p, p), 5.0);

        assert_relative_eq!(p3(3.0, 4.0, 0.0).distance_to_halfline(p, q), 4.0);
        assert_relative_eq!(p3(-3.0, 4.0, 0.0).distance_to_halfline(p, q), 5.0);

        assert_relative_eq!(p3(0.5, 4.0, 0.0).distance_to_segment(p, q), 4.0);
        assert_relative_eq!(p3(-3.0, 4.0, 0.0).distance_to_segment(p, q), 5.0);
        assert_relative_eq!(p3(4.0, 4.0, 0.0).distance_to_segment(p, q), 5.0);
        assert_relative_eq!(p3(4.0, 4.0, 0.0).distance_to_segment(q, q), 5.0);

        let o = p3(0.0, 0.0, 1.0);
        assert_relative_eq!(p3(1.0, 2.0, 3.0).distance_to_plane(o, v3(0.0, 0.0, 2.0)), 2.0);
        assert_relative_eq!(p3(1.0, 2.0, -1.0).distance_to_plane(o, v3(0.0, 0.0, 2.0)), -2.0);
        assert_relative_eq!(p3(0.0, 3.0, 5.0).distance_to_plane(o, v3(0.0, 0.0, 0.0)), 5.0);
    }

    #[test]
    fn test_integral_distances() {
        let p = p3(0i64, 0, 0);
        let q = p3(2i64, 0, 0);
        assert_eq!(p3(3, 4, 0).distance_to_line(p, q), 4.0);
        assert_eq!(p3(-3, 4, 0).distance_to_halfline(p, q), 5.0);
        assert_eq!(p3(5, 4, 0).distance_to_segment(p, q), 5.0);
        assert_eq!(p3(1, 1, 7).distance_to_plane(p, v3(0, 0, 3)), 7.0);
    }

    #[test]
    fn test_on_line() {
        let p = p3(0.0, 0.0, 0.0);
        let q = p3(1.0, 1.0, 1.0);
        assert!(p3(-2.0, -2.0, -2.0).on_line(p, q));
        assert!(!p3(-2.0, -2.0, -2.1).on_line(p, q));
        assert!(p.on_line(p, p));
        assert!(!q.on_line(p, p));

        assert!(p3(3, 3, 3).on_line(p3(0, 0, 0), p3(1, 1, 1)));
        assert!(!p3(3, 3, 2).on_line(p3(0, 0, 0), p3(1, 1, 1)));
    }

    #[test]
    fn test_on_halfline() {
        let p = p3(0.0, 0.0, 0.0);
        let q = p3(1.0, 0.0, 0.0);
        assert!(p3(5.0, 0.0, 0.0).on_halfline(p, q, false));
        assert!(!p3(-5.0, 0.0, 0.0).on_halfline(p, q, true));
        assert!(p.on_halfline(p, q, true));
        assert!(!p.on_halfline(p, q, false));
        assert!(!p3(5.0, 0.1, 0.0).on_halfline(p, q, true));
    }

    #[test]
    fn test_on_segment() {
        let p = p3(0.0, 0.0, 0.0);
        let q = p3(1.0, 0.0, 0.0);
        assert!(p3(0.5, 0.0, 0.0).on_segment(p, q, false));
        assert!(!p3(2.0, 0.0, 0.0).on_segment(p, q, true));
        assert!(!p3(-1.0, 0.0, 0.0).on_segment(p, q, true));
        assert!(!p3(0.5, 0.1, 0.0).on_segment(p, q, true));
        assert!(q.on_segment(p, q, true));
        assert!(!q.on_segment(p, q, false));

        assert!(p3(1, 1, 1).on_segment(p3(0, 0, 0), p3(2, 2, 2), false));
        assert!(!p3(3, 3, 3).on_segment(p3(0, 0, 0), p3(2, 2, 2), true));
    }

    #[test]
    fn test_in_triangle() {
        let u = p3(0.0, 0.0, 0.0);
        let v = p3(4.0, 0.0, 0.0);
        let w = p3(0.0, 4.0, 0.0);

        assert!(p3(1.0, 1.0, 0.0).in_triangle(u, v, w, false));
        assert!(p3(1.0, 1.0, 0.0).in_triangle(w, v, u, false));
        assert!(!p3(3.0, 3.0, 0.0).in_triangle(u, v, w, true));
        assert!(!p3(1.0, 1.0, 1.0).in_triangle(u, v, w, true));

        assert!(p3(2.0, 0.0, 0.0).in_triangle(u, v, w, true));
        assert!(!p3(2.0, 0.0, 0.0).in_triangle(u, v, w, false));
        assert!(p3(2.0, 2.0, 0.0).in_triangle(u, v, w, true));
        assert!(u.in_triangle(u, v, w, true));
        assert!(!u.in_triangle(u, v, w, false));
    }

    #[test]
    fn test_in_degenerate_triangle() {
        let u = p3(0.0, 0.0, 0.0);
        let v = p3(1.0, 0.0, 0.0);
        let w = p3(2.0, 0.0, 0.0);
        assert!(p3(0.5, 0.0, 0.0).in_triangle(u, v, w, true));
        assert!(!p3(0.5, 0.0, 0.0).in_triangle(u, v, w, false));
        assert!(!p3(0.5, 1.0, 0.0).in_triangle(u, v, w, true));
    }

    #[test]
    fn test_in_integral_triangle() {
        let u = p3(0i64, 0, 3);
        let v = p3(4i64, 0, 3);
        let w = p3(0i64, 4, 3);
        assert!(p3(1, 1, 3).in_triangle(u, v, w, false));
        assert!(!p3(1, 1, 2).in_triangle(u, v, w, true));
        assert!(p3(2, 2, 3).in_triangle(u, v, w, true));
        assert!(!p3(2, 2, 3).in_triangle(u, v, w, false));
        assert!(!p3(3, 3, 3).in_triangle(u, v, w, true));
    }
}
