use crate::space::point::{Point3, Vector3};
use crate::util::container::{Container, Orientation};
use crate::util::scalar::Scalar;

/// The triangle `a`, `b`, `c`, as a region of its plane.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug)]
pub struct Triangle3<T> {
    pub a: Point3<T>,
    pub b: Point3<T>,
    pub c: Point3<T>,
}

impl<T: Scalar> Triangle3<T> {
    pub fn new(a: Point3<T>, b: Point3<T>, c: Point3<T>) -> Self {
        Triangle3 { a, b, c }
    }

    /// Face normal, counter-clockwise; zero for a collinear triangle.
    pub fn normal(&self) -> Vector3<T> {
        self.a.cross_at(self.b, self.c)
    }

    pub fn is_degenerate(&self) -> bool {
        self.normal().length().sign() == 0
    }
}

impl<T: Scalar> Container<Point3<T>> for Triangle3<T> {
    fn contains(&self, p: &Point3<T>) -> Orientation {
        Orientation::from_membership(
            p.in_triangle(self.a, self.b, self.c, false),
            p.in_triangle(self.a, self.b, self.c, true),
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::space::{p3, v3};

    #[test]
    fn test_triangle_contains() {
        let t = Triangle3::new(p3(0, 0, 0), p3(6, 0, 0), p3(0, 6, 0));
        assert_eq!(t.normal(), v3(0, 0, 36));
        assert_eq!(t.contains(&p3(1, 1, 0)), Orientation::In);
        assert_eq!(t.contains(&p3(3, 3, 0)), Orientation::On);
        assert_eq!(t.contains(&p3(6, 0, 0)), Orientation::On);
        assert_eq!(t.contains(&p3(4, 4, 0)), Orientation::Out);
        assert_eq!(t.contains(&p3(1, 1, 1)), Orientation::Out);
    }

    #[test]
    fn test_degenerate_triangle() {
        let t = Triangle3::new(p3(0.0, 0.0, 0.0), p3(1.0, 1.0, 1.0), p3(3.0, 3.0, 3.0));
        assert!(t.is_degenerate());
        assert_eq!(t.contains(&p3(2.0, 2.0, 2.0)), Orientation::On);
        assert_eq!(t.contains(&p3(2.0, 2.0, 2.5)), Orientation::Out);
    }
}
