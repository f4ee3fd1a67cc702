use crate::space::point::{Point3, Vector3};
use crate::util::scalar::Scalar;

/// An entity defined by two points: a line through them, a halfline starting
/// at the first one, or the segment between them.
///
/// The two points may coincide. Every query on such an entity handles that
/// case explicitly instead of rejecting it.
pub trait Segment {
    type Scalar: Scalar;

    fn from_endpoints(start: Point3<Self::Scalar>, end: Point3<Self::Scalar>) -> Self;
    fn start(&self) -> Point3<Self::Scalar>;
    fn end(&self) -> Point3<Self::Scalar>;

    fn vector(&self) -> Vector3<Self::Scalar> {
        self.end() - self.start()
    }

    /// True when both defining points are equal, so no direction is implied.
    fn is_degenerate(&self) -> bool {
        self.start() == self.end()
    }
}
