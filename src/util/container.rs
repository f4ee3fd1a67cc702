/// Where a point lies relative to a container.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Orientation {
    In,
    On,
    Out,
}

/// A type that implements `Container<P>` divides all possible values of `P` into
/// cases enumerated by `Orientation`:
///
/// - `Orientation::In`: the point is strictly within the container.
/// - `Orientation::On`: the point is on the boundary of the container.
/// - `Orientation::Out`: the point is outside the container.
///
/// For lower-dimensional containers (lines, segments, triangles) "within" means
/// lying on the primitive away from its boundary, e.g. strictly between the
/// endpoints of a segment.
pub trait Container<P> {
    fn contains(&self, p: &P) -> Orientation;
}

impl Orientation {
    /// Classifies from a strict and a boundary-inclusive membership test.
    pub fn from_membership(strict: bool, inclusive: bool) -> Self {
        if strict {
            Orientation::In
        } else if inclusive {
            Orientation::On
        } else {
            Orientation::Out
        }
    }

    /// Classifies from a signed value where negative means inside.
    pub fn from_sign(sign: i32) -> Self {
        if sign < 0 {
            Orientation::In
        } else if sign == 0 {
            Orientation::On
        } else {
            Orientation::Out
        }
    }
}
