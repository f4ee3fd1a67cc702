/// A generic trait for two objects that have some kind of intersection.
///
/// What "intersection" produces is up to the pair: a yes/no answer for two
/// segments, a point for a line and a plane, a circle for two spheres.
pub trait Intersect<K> {
    type Output;

    fn intersect(&self, knife: K) -> Self::Output;
}
