//! The point/vector value type and its algebra.
//!
//! A [`Point3`] is used both as a position and as a displacement; the caller
//! decides which. [`Vector3`] is an alias that reads better in the second role.
//!
//! ```
//! use geom3::space::{p3, v3};
//!
//! let a = p3(1.0f64, 0.0, 0.0);
//! let b = p3(0.0f64, 1.0, 0.0);
//! assert_eq!(a.cross(b), v3(0.0, 0.0, 1.0));
//! assert_eq!(a.dot(b), 0.0);
//! assert!((a.angle(b) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
//! ```
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use cgmath::{Array, ElementWise};
use num_traits::{Float, NumCast, Zero};

use crate::util::predicate::clamp_to_unit_cosine;
use crate::util::scalar::{Integral, Real, Scalar};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default)]
pub struct Point3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

pub type Vector3<T> = Point3<T>;

impl<T> Point3<T> {
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Point3 { x, y, z }
    }
}

impl<T: Scalar> Point3<T> {
    pub fn origin() -> Self {
        Point3::new(T::zero(), T::zero(), T::zero())
    }

    /// True if every component is zero (tolerantly for floating scalars).
    pub fn is_zero(&self) -> bool {
        *self == Self::origin()
    }

    #[inline]
    fn to_cgmath(self) -> cgmath::Vector3<T> {
        self.into()
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> T {
        self.to_cgmath().mul_element_wise(rhs.to_cgmath()).sum()
    }

    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        self.to_cgmath().cross(rhs.to_cgmath()).into()
    }

    /// `(a - self) × (b - self)`
    #[inline]
    pub fn cross_at(self, a: Self, b: Self) -> Self {
        (a - self).cross(b - self)
    }

    /// `(a - self) · (b - self)`
    #[inline]
    pub fn dot_at(self, a: Self, b: Self) -> T {
        (a - self).dot(b - self)
    }

    /// Squared norm. Exact for integral scalars; prefer it over [`length`]
    /// whenever a squared comparison is enough.
    ///
    /// [`length`]: Point3::length
    #[inline]
    pub fn length2(self) -> T {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> T::Real {
        self.length2().to_real().sqrt()
    }

    #[inline]
    pub fn distance2(self, rhs: Self) -> T {
        (rhs - self).length2()
    }

    #[inline]
    pub fn distance(self, rhs: Self) -> T::Real {
        (rhs - self).length()
    }

    /// Angle between two vectors, in `[0, π]`.
    ///
    /// If either vector has zero length the angle is `0`.
    pub fn angle(self, rhs: Self) -> T::Real {
        let l1 = self.length();
        let l2 = rhs.length();
        if l1.sign() == 0 || l2.sign() == 0 {
            <T::Real as Zero>::zero()
        } else {
            clamp_to_unit_cosine(self.dot(rhs).to_real() / l1 / l2).acos()
        }
    }

    /// Angle at vertex `self` of the triangle `a`, `self`, `b`.
    #[inline]
    pub fn angle_at(self, a: Self, b: Self) -> T::Real {
        (a - self).angle(b - self)
    }

    /// Direction of `self` with unit "length"; see [`with_length`].
    ///
    /// [`with_length`]: Point3::with_length
    #[inline]
    pub fn unit(self) -> Self {
        self.with_length(T::one())
    }

    /// Rescales `self` to length `n`.
    ///
    /// A zero vector yields `(n, 0, 0)`. For integral scalars this is a
    /// lattice-direction reduction (divide by the gcd of the components, then
    /// multiply by `n`), so the result has length `n` only when the reduced
    /// direction is itself a unit vector.
    #[inline]
    pub fn with_length(self, n: T) -> Self {
        T::unit_vector(self, n)
    }

    /// Some vector orthogonal to `self`.
    pub fn normal(self) -> Self {
        if self.x.sign() == 0 {
            Point3::new(T::one(), T::zero(), T::zero())
        } else {
            Point3::new(-self.y, self.x, T::zero()).unit()
        }
    }

    /// Picks one representative out of `self` and `-self`: the one with
    /// `z > 0`, then `y > 0`, then `x >= 0`.
    pub fn moderate(self) -> Self {
        let xs = self.x.sign();
        let ys = self.y.sign();
        let zs = self.z.sign();
        if zs > 0 || (zs == 0 && (ys > 0 || (ys == 0 && xs >= 0))) {
            self
        } else {
            -self
        }
    }

    /// Converts every component into the scalar kind's real type.
    pub fn to_real(self) -> Point3<T::Real> {
        Point3::new(self.x.to_real(), self.y.to_real(), self.z.to_real())
    }

    /// Converts into another scalar type, `None` if a component does not fit.
    pub fn cast<S: Scalar>(self) -> Option<Point3<S>> {
        Some(Point3::new(
            <S as NumCast>::from(self.x)?,
            <S as NumCast>::from(self.y)?,
            <S as NumCast>::from(self.z)?,
        ))
    }

    /// Orders by z, then y, then x. This is the order `<` uses.
    pub fn cmp_zyx(&self, other: &Self) -> Ordering {
        axis_cmp(self.z, other.z)
            .then_with(|| axis_cmp(self.y, other.y))
            .then_with(|| axis_cmp(self.x, other.x))
    }

    /// Orders by x, then y, then z.
    pub fn cmp_xyz(&self, other: &Self) -> Ordering {
        axis_cmp(self.x, other.x)
            .then_with(|| axis_cmp(self.y, other.y))
            .then_with(|| axis_cmp(self.z, other.z))
    }
}

fn axis_cmp<T: Scalar>(a: T, b: T) -> Ordering {
    if (a - b).sign() == 0 {
        Ordering::Equal
    } else if a < b {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

impl<T: Scalar> PartialEq for Point3<T> {
    fn eq(&self, other: &Self) -> bool {
        (self.x - other.x).sign() == 0
            && (self.y - other.y).sign() == 0
            && (self.z - other.z).sign() == 0
    }
}

impl<T: Scalar> PartialOrd for Point3<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp_zyx(other))
    }
}

impl<T: Integral> Eq for Point3<T> {}

impl<T: Integral> Ord for Point3<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_zyx(other)
    }
}

impl<T: Integral + Hash> Hash for Point3<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
        self.z.hash(state);
    }
}

impl<T: Scalar> Add for Point3<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        (self.to_cgmath() + rhs.to_cgmath()).into()
    }
}

impl<T: Scalar> Sub for Point3<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        (self.to_cgmath() - rhs.to_cgmath()).into()
    }
}

impl<T: Scalar> Neg for Point3<T> {
    type Output = Self;

    fn neg(self) -> Self {
        (-self.to_cgmath()).into()
    }
}

impl<T: Scalar> Mul<T> for Point3<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        (self.to_cgmath() * rhs).into()
    }
}

impl<T: Scalar> Div<T> for Point3<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        (self.to_cgmath() / rhs).into()
    }
}

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Point3<$t>> for $t {
                type Output = Point3<$t>;

                fn mul(self, rhs: Point3<$t>) -> Point3<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64, i32, i64, i128);

impl<T: fmt::Display> fmt::Display for Point3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl<T> From<[T; 3]> for Point3<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Point3::new(x, y, z)
    }
}

impl<T> From<(T, T, T)> for Point3<T> {
    fn from((x, y, z): (T, T, T)) -> Self {
        Point3::new(x, y, z)
    }
}

impl<T> From<Point3<T>> for [T; 3] {
    fn from(p: Point3<T>) -> Self {
        [p.x, p.y, p.z]
    }
}

impl<T> From<cgmath::Point3<T>> for Point3<T> {
    fn from(p: cgmath::Point3<T>) -> Self {
        Point3::new(p.x, p.y, p.z)
    }
}

impl<T> From<cgmath::Vector3<T>> for Point3<T> {
    fn from(v: cgmath::Vector3<T>) -> Self {
        Point3::new(v.x, v.y, v.z)
    }
}

impl<T> From<Point3<T>> for cgmath::Point3<T> {
    fn from(p: Point3<T>) -> Self {
        cgmath::Point3::new(p.x, p.y, p.z)
    }
}

impl<T> From<Point3<T>> for cgmath::Vector3<T> {
    fn from(p: Point3<T>) -> Self {
        cgmath::Vector3::new(p.x, p.y, p.z)
    }
}

impl<T: Real> AbsDiffEq for Point3<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        T::abs_diff_eq(&self.x, &other.x, epsilon)
            && T::abs_diff_eq(&self.y, &other.y, epsilon)
            && T::abs_diff_eq(&self.z, &other.z, epsilon)
    }
}

impl<T: Real> RelativeEq for Point3<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        T::relative_eq(&self.x, &other.x, epsilon, max_relative)
            && T::relative_eq(&self.y, &other.y, epsilon, max_relative)
            && T::relative_eq(&self.z, &other.z, epsilon, max_relative)
    }
}

impl<T: Real> UlpsEq for Point3<T> {
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
        T::ulps_eq(&self.x, &other.x, epsilon, max_ulps)
            && T::ulps_eq(&self.y, &other.y, epsilon, max_ulps)
            && T::ulps_eq(&self.z, &other.z, epsilon, max_ulps)
    }
}
