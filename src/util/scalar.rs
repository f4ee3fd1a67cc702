//! Scalar kinds a [`Point3`] can be built over.
//!
//! There are two regimes:
//!
//! - **floating** ([`Real`], implemented for `f32` and `f64`): comparisons go
//!   through the tolerant [`sign`](crate::util::predicate::sign) and irrational
//!   results are returned in the scalar type itself.
//! - **integral** ([`Integral`], implemented for `i32`, `i64` and `i128`):
//!   comparisons are exact, and anything irrational (lengths, angles,
//!   distances) comes back as the auxiliary real type `f64` instead of being
//!   truncated into the integer.
//!
//! The kind-specific behaviour (sign, conversion to the real type, and what
//! `unit` means) is chosen at compile time through the [`Scalar`] trait.
use cgmath::{BaseFloat, BaseNum};
use log::trace;
use num_traits::{CheckedNeg, FloatConst, Signed};

use crate::space::point::Point3;
use crate::util::predicate::{sign_with, EPS};

/// A coordinate type for [`Point3`]. `BaseNum` lets the component algebra run
/// on `cgmath::Vector3`.
pub trait Scalar: BaseNum + Signed {
    /// The type irrational results are reported in.
    type Real: Real;

    /// `-1`, `0` or `1`; tolerant for floating kinds, exact for integral ones.
    fn sign(self) -> i32;

    fn to_real(self) -> Self::Real;

    /// Scales `v` to "length" `n`. Zero vectors map to `(n, 0, 0)`.
    ///
    /// For floating kinds this is true normalization. For integral kinds it is
    /// a lattice-direction reduction: the components are divided by their gcd
    /// and then multiplied by `n`.
    fn unit_vector(v: Point3<Self>, n: Self) -> Point3<Self>;
}

/// Floating scalar kind.
pub trait Real: Scalar<Real = Self> + BaseFloat + FloatConst {}

/// Exact integer scalar kind.
pub trait Integral: Scalar<Real = f64> + Ord + Eq + CheckedNeg {}

macro_rules! impl_real {
    ($t:ty) => {
        impl Scalar for $t {
            type Real = $t;

            #[inline]
            fn sign(self) -> i32 {
                sign_with(self, EPS as $t)
            }

            #[inline]
            fn to_real(self) -> $t {
                self
            }

            fn unit_vector(v: Point3<$t>, n: $t) -> Point3<$t> {
                let l = v.length();
                if l.sign() == 0 {
                    trace!("unit of zero-length vector {:?}, falling back to x axis", v);
                    Point3::new(n, 0.0, 0.0)
                } else {
                    Point3::new(v.x * n / l, v.y * n / l, v.z * n / l)
                }
            }
        }

        impl Real for $t {}
    };
}

macro_rules! impl_integral {
    ($t:ty) => {
        impl Scalar for $t {
            type Real = f64;

            #[inline]
            fn sign(self) -> i32 {
                self.signum() as i32
            }

            #[inline]
            fn to_real(self) -> f64 {
                self as f64
            }

            fn unit_vector(v: Point3<$t>, n: $t) -> Point3<$t> {
                let g = neg_gcd(v.x, neg_gcd(v.y, v.z));
                if g == 0 {
                    trace!("lattice reduction of zero vector, falling back to x axis");
                    Point3::new(n, 0, 0)
                } else if g == -1 {
                    Point3::new(v.x * n, v.y * n, v.z * n)
                } else {
                    // g <= -2, so neither the quotient nor its negation overflows
                    Point3::new(-(v.x / g) * n, -(v.y / g) * n, -(v.z / g) * n)
                }
            }
        }

        impl Integral for $t {}
    };
}

impl_real!(f32);
impl_real!(f64);

impl_integral!(i32);
impl_integral!(i64);
impl_integral!(i128);

/// Greatest common divisor of the magnitudes of `a` and `b`; `gcd(0, 0) == 0`.
///
/// `None` when the divisor does not fit in `T`, i.e. for `gcd(MIN, 0)` and
/// `gcd(MIN, MIN)`.
pub fn gcd<T: Integral>(a: T, b: T) -> Option<T> {
    neg_gcd(a, b).checked_neg()
}

/// The gcd of the magnitudes, negated. Euclid runs on non-positive values so
/// `MIN` never has to be negated.
fn neg_gcd<T: Integral>(a: T, b: T) -> T {
    let mut a = if a > T::zero() { -a } else { a };
    let mut b = if b > T::zero() { -b } else { b };
    while b != T::zero() {
        if b == -T::one() {
            // MIN % -1 overflows
            return b;
        }
        let r = a % b;
        a = b;
        b = r;
    }
    a
}
