//! Sign and clamp helpers shared by every geometric routine.
//!
//! All tolerance decisions in the crate go through [`sign`], so a single
//! absolute tolerance [`EPS`] governs equality of floating points, collinearity,
//! coplanarity and the tangent cases of the sphere routines. There is no
//! auto-scaling: inputs are expected to live in units where `1e-12` is
//! negligible.
use num_traits::Float;

use crate::util::scalar::Scalar;

/// Absolute tolerance below which a floating value counts as zero.
pub const EPS: f64 = 1e-12;

/// Returns `-1`, `0` or `1` according to the sign of `x`.
///
/// Floating scalars within [`EPS`] of zero report `0`; integral scalars are
/// compared exactly.
///
/// ```
/// # use geom3::util::predicate::sign;
/// assert_eq!(sign(1e-13f64), 0);
/// assert_eq!(sign(-2.0f64), -1);
/// assert_eq!(sign(3i64), 1);
/// ```
#[inline]
pub fn sign<T: Scalar>(x: T) -> i32 {
    x.sign()
}

/// Sign of `x` treating anything in `[-eps, eps]` as zero.
#[inline]
pub fn sign_with<T: Float>(x: T, eps: T) -> i32 {
    (x > eps) as i32 - (x < -eps) as i32
}

/// Clamps a cosine into `[-1, 1]` so `acos` never sees a value pushed just
/// outside its domain by round-off.
#[inline]
pub fn clamp_to_unit_cosine<T: Float>(x: T) -> T {
    if x < -T::one() {
        -T::one()
    } else if x < T::one() {
        x
    } else {
        T::one()
    }
}

/// Clamps negative values (typically round-off under a square root) to zero.
#[inline]
pub fn non_negative<T: Scalar>(x: T) -> T {
    if x < T::zero() {
        T::zero()
    } else {
        x
    }
}

#[inline]
pub fn sqr<T: Scalar>(x: T) -> T {
    x * x
}
