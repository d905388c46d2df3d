//! Numeric tiers shared by every module.
//!
//! - `Number`: ring arithmetic plus ordering. Integers and floats both qualify,
//!   so inputs such as integer points are accepted as-is.
//! - `Real`: floating-point scalars with sqrt/trig. Every result that needs a
//!   square root or an angle is produced in a `Real` type.
//! - `convert`: the only way across the `Number` → `Real` boundary. It is
//!   checked and reports values the target type cannot represent.
//! - `CheckedOps`: overflow-checked `+ - *` for sums formed in the input type.
//!   Floats never fail here; they go to ±∞ and are caught by later checks.

use std::fmt::Debug;

use num_traits::{Float, FloatConst, NumAssign, NumCast};

use crate::error::{GeomError, Result};

/// Any scalar usable as a coordinate: integer or floating point.
pub trait Number:
    nalgebra::Scalar + Copy + PartialOrd + Debug + NumAssign + NumCast + CheckedOps
{
}

impl<T> Number for T where
    T: nalgebra::Scalar + Copy + PartialOrd + Debug + NumAssign + NumCast + CheckedOps
{
}

/// Ring operations that report overflow instead of panicking or wrapping.
pub trait CheckedOps: Sized {
    fn add_checked(self, rhs: Self) -> Option<Self>;
    fn sub_checked(self, rhs: Self) -> Option<Self>;
    fn mul_checked(self, rhs: Self) -> Option<Self>;
}

macro_rules! checked_ops_int {
    ($($t:ty),*) => {$(
        impl CheckedOps for $t {
            #[inline]
            fn add_checked(self, rhs: Self) -> Option<Self> {
                self.checked_add(rhs)
            }
            #[inline]
            fn sub_checked(self, rhs: Self) -> Option<Self> {
                self.checked_sub(rhs)
            }
            #[inline]
            fn mul_checked(self, rhs: Self) -> Option<Self> {
                self.checked_mul(rhs)
            }
        }
    )*};
}

macro_rules! checked_ops_float {
    ($($t:ty),*) => {$(
        impl CheckedOps for $t {
            #[inline]
            fn add_checked(self, rhs: Self) -> Option<Self> {
                Some(self + rhs)
            }
            #[inline]
            fn sub_checked(self, rhs: Self) -> Option<Self> {
                Some(self - rhs)
            }
            #[inline]
            fn mul_checked(self, rhs: Self) -> Option<Self> {
                Some(self * rhs)
            }
        }
    )*};
}

checked_ops_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
checked_ops_float!(f32, f64);

fn overflow<T: Number>(op: &'static str, lhs: T, rhs: T) -> GeomError {
    GeomError::Overflow {
        op,
        lhs: format!("{lhs:?}"),
        rhs: format!("{rhs:?}"),
    }
}

#[inline]
pub fn checked_add<T: Number>(a: T, b: T) -> Result<T> {
    a.add_checked(b).ok_or_else(|| overflow("add", a, b))
}

#[inline]
pub fn checked_sub<T: Number>(a: T, b: T) -> Result<T> {
    a.sub_checked(b).ok_or_else(|| overflow("sub", a, b))
}

#[inline]
pub fn checked_mul<T: Number>(a: T, b: T) -> Result<T> {
    a.mul_checked(b).ok_or_else(|| overflow("mul", a, b))
}

/// Floating-point scalar (f32, f64).
pub trait Real: Number + Float + FloatConst {}

impl<T> Real for T where T: Number + Float + FloatConst {}

/// Checked conversion between numeric types.
///
/// Fails with [`GeomError::Conversion`] when `value` lies outside the range of
/// `R` (e.g. a finite f64 beyond `f32::MAX`).
#[inline]
pub fn convert<T: Number, R: Number>(value: T) -> Result<R> {
    <R as NumCast>::from(value).ok_or_else(|| GeomError::Conversion {
        value: format!("{value:?}"),
        target: std::any::type_name::<R>(),
    })
}

/// Full turn (2π).
#[inline]
pub fn tau<R: Real>() -> R {
    R::PI() + R::PI()
}

/// `|a - b| <= eps`.
#[inline]
pub fn approx_eq<R: Real>(a: R, b: R, eps: R) -> bool {
    (a - b).abs() <= eps
}

/// z-component of the cross product `(i0, j0) × (i1, j1)`.
#[inline]
pub fn cross<T: Number>(i0: T, j0: T, i1: T, j1: T) -> T {
    i0 * j1 - j0 * i1
}

#[inline]
pub fn dot<T: Number>(i0: T, j0: T, i1: T, j1: T) -> T {
    i0 * i1 + j0 * j1
}

/// [`cross`] with every step overflow-checked.
pub fn checked_cross<T: Number>(i0: T, j0: T, i1: T, j1: T) -> Result<T> {
    checked_sub(checked_mul(i0, j1)?, checked_mul(j0, i1)?)
}

/// [`dot`] with every step overflow-checked.
pub fn checked_dot<T: Number>(i0: T, j0: T, i1: T, j1: T) -> Result<T> {
    checked_add(checked_mul(i0, i1)?, checked_mul(j0, j1)?)
}

/// Lift an f64 constant into `R`, falling back to `fallback` if it does not fit.
#[inline]
pub(crate) fn real_or<R: Real>(v: f64, fallback: R) -> R {
    <R as NumCast>::from(v).unwrap_or(fallback)
}
