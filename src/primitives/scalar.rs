//! Element trait for matrix cells.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use num_complex::Complex;
use num_traits::{NumAssign, Zero};

/// Contract for matrix element types.
///
/// An element supplies a zero value, the arithmetic operators the matrix
/// needs, equality, and text rendering. The one provided method, [`conj`],
/// is the complex conjugate: real scalars return themselves, and the
/// [`Complex`] impl overrides it to negate the imaginary part. This is what
/// makes [`Matrix::trans`](super::Matrix::trans) a plain transpose for real
/// elements and a Hermitian transpose for complex ones, with a single code
/// path.
///
/// [`conj`]: Scalar::conj
///
/// # Examples
///
/// ```
/// use matriz::prelude::*;
///
/// assert_eq!(3.5_f64.conj(), 3.5);
/// assert_eq!(Complex::new(1.0, 2.0).conj(), Complex::new(1.0, -2.0));
/// ```
pub trait Scalar:
    Copy
    + PartialEq
    + fmt::Debug
    + fmt::Display
    + Zero
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + SubAssign
    + Mul<Output = Self>
{
    /// Complex conjugate. Identity for real scalars.
    #[must_use]
    fn conj(self) -> Self {
        self
    }
}

macro_rules! impl_real_scalar {
    ($($t:ty),* $(,)?) => {
        $(impl Scalar for $t {})*
    };
}

impl_real_scalar!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl<T> Scalar for Complex<T>
where
    T: Scalar + NumAssign + PartialOrd + Neg<Output = T>,
{
    fn conj(self) -> Self {
        Complex::new(self.re, -self.im)
    }
}
