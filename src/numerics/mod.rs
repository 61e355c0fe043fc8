extern crate nalgebra as na;
extern crate num_traits;

use std::fmt::{Debug, Display};
use std::ops::Neg;
use num_traits::{NumAssign, ToPrimitive};

/**
 * The floating-point type every moment computation is carried out in.
 * Besides the usual arithmetic it has to supply the fractions used by the contour integrals.
 */
pub trait Scalar: Copy + PartialOrd + Debug + Display + NumAssign + Neg<Output = Self> + na::Scalar {
    const EPSILON: Self;
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;
    const THREE: Self;
    const F1_2: Self;
    const F1_6: Self;
    const F1_12: Self;
    const F1_20: Self;
    const F1_24: Self;
    const F1_60: Self;

    fn abs(self) -> Self;
    fn sqrt(self) -> Self;
    fn powi(self, n: i32) -> Self;

    /// Computes `self * a + b` with a single rounding step.
    fn mul_add(self, a: Self, b: Self) -> Self;

    /// Magnitude of `self` with the sign of `sign`.
    fn copysign(self, sign: Self) -> Self;

    /// Four quadrant arctangent of `self` (y) and `x`.
    fn atan2(self, x: Self) -> Self;

    fn is_finite(self) -> bool;

    /// Casts any primitive number. Values that can not be represented become NaN.
    fn from_primitive<C: ToPrimitive>(value: C) -> Self;
}

macro_rules! impl_scalar {
    ($f:tt, $to:ident) => {
        impl Scalar for $f {
            const EPSILON: Self = <$f>::EPSILON;
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const TWO: Self = 2.0;
            const THREE: Self = 3.0;
            const F1_2: Self = 1.0 / 2.0;
            const F1_6: Self = 1.0 / 6.0;
            const F1_12: Self = 1.0 / 12.0;
            const F1_20: Self = 1.0 / 20.0;
            const F1_24: Self = 1.0 / 24.0;
            const F1_60: Self = 1.0 / 60.0;

            #[inline(always)]
            fn abs(self) -> Self { <$f>::abs(self) }

            #[inline(always)]
            fn sqrt(self) -> Self { <$f>::sqrt(self) }

            #[inline(always)]
            fn powi(self, n: i32) -> Self { <$f>::powi(self, n) }

            #[inline(always)]
            fn mul_add(self, a: Self, b: Self) -> Self { <$f>::mul_add(self, a, b) }

            #[inline(always)]
            fn copysign(self, sign: Self) -> Self { <$f>::copysign(self, sign) }

            #[inline(always)]
            fn atan2(self, x: Self) -> Self { <$f>::atan2(self, x) }

            #[inline(always)]
            fn is_finite(self) -> bool { <$f>::is_finite(self) }

            #[inline(always)]
            fn from_primitive<C: ToPrimitive>(value: C) -> Self {
                value.$to().unwrap_or(<$f>::NAN)
            }
        }
    }
}

impl_scalar!(f32, to_f32);
impl_scalar!(f64, to_f64);
