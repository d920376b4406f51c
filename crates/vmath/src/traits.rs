//! Numeric traits the vector, matrix and quaternion types are generic over.

use std::{fmt, ops};

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for signed numeric types that support basic arithmetic operations.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + PartialOrd
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + PartialOrd
        + Copy
{
}

/// Types that support the trigonometric functions.
pub trait Trig: Sized {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the tangent of the angle `self` (in radians).
    fn tan(self) -> Self;
    /// Computes sine and cosine of `self` at once.
    fn sin_cos(self) -> (Self, Self);
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan2(self, other: Self) -> Self;
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types with an absolute value.
///
/// Implemented for the built-in signed integers and floats; the integer vector and rectangle
/// code relies on it.
pub trait Abs {
    fn abs(self) -> Self;
}

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of [`f32::min`] and [`f32::max`] (NaN
/// operands are ignored). Built-in integer types implement it in terms of [`Ord::min`] and
/// [`Ord::max`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
}

/// Element types that know how to render themselves in the `Vec2f[1.000000 x 2.000000]` family of
/// [`Display`][fmt::Display] formats.
pub trait Scalar: Copy {
    /// Type suffix used in rendered names (`f` in `Vec3f`, `i` in `Recti`).
    const SUFFIX: &'static str;

    /// Writes a single element.
    ///
    /// Floats use 6 decimals unless the formatter carries an explicit precision.
    fn fmt_element(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// [`Display`][fmt::Display] adapter that renders a single element via [`Scalar::fmt_element`].
pub(crate) struct Element<T>(pub T);

impl<T: Scalar> fmt::Display for Element<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_element(f)
    }
}

/// Floating-point element types.
///
/// Everything that normalizes, inverts, or compares with a tolerance requires this bound.
pub trait Float: Number + Sqrt + Trig + MinMax + Abs + Scalar {
    /// The smallest positive *normal* value (`2^-126` for [`f32`]).
    ///
    /// Not to be confused with the smallest subnormal value.
    const MIN_NORMAL: Self;
    /// Relative tolerance used by all comparisons that don't take an explicit epsilon.
    const DEFAULT_EPSILON: Self;
    const PI: Self;
    const HALF: Self;
    const TWO: Self;

    /// Converts an `f64` literal into `Self`, rounding if necessary.
    fn from_f64(value: f64) -> Self;
    /// Converts `self` into an `i32`, truncating towards zero (saturating at the bounds).
    fn to_i32(self) -> i32;
    fn floor(self) -> Self;
    /// Rounds half-way cases away from zero.
    fn round(self) -> Self;
    fn is_sign_negative(self) -> bool;
    fn copysign(self, sign: Self) -> Self;
}

macro_rules! int_impls {
    ($($ty:ty => $suffix:literal),+) => {
        $(
            impl Zero for $ty {
                const ZERO: Self = 0;
            }

            impl One for $ty {
                const ONE: Self = 1;
            }

            impl Abs for $ty {
                #[inline]
                fn abs(self) -> Self {
                    <$ty>::abs(self)
                }
            }

            impl MinMax for $ty {
                #[inline]
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                #[inline]
                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }

            impl Scalar for $ty {
                const SUFFIX: &'static str = $suffix;

                fn fmt_element(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self)
                }
            }
        )+
    };
}
int_impls!(i8 => "b", i16 => "s", i32 => "i", i64 => "l");

macro_rules! float_impls {
    ($($ty:ident => $suffix:literal),+) => {
        $(
            impl Zero for $ty {
                const ZERO: Self = 0.0;
            }

            impl One for $ty {
                const ONE: Self = 1.0;
            }

            impl Abs for $ty {
                #[inline]
                fn abs(self) -> Self {
                    <$ty>::abs(self)
                }
            }

            impl MinMax for $ty {
                #[inline]
                fn min(self, other: Self) -> Self {
                    <$ty>::min(self, other)
                }

                #[inline]
                fn max(self, other: Self) -> Self {
                    <$ty>::max(self, other)
                }
            }

            impl Sqrt for $ty {
                #[inline]
                fn sqrt(self) -> Self {
                    <$ty>::sqrt(self)
                }
            }

            impl Trig for $ty {
                #[inline]
                fn sin(self) -> Self {
                    <$ty>::sin(self)
                }

                #[inline]
                fn cos(self) -> Self {
                    <$ty>::cos(self)
                }

                #[inline]
                fn tan(self) -> Self {
                    <$ty>::tan(self)
                }

                #[inline]
                fn sin_cos(self) -> (Self, Self) {
                    <$ty>::sin_cos(self)
                }

                #[inline]
                fn asin(self) -> Self {
                    <$ty>::asin(self)
                }

                #[inline]
                fn acos(self) -> Self {
                    <$ty>::acos(self)
                }

                #[inline]
                fn atan2(self, other: Self) -> Self {
                    <$ty>::atan2(self, other)
                }
            }

            impl Scalar for $ty {
                const SUFFIX: &'static str = $suffix;

                fn fmt_element(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    let precision = f.precision().unwrap_or(6);
                    write!(f, "{:.*}", precision, self)
                }
            }

            impl Float for $ty {
                const MIN_NORMAL: Self = <$ty>::MIN_POSITIVE;
                const DEFAULT_EPSILON: Self = 1.0e-8;
                const PI: Self = std::$ty::consts::PI;
                const HALF: Self = 0.5;
                const TWO: Self = 2.0;

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $ty
                }

                #[inline]
                fn to_i32(self) -> i32 {
                    self as i32
                }

                #[inline]
                fn floor(self) -> Self {
                    <$ty>::floor(self)
                }

                #[inline]
                fn round(self) -> Self {
                    <$ty>::round(self)
                }

                #[inline]
                fn is_sign_negative(self) -> bool {
                    <$ty>::is_sign_negative(self)
                }

                #[inline]
                fn copysign(self, sign: Self) -> Self {
                    <$ty>::copysign(self, sign)
                }
            }
        )+
    };
}
float_impls!(f32 => "f", f64 => "d");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_normal() {
        assert_eq!(f32::MIN_NORMAL, 1.1754943508222875e-38);
        assert!(f32::MIN_NORMAL > 1.0e-45);
    }

    #[test]
    fn min_max() {
        assert_eq!(MinMax::min(3i32, -4), -4);
        assert_eq!(MinMax::max(3i64, -4), 3);
        assert_eq!(MinMax::min(1.0, f32::NAN), 1.0);
        assert_eq!(Abs::abs(-7i32), 7);
        assert_eq!(Abs::abs(-0.5f64), 0.5);
    }

    #[test]
    fn float_conversions() {
        assert_eq!(Float::to_i32(-3.7f32), -3);
        assert_eq!(Float::to_i32(4.5f32), 4);
        assert_eq!(Float::round(4.5f32), 5.0);
        assert_eq!(Float::round(-7.5f32), -8.0);
        assert_eq!(<f64 as Float>::from_f64(0.25), 0.25);
    }
}
