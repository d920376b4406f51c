use crate::scalar::equal_eps;

use super::ApproxEq;

macro_rules! float_impls {
    ($($ty:ty),+) => {
        $(
            impl ApproxEq for $ty {
                type Tolerance = Self;

                fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
                    if !self.is_finite() || !other.is_finite() {
                        // Ensures that `inf == inf`, `-inf == -inf` and `inf != -inf`.
                        return self == other;
                    }

                    (self - other).abs() <= abs_tolerance
                }

                fn eq_eps(&self, other: &Self, epsilon: Self::Tolerance) -> bool {
                    equal_eps(*self, *other, epsilon)
                }
            }
        )+
    };
}
float_impls!(f32, f64);

impl<'a, T: ApproxEq<U> + ?Sized, U: ?Sized> ApproxEq<U> for &'a T {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &U, abs_tolerance: Self::Tolerance) -> bool {
        T::abs_diff_eq(self, other, abs_tolerance)
    }

    fn eq_eps(&self, other: &U, epsilon: Self::Tolerance) -> bool {
        T::eq_eps(self, other, epsilon)
    }
}

impl<T: ApproxEq<U>, U> ApproxEq<[U]> for [T] {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &[U], abs_tolerance: Self::Tolerance) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.abs_diff_eq(b, abs_tolerance))
    }

    fn eq_eps(&self, other: &[U], epsilon: Self::Tolerance) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.eq_eps(b, epsilon))
    }
}

impl<T: ApproxEq<U>, U, const N: usize> ApproxEq<[U; N]> for [T; N] {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &[U; N], abs_tolerance: Self::Tolerance) -> bool {
        self.as_slice().abs_diff_eq(other.as_slice(), abs_tolerance)
    }

    fn eq_eps(&self, other: &[U; N], epsilon: Self::Tolerance) -> bool {
        self.as_slice().eq_eps(other.as_slice(), epsilon)
    }
}
