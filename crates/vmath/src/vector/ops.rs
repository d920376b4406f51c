//! Implementations of `std::ops`.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::approx::ApproxEq;

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

// More general impl than what the derive generates.
impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T, const N: usize> Eq for Vector<T, N> where T: Eq {}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize> PartialEq<[U]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.0.eq(other)
    }
}

/// Element-wise comparison, true if every pair of elements compares equal.
impl<T, const N: usize> ApproxEq for Vector<T, N>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.0.abs_diff_eq(&other.0, abs_tolerance)
    }

    fn eq_eps(&self, other: &Self, epsilon: Self::Tolerance) -> bool {
        self.0.eq_eps(&other.0, epsilon)
    }
}

/// Element-wise negation.
impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg,
{
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

// Vector-vector operations are element-wise, vector-scalar operations apply the scalar to every
// element. Both are generated here so that the two flavors stay in sync.
macro_rules! binops {
    ($($trait:ident::$method:ident, $assign_trait:ident::$assign_method:ident, $op:tt;)+) => {
        $(
            impl<T, const N: usize> $trait<Vector<T, N>> for Vector<T, N>
            where
                T: $trait,
            {
                type Output = Vector<T::Output, N>;

                #[inline]
                fn $method(self, rhs: Vector<T, N>) -> Self::Output {
                    self.zip(rhs).map(|(l, r)| l $op r)
                }
            }

            impl<T, const N: usize> $assign_trait<Vector<T, N>> for Vector<T, N>
            where
                T: $assign_trait,
            {
                #[inline]
                fn $assign_method(&mut self, rhs: Vector<T, N>) {
                    self.0
                        .iter_mut()
                        .zip(rhs.into_array())
                        .for_each(|(lhs, rhs)| lhs.$assign_method(rhs));
                }
            }

            impl<T, const N: usize> $trait<T> for Vector<T, N>
            where
                T: $trait + Copy,
            {
                type Output = Vector<T::Output, N>;

                #[inline]
                fn $method(self, rhs: T) -> Self::Output {
                    self.map(|elem| elem $op rhs)
                }
            }

            impl<T, const N: usize> $assign_trait<T> for Vector<T, N>
            where
                T: $assign_trait + Copy,
            {
                #[inline]
                fn $assign_method(&mut self, rhs: T) {
                    self.0.iter_mut().for_each(|lhs| lhs.$assign_method(rhs));
                }
            }
        )+
    };
}

binops! {
    Add::add, AddAssign::add_assign, +;
    Sub::sub, SubAssign::sub_assign, -;
    Mul::mul, MulAssign::mul_assign, *;
    Div::div, DivAssign::div_assign, /;
}
