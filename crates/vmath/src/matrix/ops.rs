use std::{
    fmt,
    ops::{Add, Index, IndexMut, Mul, Neg, Sub},
};

use crate::{approx::ApproxEq, traits::Number, Matrix, Scalar, Vector};

impl<T, const N: usize> Index<(usize, usize)> for Matrix<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[col][row]
    }
}

impl<T, const N: usize> IndexMut<(usize, usize)> for Matrix<T, N> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[col][row]
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U, const N: usize> PartialEq<Matrix<U, N>> for Matrix<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, N>) -> bool {
        self.0.eq(&other.0)
    }
}

impl<T, const N: usize> Eq for Matrix<T, N> where T: Eq {}

impl<T, const N: usize> ApproxEq for Matrix<T, N>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.abs_diff_eq(b, abs_tolerance))
    }

    fn eq_eps(&self, other: &Self, epsilon: Self::Tolerance) -> bool {
        self.0.iter().zip(&other.0).all(|(a, b)| a.eq_eps(b, epsilon))
    }
}

/// Element-wise addition.
impl<T: Number, const N: usize> Add for Matrix<T, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Matrix::from_fn(|row, col| self[(row, col)] + rhs[(row, col)])
    }
}

/// Element-wise subtraction.
impl<T: Number, const N: usize> Sub for Matrix<T, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Matrix::from_fn(|row, col| self[(row, col)] - rhs[(row, col)])
    }
}

impl<T: Number, const N: usize> Neg for Matrix<T, N> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Matrix + Scalar (added to every element).
impl<T: Number, const N: usize> Add<T> for Matrix<T, N> {
    type Output = Self;

    fn add(self, rhs: T) -> Self::Output {
        self.map(|elem| elem + rhs)
    }
}

/// Matrix - Scalar (subtracted from every element).
impl<T: Number, const N: usize> Sub<T> for Matrix<T, N> {
    type Output = Self;

    fn sub(self, rhs: T) -> Self::Output {
        self.map(|elem| elem - rhs)
    }
}

/// Matrix * Column Vector.
impl<T, const N: usize> Mul<Vector<T, N>> for Matrix<T, N>
where
    T: Number,
{
    type Output = Vector<T, N>;

    fn mul(self, rhs: Vector<T, N>) -> Self::Output {
        Vector::from_fn(|row| (0..N).fold(T::ZERO, |acc, col| acc + self[(row, col)] * rhs[col]))
    }
}

/// Matrix * Matrix.
impl<T, const N: usize> Mul<Matrix<T, N>> for Matrix<T, N>
where
    T: Number,
{
    type Output = Matrix<T, N>;

    fn mul(self, rhs: Matrix<T, N>) -> Self::Output {
        Matrix::from_fn(|i, j| (0..N).fold(T::ZERO, |acc, k| acc + self[(i, k)] * rhs[(k, j)]))
    }
}

/// Matrix * Scalar.
impl<T, const N: usize> Mul<T> for Matrix<T, N>
where
    T: Number,
{
    type Output = Matrix<T, N>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

/// Renders the matrix row by row, as `Mat2f[(1.000000 x 2.000000)/(3.000000 x 4.000000)]`.
///
/// A precision given in the format string (`{:.2}`) is applied to every element.
impl<T: Scalar, const N: usize> fmt::Display for Matrix<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mat{}{}[", N, T::SUFFIX)?;
        for row in 0..N {
            if row != 0 {
                f.write_str("/")?;
            }
            f.write_str("(")?;
            for col in 0..N {
                if col != 0 {
                    f.write_str(" x ")?;
                }
                self[(row, col)].fmt_element(f)?;
            }
            f.write_str(")")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec3, Mat2, Mat2f, Mat3f};

    use super::*;

    #[test]
    fn index_is_row_col() {
        let mut mat = Mat2::from_rows([[1, 2], [3, 4]]);
        assert_eq!(mat[(0, 1)], 2);
        assert_eq!(mat[(1, 0)], 3);
        mat[(1, 0)] = 7;
        assert_eq!(mat.row(1), [7, 4]);
    }

    #[test]
    fn arithmetic() {
        let a = Mat2f::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let b = Mat2f::from_rows([[0.5, 0.5], [1.0, -1.0]]);
        assert_eq!(a + b, Mat2f::from_rows([[1.5, 2.5], [4.0, 3.0]]));
        assert_eq!(a - b, Mat2f::from_rows([[0.5, 1.5], [2.0, 5.0]]));
        assert_eq!(a + 1.0, Mat2f::from_rows([[2.0, 3.0], [4.0, 5.0]]));
        assert_eq!(a - 1.0, Mat2f::from_rows([[0.0, 1.0], [2.0, 3.0]]));
        assert_eq!(a * 2.0, Mat2f::from_rows([[2.0, 4.0], [6.0, 8.0]]));
        assert_eq!(-a, a * -1.0);
    }

    #[test]
    fn composition_order() {
        // `a * b` applies `b` first.
        let scale = Mat3f::from_diagonal([2.0, 2.0, 2.0]);
        let swap = Mat3f::from_rows([[0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
        let v = vec3(1.0, 0.0, 0.0);
        assert_eq!((swap * scale) * v, swap * (scale * v));
        assert_eq!(swap * v, vec3(0.0, 1.0, 0.0));
    }

    #[test]
    fn approx() {
        let a = Mat2f::IDENTITY;
        let b = Mat2f::from_rows([[1.0, 1e-7], [0.0, 1.0]]);
        assert_approx_eq!(a, b).abs(1e-6);
        assert_approx_ne!(a, b).eps(1e-8);
        assert!(a.approx_eq(&Mat2f::IDENTITY));
    }

    #[test]
    fn display() {
        let mat = Mat2f::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(
            mat.to_string(),
            "Mat2f[(1.000000 x 2.000000)/(3.000000 x 4.000000)]"
        );
        assert_eq!(format!("{:.1}", mat), "Mat2f[(1.0 x 2.0)/(3.0 x 4.0)]");
        assert_eq!(
            Mat3f::IDENTITY.to_string(),
            "Mat3f[(1.000000 x 0.000000 x 0.000000)/(0.000000 x 1.000000 x 0.000000)/(0.000000 x 0.000000 x 1.000000)]"
        );
        assert_eq!(Mat2::from_rows([[1, 2], [3, 4]]).to_string(), "Mat2i[(1 x 2)/(3 x 4)]");
    }
}
