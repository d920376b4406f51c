use std::{array, fmt};

use crate::{scalar::equal, traits::Number, Float, One, Vector, Zero};

mod ops;
mod project;
mod transform;

/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;

/// A square, column-major `N`x`N` matrix with element type `T`.
///
/// # Construction
///
/// There are several ways to create a [`Matrix`]:
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] allow filling a matrix with raw elements,
///   as well as creating them from an array of row or column vectors.
/// - [`Matrix::from_fn`] will create each element by invoking a closure with its row and column.
/// - [`Matrix::from_diagonal`] creates a matrix with a specified diagonal and zero outside of it.
/// - 4x4 transforms are built by [`Matrix::from_translation`], [`Matrix::from_scaling`],
///   [`Matrix::from_axis_angle`] and the `from_rotation_*` family, projections by
///   [`Matrix::perspective`], [`Matrix::ortho`] and friends.
///
/// Additionally, [`Matrix::ZERO`] is a matrix with every element set to 0, and each size has an
/// `IDENTITY` constant with 1 on its diagonal and 0 everywhere else.
///
/// # Element Access
///
/// [`Matrix`] implements the [`Index`] and [`IndexMut`] traits for tuples of `(usize, usize)`. The
/// first element of the tuple is the *row* (Y coordinate), the second is the *column* (X
/// coordinate), matching common mathematical notation. Indices are 0-based.
///
/// ```
/// # use vmath::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1],
///     [2, 3],
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[(0, 1)], 1);
/// assert_eq!(mat.row(1), [2, 3]);
/// assert_eq!(mat.column(1), [1, 3]);
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for slices. [`Matrix::get`] and
/// [`Matrix::get_mut`] return [`Option`]s instead and can be used for checked indexing.
///
/// # Multiplication
///
/// Vectors are column vectors: `m * v` transforms `v`, and `a * b` is the transform that applies
/// `b` first, then `a`.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const N: usize>(pub(crate) [[T; N]; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Matrix<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Matrix<T, N> {}

impl<T: Zero + Copy, const N: usize> Matrix<T, N> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([[T::ZERO; N]; N]);
}

impl<T: Zero + One> Matrix<T, 2> {
    /// The identity matrix.
    pub const IDENTITY: Self = Self([[T::ONE, T::ZERO], [T::ZERO, T::ONE]]);
}

impl<T: Zero + One> Matrix<T, 3> {
    /// The identity matrix.
    pub const IDENTITY: Self = Self([
        [T::ONE, T::ZERO, T::ZERO],
        [T::ZERO, T::ONE, T::ZERO],
        [T::ZERO, T::ZERO, T::ONE],
    ]);
}

impl<T: Zero + One> Matrix<T, 4> {
    /// The identity matrix.
    ///
    /// Multiplying any vector with this matrix returns the vector unchanged.
    pub const IDENTITY: Self = Self([
        [T::ONE, T::ZERO, T::ZERO, T::ZERO],
        [T::ZERO, T::ONE, T::ZERO, T::ZERO],
        [T::ZERO, T::ZERO, T::ONE, T::ZERO],
        [T::ZERO, T::ZERO, T::ZERO, T::ONE],
    ]);
}

impl<T, const N: usize> Matrix<T, N> {
    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// let rows = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<Vector<T, N>>>(rows: [U; N]) -> Self
    where
        T: Copy,
    {
        Matrix::from_columns(rows).transpose()
    }

    /// Creates a [`Matrix`] from an array of column vectors.
    pub fn from_columns<U: Into<Vector<T, N>>>(columns: [U; N]) -> Self {
        Self(columns.map(|col| col.into().into_array()))
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each element.
    ///
    /// This mirrors [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1],
    ///     [10, 11],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|col| array::from_fn(|row| cb(row, col))))
    }

    /// Creates a matrix from its diagonal.
    ///
    /// Elements outside the diagonal will be initialized with zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero + Copy,
    {
        let diag = diag.into();
        Self::from_fn(|row, col| if row == col { diag[row] } else { T::ZERO })
    }

    /// Applies a closure to each element, returning a new matrix.
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, N>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|column| column.map(|v| f(v))))
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 2],
    ///     [1, 3],
    /// ]));
    /// ```
    pub fn transpose(self) -> Self
    where
        T: Copy,
    {
        Self::from_fn(|row, col| self.0[row][col])
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// assert_eq!(mat.get(1, 0), Some(&2));
    /// assert_eq!(mat.get(2, 0), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(col).and_then(|col| col.get(row))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(col).and_then(|col| col.get_mut(row))
    }

    /// Returns a copy of row `row`.
    pub fn row(&self, row: usize) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|col| self.0[col][row])
    }

    /// Returns a copy of column `col`.
    pub fn column(&self, col: usize) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector(self.0[col])
    }

    /// Overwrites row `row` with the elements of `values`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// let mut mat = Mat2f::IDENTITY;
    /// mat.set_row(0, [5.0, 6.0]);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [5.0, 6.0],
    ///     [0.0, 1.0],
    /// ]));
    /// ```
    pub fn set_row<V: Into<Vector<T, N>>>(&mut self, row: usize, values: V) {
        for (col, value) in values.into().into_array().into_iter().enumerate() {
            self.0[col][row] = value;
        }
    }

    /// Overwrites column `col` with the elements of `values`.
    pub fn set_column<V: Into<Vector<T, N>>>(&mut self, col: usize, values: V) {
        self.0[col] = values.into().into_array();
    }

    /// Returns a [`Vector`] holding the diagonal elements of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.diagonal(), [1, 4]);
    /// ```
    pub fn diagonal(&self) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|i| self.0[i][i])
    }

    /// Returns the *trace* of the matrix (the sum of all elements on the diagonal).
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag.trace(), 1 + 2 + 3);
    ///
    /// assert_eq!(Mat3f::IDENTITY.trace(), 3.0);
    /// ```
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self.0[i][i])
    }

    /// Returns a matrix with the contents of `self`, but a potentially different size.
    ///
    /// Shrinking drops the rightmost columns and bottom rows. Growing fills the new cells from the
    /// identity matrix, so an affine 3x3 block stays affine when embedded into a 4x4 matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.resize::<3>(), Matrix::from_rows([
    ///     [1, 2, 0],
    ///     [3, 4, 0],
    ///     [0, 0, 1],
    /// ]));
    /// ```
    pub fn resize<const M: usize>(self) -> Matrix<T, M>
    where
        T: Zero + One + Copy,
    {
        Matrix::from_fn(|row, col| {
            if row < N && col < N {
                self.0[col][row]
            } else if row == col {
                T::ONE
            } else {
                T::ZERO
            }
        })
    }

    /// Returns the columns of the matrix.
    pub fn into_columns(self) -> [[T; N]; N] {
        self.0
    }
}

impl<T: Number> Matrix<T, 2> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    #[inline]
    pub fn determinant(&self) -> T {
        let [[a, c], [b, d]] = self.0;
        a * d - b * c
    }

    /// Returns the [adjugate] of the matrix, the transpose of its cofactor matrix.
    ///
    /// [adjugate]: https://en.wikipedia.org/wiki/Adjugate_matrix
    pub fn adjugate(&self) -> Self {
        let [[a, c], [b, d]] = self.0;
        Self::from_rows([[d, -b], [-c, a]])
    }
}

impl<T: Number> Matrix<T, 3> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        let [[a, d, g], [b, e, h], [c, f, i]] = self.0;
        a * e * i + b * f * g + c * d * h - c * e * g - b * d * i - a * f * h
    }

    /// Returns the [adjugate] of the matrix, the transpose of its cofactor matrix.
    ///
    /// [adjugate]: https://en.wikipedia.org/wiki/Adjugate_matrix
    #[rustfmt::skip]
    pub fn adjugate(&self) -> Self {
        let [[a, d, g], [b, e, h], [c, f, i]] = self.0;
        Self::from_rows([
            [e * i - f * h, c * h - b * i, b * f - c * e],
            [f * g - d * i, a * i - c * g, c * d - a * f],
            [d * h - e * g, b * g - a * h, a * e - b * d],
        ])
    }
}

impl<T: Number> Matrix<T, 4> {
    /// The 2x2 determinants of the top two rows (`s`) and of the bottom two rows (`c`), for each
    /// pair of columns. `s[k]` and `c[5 - k]` use complementary columns.
    fn sub_determinants(&self) -> ([T; 6], [T; 6]) {
        let [col0, col1, col2, col3] = self.0;
        let [a00, a10, a20, a30] = col0;
        let [a01, a11, a21, a31] = col1;
        let [a02, a12, a22, a32] = col2;
        let [a03, a13, a23, a33] = col3;
        let s = [
            a00 * a11 - a10 * a01,
            a00 * a12 - a10 * a02,
            a00 * a13 - a10 * a03,
            a01 * a12 - a11 * a02,
            a01 * a13 - a11 * a03,
            a02 * a13 - a12 * a03,
        ];
        let c = [
            a20 * a31 - a30 * a21,
            a20 * a32 - a30 * a22,
            a20 * a33 - a30 * a23,
            a21 * a32 - a31 * a22,
            a21 * a33 - a31 * a23,
            a22 * a33 - a32 * a23,
        ];
        (s, c)
    }

    /// Returns the [determinant] of the matrix.
    ///
    /// Uses the Laplace expansion along the top two rows, which sums the products of
    /// complementary 2x2 minors.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        let (s, c) = self.sub_determinants();
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }

    /// Returns the [adjugate] of the matrix, the transpose of its cofactor matrix.
    ///
    /// [adjugate]: https://en.wikipedia.org/wiki/Adjugate_matrix
    #[rustfmt::skip]
    pub fn adjugate(&self) -> Self {
        let [col0, col1, col2, col3] = self.0;
        let [a00, a10, a20, a30] = col0;
        let [a01, a11, a21, a31] = col1;
        let [a02, a12, a22, a32] = col2;
        let [a03, a13, a23, a33] = col3;
        let (s, c) = self.sub_determinants();
        Self::from_rows([
            [
                a11 * c[5] - a12 * c[4] + a13 * c[3],
                -a01 * c[5] + a02 * c[4] - a03 * c[3],
                a31 * s[5] - a32 * s[4] + a33 * s[3],
                -a21 * s[5] + a22 * s[4] - a23 * s[3],
            ],
            [
                -a10 * c[5] + a12 * c[2] - a13 * c[1],
                a00 * c[5] - a02 * c[2] + a03 * c[1],
                -a30 * s[5] + a32 * s[2] - a33 * s[1],
                a20 * s[5] - a22 * s[2] + a23 * s[1],
            ],
            [
                a10 * c[4] - a11 * c[2] + a13 * c[0],
                -a00 * c[4] + a01 * c[2] - a03 * c[0],
                a30 * s[4] - a31 * s[2] + a33 * s[0],
                -a20 * s[4] + a21 * s[2] - a23 * s[0],
            ],
            [
                -a10 * c[3] + a11 * c[1] - a12 * c[0],
                a00 * c[3] - a01 * c[1] + a02 * c[0],
                -a30 * s[3] + a31 * s[1] - a32 * s[0],
                a20 * s[3] - a21 * s[1] + a22 * s[0],
            ],
        ])
    }
}

// `inverse()` is the adjugate divided by the determinant.
macro_rules! inverse {
    ($($n:literal),+) => {
        $(
            impl<T: Float> Matrix<T, $n> {
                fn inverse_general(&self) -> Option<Self> {
                    let det = self.determinant();
                    if equal(det, T::ZERO) {
                        log::trace!("{}x{} matrix is singular, cannot invert", $n, $n);
                        return None;
                    }

                    Some(self.adjugate() * (T::ONE / det))
                }

                /// Like `inverse`, but maps a singular matrix to [`None`].
                pub fn try_inverse(&self) -> Option<Self> {
                    match self.inverse() {
                        (inv, true) => Some(inv),
                        (_, false) => None,
                    }
                }

                /// Inverts and transposes the matrix in a single step.
                ///
                /// The result is identical to `inverse()` followed by `transpose()`. A singular
                /// matrix yields `(IDENTITY, false)`.
                pub fn inverse_transpose(&self) -> (Self, bool) {
                    match self.inverse() {
                        (inv, true) => (inv.transpose(), true),
                        singular => singular,
                    }
                }
            }
        )+
    };
}
inverse!(2, 3, 4);

impl<T: Float> Matrix<T, 2> {
    /// Inverts this 2x2 matrix.
    ///
    /// Returns the inverse and `true`, or `(IDENTITY, false)` if `self` is singular (its
    /// [`determinant()`] is zero).
    ///
    /// [`determinant()`]: Self::determinant
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// assert_eq!(Mat2f::IDENTITY.inverse(), (Mat2f::IDENTITY, true));
    /// assert_eq!(Mat2f::ZERO.inverse(), (Mat2f::IDENTITY, false));
    ///
    /// let mat = Matrix::from_rows([
    ///     [4.0, 7.0],
    ///     [2.0, 6.0],
    /// ]);
    /// assert_approx_eq!(mat * mat.inverse().0, Mat2f::IDENTITY).abs(1e-6);
    /// ```
    pub fn inverse(&self) -> (Self, bool) {
        match self.inverse_general() {
            Some(inv) => (inv, true),
            None => (Self::IDENTITY, false),
        }
    }
}

impl<T: Float> Matrix<T, 3> {
    /// Inverts this 3x3 matrix.
    ///
    /// Returns the inverse and `true`, or `(IDENTITY, false)` if `self` is singular.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// let mat = Matrix::from_rows([
    ///     [2.0, 0.0, 0.0],
    ///     [0.0, 4.0, 0.0],
    ///     [0.0, 0.0, 8.0],
    /// ]);
    /// assert_eq!(mat.inverse(), (Matrix::from_diagonal([0.5, 0.25, 0.125]), true));
    /// ```
    pub fn inverse(&self) -> (Self, bool) {
        match self.inverse_general() {
            Some(inv) => (inv, true),
            None => (Self::IDENTITY, false),
        }
    }
}

impl<T: Float> Matrix<T, 4> {
    /// Returns whether the last row is exactly `[0, 0, 0, 1]`.
    ///
    /// Matrices composed of translations, rotations and scalings are affine, projections are not.
    pub fn is_affine(&self) -> bool {
        self.row(3) == [T::ZERO, T::ZERO, T::ZERO, T::ONE]
    }

    /// Inverts an affine matrix.
    ///
    /// The upper-left 3x3 block `R` is inverted on its own, and the translation `t` becomes
    /// `-(R⁻¹ · t)`. The last row is assumed to be `[0, 0, 0, 1]` and is not inspected.
    ///
    /// Returns `(IDENTITY, false)` if the 3x3 block is singular.
    pub fn inverse_affine(&self) -> (Self, bool) {
        let block = match self.resize::<3>().try_inverse() {
            Some(block) => block,
            None => return (Self::IDENTITY, false),
        };

        let translation = block * self.column(3).truncate();
        let mut inv = block.resize::<4>();
        inv.set_column(3, (-translation).extend(T::ONE));
        (inv, true)
    }

    /// Inverts this 4x4 matrix.
    ///
    /// Affine matrices take the cheaper and more accurate [`Matrix::inverse_affine`] path, all
    /// others divide the [`adjugate()`](Self::adjugate) by the determinant.
    ///
    /// Returns the inverse and `true`, or `(IDENTITY, false)` if `self` is singular.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// assert_eq!(Mat4f::IDENTITY.inverse(), (Mat4f::IDENTITY, true));
    ///
    /// let mat = Mat4f::from_translation(vec3(1.0, 2.0, 3.0));
    /// let (inv, ok) = mat.inverse();
    /// assert!(ok);
    /// assert_eq!(inv.translation(), vec3(-1.0, -2.0, -3.0));
    /// ```
    pub fn inverse(&self) -> (Self, bool) {
        if self.is_affine() {
            return self.inverse_affine();
        }

        match self.inverse_general() {
            Some(inv) => (inv, true),
            None => (Self::IDENTITY, false),
        }
    }
}

impl<T, const N: usize> Default for Matrix<T, N>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

impl<T, const N: usize> From<[[T; N]; N]> for Matrix<T, N> {
    /// Creates a matrix from an array of columns.
    fn from(columns: [[T; N]; N]) -> Self {
        Self(columns)
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Matrix<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T: fmt::Debug, const N: usize>(&'a Matrix<T, N>, usize);
        impl<'a, T: fmt::Debug, const N: usize> fmt::Debug for FormatRow<'a, T, N> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for col in 0..N {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", self.0 .0[col][self.1])?;
                }
                write!(f, "]")?;
                Ok(())
            }
        }

        let mut list = f.debug_list();
        for row in 0..N {
            list.entry(&FormatRow(self, row));
        }
        list.finish()
    }
}
