use std::{array, fmt};

use itertools::Itertools;

use crate::{
    scalar::{self, equal, equal_eps},
    traits::{Element, Number},
    Abs, Float, MinMax, One, Quat, Scalar, Zero,
};

mod ops;
mod view;

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 2-dimensional vector with [`i32`] elements.
pub type Vec2i = Vec2<i32>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 3-dimensional vector with [`i32`] elements.
pub type Vec3i = Vec3<i32>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;
/// A 4-dimensional vector with [`i32`] elements.
pub type Vec4i = Vec4<i32>;

/// An `N`-element column vector storing elements of type `T`.
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors from
///   provided values.
/// - [`Vector::splat`] creates a vector by copying the given value into each element.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each element.
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - [`Vector::ZERO`] is a vector containing all-zeroes, and `Vector::X`, `Vector::Y`,
///   `Vector::Z` and `Vector::W` are unit vectors pointing along the given axis.
///
/// # Element Access
///
/// - Elements can be accessed as fields `x`, `y`, `z`, or `w`.
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays.
/// - [`Vector::as_array`], [`Vector::as_slice`], and [`Vector::into_array`] expose the underlying
///   elements.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented to allow safe transmutation when
///   the element type `T` also allows this.
///
/// # Float and integer vectors
///
/// Operations that need square roots or tolerances (normalization, lengths, projections) are
/// available for [`Float`] element types. [`i32`] vectors get their own versions of the metric
/// operations that return [`f32`] results.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>(pub(crate) [T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self(array::from_fn(|_| elem))
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// let v = Vector::from_fn(|i| i as i32 * 2);
    /// assert_eq!(v, vec3(0, 2, 4));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original elements.
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut iter = self.0.into_iter().zip(other.0);
        Vector::from_fn(|_| match iter.next() {
            Some(pair) => pair,
            None => unreachable!("both vectors have `N` elements"),
        })
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// assert_eq!(vec3(1, 2, 3).as_slice(), &[1, 2, 3]);
    /// ```
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// assert_eq!(vec3(1, 2, 3).into_array(), [1, 2, 3]);
    /// ```
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
    /// assert_eq!(vec2(4.0, 7.0).dot(vec2(2.0, -4.0)), -20.0);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.into_array()
            .into_iter()
            .zip(other.into_array())
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// assert_eq!(vec2(4, 0).length2(), 16);
    /// ```
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the squared euclidean distance between `self` and `other`.
    pub fn distance2(self, other: Self) -> T
    where
        T: Number,
    {
        (other - self).length2()
    }

    /// Returns a vector with the absolute value of each element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// assert_eq!(vec2(-2, 9).abs(), vec2(2, 9));
    /// ```
    pub fn abs(self) -> Self
    where
        T: Abs,
    {
        self.map(T::abs)
    }

    /// Returns whether any element is zero, ie. whether the vector lies in a plane spanned by the
    /// coordinate axes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// assert!(vec2(0.0, 32.0).is_orthogonal());
    /// assert!(!vec3(2, 2, 5).is_orthogonal());
    /// ```
    pub fn is_orthogonal(&self) -> bool
    where
        T: Zero + PartialEq,
    {
        self.0.iter().any(|elem| *elem == T::ZERO)
    }

    /// Element-wise minimum between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// let a = vec3(-1.0, 2.0, f32::NAN);
    /// let b = vec3(3.0, f32::NEG_INFINITY, 0.0);
    /// assert_eq!(a.min(b), vec3(-1.0, f32::NEG_INFINITY, 0.0));
    /// ```
    pub fn min(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].min(other[i]))
    }

    /// Element-wise maximum between `self` and `other`.
    pub fn max(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].max(other[i]))
    }

    /// Element-wise range clamp of the elements in `self` between `min` and `max`.
    pub fn clamp(self, min: Self, max: Self) -> Self
    where
        T: PartialOrd + Copy,
    {
        Self::from_fn(|i| scalar::clamp(self[i], min[i], max[i]))
    }

    /// Clamps every element of `self` to the range `[min, max]`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// assert_eq!(vec2(-8.0, 12.0).clamp_scalar(-5.0, 5.0), vec2(-5.0, 5.0));
    /// ```
    pub fn clamp_scalar(self, min: T, max: T) -> Self
    where
        T: PartialOrd + Copy,
    {
        self.map(|elem| scalar::clamp(elem, min, max))
    }
}

impl<T: Float, const N: usize> Vector<T, N> {
    /// Returns the length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// assert_eq!(Vec3f::Z.length(), 1.0);
    /// assert_eq!(vec2(0.0, -5.0).length(), 5.0);
    /// ```
    pub fn length(&self) -> T {
        self.length2().sqrt()
    }

    /// Returns the euclidean distance between `self` and `other`.
    pub fn distance(self, other: Self) -> T {
        (other - self).length()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// A vector whose length is (approximately) zero is returned as [`Vector::ZERO`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// assert_eq!(vec3(0.0, 0.0, 4.0).normalize(), vec3(0.0, 0.0, 1.0));
    /// assert_eq!(Vec3f::ZERO.normalize(), Vec3f::ZERO);
    /// ```
    pub fn normalize(self) -> Self {
        let length = self.length();
        if equal(length, T::ZERO) {
            log::trace!("normalizing zero-length vector");
            return Self::ZERO;
        }
        self / length
    }

    /// Returns whether every element is (approximately) zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|elem| equal(*elem, T::ZERO))
    }

    /// Projects `self` onto `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// assert_eq!(vec3(1.0, 2.0, 9.0).project(vec3(0.0, 0.0, 4.5)), vec3(0.0, 0.0, 9.0));
    /// ```
    pub fn project(self, other: Self) -> Self {
        other * (self.dot(other) / other.length2())
    }

    /// Linearly interpolates between `self` (at `t = 0`) and `other` (at `t = 1`).
    pub fn lerp(self, other: Self, t: T) -> Self {
        self * (T::ONE - t) + other * t
    }

    /// Computes the smallest positive angle between `self` and `other`, in radians.
    ///
    /// Both `self` and `other` must have non-zero length for the result to be meaningful.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// use std::f32::consts::PI;
    ///
    /// assert_approx_eq!(Vec3f::Y.angle(Vec3f::X), PI / 2.0);
    /// assert_approx_eq!(Vec3f::Y.angle(-Vec3f::Y), PI);
    /// ```
    pub fn angle(self, other: Self) -> T {
        let cos = self.dot(other) / (self.length() * other.length());
        scalar::clamp(cos, -T::ONE, T::ONE).acos()
    }

    /// Returns whether `self` and `other` point in the same direction, using `epsilon` as the
    /// relative tolerance.
    ///
    /// Unlike parallelism, collinearity also requires the signs of all elements to match, so
    /// vectors pointing in opposite directions are not collinear.
    pub fn is_collinear_eps(self, other: Self, epsilon: T) -> bool
    where
        Self: Parallel<T>,
    {
        self.is_parallel_eps(other, epsilon)
            && self
                .0
                .iter()
                .zip(&other.0)
                .all(|(a, b)| a.is_sign_negative() == b.is_sign_negative())
    }

    /// Like [`Vector::is_collinear_eps`], with the default tolerance.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// assert!(vec2(1.0, 1.0).is_collinear(vec2(5.0, 5.0)));
    /// assert!(!vec2(1.0, 1.0).is_collinear(vec2(-1.0, -1.0)));
    /// ```
    pub fn is_collinear(self, other: Self) -> bool
    where
        Self: Parallel<T>,
    {
        self.is_collinear_eps(other, T::DEFAULT_EPSILON)
    }

    /// Returns whether `self` and `other` are parallel, using [`Float::DEFAULT_EPSILON`] as the
    /// relative tolerance.
    ///
    /// Vectors pointing in opposite directions are parallel too.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// assert!(vec2(1.0, 1.0).is_parallel(vec2(-1.0, -1.0)));
    /// assert!(!vec3(1.0, 1.0, 1.0).is_parallel(vec3(-1.0, 2.0, 1.0)));
    /// ```
    pub fn is_parallel(self, other: Self) -> bool
    where
        Self: Parallel<T>,
    {
        self.is_parallel_eps(other, T::DEFAULT_EPSILON)
    }

    /// Converts each element to [`i32`], truncating towards zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// assert_eq!(vec2(-3.7, 4.5).to_i32(), vec2(-3, 4));
    /// ```
    pub fn to_i32(self) -> Vector<i32, N> {
        self.map(T::to_i32)
    }

    /// Rounds each element to the nearest integer, rounding half-way cases away from zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// assert_eq!(vec2(-3.7, 4.5).round(), vec2(-4, 5));
    /// ```
    pub fn round(self) -> Vector<i32, N> {
        self.map(|elem| elem.round().to_i32())
    }
}

/// Parallelism test, implemented for 2D and 3D float vectors.
///
/// In 2D, two vectors are parallel when the magnitude of their cross product is zero; in 3D, when
/// the squared length of their cross product is.
pub trait Parallel<T> {
    /// Returns whether `self` and `other` are parallel, using `epsilon` as the relative tolerance.
    fn is_parallel_eps(self, other: Self, epsilon: T) -> bool;
}

impl<T: Float> Parallel<T> for Vector<T, 2> {
    fn is_parallel_eps(self, other: Self, epsilon: T) -> bool {
        equal_eps(self.x * other.y, self.y * other.x, epsilon)
    }
}

impl<T: Float> Parallel<T> for Vector<T, 3> {
    fn is_parallel_eps(self, other: Self, epsilon: T) -> bool {
        equal_eps(self.cross(other).length2(), T::ZERO, epsilon)
    }
}

impl<const N: usize> Vector<i32, N> {
    /// Converts each element to [`f32`].
    pub fn to_f32(self) -> Vector<f32, N> {
        self.map(|elem| elem as f32)
    }

    /// Returns the length of this vector as an [`f32`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// assert_eq!(vec2(3, -4).length(), 5.0);
    /// ```
    pub fn length(&self) -> f32 {
        self.to_f32().length()
    }

    /// Returns the euclidean distance between `self` and `other` as an [`f32`].
    pub fn distance(self, other: Self) -> f32 {
        (other - self).length()
    }

    /// Returns whether every element is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Projects `self` onto `other`, yielding a float vector.
    pub fn project(self, other: Self) -> Vector<f32, N> {
        self.to_f32().project(other.to_f32())
    }

    fn same_signs(self, other: Self) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| (*a >= 0) == (*b >= 0))
    }
}

impl Vector<i32, 2> {
    /// Returns whether `self` and `other` are parallel (or anti-parallel).
    pub fn is_parallel(self, other: Self) -> bool {
        self.cross_z(other) == 0
    }

    /// Returns whether `self` and `other` point in the same direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// assert!(vec2(1, 1).is_collinear(vec2(5, 5)));
    /// assert!(!vec2(0, 1).is_collinear(vec2(0, -1)));
    /// ```
    pub fn is_collinear(self, other: Self) -> bool {
        self.is_parallel(other) && self.same_signs(other)
    }
}

impl Vector<i32, 3> {
    /// Returns whether `self` and `other` are parallel (or anti-parallel).
    pub fn is_parallel(self, other: Self) -> bool {
        self.cross(other) == Self::ZERO
    }

    /// Returns whether `self` and `other` point in the same direction.
    pub fn is_collinear(self, other: Self) -> bool {
        self.is_parallel(other) && self.same_signs(other)
    }
}

impl<T> Vector<T, 2> {
    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// let v = vec2(-1.0, 2.0).extend(5.0);
    /// assert_eq!(v, vec3(-1.0, 2.0, 5.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.into_array();
        [x, y, value].into()
    }

    /// Computes the magnitude (Z component) of the cross product of `self` and `other`, extended
    /// into 3 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// assert_eq!(vec2(0, 1).cross_z(vec2(1, 0)), -1);
    /// assert_eq!(vec2(5.0, -3.0).cross_z(vec2(4.0, 7.0)), 47.0);
    /// ```
    pub fn cross_z(self, other: Self) -> T
    where
        T: Number,
    {
        self.x * other.y - self.y * other.x
    }

    /// Returns a vector perpendicular to `self`, on its left or right side.
    ///
    /// This assumes that the Y axis points up, and the X axis points to the right.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// assert_eq!(vec2(1, 2).normal(true), vec2(-2, 1));
    /// assert_eq!(vec2(1, 2).normal(false), vec2(2, -1));
    /// ```
    pub fn normal(self, on_left: bool) -> Self
    where
        T: Number,
    {
        if on_left {
            vec2(-self.y, self.x)
        } else {
            vec2(self.y, -self.x)
        }
    }
}

impl<T: Float> Vector<T, 2> {
    /// Returns the angle between `self` and the X axis, in radians, in the range `[-π, π]`.
    pub fn flat_angle(self) -> T {
        self.y.atan2(self.x)
    }

    /// Returns the signed angle that `self` needs to be rotated counter-clockwise by to point in
    /// the direction of `other`.
    ///
    /// The result is the raw difference of the two flat angles and is not normalized.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// use std::f32::consts::PI;
    ///
    /// assert_approx_eq!(Vec2f::X.angle_to(Vec2f::Y), PI / 2.0);
    /// assert_approx_eq!(Vec2f::X.angle_to(-Vec2f::Y), -PI / 2.0);
    /// ```
    pub fn angle_to(self, other: Self) -> T {
        other.flat_angle() - self.flat_angle()
    }

    /// Rotates `self` counter-clockwise by `radians`, keeping its length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// use std::f32::consts::PI;
    ///
    /// assert_approx_eq!(vec2(2.0, 0.0).rotate(PI / 2.0), vec2(0.0, 2.0)).abs(1e-6);
    /// ```
    pub fn rotate(self, radians: T) -> Self {
        scalar::angle_to_vector(self.flat_angle() + radians, self.length())
    }
}

impl<T> Vector<T, 3> {
    /// Removes the last element of this vector, yielding a vector with 2 elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// let v = vec3(-1.0, 2.0, 3.5).truncate();
    /// assert_eq!(v, vec2(-1.0, 2.0));
    /// ```
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, ..] = self.into_array();
        [x, y].into()
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.into_array();
        [x, y, z, value].into()
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is a vector that is perpendicular to both `self` and `other`. Its direction
    /// depends on the order of the arguments: swapping them will invert the direction of the
    /// resulting vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// let x = Vec3f::X;
    /// let y = Vec3f::Y;
    /// let z = Vec3f::Z;
    /// assert_eq!(x.cross(y), z);
    /// assert_eq!(y.cross(x), -z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [a1, a2, a3] = self.into_array();
        let [b1, b2, b3] = other.into_array();

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }
}

impl<T: Float> Vector<T, 3> {
    /// Returns the shortest-arc rotation that turns the direction of `self` into that of `dest`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// use std::f32::consts::PI;
    ///
    /// let rot = Vec3f::Y.rotation_to(Vec3f::Z);
    /// assert_approx_eq!(rot, Quat::from_axis_angle(Vec3f::X, PI / 2.0)).abs(1e-6);
    /// ```
    pub fn rotation_to(self, dest: Self) -> Quat<T> {
        let from = self.normalize();
        let dest = dest.normalize();
        let dot = from.dot(dest);

        if dot <= -T::ONE + T::DEFAULT_EPSILON {
            // Opposite directions: rotate by half a turn around any perpendicular axis.
            let mut axis = Self::X.cross(from);
            if axis.length() < T::DEFAULT_EPSILON {
                axis = Self::Y.cross(from);
            }
            return Quat::from_axis_angle(axis.normalize(), T::PI);
        }
        if dot >= T::ONE - T::DEFAULT_EPSILON {
            return Quat::IDENTITY;
        }

        let axis = from.cross(dest);
        Quat::new(T::ONE + dot, axis.x, axis.y, axis.z).normalize()
    }

    /// Rotates `self` around an axis parallel to X that passes through `origin`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// use std::f32::consts::PI;
    ///
    /// let p = vec3(7.0, 0.0, 1.0).rotate_x_about(Vec3f::ZERO, PI / 2.0);
    /// assert_approx_eq!(p, vec3(7.0, -1.0, 0.0)).abs(1e-6);
    /// ```
    pub fn rotate_x_about(self, origin: Self, radians: T) -> Self {
        let v = self - origin;
        let (sin, cos) = radians.sin_cos();
        vec3(v.x, v.y * cos - v.z * sin, v.y * sin + v.z * cos) + origin
    }

    /// Rotates `self` around an axis parallel to Y that passes through `origin`.
    pub fn rotate_y_about(self, origin: Self, radians: T) -> Self {
        let v = self - origin;
        let (sin, cos) = radians.sin_cos();
        vec3(v.z * sin + v.x * cos, v.y, v.z * cos - v.x * sin) + origin
    }

    /// Rotates `self` around an axis parallel to Z that passes through `origin`.
    pub fn rotate_z_about(self, origin: Self, radians: T) -> Self {
        let v = self - origin;
        let (sin, cos) = radians.sin_cos();
        vec3(v.x * cos - v.y * sin, v.x * sin + v.y * cos, v.z) + origin
    }
}

impl<T> Vector<T, 4> {
    /// Removes the last element of this vector, yielding a vector with 3 elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// assert_eq!(vec4(1, 2, 3, 4).truncate(), vec3(1, 2, 3));
    /// ```
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, ..] = self.into_array();
        [x, y, z].into()
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

/// Renders the vector as `Vec3f[1.000000 x 2.000000 x 3.000000]`.
///
/// A precision given in the format string (`{:.2}`) is applied to every element.
impl<T: Scalar, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec{}{}[", N, T::SUFFIX)?;
        fmt::Display::fmt(
            &self.0.iter().format_with(" x ", |elem, g| g(&Element(*elem))),
            f,
        )?;
        f.write_str("]")
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use crate::approx::ApproxEq;

    use super::*;

    #[test]
    fn access() {
        assert_eq!(Vec3f::X.x, 1.0);
        assert_eq!(Vec3f::X[0], 1.0);
        assert_eq!(Vec3f::X[1], 0.0);
        assert_eq!(Vec3f::X.y, 0.0);
        assert_eq!(Vec3f::Y.y, 1.0);
        assert_eq!(Vec3f::Y.z, 0.0);
        assert_eq!(Vec4f::W.w, 1.0);

        let mut v = vec2(0, 1);
        v.x = 777;
        assert_eq!(v.x, 777);
        assert_eq!(v[0], 777);
        v[1] = 9;
        assert_eq!(v.y, 9);
        assert_eq!(v, [777, 9]);
    }

    #[test]
    fn fmt() {
        assert_eq!(vec2(5.0f32, -3.1).to_string(), "Vec2f[5.000000 x -3.100000]");
        assert_eq!(vec3(1, -2, 3).to_string(), "Vec3i[1 x -2 x 3]");
        assert_eq!(
            Vec4f::W.to_string(),
            "Vec4f[0.000000 x 0.000000 x 0.000000 x 1.000000]"
        );
        assert_eq!(format!("{:.0}", vec2(5.0f32, -3.1)), "Vec2f[5 x -3]");
        assert_eq!(format!("{}", vec2(0.5f64, 1.0)), "Vec2d[0.500000 x 1.000000]");
        assert_eq!(format!("{:?}", Vec4f::W), "(0.0, 0.0, 0.0, 1.0)");
    }

    #[test]
    fn arithmetic() {
        assert_eq!(vec2(2.0, 9.0) + vec2(2.0, -3.0), vec2(4.0, 6.0));
        assert_eq!(vec2(2.0, 9.0) + 2.0, vec2(4.0, 11.0));
        assert_eq!(vec2(4.0, 1.0) - 3.0, vec2(1.0, -2.0));
        assert_eq!(vec3(3.0, 9.0, 2.0) * vec3(2.0, -3.0, 8.0), vec3(6.0, -27.0, 16.0));
        assert_eq!(vec2(4.0, 1.0) * -3.0, vec2(-12.0, -3.0));
        assert_eq!(vec2(12.0, 56.0) / vec2(4.0, -7.0), vec2(3.0, -8.0));
        assert_eq!(vec2(20.0, 56.0) / 8.0, vec2(2.5, 7.0));
        assert_eq!(-vec2(-6.0, 4.0), vec2(6.0, -4.0));

        assert_eq!(vec2(12, 56) / vec2(4, -7), vec2(3, -8));
        assert_eq!(vec3(4, 9, -1) * 2, vec3(8, 18, -2));

        let mut v = vec3(1, 2, 3);
        v += vec3(1, 1, 1);
        v -= 1;
        v *= 3;
        v /= vec3(1, 2, 3);
        assert_eq!(v, vec3(3, 3, 3));
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
        assert_eq!(vec3(1, 3, -5).dot(vec3(1, 3, -5)), 35);

        assert_eq!(Vec2f::X.dot(Vec2f::X), 1.0);
        assert_eq!(Vec2f::X.dot(Vec2f::Y), 0.0);
        assert_eq!(vec2(4.0, 7.0).dot(vec2(2.0, -4.0)), -20.0);
    }

    #[test]
    fn length_and_distance() {
        assert_eq!(vec2(5.0, 0.0).length(), 5.0);
        assert_approx_eq!(vec2(2.0f32, 1.0).length(), 2.236068).abs(1e-6);
        assert_approx_eq!(vec3(2.0f32, 1.0, 3.0).length(), 3.7416575).abs(1e-6);
        assert_eq!(vec3(0.0, 0.0, 8.0).length2(), 64.0);

        assert_eq!(vec2(0.0, 0.0).distance(vec2(2.0, 0.0)), 2.0);
        assert_approx_eq!(vec2(3.0f32, -4.0).distance(vec2(1.0, 8.0)), 12.165525).abs(1e-5);
        assert_eq!(vec2(3.0, -4.0).distance2(vec2(3.0, -4.0)), 0.0);

        assert_eq!(vec2(3, 4).length(), 5.0);
        assert_eq!(vec2(3, 4).length2(), 25);
        assert_eq!(vec3(1, 1, 1).distance(vec3(1, 1, 3)), 2.0);
        assert_eq!(vec3(1, 1, 1).distance2(vec3(1, 1, 3)), 4);
    }

    #[test]
    fn normalize() {
        assert_eq!(vec3(8.0, 0.0, 0.0).normalize(), Vec3f::X);
        assert_eq!(vec3(0.0, -54.0, 0.0).normalize(), -Vec3f::Y);
        assert_approx_eq!(
            vec3(12.0f32, 6.0, 3.0).normalize(),
            vec3(0.872872, 0.436436, 0.218218)
        )
        .abs(1e-6);
        assert_eq!(Vec2f::ZERO.normalize(), Vec2f::ZERO);
        assert_eq!(Vec3f::ZERO.normalize(), Vec3f::ZERO);
        assert_eq!(Vec4f::ZERO.normalize(), Vec4f::ZERO);
        assert_approx_eq!(vec4(1.0f32, 1.0, 1.0, 1.0).normalize().length(), 1.0);
    }

    #[test]
    fn is_zero() {
        assert!(vec2(0.0, 0.0).is_zero());
        assert!(!vec2(0.0001, 0.0).is_zero());
        assert!(!vec4(0.0, 0.0, 0.0, 0.0001).is_zero());
        assert!(vec3(0, 0, 0).is_zero());
        assert!(!vec3(0, 1, 0).is_zero());
    }

    #[test]
    fn approx_equality() {
        assert!(vec2(6.0, 7.0).approx_eq(&vec2(6.0, 7.0)));
        assert!(!vec2(6.0, 7.0).approx_eq(&vec2(7.0, 6.0)));
        assert!(vec3(1.0, 2.0, 3.0).eq_eps(&vec3(1.0, 2.0, 3.001), 1e-3));
    }

    #[test]
    fn orthogonal() {
        assert!(vec2(2.0, 0.0).is_orthogonal());
        assert!(vec2(0, -12).is_orthogonal());
        assert!(!vec2(2.0, 2.0).is_orthogonal());
        assert!(!vec2(-0.0001, 1.0).is_orthogonal());
        assert!(vec3(-12.0, -7.0, 0.0).is_orthogonal());
        assert!(!vec3(-0.0001, 1.0, -3.0).is_orthogonal());
    }

    #[test]
    fn clamp() {
        assert_eq!(vec2(0.0, 0.0).clamp_scalar(-5.0, 5.0), vec2(0.0, 0.0));
        assert_eq!(vec2(-8.0, -9.0).clamp_scalar(-5.0, 5.0), vec2(-5.0, -5.0));
        assert_eq!(vec2(8, 12).clamp_scalar(-5, 5), vec2(5, 5));
        assert_eq!(
            vec3(-1.0, 2.0, 7.0).clamp(Vec3f::ZERO, vec3(1.0, 1.0, 10.0)),
            vec3(0.0, 1.0, 7.0)
        );
        assert_eq!(vec2(-1, 5).min(vec2(3, -2)), vec2(-1, -2));
        assert_eq!(vec2(-1, 5).max(vec2(3, -2)), vec2(3, 5));
    }

    #[test]
    fn project() {
        assert_eq!(vec3(0.0, 1.0, 0.0).project(Vec3f::X), Vec3f::ZERO);
        assert_eq!(vec3(1.0, 2.0, 3.0).project(vec3(2.0, 0.0, 0.0)), Vec3f::X);
        assert_eq!(
            vec3(2.0, 0.0, 1.0).project(vec3(0.0, 1.0, 1.0)),
            vec3(0.0, 0.5, 0.5)
        );
        assert_eq!(vec2(1, 0).project(vec2(1, 1)), vec2(0.5, 0.5));
    }

    #[test]
    fn lerp() {
        let a = vec2(-1.0, 0.0);
        let b = vec2(1.0, 0.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 0.25), vec2(-0.5, 0.0));
        assert_eq!(a.lerp(b, 0.5), vec2(0.0, 0.0));
        assert_eq!(a.lerp(b, 0.75), vec2(0.5, 0.0));
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(
            vec3(0.0, 0.0, 1.0).lerp(vec3(0.0, 1.0, 0.0), 0.5),
            vec3(0.0, 0.5, 0.5)
        );
    }

    #[test]
    fn angle() {
        assert_approx_eq!(vec3(1.0, 0.0, 0.0).angle(vec3(0.0, 1.0, 0.0)), PI / 2.0);
        assert_approx_eq!(vec3(8.0, 0.0, 0.0).angle(vec3(-2.0, 0.0, 0.0)), PI);
        assert_approx_eq!(vec3(0.0, 0.0, 7.0).angle(vec3(0.0, 0.0, -4.0)), PI);
        assert_approx_eq!(vec3(1.0, 1.0, 0.0).angle(vec3(-4.0, 4.0, 0.0)), PI / 2.0);
        assert_approx_eq!(vec2(1.0, 1.0).angle(vec2(1.0, -1.0)), PI / 2.0);
    }

    #[test]
    fn flat_angles() {
        assert_eq!(vec2(0.0f32, 0.0).angle_to(vec2(5.0, 0.0)), 0.0);
        assert_approx_eq!(vec2(1.0, 0.0).angle_to(vec2(0.0, 1.0)), PI / 2.0);
        assert_approx_eq!(vec2(8.0, 0.0).angle_to(vec2(-2.0, 0.0)), PI);
        assert_approx_eq!(vec2(1.0, 0.0).angle_to(vec2(0.0, -1.0)), -PI / 2.0);
        assert_approx_eq!(vec2(1.0, 1.0).angle_to(vec2(-4.0, 4.0)), PI / 2.0).abs(1e-6);

        assert_eq!(vec2(6.0f32, 0.0).flat_angle(), 0.0);
        assert_approx_eq!(vec2(1.0, 1.0).flat_angle(), PI / 4.0);
        assert_approx_eq!(vec2(-5.0, 0.0).flat_angle(), PI);
        assert_approx_eq!(
            scalar::normalize_radians(vec2(0.0, -2.0).flat_angle()),
            1.5 * PI
        )
        .abs(1e-6);
    }

    #[test]
    fn rotate_2d() {
        assert_approx_eq!(vec2(3.0, 0.0).rotate(PI), vec2(-3.0, 0.0)).abs(1e-6);
        assert_approx_eq!(vec2(0.0, 1.0).rotate(-PI / 2.0), Vec2f::X).abs(1e-6);
        assert_eq!(Vec2f::ZERO.rotate(1.0), Vec2f::ZERO);
    }

    #[test]
    fn cross() {
        assert_eq!(vec2(0.0, 1.0).cross_z(vec2(1.0, 0.0)), -1.0);
        assert_eq!(vec2(0, 2).cross_z(vec2(3, 0)), -6);
        assert_eq!(vec2(5, -3).cross_z(vec2(4, 7)), 47);
        assert_eq!(Vec3i::X.cross(Vec3i::Y), Vec3i::Z);
        assert_eq!(Vec3i::Z.cross(Vec3i::Y), -Vec3i::X);
    }

    #[test]
    fn normal() {
        assert_eq!(vec2(1.0, 0.0).normal(true), vec2(-0.0, 1.0));
        assert_eq!(vec2(1.0, 0.0).normal(false), vec2(0.0, -1.0));
        assert_eq!(vec2(3, 4).normal(true), vec2(-4, 3));
    }

    #[test]
    fn parallel_and_collinear() {
        assert!(vec2(1.0, 1.0).is_parallel(vec2(5.0, 5.0)));
        assert!(vec2(1.0, 1.0).is_parallel(vec2(-1.0, -1.0)));
        assert!(vec2(1.0, 0.0).is_parallel(vec2(1.0, 0.0)));
        assert!(!vec2(1.0, 1.0).is_parallel(vec2(-1.0, 2.0)));

        assert!(vec2(0.0, 1.0).is_collinear(vec2(0.0, 1.0)));
        assert!(!vec2(0.0, 1.0).is_collinear(vec2(0.0, -1.0)));
        assert!(!vec2(1.0, 1.0).is_collinear(vec2(-1.0, 2.0)));

        assert!(vec3(1.0, 1.0, 1.0).is_parallel(vec3(-1.0, -1.0, -1.0)));
        assert!(vec3(2.0, 1.0, 0.0).is_parallel(vec3(2.0, 1.0, 0.0)));
        assert!(!vec3(1.0, 1.0, 1.0).is_parallel(vec3(-1.0, 2.0, 1.0)));
        assert!(vec3(1.0, 1.0, 1.0).is_collinear(vec3(5.0, 5.0, 5.0)));
        assert!(!vec3(1.0, 1.0, 1.0).is_collinear(vec3(-1.0, -1.0, -1.0)));
        assert!(vec2(1.0, 1.0).is_parallel_eps(vec2(1.0, 1.001), 1e-3));

        assert!(vec2(2, 4).is_parallel(vec2(-1, -2)));
        assert!(!vec2(2, 4).is_collinear(vec2(-1, -2)));
        assert!(vec2(2, 4).is_collinear(vec2(1, 2)));
        assert!(vec3(1, 2, 3).is_parallel(vec3(-2, -4, -6)));
        assert!(!vec3(1, 2, 3).is_collinear(vec3(-2, -4, -6)));
        assert!(!vec3(1, 2, 3).is_parallel(vec3(1, 2, 4)));
    }

    #[test]
    fn rotate_about_axes() {
        let pi = PI;
        assert_approx_eq!(Vec3f::ZERO.rotate_x_about(Vec3f::ZERO, pi), Vec3f::ZERO);
        assert_approx_eq!(
            vec3(-5.0, -1.0, 0.0).rotate_x_about(Vec3f::ZERO, -pi / 2.0),
            vec3(-5.0, 0.0, 1.0)
        )
        .abs(1e-6);
        assert_approx_eq!(
            vec3(0.0, 5.0, 0.0).rotate_x_about(vec3(0.0, 2.5, 0.0), pi),
            Vec3f::ZERO
        )
        .abs(1e-6);

        assert_approx_eq!(
            vec3(0.0, 7.0, 1.0).rotate_y_about(Vec3f::ZERO, pi / 2.0),
            vec3(1.0, 7.0, 0.0)
        )
        .abs(1e-6);
        assert_approx_eq!(
            vec3(5.0, 0.0, 0.0).rotate_y_about(vec3(5.0, 0.0, 0.0), pi),
            vec3(5.0, 0.0, 0.0)
        )
        .abs(1e-6);

        assert_approx_eq!(
            vec3(1.0, 0.0, 7.0).rotate_z_about(Vec3f::ZERO, pi / 2.0),
            vec3(0.0, 1.0, 7.0)
        )
        .abs(1e-6);
        assert_approx_eq!(
            vec3(0.0, -1.0, -5.0).rotate_z_about(Vec3f::ZERO, -pi / 2.0),
            vec3(-1.0, 0.0, -5.0)
        )
        .abs(1e-6);
    }

    #[test]
    fn rotation_to() {
        let rot = Vec3f::Y.rotation_to(Vec3f::Z);
        assert_approx_eq!(rot, Quat::from_axis_angle(Vec3f::X, PI / 2.0)).abs(1e-6);
        let rot = Vec3f::Z.rotation_to(Vec3f::X);
        assert_approx_eq!(rot, Quat::from_axis_angle(Vec3f::Y, PI / 2.0)).abs(1e-6);
        let rot = Vec3f::X.rotation_to(Vec3f::Y);
        assert_approx_eq!(rot, Quat::from_axis_angle(Vec3f::Z, PI / 2.0)).abs(1e-6);

        assert_eq!(Vec3f::Y.rotation_to(Vec3f::Y), Quat::IDENTITY);

        let rot = Vec3f::X.rotation_to(-Vec3f::X);
        assert_approx_eq!(rot, Quat::from_axis_angle(Vec3f::Z, -PI)).abs(1e-6);
        assert_approx_eq!(rot.rotate_vec(Vec3f::X), -Vec3f::X).abs(1e-6);
    }

    #[test]
    fn conversions() {
        assert_eq!(vec3(-6.0, 7.0, 5.0).round(), vec3(-6, 7, 5));
        assert_eq!(vec3(-6.5, 7.4, 5.5).round(), vec3(-7, 7, 6));
        assert_eq!(vec4(-6.5, 7.4, 5.5, 0.9).to_i32(), vec4(-6, 7, 5, 0));
        assert_eq!(vec2(3, -4).to_f32(), vec2(3.0, -4.0));
        assert_eq!(vec2(1, 2).extend(3).extend(4), vec4(1, 2, 3, 4));
        assert_eq!(vec4(1, 2, 3, 4).truncate().truncate(), vec2(1, 2));
        assert_eq!(vec2(-2, 9).abs(), vec2(2, 9));
        assert_eq!(vec3(-2.0, 9.0, -0.5).abs(), vec3(2.0, 9.0, 0.5));
    }
}
