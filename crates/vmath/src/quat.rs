use std::fmt;

use crate::{
    scalar::{clamp, equal},
    vec3, vec4, Float, Mat3, Mat4, One, Scalar, Vec3, Vec4, Zero,
};

mod ops;

/// A quaternion consisting of a real part `w` and the 3 imaginary parts `x`, `y` and `z`.
///
/// Unit-length quaternions ("*versors*") are used to represent rotations in 3D space. Nothing
/// enforces unit length; operations that only make sense for rotations assume it.
///
/// # Construction
///
/// - [`Quat::new`] takes the raw components, `w` first.
/// - [`Quat::from_axis_angle`] and [`Quat::from_euler`] describe a rotation.
/// - [`Quat::IDENTITY`] is the rotation that does nothing.
/// - [`Vector::rotation_to`][crate::Vector::rotation_to] returns the shortest rotation between
///   two directions, and [`Matrix::rotation`][crate::Matrix::rotation] extracts one from a
///   transform.
///
/// # Operators
///
/// `+`, `-`, and multiplication or division by a scalar work component-wise. Multiplying two
/// quaternions computes the Hamilton product, which composes rotations: `a * b` rotates by `b`
/// first, then by `a`. Multiplying a quaternion with a [`Vec3`] rotates the vector.
#[derive(Clone, Copy, Debug, PartialEq, Hash)]
#[repr(C)]
pub struct Quat<T> {
    pub w: T,
    pub x: T,
    pub y: T,
    pub z: T,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quat<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quat<T> {}

impl<T: Zero + One> Quat<T> {
    /// The multiplicative identity.
    ///
    /// This is a unit quaternion that will not change a vector it is multiplied with.
    pub const IDENTITY: Self = Self::new(T::ONE, T::ZERO, T::ZERO, T::ZERO);
}

impl<T> Quat<T> {
    /// Creates a quaternion from its real part `w` and its imaginary parts `x`, `y` and `z`.
    #[inline]
    pub const fn new(w: T, x: T, y: T, z: T) -> Self {
        Self { w, x, y, z }
    }

    /// Creates a quaternion from a `(w, x, y, z)` vector.
    pub fn from_vec4(vec: Vec4<T>) -> Self {
        let [w, x, y, z] = vec.into_array();
        Self::new(w, x, y, z)
    }

    /// Returns the components as a `(w, x, y, z)` vector.
    pub fn to_vec4(self) -> Vec4<T> {
        vec4(self.w, self.x, self.y, self.z)
    }
}

impl<T: Float> Quat<T> {
    /// Creates a rotation of `radians` around `axis`.
    ///
    /// `axis` does not need to be normalized.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// use std::f32::consts::PI;
    ///
    /// let quat = Quat::from_axis_angle(vec3(0.0, 1.0, 1.0), PI / 2.0);
    /// assert_approx_eq!(quat, Quat::new(0.707107, 0.0, 0.5, 0.5)).abs(1e-6);
    /// ```
    pub fn from_axis_angle(axis: Vec3<T>, radians: T) -> Self {
        let axis = axis.normalize();
        let (sin, cos) = (radians * T::HALF).sin_cos();
        Self::new(cos, axis.x * sin, axis.y * sin, axis.z * sin)
    }

    /// Creates a rotation from Euler angles: `yaw` around Z, `pitch` around Y and `roll` around
    /// X, all in radians.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// use std::f32::consts::PI;
    ///
    /// let quat = Quat::from_euler(PI / 2.0, 0.0, 0.0);
    /// assert_approx_eq!(quat, Quat::from_axis_angle(Vec3f::Z, PI / 2.0)).abs(1e-6);
    /// ```
    pub fn from_euler(yaw: T, pitch: T, roll: T) -> Self {
        let (sin_y, cos_y) = (yaw * T::HALF).sin_cos();
        let (sin_p, cos_p) = (pitch * T::HALF).sin_cos();
        let (sin_r, cos_r) = (roll * T::HALF).sin_cos();
        Self::new(
            cos_r * cos_p * cos_y + sin_r * sin_p * sin_y,
            sin_r * cos_p * cos_y - cos_r * sin_p * sin_y,
            cos_r * sin_p * cos_y + sin_r * cos_p * sin_y,
            cos_r * cos_p * sin_y - sin_r * sin_p * cos_y,
        )
    }

    /// Converts the rotation into Euler angles, returned as `(yaw, pitch, roll)`.
    ///
    /// Pitch is limited to `[-π/2, π/2]`; values beyond that (from rounding or non-unit
    /// quaternions) are clamped.
    pub fn to_euler(self) -> (T, T, T) {
        let Self { w, x, y, z } = self;

        let sin_r_cos_p = T::TWO * (w * x + y * z);
        let cos_r_cos_p = T::ONE - T::TWO * (x * x + y * y);
        let roll = sin_r_cos_p.atan2(cos_r_cos_p);

        let sin_p = T::TWO * (w * y - z * x);
        let pitch = if sin_p.abs() >= T::ONE {
            (T::PI * T::HALF).copysign(sin_p)
        } else {
            sin_p.asin()
        };

        let sin_y_cos_p = T::TWO * (w * z + x * y);
        let cos_y_cos_p = T::ONE - T::TWO * (y * y + z * z);
        let yaw = sin_y_cos_p.atan2(cos_y_cos_p);

        (yaw, pitch, roll)
    }

    /// Applies a rotation of `radians` around the X axis before `self`.
    pub fn rotate_x(self, radians: T) -> Self {
        let (sin, cos) = (radians * T::HALF).sin_cos();
        Self::new(
            self.w * cos - self.x * sin,
            self.x * cos + self.w * sin,
            self.y * cos + self.z * sin,
            self.z * cos - self.y * sin,
        )
    }

    /// Applies a rotation of `radians` around the Y axis before `self`.
    pub fn rotate_y(self, radians: T) -> Self {
        let (sin, cos) = (radians * T::HALF).sin_cos();
        Self::new(
            self.w * cos - self.y * sin,
            self.x * cos - self.z * sin,
            self.y * cos + self.w * sin,
            self.z * cos + self.x * sin,
        )
    }

    /// Applies a rotation of `radians` around the Z axis before `self`.
    pub fn rotate_z(self, radians: T) -> Self {
        let (sin, cos) = (radians * T::HALF).sin_cos();
        Self::new(
            self.w * cos - self.z * sin,
            self.x * cos + self.y * sin,
            self.y * cos - self.x * sin,
            self.z * cos + self.w * sin,
        )
    }

    pub fn dot(self, other: Self) -> T {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the squared length of this quaternion.
    pub fn length2(&self) -> T {
        self.dot(*self)
    }

    /// Returns the length of this quaternion.
    ///
    /// If the length is not equal to one, multiplying a vector with this quaternion will scale the
    /// vector in addition to rotating it.
    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(&self) -> T {
        self.length2().sqrt()
    }

    /// Returns a normalized copy of this quaternion (whose length equals one).
    ///
    /// A zero quaternion is returned unchanged.
    pub fn normalize(self) -> Self {
        let length = self.length();
        if equal(length, T::ZERO) {
            log::trace!("normalizing zero-length quaternion");
            return self;
        }
        self / length
    }

    /// Negates the imaginary parts, which reverses the rotation of a unit quaternion.
    pub fn conjugate(self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Returns the multiplicative inverse: the conjugate divided by the squared length.
    ///
    /// For unit quaternions this equals [`Quat::conjugate`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// let quat = Quat::new(1.0, 2.0, 3.0, 4.0);
    /// assert_approx_eq!(quat * quat.inverse(), Quat::IDENTITY).abs(1e-6);
    /// ```
    pub fn inverse(self) -> Self {
        self.conjugate() / self.length2()
    }

    /// The rotated `+Y` axis.
    pub fn up(self) -> Vec3<T> {
        self.rotate_vec(Vec3::Y)
    }

    /// The rotated `-Z` axis, the direction a rotated viewer looks at.
    pub fn forward(self) -> Vec3<T> {
        self.rotate_vec(-Vec3::<T>::Z)
    }

    /// The rotated `+X` axis.
    pub fn right(self) -> Vec3<T> {
        self.rotate_vec(Vec3::X)
    }

    /// Returns the imaginary part, which points along the rotation axis. It is not normalized.
    pub fn axis(self) -> Vec3<T> {
        vec3(self.x, self.y, self.z)
    }

    /// Returns the rotation angle around [`Quat::axis`], in `[0, 2π]`.
    pub fn angle(self) -> T {
        clamp(self.normalize().w, -T::ONE, T::ONE).acos() * T::TWO
    }

    /// Returns the normalized rotation axis and the rotation angle.
    ///
    /// Without a rotation there is no axis; `+X` is returned in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// assert_eq!(Quat::<f32>::IDENTITY.axis_angle(), (Vec3f::X, 0.0));
    /// ```
    pub fn axis_angle(self) -> (Vec3<T>, T) {
        let angle = self.angle();
        let sin = (angle * T::HALF).sin();
        if sin < T::DEFAULT_EPSILON {
            return (Vec3::X, angle);
        }
        (self.normalize().axis() / sin, angle)
    }

    /// Returns the angle between the [`Quat::forward`] directions of two rotations.
    pub fn angle_to(self, other: Self) -> T {
        self.forward().angle(other.forward())
    }

    /// Returns the 3x3 rotation matrix equivalent to this unit quaternion.
    pub fn to_mat3(self) -> Mat3<T> {
        let Self { w, x, y, z } = self;
        let two = T::TWO;
        Mat3::from_rows([
            [
                T::ONE - two * y * y - two * z * z,
                two * x * y - two * w * z,
                two * x * z + two * w * y,
            ],
            [
                two * x * y + two * w * z,
                T::ONE - two * x * x - two * z * z,
                two * y * z - two * w * x,
            ],
            [
                two * x * z - two * w * y,
                two * y * z + two * w * x,
                T::ONE - two * x * x - two * y * y,
            ],
        ])
    }

    /// Returns the homogeneous 4x4 rotation matrix equivalent to this unit quaternion.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// assert_eq!(Quat::<f32>::IDENTITY.to_mat4(), Mat4f::IDENTITY);
    /// ```
    pub fn to_mat4(self) -> Mat4<T> {
        self.to_mat3().resize::<4>()
    }

    /// Rotates `v` by this unit quaternion.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// use std::f32::consts::PI;
    ///
    /// let quat = Quat::from_axis_angle(Vec3f::Z, PI / 2.0);
    /// assert_approx_eq!(quat.rotate_vec(Vec3f::X), Vec3f::Y).abs(1e-6);
    /// assert_approx_eq!(quat * Vec3f::X, Vec3f::Y).abs(1e-6);
    /// ```
    pub fn rotate_vec(self, v: Vec3<T>) -> Vec3<T> {
        let s = self.w;
        let u = self.axis();

        u * (T::TWO * u.dot(v)) + v * (s * s - u.dot(u)) + u.cross(v) * (T::TWO * s)
    }

    /// Linearly interpolates between `self` (`t = 0`) and `other` (`t = 1`).
    ///
    /// The result is not normalized.
    pub fn lerp(self, other: Self, t: T) -> Self {
        self * (T::ONE - t) + other * t
    }

    /// Spherically interpolates between `self` (`t = 0`) and `other` (`t = 1`) along the shorter
    /// arc, at constant angular velocity.
    ///
    /// Nearly identical rotations fall back to [`Quat::lerp`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// use std::f32::consts::PI;
    ///
    /// let a = Quat::IDENTITY;
    /// let b = Quat::from_axis_angle(Vec3f::Y, PI / 2.0);
    /// assert_approx_eq!(a.slerp(b, 0.5), Quat::from_axis_angle(Vec3f::Y, PI / 4.0)).abs(1e-6);
    /// ```
    pub fn slerp(self, other: Self, t: T) -> Self {
        let mut other = other;
        let mut dot = self.dot(other);
        if dot < T::ZERO {
            dot = -dot;
            other = -other;
        }
        if dot > T::from_f64(0.9999) {
            return self.lerp(other, t);
        }

        let theta = dot.acos();
        let sin = theta.sin();
        let a = ((T::ONE - t) * theta).sin() / sin;
        let b = (t * theta).sin() / sin;
        self * a + other * b
    }
}

/// Renders the quaternion as `Quat[w, x x y x z]`.
///
/// A precision given in the format string (`{:.2}`) is applied to every component.
impl<T: Scalar> fmt::Display for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Quat[")?;
        self.w.fmt_element(f)?;
        f.write_str(", ")?;
        self.x.fmt_element(f)?;
        f.write_str(" x ")?;
        self.y.fmt_element(f)?;
        f.write_str(" x ")?;
        self.z.fmt_element(f)?;
        f.write_str("]")
    }
}

impl<T: Zero + One> Default for Quat<T> {
    fn default() -> Self {
        Self::IDENTITY
    }
}
