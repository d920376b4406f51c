//! Projection and view matrices.
//!
//! These follow the OpenGL conventions: right-handed view space looking down `-Z`, and clip space
//! depth in `[-1, 1]`.

use crate::{Float, Matrix, Vec3};

impl<T: Float> Matrix<T, 4> {
    /// Creates an orthographic projection that maps the given box to the `[-1, 1]` cube.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// let proj = Mat4f::ortho(-2.0, 2.0, -1.0, 1.0, 0.0, 10.0);
    /// assert_approx_eq!(proj * vec4(2.0, 1.0, -10.0, 1.0), vec4(1.0, 1.0, 1.0, 1.0)).abs(1e-6);
    /// assert_approx_eq!(proj * vec4(-2.0, -1.0, 0.0, 1.0), vec4(-1.0, -1.0, -1.0, 1.0)).abs(1e-6);
    /// ```
    pub fn ortho(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        let (width, height, depth) = (right - left, top - bottom, far - near);
        Self::from_columns([
            [T::TWO / width, T::ZERO, T::ZERO, T::ZERO],
            [T::ZERO, T::TWO / height, T::ZERO, T::ZERO],
            [T::ZERO, T::ZERO, -T::TWO / depth, T::ZERO],
            [
                -(right + left) / width,
                -(top + bottom) / height,
                -(far + near) / depth,
                T::ONE,
            ],
        ])
    }

    /// Creates the inverse of [`Matrix::ortho`], mapping the `[-1, 1]` cube back to the box.
    pub fn unortho(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        Self::from_columns([
            [(right - left) / T::TWO, T::ZERO, T::ZERO, T::ZERO],
            [T::ZERO, (top - bottom) / T::TWO, T::ZERO, T::ZERO],
            [T::ZERO, T::ZERO, (far - near) / -T::TWO, T::ZERO],
            [
                (left + right) / T::TWO,
                (top + bottom) / T::TWO,
                (far + near) / -T::TWO,
                T::ONE,
            ],
        ])
    }

    /// Creates a perspective projection for the view frustum with the given near-plane edges.
    pub fn frustum(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        let inv_x = T::ONE / (right - left);
        let inv_y = T::ONE / (top - bottom);
        let inv_z = T::ONE / (near - far);

        Self::from_columns([
            [near * T::TWO * inv_x, T::ZERO, T::ZERO, T::ZERO],
            [T::ZERO, near * T::TWO * inv_y, T::ZERO, T::ZERO],
            [(right + left) * inv_x, (top + bottom) * inv_y, (far + near) * inv_z, -T::ONE],
            [T::ZERO, T::ZERO, far * near * T::TWO * inv_z, T::ZERO],
        ])
    }

    /// Creates a symmetric perspective projection.
    ///
    /// `fov_y` is the vertical field of view in radians, `aspect` is width divided by height.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// use std::f32::consts::PI;
    ///
    /// let proj = Mat4f::perspective(PI / 2.0, 2.0, 1.0, 100.0);
    /// // The top-right corner of the near plane lands on the corner of clip space.
    /// let corner = proj * vec4(2.0, 1.0, -1.0, 1.0);
    /// assert_approx_eq!(corner.truncate() / corner.w, vec3(1.0, 1.0, -1.0)).abs(1e-6);
    /// ```
    pub fn perspective(fov_y: T, aspect: T, near: T, far: T) -> Self {
        let top = (fov_y * T::HALF).tan() * near;
        let right = top * aspect;
        Self::frustum(-right, right, -top, top, near, far)
    }

    /// Creates a view matrix for a viewer at `eye` looking towards `target`.
    ///
    /// `up` only needs to point roughly upwards; it is re-orthogonalized against the view
    /// direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// let view = Mat4f::look_at(vec3(0.0, 0.0, 5.0), Vec3f::ZERO, Vec3f::Y);
    /// assert_eq!(view, Mat4f::from_translation(vec3(0.0, 0.0, -5.0)));
    /// ```
    pub fn look_at(eye: Vec3<T>, target: Vec3<T>, up: Vec3<T>) -> Self {
        let forward = (target - eye).normalize();
        let right = forward.cross(up).normalize();
        let up = right.cross(forward);

        let rotation = Self::from_rows([
            right.extend(T::ZERO),
            up.extend(T::ZERO),
            (-forward).extend(T::ZERO),
            [T::ZERO, T::ZERO, T::ZERO, T::ONE].into(),
        ]);
        rotation * Self::from_translation(-eye)
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec3, vec4, Mat4f, Vec3f};

    #[test]
    fn ortho_roundtrip() {
        let proj = Mat4f::ortho(-4.0, 2.0, -1.0, 3.0, 0.5, 20.0);
        let unproj = Mat4f::unortho(-4.0, 2.0, -1.0, 3.0, 0.5, 20.0);
        assert_approx_eq!(proj * unproj, Mat4f::IDENTITY).abs(1e-6);
        assert_approx_eq!(proj.inverse().0, unproj).abs(1e-5);
    }

    #[test]
    fn frustum() {
        let proj = Mat4f::frustum(-1.0, 1.0, -1.0, 1.0, 1.0, 10.0);
        assert!(!proj.is_affine());

        let near = proj * vec4(1.0, 1.0, -1.0, 1.0);
        assert_approx_eq!(near / near.w, vec4(1.0, 1.0, -1.0, 1.0)).abs(1e-6);
        let far = proj * vec4(10.0, -10.0, -10.0, 1.0);
        assert_approx_eq!(far / far.w, vec4(1.0, -1.0, 1.0, 1.0)).abs(1e-6);

        let (inv, ok) = proj.inverse();
        assert!(ok);
        assert_approx_eq!(proj * inv, Mat4f::IDENTITY).abs(1e-6);
    }

    #[test]
    fn perspective_is_symmetric_frustum() {
        let fov = 1.2f32;
        let proj = Mat4f::perspective(fov, 1.5, 0.1, 50.0);
        let top = (fov / 2.0).tan() * 0.1;
        assert_eq!(proj, Mat4f::frustum(-top * 1.5, top * 1.5, -top, top, 0.1, 50.0));
    }

    #[test]
    fn look_at() {
        let view = Mat4f::look_at(vec3(1.0, 2.0, 3.0), vec3(1.0, 2.0, 0.0), Vec3f::Y);
        assert_approx_eq!(view, Mat4f::from_translation(vec3(-1.0, -2.0, -3.0))).abs(1e-6);

        // Looking down +X: the target ends up in front of the viewer (on -Z).
        let view = Mat4f::look_at(Vec3f::ZERO, vec3(5.0, 0.0, 0.0), Vec3f::Y);
        assert_approx_eq!(view.transform_point(vec3(5.0, 0.0, 0.0)), vec3(0.0, 0.0, -5.0))
            .abs(1e-6);
        assert!(view.is_affine());
    }
}
