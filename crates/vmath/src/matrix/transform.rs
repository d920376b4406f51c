//! Affine 3D transforms stored in 4x4 matrices, and 2D rotations.
//!
//! Every `from_*` constructor builds a standalone transform. The `translate`, `scale` and
//! `rotate_*` methods post-multiply (`self * transform`), so the new transform is applied to
//! vectors *before* the existing one.

use crate::{scalar::equal, Float, Matrix, Quat, Vec3};

impl<T: Float> Matrix<T, 2> {
    /// Creates a 2x2 rotation matrix for a counterclockwise rotation in the XY plane.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// use std::f32::consts::PI;
    ///
    /// let rot = Mat2f::from_rotation(PI / 2.0);
    /// assert_approx_eq!(rot * Vec2f::X, Vec2f::Y).abs(1e-6);
    /// ```
    pub fn from_rotation(radians: T) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::from_columns([[cos, sin], [-sin, cos]])
    }
}

impl<T: Float> Matrix<T, 4> {
    /// Creates a translation matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// let mat = Mat4f::from_translation(vec3(1.0, 2.0, 3.0));
    /// assert_eq!(mat * vec4(1.0, 1.0, 1.0, 1.0), [2.0, 3.0, 4.0, 1.0]);
    /// ```
    pub fn from_translation(translation: Vec3<T>) -> Self {
        let mut mat = Self::IDENTITY;
        mat.set_column(3, translation.extend(T::ONE));
        mat
    }

    /// Creates a matrix that scales each axis by the corresponding element of `scaling`.
    pub fn from_scaling(scaling: Vec3<T>) -> Self {
        Self::from_diagonal(scaling.extend(T::ONE))
    }

    /// Creates a matrix rotating counterclockwise around the X axis.
    pub fn from_rotation_x(radians: T) -> Self {
        let (sin, cos) = radians.sin_cos();
        let mut mat = Self::IDENTITY;
        mat.set_column(1, [T::ZERO, cos, sin, T::ZERO]);
        mat.set_column(2, [T::ZERO, -sin, cos, T::ZERO]);
        mat
    }

    /// Creates a matrix rotating counterclockwise around the Y axis.
    pub fn from_rotation_y(radians: T) -> Self {
        let (sin, cos) = radians.sin_cos();
        let mut mat = Self::IDENTITY;
        mat.set_column(0, [cos, T::ZERO, -sin, T::ZERO]);
        mat.set_column(2, [sin, T::ZERO, cos, T::ZERO]);
        mat
    }

    /// Creates a matrix rotating counterclockwise around the Z axis.
    pub fn from_rotation_z(radians: T) -> Self {
        let (sin, cos) = radians.sin_cos();
        let mut mat = Self::IDENTITY;
        mat.set_column(0, [cos, sin, T::ZERO, T::ZERO]);
        mat.set_column(1, [-sin, cos, T::ZERO, T::ZERO]);
        mat
    }

    /// Creates a matrix rotating around an arbitrary axis.
    ///
    /// `axis` does not need to be normalized. A zero-length axis yields the identity matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// use std::f32::consts::PI;
    ///
    /// let mat = Mat4f::from_axis_angle(vec3(0.0, 0.0, 2.0), PI / 2.0);
    /// assert_approx_eq!(mat, Mat4f::from_rotation_z(PI / 2.0)).abs(1e-6);
    /// assert_eq!(Mat4f::from_axis_angle(Vec3f::ZERO, 1.0), Mat4f::IDENTITY);
    /// ```
    pub fn from_axis_angle(axis: Vec3<T>, radians: T) -> Self {
        let length = axis.length();
        if equal(length, T::ZERO) {
            return Self::IDENTITY;
        }
        let [x, y, z] = (axis / length).into_array();
        let (sin, cos) = radians.sin_cos();
        let icos = T::ONE - cos;

        Self::from_columns([
            [x * x * icos + cos, y * x * icos + z * sin, z * x * icos - y * sin, T::ZERO],
            [x * y * icos - z * sin, y * y * icos + cos, z * y * icos + x * sin, T::ZERO],
            [x * z * icos + y * sin, y * z * icos - x * sin, z * z * icos + cos, T::ZERO],
            [T::ZERO, T::ZERO, T::ZERO, T::ONE],
        ])
    }

    /// Creates a matrix that rotates by `rotation`, then translates by `translation`.
    pub fn from_rotation_translation(rotation: Quat<T>, translation: Vec3<T>) -> Self {
        Self::from_rotation_translation_scale(rotation, translation, Vec3::splat(T::ONE))
    }

    /// Creates a matrix that scales, then rotates, then translates.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// use std::f32::consts::PI;
    ///
    /// let rot = Quat::from_axis_angle(Vec3f::Z, PI / 2.0);
    /// let mat = Mat4f::from_rotation_translation_scale(rot, vec3(1.0, 0.0, 0.0), vec3(2.0, 2.0, 2.0));
    /// let expected = Mat4f::from_translation(vec3(1.0, 0.0, 0.0))
    ///     * rot.to_mat4()
    ///     * Mat4f::from_scaling(vec3(2.0, 2.0, 2.0));
    /// assert_approx_eq!(mat, expected).abs(1e-6);
    /// ```
    pub fn from_rotation_translation_scale(
        rotation: Quat<T>,
        translation: Vec3<T>,
        scaling: Vec3<T>,
    ) -> Self {
        let mut mat = rotation.to_mat4().scale(scaling);
        mat.set_column(3, translation.extend(T::ONE));
        mat
    }

    /// Like [`Matrix::from_rotation_translation_scale`], but rotates and scales around `origin`
    /// instead of around the coordinate origin.
    pub fn from_rotation_translation_scale_origin(
        rotation: Quat<T>,
        translation: Vec3<T>,
        scaling: Vec3<T>,
        origin: Vec3<T>,
    ) -> Self {
        let mut mat = rotation.to_mat4().scale(scaling);
        let pivot = (mat * origin.extend(T::ZERO)).truncate();
        mat.set_column(3, (translation + origin - pivot).extend(T::ONE));
        mat
    }

    /// Returns the translation part of an affine transform.
    pub fn translation(&self) -> Vec3<T> {
        self.column(3).truncate()
    }

    /// Returns a copy of `self` with its translation part replaced.
    pub fn with_translation(mut self, translation: Vec3<T>) -> Self {
        let w = self[(3, 3)];
        self.set_column(3, translation.extend(w));
        self
    }

    /// Applies `translation` before the transform represented by `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// let mat = Mat4f::from_scaling(vec3(2.0, 2.0, 2.0)).translate(vec3(1.0, 0.0, 0.0));
    /// assert_eq!(mat.translation(), vec3(2.0, 0.0, 0.0));
    /// ```
    pub fn translate(mut self, translation: Vec3<T>) -> Self {
        let [x, y, z] = translation.into_array();
        let moved =
            self.column(0) * x + self.column(1) * y + self.column(2) * z + self.column(3);
        self.set_column(3, moved);
        self
    }

    /// Returns the scaling part of an affine transform: the lengths of the first three columns.
    pub fn scaling(&self) -> Vec3<T> {
        Vec3::from_fn(|col| self.column(col).truncate().length())
    }

    /// Returns a copy of `self` whose first three columns are rescaled to the lengths in
    /// `scaling`, preserving their directions.
    ///
    /// Zero-length columns stay zero.
    pub fn with_scaling(mut self, scaling: Vec3<T>) -> Self {
        for col in 0..3 {
            let axis = self.column(col).truncate().normalize() * scaling[col];
            let w = self[(3, col)];
            self.set_column(col, axis.extend(w));
        }
        self
    }

    /// Applies `scaling` before the transform represented by `self`.
    pub fn scale(mut self, scaling: Vec3<T>) -> Self {
        for col in 0..3 {
            let scaled = self.column(col) * scaling[col];
            self.set_column(col, scaled);
        }
        self
    }

    /// Extracts the rotation of an affine transform.
    ///
    /// The scaling (see [`Matrix::scaling`]) is divided out of the upper-left 3x3 block before
    /// the conversion, so the result is a unit quaternion for any positive scaling.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// use std::f32::consts::PI;
    ///
    /// let rot = Quat::from_axis_angle(vec3(1.0, 1.0, 0.0), PI / 3.0);
    /// let mat = Mat4f::from_rotation_translation_scale(rot, vec3(5.0, 0.0, 0.0), vec3(2.0, 3.0, 4.0));
    /// assert_approx_eq!(mat.rotation(), rot).abs(1e-6);
    /// ```
    pub fn rotation(&self) -> Quat<T> {
        let mut r = self.resize::<3>();
        for col in 0..3 {
            let column = r.column(col);
            let length = column.length();
            if equal(length, T::ZERO) {
                log::trace!("column {} has zero length, rotation is degenerate", col);
                continue;
            }
            r.set_column(col, column / length);
        }

        let quarter = T::HALF * T::HALF;
        let trace = r.trace();
        if trace > T::ZERO {
            let s = (trace + T::ONE).sqrt() * T::TWO;
            Quat::new(
                quarter * s,
                (r[(2, 1)] - r[(1, 2)]) / s,
                (r[(0, 2)] - r[(2, 0)]) / s,
                (r[(1, 0)] - r[(0, 1)]) / s,
            )
        } else if r[(0, 0)] > r[(1, 1)] && r[(0, 0)] > r[(2, 2)] {
            let s = (T::ONE + r[(0, 0)] - r[(1, 1)] - r[(2, 2)]).sqrt() * T::TWO;
            Quat::new(
                (r[(2, 1)] - r[(1, 2)]) / s,
                quarter * s,
                (r[(0, 1)] + r[(1, 0)]) / s,
                (r[(0, 2)] + r[(2, 0)]) / s,
            )
        } else if r[(1, 1)] > r[(2, 2)] {
            let s = (T::ONE + r[(1, 1)] - r[(0, 0)] - r[(2, 2)]).sqrt() * T::TWO;
            Quat::new(
                (r[(0, 2)] - r[(2, 0)]) / s,
                (r[(0, 1)] + r[(1, 0)]) / s,
                quarter * s,
                (r[(1, 2)] + r[(2, 1)]) / s,
            )
        } else {
            let s = (T::ONE + r[(2, 2)] - r[(0, 0)] - r[(1, 1)]).sqrt() * T::TWO;
            Quat::new(
                (r[(1, 0)] - r[(0, 1)]) / s,
                (r[(0, 2)] + r[(2, 0)]) / s,
                (r[(1, 2)] + r[(2, 1)]) / s,
                quarter * s,
            )
        }
    }

    /// Applies a rotation around the X axis before the transform represented by `self`.
    pub fn rotate_x(mut self, radians: T) -> Self {
        let (sin, cos) = radians.sin_cos();
        let (y, z) = (self.column(1), self.column(2));
        self.set_column(1, y * cos + z * sin);
        self.set_column(2, z * cos - y * sin);
        self
    }

    /// Applies a rotation around the Y axis before the transform represented by `self`.
    pub fn rotate_y(mut self, radians: T) -> Self {
        let (sin, cos) = radians.sin_cos();
        let (x, z) = (self.column(0), self.column(2));
        self.set_column(0, x * cos - z * sin);
        self.set_column(2, x * sin + z * cos);
        self
    }

    /// Applies a rotation around the Z axis before the transform represented by `self`.
    pub fn rotate_z(mut self, radians: T) -> Self {
        let (sin, cos) = radians.sin_cos();
        let (x, y) = (self.column(0), self.column(1));
        self.set_column(0, x * cos + y * sin);
        self.set_column(1, y * cos - x * sin);
        self
    }

    /// Transforms a point (`w = 1`) by this matrix, ignoring the resulting `w`.
    pub fn transform_point(&self, point: Vec3<T>) -> Vec3<T> {
        (*self * point.extend(T::ONE)).truncate()
    }

    /// Transforms a direction (`w = 0`), which ignores the translation part.
    pub fn transform_vector(&self, vector: Vec3<T>) -> Vec3<T> {
        (*self * vector.extend(T::ZERO)).truncate()
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use crate::{vec3, vec4, Mat2f, Mat4f, Vec3f};

    use super::*;

    #[test]
    fn mat2_rotation() {
        let ccw = Mat2f::from_rotation(0.0);
        assert_eq!(ccw, Mat2f::IDENTITY);
        assert_eq!(ccw, ccw.inverse().0);

        let half = Mat2f::from_rotation(PI);
        assert_approx_eq!(half, half.inverse().0).abs(1e-6);
        assert_approx_eq!(Mat2f::from_rotation(-0.3), Mat2f::from_rotation(0.3).inverse().0)
            .abs(1e-6);
    }

    #[test]
    fn axis_rotations() {
        let x = Mat4f::from_rotation_x(PI / 2.0);
        assert_approx_eq!(x.transform_vector(Vec3f::Y), Vec3f::Z).abs(1e-6);
        let y = Mat4f::from_rotation_y(PI / 2.0);
        assert_approx_eq!(y.transform_vector(Vec3f::Z), Vec3f::X).abs(1e-6);
        let z = Mat4f::from_rotation_z(PI / 2.0);
        assert_approx_eq!(z.transform_vector(Vec3f::X), Vec3f::Y).abs(1e-6);

        for axis in [Vec3f::X, Vec3f::Y, Vec3f::Z] {
            let quat = Quat::from_axis_angle(axis, 0.4);
            assert_approx_eq!(Mat4f::from_axis_angle(axis, 0.4), quat.to_mat4()).abs(1e-6);
        }
    }

    #[test]
    fn rotate_post_multiplies() {
        let base = Mat4f::from_translation(vec3(1.0, 2.0, 3.0)).scale(vec3(2.0, 1.0, 1.0));

        assert_approx_eq!(base.rotate_x(0.7), base * Mat4f::from_rotation_x(0.7)).abs(1e-6);
        assert_approx_eq!(base.rotate_y(0.7), base * Mat4f::from_rotation_y(0.7)).abs(1e-6);
        assert_approx_eq!(base.rotate_z(0.7), base * Mat4f::from_rotation_z(0.7)).abs(1e-6);

        // The bottom row of a projective matrix is rotated along.
        let mut proj = Mat4f::IDENTITY;
        proj.set_row(3, [0.0, 1.0, 2.0, 0.0]);
        assert_approx_eq!(proj.rotate_x(0.7), proj * Mat4f::from_rotation_x(0.7)).abs(1e-6);
    }

    #[test]
    fn translation() {
        let mat = Mat4f::from_translation(vec3(1.0, 2.0, 3.0));
        assert_eq!(mat.translation(), vec3(1.0, 2.0, 3.0));
        assert_eq!(mat.row(3), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(mat.column(3), [1.0, 2.0, 3.0, 1.0]);

        let moved = mat.with_translation(vec3(-1.0, 0.0, 0.0));
        assert_eq!(moved, Mat4f::from_translation(vec3(-1.0, 0.0, 0.0)));

        let mat = mat.translate(vec3(1.0, 1.0, 1.0));
        assert_eq!(mat.translation(), vec3(2.0, 3.0, 4.0));

        let mat = Mat4f::from_rotation_z(PI / 2.0).translate(vec3(1.0, 0.0, 0.0));
        assert_approx_eq!(mat.translation(), vec3(0.0, 1.0, 0.0)).abs(1e-6);
    }

    #[test]
    fn scaling() {
        let mat = Mat4f::from_scaling(vec3(2.0, 3.0, 4.0));
        assert_eq!(mat.scaling(), vec3(2.0, 3.0, 4.0));
        assert_eq!(mat * vec4(1.0, 1.0, 1.0, 1.0), [2.0, 3.0, 4.0, 1.0]);

        let rotated = Mat4f::from_rotation_y(1.0) * mat;
        assert_approx_eq!(rotated.scaling(), vec3(2.0, 3.0, 4.0)).abs(1e-6);

        let rescaled = rotated.with_scaling(vec3(1.0, 1.0, 1.0));
        assert_approx_eq!(rescaled, Mat4f::from_rotation_y(1.0)).abs(1e-6);

        let scaled = Mat4f::IDENTITY.scale(vec3(2.0, 2.0, 2.0)).scale(vec3(1.5, 1.0, 1.0));
        assert_eq!(scaled, Mat4f::from_scaling(vec3(3.0, 2.0, 2.0)));
    }

    #[test]
    fn trs() {
        let rot = Quat::from_axis_angle(vec3(0.0, 1.0, 1.0), 0.8);
        let t = vec3(4.0, -2.0, 1.0);
        let s = vec3(1.0, 2.0, 3.0);

        let expected = Mat4f::from_translation(t) * rot.to_mat4() * Mat4f::from_scaling(s);
        assert_approx_eq!(Mat4f::from_rotation_translation_scale(rot, t, s), expected).abs(1e-6);
        assert_approx_eq!(
            Mat4f::from_rotation_translation(rot, t),
            Mat4f::from_translation(t) * rot.to_mat4()
        )
        .abs(1e-6);

        // Pivoting around the origin is the same as moving the pivot there and back.
        let o = vec3(1.0, 1.0, 0.0);
        let expected = Mat4f::from_translation(t)
            * Mat4f::from_translation(o)
            * rot.to_mat4()
            * Mat4f::from_scaling(s)
            * Mat4f::from_translation(-o);
        let mat = Mat4f::from_rotation_translation_scale_origin(rot, t, s, o);
        assert_approx_eq!(mat, expected).abs(1e-5);
        assert_approx_eq!(mat.transform_point(o), t + o).abs(1e-5);
    }

    #[test]
    fn rotation_extraction() {
        crate::test_log();

        let rot = Quat::from_axis_angle(vec3(1.0, -2.0, 0.5), 2.0);
        let mat =
            Mat4f::from_rotation_translation_scale(rot, vec3(1.0, 2.0, 3.0), vec3(0.5, 2.0, 7.0));
        assert_approx_eq!(mat.rotation(), rot).abs(1e-5);

        assert_eq!(Mat4f::IDENTITY.rotation(), Quat::IDENTITY);

        // Degenerate input still produces finite values.
        let flat = Mat4f::from_scaling(vec3(1.0, 0.0, 1.0));
        let q = flat.rotation();
        assert!(q.w.is_finite() && q.x.is_finite() && q.y.is_finite() && q.z.is_finite());
    }

    #[test]
    fn shepperd_branches() {
        // One rotation per branch: small angle (positive trace), and half turns around each axis.
        let cases = [
            Quat::from_axis_angle(vec3(1.0, 1.0, 1.0), 0.1),
            Quat::from_axis_angle(Vec3f::X, PI - 1e-3),
            Quat::from_axis_angle(Vec3f::Y, PI - 1e-3),
            Quat::from_axis_angle(Vec3f::Z, PI - 1e-3),
            Quat::from_axis_angle(Vec3f::X, PI),
            Quat::from_axis_angle(Vec3f::Y, PI),
            Quat::from_axis_angle(Vec3f::Z, PI),
        ];
        for q in cases {
            let back = q.to_mat4().rotation();
            let back = if back.dot(q) < 0.0 { -back } else { back };
            assert_approx_eq!(back, q, "round trip of {}", q).abs(1e-5);
        }
    }
}
