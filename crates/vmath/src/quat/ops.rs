use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::{approx::ApproxEq, Float, Quat, Vec3};

impl<T> ApproxEq for Quat<T>
where
    T: ApproxEq + Copy,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        components(self).abs_diff_eq(&components(other), abs_tolerance)
    }

    fn eq_eps(&self, other: &Self, epsilon: Self::Tolerance) -> bool {
        components(self).eq_eps(&components(other), epsilon)
    }
}

fn components<T: Copy>(quat: &Quat<T>) -> [T; 4] {
    [quat.w, quat.x, quat.y, quat.z]
}

/// Component-wise addition.
impl<T: Float> Add for Quat<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Quat::new(self.w + rhs.w, self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

/// Component-wise subtraction.
impl<T: Float> Sub for Quat<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Quat::new(self.w - rhs.w, self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// The Hamilton product. `a * b` rotates by `b`, then by `a`.
impl<T: Float> Mul for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let (a, b) = (self, rhs);
        Quat::new(
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
        )
    }
}

/// Component-wise division.
///
/// This is *not* multiplication with the inverse; use `a * b.inverse()` for that.
impl<T: Float> Div for Quat<T> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Quat::new(self.w / rhs.w, self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

/// Rotates a vector, see [`Quat::rotate_vec`].
impl<T: Float> Mul<Vec3<T>> for Quat<T> {
    type Output = Vec3<T>;

    fn mul(self, rhs: Vec3<T>) -> Vec3<T> {
        self.rotate_vec(rhs)
    }
}

impl<T: Float> Mul<T> for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Quat::new(self.w * rhs, self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl<T: Float> Div<T> for Quat<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Quat::new(self.w / rhs, self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

/// Negates every component. The result represents the same rotation.
impl<T: Float> Neg for Quat<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Quat::new(-self.w, -self.x, -self.y, -self.z)
    }
}
