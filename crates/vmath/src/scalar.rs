//! Scalar helpers: tolerant comparison, clamping, wrapping, angles and some 2D geometry.

use crate::{Float, Vec2, Vec3, Vector};

/// Compares two floats for equality, using [`Float::DEFAULT_EPSILON`] as the relative tolerance.
///
/// # Examples
///
/// ```
/// # use vmath::*;
/// assert!(equal(-4.0f32, -4.0));
/// assert!(!equal(-4.0f32, -4.001));
/// ```
#[inline]
pub fn equal<T: Float>(a: T, b: T) -> bool {
    equal_eps(a, b, T::DEFAULT_EPSILON)
}

/// Compares two floats for equality, using `epsilon` as the relative tolerance.
///
/// The difference is compared relative to the magnitudes of `a` and `b`. When either value is
/// exactly zero, or the difference is tiny, the comparison is made against `epsilon` multiplied
/// by [`Float::MIN_NORMAL`] instead.
///
/// Infinities of the same sign compare equal. NaN never compares equal to anything.
///
/// # Examples
///
/// ```
/// # use vmath::*;
/// assert!(equal_eps(1e6f32, 1e6 + 1.0, 1e-6));
/// assert!(!equal_eps(1e6f32, 1e6 + 1.0, 1e-7));
/// ```
pub fn equal_eps<T: Float>(a: T, b: T, epsilon: T) -> bool {
    if a == b {
        return true;
    }

    let diff = (a - b).abs();
    if a == T::ZERO || b == T::ZERO || diff < T::MIN_NORMAL {
        return diff < epsilon * T::MIN_NORMAL;
    }

    diff / (a.abs() + b.abs()) < epsilon
}

/// Clamps `v` to the range `[min, max]`.
///
/// Works for any ordered type. If `v` is NaN it is returned unchanged.
#[inline]
pub fn clamp<T: PartialOrd>(v: T, min: T, max: T) -> T {
    if v <= min {
        min
    } else if v >= max {
        max
    } else {
        v
    }
}

/// Wraps `v` around into the range `[min, max)`.
///
/// A reversed range (`max < min`) wraps into `(max, min]`. An empty range (`min == max`) always
/// yields `min`.
///
/// # Examples
///
/// ```
/// # use vmath::*;
/// assert_eq!(wrap(17.0, 0.0, 10.0), 7.0);
/// assert_eq!(wrap(-4.0, 0.0, 10.0), 6.0);
/// ```
pub fn wrap<T: Float>(v: T, min: T, max: T) -> T {
    let diff = max - min;
    if diff == T::ZERO {
        return min;
    }

    let v = v - min;
    min + v - diff * (v / diff).floor()
}

/// Integer version of [`wrap`], with the same results for reversed ranges.
///
/// # Examples
///
/// ```
/// # use vmath::*;
/// assert_eq!(wrap_int(12, 5, 10), 7);
/// assert_eq!(wrap_int(7, -10, -5), -8);
/// assert_eq!(wrap_int(5, 10, 0), 5);
/// assert_eq!(wrap_int(10, 10, 0), 10);
/// ```
pub fn wrap_int(v: i32, min: i32, max: i32) -> i32 {
    let (v, min, max) = (i64::from(v), i64::from(min), i64::from(max));
    let diff = max - min;
    if diff == 0 {
        return min as i32;
    }

    let v = v - min;
    // Floor division, rounding towards negative infinity for either sign of `diff`.
    let mut quotient = v / diff;
    if v % diff != 0 && (v < 0) != (diff < 0) {
        quotient -= 1;
    }
    let wrapped = min + v - diff * quotient;
    // `wrapped` lies between `min` and `max`, so it always fits.
    i32::try_from(wrapped).unwrap_or(min as i32)
}

/// Converts an angle from degrees into radians.
#[inline]
pub fn radians<T: Float>(degrees: T) -> T {
    T::PI * degrees / T::from_f64(180.0)
}

/// Converts an angle from radians into degrees.
#[inline]
pub fn degrees<T: Float>(radians: T) -> T {
    radians * (T::from_f64(180.0) / T::PI)
}

/// Linearly interpolates between `a` and `b`.
///
/// `t` is usually in the range `[0, 1]`, but values outside of it extrapolate.
#[inline]
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a * (T::ONE - t) + b * t
}

/// Returns `radians` normalized into the range `[0, 2π)`.
pub fn normalize_radians<T: Float>(radians: T) -> T {
    wrap(radians, T::ZERO, T::TWO * T::PI)
}

/// Returns `degrees` normalized into the range `[0, 360)`.
///
/// # Examples
///
/// ```
/// # use vmath::*;
/// assert_eq!(normalize_degrees(-45.0), 315.0);
/// assert_eq!(normalize_degrees(720.0), 0.0);
/// ```
pub fn normalize_degrees<T: Float>(degrees: T) -> T {
    wrap(degrees, T::ZERO, T::from_f64(360.0))
}

/// Returns the signed difference between two angles, in the range `(-π, π]`.
pub fn angle_diff<T: Float>(from: T, to: T) -> T {
    let angle = normalize_radians(to - from);
    if angle > T::PI {
        angle - T::TWO * T::PI
    } else {
        angle
    }
}

/// Returns a 2D vector of the given length, rotated `radians` counter-clockwise from the X axis.
pub fn angle_to_vector<T: Float>(radians: T, length: T) -> Vec2<T> {
    let (sin, cos) = radians.sin_cos();
    Vector([cos, sin]).normalize() * length
}

/// Converts a distance and an angle into a 2D position.
pub fn polar_to_cartesian<T: Float>(distance: T, radians: T) -> Vec2<T> {
    let (sin, cos) = radians.sin_cos();
    Vector([cos * distance, sin * distance])
}

/// Converts a cartesian position into spherical coordinates.
///
/// Returns `(radius, azimuth, inclination)`. The azimuth is the angle in the XY plane, the
/// inclination is measured from the Z axis.
pub fn cartesian_to_spherical<T: Float>(pos: Vec3<T>) -> (T, T, T) {
    let radius = pos.length();
    let azimuth = pos.y.atan2(pos.x);
    let inclination = (pos.z / radius).acos();
    (radius, azimuth, inclination)
}

/// Converts spherical coordinates back into a cartesian position.
pub fn spherical_to_cartesian<T: Float>(radius: T, azimuth: T, inclination: T) -> Vec3<T> {
    let (sin_az, cos_az) = azimuth.sin_cos();
    let (sin_inc, cos_inc) = inclination.sin_cos();

    Vector([
        radius * sin_inc * cos_az,
        radius * sin_inc * sin_az,
        radius * cos_inc,
    ])
}

/// Returns the distance between `point` and the infinite line passing through `a` and `b`.
///
/// # Examples
///
/// ```
/// # use vmath::*;
/// let d = point_to_line_distance(vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(4.0, 6.0));
/// assert_eq!(d, 6.0);
/// ```
pub fn point_to_line_distance<T: Float>(a: Vec2<T>, b: Vec2<T>, point: Vec2<T>) -> T {
    let line = b - a;
    let base = a + (point - a).project(line);
    (point - base).length()
}

/// Returns the distance between `point` and the line segment from `a` to `b`.
pub fn point_to_segment_distance<T: Float>(a: Vec2<T>, b: Vec2<T>, point: Vec2<T>) -> T {
    let line = b - a;

    let c1 = (point - a).dot(line);
    if c1 <= T::ZERO {
        // before `a`
        return (point - a).length();
    }

    let c2 = line.dot(line);
    if c2 <= c1 {
        // past `b`
        return (point - b).length();
    }

    let base = a + line * (c1 / c2);
    (point - base).length()
}

/// Returns whether `point` lies on the infinite line through `a` and `b`.
#[inline]
pub fn is_point_on_line<T: Float>(a: Vec2<T>, b: Vec2<T>, point: Vec2<T>) -> bool {
    is_point_on_line_eps(a, b, point, T::DEFAULT_EPSILON)
}

/// Returns whether `point` lies on the infinite line through `a` and `b`, using `epsilon` as the
/// relative tolerance.
pub fn is_point_on_line_eps<T: Float>(a: Vec2<T>, b: Vec2<T>, point: Vec2<T>, epsilon: T) -> bool {
    let cross = (b - a).cross_z(point - a);
    equal_eps(cross, T::ZERO, epsilon)
}

/// Returns whether `point` lies strictly to the left of the directed line `a -> b`.
///
/// Points on the line are not on the left.
pub fn is_point_on_left<T: Float>(a: Vec2<T>, b: Vec2<T>, point: Vec2<T>) -> bool {
    (b - a).cross_z(point - a) > T::ZERO
}
