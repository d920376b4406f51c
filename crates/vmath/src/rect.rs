//! Axis-aligned rectangles.

use std::{
    fmt,
    ops::{Add, Sub},
};

use crate::{approx::ApproxEq, traits::Number, vec2, Float, MinMax, Scalar, Vec2};

/// A [`Rect`] with [`f32`] coordinates.
pub type Rectf = Rect<f32>;
/// A [`Rect`] with [`i32`] coordinates.
pub type Recti = Rect<i32>;

/// An axis-aligned rectangle spanning from the corner `min` to the corner `max`.
///
/// Most operations expect `min <= max` in both dimensions. The constructors ([`Rect::from_corners`],
/// [`Rect::from_pos_size`], [`Rect::from_edges`]) establish this by swapping coordinates as needed,
/// and [`Rect::normalize`] repairs a rectangle that was built from its fields directly.
///
/// The Y axis points up: `bottom` is the smaller Y coordinate, `top` the larger one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect<T> {
    pub min: Vec2<T>,
    pub max: Vec2<T>,
}

impl<T: Number> Rect<T> {
    /// Creates a rectangle from two opposite corners, in any order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// let rect = Rect::from_corners(vec2(10, 4), vec2(-3, 7));
    /// assert_eq!(rect.min, vec2(-3, 4));
    /// assert_eq!(rect.max, vec2(10, 7));
    /// ```
    pub fn from_corners(a: Vec2<T>, b: Vec2<T>) -> Self {
        Self { min: a, max: b }.normalize()
    }

    /// Creates a rectangle with its `min` corner at `pos`.
    ///
    /// A negative size extends the rectangle from `pos` towards negative coordinates instead.
    pub fn from_pos_size(pos: Vec2<T>, size: Vec2<T>) -> Self {
        let mut min = pos;
        let mut size = size;
        for i in 0..2 {
            if size[i] < T::ZERO {
                size[i] = -size[i];
                min[i] = min[i] - size[i];
            }
        }
        Self {
            min,
            max: min + size,
        }
    }

    /// Creates a rectangle from the positions of its edges, swapping them if necessary.
    pub fn from_edges(left: T, right: T, bottom: T, top: T) -> Self {
        Self::from_corners(vec2(left, bottom), vec2(right, top))
    }

    /// Swaps coordinates so that `min <= max` holds in both dimensions.
    #[must_use]
    pub fn normalize(self) -> Self {
        let Self { mut min, mut max } = self;
        for i in 0..2 {
            if min[i] > max[i] {
                std::mem::swap(&mut min[i], &mut max[i]);
            }
        }
        Self { min, max }
    }

    #[inline]
    pub fn size(&self) -> Vec2<T> {
        self.max - self.min
    }

    #[inline]
    pub fn area(&self) -> T {
        let size = self.size();
        size.x * size.y
    }

    /// The smaller X coordinate.
    #[inline]
    pub fn left(&self) -> T {
        self.min.x
    }

    /// The larger X coordinate.
    #[inline]
    pub fn right(&self) -> T {
        self.max.x
    }

    /// The smaller Y coordinate.
    #[inline]
    pub fn bottom(&self) -> T {
        self.min.y
    }

    /// The larger Y coordinate.
    #[inline]
    pub fn top(&self) -> T {
        self.max.y
    }

    /// Moves the rectangle so that its `min` corner is at `pos`, keeping its size.
    #[must_use]
    pub fn with_pos(self, pos: Vec2<T>) -> Self {
        Self {
            min: pos,
            max: pos + self.size(),
        }
    }

    /// Resizes the rectangle, keeping its `min` corner in place.
    #[must_use]
    pub fn with_size(self, size: Vec2<T>) -> Self {
        Self {
            min: self.min,
            max: self.min + size,
        }
    }

    /// Returns whether `self` and `other` share a non-empty area.
    ///
    /// Rectangles that only touch along an edge or a corner do not overlap.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// let a = Rect::from_edges(0, 2, 0, 2);
    /// let b = Rect::from_edges(2, 4, 0, 2);
    /// assert!(!a.overlaps(&b));
    /// assert!(a.overlaps_or_touches(&b));
    /// ```
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Like [`Rect::overlaps`], but also returns `true` for rectangles that touch.
    pub fn overlaps_or_touches(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Returns whether `point` lies inside the rectangle or on its boundary.
    pub fn contains_point(&self, point: Vec2<T>) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Returns whether `other` lies completely inside `self`. Shared edges are allowed.
    pub fn contains_rect(&self, other: &Self) -> bool {
        self.min.x <= other.min.x
            && self.max.x >= other.max.x
            && self.min.y <= other.min.y
            && self.max.y >= other.max.y
    }

    /// Computes the intersection of `self` and `other`.
    ///
    /// Returns [`None`] when the rectangles don't overlap or touch. Touching rectangles intersect
    /// in a rectangle with zero width or height.
    pub fn intersection(&self, other: &Self) -> Option<Self>
    where
        T: MinMax,
    {
        let min = self.min.max(other.min);
        let max = self.max.min(other.max);
        if min.x > max.x || min.y > max.y {
            return None;
        }
        Some(Self { min, max })
    }

    /// Returns the smallest rectangle containing both `self` and `other`.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self
    where
        T: MinMax,
    {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Returns the squared distance between `point` and the closest point of the rectangle.
    ///
    /// Points inside the rectangle have a distance of zero.
    pub fn square_point_distance(&self, point: Vec2<T>) -> T {
        (0..2).fold(T::ZERO, |sum, i| {
            let d = if point[i] < self.min[i] {
                point[i] - self.min[i]
            } else if point[i] > self.max[i] {
                point[i] - self.max[i]
            } else {
                T::ZERO
            };
            sum + d * d
        })
    }
}

impl<T: Float> Rect<T> {
    /// Returns the distance between `point` and the closest point of the rectangle.
    pub fn point_distance(&self, point: Vec2<T>) -> T {
        self.square_point_distance(point).sqrt()
    }

    /// Converts the corners to integers, truncating towards zero.
    pub fn to_recti(self) -> Recti {
        Rect {
            min: self.min.to_i32(),
            max: self.max.to_i32(),
        }
    }

    /// Rounds the corners to the nearest integers, rounding half-way cases away from zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// let rect = Rectf { min: vec2(-3.7, 4.5), max: vec2(10.2, -7.5) };
    /// assert_eq!(rect.round(), Recti { min: vec2(-4, 5), max: vec2(10, -8) });
    /// assert_eq!(rect.to_recti(), Recti { min: vec2(-3, 4), max: vec2(10, -7) });
    /// ```
    pub fn round(self) -> Recti {
        Rect {
            min: self.min.round(),
            max: self.max.round(),
        }
    }
}

impl Rect<i32> {
    /// Returns the distance between `point` and the closest point of the rectangle.
    pub fn point_distance(&self, point: Vec2<i32>) -> f32 {
        (self.square_point_distance(point) as f32).sqrt()
    }

    pub fn to_rectf(self) -> Rectf {
        Rect {
            min: self.min.to_f32(),
            max: self.max.to_f32(),
        }
    }
}

/// Moves the rectangle by a vector.
impl<T: Number> Add<Vec2<T>> for Rect<T> {
    type Output = Self;

    fn add(self, rhs: Vec2<T>) -> Self {
        Self {
            min: self.min + rhs,
            max: self.max + rhs,
        }
    }
}

impl<T: Number> Sub<Vec2<T>> for Rect<T> {
    type Output = Self;

    fn sub(self, rhs: Vec2<T>) -> Self {
        Self {
            min: self.min - rhs,
            max: self.max - rhs,
        }
    }
}

impl<T: ApproxEq> ApproxEq for Rect<T> {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.min.abs_diff_eq(&other.min, abs_tolerance)
            && self.max.abs_diff_eq(&other.max, abs_tolerance)
    }

    fn eq_eps(&self, other: &Self, epsilon: Self::Tolerance) -> bool {
        self.min.eq_eps(&other.min, epsilon) && self.max.eq_eps(&other.max, epsilon)
    }
}

/// Renders as `Rectf([-3.000000 x 4.000000]-[10.000000 x 7.000000])`.
impl<T: Scalar> fmt::Display for Rect<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rect{}([", T::SUFFIX)?;
        self.min.x.fmt_element(f)?;
        f.write_str(" x ")?;
        self.min.y.fmt_element(f)?;
        f.write_str("]-[")?;
        self.max.x.fmt_element(f)?;
        f.write_str(" x ")?;
        self.max.y.fmt_element(f)?;
        f.write_str("])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected() -> Rectf {
        Rectf {
            min: vec2(-3.0, 4.0),
            max: vec2(10.0, 7.0),
        }
    }

    #[test]
    fn from_corners() {
        assert_eq!(Rect::from_corners(vec2(-3.0, 4.0), vec2(10.0, 7.0)), expected());
        assert_eq!(Rect::from_corners(vec2(10.0, 7.0), vec2(-3.0, 4.0)), expected());
        assert_eq!(Rect::from_corners(vec2(10.0, 4.0), vec2(-3.0, 7.0)), expected());
        assert_eq!(Rect::from_corners(vec2(-3.0, 7.0), vec2(10.0, 4.0)), expected());
    }

    #[test]
    fn from_pos_size() {
        assert_eq!(Rect::from_pos_size(vec2(-3.0, 4.0), vec2(13.0, 3.0)), expected());
        assert_eq!(Rect::from_pos_size(vec2(10.0, 7.0), vec2(-13.0, -3.0)), expected());
        assert_eq!(Rect::from_pos_size(vec2(10.0, 4.0), vec2(-13.0, 3.0)), expected());
        assert_eq!(Rect::from_pos_size(vec2(-3.0, 7.0), vec2(13.0, -3.0)), expected());
    }

    #[test]
    fn from_edges() {
        assert_eq!(Rect::from_edges(-3.0, 10.0, 4.0, 7.0), expected());
        assert_eq!(Rect::from_edges(10.0, -3.0, 7.0, 4.0), expected());
        assert_eq!(Rect::from_edges(10.0, -3.0, 4.0, 7.0), expected());
        assert_eq!(Rect::from_edges(-3, 10, 7, 4), expected().to_recti());
    }

    #[test]
    fn normalize() {
        let flipped = Rectf {
            min: vec2(10.0, 4.0),
            max: vec2(-3.0, 7.0),
        };
        assert_eq!(flipped.normalize(), expected());
        assert_eq!(flipped.normalize().normalize(), flipped.normalize());
        assert_eq!(expected().normalize(), expected());
    }

    #[test]
    fn display() {
        assert_eq!(
            expected().to_string(),
            "Rectf([-3.000000 x 4.000000]-[10.000000 x 7.000000])"
        );
        assert_eq!(expected().to_recti().to_string(), "Recti([-3 x 4]-[10 x 7])");
    }

    #[test]
    fn conversions() {
        let rect = Rectf {
            min: vec2(-3.7, 4.5),
            max: vec2(10.2, -7.5),
        };
        assert_eq!(rect.to_recti(), Recti { min: vec2(-3, 4), max: vec2(10, -7) });
        assert_eq!(rect.round(), Recti { min: vec2(-4, 5), max: vec2(10, -8) });
        assert_eq!(
            Recti { min: vec2(-3, 4), max: vec2(10, 7) }.to_rectf(),
            expected()
        );
    }

    #[test]
    fn dimensions() {
        let rect = expected();
        assert_eq!(rect.size(), vec2(13.0, 3.0));
        assert_eq!(rect.area(), 39.0);
        assert_eq!(
            (rect.left(), rect.right(), rect.bottom(), rect.top()),
            (-3.0, 10.0, 4.0, 7.0)
        );
        assert_eq!(rect.to_recti().area(), 39);

        let moved = rect.with_pos(vec2(1.0, 1.0));
        assert_eq!(moved, Rect::from_edges(1.0, 14.0, 1.0, 4.0));
        assert_eq!(rect.with_size(vec2(1.0, 2.0)).max, vec2(-2.0, 6.0));
        assert_eq!(rect + vec2(3.0, -4.0), Rect::from_edges(0.0, 13.0, 0.0, 3.0));
        assert_eq!(rect + vec2(3.0, -4.0) - vec2(3.0, -4.0), rect);
    }

    #[test]
    fn overlap() {
        let a = Recti::from_edges(0, 10, 0, 10);
        let inner = Recti::from_edges(2, 5, 2, 5);
        let touching = Recti::from_edges(10, 20, 5, 15);
        let corner = Recti::from_edges(10, 20, 10, 20);
        let apart = Recti::from_edges(11, 20, 0, 10);

        assert!(a.overlaps(&inner));
        assert!(inner.overlaps(&a));
        assert!(!a.overlaps(&touching));
        assert!(a.overlaps_or_touches(&touching));
        assert!(a.overlaps_or_touches(&corner));
        assert!(!a.overlaps(&corner));
        assert!(!a.overlaps_or_touches(&apart));

        assert!(a.contains_rect(&inner));
        assert!(a.contains_rect(&a));
        assert!(!inner.contains_rect(&a));
        assert!(a.contains_point(vec2(10, 0)));
        assert!(!a.contains_point(vec2(10, 11)));
    }

    #[test]
    fn merge_and_intersection() {
        let a = Recti::from_edges(0, 10, 0, 10);
        let b = Recti::from_edges(5, 15, -5, 5);
        assert_eq!(a.merge(&b), Recti::from_edges(0, 15, -5, 10));
        assert_eq!(a.intersection(&b), Some(Recti::from_edges(5, 10, 0, 5)));
        assert_eq!(
            a.intersection(&Recti::from_edges(10, 20, 0, 10)),
            Some(Recti::from_edges(10, 10, 0, 10))
        );
        assert_eq!(a.intersection(&Recti::from_edges(11, 20, 0, 10)), None);
    }

    #[test]
    fn point_distance() {
        let rect = Rectf::from_edges(0.0, 2.0, 0.0, 1.0);
        assert_eq!(rect.square_point_distance(vec2(1.0, 0.5)), 0.0);
        assert_eq!(rect.square_point_distance(vec2(2.0, 1.0)), 0.0);
        assert_eq!(rect.square_point_distance(vec2(-1.0, 0.5)), 1.0);
        assert_eq!(rect.point_distance(vec2(5.0, 5.0)), 5.0);

        let rect = rect.to_recti();
        assert_eq!(rect.square_point_distance(vec2(5, -4)), 25);
        assert_eq!(rect.point_distance(vec2(5, -4)), 5.0);
    }

    #[test]
    fn approx() {
        let a = expected();
        let b = a + vec2(1e-7, 0.0);
        assert_approx_eq!(a, b).abs(1e-6);
    }
}
