//! Approximate equality.
//!
//! [`ApproxEq`] is the comparison every aggregate type (vectors, matrices, quaternions,
//! rectangles) implements by delegating to its elements. Its primary method,
//! [`ApproxEq::eq_eps`], is the epsilon-relative comparison of [`equal_eps`], applied
//! element-wise and combined with a logical AND.
//!
//! [`equal_eps`]: crate::equal_eps

mod impls;

use std::{fmt, panic::Location};

use crate::Float;

/// Types that can be compared for *approximate equality*.
///
/// Compound types implementing this trait are considered *equal* if all of their fields are.
///
/// For more information on the subtleties of approximate floating-point number comparison, see:
/// <https://floating-point-gui.de/errors/comparison/>
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// The scalar type tolerances are expressed in.
    type Tolerance: Float;

    /// Performs an *absolute comparison* of `self` and `other`.
    ///
    /// If the absolute difference of the compared values is less than or equal to
    /// `abs_tolerance`, the values are considered to be equal.
    fn abs_diff_eq(&self, other: &Rhs, abs_tolerance: Self::Tolerance) -> bool;

    /// Performs an *epsilon-relative comparison* of `self` and `other`.
    ///
    /// See [`equal_eps`][crate::equal_eps] for the exact algorithm.
    fn eq_eps(&self, other: &Rhs, epsilon: Self::Tolerance) -> bool;

    /// Performs an epsilon-relative comparison using [`Float::DEFAULT_EPSILON`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::{*, approx::ApproxEq};
    /// assert!(vec2(1.0, 2.0).approx_eq(&vec2(1.0, 2.0)));
    /// assert!(!vec2(1.0, 2.0).approx_eq(&vec2(1.0, 2.001)));
    /// ```
    fn approx_eq(&self, other: &Rhs) -> bool {
        self.eq_eps(other, Self::Tolerance::DEFAULT_EPSILON)
    }
}

/// Trait implemented for the `Tolerance` value of [`ApproxEq`] implementations.
///
/// This supplies the default absolute tolerance used by
/// [`assert_approx_eq!`][crate::assert_approx_eq] and [`assert_approx_ne!`][crate::assert_approx_ne].
pub trait DefaultTolerances {
    /// Default tolerance for *absolute comparisons* via [`ApproxEq::abs_diff_eq`].
    const DEFAULT_ABS_TOLERANCE: Self;
}

macro_rules! default_tolerances {
    ($($ty:ty),+) => {
        $(
            impl DefaultTolerances for $ty {
                const DEFAULT_ABS_TOLERANCE: Self = <$ty>::EPSILON;
            }
        )+
    };
}
default_tolerances!(f32, f64);

/// Assertion guard returned by the [`assert_approx_eq!`][crate::assert_approx_eq]
/// and [`assert_approx_ne!`][crate::assert_approx_ne] macros.
///
/// This type will check the assertion when dropped, and has methods that allow configuring the
/// comparison method and tolerances to use:
///
/// - [`Asserter::abs`] compares the values' *absolute difference* via [`ApproxEq::abs_diff_eq`].
/// - [`Asserter::eps`] compares the values *epsilon-relative* via [`ApproxEq::eq_eps`].
///
/// If both methods are called, the values will be considered equal if *either* comparison
/// considers them equal.
///
/// If neither is called, the values compare equal if an absolute comparison with
/// [`DEFAULT_ABS_TOLERANCE`] *or* an epsilon-relative comparison with
/// [`Float::DEFAULT_EPSILON`] considers them equal.
///
/// [`DEFAULT_ABS_TOLERANCE`]: DefaultTolerances::DEFAULT_ABS_TOLERANCE
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
    T::Tolerance: DefaultTolerances,
{
    left: &'a T,
    right: &'a T,
    kind: AssertionKind,
    location: &'static Location<'static>,
    message: Option<fmt::Arguments<'a>>,
    abs: Option<T::Tolerance>,
    eps: Option<T::Tolerance>,
}

impl<'a, T> Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
    T::Tolerance: DefaultTolerances,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        kind: AssertionKind,
        message: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            kind,
            location: Location::caller(),
            message,
            abs: None,
            eps: None,
        }
    }

    /// Perform an *absolute comparison* of the values with the given tolerance.
    ///
    /// This type of comparison is typically a good choice when comparing values that are close to
    /// zero and potentially have opposing signs, like the output of trigonometric functions.
    pub fn abs(&mut self, abs: T::Tolerance) -> &mut Self {
        self.abs = Some(abs);
        self
    }

    /// Perform an *epsilon-relative comparison* of the values with the given epsilon.
    ///
    /// Values that are exactly zero only compare equal to values within `eps` times the smallest
    /// normal float, so this is a poor choice for results that should be "zero, up to rounding".
    pub fn eps(&mut self, eps: T::Tolerance) -> &mut Self {
        self.eps = Some(eps);
        self
    }

    fn holds(&self) -> bool {
        let (abs, eps) = match (self.abs, self.eps) {
            (None, None) => (
                Some(T::Tolerance::DEFAULT_ABS_TOLERANCE),
                Some(T::Tolerance::DEFAULT_EPSILON),
            ),
            tolerances => tolerances,
        };
        let equal = abs.map_or(false, |abs| self.left.abs_diff_eq(self.right, abs))
            || eps.map_or(false, |eps| self.left.eq_eps(self.right, eps));

        equal == (self.kind == AssertionKind::Eq)
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
    T::Tolerance: DefaultTolerances,
{
    // `#[track_caller]` has no effect on destructors, so the location is captured in `new`.
    fn drop(&mut self) {
        if !self.holds() {
            fail(self.left, self.right, self.kind, self.location, self.message.take());
        }
    }
}

#[cold]
fn fail(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    kind: AssertionKind,
    location: &Location<'_>,
    msg: Option<fmt::Arguments<'_>>,
) -> ! {
    let op = match kind {
        AssertionKind::Eq => "==",
        AssertionKind::Ne => "!=",
    };
    let msg = msg.map(|msg| format!(": {msg}")).unwrap_or_default();
    // The panic location points into `drop_in_place`, so the caller's is part of the message.
    panic!("assertion `left {op} right` failed at {location}{msg}\n  left: {left:?}\n right: {right:?}")
}

#[doc(hidden)]
#[derive(Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssertionKind {
    Eq,
    Ne,
}

/// Asserts that two expressions are approximately equal to each other (using [`ApproxEq`]).
///
/// This macro functions like [`assert_eq!`], except in that it uses the [`ApproxEq`] trait to
/// perform an approximate comparison, and returns an [`Asserter`] that can be used to pick the
/// comparison and tolerance.
///
/// Also see [`assert_approx_ne!`].
///
/// # Examples
///
/// Default approximate comparison:
///
/// ```
/// # use vmath::*;
/// let one = (0..10).fold(0.0, |acc, _| acc + 0.1);
/// assert_approx_eq!(one, 1.0);
/// ```
///
/// Absolute and epsilon-relative comparisons with custom tolerances:
///
/// ```
/// # use vmath::*;
/// assert_approx_eq!(100.0, 99.0).abs(1.0);
/// assert_approx_eq!(1e6f32, 1e6 + 1.0).eps(1e-6);
/// assert_approx_eq!(vec2(1.0, 0.0), vec2(1.0, 1e-7)).abs(1e-6);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($($args:tt)+) => {
        $crate::__approx_asserter!(Eq, $($args)+)
    };
}

/// Asserts that two expressions are *not* approximately equal to each other (using [`ApproxEq`]).
///
/// Also see [`assert_approx_eq!`].
///
/// # Examples
///
/// ```
/// # use vmath::*;
/// assert_approx_ne!(100.0, 99.0).abs(0.5);
/// assert_approx_ne!(1e6f32, 1e6 + 1.0).eps(1e-7);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($($args:tt)+) => {
        $crate::__approx_asserter!(Ne, $($args)+)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __approx_asserter {
    ($kind:ident, $lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::$kind,
            ::core::option::Option::None,
        )
    };
    ($kind:ident, $lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::$kind,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}
