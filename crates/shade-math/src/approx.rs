//! Approximate comparisons for tests and assertions.
//!
//! [`ApproxEq`] is implemented for the float kinds and everything built from them: arrays,
//! vectors, matrices and quaternions. Compound values are approximately equal when all of their
//! components are.
//!
//! The [`assert_approx_eq!`][crate::assert_approx_eq] and
//! [`assert_approx_ne!`][crate::assert_approx_ne] macros return an [`Asserter`] that performs the
//! check when it goes out of scope, and can be told which comparison to use beforehand.

mod impls;

use std::{fmt, panic::Location};

/// Types that can be compared for approximate equality.
///
/// Background on comparing floats:
/// <https://randomascii.wordpress.com/2012/02/25/comparing-floating-point-numbers-2012-edition/>
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// Tolerance type of absolute and relative comparisons, [`f32`] or [`f64`].
    type Tolerance: Tolerances + Copy;

    /// Equal if `|self - other| <= tolerance`.
    fn abs_diff_eq(&self, other: &Rhs, tolerance: Self::Tolerance) -> bool;

    /// Equal if `|self - other| <= max(|self|, |other|) * tolerance`.
    fn rel_diff_eq(&self, other: &Rhs, tolerance: Self::Tolerance) -> bool;

    /// Equal if at most `ulps` representable values lie between `self` and `other`.
    ///
    /// `NaN` is unequal to everything. Zeroes of either sign are equal; all other values of
    /// opposite sign are unequal.
    fn ulps_diff_eq(&self, other: &Rhs, ulps: u32) -> bool;
}

/// Default tolerances of a [`ApproxEq::Tolerance`] type.
pub trait Tolerances {
    /// Used by default for [`ApproxEq::abs_diff_eq`].
    const ABS: Self;
    /// Used by default for [`ApproxEq::rel_diff_eq`].
    const REL: Self;
    /// Suggested tolerance for [`ApproxEq::ulps_diff_eq`].
    const ULPS: u32;
}

impl Tolerances for f32 {
    const ABS: Self = f32::EPSILON;
    const REL: Self = f32::EPSILON;
    const ULPS: u32 = 4;
}

impl Tolerances for f64 {
    const ABS: Self = f64::EPSILON;
    const REL: Self = f64::EPSILON;
    const ULPS: u32 = 4;
}

/// Pending approximate assertion, checked on drop.
///
/// Returned by [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne]. Calling [`Asserter::abs`], [`Asserter::rel`]
/// or [`Asserter::ulps`] selects the comparisons to run; the values are considered equal if any
/// selected comparison says so. Without any of them, an absolute and a relative comparison with
/// the [`Tolerances`] defaults are used.
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    left: &'a T,
    right: &'a T,
    expect_equal: bool,
    location: &'static Location<'static>,
    msg: Option<fmt::Arguments<'a>>,
    abs: Option<T::Tolerance>,
    rel: Option<T::Tolerance>,
    ulps: Option<u32>,
}

impl<'a, T> Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        expect_equal: bool,
        msg: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            expect_equal,
            location: Location::caller(),
            msg,
            abs: None,
            rel: None,
            ulps: None,
        }
    }

    /// Compares the absolute difference against `tolerance`.
    ///
    /// Works well for values near zero, including values of opposite sign.
    pub fn abs(&mut self, tolerance: T::Tolerance) -> &mut Self {
        self.abs = Some(tolerance);
        self
    }

    /// Compares the absolute difference against `tolerance` times the larger magnitude.
    ///
    /// Works well for values away from zero. Any non-zero value needs a relative tolerance of at
    /// least 1.0 to compare equal to 0.0.
    pub fn rel(&mut self, tolerance: T::Tolerance) -> &mut Self {
        self.rel = Some(tolerance);
        self
    }

    /// Counts the representable values between the two sides.
    pub fn ulps(&mut self, ulps: u32) -> &mut Self {
        self.ulps = Some(ulps);
        self
    }

    fn is_equal(&self) -> bool {
        let (l, r) = (self.left, self.right);
        if self.abs.is_none() && self.rel.is_none() && self.ulps.is_none() {
            return l.abs_diff_eq(r, T::Tolerance::ABS) || l.rel_diff_eq(r, T::Tolerance::REL);
        }
        self.abs.map_or(false, |t| l.abs_diff_eq(r, t))
            || self.rel.map_or(false, |t| l.rel_diff_eq(r, t))
            || self.ulps.map_or(false, |t| l.ulps_diff_eq(r, t))
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    // `#[track_caller]` has no effect on `drop`, so the location is recorded in `new` and printed.
    fn drop(&mut self) {
        if self.is_equal() != self.expect_equal {
            failed(
                self.left,
                self.right,
                self.expect_equal,
                self.location,
                self.msg,
            );
        }
    }
}

fn failed(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    expect_equal: bool,
    location: &Location<'_>,
    msg: Option<fmt::Arguments<'_>>,
) -> ! {
    let op = if expect_equal { "==" } else { "!=" };
    let msg = msg.map(|args| format!(": {args}")).unwrap_or_default();
    panic!("assertion `left {op} right` failed at {location}{msg}\n  left: {left:?}\n right: {right:?}")
}

/// Asserts that two expressions are approximately equal (using [`ApproxEq`]).
///
/// Works like [`assert_eq!`], but returns an [`Asserter`] that can select the comparison and
/// tolerance before the check runs at the end of the statement.
///
/// # Examples
///
/// ```
/// # use shade_math::*;
/// let one = (0..10).fold(0.0, |acc, _| acc + 0.1);
/// assert_approx_eq!(one, 1.0);
///
/// assert_approx_eq!(100.0, 99.0).abs(1.0);
/// assert_approx_eq!(100.0, 99.0).rel(0.01);
/// assert_approx_eq!(1.0, 1.0 + f64::EPSILON).ulps(1);
/// assert_approx_eq!(vec2(1.0, 2.0), vec2(1.0, 2.0 + 1e-9)).abs(1e-6);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, true, ::core::option::Option::None)
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            true,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

/// Asserts that two expressions are *not* approximately equal (using [`ApproxEq`]).
///
/// The counterpart of [`assert_approx_eq!`].
///
/// # Examples
///
/// ```
/// # use shade_math::*;
/// assert_approx_ne!(100.0, 99.0).abs(0.5);
/// assert_approx_ne!(1.0, 1.0 + f64::EPSILON + f64::EPSILON).ulps(1);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, false, ::core::option::Option::None)
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            false,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

#[cfg(test)]
mod tests {
    #[test]
    #[should_panic(expected = "assertion `left != right` failed")]
    fn fail_ne() {
        assert_approx_ne!(1.0, 1.0);
    }

    #[test]
    #[should_panic(expected = "assertion `left == right` failed")]
    fn fail_eq() {
        assert_approx_eq!(1.0, 2.0);
    }

    #[test]
    #[should_panic(expected = "custom context 7")]
    fn message() {
        assert_approx_eq!(1.0, 2.0, "custom context {}", 7);
    }

    #[test]
    #[should_panic(expected = "custom context")]
    fn message_ne() {
        assert_approx_ne!(1.0, 1.0, "custom context");
    }

    #[test]
    fn rel() {
        assert_approx_eq!(1.0, 1.001).rel(0.01);
        assert_approx_eq!(1.0, -1.0).rel(2.0);
        assert_approx_eq!(0.0, 0.00001).rel(1.0);
    }

    #[test]
    fn ulps() {
        assert_approx_eq!(1.0, 1.0 + f32::EPSILON);
        assert_approx_eq!(1.0, 1.0 + f32::EPSILON).ulps(1);
        assert_approx_ne!(1.0, 1.0 + f32::EPSILON).ulps(0);
        assert_approx_eq!(0.0, -0.0).ulps(0);
    }

    #[test]
    fn signs() {
        assert_approx_ne!(1.0, -1.0);
        assert_approx_ne!(1.0, -1.0).abs(1.0);
        assert_approx_eq!(1.0, -1.0).abs(2.0);
        assert_approx_eq!(-1.0, -1.0).abs(0.0);
        assert_approx_eq!(-1.0, -1.0).rel(0.0);
        assert_approx_eq!(-1.0, -1.0).ulps(0);
    }

    #[test]
    fn nan() {
        for tolerance in [0.0, 1.0] {
            assert_approx_ne!(f32::NAN, f32::NAN).abs(tolerance);
            assert_approx_ne!(f32::NAN, f32::NAN).rel(tolerance);
            assert_approx_ne!(f32::NAN, 0.0).abs(tolerance);
            assert_approx_ne!(f32::NAN, 0.0).rel(tolerance);
        }
        assert_approx_ne!(f32::NAN, f32::NAN).ulps(100);
        assert_approx_ne!(f64::NAN, 0.0).ulps(100);
    }

    #[test]
    fn infinities() {
        assert_approx_eq!(f32::INFINITY, f32::INFINITY).abs(0.0);
        assert_approx_eq!(f32::INFINITY, f32::INFINITY).rel(0.0);
        assert_approx_ne!(f32::INFINITY, f32::NEG_INFINITY).abs(f32::MAX);
        assert_approx_ne!(f32::INFINITY, f32::MAX).abs(10000.0);
        assert_approx_ne!(f32::MAX, f32::INFINITY).rel(10000.0);
        assert_approx_eq!(f32::MAX, f32::INFINITY).ulps(1);

        assert_approx_eq!(f64::INFINITY, f64::INFINITY).ulps(0);
        assert_approx_ne!(f64::INFINITY, f64::MAX).abs(10000.0);
        assert_approx_eq!(f64::MAX, f64::INFINITY).ulps(1);
    }

    #[test]
    fn arrays() {
        assert_approx_eq!([1.0, 2.0], [1.0, 2.0 + 1e-12]);
        assert_approx_ne!([1.0, 2.0], [1.0, 2.5]);
    }
}
