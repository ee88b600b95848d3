//! Element kinds and the numeric traits the kernel is generic over.
//!
//! Every vector, matrix and quaternion is parameterized by an element type implementing
//! [`Scalar`]. The set of element kinds is closed: 32/64-bit floats, signed and unsigned 8 to
//! 64-bit integers, and `bool`. Operations then narrow the set further with the traits below,
//! so an operation that makes no sense for a kind (bit shifts on floats, trigonometry on
//! integers) simply doesn't exist for it.

use std::{fmt, ops};

use crate::storage::{Align16, Align32, Align4, Align8, AlignMarker, LaneOp};

mod sealed {
    pub trait Sealed {}
}

/// Runtime tag naming one of the supported element kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    F32,
    F64,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    Bool,
}

impl ScalarKind {
    /// All element kinds, floats first.
    pub const ALL: [ScalarKind; 11] = [
        ScalarKind::F32,
        ScalarKind::F64,
        ScalarKind::I8,
        ScalarKind::I16,
        ScalarKind::I32,
        ScalarKind::I64,
        ScalarKind::U8,
        ScalarKind::U16,
        ScalarKind::U32,
        ScalarKind::U64,
        ScalarKind::Bool,
    ];

    /// Size of one element in bytes.
    pub const fn size(self) -> usize {
        match self {
            ScalarKind::I8 | ScalarKind::U8 | ScalarKind::Bool => 1,
            ScalarKind::I16 | ScalarKind::U16 => 2,
            ScalarKind::F32 | ScalarKind::I32 | ScalarKind::U32 => 4,
            ScalarKind::F64 | ScalarKind::I64 | ScalarKind::U64 => 8,
        }
    }

    /// The Rust name of the primitive type.
    pub const fn name(self) -> &'static str {
        match self {
            ScalarKind::F32 => "f32",
            ScalarKind::F64 => "f64",
            ScalarKind::I8 => "i8",
            ScalarKind::I16 => "i16",
            ScalarKind::I32 => "i32",
            ScalarKind::I64 => "i64",
            ScalarKind::U8 => "u8",
            ScalarKind::U16 => "u16",
            ScalarKind::U32 => "u32",
            ScalarKind::U64 => "u64",
            ScalarKind::Bool => "bool",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An element kind that can be stored in a [`Vector`][crate::Vector].
///
/// This trait is sealed. It is implemented for [`f32`], [`f64`], the signed and unsigned integer
/// types from 8 to 64 bits, and [`bool`].
pub trait Scalar:
    Copy
    + PartialEq
    + PartialOrd
    + Default
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
    + sealed::Sealed
{
    /// Runtime tag of this element kind.
    const KIND: ScalarKind;

    /// Zero-sized marker whose alignment is that of 4 consecutive elements.
    ///
    /// Used by the [`Aligned`][crate::storage::Aligned] qualifier.
    type Align4: AlignMarker;

    /// Applies `op` to all lanes at once using a hardware vector register.
    ///
    /// Returns [`None`] when no register exists for this element kind and lane count, in which
    /// case the caller falls back to element-wise evaluation.
    #[doc(hidden)]
    #[inline]
    fn lanes<const N: usize>(op: LaneOp, a: &[Self; N], b: &[Self; N]) -> Option<[Self; N]> {
        let _ = (op, a, b);
        None
    }
}

macro_rules! scalar {
    ($($ty:ty => $kind:ident, $align:ty;)+) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Scalar for $ty {
                const KIND: ScalarKind = ScalarKind::$kind;
                type Align4 = $align;
            }
        )+
    };
}
scalar! {
    i8 => I8, Align4;
    i16 => I16, Align8;
    i32 => I32, Align16;
    i64 => I64, Align32;
    u8 => U8, Align4;
    u16 => U16, Align8;
    u32 => U32, Align16;
    u64 => U64, Align32;
    bool => Bool, Align4;
}

impl sealed::Sealed for f32 {}
impl Scalar for f32 {
    const KIND: ScalarKind = ScalarKind::F32;
    type Align4 = Align16;

    #[inline]
    fn lanes<const N: usize>(op: LaneOp, a: &[Self; N], b: &[Self; N]) -> Option<[Self; N]> {
        crate::storage::hw::lanes_f32(op, a, b)
    }
}

impl sealed::Sealed for f64 {}
impl Scalar for f64 {
    const KIND: ScalarKind = ScalarKind::F64;
    type Align4 = Align32;

    #[inline]
    fn lanes<const N: usize>(op: LaneOp, a: &[Self; N], b: &[Self; N]) -> Option<[Self; N]> {
        crate::storage::hw::lanes_f64(op, a, b)
    }
}

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

macro_rules! zero_one {
    ($zero:literal, $one:literal: $($ty:ty),+) => {
        $(
            impl Zero for $ty {
                const ZERO: Self = $zero;
            }

            impl One for $ty {
                const ONE: Self = $one;
            }
        )+
    };
}
zero_one!(0, 1: i8, i16, i32, i64, u8, u16, u32, u64);
zero_one!(0.0, 1.0: f32, f64);

/// Element kinds supporting the arithmetic operators `+`, `-`, `*`, `/` and `%`.
///
/// Implemented for every [`Scalar`] except [`bool`].
pub trait Number:
    Scalar
    + Zero
    + One
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + ops::Rem<Output = Self>
    + MinMax
{
}
impl<T> Number for T where
    T: Scalar
        + Zero
        + One
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + ops::Rem<Output = Self>
        + MinMax
{
}

/// [`Number`]s that can be negated: the floating-point and signed integer kinds.
pub trait Signed: Number + ops::Neg<Output = Self> {
    /// Absolute value.
    ///
    /// For integers, the most negative value is returned unchanged.
    fn abs(self) -> Self;
}

macro_rules! signed_int {
    ($($ty:ty),+) => {
        $(
            impl Signed for $ty {
                #[inline]
                fn abs(self) -> Self {
                    self.wrapping_abs()
                }
            }
        )+
    };
}
signed_int!(i8, i16, i32, i64);

/// Types that support the trigonometric functions.
pub trait Trig {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the tangent of the angle `self` (in radians).
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    fn atan2(self, other: Self) -> Self;
    /// Computes sine and cosine of `self` at once.
    fn sin_cos(self) -> (Self, Self)
    where
        Self: Sized;
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of the [`f32::min`] and [`f32::max`] functions
/// ([`f64::min`] and [`f64::max`] respectively), which ignore a `NaN` operand. Built-in integer
/// types implement it in terms of [`Ord::min`] and [`Ord::max`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}
macro_rules! ord_min_max {
    ($($types:ty),+) => {
        $(
            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }
        )+
    };
}
ord_min_max!(u8, u16, u32, u64, i8, i16, i32, i64);

/// The floating-point element kinds, [`f32`] and [`f64`].
pub trait Float: Signed + Trig + Sqrt {
    /// Machine epsilon.
    const EPSILON: Self;
    /// Archimedes' constant (π).
    const PI: Self;
    const INFINITY: Self;
    const NAN: Self;

    fn floor(self) -> Self;
    fn ceil(self) -> Self;
    /// Rounds half-way cases away from zero.
    fn round(self) -> Self;
    fn trunc(self) -> Self;
    /// Returns `self - self.floor()`.
    ///
    /// Unlike [`f32::fract`], the result is never negative.
    fn fract(self) -> Self;
    fn is_nan(self) -> bool;
    fn is_finite(self) -> bool;
    /// Converts an `f64` constant to this type, rounding if necessary.
    fn from_f64(value: f64) -> Self;
}

macro_rules! float {
    ($($ty:ident),+) => {
        $(
            impl Signed for $ty {
                #[inline]
                fn abs(self) -> Self {
                    self.abs()
                }
            }

            impl MinMax for $ty {
                fn min(self, other: Self) -> Self {
                    self.min(other)
                }

                fn max(self, other: Self) -> Self {
                    self.max(other)
                }
            }

            impl Trig for $ty {
                fn sin(self) -> Self {
                    self.sin()
                }

                fn cos(self) -> Self {
                    self.cos()
                }

                fn tan(self) -> Self {
                    self.tan()
                }

                fn asin(self) -> Self {
                    self.asin()
                }

                fn acos(self) -> Self {
                    self.acos()
                }

                fn atan(self) -> Self {
                    self.atan()
                }

                fn atan2(self, other: Self) -> Self {
                    self.atan2(other)
                }

                fn sin_cos(self) -> (Self, Self) {
                    self.sin_cos()
                }
            }

            impl Sqrt for $ty {
                fn sqrt(self) -> Self {
                    self.sqrt()
                }
            }

            impl Float for $ty {
                const EPSILON: Self = $ty::EPSILON;
                const PI: Self = std::$ty::consts::PI;
                const INFINITY: Self = $ty::INFINITY;
                const NAN: Self = $ty::NAN;

                #[inline]
                fn floor(self) -> Self {
                    self.floor()
                }

                #[inline]
                fn ceil(self) -> Self {
                    self.ceil()
                }

                #[inline]
                fn round(self) -> Self {
                    self.round()
                }

                #[inline]
                fn trunc(self) -> Self {
                    self.trunc()
                }

                #[inline]
                fn fract(self) -> Self {
                    self - self.floor()
                }

                #[inline]
                fn is_nan(self) -> bool {
                    self.is_nan()
                }

                #[inline]
                fn is_finite(self) -> bool {
                    self.is_finite()
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $ty
                }
            }
        )+
    };
}
float!(f32, f64);

/// Explicit conversion between element kinds.
///
/// Numeric conversions follow the semantics of `as` (truncation toward zero and saturation for
/// float-to-integer, wrapping for integer narrowing). Converting to [`bool`] yields `true` for
/// every non-zero value, and `true`/`false` convert to 1 and 0.
pub trait Cast<U>: Scalar {
    fn cast(self) -> U;
}

macro_rules! cast_numeric {
    ($($src:ty),+) => {
        $(
            cast_numeric!(@from $src => f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);

            impl Cast<bool> for $src {
                #[inline]
                fn cast(self) -> bool {
                    self != <$src as Zero>::ZERO
                }
            }

            impl Cast<$src> for bool {
                #[inline]
                fn cast(self) -> $src {
                    if self {
                        <$src as One>::ONE
                    } else {
                        <$src as Zero>::ZERO
                    }
                }
            }
        )+
    };
    (@from $src:ty => $($dst:ty),+) => {
        $(
            impl Cast<$dst> for $src {
                #[inline]
                fn cast(self) -> $dst {
                    self as $dst
                }
            }
        )+
    };
}
cast_numeric!(f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);

impl Cast<bool> for bool {
    #[inline]
    fn cast(self) -> bool {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(<f32 as Scalar>::KIND, ScalarKind::F32);
        assert_eq!(<bool as Scalar>::KIND, ScalarKind::Bool);
        for kind in ScalarKind::ALL {
            assert!(kind.size() >= 1 && kind.size() <= 8);
        }
        assert_eq!(ScalarKind::U16.to_string(), "u16");
    }

    #[test]
    fn casts() {
        assert_eq!(Cast::<i32>::cast(-1.75f32), -1);
        assert_eq!(Cast::<u8>::cast(300.0f32), 255);
        assert_eq!(Cast::<u8>::cast(-3i32), 253);
        assert_eq!(Cast::<bool>::cast(0.0f64), false);
        assert_eq!(Cast::<bool>::cast(-0.5f64), true);
        assert_eq!(Cast::<f32>::cast(true), 1.0);
        assert_eq!(Cast::<u64>::cast(false), 0);
    }

    #[test]
    fn float_helpers() {
        assert_eq!(Float::fract(-0.25f32), 0.75);
        assert_eq!(Float::round(2.5f64), 3.0);
        assert_eq!(Float::round(-2.5f64), -3.0);
        assert_eq!(Signed::abs(i8::MIN), i8::MIN);
        assert_eq!(MinMax::clamp(f32::NAN, 0.0, 1.0), 0.0);
    }
}
