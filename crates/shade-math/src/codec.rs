//! Bit-level conversions and packing codecs.
//!
//! Everything in this module produces the same bits on every host: packed words always store
//! component 0 in their least significant bits, independent of the host's byte order. Packed
//! values are therefore safe to write to files or send over the network (after converting the
//! word itself to the desired byte order).

use crate::{storage::Qualifier, Vector};

mod float16;
mod norm;

pub use float16::*;
pub use norm::*;

macro_rules! reinterpret {
    ($($(#[$attr:meta])* $name:ident: $from:ty => $to:ty, $conv:expr;)+) => {
        $(
            $(#[$attr])*
            pub fn $name<const N: usize, Q: Qualifier>(v: Vector<$from, N, Q>) -> Vector<$to, N, Q> {
                v.map($conv)
            }
        )+
    };
}

reinterpret! {
    /// Returns the bit patterns of the components as signed integers.
    float_bits_to_int: f32 => i32, |f| f.to_bits() as i32;
    /// Returns the bit patterns of the components.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::{codec::float_bits_to_uint, vec2};
    /// assert_eq!(float_bits_to_uint(vec2(1.0, -2.0)), vec2(0x3f80_0000, 0xc000_0000));
    /// ```
    float_bits_to_uint: f32 => u32, f32::to_bits;
    /// Reinterprets signed integers as IEEE single-precision bit patterns.
    int_bits_to_float: i32 => f32, |i| f32::from_bits(i as u32);
    /// Reinterprets unsigned integers as IEEE single-precision bit patterns.
    uint_bits_to_float: u32 => f32, f32::from_bits;
    /// Returns the bit patterns of the components as signed integers.
    double_bits_to_int: f64 => i64, |f| f.to_bits() as i64;
    /// Returns the bit patterns of the components.
    double_bits_to_uint: f64 => u64, f64::to_bits;
    /// Reinterprets signed integers as IEEE double-precision bit patterns.
    int_bits_to_double: i64 => f64, |i| f64::from_bits(i as u64);
    /// Reinterprets unsigned integers as IEEE double-precision bit patterns.
    uint_bits_to_double: u64 => f64, f64::from_bits;
}

/// Splits the bit pattern of `value` into two 32-bit words, the low word first.
///
/// This is a pure reinterpretation; [`unpack_double_2x32`] restores every value (including
/// `NaN` payloads) exactly.
///
/// # Examples
///
/// ```
/// # use shade_math::{codec::pack_double_2x32, vec2};
/// assert_eq!(pack_double_2x32(1.0), vec2(0, 0x3ff0_0000));
/// ```
pub fn pack_double_2x32<Q: Qualifier>(value: f64) -> Vector<u32, 2, Q> {
    let bits = value.to_bits();
    Vector::from_array([bits as u32, (bits >> 32) as u32])
}

/// Joins two 32-bit words (low word first) into the `f64` with that bit pattern.
pub fn unpack_double_2x32<Q: Qualifier>(words: Vector<u32, 2, Q>) -> f64 {
    let [lo, hi] = words.into_array();
    f64::from_bits(u64::from(hi) << 32 | u64::from(lo))
}
