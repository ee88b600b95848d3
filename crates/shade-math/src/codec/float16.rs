use std::{cmp::Ordering, fmt};

use crate::{storage::Qualifier, Vector};

/// An IEEE 754 binary16 ("half precision") floating-point number.
///
/// This type only stores and converts values; arithmetic is done after converting to [`f32`],
/// which represents every [`Half`] exactly.
#[derive(Clone, Copy, Default)]
#[repr(transparent)]
pub struct Half(u16);

unsafe impl bytemuck::Zeroable for Half {}
unsafe impl bytemuck::Pod for Half {}

impl Half {
    pub const ZERO: Self = Self(0x0000);
    pub const NEG_ZERO: Self = Self(0x8000);
    pub const ONE: Self = Self(0x3c00);
    pub const INFINITY: Self = Self(0x7c00);
    pub const NEG_INFINITY: Self = Self(0xfc00);
    pub const NAN: Self = Self(0x7e00);
    /// Largest finite value, `65504`.
    pub const MAX: Self = Self(0x7bff);
    /// Smallest positive normal value, `2^-14`.
    pub const MIN_POSITIVE: Self = Self(0x0400);
    /// Smallest positive subnormal value, `2^-24`.
    pub const MIN_POSITIVE_SUBNORMAL: Self = Self(0x0001);
    /// Difference between `1.0` and the next larger representable value, `2^-10`.
    pub const EPSILON: Self = Self(0x1400);

    #[inline]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn to_bits(self) -> u16 {
        self.0
    }

    /// Converts an [`f32`] to the nearest [`Half`], rounding ties to even.
    ///
    /// Values too large for a half saturate to infinity of the same sign, values too small
    /// become subnormal or signed zero. `NaN` stays `NaN`.
    #[inline]
    pub fn from_f32(value: f32) -> Self {
        Self(f32_to_half_bits(value))
    }

    /// Converts this value to [`f32`]. The conversion is exact.
    #[inline]
    pub fn to_f32(self) -> f32 {
        half_bits_to_f32(self.0)
    }

    pub fn is_nan(self) -> bool {
        self.0 & 0x7c00 == 0x7c00 && self.0 & 0x03ff != 0
    }

    pub fn is_finite(self) -> bool {
        self.0 & 0x7c00 != 0x7c00
    }

    pub fn is_sign_negative(self) -> bool {
        self.0 & 0x8000 != 0
    }
}

impl From<Half> for f32 {
    fn from(h: Half) -> Self {
        h.to_f32()
    }
}

impl From<f32> for Half {
    fn from(f: f32) -> Self {
        Half::from_f32(f)
    }
}

/// Compares the represented values: `NaN` is unequal to everything and `-0 == +0`.
impl PartialEq for Half {
    fn eq(&self, other: &Self) -> bool {
        self.to_f32() == other.to_f32()
    }
}

impl PartialOrd for Half {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.to_f32().partial_cmp(&other.to_f32())
    }
}

impl fmt::Debug for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.to_f32(), f)
    }
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_f32(), f)
    }
}

/// Encodes an [`f32`] as the bit pattern of the nearest half-precision value.
///
/// Rounds to nearest, ties to even. Overflow saturates to signed infinity, underflow produces a
/// subnormal or signed zero. `NaN` keeps its sign and a non-zero mantissa.
///
/// # Examples
///
/// ```
/// # use shade_math::codec::f32_to_half_bits;
/// assert_eq!(f32_to_half_bits(1.0), 0x3c00);
/// assert_eq!(f32_to_half_bits(-2.0), 0xc000);
/// assert_eq!(f32_to_half_bits(1e6), 0x7c00);
/// assert_eq!(f32_to_half_bits(-1e-10), 0x8000);
/// ```
pub fn f32_to_half_bits(value: f32) -> u16 {
    let bits = value.to_bits();
    let sign = ((bits >> 16) & 0x8000) as u16;
    // Exponent rebased from the f32 bias (127) to the half bias (15).
    let exp = ((bits >> 23) & 0xff) as i32 - (127 - 15);
    let man = bits & 0x007f_ffff;

    if exp == 0xff - (127 - 15) {
        if man == 0 {
            return sign | 0x7c00;
        }
        // NaN: keep the high mantissa bits, but never let them become all zero.
        let man = (man >> 13) as u16;
        return sign | 0x7c00 | man | u16::from(man == 0);
    }

    if exp <= 0 {
        if exp < -10 {
            // Below half of the smallest subnormal.
            return sign;
        }
        // Subnormal: make the implicit bit explicit and shift it into place.
        let man = man | 0x0080_0000;
        let shift = (14 - exp) as u32;
        let half_man = man >> shift;
        let round_bit = 1 << (shift - 1);
        let odd_or_sticky = man & ((round_bit << 1) | (round_bit - 1)) != 0;
        let rounded = if man & round_bit != 0 && odd_or_sticky {
            half_man + 1
        } else {
            half_man
        };
        // A carry out of the mantissa correctly yields the smallest normal number.
        return sign | rounded as u16;
    }

    // Normal: round the 23-bit mantissa to 10 bits.
    let man = man + 0x0fff + ((man >> 13) & 1);
    let (exp, man) = if man & 0x0080_0000 != 0 {
        (exp + 1, 0)
    } else {
        (exp, man)
    };
    if exp > 30 {
        return sign | 0x7c00;
    }
    sign | (exp as u16) << 10 | (man >> 13) as u16
}

/// Decodes a half-precision bit pattern to the [`f32`] with the same value.
///
/// # Examples
///
/// ```
/// # use shade_math::codec::half_bits_to_f32;
/// assert_eq!(half_bits_to_f32(0x3c00), 1.0);
/// assert_eq!(half_bits_to_f32(0x0001), 2f32.powi(-24));
/// assert!(half_bits_to_f32(0x7e00).is_nan());
/// ```
pub fn half_bits_to_f32(bits: u16) -> f32 {
    let sign = u32::from(bits & 0x8000) << 16;
    let mut exp = i32::from((bits >> 10) & 0x1f);
    let mut man = u32::from(bits & 0x03ff);

    if exp == 0 {
        if man == 0 {
            return f32::from_bits(sign);
        }
        // Subnormal: renormalize until the implicit bit shows up.
        while man & 0x0400 == 0 {
            man <<= 1;
            exp -= 1;
        }
        exp += 1;
        man &= !0x0400;
    } else if exp == 31 {
        return f32::from_bits(sign | 0x7f80_0000 | man << 13);
    }

    let exp = (exp + (127 - 15)) as u32;
    f32::from_bits(sign | exp << 23 | man << 13)
}

/// Encodes `value` as a half float.
pub fn pack_half_1x16(value: f32) -> u16 {
    f32_to_half_bits(value)
}

/// Decodes a half float.
pub fn unpack_half_1x16(bits: u16) -> f32 {
    half_bits_to_f32(bits)
}

/// Encodes both components as half floats; component 0 ends up in the low 16 bits.
///
/// # Examples
///
/// ```
/// # use shade_math::{codec::pack_half_2x16, vec2};
/// assert_eq!(pack_half_2x16(vec2(1.0, -2.0)), 0xc000_3c00);
/// ```
pub fn pack_half_2x16<Q: Qualifier>(v: Vector<f32, 2, Q>) -> u32 {
    pack_lanes(v.into_array().map(f32_to_half_bits), 16)
}

/// Decodes two half floats, component 0 from the low 16 bits.
pub fn unpack_half_2x16<Q: Qualifier>(packed: u32) -> Vector<f32, 2, Q> {
    Vector::from_array(unpack_lanes(packed, 16).map(half_bits_to_f32))
}

/// Encodes all 4 components as half floats; component 0 ends up in the low 16 bits.
pub fn pack_half_4x16<Q: Qualifier>(v: Vector<f32, 4, Q>) -> u64 {
    pack_lanes(v.into_array().map(f32_to_half_bits), 16)
}

/// Decodes 4 half floats, component 0 from the low 16 bits.
pub fn unpack_half_4x16<Q: Qualifier>(packed: u64) -> Vector<f32, 4, Q> {
    Vector::from_array(unpack_lanes(packed, 16).map(half_bits_to_f32))
}

/// Unsigned words that 8 or 16 bit lanes can be packed into.
pub(crate) trait Word: Copy {
    fn from_lanes(lanes: &[u16], width: u32) -> Self;
    fn lane(self, index: usize, width: u32) -> u16;
}

macro_rules! word {
    ($($ty:ty),+) => {
        $(
            impl Word for $ty {
                fn from_lanes(lanes: &[u16], width: u32) -> Self {
                    lanes
                        .iter()
                        .enumerate()
                        .fold(0, |acc, (i, &lane)| acc | (lane as $ty) << (i as u32 * width))
                }

                fn lane(self, index: usize, width: u32) -> u16 {
                    let mask = <$ty>::MAX >> (<$ty>::BITS - width);
                    ((self >> (index as u32 * width)) & mask) as u16
                }
            }
        )+
    };
}
word!(u16, u32, u64);

/// Packs `width`-bit lanes into a word, lane 0 in the least significant bits.
pub(crate) fn pack_lanes<W: Word, const N: usize>(lanes: [u16; N], width: u32) -> W {
    W::from_lanes(&lanes, width)
}

/// Splits a word into `width`-bit lanes, lane 0 from the least significant bits.
pub(crate) fn unpack_lanes<W: Word, const N: usize>(word: W, width: u32) -> [u16; N] {
    std::array::from_fn(|i| word.lane(i, width))
}

#[cfg(test)]
mod tests {
    use crate::{vec2, vec4, Vec2f, Vec4f};

    use super::*;

    #[test]
    fn special_values() {
        assert_eq!(f32_to_half_bits(0.0), 0x0000);
        assert_eq!(f32_to_half_bits(-0.0), 0x8000);
        assert_eq!(f32_to_half_bits(f32::INFINITY), 0x7c00);
        assert_eq!(f32_to_half_bits(f32::NEG_INFINITY), 0xfc00);
        assert_eq!(f32_to_half_bits(65504.0), 0x7bff);
        assert_eq!(f32_to_half_bits(-65504.0), 0xfbff);
        assert_eq!(f32_to_half_bits(2f32.powi(-14)), 0x0400);
        assert_eq!(f32_to_half_bits(2f32.powi(-24)), 0x0001);

        assert_eq!(half_bits_to_f32(0x8000).to_bits(), (-0.0f32).to_bits());
        assert_eq!(half_bits_to_f32(0x7c00), f32::INFINITY);
        assert_eq!(half_bits_to_f32(0xfc00), f32::NEG_INFINITY);
        assert_eq!(half_bits_to_f32(0x7bff), 65504.0);
        assert_eq!(half_bits_to_f32(0x03ff), 1023.0 * 2f32.powi(-24));
    }

    #[test]
    fn nan() {
        let quiet = f32_to_half_bits(f32::NAN);
        assert_eq!(quiet & 0x7c00, 0x7c00);
        assert_ne!(quiet & 0x03ff, 0);

        // Payload only in the low bits, which do not survive the conversion.
        let low_payload = f32::from_bits(0xff80_0001);
        let bits = f32_to_half_bits(low_payload);
        assert_eq!(bits, 0xfc01);
        assert!(half_bits_to_f32(bits).is_nan());
        assert!(half_bits_to_f32(bits).is_sign_negative());
        assert!(Half::from_bits(bits).is_nan());
    }

    #[test]
    fn rounding() {
        // Halfway between 1.0 and the next half (1 + 2^-10): ties to the even mantissa 1.0.
        assert_eq!(f32_to_half_bits(1.0 + 2f32.powi(-11)), 0x3c00);
        // Halfway between 1 + 2^-10 and 1 + 2^-9: ties to even, upwards.
        assert_eq!(f32_to_half_bits(1.0 + 3.0 * 2f32.powi(-11)), 0x3c02);
        // Just above the halfway point.
        assert_eq!(f32_to_half_bits(1.0 + 2f32.powi(-11) + 2f32.powi(-20)), 0x3c01);
        // Mantissa carry into the exponent.
        assert_eq!(f32_to_half_bits(2.0 - 2f32.powi(-12)), 0x4000);
        // Rounds up into infinity.
        assert_eq!(f32_to_half_bits(65520.0), 0x7c00);
        assert_eq!(f32_to_half_bits(65519.0), 0x7bff);
    }

    #[test]
    fn subnormals() {
        // Exactly half the smallest subnormal: ties to even (zero).
        assert_eq!(f32_to_half_bits(2f32.powi(-25)), 0x0000);
        assert_eq!(f32_to_half_bits(-2f32.powi(-25)), 0x8000);
        // Slightly more than half rounds up.
        assert_eq!(f32_to_half_bits(2f32.powi(-25) * 1.5), 0x0001);
        // 1.5 * 2^-24 ties to the even neighbor 2 * 2^-24.
        assert_eq!(f32_to_half_bits(1.5 * 2f32.powi(-24)), 0x0002);
        assert_eq!(f32_to_half_bits(2.5 * 2f32.powi(-24)), 0x0002);
        // Largest subnormal rounding up into the smallest normal.
        assert_eq!(f32_to_half_bits(2f32.powi(-14) - 2f32.powi(-26)), 0x0400);

        for bits in 0x0001..0x0400 {
            assert_eq!(f32_to_half_bits(half_bits_to_f32(bits)), bits);
        }
    }

    #[test]
    fn every_half_round_trips() {
        for bits in 0..=u16::MAX {
            let h = Half::from_bits(bits);
            if h.is_nan() {
                assert!(h.to_f32().is_nan());
                continue;
            }
            assert_eq!(Half::from_f32(h.to_f32()).to_bits(), bits, "{bits:#06x}");
        }
    }

    #[test]
    fn packing() {
        assert_eq!(pack_half_1x16(0.5), 0x3800);
        assert_eq!(unpack_half_1x16(0x3800), 0.5);

        let v = vec2(1.0, -2.0);
        assert_eq!(pack_half_2x16(v), 0xc000_3c00);
        assert_eq!(unpack_half_2x16::<crate::storage::Packed>(0xc000_3c00), v);

        let v = vec4(1.0, -2.0, 0.5, 65504.0);
        let packed = pack_half_4x16(v);
        assert_eq!(packed, 0x7bff_3800_c000_3c00);
        let back: Vec4f = unpack_half_4x16(packed);
        assert_eq!(back, v);

        // Precision loss is the only change.
        let back: Vec2f = unpack_half_2x16(pack_half_2x16(vec2(0.1, 1000.3)));
        assert_eq!(back, vec2(0.099975586, 1000.5));
    }

    #[test]
    fn half_type() {
        assert_eq!(Half::ONE.to_f32(), 1.0);
        assert_eq!(Half::MAX.to_f32(), 65504.0);
        assert_eq!(Half::EPSILON.to_f32(), 2f32.powi(-10));
        assert_eq!(Half::MIN_POSITIVE.to_f32(), 2f32.powi(-14));
        assert_eq!(Half::ZERO, Half::NEG_ZERO);
        assert_ne!(Half::NAN, Half::NAN);
        assert!(Half::NEG_INFINITY < Half::ZERO);
        assert!(!Half::INFINITY.is_finite());
        assert!(Half::NEG_ZERO.is_sign_negative());
        assert_eq!(Half::from(3.0).to_bits(), 0x4200);
        assert_eq!(f32::from(Half::from_bits(0x4200)), 3.0);
        assert_eq!(format!("{:?}", Half::ONE), "1.0");
        assert_eq!(Half::default().to_bits(), 0);
    }
}
