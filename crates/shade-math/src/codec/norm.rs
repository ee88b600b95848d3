//! Normalized integer packing.
//!
//! *Unsigned normalized* (unorm) encodings map `[0, 1]` onto `0..=2^bits - 1`, *signed
//! normalized* (snorm) encodings map `[-1, 1]` onto `-(2^(bits-1) - 1)..=2^(bits-1) - 1` in two's
//! complement. Encoding clamps the input to the valid range, scales it and rounds to the nearest
//! integer (half-way cases away from zero). Decoding multiplies by the reciprocal of the scale;
//! signed decoding clamps to `-1.0` since the most negative integer lies outside of the range.
//!
//! A `NaN` input encodes as zero.

use crate::{storage::Qualifier, Vector};

use super::float16::{pack_lanes, unpack_lanes};

fn unorm_scale(bits: u32) -> f32 {
    ((1u32 << bits) - 1) as f32
}

fn snorm_scale(bits: u32) -> f32 {
    ((1u32 << (bits - 1)) - 1) as f32
}

fn lane_mask(bits: u32) -> u16 {
    u16::MAX >> (16 - bits)
}

fn encode_unorm(value: f32, bits: u32) -> u16 {
    (value.clamp(0.0, 1.0) * unorm_scale(bits)).round() as u16
}

fn decode_unorm(lane: u16, bits: u32) -> f32 {
    f32::from(lane) * (1.0 / unorm_scale(bits))
}

fn encode_snorm(value: f32, bits: u32) -> u16 {
    let int = (value.clamp(-1.0, 1.0) * snorm_scale(bits)).round() as i16;
    int as u16 & lane_mask(bits)
}

fn decode_snorm(lane: u16, bits: u32) -> f32 {
    // Sign-extend from `bits` to 16 bits.
    let shift = 16 - bits;
    let int = ((lane << shift) as i16) >> shift;
    (f32::from(int) * (1.0 / snorm_scale(bits))).clamp(-1.0, 1.0)
}

/// Encodes a value in `[0, 1]` as an 8-bit unsigned normalized integer.
pub fn pack_unorm_1x8(value: f32) -> u8 {
    encode_unorm(value, 8) as u8
}

pub fn unpack_unorm_1x8(packed: u8) -> f32 {
    decode_unorm(packed.into(), 8)
}

/// Encodes a value in `[0, 1]` as a 16-bit unsigned normalized integer.
pub fn pack_unorm_1x16(value: f32) -> u16 {
    encode_unorm(value, 16)
}

pub fn unpack_unorm_1x16(packed: u16) -> f32 {
    decode_unorm(packed, 16)
}

/// Encodes a value in `[-1, 1]` as an 8-bit signed normalized integer.
pub fn pack_snorm_1x8(value: f32) -> u8 {
    encode_snorm(value, 8) as u8
}

pub fn unpack_snorm_1x8(packed: u8) -> f32 {
    decode_snorm(packed.into(), 8)
}

/// Encodes a value in `[-1, 1]` as a 16-bit signed normalized integer.
pub fn pack_snorm_1x16(value: f32) -> u16 {
    encode_snorm(value, 16)
}

pub fn unpack_snorm_1x16(packed: u16) -> f32 {
    decode_snorm(packed, 16)
}

macro_rules! norm_codecs {
    ($(
        $(#[$attr:meta])*
        $pack:ident / $unpack:ident: $n:literal x $bits:literal in $word:ty, $encode:ident / $decode:ident;
    )+) => {
        $(
            $(#[$attr])*
            pub fn $pack<Q: Qualifier>(v: Vector<f32, $n, Q>) -> $word {
                pack_lanes(v.into_array().map(|c| $encode(c, $bits)), $bits)
            }

            #[doc = concat!("Inverse of [`", stringify!($pack), "`].")]
            pub fn $unpack<Q: Qualifier>(packed: $word) -> Vector<f32, $n, Q> {
                Vector::from_array(unpack_lanes(packed, $bits).map(|lane| $decode(lane, $bits)))
            }
        )+
    };
}

norm_codecs! {
    /// Encodes 2 values in `[0, 1]` as 8-bit unsigned normalized integers.
    pack_unorm_2x8 / unpack_unorm_2x8: 2 x 8 in u16, encode_unorm / decode_unorm;
    /// Encodes 4 values in `[0, 1]` as 8-bit unsigned normalized integers.
    ///
    /// This is the usual RGBA8 color encoding.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::{codec::pack_unorm_4x8, vec4};
    /// assert_eq!(pack_unorm_4x8(vec4(1.0, 0.5, 0.0, 1.0)), 0xff00_80ff);
    /// ```
    pack_unorm_4x8 / unpack_unorm_4x8: 4 x 8 in u32, encode_unorm / decode_unorm;
    /// Encodes 2 values in `[0, 1]` as 16-bit unsigned normalized integers.
    pack_unorm_2x16 / unpack_unorm_2x16: 2 x 16 in u32, encode_unorm / decode_unorm;
    /// Encodes 4 values in `[0, 1]` as 16-bit unsigned normalized integers.
    pack_unorm_4x16 / unpack_unorm_4x16: 4 x 16 in u64, encode_unorm / decode_unorm;
    /// Encodes 2 values in `[-1, 1]` as 8-bit signed normalized integers.
    pack_snorm_2x8 / unpack_snorm_2x8: 2 x 8 in u16, encode_snorm / decode_snorm;
    /// Encodes 4 values in `[-1, 1]` as 8-bit signed normalized integers.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::{codec::pack_snorm_4x8, vec4};
    /// assert_eq!(pack_snorm_4x8(vec4(-1.0, 0.0, 0.5, 1.0)), 0x7f40_0081);
    /// ```
    pack_snorm_4x8 / unpack_snorm_4x8: 4 x 8 in u32, encode_snorm / decode_snorm;
    /// Encodes 2 values in `[-1, 1]` as 16-bit signed normalized integers.
    pack_snorm_2x16 / unpack_snorm_2x16: 2 x 16 in u32, encode_snorm / decode_snorm;
    /// Encodes 4 values in `[-1, 1]` as 16-bit signed normalized integers.
    pack_snorm_4x16 / unpack_snorm_4x16: 4 x 16 in u64, encode_snorm / decode_snorm;
}

/// Bit layout of the `3x10_1x2` formats: three 10-bit lanes followed by one 2-bit lane.
const LANES_3X10_1X2: [(u32, u32); 4] = [(0, 10), (10, 10), (20, 10), (30, 2)];

/// Encodes `x`, `y`, `z` in `[0, 1]` as 10-bit and `w` in `[0, 1]` as 2-bit unsigned normalized
/// integers (`RGB10_A2`).
pub fn pack_unorm_3x10_1x2<Q: Qualifier>(v: Vector<f32, 4, Q>) -> u32 {
    let mut packed = 0;
    for ((shift, bits), c) in LANES_3X10_1X2.into_iter().zip(v.into_array()) {
        packed |= u32::from(encode_unorm(c, bits)) << shift;
    }
    packed
}

/// Inverse of [`pack_unorm_3x10_1x2`].
pub fn unpack_unorm_3x10_1x2<Q: Qualifier>(packed: u32) -> Vector<f32, 4, Q> {
    Vector::from_array(LANES_3X10_1X2.map(|(shift, bits)| {
        decode_unorm(((packed >> shift) as u16) & lane_mask(bits), bits)
    }))
}

/// Encodes `x`, `y`, `z` in `[-1, 1]` as 10-bit and `w` in `[-1, 1]` as 2-bit signed normalized
/// integers.
///
/// The 2-bit lane can only represent `-1`, `0` and `1`.
pub fn pack_snorm_3x10_1x2<Q: Qualifier>(v: Vector<f32, 4, Q>) -> u32 {
    let mut packed = 0;
    for ((shift, bits), c) in LANES_3X10_1X2.into_iter().zip(v.into_array()) {
        packed |= u32::from(encode_snorm(c, bits)) << shift;
    }
    packed
}

/// Inverse of [`pack_snorm_3x10_1x2`].
pub fn unpack_snorm_3x10_1x2<Q: Qualifier>(packed: u32) -> Vector<f32, 4, Q> {
    Vector::from_array(LANES_3X10_1X2.map(|(shift, bits)| {
        decode_snorm(((packed >> shift) as u16) & lane_mask(bits), bits)
    }))
}

#[cfg(test)]
mod tests {
    use crate::{storage::{Aligned, Packed}, vec2, vec4, Vec2f, Vec4, Vec4f};

    use super::*;

    #[test]
    fn unorm_scalars() {
        assert_eq!(pack_unorm_1x8(0.0), 0);
        assert_eq!(pack_unorm_1x8(1.0), 255);
        assert_eq!(pack_unorm_1x8(0.5), 128);
        assert_eq!(pack_unorm_1x8(-3.0), 0);
        assert_eq!(pack_unorm_1x8(7.0), 255);
        assert_eq!(pack_unorm_1x8(f32::NAN), 0);
        assert_eq!(pack_unorm_1x16(1.0), 0xffff);
        assert_eq!(pack_unorm_1x16(0.25), 16384);

        assert_eq!(unpack_unorm_1x8(255), 1.0);
        assert_eq!(unpack_unorm_1x8(0), 0.0);
        assert_eq!(unpack_unorm_1x16(0xffff), 1.0);
        for i in 0..=255u8 {
            assert_eq!(pack_unorm_1x8(unpack_unorm_1x8(i)), i);
        }
    }

    #[test]
    fn snorm_scalars() {
        assert_eq!(pack_snorm_1x8(1.0), 0x7f);
        assert_eq!(pack_snorm_1x8(-1.0), 0x81);
        assert_eq!(pack_snorm_1x8(0.0), 0x00);
        assert_eq!(pack_snorm_1x8(-5.0), 0x81);
        assert_eq!(pack_snorm_1x16(-1.0), 0x8001);
        assert_eq!(pack_snorm_1x16(0.5), 16384);

        assert_eq!(unpack_snorm_1x8(0x7f), 1.0);
        assert_eq!(unpack_snorm_1x8(0x81), -1.0);
        // The asymmetric minimum is clamped.
        assert_eq!(unpack_snorm_1x8(0x80), -1.0);
        assert_eq!(unpack_snorm_1x16(0x8000), -1.0);
        for i in 0..=255u8 {
            if i == 0x80 {
                continue;
            }
            assert_eq!(pack_snorm_1x8(unpack_snorm_1x8(i)), i);
        }
    }

    #[test]
    fn lane_order() {
        assert_eq!(pack_unorm_4x8(vec4(1.0, 0.0, 0.0, 0.0)), 0x0000_00ff);
        assert_eq!(pack_unorm_4x8(vec4(0.0, 0.0, 0.0, 1.0)), 0xff00_0000);
        assert_eq!(pack_unorm_2x8(vec2(1.0, 0.0)), 0x00ff);
        assert_eq!(pack_unorm_2x16(vec2(0.0, 1.0)), 0xffff_0000);
        assert_eq!(pack_unorm_4x16(vec4(1.0, 0.0, 0.0, 0.5)), 0x8000_0000_0000_ffff);
        assert_eq!(pack_snorm_2x8(vec2(-1.0, 1.0)), 0x7f81);
        assert_eq!(pack_snorm_2x16(vec2(-1.0, 1.0)), 0x7fff_8001);
        assert_eq!(pack_snorm_4x16(vec4(0.0, 0.0, 0.0, -1.0)), 0x8001_0000_0000_0000);
    }

    #[test]
    fn round_trips() {
        let v = vec4(0.0, 0.2, 0.6, 1.0);
        let back: Vec4f = unpack_unorm_4x8(pack_unorm_4x8(v));
        assert!(back.approx_equal(v, 0.5 / 255.0).all(), "{back:?}");
        let back: Vec4f = unpack_unorm_4x16(pack_unorm_4x16(v));
        assert!(back.approx_equal(v, 0.5 / 65535.0).all(), "{back:?}");

        let v = vec4(-1.0, -0.3, 0.3, 1.0);
        let back: Vec4f = unpack_snorm_4x8(pack_snorm_4x8(v));
        assert!(back.approx_equal(v, 0.5 / 127.0).all(), "{back:?}");
        let back: Vec2f = unpack_snorm_2x16(pack_snorm_2x16(vec2(-0.3, 0.3)));
        assert!(back.approx_equal(vec2(-0.3, 0.3), 0.5 / 32767.0).all(), "{back:?}");

        // Qualifiers do not affect the packed bits.
        let aligned: Vec4<f32, Aligned> = v.requalify();
        assert_eq!(pack_snorm_4x8(aligned), pack_snorm_4x8(v));
        let aligned_back: Vec4<f32, Aligned> = unpack_snorm_4x8(pack_snorm_4x8(v));
        let packed_back: Vec4f = unpack_snorm_4x8(pack_snorm_4x8(v));
        assert_eq!(aligned_back.requalify::<Packed>(), packed_back);
    }

    #[test]
    fn packed_3x10_1x2() {
        assert_eq!(pack_unorm_3x10_1x2(vec4(1.0, 0.0, 0.0, 0.0)), 0x0000_03ff);
        assert_eq!(pack_unorm_3x10_1x2(vec4(0.0, 1.0, 0.0, 0.0)), 0x000f_fc00);
        assert_eq!(pack_unorm_3x10_1x2(vec4(0.0, 0.0, 1.0, 0.0)), 0x3ff0_0000);
        assert_eq!(pack_unorm_3x10_1x2(vec4(0.0, 0.0, 0.0, 1.0)), 0xc000_0000);
        assert_eq!(pack_unorm_3x10_1x2(vec4(1.0, 1.0, 1.0, 1.0)), u32::MAX);
        let back: Vec4f = unpack_unorm_3x10_1x2(0xc000_03ff);
        assert_eq!(back, vec4(1.0, 0.0, 0.0, 1.0));

        assert_eq!(pack_snorm_3x10_1x2(vec4(1.0, 0.0, 0.0, 0.0)), 0x0000_01ff);
        assert_eq!(pack_snorm_3x10_1x2(vec4(-1.0, 0.0, 0.0, 0.0)), 0x0000_0201);
        assert_eq!(pack_snorm_3x10_1x2(vec4(0.0, 0.0, 0.0, -1.0)), 0xc000_0000);
        assert_eq!(pack_snorm_3x10_1x2(vec4(0.0, 0.0, 0.0, 1.0)), 0x4000_0000);
        let back: Vec4f = unpack_snorm_3x10_1x2(0xc000_0201);
        assert_eq!(back, vec4(-1.0, 0.0, 0.0, -1.0));
        // Most negative 10-bit value clamps to -1.
        let back: Vec4f = unpack_snorm_3x10_1x2(0x0000_0200);
        assert_eq!(back.x(), -1.0);
    }
}
