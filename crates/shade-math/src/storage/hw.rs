//! Hardware register lowering for aligned vectors.
//!
//! Only whole registers are used: `f32 x 4` and `f64 x 2`. Every operation here is a single
//! IEEE-754 operation per lane, so it rounds exactly like the scalar instruction would.

#[cfg(all(feature = "simd", target_arch = "x86_64", target_feature = "sse2"))]
mod imp {
    use std::arch::x86_64::*;

    use crate::storage::LaneOp;

    pub const AVAILABLE: bool = true;
    pub const F32X4: &str = "__m128";
    pub const F64X2: &str = "__m128d";

    #[inline]
    pub fn lanes_f32<const N: usize>(op: LaneOp, a: &[f32; N], b: &[f32; N]) -> Option<[f32; N]> {
        if N != 4 {
            return None;
        }
        let mut out = [0.0; N];
        // Safety: `N == 4`, so every pointer covers exactly one 128-bit register. Unaligned
        // loads and stores are used, and SSE2 is enabled for this target.
        unsafe {
            let a = _mm_loadu_ps(a.as_ptr());
            let b = _mm_loadu_ps(b.as_ptr());
            let r = match op {
                LaneOp::Add => _mm_add_ps(a, b),
                LaneOp::Sub => _mm_sub_ps(a, b),
                LaneOp::Mul => _mm_mul_ps(a, b),
                LaneOp::Div => _mm_div_ps(a, b),
            };
            _mm_storeu_ps(out.as_mut_ptr(), r);
        }
        Some(out)
    }

    #[inline]
    pub fn lanes_f64<const N: usize>(op: LaneOp, a: &[f64; N], b: &[f64; N]) -> Option<[f64; N]> {
        if N != 2 {
            return None;
        }
        let mut out = [0.0; N];
        // Safety: `N == 2`, see above.
        unsafe {
            let a = _mm_loadu_pd(a.as_ptr());
            let b = _mm_loadu_pd(b.as_ptr());
            let r = match op {
                LaneOp::Add => _mm_add_pd(a, b),
                LaneOp::Sub => _mm_sub_pd(a, b),
                LaneOp::Mul => _mm_mul_pd(a, b),
                LaneOp::Div => _mm_div_pd(a, b),
            };
            _mm_storeu_pd(out.as_mut_ptr(), r);
        }
        Some(out)
    }
}

#[cfg(all(feature = "simd", target_arch = "aarch64", target_feature = "neon"))]
mod imp {
    use std::arch::aarch64::*;

    use crate::storage::LaneOp;

    pub const AVAILABLE: bool = true;
    pub const F32X4: &str = "float32x4_t";
    pub const F64X2: &str = "float64x2_t";

    #[inline]
    pub fn lanes_f32<const N: usize>(op: LaneOp, a: &[f32; N], b: &[f32; N]) -> Option<[f32; N]> {
        if N != 4 {
            return None;
        }
        let mut out = [0.0; N];
        // Safety: `N == 4`, so every pointer covers exactly one 128-bit register.
        unsafe {
            let a = vld1q_f32(a.as_ptr());
            let b = vld1q_f32(b.as_ptr());
            let r = match op {
                LaneOp::Add => vaddq_f32(a, b),
                LaneOp::Sub => vsubq_f32(a, b),
                LaneOp::Mul => vmulq_f32(a, b),
                LaneOp::Div => vdivq_f32(a, b),
            };
            vst1q_f32(out.as_mut_ptr(), r);
        }
        Some(out)
    }

    #[inline]
    pub fn lanes_f64<const N: usize>(op: LaneOp, a: &[f64; N], b: &[f64; N]) -> Option<[f64; N]> {
        if N != 2 {
            return None;
        }
        let mut out = [0.0; N];
        // Safety: `N == 2`, see above.
        unsafe {
            let a = vld1q_f64(a.as_ptr());
            let b = vld1q_f64(b.as_ptr());
            let r = match op {
                LaneOp::Add => vaddq_f64(a, b),
                LaneOp::Sub => vsubq_f64(a, b),
                LaneOp::Mul => vmulq_f64(a, b),
                LaneOp::Div => vdivq_f64(a, b),
            };
            vst1q_f64(out.as_mut_ptr(), r);
        }
        Some(out)
    }
}

#[cfg(not(any(
    all(feature = "simd", target_arch = "x86_64", target_feature = "sse2"),
    all(feature = "simd", target_arch = "aarch64", target_feature = "neon"),
)))]
mod imp {
    use crate::storage::LaneOp;

    pub const AVAILABLE: bool = false;
    pub const F32X4: &str = "";
    pub const F64X2: &str = "";

    #[inline]
    pub fn lanes_f32<const N: usize>(_: LaneOp, _: &[f32; N], _: &[f32; N]) -> Option<[f32; N]> {
        None
    }

    #[inline]
    pub fn lanes_f64<const N: usize>(_: LaneOp, _: &[f64; N], _: &[f64; N]) -> Option<[f64; N]> {
        None
    }
}

pub use imp::*;
