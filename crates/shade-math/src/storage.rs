//! Storage qualifiers and the layout selector.
//!
//! Every [`Vector`] carries a *qualifier* type parameter that picks its memory layout:
//!
//! - [`Packed`] stores exactly `N` elements with the alignment of a single element. This is the
//!   default, and the layout to use for vertex buffers and other tightly packed data.
//! - [`Aligned`] reserves a full 4-lane register: the vector is aligned to 4 elements, so a
//!   3-component vector occupies 4 slots. When the target has a hardware vector register for the
//!   element kind and lane count, element-wise arithmetic is lowered onto it.
//!
//! The qualifier never changes results. Both layouts produce bit-identical values for identical
//! inputs; the register path only exists for speed. If the target has no matching register (or
//! the `simd` feature is disabled), aligned vectors silently use the element-wise path.
//!
//! [`Vector`]: crate::Vector

pub(crate) mod hw;

use std::{array, fmt, hash::Hash, mem};

use crate::{Scalar, ScalarKind, Vector};

mod sealed {
    pub trait Sealed {}
}

/// Zero-sized alignment markers placed in front of vector storage.
pub trait AlignMarker:
    Copy + Default + fmt::Debug + PartialEq + Eq + Hash + Send + Sync + 'static
{
    /// The (only) value of the marker.
    const MARKER: Self;
}

macro_rules! markers {
    ($($(#[$attr:meta])* $name:ident;)+) => {
        $(
            $(#[$attr])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $name;

            impl AlignMarker for $name {
                const MARKER: Self = $name;
            }
        )+
    };
}
markers! {
    /// Marker that adds no alignment requirement.
    NoAlign;
    #[repr(align(4))]
    Align4;
    #[repr(align(8))]
    Align8;
    #[repr(align(16))]
    Align16;
    #[repr(align(32))]
    Align32;
}

/// A storage qualifier, selecting the memory layout of vectors, matrices and quaternions.
///
/// This trait is sealed; [`Packed`] and [`Aligned`] are the only implementors.
pub trait Qualifier:
    Copy + Default + fmt::Debug + PartialEq + Eq + Hash + Send + Sync + 'static + sealed::Sealed
{
    /// Alignment marker stored alongside the elements of a vector of `T`.
    type Marker<T: Scalar>: AlignMarker;

    /// Whether this layout asks for register alignment (and thus allows the hardware path).
    const ALIGNED: bool;

    /// Human-readable name of the qualifier.
    const NAME: &'static str;
}

/// Tightly packed storage: `N` elements, aligned like a single element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Packed;

/// Register-friendly storage: aligned to (and padded up to) 4 elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Aligned;

impl sealed::Sealed for Packed {}
impl Qualifier for Packed {
    type Marker<T: Scalar> = NoAlign;
    const ALIGNED: bool = false;
    const NAME: &'static str = "packed";
}

impl sealed::Sealed for Aligned {}
impl Qualifier for Aligned {
    type Marker<T: Scalar> = T::Align4;
    const ALIGNED: bool = true;
    const NAME: &'static str = "aligned";
}

/// Element-wise operations that may be lowered onto a hardware register.
#[doc(hidden)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaneOp {
    Add,
    Sub,
    Mul,
    Div,
}

/// A hardware vector register that aligned vectors can be aliased to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Register {
    /// Element kind held in each lane.
    pub kind: ScalarKind,
    /// Number of lanes.
    pub lanes: usize,
    /// Register width in bits.
    pub bits: usize,
    /// Name of the register type on this target.
    pub name: &'static str,
}

/// Looks up the hardware register for `n` lanes of `kind` on the compilation target.
///
/// Returns [`None`] if there is none, or if the `simd` feature is disabled.
pub const fn register_for(kind: ScalarKind, n: usize) -> Option<Register> {
    if !hw::AVAILABLE {
        return None;
    }
    match (kind, n) {
        (ScalarKind::F32, 4) => Some(Register {
            kind,
            lanes: 4,
            bits: 128,
            name: hw::F32X4,
        }),
        (ScalarKind::F64, 2) => Some(Register {
            kind,
            lanes: 2,
            bits: 128,
            name: hw::F64X2,
        }),
        _ => None,
    }
}

/// Describes how a vector type is laid out in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StorageLayout {
    /// Element kind.
    pub kind: ScalarKind,
    /// Number of meaningful components (`N`).
    pub components: usize,
    /// Number of element-sized slots reserved, including padding.
    pub slots: usize,
    /// Size in bytes.
    pub size: usize,
    /// Alignment in bytes.
    pub align: usize,
    /// Hardware register used for bulk arithmetic, if any.
    pub register: Option<Register>,
}

impl fmt::Display for StorageLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{}: {} slots, {} bytes, align {}",
            self.kind, self.components, self.slots, self.size, self.align,
        )?;
        if let Some(reg) = &self.register {
            write!(f, ", register {} ({} bits)", reg.name, reg.bits)?;
        }
        Ok(())
    }
}

/// Returns the layout descriptor for `Vector<T, N, Q>`.
///
/// # Examples
///
/// ```
/// # use shade_math::storage::*;
/// let packed = layout::<f32, 3, Packed>();
/// assert_eq!((packed.slots, packed.size), (3, 12));
///
/// let aligned = layout::<f32, 3, Aligned>();
/// assert_eq!((aligned.slots, aligned.size, aligned.align), (4, 16, 16));
/// ```
pub fn layout<T: Scalar, const N: usize, Q: Qualifier>() -> StorageLayout {
    let size = mem::size_of::<Vector<T, N, Q>>();
    StorageLayout {
        kind: T::KIND,
        components: N,
        slots: size / mem::size_of::<T>(),
        size,
        align: mem::align_of::<Vector<T, N, Q>>(),
        register: if Q::ALIGNED {
            register_for(T::KIND, N)
        } else {
            None
        },
    }
}

/// The hardware registers available for aligned vectors on this target.
#[derive(Debug, Clone, Copy, Default)]
pub struct Capabilities {
    _priv: (),
}

impl Capabilities {
    /// Returns the capabilities of the compilation target.
    pub fn current() -> Self {
        Self { _priv: () }
    }

    /// Iterates over every `(kind, lanes)` pair that has a hardware register.
    pub fn registers(&self) -> impl Iterator<Item = Register> {
        ScalarKind::ALL
            .into_iter()
            .flat_map(|kind| (1..=4).filter_map(move |n| register_for(kind, n)))
    }

    /// Whether any register is available at all.
    pub fn has_registers(&self) -> bool {
        self.registers().next().is_some()
    }

    /// Logs the capability table at *debug* level.
    pub fn log(&self) {
        if !self.has_registers() {
            log::debug!("no hardware vector registers; aligned vectors use the plain path");
            return;
        }
        for reg in self.registers() {
            log::debug!(
                "{}x{} aliases {} ({} bits)",
                reg.kind,
                reg.lanes,
                reg.name,
                reg.bits
            );
        }
    }
}

/// Combines two element arrays, using the hardware register when `Q` allows it.
#[inline]
pub(crate) fn zip_lanes<T, const N: usize, Q, F>(
    op: Option<LaneOp>,
    a: [T; N],
    b: [T; N],
    f: F,
) -> [T; N]
where
    T: Scalar,
    Q: Qualifier,
    F: Fn(T, T) -> T,
{
    if Q::ALIGNED {
        if let Some(op) = op {
            if let Some(out) = T::lanes(op, &a, &b) {
                return out;
            }
        }
    }
    array::from_fn(|i| f(a[i], b[i]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_layouts() {
        assert_eq!(layout::<f32, 1, Packed>().size, 4);
        assert_eq!(layout::<f32, 3, Packed>().slots, 3);
        assert_eq!(layout::<u8, 3, Packed>().size, 3);
        assert_eq!(layout::<f64, 4, Packed>().align, 8);
        assert_eq!(layout::<bool, 2, Packed>().size, 2);
        assert_eq!(layout::<f32, 4, Packed>().register, None);
    }

    #[test]
    fn aligned_reserves_four_slots() {
        fn check<T: Scalar>() {
            let l1 = layout::<T, 1, Aligned>();
            let l2 = layout::<T, 2, Aligned>();
            let l3 = layout::<T, 3, Aligned>();
            let l4 = layout::<T, 4, Aligned>();
            for l in [l1, l2, l3, l4] {
                assert_eq!(l.slots, 4, "{l}");
                assert_eq!(l.align, 4 * mem::size_of::<T>(), "{l}");
            }
        }
        check::<f32>();
        check::<f64>();
        check::<i8>();
        check::<u16>();
        check::<i32>();
        check::<u64>();
        check::<bool>();
    }

    #[test]
    fn registers() {
        for reg in Capabilities::current().registers() {
            assert_eq!(reg.lanes * reg.kind.size() * 8, reg.bits);
        }
        assert_eq!(register_for(ScalarKind::I32, 4), None);
        assert_eq!(register_for(ScalarKind::F32, 3), None);
        assert_eq!(layout::<f32, 3, Aligned>().register, None);
        assert_eq!(
            layout::<f32, 4, Aligned>().register,
            register_for(ScalarKind::F32, 4)
        );
    }

    #[test]
    fn lanes_match_scalar() {
        let a = [1.5f32, -0.0, f32::INFINITY, 1.0e-40];
        let b = [3.0f32, 0.0, 2.0, 7.0];
        for op in [LaneOp::Add, LaneOp::Sub, LaneOp::Mul, LaneOp::Div] {
            let f: fn(f32, f32) -> f32 = match op {
                LaneOp::Add => |a: f32, b: f32| a + b,
                LaneOp::Sub => |a: f32, b: f32| a - b,
                LaneOp::Mul => |a: f32, b: f32| a * b,
                LaneOp::Div => |a: f32, b: f32| a / b,
            };
            let packed = zip_lanes::<f32, 4, Packed, _>(Some(op), a, b, f);
            let aligned = zip_lanes::<f32, 4, Aligned, _>(Some(op), a, b, f);
            assert_eq!(packed.map(f32::to_bits), aligned.map(f32::to_bits), "{op:?}");
        }
    }

    #[test]
    fn display() {
        let l = layout::<u8, 3, Packed>();
        assert_eq!(l.to_string(), "u8x3: 3 slots, 3 bytes, align 1");
    }
}
