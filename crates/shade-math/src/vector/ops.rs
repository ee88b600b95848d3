//! Implementations of `std::ops`.
//!
//! All arithmetic and bitwise operators act element-wise. Each binary operator exists for
//! `vector op vector`, `vector op scalar`, `scalar op vector`, and between an `N`-component
//! vector and a 1-component vector (which is broadcast), plus the compound assignment forms.

use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr,
    ShrAssign, Sub, SubAssign,
};

use crate::{
    approx::ApproxEq,
    storage::{self, LaneOp, Qualifier},
    Scalar,
};

use super::Vector;

impl<T: Scalar, const N: usize, Q: Qualifier> Index<usize> for Vector<T, N, Q> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.elems[index]
    }
}

impl<T: Scalar, const N: usize, Q: Qualifier> IndexMut<usize> for Vector<T, N, Q> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.elems[index]
    }
}

impl<T: Scalar, const N: usize, Q: Qualifier> PartialEq for Vector<T, N, Q> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.elems == other.elems
    }
}

impl<T: Scalar + Eq, const N: usize, Q: Qualifier> Eq for Vector<T, N, Q> {}

impl<T: Scalar, const N: usize, Q: Qualifier> PartialEq<[T; N]> for Vector<T, N, Q> {
    #[inline]
    fn eq(&self, other: &[T; N]) -> bool {
        self.elems == *other
    }
}

impl<T: Scalar, const N: usize, Q: Qualifier> PartialEq<Vector<T, N, Q>> for [T; N] {
    #[inline]
    fn eq(&self, other: &Vector<T, N, Q>) -> bool {
        *self == other.elems
    }
}

impl<T, const N: usize, Q> ApproxEq for Vector<T, N, Q>
where
    T: Scalar + ApproxEq,
    Q: Qualifier,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, tolerance: Self::Tolerance) -> bool {
        self.elems.abs_diff_eq(&other.elems, tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, tolerance: Self::Tolerance) -> bool {
        self.elems.rel_diff_eq(&other.elems, tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps: u32) -> bool {
        self.elems.ulps_diff_eq(&other.elems, ulps)
    }
}

/// Element-wise negation.
impl<T, const N: usize, Q> Neg for Vector<T, N, Q>
where
    T: Scalar + Neg<Output = T>,
    Q: Qualifier,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(T::neg)
    }
}

/// Element-wise logical (for `bool`) or bitwise (for integers) negation.
impl<T, const N: usize, Q> Not for Vector<T, N, Q>
where
    T: Scalar + Not<Output = T>,
    Q: Qualifier,
{
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        self.map(T::not)
    }
}

macro_rules! binops {
    ($($trait:ident $method:ident $sym:tt, $assign:ident $assign_method:ident, $lane:expr;)+) => {
        $(
            impl<T, const N: usize, Q> $trait for Vector<T, N, Q>
            where
                T: Scalar + $trait<Output = T>,
                Q: Qualifier,
            {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: Self) -> Self {
                    Self::from_array(storage::zip_lanes::<T, N, Q, _>(
                        $lane,
                        self.elems,
                        rhs.elems,
                        |a, b| a $sym b,
                    ))
                }
            }

            impl<T, const N: usize, Q> $trait<T> for Vector<T, N, Q>
            where
                T: Scalar + $trait<Output = T>,
                Q: Qualifier,
            {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: T) -> Self {
                    self $sym Self::splat(rhs)
                }
            }

            impl<T, const N: usize, Q> $assign for Vector<T, N, Q>
            where
                T: Scalar + $trait<Output = T>,
                Q: Qualifier,
            {
                #[inline]
                fn $assign_method(&mut self, rhs: Self) {
                    *self = *self $sym rhs;
                }
            }

            impl<T, const N: usize, Q> $assign<T> for Vector<T, N, Q>
            where
                T: Scalar + $trait<Output = T>,
                Q: Qualifier,
            {
                #[inline]
                fn $assign_method(&mut self, rhs: T) {
                    *self = *self $sym rhs;
                }
            }
        )+
    };
}
binops! {
    Add add +, AddAssign add_assign, Some(LaneOp::Add);
    Sub sub -, SubAssign sub_assign, Some(LaneOp::Sub);
    Mul mul *, MulAssign mul_assign, Some(LaneOp::Mul);
    Div div /, DivAssign div_assign, Some(LaneOp::Div);
    Rem rem %, RemAssign rem_assign, None;
    BitAnd bitand &, BitAndAssign bitand_assign, None;
    BitOr bitor |, BitOrAssign bitor_assign, None;
    BitXor bitxor ^, BitXorAssign bitxor_assign, None;
    Shl shl <<, ShlAssign shl_assign, None;
    Shr shr >>, ShrAssign shr_assign, None;
}

/// `Vector<T, N>` combined with a broadcast `Vector<T, 1>`, in both orders.
macro_rules! broadcast {
    (@dim $n:literal, [$($trait:ident $method:ident $sym:tt, $assign:ident $assign_method:ident;)+]) => {
        $(
            impl<T, Q> $trait<Vector<T, 1, Q>> for Vector<T, $n, Q>
            where
                T: Scalar + $trait<Output = T>,
                Q: Qualifier,
            {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: Vector<T, 1, Q>) -> Self {
                    self $sym rhs.elems[0]
                }
            }

            impl<T, Q> $trait<Vector<T, $n, Q>> for Vector<T, 1, Q>
            where
                T: Scalar + $trait<Output = T>,
                Q: Qualifier,
            {
                type Output = Vector<T, $n, Q>;

                #[inline]
                fn $method(self, rhs: Vector<T, $n, Q>) -> Vector<T, $n, Q> {
                    Vector::<T, $n, Q>::splat(self.elems[0]) $sym rhs
                }
            }

            impl<T, Q> $assign<Vector<T, 1, Q>> for Vector<T, $n, Q>
            where
                T: Scalar + $trait<Output = T>,
                Q: Qualifier,
            {
                #[inline]
                fn $assign_method(&mut self, rhs: Vector<T, 1, Q>) {
                    *self = *self $sym rhs.elems[0];
                }
            }
        )+
    };
    ($($n:literal),+ => $ops:tt) => {
        $( broadcast!(@dim $n, $ops); )+
    };
}
broadcast!(2, 3, 4 => [
    Add add +, AddAssign add_assign;
    Sub sub -, SubAssign sub_assign;
    Mul mul *, MulAssign mul_assign;
    Div div /, DivAssign div_assign;
    Rem rem %, RemAssign rem_assign;
    BitAnd bitand &, BitAndAssign bitand_assign;
    BitOr bitor |, BitOrAssign bitor_assign;
    BitXor bitxor ^, BitXorAssign bitxor_assign;
    Shl shl <<, ShlAssign shl_assign;
    Shr shr >>, ShrAssign shr_assign;
]);

/// `scalar op vector` for the primitive element kinds.
macro_rules! scalar_lhs {
    (@ty $ty:ty, [$($trait:ident $method:ident $sym:tt),+]) => {
        $(
            impl<const N: usize, Q: Qualifier> $trait<Vector<$ty, N, Q>> for $ty {
                type Output = Vector<$ty, N, Q>;

                #[inline]
                fn $method(self, rhs: Vector<$ty, N, Q>) -> Vector<$ty, N, Q> {
                    Vector::<$ty, N, Q>::splat(self) $sym rhs
                }
            }
        )+
    };
    ($($ty:ty),+ => $ops:tt) => {
        $( scalar_lhs!(@ty $ty, $ops); )+
    };
}
scalar_lhs!(f32, f64 => [Add add +, Sub sub -, Mul mul *, Div div /, Rem rem %]);
scalar_lhs!(i8, i16, i32, i64, u8, u16, u32, u64 => [
    Add add +, Sub sub -, Mul mul *, Div div /, Rem rem %,
    BitAnd bitand &, BitOr bitor |, BitXor bitxor ^, Shl shl <<, Shr shr >>
]);
scalar_lhs!(bool => [BitAnd bitand &, BitOr bitor |, BitXor bitxor ^]);
