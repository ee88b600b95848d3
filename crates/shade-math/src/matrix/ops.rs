use std::{
    array,
    ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign},
};

use crate::{approx::ApproxEq, storage::Qualifier, Matrix, Number, Scalar, Vector};

impl<T: Scalar, const C: usize, const R: usize, Q: Qualifier> Index<usize> for Matrix<T, C, R, Q> {
    type Output = Vector<T, R, Q>;

    #[inline]
    fn index(&self, col: usize) -> &Self::Output {
        &self.cols[col]
    }
}

impl<T: Scalar, const C: usize, const R: usize, Q: Qualifier> IndexMut<usize>
    for Matrix<T, C, R, Q>
{
    #[inline]
    fn index_mut(&mut self, col: usize) -> &mut Self::Output {
        &mut self.cols[col]
    }
}

impl<T: Scalar, const C: usize, const R: usize, Q: Qualifier> PartialEq for Matrix<T, C, R, Q> {
    fn eq(&self, other: &Self) -> bool {
        self.cols == other.cols
    }
}

impl<T: Scalar + Eq, const C: usize, const R: usize, Q: Qualifier> Eq for Matrix<T, C, R, Q> {}

impl<T, const C: usize, const R: usize, Q> ApproxEq for Matrix<T, C, R, Q>
where
    T: Scalar + ApproxEq,
    Q: Qualifier,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, tolerance: Self::Tolerance) -> bool {
        self.cols.abs_diff_eq(&other.cols, tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, tolerance: Self::Tolerance) -> bool {
        self.cols.rel_diff_eq(&other.cols, tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps: u32) -> bool {
        self.cols.ulps_diff_eq(&other.cols, ulps)
    }
}

impl<T, const C: usize, const R: usize, Q> Neg for Matrix<T, C, R, Q>
where
    T: Scalar + Neg<Output = T>,
    Q: Qualifier,
{
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            cols: self.cols.map(Neg::neg),
        }
    }
}

/// Column-wise matrix addition and subtraction.
macro_rules! matrix_binops {
    ($($trait:ident $method:ident $sym:tt, $assign:ident $assign_method:ident;)+) => {
        $(
            impl<T: Number, const C: usize, const R: usize, Q: Qualifier> $trait for Matrix<T, C, R, Q> {
                type Output = Self;

                fn $method(self, rhs: Self) -> Self {
                    Self {
                        cols: array::from_fn(|i| self.cols[i] $sym rhs.cols[i]),
                    }
                }
            }

            impl<T: Number, const C: usize, const R: usize, Q: Qualifier> $assign for Matrix<T, C, R, Q> {
                fn $assign_method(&mut self, rhs: Self) {
                    *self = *self $sym rhs;
                }
            }
        )+
    };
}
matrix_binops! {
    Add add +, AddAssign add_assign;
    Sub sub -, SubAssign sub_assign;
}

/// Matrix * Scalar and Matrix / Scalar, element-wise.
macro_rules! scalar_binops {
    ($($trait:ident $method:ident $sym:tt, $assign:ident $assign_method:ident;)+) => {
        $(
            impl<T: Number, const C: usize, const R: usize, Q: Qualifier> $trait<T> for Matrix<T, C, R, Q> {
                type Output = Self;

                fn $method(self, rhs: T) -> Self {
                    Self {
                        cols: self.cols.map(|col| col $sym rhs),
                    }
                }
            }

            impl<T: Number, const C: usize, const R: usize, Q: Qualifier> $assign<T> for Matrix<T, C, R, Q> {
                fn $assign_method(&mut self, rhs: T) {
                    *self = *self $sym rhs;
                }
            }
        )+
    };
}
scalar_binops! {
    Mul mul *, MulAssign mul_assign;
    Div div /, DivAssign div_assign;
}

/// Scalar * Matrix.
macro_rules! scalar_lhs {
    ($($ty:ty),+) => {
        $(
            impl<const C: usize, const R: usize, Q: Qualifier> Mul<Matrix<$ty, C, R, Q>> for $ty {
                type Output = Matrix<$ty, C, R, Q>;

                fn mul(self, rhs: Matrix<$ty, C, R, Q>) -> Self::Output {
                    rhs * self
                }
            }
        )+
    };
}
scalar_lhs!(f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);

/// Matrix * Column Vector.
///
/// Sums the columns scaled by the vector's components. For 4 columns the partial products are
/// added pairwise, `(c0 + c1) + (c2 + c3)`.
impl<T, const C: usize, const R: usize, Q> Mul<Vector<T, C, Q>> for Matrix<T, C, R, Q>
where
    T: Number,
    Q: Qualifier,
{
    type Output = Vector<T, R, Q>;

    fn mul(self, rhs: Vector<T, C, Q>) -> Self::Output {
        let m = &self.cols;
        match C {
            0 => Vector::ZERO,
            4 => (m[0] * rhs[0] + m[1] * rhs[1]) + (m[2] * rhs[2] + m[3] * rhs[3]),
            _ => (1..C).fold(m[0] * rhs[0], |acc, i| acc + m[i] * rhs[i]),
        }
    }
}

/// Row Vector * Matrix.
///
/// Each result component is the dot product of the vector with one column.
impl<T, const C: usize, const R: usize, Q> Mul<Matrix<T, C, R, Q>> for Vector<T, R, Q>
where
    T: Number,
    Q: Qualifier,
{
    type Output = Vector<T, C, Q>;

    fn mul(self, rhs: Matrix<T, C, R, Q>) -> Self::Output {
        Vector::from_fn(|i| self.dot(rhs.cols[i]))
    }
}

/// Matrix * Matrix.
///
/// Each result column is `lhs` applied to the matching column of `rhs`, summing left to right.
impl<T, const K: usize, const C: usize, const R: usize, Q> Mul<Matrix<T, C, K, Q>>
    for Matrix<T, K, R, Q>
where
    T: Number,
    Q: Qualifier,
{
    type Output = Matrix<T, C, R, Q>;

    fn mul(self, rhs: Matrix<T, C, K, Q>) -> Self::Output {
        let m = &self.cols;
        Matrix {
            cols: rhs.cols.map(|b| {
                if K == 0 {
                    return Vector::ZERO;
                }
                (1..K).fold(m[0] * b[0], |acc, k| acc + m[k] * b[k])
            }),
        }
    }
}

impl<T, const N: usize, Q> MulAssign for Matrix<T, N, N, Q>
where
    T: Number,
    Q: Qualifier,
{
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
