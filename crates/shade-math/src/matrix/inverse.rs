//! Determinants and inverses of square matrices up to 4x4.
//!
//! The floating-point operations are performed in a fixed order and grouping, so results are
//! reproducible bit-for-bit across implementations that follow the same staging. Rearranging the
//! sums, even into mathematically equivalent forms, changes the rounding.
//!
//! Inversion does not check for singular input: a zero determinant makes its reciprocal infinite,
//! and the resulting matrix consists of `inf` and `NaN` entries.

use crate::{storage::Qualifier, Float, Matrix, Signed, Vector};

impl<T: Signed, Q: Qualifier> Matrix<T, 2, 2, Q> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    #[inline]
    pub fn determinant(&self) -> T {
        let m = self.into_column_major();
        m[0][0] * m[1][1] - m[1][0] * m[0][1]
    }
}

impl<T: Float, Q: Qualifier> Matrix<T, 2, 2, Q> {
    /// Computes the inverse of this 2x2 matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// assert_eq!(Mat2f::IDENTITY.inverse(), Mat2f::IDENTITY);
    /// let m = Mat2::<_>::from_rows([[4.0, 7.0], [2.0, 6.0]]);
    /// assert_approx_eq!(m * m.inverse(), Mat2::identity()).abs(1e-6);
    /// ```
    pub fn inverse(&self) -> Self {
        let m = self.into_column_major();
        let one_over_det = T::ONE / (m[0][0] * m[1][1] - m[1][0] * m[0][1]);

        Self::from_column_major([
            [m[1][1] * one_over_det, -m[0][1] * one_over_det],
            [-m[1][0] * one_over_det, m[0][0] * one_over_det],
        ])
    }
}

impl<T: Signed, Q: Qualifier> Matrix<T, 3, 3, Q> {
    /// Returns the [determinant] of the matrix, expanded along the first column.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// let m = Mat3::<_>::from_columns([[1, 0, 5], [2, 1, 6], [3, 4, 0]]);
    /// assert_eq!(m.determinant(), 1);
    /// ```
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        let m = self.into_column_major();
        m[0][0] * (m[1][1] * m[2][2] - m[2][1] * m[1][2])
            - m[1][0] * (m[0][1] * m[2][2] - m[2][1] * m[0][2])
            + m[2][0] * (m[0][1] * m[1][2] - m[1][1] * m[0][2])
    }
}

impl<T: Float, Q: Qualifier> Matrix<T, 3, 3, Q> {
    /// Computes the inverse of this 3x3 matrix.
    ///
    /// The cofactors are each multiplied by the reciprocal of the determinant.
    pub fn inverse(&self) -> Self {
        let m = self.into_column_major();
        let one_over_det = T::ONE / self.determinant();

        let mut inv = [[T::ZERO; 3]; 3];
        inv[0][0] = (m[1][1] * m[2][2] - m[2][1] * m[1][2]) * one_over_det;
        inv[1][0] = -(m[1][0] * m[2][2] - m[2][0] * m[1][2]) * one_over_det;
        inv[2][0] = (m[1][0] * m[2][1] - m[2][0] * m[1][1]) * one_over_det;
        inv[0][1] = -(m[0][1] * m[2][2] - m[2][1] * m[0][2]) * one_over_det;
        inv[1][1] = (m[0][0] * m[2][2] - m[2][0] * m[0][2]) * one_over_det;
        inv[2][1] = -(m[0][0] * m[2][1] - m[2][0] * m[0][1]) * one_over_det;
        inv[0][2] = (m[0][1] * m[1][2] - m[1][1] * m[0][2]) * one_over_det;
        inv[1][2] = -(m[0][0] * m[1][2] - m[1][0] * m[0][2]) * one_over_det;
        inv[2][2] = (m[0][0] * m[1][1] - m[1][0] * m[0][1]) * one_over_det;
        Self::from_column_major(inv)
    }
}

impl<T: Signed, Q: Qualifier> Matrix<T, 4, 4, Q> {
    /// Returns the [determinant] of the matrix.
    ///
    /// The 2x2 minors of the last two columns are computed once and shared between the four
    /// cofactors of the first column.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        let m = self.into_column_major();

        let sub00 = m[2][2] * m[3][3] - m[3][2] * m[2][3];
        let sub01 = m[2][1] * m[3][3] - m[3][1] * m[2][3];
        let sub02 = m[2][1] * m[3][2] - m[3][1] * m[2][2];
        let sub03 = m[2][0] * m[3][3] - m[3][0] * m[2][3];
        let sub04 = m[2][0] * m[3][2] - m[3][0] * m[2][2];
        let sub05 = m[2][0] * m[3][1] - m[3][0] * m[2][1];

        let cof = [
            m[1][1] * sub00 - m[1][2] * sub01 + m[1][3] * sub02,
            -(m[1][0] * sub00 - m[1][2] * sub03 + m[1][3] * sub04),
            m[1][0] * sub01 - m[1][1] * sub03 + m[1][3] * sub05,
            -(m[1][0] * sub02 - m[1][1] * sub04 + m[1][2] * sub05),
        ];

        m[0][0] * cof[0] + m[0][1] * cof[1] + m[0][2] * cof[2] + m[0][3] * cof[3]
    }
}

impl<T: Float, Q: Qualifier> Matrix<T, 4, 4, Q> {
    /// Computes the inverse of this 4x4 matrix.
    ///
    /// The adjugate is assembled from 18 shared 2x2 minors, and the determinant is recovered as
    /// the dot product of the first column with the first row of the adjugate, summed as
    /// `(x + y) + (z + w)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// let m = Mat4::<_>::from_diagonal([2.0, 4.0, 8.0, 1.0]);
    /// assert_eq!(m.inverse(), Mat4::from_diagonal([0.5, 0.25, 0.125, 1.0]));
    /// ```
    pub fn inverse(&self) -> Self {
        let m = self.into_column_major();

        let coef00 = m[2][2] * m[3][3] - m[3][2] * m[2][3];
        let coef02 = m[1][2] * m[3][3] - m[3][2] * m[1][3];
        let coef03 = m[1][2] * m[2][3] - m[2][2] * m[1][3];

        let coef04 = m[2][1] * m[3][3] - m[3][1] * m[2][3];
        let coef06 = m[1][1] * m[3][3] - m[3][1] * m[1][3];
        let coef07 = m[1][1] * m[2][3] - m[2][1] * m[1][3];

        let coef08 = m[2][1] * m[3][2] - m[3][1] * m[2][2];
        let coef10 = m[1][1] * m[3][2] - m[3][1] * m[1][2];
        let coef11 = m[1][1] * m[2][2] - m[2][1] * m[1][2];

        let coef12 = m[2][0] * m[3][3] - m[3][0] * m[2][3];
        let coef14 = m[1][0] * m[3][3] - m[3][0] * m[1][3];
        let coef15 = m[1][0] * m[2][3] - m[2][0] * m[1][3];

        let coef16 = m[2][0] * m[3][2] - m[3][0] * m[2][2];
        let coef18 = m[1][0] * m[3][2] - m[3][0] * m[1][2];
        let coef19 = m[1][0] * m[2][2] - m[2][0] * m[1][2];

        let coef20 = m[2][0] * m[3][1] - m[3][0] * m[2][1];
        let coef22 = m[1][0] * m[3][1] - m[3][0] * m[1][1];
        let coef23 = m[1][0] * m[2][1] - m[2][0] * m[1][1];

        let v = Vector::<T, 4, Q>::from_array;
        let fac0 = v([coef00, coef00, coef02, coef03]);
        let fac1 = v([coef04, coef04, coef06, coef07]);
        let fac2 = v([coef08, coef08, coef10, coef11]);
        let fac3 = v([coef12, coef12, coef14, coef15]);
        let fac4 = v([coef16, coef16, coef18, coef19]);
        let fac5 = v([coef20, coef20, coef22, coef23]);

        let vec0 = v([m[1][0], m[0][0], m[0][0], m[0][0]]);
        let vec1 = v([m[1][1], m[0][1], m[0][1], m[0][1]]);
        let vec2 = v([m[1][2], m[0][2], m[0][2], m[0][2]]);
        let vec3 = v([m[1][3], m[0][3], m[0][3], m[0][3]]);

        let inv0 = vec1 * fac0 - vec2 * fac1 + vec3 * fac2;
        let inv1 = vec0 * fac0 - vec2 * fac3 + vec3 * fac4;
        let inv2 = vec0 * fac1 - vec1 * fac3 + vec3 * fac5;
        let inv3 = vec0 * fac2 - vec1 * fac4 + vec2 * fac5;

        let (one, neg) = (T::ONE, -T::ONE);
        let sign_a = v([one, neg, one, neg]);
        let sign_b = v([neg, one, neg, one]);
        let adjugate = Self::from_columns([inv0 * sign_a, inv1 * sign_b, inv2 * sign_a, inv3 * sign_b]);

        let row0 = adjugate.row(0);
        let dot0 = self.cols[0] * row0;
        let dot1 = (dot0[0] + dot0[1]) + (dot0[2] + dot0[3]);

        adjugate * (T::ONE / dot1)
    }
}
