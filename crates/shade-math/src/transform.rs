//! Affine transformation matrices.
//!
//! All matrices here act on column vectors: `m * p` transforms the point `p` (with `w = 1`). The
//! post-multiplying builders ([`Matrix::translate`], [`Matrix::rotate`], [`Matrix::scale`]) apply
//! the new transformation *before* the existing one, so
//! `Mat4::IDENTITY.translate(t).rotate(a, axis)` first rotates, then translates.

use crate::{storage::Qualifier, Float, Matrix, Vector};

impl<T: Float, Q: Qualifier> Matrix<T, 4, 4, Q> {
    /// Creates a matrix translating points by `offset`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// let m = Mat4::from_translation(vec3(1.0, 2.0, 3.0));
    /// assert_eq!(m * vec4(1.0, 1.0, 1.0, 1.0), vec4(2.0, 3.0, 4.0, 1.0));
    /// // Directions (`w = 0`) are unaffected.
    /// assert_eq!(m * vec4(1.0, 1.0, 1.0, 0.0), vec4(1.0, 1.0, 1.0, 0.0));
    /// ```
    pub fn from_translation(offset: Vector<T, 3, Q>) -> Self {
        let mut m = Self::IDENTITY;
        m[3] = offset.extend(T::ONE);
        m
    }

    /// Creates a matrix scaling each axis by the matching component of `factors`.
    pub fn from_scale(factors: Vector<T, 3, Q>) -> Self {
        Self::from_diagonal(factors.extend(T::ONE))
    }

    /// Creates a matrix rotating by `radians` around `axis` (counterclockwise when looking
    /// against the axis direction).
    ///
    /// `axis` does not have to be normalized.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// let m = Mat4::from_axis_angle(vec3(0.0, 0.0, 1.0), FRAC_PI_2);
    /// assert_approx_eq!(m * vec4(1.0, 0.0, 0.0, 1.0), vec4(0.0, 1.0, 0.0, 1.0)).abs(1e-6);
    /// ```
    pub fn from_axis_angle(axis: Vector<T, 3, Q>, radians: T) -> Self {
        Self::IDENTITY.rotate(radians, axis)
    }

    /// Returns `self * Mat4::from_translation(offset)`.
    pub fn translate(self, offset: Vector<T, 3, Q>) -> Self {
        let m = &self;
        let mut result = self;
        result[3] = m[0] * offset[0] + m[1] * offset[1] + m[2] * offset[2] + m[3];
        result
    }

    /// Returns `self * Mat4::from_axis_angle(axis, radians)`.
    pub fn rotate(self, radians: T, axis: Vector<T, 3, Q>) -> Self {
        let (s, c) = radians.sin_cos();
        let axis = axis.normalize();
        let temp = axis * (T::ONE - c);

        let r = [
            [
                c + temp[0] * axis[0],
                temp[0] * axis[1] + s * axis[2],
                temp[0] * axis[2] - s * axis[1],
            ],
            [
                temp[1] * axis[0] - s * axis[2],
                c + temp[1] * axis[1],
                temp[1] * axis[2] + s * axis[0],
            ],
            [
                temp[2] * axis[0] + s * axis[1],
                temp[2] * axis[1] - s * axis[0],
                c + temp[2] * axis[2],
            ],
        ];

        let m = &self;
        let mut result = self;
        for (col, r) in r.iter().enumerate() {
            result[col] = m[0] * r[0] + m[1] * r[1] + m[2] * r[2];
        }
        result
    }

    /// Returns `self * Mat4::from_scale(factors)`.
    pub fn scale(self, factors: Vector<T, 3, Q>) -> Self {
        let mut result = self;
        for i in 0..3 {
            result[i] = self[i] * factors[i];
        }
        result
    }
}
