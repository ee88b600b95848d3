use std::{
    array, fmt,
    hash::{Hash, Hasher},
};

use crate::{
    storage::{Packed, Qualifier},
    Number, One, Scalar, Signed, Trig, Vector, Zero,
};

mod inverse;
mod ops;

/// A 2x2 matrix.
pub type Mat2<T, Q = Packed> = Matrix<T, 2, 2, Q>;
/// A 3x3 matrix.
pub type Mat3<T, Q = Packed> = Matrix<T, 3, 3, Q>;
/// A 4x4 matrix.
pub type Mat4<T, Q = Packed> = Matrix<T, 4, 4, Q>;

/// A matrix with 2 columns and 3 rows.
pub type Mat2x3<T, Q = Packed> = Matrix<T, 2, 3, Q>;
/// A matrix with 2 columns and 4 rows.
pub type Mat2x4<T, Q = Packed> = Matrix<T, 2, 4, Q>;
/// A matrix with 3 columns and 2 rows.
pub type Mat3x2<T, Q = Packed> = Matrix<T, 3, 2, Q>;
/// A matrix with 3 columns and 4 rows.
pub type Mat3x4<T, Q = Packed> = Matrix<T, 3, 4, Q>;
/// A matrix with 4 columns and 2 rows.
pub type Mat4x2<T, Q = Packed> = Matrix<T, 4, 2, Q>;
/// A matrix with 4 columns and 3 rows.
pub type Mat4x3<T, Q = Packed> = Matrix<T, 4, 3, Q>;

/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;
/// A 4x4 matrix with [`f64`] elements.
pub type Mat4d = Mat4<f64>;

/// A column-major matrix with `C` columns and `R` rows of element type `T`.
///
/// Each column is a `Vector<T, R, Q>`, so the storage qualifier `Q` applies to every column. The
/// dimensions follow the shading language convention: a `Mat2x3` has 2 columns and 3 rows.
///
/// # Construction
///
/// - [`Matrix::from_columns`] and [`Matrix::from_rows`] take arrays of columns or rows.
/// - [`Matrix::from_column_major`] takes nested arrays in memory order.
/// - [`Matrix::from_fn`] invokes a closure with the column and row of each element.
/// - [`Matrix::identity`] (or [`Matrix::IDENTITY`]) and [`Matrix::from_scalar`] create diagonal
///   matrices; [`Matrix::zero`] (or [`Matrix::ZERO`]) an all-zero matrix. There is no
///   [`Default`] impl, so neither is picked implicitly.
/// - [`Matrix::reshape`] converts between sizes, filling in from the identity matrix.
///
/// # Element Access
///
/// Indexing a matrix with a column index yields the column vector, so `m[col][row]` addresses a
/// single element. Indexing out of bounds panics, just like it does for slices. [`Matrix::get`]
/// performs checked access.
///
/// ```
/// # use shade_math::*;
/// let mut mat = Mat2::from_rows([
///     [0, 1],
///     [2, 3],
/// ]);
/// mat[1][0] = 4;
/// assert_eq!(mat.row(0), vec2(0, 4));
/// assert_eq!(mat[0], vec2(0, 2));
/// assert_eq!(mat.get(1, 1), Some(&3));
/// assert_eq!(mat.get(2, 0), None);
/// ```
#[repr(C)]
pub struct Matrix<T: Scalar, const C: usize, const R: usize, Q: Qualifier = Packed> {
    cols: [Vector<T, R, Q>; C],
}

unsafe impl<T, const C: usize, const R: usize, Q> bytemuck::Zeroable for Matrix<T, C, R, Q>
where
    T: Scalar + bytemuck::Zeroable,
    Q: Qualifier,
{
}
#[rustfmt::skip]
unsafe impl<T: Scalar + bytemuck::Pod, const C: usize, const R: usize> bytemuck::Pod for Matrix<T, C, R, Packed> {}

impl<T: Scalar, const C: usize, const R: usize, Q: Qualifier> Clone for Matrix<T, C, R, Q> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Scalar, const C: usize, const R: usize, Q: Qualifier> Copy for Matrix<T, C, R, Q> {}

impl<T: Scalar + Hash, const C: usize, const R: usize, Q: Qualifier> Hash for Matrix<T, C, R, Q> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cols.hash(state);
    }
}

impl<T: Scalar, const C: usize, const R: usize, Q: Qualifier> Matrix<T, C, R, Q> {
    /// Creates a [`Matrix`] from an array of column vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// let rows = Mat2::<_>::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Mat2::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_columns<U: Into<Vector<T, R, Q>>>(columns: [U; C]) -> Self {
        Self {
            cols: columns.map(Into::into),
        }
    }

    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// let mat = Mat3x2::from_rows([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    /// ]);
    /// assert_eq!(mat.column(2), vec2(3, 6));
    /// ```
    pub fn from_rows<U: Into<Vector<T, C, Q>>>(rows: [U; R]) -> Self {
        Matrix::<T, R, C, Q>::from_columns(rows).transpose()
    }

    /// Creates a [`Matrix`] from nested arrays in column-major memory order.
    pub fn from_column_major(elems: [[T; R]; C]) -> Self {
        Self::from_columns(elems)
    }

    /// Returns the elements as nested arrays in column-major memory order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// let mat = Mat2::<_>::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.into_column_major(), [[1, 3], [2, 4]]);
    /// ```
    pub fn into_column_major(self) -> [[T; R]; C] {
        self.cols.map(Vector::into_array)
    }

    /// Creates a [`Matrix`] by invoking a closure with the column and row of each element.
    ///
    /// This mirrors [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// let mat = Mat3x2::<_>::from_fn(|col, row| (row * 10 + col) as i32);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self {
            cols: array::from_fn(|col| Vector::from_fn(|row| cb(col, row))),
        }
    }

    /// Applies a closure to each element, returning a new matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// let mat = Mat2::<_>::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// assert_eq!(mat.map(|i| i * 2), Matrix::from_rows([
    ///     [0, 2],
    ///     [4, 6],
    /// ]));
    /// ```
    pub fn map<U, F>(self, mut f: F) -> Matrix<U, C, R, Q>
    where
        U: Scalar,
        F: FnMut(T) -> U,
    {
        Matrix {
            cols: self.cols.map(|col| col.map(&mut f)),
        }
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// let mat = Mat3x2::<_>::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 3],
    ///     [1, 4],
    ///     [2, 5],
    /// ]));
    /// ```
    pub fn transpose(self) -> Matrix<T, R, C, Q> {
        Matrix::from_fn(|col, row| self.cols[row][col])
    }

    /// Returns column `index`.
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn column(&self, index: usize) -> Vector<T, R, Q> {
        self.cols[index]
    }

    /// Returns row `index`.
    ///
    /// Panics if `index` is out of bounds.
    pub fn row(&self, index: usize) -> Vector<T, C, Q> {
        Vector::from_fn(|col| self.cols[col][index])
    }

    /// Returns the columns as an array.
    #[inline]
    pub fn columns(&self) -> &[Vector<T, R, Q>; C] {
        &self.cols
    }

    /// Returns a reference to the element at `(col, row)`, or [`None`] if out of bounds.
    pub fn get(&self, col: usize, row: usize) -> Option<&T> {
        self.cols
            .get(col)
            .and_then(|col| col.as_slice().get(row))
    }

    /// Returns a mutable reference to the element at `(col, row)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, col: usize, row: usize) -> Option<&mut T> {
        self.cols
            .get_mut(col)
            .and_then(|col| col.as_mut_slice().get_mut(row))
    }

    /// Returns the same matrix with a different storage layout.
    pub fn requalify<Q2: Qualifier>(self) -> Matrix<T, C, R, Q2> {
        Matrix {
            cols: self.cols.map(Vector::requalify),
        }
    }

    /// Element-wise `==` (see [`Vector::equal`]), one boolean vector per column.
    pub fn equal(&self, other: &Self) -> [Vector<bool, R, Q>; C] {
        array::from_fn(|i| self.cols[i].equal(other.cols[i]))
    }
}

impl<T: Scalar + Zero, const C: usize, const R: usize, Q: Qualifier> Matrix<T, C, R, Q> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self {
        cols: [Vector::ZERO; C],
    };

    /// Returns a matrix with every element set to 0.
    #[inline]
    pub fn zero() -> Self {
        Self::ZERO
    }
}

impl<T: Scalar + Zero + One, const C: usize, const R: usize, Q: Qualifier> Matrix<T, C, R, Q> {
    /// The identity matrix: 1 on the diagonal and 0 everywhere else.
    ///
    /// Multiplying any vector with this matrix returns the vector unchanged.
    pub const IDENTITY: Self = {
        let mut cols = [Vector::ZERO; C];
        let mut i = 0;
        while i < C && i < R {
            cols[i] = cols[i].with_elem(i, T::ONE);
            i += 1;
        }
        Self { cols }
    };

    /// Returns the identity matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// let v = vec4(1.0, 2.0, 3.0, 1.0);
    /// assert_eq!(Mat4::identity() * v, v);
    /// ```
    #[inline]
    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Creates a matrix with `value` on its diagonal and 0 everywhere else.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// assert_eq!(Mat2::<_>::from_scalar(3), Mat2::from_rows([[3, 0], [0, 3]]));
    /// ```
    pub fn from_scalar(value: T) -> Self {
        Self::from_fn(|col, row| if col == row { value } else { T::ZERO })
    }

    /// Converts this matrix to another size.
    ///
    /// Elements present in `self` are copied. Elements outside of it are taken from the identity
    /// matrix, so embedding a 3x3 rotation into a 4x4 matrix yields a valid affine transform.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// let mat = Mat2::<_>::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.reshape::<3, 3>(), Mat3::from_rows([
    ///     [1, 2, 0],
    ///     [3, 4, 0],
    ///     [0, 0, 1],
    /// ]));
    /// assert_eq!(mat.reshape::<2, 1>(), Matrix::from_rows([[1, 2]]));
    /// ```
    pub fn reshape<const C2: usize, const R2: usize>(self) -> Matrix<T, C2, R2, Q> {
        Matrix::from_fn(|col, row| {
            if col < C && row < R {
                self.cols[col][row]
            } else if col == row {
                T::ONE
            } else {
                T::ZERO
            }
        })
    }
}

impl<T: Number, const C: usize, const R: usize, Q: Qualifier> Matrix<T, C, R, Q> {
    /// Multiplies `self` and `other` element by element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// let a = Mat2::<_>::from_rows([[1, 2], [3, 4]]);
    /// assert_eq!(a.comp_mul(a), Mat2::from_rows([[1, 4], [9, 16]]));
    /// ```
    pub fn comp_mul(self, other: Self) -> Self {
        Self {
            cols: array::from_fn(|i| self.cols[i] * other.cols[i]),
        }
    }

    /// Computes the outer product `column * rowᵀ`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// let m = Matrix::outer_product(vec3(1, 2, 3), vec2(10, 20));
    /// assert_eq!(m, Mat2x3::from_rows([
    ///     [10, 20],
    ///     [20, 40],
    ///     [30, 60],
    /// ]));
    /// ```
    pub fn outer_product(column: Vector<T, R, Q>, row: Vector<T, C, Q>) -> Self {
        Self {
            cols: array::from_fn(|i| column * row[i]),
        }
    }
}

impl<T: Scalar, const N: usize, Q: Qualifier> Matrix<T, N, N, Q> {
    /// Returns a [`Vector`] holding the diagonal elements of this square matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// let mat = Mat2::<_>::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.into_diagonal(), [1, 4]);
    /// ```
    pub fn into_diagonal(self) -> Vector<T, N, Q> {
        Vector::from_fn(|i| self.cols[i][i])
    }

    /// Creates a square matrix from its diagonal.
    ///
    /// Elements outside the diagonal are zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// let diag = Mat3::<_>::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N, Q>>>(diag: D) -> Self
    where
        T: Zero,
    {
        let diag = diag.into();
        Self::from_fn(|col, row| if col == row { diag[col] } else { T::ZERO })
    }

    /// Returns the *trace* of the matrix (the sum of all elements on the diagonal).
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// assert_eq!(Mat3::<_>::from_diagonal([1, 2, 3]).trace(), 1 + 2 + 3);
    /// assert_eq!(Mat3f::IDENTITY.trace(), 3.0);
    /// ```
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self.cols[i][i])
    }
}

impl<T: Signed + Trig, Q: Qualifier> Matrix<T, 2, 2, Q> {
    /// Creates a 2x2 rotation matrix for a clockwise rotation in the XY plane.
    pub fn rotation_clockwise(radians: T) -> Self {
        Self::rotation_counterclockwise(-radians)
    }

    /// Creates a 2x2 rotation matrix for a counterclockwise rotation in the XY plane.
    pub fn rotation_counterclockwise(radians: T) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::from_columns([[cos, sin], [-sin, cos]])
    }
}

impl<T: Scalar, const C: usize, const R: usize, Q: Qualifier> fmt::Debug for Matrix<T, C, R, Q> {
    /// Prints the matrix row by row, in natural reading order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Row<'a, T: Scalar, const C: usize, const R: usize, Q: Qualifier>(
            &'a Matrix<T, C, R, Q>,
            usize,
        );
        impl<'a, T: Scalar, const C: usize, const R: usize, Q: Qualifier> fmt::Debug
            for Row<'a, T, C, R, Q>
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for col in 0..C {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", self.0.cols[col][self.1])?;
                }
                write!(f, "]")
            }
        }

        let mut list = f.debug_list();
        for row in 0..R {
            list.entry(&Row(self, row));
        }
        list.finish()
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use crate::{assert_approx_eq, storage::Aligned, vec2, vec3, vec4, Vec4};

    use super::*;

    #[test]
    fn from_rows_columns() {
        assert_eq!(
            Mat3x2::<_>::from_rows([[1, 2, 3], [4, 5, 6]]),
            Mat3x2::from_columns([[1, 4], [2, 5], [3, 6]]),
        );
        assert_eq!(
            Mat3x2::from_column_major([[1, 4], [2, 5], [3, 6]]).row(1),
            vec3(4, 5, 6)
        );
    }

    #[test]
    fn diagonal() {
        let mat = Mat2::<_>::from_diagonal([1, 2]);

        #[rustfmt::skip]
        assert_eq!(mat, Matrix::from_rows([
            [1, 0],
            [0, 2],
        ]));

        assert_eq!(mat.into_diagonal(), [1, 2]);
    }

    #[test]
    fn fmt() {
        let mat = Mat2::<_>::from_rows([[0, 1], [2, 3]]);

        // Natural writing order (row-wise) for debug output.
        assert_eq!(format!("{:?}", mat), "[[0, 1], [2, 3]]");

        // `#` modifier prints each row in its own line, but not each individual element.
        assert_eq!(
            format!("{:#?}", mat),
            "
[
    [0, 1],
    [2, 3],
]
"
            .trim()
        );
    }

    #[test]
    fn constants() {
        assert_eq!(format!("{:?}", Mat2f::ZERO), "[[0.0, 0.0], [0.0, 0.0]]");
        assert_eq!(format!("{:?}", Mat2f::IDENTITY), "[[1.0, 0.0], [0.0, 1.0]]");
        assert_eq!(Mat4f::identity(), Mat4f::from_scalar(1.0));
        assert_eq!(Mat3x2::<u8>::IDENTITY, Mat3x2::from_rows([[1, 0, 0], [0, 1, 0]]));
        assert_eq!(Mat3::<i32>::zero(), Mat3::from_scalar(0));
    }

    #[rustfmt::skip]
    #[test]
    fn reshape() {
        let mat = Mat2::<_>::from_rows([
            [1, 2],
            [3, 4],
        ]);

        let larger = mat.reshape::<4, 3>();
        assert_eq!(larger, Matrix::from_rows([
            [1, 2, 0, 0],
            [3, 4, 0, 0],
            [0, 0, 1, 0],
        ]));

        let smaller = mat.reshape::<1, 2>();
        assert_eq!(smaller, Matrix::from_rows([
            [1],
            [3],
        ]));
    }

    #[test]
    fn transpose_twice() {
        let mat = Mat4x3::<_>::from_fn(|c, r| (c * 3 + r) as f32 * 0.5);
        assert_eq!(mat.transpose().transpose(), mat);
        assert_eq!(mat.transpose().column(2), mat.row(2));
    }

    #[test]
    fn mat_vec_mul() {
        let mat = Mat2::from_rows([[0, 1], [2, 3]]);
        let vec = vec2(4, 5);
        assert_eq!(mat * vec, [4 * 0 + 5 * 1, 4 * 2 + 5 * 3]);
        assert_eq!(vec * mat, [4 * 0 + 5 * 2, 4 * 1 + 5 * 3]);
        assert_eq!(vec * mat, mat.transpose() * vec);
    }

    #[test]
    fn identity_mul() {
        let v = vec4(1.0f32, 2.0, 3.0, 1.0);
        assert_eq!(Mat4f::identity() * v, v);
        let va: Vec4<f32, Aligned> = v.requalify();
        assert_eq!(Mat4::<f32, Aligned>::identity() * va, va);
    }

    #[test]
    fn mat_mat_mul() {
        #[rustfmt::skip]
        let a = Mat2x4::from_rows([
            [1, 2],
            [3, 4],
            [5, 6],
            [7, 8],
        ]);
        #[rustfmt::skip]
        let b = Mat3x2::from_rows([
            [9, 10, 11],
            [12, 13, 14],
        ]);
        let c: Mat3x4<i32> = a * b;
        assert_eq!(c[1][0], a[0][0] * b[1][0] + a[1][0] * b[1][1]);
        assert_eq!(c[2][2], a[0][2] * b[2][0] + a[1][2] * b[2][1]);
    }

    #[test]
    fn arithmetic() {
        let a = Mat2::<_>::from_rows([[1, 2], [3, 4]]);
        let b = Mat2::from_rows([[4, 3], [2, 1]]);
        assert_eq!(a + b, Mat2::from_scalar(5) + Mat2::from_rows([[0, 5], [5, 0]]));
        assert_eq!(a - a, Mat2::ZERO);
        assert_eq!(-a, a * -1);
        assert_eq!(2 * a, a + a);
        assert_eq!((a * 6) / 3, a * 2);
        assert_eq!(a.comp_mul(b), Mat2::from_rows([[4, 6], [6, 4]]));
    }

    #[test]
    fn outer() {
        let m = Mat3::outer_product(vec3(1.0, 2.0, 3.0), vec3(1.0, 0.0, -1.0));
        assert_eq!(m.column(0), vec3(1.0, 2.0, 3.0));
        assert_eq!(m.column(2), vec3(-1.0, -2.0, -3.0));
        assert_eq!(m.trace(), 1.0 + 0.0 - 3.0);
    }

    #[test]
    fn rotation() {
        let cw = Mat2f::rotation_clockwise(0.0);
        assert_eq!(cw, cw.inverse());

        let ccw = Mat2f::rotation_counterclockwise(0.0);
        assert_eq!(ccw, ccw.inverse());

        assert_eq!(ccw, cw);

        let cw = Mat2f::rotation_clockwise(PI);
        assert_approx_eq!(cw, cw.inverse()).abs(1e-6);
    }

    #[test]
    fn pod() {
        let m = Mat2f::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(bytemuck::cast::<_, [f32; 4]>(m), [1.0, 3.0, 2.0, 4.0]);
        assert_eq!(std::mem::size_of::<Mat3<f32, Aligned>>(), 48);
    }
}
