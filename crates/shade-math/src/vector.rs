use std::{
    fmt,
    hash::{Hash, Hasher},
};

use crate::{
    storage::{self, AlignMarker, Packed, Qualifier, StorageLayout},
    Cast, Float, Matrix, Number, One, Scalar, Signed, Zero,
};

mod ops;

/// A 1-dimensional vector.
pub type Vec1<T, Q = Packed> = Vector<T, 1, Q>;
/// A 2-dimensional vector.
pub type Vec2<T, Q = Packed> = Vector<T, 2, Q>;
/// A 3-dimensional vector.
pub type Vec3<T, Q = Packed> = Vector<T, 3, Q>;
/// A 4-dimensional vector.
pub type Vec4<T, Q = Packed> = Vector<T, 4, Q>;

/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;
/// A 2-dimensional vector with [`f64`] elements.
pub type Vec2d = Vec2<f64>;
/// A 3-dimensional vector with [`f64`] elements.
pub type Vec3d = Vec3<f64>;
/// A 4-dimensional vector with [`f64`] elements.
pub type Vec4d = Vec4<f64>;
pub type IVec2 = Vec2<i32>;
pub type IVec3 = Vec3<i32>;
pub type IVec4 = Vec4<i32>;
pub type UVec2 = Vec2<u32>;
pub type UVec3 = Vec3<u32>;
pub type UVec4 = Vec4<u32>;
pub type BVec2 = Vec2<bool>;
pub type BVec3 = Vec3<bool>;
pub type BVec4 = Vec4<bool>;

/// An `N`-element column vector storing elements of type `T`, laid out according to `Q`.
///
/// # Construction
///
/// There is a variety of ways to create a [`Vector`]:
///
/// - The freestanding [`vec1`], [`vec2`], [`vec3`] and [`vec4`] functions directly create packed
///   vectors from provided values.
/// - [`Vector::splat`] creates a vector by copying the given value into each element.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each element.
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - [`Vector::ZERO`] is a vector containing all-zeroes, and `Vector::X`, `Vector::Y`,
///   `Vector::Z` and `Vector::W` are unit vectors pointing in the given direction.
/// - [`Vector::shrink`] and `truncate` drop trailing components; [`Vector::widen`] and `extend`
///   add components, always from explicitly supplied values.
/// - [`Vector::cast`] converts the element kind, [`Vector::requalify`] the storage layout.
///
/// # Element Access
///
/// - Named accessors `x()`, `y()`, `z()` and `w()` (with the aliases `r`/`g`/`b`/`a` and
///   `s`/`t`/`p`/`q`) return a component by value; `x_mut()` and friends borrow it mutably.
///   All of them view the same backing array.
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays. Indexing out of bounds
///   panics.
/// - [`Vector::as_array`], [`Vector::as_slice`], and [`Vector::into_array`] expose the elements.
/// - [`bytemuck::Zeroable`] is implemented for all vectors, [`bytemuck::Pod`] for [`Packed`]
///   vectors whose element type allows it.
///
/// # Equality
///
/// `==` is true when all components are equal. For floats, this is IEEE equality: `NaN` never
/// compares equal, and `-0.0 == 0.0`. Element-wise comparisons returning a boolean vector are
/// available as [`Vector::equal`], [`Vector::less_than`] and friends.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[repr(C)]
pub struct Vector<T: Scalar, const N: usize, Q: Qualifier = Packed> {
    _align: Q::Marker<T>,
    elems: [T; N],
}

unsafe impl<T, const N: usize, Q> bytemuck::Zeroable for Vector<T, N, Q>
where
    T: Scalar + bytemuck::Zeroable,
    Q: Qualifier,
{
}
unsafe impl<T: Scalar + bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N, Packed> {}

impl<T: Scalar, const N: usize, Q: Qualifier> Clone for Vector<T, N, Q> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Scalar, const N: usize, Q: Qualifier> Copy for Vector<T, N, Q> {}

impl<T: Scalar + Hash, const N: usize, Q: Qualifier> Hash for Vector<T, N, Q> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elems.hash(state);
    }
}

impl<T: Scalar + Zero, const N: usize, Q: Qualifier> Vector<T, N, Q> {
    /// A vector with each element initialized to 0.
    ///
    /// This uses [`T::ZERO`][Zero::ZERO] as the value for all elements.
    pub const ZERO: Self = Self::from_array([T::ZERO; N]);
}

impl<T: Scalar + Zero + One, Q: Qualifier> Vector<T, 1, Q> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self::from_array([T::ONE]);
}

impl<T: Scalar + Zero + One, Q: Qualifier> Vector<T, 2, Q> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self::from_array([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self::from_array([T::ZERO, T::ONE]);
}

impl<T: Scalar + Zero + One, Q: Qualifier> Vector<T, 3, Q> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self::from_array([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self::from_array([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self::from_array([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Scalar + Zero + One, Q: Qualifier> Vector<T, 4, Q> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self::from_array([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self::from_array([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self::from_array([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self::from_array([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

/// Compile-time check that `M <= N`.
struct AssertLe<const M: usize, const N: usize>;

impl<const M: usize, const N: usize> AssertLe<M, N> {
    const OK: () = assert!(M <= N, "vector dimension mismatch");
}

impl<T: Scalar, const N: usize, Q: Qualifier> Vector<T, N, Q> {
    /// Creates a vector from an array of its elements.
    #[inline]
    pub const fn from_array(elems: [T; N]) -> Self {
        Self {
            _align: <Q::Marker<T> as AlignMarker>::MARKER,
            elems,
        }
    }

    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self {
        Self::from_array([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`std::array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// let v = Vector::from_fn(|i| i as u32 + 100);
    /// assert_eq!(v, vec3(100, 101, 102));
    /// ```
    #[inline]
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self::from_array(std::array::from_fn(cb))
    }

    /// Returns `self` with element `i` replaced by `value`.
    #[inline]
    pub(crate) const fn with_elem(mut self, i: usize, value: T) -> Self {
        self.elems[i] = value;
        self
    }

    /// Returns the layout descriptor of this vector type.
    pub fn layout() -> StorageLayout {
        storage::layout::<T, N, Q>()
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Vector<U, N, Q>
    where
        U: Scalar,
        F: FnMut(T) -> U,
    {
        Vector::from_array(self.elems.map(f))
    }

    /// Combines the elements of `self` and `other` pairwise.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// let v = vec3(1, 2, 3).zip_map(vec3(1.0, 0.0, -1.0), |i, f| i as f32 * f);
    /// assert_eq!(v, vec3(1.0, 0.0, -3.0));
    /// ```
    #[inline]
    pub fn zip_map<U, V, F>(self, other: Vector<U, N, Q>, mut f: F) -> Vector<V, N, Q>
    where
        U: Scalar,
        V: Scalar,
        F: FnMut(T, U) -> V,
    {
        Vector::from_fn(|i| f(self.elems[i], other.elems[i]))
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// assert_eq!(vec3(1, 2, 3).as_array(), &[1, 2, 3]);
    /// ```
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.elems
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.elems
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.elems
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// let mut v = vec3(1, 2, 3);
    /// v.as_mut_slice()[1] = 777;
    /// assert_eq!(v, [1, 777, 3]);
    /// ```
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.elems
    }

    /// Converts this [`Vector`] into an `N`-element array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.elems
    }

    /// Returns an iterator over the elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elems.iter()
    }

    /// Returns the same vector with a different storage layout.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::{*, storage::Aligned};
    /// let v = vec3(1.0, 2.0, 3.0).requalify::<Aligned>();
    /// assert_eq!(std::mem::size_of_val(&v), 16);
    /// assert_eq!(v.requalify(), vec3(1.0, 2.0, 3.0));
    /// ```
    #[inline]
    pub fn requalify<Q2: Qualifier>(self) -> Vector<T, N, Q2> {
        Vector::from_array(self.elems)
    }

    /// Converts each element to another element kind.
    ///
    /// See [`Cast`] for the conversion rules.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// assert_eq!(vec3(1.9f32, -1.9, 0.0).cast::<i32>(), vec3(1, -1, 0));
    /// assert_eq!(vec3(1.9f32, -1.9, 0.0).cast::<bool>(), vec3(true, true, false));
    /// ```
    #[inline]
    pub fn cast<U: Scalar>(self) -> Vector<U, N, Q>
    where
        T: Cast<U>,
    {
        self.map(Cast::cast)
    }

    /// Keeps the first `M` components, dropping the rest.
    ///
    /// `M` must not exceed `N`; this is checked at compile time.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// assert_eq!(vec4(1, 2, 3, 4).shrink::<2>(), vec2(1, 2));
    /// ```
    pub fn shrink<const M: usize>(self) -> Vector<T, M, Q> {
        #[allow(clippy::let_unit_value)]
        let () = AssertLe::<M, N>::OK;
        Vector::from_fn(|i| self.elems[i])
    }

    /// Widens this vector to `M` components, taking the components past `N` from `fill`.
    ///
    /// There is no implicit zero fill: the caller always decides what the new components are.
    /// `N` must not exceed `M`; this is checked at compile time.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// let v = vec2(1.0, 2.0).widen(vec4(9.0, 9.0, 0.0, 1.0));
    /// assert_eq!(v, vec4(1.0, 2.0, 0.0, 1.0));
    /// ```
    pub fn widen<const M: usize>(self, fill: Vector<T, M, Q>) -> Vector<T, M, Q> {
        #[allow(clippy::let_unit_value)]
        let () = AssertLe::<N, M>::OK;
        Vector::from_fn(|i| if i < N { self.elems[i] } else { fill.elems[i] })
    }

    /// Element-wise `==`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// let a = vec3(1.0, f32::NAN, 3.0);
    /// assert_eq!(a.equal(a), vec3(true, false, true));
    /// ```
    #[inline]
    pub fn equal(self, other: Self) -> Vector<bool, N, Q> {
        self.zip_map(other, |a, b| a == b)
    }

    /// Element-wise `!=`.
    #[inline]
    pub fn not_equal(self, other: Self) -> Vector<bool, N, Q> {
        self.zip_map(other, |a, b| a != b)
    }

    /// Element-wise `<`.
    #[inline]
    pub fn less_than(self, other: Self) -> Vector<bool, N, Q> {
        self.zip_map(other, |a, b| a < b)
    }

    /// Element-wise `<=`.
    #[inline]
    pub fn less_than_equal(self, other: Self) -> Vector<bool, N, Q> {
        self.zip_map(other, |a, b| a <= b)
    }

    /// Element-wise `>`.
    #[inline]
    pub fn greater_than(self, other: Self) -> Vector<bool, N, Q> {
        self.zip_map(other, |a, b| a > b)
    }

    /// Element-wise `>=`.
    #[inline]
    pub fn greater_than_equal(self, other: Self) -> Vector<bool, N, Q> {
        self.zip_map(other, |a, b| a >= b)
    }
}

impl<const N: usize, Q: Qualifier> Vector<bool, N, Q> {
    /// Returns `true` if any component is `true`.
    #[inline]
    pub fn any(self) -> bool {
        self.elems.iter().any(|&b| b)
    }

    /// Returns `true` if all components are `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// assert!(vec2(1, 2).less_than(vec2(3, 4)).all());
    /// assert!(!vec2(1, 5).less_than(vec2(3, 4)).all());
    /// ```
    #[inline]
    pub fn all(self) -> bool {
        self.elems.iter().all(|&b| b)
    }
}

impl<T: Number, const N: usize, Q: Qualifier> Vector<T, N, Q> {
    /// Sums all components.
    ///
    /// 4-component vectors are summed pairwise, as `(x + y) + (z + w)`.
    pub fn sum(self) -> T {
        let e = self.elems;
        match N {
            0 => T::ZERO,
            4 => (e[0] + e[1]) + (e[2] + e[3]),
            _ => e[1..].iter().fold(e[0], |acc, &v| acc + v),
        }
    }

    /// Multiplies all components.
    pub fn product(self) -> T {
        self.elems.iter().fold(T::ONE, |acc, &v| acc * v)
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// Geometrically, the dot product provides information about the relative
    /// angle of the two vectors:
    /// - If the dot product is greater than zero, the angle between the vectors
    ///   is less than 90°.
    /// - If the dot product is equal to zero, their angle is exactly 90°.
    /// - If the dot product is negative, the angle is greater than 90°.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// ```
    #[inline]
    pub fn dot(self, other: Self) -> T {
        (self * other).sum()
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// assert_eq!(vec2(4, 0).length2(), 16);
    /// ```
    #[inline]
    pub fn length2(self) -> T {
        self.dot(self)
    }

    /// Element-wise minimum between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// let a = vec3(-1.0, 2.0, f32::NAN);
    /// let b = vec3(3.0, f32::NEG_INFINITY, 0.0);
    /// assert_eq!(a.min(b), vec3(-1.0, f32::NEG_INFINITY, 0.0));
    /// ```
    pub fn min(self, other: Self) -> Self {
        self.zip_map(other, T::min)
    }

    /// Element-wise maximum between `self` and `other`.
    pub fn max(self, other: Self) -> Self {
        self.zip_map(other, T::max)
    }

    /// Element-wise range clamp of the elements in `self` between `min` and `max`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// let v = vec3(-1.0, 0.5, 2.0).clamp(Vector::splat(0.0), Vector::splat(1.0));
    /// assert_eq!(v, vec3(0.0, 0.5, 1.0));
    /// ```
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self::from_fn(|i| self.elems[i].clamp(min.elems[i], max.elems[i]))
    }
}

impl<T: Signed, const N: usize, Q: Qualifier> Vector<T, N, Q> {
    /// Element-wise absolute value.
    pub fn abs(self) -> Self {
        self.map(T::abs)
    }

    /// Element-wise sign: -1, 0 or 1 (`NaN` and signed zeroes are returned unchanged).
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// assert_eq!(vec3(-7, 0, 3).sign(), vec3(-1, 0, 1));
    /// ```
    pub fn sign(self) -> Self {
        self.map(|v| {
            if v > T::ZERO {
                T::ONE
            } else if v < T::ZERO {
                -T::ONE
            } else {
                v
            }
        })
    }
}

impl<T: Float, const N: usize, Q: Qualifier> Vector<T, N, Q> {
    /// Returns the length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// let z = Vec3f::Z;
    /// assert_eq!(z.length(), 1.0);
    /// ```
    #[inline]
    pub fn length(self) -> T {
        self.length2().sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// A zero vector results in `NaN` components.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalize();
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    /// ```
    #[inline]
    pub fn normalize(self) -> Self {
        self / self.length()
    }

    /// Returns the distance between the points `self` and `other`.
    #[inline]
    pub fn distance(self, other: Self) -> T {
        (other - self).length()
    }

    /// Computes the smallest positive angle between `self` and `other`, in radians.
    ///
    /// Both `self` and `other` must have non-zero length for the result to be meaningful.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// use std::f32::consts::TAU;
    ///
    /// let a = Vec3f::Y;
    /// let b = Vec3f::X;
    /// assert_approx_eq!(a.abs_angle_to(b), TAU / 4.0);  // quarter turn
    /// assert_approx_eq!(a.abs_angle_to(-a), TAU / 2.0); // half a turn
    /// ```
    pub fn abs_angle_to(self, other: Self) -> T {
        let dot = self.dot(other);
        (dot / (self.length() * other.length())).acos()
    }

    /// Element-wise [`Float::floor`].
    pub fn floor(self) -> Self {
        self.map(T::floor)
    }

    /// Element-wise [`Float::ceil`].
    pub fn ceil(self) -> Self {
        self.map(T::ceil)
    }

    /// Element-wise [`Float::round`] (half-way cases away from zero).
    pub fn round(self) -> Self {
        self.map(T::round)
    }

    /// Element-wise [`Float::trunc`].
    pub fn trunc(self) -> Self {
        self.map(T::trunc)
    }

    /// Element-wise [`Float::fract`], `x - floor(x)`.
    pub fn fract(self) -> Self {
        self.map(T::fract)
    }

    /// Returns a vector of booleans telling which components are `NaN`.
    pub fn is_nan(self) -> Vector<bool, N, Q> {
        self.map(T::is_nan)
    }

    /// Linear blend of `self` and `other`: `self * (1 - a) + other * a`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// assert_eq!(vec2(0.0, 10.0).mix(vec2(10.0, 20.0), 0.5), vec2(5.0, 15.0));
    /// ```
    pub fn mix(self, other: Self, a: T) -> Self {
        self * (T::ONE - a) + other * a
    }

    /// Reflects the incident vector `self` at the plane with normal `normal`.
    ///
    /// `normal` should be normalized.
    pub fn reflect(self, normal: Self) -> Self {
        self - normal * normal.dot(self) * (T::ONE + T::ONE)
    }

    /// Refracts the incident vector `self` through a surface with normal `normal`, using the
    /// ratio of indices of refraction `eta`.
    ///
    /// Both vectors should be normalized. Returns the zero vector on total internal reflection.
    pub fn refract(self, normal: Self, eta: T) -> Self {
        let d = normal.dot(self);
        let k = T::ONE - eta * eta * (T::ONE - d * d);
        if k >= T::ZERO {
            self * eta - normal * (eta * d + k.sqrt())
        } else {
            Self::splat(T::ZERO)
        }
    }

    /// Returns `self` if `reference` and `incident` point in opposite directions, `-self`
    /// otherwise.
    pub fn face_forward(self, incident: Self, reference: Self) -> Self {
        if reference.dot(incident) < T::ZERO {
            self
        } else {
            -self
        }
    }

    /// Element-wise approximate equality: `|self - other| <= epsilon`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// let a = vec2(1.0, 2.0);
    /// let b = vec2(1.0 + 1e-7, 2.1);
    /// assert_eq!(a.approx_equal(b, 1e-6), vec2(true, false));
    /// ```
    pub fn approx_equal(self, other: Self, epsilon: T) -> Vector<bool, N, Q> {
        self.zip_map(other, |a, b| (a - b).abs() <= epsilon)
    }

    /// Element-wise approximate inequality: `|self - other| > epsilon`.
    pub fn approx_not_equal(self, other: Self, epsilon: T) -> Vector<bool, N, Q> {
        self.zip_map(other, |a, b| (a - b).abs() > epsilon)
    }
}

macro_rules! accessors {
    ($($idx:literal => $name:ident, $name_mut:ident, $color:ident, $tex:ident;)+) => {
        $(
            #[doc = concat!("Returns component ", stringify!($idx), ".")]
            #[inline]
            pub fn $name(&self) -> T {
                self.elems[$idx]
            }

            #[doc = concat!("Returns a mutable reference to component ", stringify!($idx), ".")]
            #[inline]
            pub fn $name_mut(&mut self) -> &mut T {
                &mut self.elems[$idx]
            }

            #[doc = concat!("Color alias of [`Self::", stringify!($name), "`].")]
            #[inline]
            pub fn $color(&self) -> T {
                self.elems[$idx]
            }

            #[doc = concat!("Texture coordinate alias of [`Self::", stringify!($name), "`].")]
            #[inline]
            pub fn $tex(&self) -> T {
                self.elems[$idx]
            }
        )+
    };
}

impl<T: Scalar, Q: Qualifier> Vector<T, 1, Q> {
    accessors! {
        0 => x, x_mut, r, s;
    }

    /// Appends another value to the vector, yielding a vector with 2 dimensions.
    pub fn extend(self, value: T) -> Vector<T, 2, Q> {
        let [x] = self.elems;
        Vector::from_array([x, value])
    }
}

impl<T: Scalar, Q: Qualifier> Vector<T, 2, Q> {
    accessors! {
        0 => x, x_mut, r, s;
        1 => y, y_mut, g, t;
    }

    /// Removes the last element of this vector, yielding a vector with a single element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// let v = vec2(-1.0, 2.0).truncate();
    /// assert_eq!(v, vec1(-1.0));
    /// ```
    pub fn truncate(self) -> Vector<T, 1, Q> {
        let [x, ..] = self.elems;
        Vector::from_array([x])
    }

    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// let v = vec2(-1.0, 2.0).extend(5.0);
    /// assert_eq!(v, vec3(-1.0, 2.0, 5.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 3, Q> {
        let [x, y] = self.elems;
        Vector::from_array([x, y, value])
    }

    /// Computes the [perpendicular dot product] of `self` and `other`.
    ///
    /// This is equivalent to the Z coordinate of the cross product of `self` and `other`
    /// (extended with Z=0 in the third dimension).
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// assert_eq!(Vec2f::X.perp_dot(Vec2f::Y), 1.0);
    /// assert_eq!(Vec2f::Y.perp_dot(Vec2f::X), -1.0);
    /// ```
    ///
    /// [perpendicular dot product]: https://mathworld.wolfram.com/PerpDotProduct.html
    pub fn perp_dot(self, other: Self) -> T
    where
        T: Signed,
    {
        self.extend(T::ZERO).cross(other.extend(T::ZERO)).z()
    }

    /// Rotates `self` clockwise in the 2D plane.
    ///
    /// This operation assumes that the Y axis points up, and the X axis points to the right.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// use std::f32::consts::TAU;
    ///
    /// assert_approx_eq!(Vec2f::Y.rotate_clockwise(TAU / 4.0), Vec2f::X);
    /// ```
    pub fn rotate_clockwise(self, radians: T) -> Self
    where
        T: Float,
    {
        Matrix::<T, 2, 2, Q>::rotation_clockwise(radians) * self
    }

    /// Rotates `self` counterclockwise in the 2D plane.
    ///
    /// This operation assumes that the Y axis points up, and the X axis points to the right.
    pub fn rotate_counterclockwise(self, radians: T) -> Self
    where
        T: Float,
    {
        Matrix::<T, 2, 2, Q>::rotation_counterclockwise(radians) * self
    }

    /// Computes the (signed) clockwise rotation in radians needed to align `self` with `other`.
    ///
    /// This operation assumes that the Y axis points up, and the X axis points to the right. If the
    /// Y axis points *down*, swap the arguments to make the method work correctly.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// use std::f32::consts::TAU;
    ///
    /// assert_approx_eq!(Vec2f::Y.signed_angle_to(Vec2f::X), TAU / 4.0);
    /// assert_approx_eq!(Vec2f::X.signed_angle_to(Vec2f::Y), -TAU / 4.0);
    /// ```
    pub fn signed_angle_to(self, other: Self) -> T
    where
        T: Float,
    {
        -self.perp_dot(other).atan2(self.dot(other))
    }
}

impl<T: Scalar, Q: Qualifier> Vector<T, 3, Q> {
    accessors! {
        0 => x, x_mut, r, s;
        1 => y, y_mut, g, t;
        2 => z, z_mut, b, p;
    }

    /// Removes the last element of this vector, yielding a vector with 2 elements.
    pub fn truncate(self) -> Vector<T, 2, Q> {
        let [x, y, ..] = self.elems;
        Vector::from_array([x, y])
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// let v = vec3(-1.0, 2.0, 3.5).extend(99.0);
    /// assert_eq!(v, vec4(-1.0, 2.0, 3.5, 99.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 4, Q> {
        let [x, y, z] = self.elems;
        Vector::from_array([x, y, z, value])
    }

    /// Returns the first two components.
    pub fn xy(self) -> Vector<T, 2, Q> {
        self.truncate()
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is a vector that is perpendicular to both `self` and `other`. Its direction
    /// depends on the order of the arguments: swapping them will invert the direction of the
    /// resulting vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// let x = Vec3f::X;
    /// let y = Vec3f::Y;
    /// let z = Vec3f::Z;
    /// assert_eq!(x.cross(y), z);
    /// assert_eq!(y.cross(x), -z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [a1, a2, a3] = self.elems;
        let [b1, b2, b3] = other.elems;

        #[rustfmt::skip]
        let cross = Self::from_array([
            a2 * b3 - b2 * a3,
            a3 * b1 - b3 * a1,
            a1 * b2 - b1 * a2,
        ]);
        cross
    }
}

impl<T: Scalar, Q: Qualifier> Vector<T, 4, Q> {
    accessors! {
        0 => x, x_mut, r, s;
        1 => y, y_mut, g, t;
        2 => z, z_mut, b, p;
        3 => w, w_mut, a, q;
    }

    /// Removes the last element of this vector, yielding a vector with 3 elements.
    pub fn truncate(self) -> Vector<T, 3, Q> {
        let [x, y, z, ..] = self.elems;
        Vector::from_array([x, y, z])
    }

    /// Returns the first two components.
    pub fn xy(self) -> Vector<T, 2, Q> {
        self.shrink()
    }

    /// Returns the first three components.
    pub fn xyz(self) -> Vector<T, 3, Q> {
        self.truncate()
    }
}

impl<T: Scalar, const N: usize, Q: Qualifier> From<[T; N]> for Vector<T, N, Q> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self::from_array(value)
    }
}

impl<T: Scalar, const N: usize, Q: Qualifier> From<Vector<T, N, Q>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N, Q>) -> Self {
        value.elems
    }
}

impl<T: Scalar, const N: usize, Q: Qualifier> Default for Vector<T, N, Q> {
    /// Initializes each element with its [`Default`] (zero or `false`).
    #[inline]
    fn default() -> Self {
        Self::from_array([T::default(); N])
    }
}

impl<T: Scalar, const N: usize, Q: Qualifier> fmt::Debug for Vector<T, N, Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.elems {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T: Scalar, const N: usize, Q: Qualifier> fmt::Display for Vector<T, N, Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DebugViaDisplay<D>(D);
        impl<D: fmt::Display> fmt::Debug for DebugViaDisplay<D> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        let mut tup = f.debug_tuple("");
        for elem in &self.elems {
            tup.field(&DebugViaDisplay(elem));
        }
        tup.finish()
    }
}

impl<T: Scalar, const N: usize, Q: Qualifier> AsRef<[T]> for Vector<T, N, Q> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.elems
    }
}

impl<T: Scalar, const N: usize, Q: Qualifier> AsMut<[T]> for Vector<T, N, Q> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.elems
    }
}

/// Constructs a [`Vec1`] from its single element.
#[inline]
pub const fn vec1<T: Scalar>(x: T) -> Vec1<T> {
    Vector::from_array([x])
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T: Scalar>(x: T, y: T) -> Vec2<T> {
    Vector::from_array([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T: Scalar>(x: T, y: T, z: T) -> Vec3<T> {
    Vector::from_array([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T: Scalar>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector::from_array([x, y, z, w])
}
