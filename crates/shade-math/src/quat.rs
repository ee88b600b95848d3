use std::{
    fmt,
    hash::{Hash, Hasher},
};

use crate::{
    storage::{Packed, Qualifier},
    Float, Mat3, Mat4, One, Scalar, Vector, Zero,
};

mod ops;

/// A quaternion with [`f32`] components.
pub type Quatf = Quat<f32>;
/// A quaternion with [`f64`] components.
pub type Quatd = Quat<f64>;

/// A quaternion consisting of 3 imaginary numbers and a real number.
///
/// Unit-length quaternions ("*versors*") represent rotations in 3D space: a rotation by `θ`
/// radians around the unit axis `a` is stored as `w = cos(θ/2)` and `(x, y, z) = sin(θ/2) * a`.
/// `q` and `-q` represent the same rotation.
///
/// Components are stored in `x, y, z, w` order. [`Quat::from_array_wxyz`] and
/// [`Quat::to_array_wxyz`] convert from and to the real-part-first order.
///
/// Arithmetic never normalizes implicitly. Long chains of products should be renormalized with
/// [`Quat::normalize`] from time to time.
#[repr(C)]
pub struct Quat<T: Scalar, Q: Qualifier = Packed> {
    vec: Vector<T, 4, Q>,
}

unsafe impl<T, Q> bytemuck::Zeroable for Quat<T, Q>
where
    T: Scalar + bytemuck::Zeroable,
    Q: Qualifier,
{
}
unsafe impl<T: Scalar + bytemuck::Pod> bytemuck::Pod for Quat<T, Packed> {}

impl<T: Scalar, Q: Qualifier> Clone for Quat<T, Q> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Scalar, Q: Qualifier> Copy for Quat<T, Q> {}

impl<T: Scalar + Hash, Q: Qualifier> Hash for Quat<T, Q> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.vec.hash(state);
    }
}

impl<T: Scalar + Zero + One, Q: Qualifier> Quat<T, Q> {
    /// The multiplicative identity.
    ///
    /// This is a unit quaternion that will not change a vector it is multiplied with.
    pub const IDENTITY: Self = Self::from_xyzw(T::ZERO, T::ZERO, T::ZERO, T::ONE);
}

impl<T: Scalar, Q: Qualifier> Quat<T, Q> {
    /// Creates a quaternion from its imaginary parts `x`, `y`, `z` and its real part `w`.
    #[inline]
    pub const fn from_xyzw(x: T, y: T, z: T, w: T) -> Self {
        Self {
            vec: Vector::from_array([x, y, z, w]),
        }
    }

    /// Creates a quaternion from a 4-dimensional [`Vector`] in `x, y, z, w` order.
    #[inline]
    pub fn from_vec4(vec: Vector<T, 4, Q>) -> Self {
        Self { vec }
    }

    /// Creates a quaternion from its real part `w` and its imaginary parts `v`.
    pub fn from_scalar_vector(w: T, v: Vector<T, 3, Q>) -> Self {
        Self::from_vec4(v.extend(w))
    }

    /// Creates a quaternion from an array in `[w, x, y, z]` order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// let q = Quat::<_>::from_array_wxyz([1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(q.w(), 1.0);
    /// assert_eq!(q.to_array(), [2.0, 3.0, 4.0, 1.0]);
    /// assert_eq!(q.to_array_wxyz(), [1.0, 2.0, 3.0, 4.0]);
    /// ```
    pub fn from_array_wxyz([w, x, y, z]: [T; 4]) -> Self {
        Self::from_xyzw(x, y, z, w)
    }

    /// Returns the components in `[w, x, y, z]` order.
    pub fn to_array_wxyz(self) -> [T; 4] {
        [self.w(), self.x(), self.y(), self.z()]
    }

    /// Returns the components in `[x, y, z, w]` order.
    pub fn to_array(self) -> [T; 4] {
        self.vec.into_array()
    }

    /// Returns the components as a 4-dimensional [`Vector`] in `x, y, z, w` order.
    pub fn into_vec4(self) -> Vector<T, 4, Q> {
        self.vec
    }

    #[inline]
    pub fn x(&self) -> T {
        self.vec[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.vec[1]
    }

    #[inline]
    pub fn z(&self) -> T {
        self.vec[2]
    }

    /// Returns the real part.
    #[inline]
    pub fn w(&self) -> T {
        self.vec[3]
    }

    /// Returns the imaginary part `(x, y, z)`.
    #[inline]
    pub fn vector_part(&self) -> Vector<T, 3, Q> {
        self.vec.truncate()
    }

    /// Returns the same quaternion with a different storage layout.
    pub fn requalify<Q2: Qualifier>(self) -> Quat<T, Q2> {
        Quat {
            vec: self.vec.requalify(),
        }
    }
}

impl<T: Float, Q: Qualifier> Quat<T, Q> {
    fn half() -> T {
        T::from_f64(0.5)
    }

    fn two() -> T {
        T::ONE + T::ONE
    }

    /// Creates a quaternion rotating by `radians` around `axis`.
    ///
    /// `axis` must be normalized.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// let q = Quat::from_axis_angle(Vec3f::Z, FRAC_PI_2);
    /// assert_approx_eq!(q * Vec3f::X, Vec3f::Y).abs(1e-6);
    /// ```
    pub fn from_axis_angle(axis: Vector<T, 3, Q>, radians: T) -> Self {
        let (sin, cos) = (radians * Self::half()).sin_cos();
        Self::from_scalar_vector(cos, axis * sin)
    }

    /// Creates a quaternion rotating by `radians` around the X axis.
    pub fn from_rotation_x(radians: T) -> Self {
        Self::from_axis_angle(Vector::<T, 3, Q>::X, radians)
    }

    /// Creates a quaternion rotating by `radians` around the Y axis.
    pub fn from_rotation_y(radians: T) -> Self {
        Self::from_axis_angle(Vector::<T, 3, Q>::Y, radians)
    }

    /// Creates a quaternion rotating by `radians` around the Z axis.
    pub fn from_rotation_z(radians: T) -> Self {
        Self::from_axis_angle(Vector::<T, 3, Q>::Z, radians)
    }

    /// Creates a quaternion from Euler angles `(pitch, yaw, roll)` in radians, which rotate around
    /// the X, Y and Z axis respectively.
    ///
    /// This is the inverse of [`Quat::euler_angles`].
    #[doc(alias = "euler")]
    pub fn from_euler(angles: Vector<T, 3, Q>) -> Self {
        let half = angles * Self::half();
        let c = half.map(T::cos);
        let s = half.map(T::sin);
        let (cx, cy, cz) = (c[0], c[1], c[2]);
        let (sx, sy, sz) = (s[0], s[1], s[2]);

        Self::from_xyzw(
            sx * cy * cz - cx * sy * sz,
            cx * sy * cz + sx * cy * sz,
            cx * cy * sz - sx * sy * cz,
            cx * cy * cz + sx * sy * sz,
        )
    }

    /// Creates the shortest rotation that turns the direction of `from` into that of `to`.
    ///
    /// Neither vector needs to be normalized. If they point in opposite directions, the rotation
    /// is a half turn around an arbitrary axis perpendicular to `from`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// let q = Quat::from_to(vec3(2.0, 0.0, 0.0), vec3(0.0, 0.0, 3.0));
    /// assert_approx_eq!(q * Vec3f::X, Vec3f::Z).abs(1e-6);
    ///
    /// let flip = Quat::from_to(Vec3f::X, -Vec3f::X);
    /// assert_approx_eq!(flip * Vec3f::X, -Vec3f::X).abs(1e-6);
    /// ```
    pub fn from_to(from: Vector<T, 3, Q>, to: Vector<T, 3, Q>) -> Self {
        let norm_from_norm_to = (from.dot(from) * to.dot(to)).sqrt();
        let mut real = norm_from_norm_to + from.dot(to);

        let axis = if real < T::from_f64(1.0e-6) * norm_from_norm_to {
            // Opposite directions: any perpendicular axis will do.
            real = T::ZERO;
            if from.x().abs() > from.z().abs() {
                Vector::from_array([-from.y(), from.x(), T::ZERO])
            } else {
                Vector::from_array([T::ZERO, -from.z(), from.y()])
            }
        } else {
            from.cross(to)
        };

        Self::from_scalar_vector(real, axis).normalize()
    }

    /// Extracts the rotation from a rotation matrix.
    ///
    /// The matrix must be orthonormal. Of the four candidate formulas, the one dividing by the
    /// largest component is used, which keeps the result precise for every rotation angle.
    pub fn from_mat3(m: Mat3<T, Q>) -> Self {
        let m = m.into_column_major();
        let four_x_squared_minus_1 = m[0][0] - m[1][1] - m[2][2];
        let four_y_squared_minus_1 = m[1][1] - m[0][0] - m[2][2];
        let four_z_squared_minus_1 = m[2][2] - m[0][0] - m[1][1];
        let four_w_squared_minus_1 = m[0][0] + m[1][1] + m[2][2];

        let mut biggest_index = 0;
        let mut four_biggest_squared_minus_1 = four_w_squared_minus_1;
        if four_x_squared_minus_1 > four_biggest_squared_minus_1 {
            four_biggest_squared_minus_1 = four_x_squared_minus_1;
            biggest_index = 1;
        }
        if four_y_squared_minus_1 > four_biggest_squared_minus_1 {
            four_biggest_squared_minus_1 = four_y_squared_minus_1;
            biggest_index = 2;
        }
        if four_z_squared_minus_1 > four_biggest_squared_minus_1 {
            four_biggest_squared_minus_1 = four_z_squared_minus_1;
            biggest_index = 3;
        }

        let biggest = (four_biggest_squared_minus_1 + T::ONE).sqrt() * Self::half();
        let mult = T::from_f64(0.25) / biggest;

        let [w, x, y, z] = match biggest_index {
            0 => [
                biggest,
                (m[1][2] - m[2][1]) * mult,
                (m[2][0] - m[0][2]) * mult,
                (m[0][1] - m[1][0]) * mult,
            ],
            1 => [
                (m[1][2] - m[2][1]) * mult,
                biggest,
                (m[0][1] + m[1][0]) * mult,
                (m[2][0] + m[0][2]) * mult,
            ],
            2 => [
                (m[2][0] - m[0][2]) * mult,
                (m[0][1] + m[1][0]) * mult,
                biggest,
                (m[1][2] + m[2][1]) * mult,
            ],
            _ => [
                (m[0][1] - m[1][0]) * mult,
                (m[2][0] + m[0][2]) * mult,
                (m[1][2] + m[2][1]) * mult,
                biggest,
            ],
        };
        Self::from_xyzw(x, y, z, w)
    }

    /// Extracts the rotation from the upper-left 3x3 part of a transformation matrix.
    pub fn from_mat4(m: Mat4<T, Q>) -> Self {
        Self::from_mat3(m.reshape())
    }

    /// Converts this (normalized) quaternion to a 3x3 rotation matrix.
    pub fn to_mat3(self) -> Mat3<T, Q> {
        let (x, y, z, w) = (self.x(), self.y(), self.z(), self.w());
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xz, xy, yz) = (x * z, x * y, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);
        let (one, two) = (T::ONE, Self::two());

        Mat3::from_column_major([
            [one - two * (yy + zz), two * (xy + wz), two * (xz - wy)],
            [two * (xy - wz), one - two * (xx + zz), two * (yz + wx)],
            [two * (xz + wy), two * (yz - wx), one - two * (xx + yy)],
        ])
    }

    /// Converts this (normalized) quaternion to a 4x4 rotation matrix.
    pub fn to_mat4(self) -> Mat4<T, Q> {
        self.to_mat3().reshape()
    }

    /// Returns the conjugate `(-x, -y, -z, w)`.
    pub fn conjugate(self) -> Self {
        Self::from_xyzw(-self.x(), -self.y(), -self.z(), self.w())
    }

    /// Returns the multiplicative inverse, `conjugate / dot(self, self)`.
    ///
    /// For unit quaternions this equals the conjugate.
    pub fn inverse(self) -> Self {
        self.conjugate() / self.dot(self)
    }

    /// Computes the 4-dimensional dot product, summed as `(ww + xx) + (yy + zz)`.
    pub fn dot(self, other: Self) -> T {
        let p = self.vec * other.vec;
        (p[3] + p[0]) + (p[1] + p[2])
    }

    /// Returns the squared length of this quaternion.
    pub fn length2(self) -> T {
        self.dot(self)
    }

    /// Returns the length of this quaternion.
    ///
    /// If the length is not equal to one, multiplying a vector with this quaternion will scale the
    /// vector in addition to rotating it.
    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(self) -> T {
        self.length2().sqrt()
    }

    /// Returns a normalized copy of this quaternion (whose length equals one).
    ///
    /// A quaternion whose length is zero (or within [`Float::EPSILON`] of it) has no direction;
    /// [`Quat::IDENTITY`] is returned for it instead of `NaN`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// assert_eq!(Quat::<_>::from_xyzw(0.0, 0.0, 0.0, 2.0).normalize(), Quat::IDENTITY);
    /// assert_eq!(Quat::<_>::from_xyzw(0.0, 0.0, 0.0, 0.0).normalize(), Quat::IDENTITY);
    /// ```
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len <= T::EPSILON {
            return Self::IDENTITY;
        }
        self * (T::ONE / len)
    }

    /// Returns the rotation angle in radians, in `[0, 2π]`.
    ///
    /// Near the identity, the angle is derived from the imaginary part, which is better
    /// conditioned there than the real part.
    pub fn angle(self) -> T {
        let w = self.w();
        // cos(0.5)
        if w.abs() > T::from_f64(0.877_582_561_890_372_7) {
            let a = self.vector_part().length().asin() * Self::two();
            if w < T::ZERO {
                return T::PI * Self::two() - a;
            }
            return a;
        }
        w.acos() * Self::two()
    }

    /// Returns the (normalized) rotation axis.
    ///
    /// For rotations by (almost) zero radians the axis is undefined, and `(0, 0, 1)` is
    /// returned.
    pub fn axis(self) -> Vector<T, 3, Q> {
        let tmp1 = T::ONE - self.w() * self.w();
        if tmp1 <= T::ZERO {
            return Vector::<T, 3, Q>::Z;
        }
        let tmp2 = T::ONE / tmp1.sqrt();
        self.vector_part() * tmp2
    }

    /// Returns the Euler angles `(pitch, yaw, roll)` of this rotation, in radians.
    pub fn euler_angles(self) -> Vector<T, 3, Q> {
        Vector::from_array([self.pitch(), self.yaw(), self.roll()])
    }

    /// Returns the rotation around the X axis, in radians.
    pub fn pitch(self) -> T {
        let (x, y, z, w) = (self.x(), self.y(), self.z(), self.w());
        let sin = Self::two() * (y * z + w * x);
        let cos = w * w - x * x - y * y + z * z;
        if sin.abs() <= T::EPSILON && cos.abs() <= T::EPSILON {
            // Gimbal lock: `atan2(0, 0)` is meaningless.
            return Self::two() * x.atan2(w);
        }
        sin.atan2(cos)
    }

    /// Returns the rotation around the Y axis, in radians.
    pub fn yaw(self) -> T {
        let (x, y, z, w) = (self.x(), self.y(), self.z(), self.w());
        (-Self::two() * (x * z - w * y)).clamp(-T::ONE, T::ONE).asin()
    }

    /// Returns the rotation around the Z axis, in radians.
    pub fn roll(self) -> T {
        let (x, y, z, w) = (self.x(), self.y(), self.z(), self.w());
        let sin = Self::two() * (x * y + w * z);
        let cos = w * w + x * x - y * y - z * z;
        if sin.abs() <= T::EPSILON && cos.abs() <= T::EPSILON {
            return T::ZERO;
        }
        sin.atan2(cos)
    }

    /// Linear interpolation: `self * (1 - a) + other * a`.
    ///
    /// The result is not normalized. `a` must be in `[0, 1]`.
    pub fn lerp(self, other: Self, a: T) -> Self {
        debug_assert!(
            a >= T::ZERO && a <= T::ONE,
            "interpolation factor {a} outside of [0, 1]"
        );
        self * (T::ONE - a) + other * a
    }

    /// Component-wise blend used when two rotations are too close for spherical interpolation.
    fn blend(self, other: Self, a: T) -> Self {
        Self::from_vec4(self.vec.mix(other.vec, a))
    }

    /// Spherical linear interpolation, *without* taking the shortest path.
    ///
    /// Going from `self` to `other` may rotate by more than half a turn.
    pub fn mix(self, other: Self, a: T) -> Self {
        let cos_theta = self.dot(other);
        if cos_theta > T::ONE - T::EPSILON {
            return self.blend(other, a);
        }
        let angle = cos_theta.acos();
        (self * ((T::ONE - a) * angle).sin() + other * (a * angle).sin()) / angle.sin()
    }

    /// Spherical linear interpolation along the shortest path.
    ///
    /// Returns `self` for `a = 0` and `other` (or `-other`, the same rotation) for `a = 1`.
    /// Nearly identical rotations are blended linearly.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shade_math::*;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// let a = Quatf::IDENTITY;
    /// let b = Quat::from_rotation_z(FRAC_PI_2);
    /// assert_approx_eq!(a.slerp(b, 0.5), Quat::from_rotation_z(FRAC_PI_2 / 2.0)).abs(1e-6);
    /// ```
    pub fn slerp(self, other: Self, a: T) -> Self {
        if self == other {
            return self;
        }
        let (other, cos_theta) = self.shortest(other);
        if cos_theta > T::ONE - T::EPSILON {
            return self.blend(other, a);
        }
        let angle = cos_theta.acos();
        (self * ((T::ONE - a) * angle).sin() + other * (a * angle).sin()) / angle.sin()
    }

    /// Spherical linear interpolation with `spins` extra half turns.
    ///
    /// The interpolation follows the shortest path between `self` and `other`, extended by
    /// `spins * π` radians of additional rotation. `spins = 0` behaves like [`Quat::slerp`].
    pub fn slerp_spin(self, other: Self, a: T, spins: i32) -> Self {
        let (other, cos_theta) = self.shortest(other);
        if cos_theta > T::ONE - T::EPSILON {
            return self.blend(other, a);
        }
        let angle = cos_theta.acos();
        let phi = angle + T::from_f64(f64::from(spins)) * T::PI;
        (self * (angle - a * phi).sin() + other * (a * phi).sin()) / angle.sin()
    }

    /// Flips `other` into the hemisphere of `self`; returns it with the (non-negative) dot product.
    fn shortest(self, other: Self) -> (Self, T) {
        let cos_theta = self.dot(other);
        if cos_theta < T::ZERO {
            (-other, -cos_theta)
        } else {
            (other, cos_theta)
        }
    }
}

impl<T: Scalar, Q: Qualifier> From<Vector<T, 4, Q>> for Quat<T, Q> {
    fn from(vec: Vector<T, 4, Q>) -> Self {
        Self::from_vec4(vec)
    }
}

impl<T: Scalar, Q: Qualifier> fmt::Debug for Quat<T, Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quat")
            .field("x", &self.x())
            .field("y", &self.y())
            .field("z", &self.z())
            .field("w", &self.w())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use crate::{assert_approx_eq, storage::Aligned, vec3, vec4, Mat3f, Vec3f};

    use super::*;

    /// `q` and `-q` describe the same rotation.
    fn same_rotation(a: Quatf, b: Quatf) -> bool {
        a.dot(b).abs() > 1.0 - 1e-5
    }

    #[test]
    fn hamilton_product() {
        let i = Quat::from_xyzw(1.0, 0.0, 0.0, 0.0);
        let j = Quat::from_xyzw(0.0, 1.0, 0.0, 0.0);
        let k = Quat::from_xyzw(0.0, 0.0, 1.0, 0.0);
        let minus_one = Quat::from_xyzw(0.0, 0.0, 0.0, -1.0);
        assert_eq!(i * j, k);
        assert_eq!(j * i, -k);
        assert_eq!(j * k, i);
        assert_eq!(k * i, j);
        assert_eq!(i * i, minus_one);
        assert_eq!(i * j * k, minus_one);
        assert_eq!(Quatf::IDENTITY * k, k);
    }

    #[test]
    fn rotate_vectors() {
        let q = Quat::from_rotation_z(FRAC_PI_2);
        assert_approx_eq!(q * vec3(1.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0)).abs(1e-6);
        assert_approx_eq!(q * vec4(1.0, 0.0, 0.0, 7.0), vec4(0.0, 1.0, 0.0, 7.0)).abs(1e-6);
        // Multiplying from the right applies the inverse rotation.
        assert_approx_eq!(vec3(0.0, 1.0, 0.0) * q, vec3(1.0, 0.0, 0.0)).abs(1e-6);

        let qx = Quat::from_rotation_x(FRAC_PI_2);
        assert_approx_eq!(qx * Vec3f::Y, Vec3f::Z).abs(1e-6);
        let qy = Quat::from_rotation_y(FRAC_PI_2);
        assert_approx_eq!(qy * Vec3f::Z, Vec3f::X).abs(1e-6);

        // Composition applies the right operand first.
        assert_approx_eq!((qy * qx) * Vec3f::Y, qy * (qx * Vec3f::Y)).abs(1e-6);
    }

    #[test]
    fn inverse() {
        let q = Quat::<_>::from_xyzw(1.0, -2.0, 0.5, 3.0);
        assert_approx_eq!(q * q.inverse(), Quat::IDENTITY).abs(1e-6);
        let u = Quat::from_axis_angle(vec3(0.0, 0.6, 0.8), 1.2);
        assert_approx_eq!(u.inverse(), u.conjugate()).abs(1e-6);
        assert_approx_eq!(u.length(), 1.0).abs(1e-6);
    }

    #[test]
    fn normalize() {
        let q = Quat::<_>::from_xyzw(0.0, 3.0, 0.0, 4.0).normalize();
        assert_approx_eq!(q, Quat::from_xyzw(0.0, 0.6, 0.0, 0.8)).abs(1e-6);
        assert_eq!(Quatf::from_xyzw(0.0, 0.0, 0.0, 0.0).normalize(), Quat::IDENTITY);
        assert_eq!(Quatf::from_xyzw(1e-9, 0.0, 0.0, 0.0).normalize(), Quat::IDENTITY);
    }

    #[test]
    fn wxyz() {
        let q = Quat::from_xyzw(1, 2, 3, 4);
        assert_eq!(q.to_array_wxyz(), [4, 1, 2, 3]);
        assert_eq!(Quat::from_array_wxyz(q.to_array_wxyz()), q);
        assert_eq!(q.vector_part(), vec3(1, 2, 3));
    }

    #[test]
    fn matrix_round_trip() {
        let axes = [
            vec3(1.0, 0.0, 0.0),
            vec3(0.0, 1.0, 0.0),
            vec3(0.0, 0.0, 1.0),
            vec3(1.0, 1.0, 1.0).normalize(),
            vec3(-0.3, 0.9, 0.1).normalize(),
        ];
        // Covers all four extraction branches, including half turns.
        for axis in axes {
            for angle in [0.0, 0.4, 1.5, 3.0, PI, 4.0, 6.0] {
                let q = Quat::from_axis_angle(axis, angle);
                let back = Quat::from_mat3(q.to_mat3());
                assert!(same_rotation(q, back), "{q:?} -> {back:?}");
                let back4 = Quat::from_mat4(q.to_mat4());
                assert!(same_rotation(q, back4), "{q:?} -> {back4:?}");
            }
        }
        assert_eq!(Quatf::IDENTITY.to_mat3(), Mat3f::IDENTITY);
    }

    #[test]
    fn matrix_rotates_like_quat() {
        let q = Quat::from_axis_angle(vec3(0.0, 0.6, 0.8), 2.0);
        let v = vec3(0.25, -1.0, 3.0);
        assert_approx_eq!(q.to_mat3() * v, q * v).abs(1e-5);
        assert_approx_eq!(q.to_mat4() * v.extend(1.0), (q * v).extend(1.0)).abs(1e-5);
    }

    #[test]
    fn angle_axis() {
        let axis = vec3(0.0, 0.6, 0.8);
        for angle in [0.1, 0.9, 2.0, 3.0] {
            let q = Quat::from_axis_angle(axis, angle);
            assert_approx_eq!(q.angle(), angle).abs(1e-5);
            assert_approx_eq!(q.axis(), axis).abs(1e-4);
        }
        // Real part negative: reported as the long way around.
        let q = -Quat::from_axis_angle(axis, 0.2);
        assert_approx_eq!(q.angle(), 2.0 * PI - 0.2).abs(1e-5);

        assert_eq!(Quatf::IDENTITY.axis(), Vec3f::Z);
        assert_eq!(Quatf::IDENTITY.angle(), 0.0);
    }

    #[test]
    fn euler() {
        let angles = vec3(0.3, 0.2, 0.1);
        let q = Quat::from_euler(angles);
        assert_approx_eq!(q.euler_angles(), angles).abs(1e-5);
        assert_approx_eq!(q.length(), 1.0).abs(1e-6);

        let single_axis = [
            (vec3(0.7, 0.0, 0.0), Quat::from_rotation_x(0.7)),
            (vec3(0.0, 0.7, 0.0), Quat::from_rotation_y(0.7)),
            (vec3(0.0, 0.0, 0.7), Quat::from_rotation_z(0.7)),
        ];
        for (angles, expected) in single_axis {
            assert_approx_eq!(Quat::from_euler(angles), expected).abs(1e-6);
        }
    }

    #[test]
    fn from_to() {
        let u = vec3(1.0, 2.0, 3.0);
        let v = vec3(-2.0, 0.5, 1.0);
        let q = Quat::from_to(u, v);
        assert_approx_eq!(q * u.normalize(), v.normalize()).abs(1e-5);

        assert_eq!(Quat::from_to(u, u), Quat::IDENTITY);

        for dir in [Vec3f::X, Vec3f::Y, Vec3f::Z, vec3(3.0, -1.0, 2.0)] {
            let q = Quat::from_to(dir, -dir);
            assert!(!q.into_vec4().is_nan().any(), "{q:?}");
            assert_approx_eq!(q.length(), 1.0).abs(1e-6);
            assert_approx_eq!(q * dir, -dir).abs(1e-5);
        }
    }

    #[test]
    fn slerp() {
        let a = Quat::from_axis_angle(vec3(0.0, 0.6, 0.8), 0.5);
        let b = Quat::from_axis_angle(vec3(1.0, 0.0, 0.0), 2.0);
        assert_approx_eq!(a.slerp(b, 0.0), a).abs(1e-6);
        assert_approx_eq!(a.slerp(b, 1.0), b).abs(1e-6);
        for t in [0.0, 0.3, 0.5, 1.0] {
            assert_eq!(a.slerp(a, t), a);
            assert_approx_eq!(a.slerp(b, t).length(), 1.0).abs(1e-6);
        }

        // Shortest path: `-b` is the same rotation, and interpolates identically.
        assert_approx_eq!(a.slerp(-b, 0.5), a.slerp(b, 0.5)).abs(1e-6);

        let z0 = Quatf::IDENTITY;
        let z1 = Quat::from_rotation_z(FRAC_PI_2);
        assert_approx_eq!(z0.slerp(z1, 0.5), Quat::from_rotation_z(FRAC_PI_2 / 2.0)).abs(1e-6);
        assert_approx_eq!(z0.slerp_spin(z1, 0.5, 0), z0.slerp(z1, 0.5)).abs(1e-6);
        assert_approx_eq!(z0.slerp_spin(z1, 0.0, 2), z0).abs(1e-6);
    }

    #[test]
    fn slerp_nearly_parallel() {
        let a = Quat::<_>::from_rotation_z(0.3f64);
        let b = Quat::from_rotation_z(0.3f64 + 1e-9);
        let mid = a.slerp(b, 0.5);
        assert!(!mid.into_vec4().is_nan().any());
        assert_approx_eq!(mid, a).abs(1e-8);
    }

    #[test]
    fn lerp_mix() {
        let a = Quat::<_>::from_xyzw(0.0, 0.0, 0.0, 1.0);
        let b = Quat::from_xyzw(0.0, 0.0, 1.0, 0.0);
        assert_eq!(a.lerp(b, 0.5), Quat::from_xyzw(0.0, 0.0, 0.5, 0.5));
        assert_approx_eq!(a.mix(b, 0.5), Quat::from_rotation_z(FRAC_PI_2)).abs(1e-6);
        // `mix` does not flip to the short path.
        assert_approx_eq!(a.mix(-b, 1.0), -b).abs(1e-6);
    }

    #[test]
    fn aligned_matches_packed() {
        let q = Quat::from_axis_angle(vec3(0.0, 0.6, 0.8), 1.0);
        let qa: Quat<f32, Aligned> = q.requalify();
        let v = vec3(1.0, 2.0, 3.0);
        let rotated: Vec3f = (qa * v.requalify::<Aligned>()).requalify();
        assert_eq!(rotated.map(f32::to_bits), (q * v).map(f32::to_bits));
        assert_eq!(std::mem::align_of::<Quat<f32, Aligned>>(), 16);
    }
}
