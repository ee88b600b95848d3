use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::{approx::ApproxEq, storage::Qualifier, Float, Quat, Scalar, Signed, Vector};

impl<T: Scalar, Q: Qualifier> PartialEq for Quat<T, Q> {
    fn eq(&self, other: &Self) -> bool {
        self.vec == other.vec
    }
}

impl<T: Scalar + Eq, Q: Qualifier> Eq for Quat<T, Q> {}

impl<T, Q> ApproxEq for Quat<T, Q>
where
    T: Scalar + ApproxEq,
    Q: Qualifier,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, tolerance: Self::Tolerance) -> bool {
        self.vec.abs_diff_eq(&other.vec, tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, tolerance: Self::Tolerance) -> bool {
        self.vec.rel_diff_eq(&other.vec, tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps: u32) -> bool {
        self.vec.ulps_diff_eq(&other.vec, ulps)
    }
}

impl<T: Signed, Q: Qualifier> Neg for Quat<T, Q> {
    type Output = Self;

    fn neg(self) -> Self {
        Self { vec: -self.vec }
    }
}

impl<T: Signed, Q: Qualifier> Add for Quat<T, Q> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            vec: self.vec + rhs.vec,
        }
    }
}

impl<T: Signed, Q: Qualifier> AddAssign for Quat<T, Q> {
    fn add_assign(&mut self, rhs: Self) {
        self.vec += rhs.vec;
    }
}

impl<T: Signed, Q: Qualifier> Sub for Quat<T, Q> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            vec: self.vec - rhs.vec,
        }
    }
}

impl<T: Signed, Q: Qualifier> SubAssign for Quat<T, Q> {
    fn sub_assign(&mut self, rhs: Self) {
        self.vec -= rhs.vec;
    }
}

impl<T: Signed, Q: Qualifier> Mul<T> for Quat<T, Q> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self {
            vec: self.vec * rhs,
        }
    }
}

impl<T: Signed, Q: Qualifier> MulAssign<T> for Quat<T, Q> {
    fn mul_assign(&mut self, rhs: T) {
        self.vec *= rhs;
    }
}

impl<T: Signed, Q: Qualifier> Div<T> for Quat<T, Q> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Self {
            vec: self.vec / rhs,
        }
    }
}

impl<T: Signed, Q: Qualifier> DivAssign<T> for Quat<T, Q> {
    fn div_assign(&mut self, rhs: T) {
        self.vec /= rhs;
    }
}

macro_rules! scalar_lhs {
    ($($ty:ty),+) => {
        $(
            impl<Q: Qualifier> Mul<Quat<$ty, Q>> for $ty {
                type Output = Quat<$ty, Q>;

                fn mul(self, rhs: Quat<$ty, Q>) -> Self::Output {
                    rhs * self
                }
            }
        )+
    };
}
scalar_lhs!(f32, f64);

/// Hamilton product.
///
/// The result applies the rotation of `rhs` first, then that of `self`. The product is not
/// commutative.
impl<T: Signed, Q: Qualifier> Mul for Quat<T, Q> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let (px, py, pz, pw) = (self.x(), self.y(), self.z(), self.w());
        let (qx, qy, qz, qw) = (rhs.x(), rhs.y(), rhs.z(), rhs.w());

        Self::from_xyzw(
            pw * qx + px * qw + py * qz - pz * qy,
            pw * qy + py * qw + pz * qx - px * qz,
            pw * qz + pz * qw + px * qy - py * qx,
            pw * qw - px * qx - py * qy - pz * qz,
        )
    }
}

impl<T: Signed, Q: Qualifier> MulAssign for Quat<T, Q> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Rotates a 3D vector.
impl<T: Signed, Q: Qualifier> Mul<Vector<T, 3, Q>> for Quat<T, Q> {
    type Output = Vector<T, 3, Q>;

    fn mul(self, rhs: Vector<T, 3, Q>) -> Self::Output {
        let qv = self.vector_part();
        let uv = qv.cross(rhs);
        let uuv = qv.cross(uv);
        rhs + ((uv * self.w()) + uuv) * (T::ONE + T::ONE)
    }
}

/// Rotates the `xyz` part of a 4D vector, leaving `w` untouched.
impl<T: Signed, Q: Qualifier> Mul<Vector<T, 4, Q>> for Quat<T, Q> {
    type Output = Vector<T, 4, Q>;

    fn mul(self, rhs: Vector<T, 4, Q>) -> Self::Output {
        (self * rhs.truncate()).extend(rhs.w())
    }
}

/// Rotates a 3D vector by the inverse of the quaternion.
impl<T: Float, Q: Qualifier> Mul<Quat<T, Q>> for Vector<T, 3, Q> {
    type Output = Self;

    fn mul(self, rhs: Quat<T, Q>) -> Self {
        rhs.inverse() * self
    }
}

/// Rotates the `xyz` part of a 4D vector by the inverse of the quaternion.
impl<T: Float, Q: Qualifier> Mul<Quat<T, Q>> for Vector<T, 4, Q> {
    type Output = Self;

    fn mul(self, rhs: Quat<T, Q>) -> Self {
        rhs.inverse() * self
    }
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, vec3, Quatf};

    use super::*;

    #[test]
    fn arithmetic() {
        let a = Quat::<_>::from_xyzw(1.0, 2.0, 3.0, 4.0);
        let b = Quat::from_xyzw(0.5, 0.5, 0.5, 0.5);
        assert_eq!(a + b, Quat::from_xyzw(1.5, 2.5, 3.5, 4.5));
        assert_eq!(a - b, Quat::from_xyzw(0.5, 1.5, 2.5, 3.5));
        assert_eq!(a * 2.0, Quat::from_xyzw(2.0, 4.0, 6.0, 8.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(a / 2.0, Quat::from_xyzw(0.5, 1.0, 1.5, 2.0));
        assert_eq!(-a, Quat::from_xyzw(-1.0, -2.0, -3.0, -4.0));

        let mut c = a;
        c += b;
        c -= b;
        c *= 4.0;
        c /= 4.0;
        assert_eq!(c, a);
    }

    #[test]
    fn product_matches_rotation_order() {
        let a = Quat::from_rotation_x(0.4);
        let b = Quat::from_rotation_y(-1.1);
        let v = vec3(0.5, 1.0, -2.0);
        assert_approx_eq!((a * b) * v, a * (b * v)).abs(1e-5);

        let mut c = a;
        c *= b;
        assert_eq!(c, a * b);
    }

    #[test]
    fn integer_quaternions() {
        let i = Quat::from_xyzw(1, 0, 0, 0);
        let j = Quat::from_xyzw(0, 1, 0, 0);
        assert_eq!(i * j, Quat::from_xyzw(0, 0, 1, 0));
        assert_eq!(i * vec3(0, 1, 0), vec3(0, -1, 0));
    }

    #[test]
    fn inverse_rotation() {
        let q = Quatf::from_axis_angle(vec3(0.0, 0.6, 0.8), 1.3);
        let v = vec3(1.0, -2.0, 0.5);
        assert_approx_eq!((q * v) * q, v).abs(1e-5);
        assert_approx_eq!((q * v.extend(3.0)) * q, v.extend(3.0)).abs(1e-5);
    }
}
