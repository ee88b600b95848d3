use super::ApproxEq;

macro_rules! float {
    ($($ty:ty),+) => {
        $(
            impl ApproxEq for $ty {
                type Tolerance = Self;

                fn abs_diff_eq(&self, other: &Self, tolerance: Self) -> bool {
                    // Infinities only equal themselves.
                    if !self.is_finite() || !other.is_finite() {
                        return self == other;
                    }
                    (self - other).abs() <= tolerance
                }

                fn rel_diff_eq(&self, other: &Self, tolerance: Self) -> bool {
                    if !self.is_finite() || !other.is_finite() {
                        return self == other;
                    }
                    let largest = self.abs().max(other.abs());
                    (self - other).abs() <= largest * tolerance
                }

                fn ulps_diff_eq(&self, other: &Self, ulps: u32) -> bool {
                    if self.is_nan() || other.is_nan() {
                        return false;
                    }
                    if self.is_sign_negative() != other.is_sign_negative() {
                        // Only the two zeroes.
                        return self == other;
                    }
                    self.to_bits().abs_diff(other.to_bits()) <= ulps.into()
                }
            }
        )+
    };
}
float!(f32, f64);

impl<'a, T: ApproxEq<U> + ?Sized, U: ?Sized> ApproxEq<U> for &'a T {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &U, tolerance: Self::Tolerance) -> bool {
        T::abs_diff_eq(self, other, tolerance)
    }

    fn rel_diff_eq(&self, other: &U, tolerance: Self::Tolerance) -> bool {
        T::rel_diff_eq(self, other, tolerance)
    }

    fn ulps_diff_eq(&self, other: &U, ulps: u32) -> bool {
        T::ulps_diff_eq(self, other, ulps)
    }
}

impl<T: ApproxEq<U>, U> ApproxEq<[U]> for [T] {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &[U], tolerance: Self::Tolerance) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.abs_diff_eq(b, tolerance))
    }

    fn rel_diff_eq(&self, other: &[U], tolerance: Self::Tolerance) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.rel_diff_eq(b, tolerance))
    }

    fn ulps_diff_eq(&self, other: &[U], ulps: u32) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.ulps_diff_eq(b, ulps))
    }
}

impl<T: ApproxEq<U>, U, const N: usize> ApproxEq<[U; N]> for [T; N] {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &[U; N], tolerance: Self::Tolerance) -> bool {
        self[..].abs_diff_eq(&other[..], tolerance)
    }

    fn rel_diff_eq(&self, other: &[U; N], tolerance: Self::Tolerance) -> bool {
        self[..].rel_diff_eq(&other[..], tolerance)
    }

    fn ulps_diff_eq(&self, other: &[U; N], ulps: u32) -> bool {
        self[..].ulps_diff_eq(&other[..], ulps)
    }
}
