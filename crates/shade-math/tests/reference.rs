//! Compares results against `nalgebra` and the `half` crate.

use fastrand::Rng;
use half::f16;
use nalgebra::{Matrix3, Matrix4, Unit, UnitQuaternion, Vector3};
use shade_math::{
    assert_approx_eq,
    codec::{f32_to_half_bits, half_bits_to_f32},
    Mat3, Mat4, Matrix, Quat, Vec3,
};

fn rng() -> Rng {
    Rng::with_seed(0x9c1f_57a2_be03_4d11)
}

fn random_matrix<const N: usize>(rng: &mut Rng) -> Matrix<f64, N, N> {
    Matrix::from_fn(|col, row| rng.f64() * 2.0 - 1.0 + if col == row { 2.0 } else { 0.0 })
}

#[test]
fn mat3_against_nalgebra() {
    let mut rng = rng();
    for _ in 0..200 {
        let m: Mat3<f64> = random_matrix(&mut rng);
        let reference = Matrix3::from(m.into_column_major());

        assert_approx_eq!(m.determinant(), reference.determinant()).rel(1e-12);

        let inverse: [[f64; 3]; 3] = reference
            .try_inverse()
            .expect("matrix is diagonally dominant")
            .into();
        assert_approx_eq!(m.inverse().into_column_major(), inverse).abs(1e-12);
    }
}

#[test]
fn mat4_against_nalgebra() {
    let mut rng = rng();
    for _ in 0..200 {
        let m: Mat4<f64> = random_matrix(&mut rng);
        let reference = Matrix4::from(m.into_column_major());

        assert_approx_eq!(m.determinant(), reference.determinant()).rel(1e-10);

        let inverse: [[f64; 4]; 4] = reference
            .try_inverse()
            .expect("matrix is diagonally dominant")
            .into();
        assert_approx_eq!(m.inverse().into_column_major(), inverse).abs(1e-10);

        let v = Vec3::<f64>::from([rng.f64(), rng.f64(), rng.f64()]).extend(1.0);
        let expected = reference * nalgebra::Vector4::new(v[0], v[1], v[2], v[3]);
        assert_approx_eq!((m * v).into_array(), [expected.x, expected.y, expected.z, expected.w])
            .abs(1e-12);
    }
}

#[test]
fn quat_against_nalgebra() {
    let mut rng = rng();
    for _ in 0..200 {
        let axis = [rng.f64() - 0.5, rng.f64() - 0.5, rng.f64() - 0.5];
        let angle = rng.f64() * 6.0 - 3.0;
        let point = [rng.f64() * 4.0, rng.f64() * 4.0, rng.f64() * 4.0];

        let q: Quat<f64> = Quat::from_axis_angle(Vec3::<f64>::from(axis).normalize(), angle);
        let reference = UnitQuaternion::from_axis_angle(
            &Unit::new_normalize(Vector3::from(axis)),
            angle,
        );

        let [x, y, z, w] = q.to_array();
        let r = reference.quaternion();
        assert_approx_eq!([x, y, z, w], [r.i, r.j, r.k, r.w]).abs(1e-12);

        let rotated = reference * Vector3::from(point);
        let ours = q * Vec3::<f64>::from(point);
        assert_approx_eq!(ours.into_array(), [rotated.x, rotated.y, rotated.z]).abs(1e-12);

        let expected: [[f64; 4]; 4] = reference.to_homogeneous().into();
        assert_approx_eq!(q.to_mat4().into_column_major(), expected).abs(1e-12);
    }
}

#[test]
fn half_encoding_against_half_crate() {
    let mut rng = rng();
    let check = |value: f32| {
        if value.is_nan() {
            return;
        }
        assert_eq!(
            f32_to_half_bits(value),
            f16::from_f32(value).to_bits(),
            "{value:e} ({:#010x})",
            value.to_bits()
        );
    };

    for _ in 0..100_000 {
        // Arbitrary bit patterns, mostly outside of the half range.
        check(f32::from_bits(rng.u32(..)));
        // Normal half range, including overflow just past the largest finite value.
        check(rng.f32() * 131_072.0 - 65_536.0);
        // Subnormal half range.
        check((rng.f32() - 0.5) * 2f32.powi(-13));
    }
}

#[test]
fn half_decoding_against_half_crate() {
    for bits in 0..=u16::MAX {
        let ours = half_bits_to_f32(bits);
        let theirs = f16::from_bits(bits).to_f32();
        if theirs.is_nan() {
            assert!(ours.is_nan(), "{bits:#06x}");
        } else {
            assert_eq!(ours.to_bits(), theirs.to_bits(), "{bits:#06x}");
        }
    }
}
