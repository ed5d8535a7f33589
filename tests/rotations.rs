//! Integration tests for norms, direction-cosine matrices, and quaternion
//! helpers.

use std::f64::consts::{FRAC_PI_2, PI};

use spherodyn::error::MatrixError;
use spherodyn::math::rotations::{
    dcm_from_euler, euler_from_dcm, euler_to_quaternion, rotate_quaternion,
    rotation_angle_between,
};
use spherodyn::math::{norm, p_norm, Matrix};

fn assert_close(a: f64, b: f64, tol: f64) {
    assert!((a - b).abs() < tol, "{} vs {}", a, b);
}

// ---------------------------------------------------------------------------
// Norms
// ---------------------------------------------------------------------------

#[test]
fn euclidean_norm_three_four_five() {
    let v = Matrix::from_rows(&[vec![3.0], vec![4.0]]);
    assert_close(norm(&v), 5.0, 1e-12);
}

#[test]
fn norm_ignores_columns_past_the_first() {
    let v = Matrix::from_rows(&[vec![3.0, 99.0], vec![4.0, -99.0]]);
    assert_close(norm(&v), 5.0, 1e-12);
}

#[test]
fn p_norm_cubic() {
    let v = Matrix::from_rows(&[vec![1.0], vec![2.0], vec![3.0]]);
    assert_close(p_norm(&v, 3.0), 36.0_f64.powf(1.0 / 3.0), 1e-12);
}

#[test]
fn p_norm_two_matches_euclidean() {
    let v = Matrix::from_rows(&[vec![1.5], vec![-2.5], vec![0.5]]);
    assert_close(p_norm(&v, 2.0), norm(&v), 1e-12);
}

#[test]
fn p_norm_one_is_sum_of_magnitudes() {
    let v = Matrix::from_rows(&[vec![1.0], vec![-2.0], vec![3.0]]);
    assert_close(p_norm(&v, 1.0), 6.0, 1e-12);
}

// ---------------------------------------------------------------------------
// Direction-cosine matrices
// ---------------------------------------------------------------------------

#[test]
fn dcm_requires_three_by_three() {
    let mut out = Matrix::new(2, 3);
    let before = out.clone();
    assert!(matches!(
        dcm_from_euler(0.1, 0.2, 0.3, &mut out),
        Err(MatrixError::ShapeMismatch { .. })
    ));
    assert_eq!(out, before);
}

#[test]
fn dcm_at_zero_angles_is_identity() {
    let mut dcm = Matrix::new(3, 3);
    dcm_from_euler(0.0, 0.0, 0.0, &mut dcm).unwrap();
    for i in 0..3 {
        for j in 0..3 {
            assert_close(dcm[(i, j)], if i == j { 1.0 } else { 0.0 }, 1e-12);
        }
    }
}

#[test]
fn dcm_pure_yaw_quarter_turn() {
    let mut dcm = Matrix::new(3, 3);
    dcm_from_euler(FRAC_PI_2, 0.0, 0.0, &mut dcm).unwrap();
    assert_close(dcm[(0, 0)], 0.0, 1e-12);
    assert_close(dcm[(0, 1)], 1.0, 1e-12);
    assert_close(dcm[(1, 0)], -1.0, 1e-12);
    assert_close(dcm[(1, 1)], 0.0, 1e-12);
    assert_close(dcm[(2, 2)], 1.0, 1e-12);
}

#[test]
fn dcm_is_orthonormal() {
    let mut dcm = Matrix::new(3, 3);
    dcm_from_euler(0.7, -0.4, 1.2, &mut dcm).unwrap();
    let product = dcm.matmul(&dcm.transpose()).unwrap();
    for i in 0..3 {
        for j in 0..3 {
            assert_close(product[(i, j)], if i == j { 1.0 } else { 0.0 }, 1e-12);
        }
    }
}

#[test]
fn euler_angles_round_trip_through_dcm() {
    let (psi, theta, phi) = (0.3, -0.2, 0.5);
    let mut dcm = Matrix::new(3, 3);
    dcm_from_euler(psi, theta, phi, &mut dcm).unwrap();
    let (psi_r, theta_r, phi_r) = euler_from_dcm(&dcm).unwrap();
    assert_close(psi_r, psi, 1e-12);
    assert_close(theta_r, theta, 1e-12);
    assert_close(phi_r, phi, 1e-12);
}

// ---------------------------------------------------------------------------
// Quaternions
// ---------------------------------------------------------------------------

#[test]
fn rotate_quaternion_requires_four_by_one() {
    let mut q = Matrix::column(3);
    assert!(matches!(
        rotate_quaternion(&mut q, 1.0),
        Err(MatrixError::ShapeMismatch { .. })
    ));
}

#[test]
fn rotate_quaternion_half_angle_about_x() {
    let mut q = Matrix::column(4);
    q.set_element(1, 0, 1.0).unwrap(); // unit axis along x
    rotate_quaternion(&mut q, FRAC_PI_2).unwrap();
    assert_close(q[(0, 0)], (PI / 4.0).cos(), 1e-12);
    assert_close(q[(1, 0)], (PI / 4.0).sin(), 1e-12);
    assert_close(q[(2, 0)], 0.0, 1e-12);
    assert_close(q[(3, 0)], 0.0, 1e-12);
    assert_close(norm(&q), 1.0, 1e-12);
}

#[test]
fn euler_to_quaternion_identity_at_zero() {
    let mut q = Matrix::column(4);
    euler_to_quaternion(0.0, 0.0, 0.0, &mut q).unwrap();
    assert_close(q[(0, 0)], 1.0, 1e-12);
    assert_close(q[(1, 0)], 0.0, 1e-12);
    assert_close(q[(2, 0)], 0.0, 1e-12);
    assert_close(q[(3, 0)], 0.0, 1e-12);
}

#[test]
fn euler_to_quaternion_is_unit_length() {
    let mut q = Matrix::column(4);
    euler_to_quaternion(1.1, -0.6, 0.4, &mut q).unwrap();
    assert_close(norm(&q), 1.0, 1e-12);
}

#[test]
fn pure_yaw_quaternion_matches_axis_rotation() {
    let psi = 0.8;

    let mut from_euler = Matrix::column(4);
    euler_to_quaternion(psi, 0.0, 0.0, &mut from_euler).unwrap();

    let mut from_axis = Matrix::column(4);
    from_axis.set_element(3, 0, 1.0).unwrap(); // unit axis along z
    rotate_quaternion(&mut from_axis, psi).unwrap();

    for i in 0..4 {
        assert_close(from_euler[(i, 0)], from_axis[(i, 0)], 1e-12);
    }
}

// ---------------------------------------------------------------------------
// Relative rotation angle
// ---------------------------------------------------------------------------

#[test]
fn angle_between_orthogonal_axes() {
    let x = Matrix::from_rows(&[vec![1.0], vec![0.0], vec![0.0]]);
    let y = Matrix::from_rows(&[vec![0.0], vec![1.0], vec![0.0]]);
    assert_close(rotation_angle_between(&x, &y).unwrap(), FRAC_PI_2, 1e-12);
}

#[test]
fn angle_between_parallel_vectors_is_zero() {
    let u = Matrix::from_rows(&[vec![0.0], vec![2.0], vec![0.0]]);
    let v = Matrix::from_rows(&[vec![0.0], vec![5.0], vec![0.0]]);
    assert_close(rotation_angle_between(&u, &v).unwrap(), 0.0, 1e-9);
}

#[test]
fn angle_between_requires_three_vectors() {
    let u = Matrix::column(2);
    let v = Matrix::column(3);
    assert!(matches!(
        rotation_angle_between(&u, &v),
        Err(MatrixError::ShapeMismatch { .. })
    ));
}
