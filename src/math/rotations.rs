//! Vector norms and rotation helpers for 3-D coordinate frames.
//!
//! All angles are in radians. The Euler-angle convention throughout is
//! yaw-pitch-roll (psi, theta, phi), i.e. Z-X-Y rotation order.

use crate::error::MatrixError;
use crate::math::matrix::Matrix;

/// Euclidean norm of a column vector.
///
/// Only column 0 participates; any further columns are ignored.
pub fn norm(v: &Matrix) -> f64 {
    let mut acc = 0.0;
    for i in 0..v.rows() {
        acc += v[(i, 0)] * v[(i, 0)];
    }
    acc.sqrt()
}

/// p-norm of a column vector: `(sum |v_i|^p)^(1/p)`, column 0 only.
pub fn p_norm(v: &Matrix, p: f64) -> f64 {
    let mut acc = 0.0;
    for i in 0..v.rows() {
        acc += v[(i, 0)].abs().powf(p);
    }
    acc.powf(1.0 / p)
}

/// Fill `dcm` with the direction-cosine matrix for the given yaw, pitch,
/// and roll angles. `dcm` must be 3 x 3; on `ShapeMismatch` it is left
/// untouched.
pub fn dcm_from_euler(
    psi: f64,
    theta: f64,
    phi: f64,
    dcm: &mut Matrix,
) -> Result<(), MatrixError> {
    if dcm.shape() != (3, 3) {
        return Err(MatrixError::ShapeMismatch {
            expected: (3, 3),
            found: dcm.shape(),
        });
    }

    let (spsi, cpsi) = psi.sin_cos();
    let (stheta, ctheta) = theta.sin_cos();
    let (sphi, cphi) = phi.sin_cos();

    dcm[(0, 0)] = cpsi * ctheta;
    dcm[(0, 1)] = spsi * ctheta;
    dcm[(0, 2)] = -stheta;

    dcm[(1, 0)] = cpsi * stheta * sphi - spsi * cphi;
    dcm[(1, 1)] = spsi * stheta * sphi + cpsi * cphi;
    dcm[(1, 2)] = ctheta * sphi;

    dcm[(2, 0)] = cpsi * stheta * cphi + spsi * sphi;
    dcm[(2, 1)] = spsi * stheta * cphi - cpsi * sphi;
    dcm[(2, 2)] = ctheta * cphi;

    Ok(())
}

/// Recover the yaw, pitch, and roll angles from a 3 x 3 direction-cosine
/// matrix as `(psi, theta, phi)`.
pub fn euler_from_dcm(dcm: &Matrix) -> Result<(f64, f64, f64), MatrixError> {
    if dcm.shape() != (3, 3) {
        return Err(MatrixError::ShapeMismatch {
            expected: (3, 3),
            found: dcm.shape(),
        });
    }
    let psi = dcm[(1, 0)].atan2(dcm[(0, 0)]);
    let theta = (-dcm[(2, 0)]).asin();
    let phi = dcm[(2, 1)].atan2(dcm[(2, 2)]);
    Ok((psi, theta, phi))
}

/// Apply a half-angle rotation update to a quaternion stored as a 4 x 1
/// column vector `[w, x, y, z]`.
///
/// Sets `q[0] = cos(angle/2)` and scales `q[1..=3]` in place by
/// `sin(angle/2)`. The caller must have pre-loaded `q[1..=3]` with a unit
/// rotation axis; the result is unspecified for a non-unit axis.
pub fn rotate_quaternion(q: &mut Matrix, angle: f64) -> Result<(), MatrixError> {
    if q.shape() != (4, 1) {
        return Err(MatrixError::ShapeMismatch {
            expected: (4, 1),
            found: q.shape(),
        });
    }
    let (sin_half, cos_half) = (angle / 2.0).sin_cos();
    q[(0, 0)] = cos_half;
    for i in 1..4 {
        q[(i, 0)] *= sin_half;
    }
    Ok(())
}

/// Convert yaw, pitch, and roll angles into a unit quaternion, written into
/// the 4 x 1 column vector `q` as `[w, x, y, z]`.
pub fn euler_to_quaternion(
    psi: f64,
    theta: f64,
    phi: f64,
    q: &mut Matrix,
) -> Result<(), MatrixError> {
    if q.shape() != (4, 1) {
        return Err(MatrixError::ShapeMismatch {
            expected: (4, 1),
            found: q.shape(),
        });
    }

    let (sy, cy) = (psi / 2.0).sin_cos();
    let (sp, cp) = (theta / 2.0).sin_cos();
    let (sr, cr) = (phi / 2.0).sin_cos();

    q[(0, 0)] = cr * cp * cy + sr * sp * sy;
    q[(1, 0)] = sr * cp * cy - cr * sp * sy;
    q[(2, 0)] = cr * sp * cy + sr * cp * sy;
    q[(3, 0)] = cr * cp * sy - sr * sp * cy;

    Ok(())
}

/// Relative rotation angle between two 3 x 1 vectors, in radians.
///
/// Both vectors must be non-zero; a zero vector yields NaN.
pub fn rotation_angle_between(u: &Matrix, v: &Matrix) -> Result<f64, MatrixError> {
    if u.shape() != (3, 1) {
        return Err(MatrixError::ShapeMismatch {
            expected: (3, 1),
            found: u.shape(),
        });
    }
    if v.shape() != (3, 1) {
        return Err(MatrixError::ShapeMismatch {
            expected: (3, 1),
            found: v.shape(),
        });
    }
    let mut dot = 0.0;
    for i in 0..3 {
        dot += u[(i, 0)] * v[(i, 0)];
    }
    Ok((dot / (norm(u) * norm(v))).acos())
}
