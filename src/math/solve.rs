use log::{debug, trace};

use crate::error::MatrixError;
use crate::math::matrix::Matrix;

/// Identity matrix: 1.0 where the row and column index agree, 0.0 elsewhere.
/// Does not have to be square.
pub fn eye(m: usize, n: usize) -> Matrix {
    let mut out = Matrix::new(m, n);
    for i in 0..out.rows().min(out.cols()) {
        out[(i, i)] = 1.0;
    }
    out
}

/// Horizontal concatenation `[A | B]`. Requires equal heights.
pub fn augment_width(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    if a.rows() != b.rows() {
        return Err(MatrixError::ShapeMismatch {
            expected: (a.rows(), b.cols()),
            found: b.shape(),
        });
    }
    let mut out = Matrix::new(a.rows(), a.cols() + b.cols());
    for i in 0..a.rows() {
        for j in 0..a.cols() {
            out[(i, j)] = a[(i, j)];
        }
        for j in 0..b.cols() {
            out[(i, a.cols() + j)] = b[(i, j)];
        }
    }
    Ok(out)
}

/// Vertical concatenation of `A` on top of `B`. Requires equal widths.
pub fn augment_height(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    if a.cols() != b.cols() {
        return Err(MatrixError::ShapeMismatch {
            expected: (b.rows(), a.cols()),
            found: b.shape(),
        });
    }
    let mut out = Matrix::new(a.rows() + b.rows(), a.cols());
    for j in 0..a.cols() {
        for i in 0..a.rows() {
            out[(i, j)] = a[(i, j)];
        }
        for i in 0..b.rows() {
            out[(a.rows() + i, j)] = b[(i, j)];
        }
    }
    Ok(out)
}

/// Invert a square matrix by Gauss-Jordan elimination on `[A | I]`.
///
/// For each pivot column the rows below the diagonal are scanned for the
/// first entry that is exactly non-zero (no tolerance is applied); a column
/// with none is reported as `Singular` and no partial result escapes. The
/// chosen row is swapped onto the diagonal, normalized to a unit pivot, and
/// every lower row with a non-zero entry in the column is cleared by scaling
/// it to match the pivot row and subtracting. The backward pass then clears
/// everything above the diagonal, and the inverse is read out of the
/// right-hand block.
///
/// # Arguments
///
/// * `a` - The matrix to invert. Must be square.
///
/// # Returns
///
/// The inverse of `a`, or `ShapeMismatch` for a non-square input, or
/// `Singular` when a pivot column is all zeros.
pub fn invert(a: &Matrix) -> Result<Matrix, MatrixError> {
    if a.rows() != a.cols() {
        return Err(MatrixError::ShapeMismatch {
            expected: (a.rows(), a.rows()),
            found: a.shape(),
        });
    }
    let n = a.rows();
    debug!("inverting a {}x{} matrix", n, n);

    let mut aug = augment_width(a, &eye(n, n))?;
    let width = aug.cols();

    // Forward pass: unit upper-triangular form.
    for pivot_col in 0..n {
        let pivot_dia = pivot_col;

        let pivot_row = match (pivot_dia..n).find(|&row| aug[(row, pivot_col)] != 0.0) {
            Some(row) => row,
            None => {
                debug!("pivot column {} is all zeros", pivot_col);
                return Err(MatrixError::Singular);
            }
        };

        if pivot_row != pivot_dia {
            trace!("swapping rows {} and {}", pivot_dia, pivot_row);
            aug.swap_rows(pivot_dia, pivot_row)?;
        }
        let pivot_row = pivot_dia;

        // Normalize the pivot row so the pivot becomes 1.
        let scale = 1.0 / aug[(pivot_row, pivot_col)];
        for j in 0..width {
            aug[(pivot_row, j)] *= scale;
        }

        // Clear the column below the pivot: scale the target row so its
        // pivot-column entry matches the pivot, then subtract the pivot row.
        for target_row in (pivot_row + 1)..n {
            let target = aug[(target_row, pivot_col)];
            if target == 0.0 {
                continue;
            }
            let x = aug[(pivot_row, pivot_col)] / target;
            for j in 0..width {
                aug[(target_row, j)] *= x;
            }
            for j in 0..width {
                let pivot_value = aug[(pivot_row, j)];
                aug[(target_row, j)] -= pivot_value;
            }
        }
    }

    // Backward pass: clear everything above each pivot, bottom to top.
    for pivot_row in (1..n).rev() {
        let pivot_col = pivot_row;
        for target_row in (0..pivot_row).rev() {
            let x = aug[(target_row, pivot_col)];
            if x == 0.0 {
                continue;
            }
            for j in 0..width {
                let pivot_value = aug[(pivot_row, j)];
                aug[(target_row, j)] -= x * pivot_value;
            }
        }
    }

    // The right-hand block of the augmented matrix is now the inverse.
    let mut inverse = Matrix::new(n, n);
    for i in 0..n {
        for j in 0..n {
            inverse[(i, j)] = aug[(i, n + j)];
        }
    }
    Ok(inverse)
}
