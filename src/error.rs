use std::error::Error;
use std::fmt;

/// Failure modes of the matrix and particle operations.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// An index fell outside the valid row/column range.
    OutOfBounds { row: usize, col: usize },
    /// Operand dimensions are incompatible with the requested operation.
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
    /// A pivot column contained only zeros during inversion.
    Singular,
    /// A scalar parameter was outside its accepted range.
    InvalidParameter(&'static str),
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatrixError::OutOfBounds { row, col } => {
                write!(f, "index ({}, {}) is outside the matrix bounds", row, col)
            }
            MatrixError::ShapeMismatch { expected, found } => write!(
                f,
                "expected a {} x {} operand, found {} x {}",
                expected.0, expected.1, found.0, found.1
            ),
            MatrixError::Singular => write!(f, "matrix is singular (all-zero pivot column)"),
            MatrixError::InvalidParameter(what) => write!(f, "invalid parameter: {}", what),
        }
    }
}

impl Error for MatrixError {}
