//! Error types for matriz operations.
//!
//! Every failing matrix operation reports one of these kinds; a failed
//! operation never mutates its operands.

use std::fmt;

/// Main error type for matriz operations.
///
/// Each variant carries the dimensions that triggered the failure.
///
/// # Examples
///
/// ```
/// use matriz::error::MatrizError;
///
/// let err = MatrizError::Mul {
///     left: (2, 3),
///     right: (2, 2),
/// };
/// assert!(err.to_string().contains("cannot multiply"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrizError {
    /// One of rows/cols is zero while the other is non-zero.
    IllegalSize {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
    },

    /// Supplied flat value sequence length does not equal rows * cols.
    Creation {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
        /// Number of values actually supplied
        len: usize,
    },

    /// Addition or subtraction attempted on mismatched shapes.
    Sum {
        /// Shape of the left operand
        left: (usize, usize),
        /// Shape of the right operand
        right: (usize, usize),
    },

    /// Multiplication attempted with left columns != right rows.
    Mul {
        /// Shape of the left operand
        left: (usize, usize),
        /// Shape of the right operand
        right: (usize, usize),
    },

    /// Transpose attempted on a non-square matrix.
    Trans {
        /// Row count of the matrix
        rows: usize,
        /// Column count of the matrix
        cols: usize,
    },
}

impl fmt::Display for MatrizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrizError::IllegalSize { rows, cols } => {
                write!(
                    f,
                    "illegal matrix size {rows}x{cols}: dimensions must be both zero or both positive"
                )
            }
            MatrizError::Creation { rows, cols, len } => {
                write!(
                    f,
                    "cannot build a {rows}x{cols} matrix from {len} values: expected {}",
                    rows * cols
                )
            }
            MatrizError::Sum { left, right } => {
                write!(
                    f,
                    "cannot add or subtract {}x{} and {}x{} matrices: shapes must match",
                    left.0, left.1, right.0, right.1
                )
            }
            MatrizError::Mul { left, right } => {
                write!(
                    f,
                    "cannot multiply {}x{} by {}x{}: left columns must equal right rows",
                    left.0, left.1, right.0, right.1
                )
            }
            MatrizError::Trans { rows, cols } => {
                write!(f, "transpose requires a square matrix, got {rows}x{cols}")
            }
        }
    }
}

impl std::error::Error for MatrizError {}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, MatrizError>;
