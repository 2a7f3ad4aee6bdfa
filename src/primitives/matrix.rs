//! Matrix type for 2D numeric data.

use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Sub};
use std::slice;

use num_traits::One;
use serde::{Deserialize, Serialize};

use super::Scalar;
use crate::error::{MatrizError, Result};

/// A dense 2D matrix over a generic scalar element (row-major storage).
///
/// The shape invariant holds at all times: `data.len() == rows * cols`, and
/// `rows == 0` exactly when `cols == 0`. Shape is fixed at construction;
/// individual cells stay writable through [`set`](Matrix::set) and
/// [`IndexMut`].
///
/// # Examples
///
/// ```
/// use matriz::prelude::*;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m[(1, 2)], 6.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Scalar> Matrix<T> {
    /// Creates a zero-filled matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::IllegalSize`] if exactly one of `rows`/`cols`
    /// is zero. `zeros(0, 0)` is the legal fully-empty matrix.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::check_size(rows, cols)?;
        Ok(Self {
            data: vec![T::zero(); rows * cols],
            rows,
            cols,
        })
    }

    /// Creates a matrix from a flat row-major vector of values.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::IllegalSize`] if exactly one of `rows`/`cols`
    /// is zero, and [`MatrizError::Creation`] if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        Self::check_size(rows, cols)?;
        if data.len() != rows * cols {
            return Err(MatrizError::Creation {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    fn check_size(rows: usize, cols: usize) -> Result<()> {
        if (rows == 0) != (cols == 0) {
            return Err(MatrizError::IllegalSize { rows, cols });
        }
        Ok(())
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Returns whether the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[self.flat(row, col)]
    }

    /// Sets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        let cell = self.flat(row, col);
        self.data[cell] = value;
    }

    // Each axis is checked on its own: a column index past `cols` must not
    // alias a cell of the next row even when the flat index stays in range.
    fn flat(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "matrix index ({row}, {col}) out of bounds for {rows}x{cols} matrix",
            rows = self.rows,
            cols = self.cols,
        );
        row * self.cols + col
    }

    /// Returns the underlying row-major data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Forward-only iteration over the cells in row-major order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Adds another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::Sum`] if the shapes differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatrizError::Sum {
                left: self.shape(),
                right: other.shape(),
            });
        }

        let data: Vec<T> = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| a + b)
            .collect();

        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Subtracts another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::Sum`] if the shapes differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatrizError::Sum {
                left: self.shape(),
                right: other.shape(),
            });
        }

        let data: Vec<T> = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| a - b)
            .collect();

        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Matrix-matrix multiplication.
    ///
    /// Each cell accumulates from zero with the standard triple-nested
    /// loop; no algorithmic shortcuts.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::Mul`] if `self.n_cols() != other.n_rows()`.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(MatrizError::Mul {
                left: self.shape(),
                right: other.shape(),
            });
        }

        let mut data = vec![T::zero(); self.rows * other.cols];
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = T::zero();
                for k in 0..self.cols {
                    sum += self.get(i, k) * other.get(k, j);
                }
                data[i * other.cols + j] = sum;
            }
        }

        Ok(Self {
            data,
            rows: self.rows,
            cols: other.cols,
        })
    }

    /// Multiplies each element by a scalar.
    #[must_use]
    pub fn mul_scalar(&self, scalar: T) -> Self {
        Self {
            data: self.data.iter().map(|&x| x * scalar).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Transposes the matrix, conjugating each element.
    ///
    /// For real elements [`Scalar::conj`] is the identity, so this is the
    /// plain transpose; for complex elements it is the Hermitian transpose.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::Trans`] if the matrix is not square.
    ///
    /// # Examples
    ///
    /// ```
    /// use matriz::prelude::*;
    ///
    /// let m = Matrix::from_vec(2, 2, vec![
    ///     Complex::new(1.0, 0.0), Complex::new(2.0, 3.0),
    ///     Complex::new(0.0, 4.0), Complex::new(5.0, 0.0),
    /// ]).unwrap();
    /// let h = m.trans().unwrap();
    /// assert_eq!(h.get(0, 1), Complex::new(0.0, -4.0));
    /// ```
    pub fn trans(&self) -> Result<Self> {
        if self.rows != self.cols {
            return Err(MatrizError::Trans {
                rows: self.rows,
                cols: self.cols,
            });
        }

        let mut data = vec![T::zero(); self.rows * self.cols];
        for i in 0..self.cols {
            for j in 0..self.rows {
                data[i * self.rows + j] = self.get(j, i).conj();
            }
        }

        Ok(Self {
            data,
            rows: self.cols,
            cols: self.rows,
        })
    }
}

impl<T: Scalar + One> Matrix<T> {
    /// Creates a matrix of ones.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::IllegalSize`] if exactly one of `rows`/`cols`
    /// is zero.
    pub fn ones(rows: usize, cols: usize) -> Result<Self> {
        Self::check_size(rows, cols)?;
        Ok(Self {
            data: vec![T::one(); rows * cols],
            rows,
            cols,
        })
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn eye(n: usize) -> Self {
        let mut data = vec![T::zero(); n * n];
        for i in 0..n {
            data[i * n + i] = T::one();
        }
        Self {
            data,
            rows: n,
            cols: n,
        }
    }
}

impl<T: Scalar> Default for Matrix<T> {
    /// A 1x1 matrix holding zero.
    fn default() -> Self {
        Self {
            data: vec![T::zero()],
            rows: 1,
            cols: 1,
        }
    }
}

impl<T: Scalar> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[self.flat(row, col)]
    }
}

impl<T: Scalar> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        let cell = self.flat(row, col);
        &mut self.data[cell]
    }
}

impl<'a, T: Scalar> IntoIterator for &'a Matrix<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Scalar> Add for &Matrix<T> {
    type Output = Matrix<T>;

    /// # Panics
    ///
    /// Panics if the shapes differ; [`Matrix::add`] is the checked form.
    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        Matrix::add(self, rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<T: Scalar> Add for Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: Matrix<T>) -> Matrix<T> {
        &self + &rhs
    }
}

impl<T: Scalar> Sub for &Matrix<T> {
    type Output = Matrix<T>;

    /// # Panics
    ///
    /// Panics if the shapes differ; [`Matrix::sub`] is the checked form.
    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        Matrix::sub(self, rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<T: Scalar> Sub for Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: Matrix<T>) -> Matrix<T> {
        &self - &rhs
    }
}

impl<T: Scalar> Mul for &Matrix<T> {
    type Output = Matrix<T>;

    /// # Panics
    ///
    /// Panics if the inner dimensions differ; [`Matrix::matmul`] is the
    /// checked form.
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        Matrix::matmul(self, rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<T: Scalar> Mul for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: Matrix<T>) -> Matrix<T> {
        &self * &rhs
    }
}

impl<T: Scalar> fmt::Display for Matrix<T> {
    /// One line per row, cells tab-separated, no trailing tab.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for j in 0..self.cols {
                if j > 0 {
                    f.write_str("\t")?;
                }
                write!(f, "{}", self.get(i, j))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_matrix_contract.rs"]
mod tests_contract;
