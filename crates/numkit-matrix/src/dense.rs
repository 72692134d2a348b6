//! Dense row-major matrix storage

use num_traits::{One, Zero};
use numkit_core::{Error, Result};
use std::ops::Index;

/// Dense matrix with row-major storage and explicit dimensions
///
/// Every row has the same length by construction: the constructors fix
/// `rows * cols` up front and validate their input against it, so a ragged
/// matrix is unrepresentable afterwards. Zero is a valid dimension; a
/// zero-row or zero-column matrix keeps both dimensions, which keeps
/// operations like [`Matrix::transpose`] total.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) data: Vec<T>,
}

impl<T> Matrix<T> {
    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether the row and column counts agree
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Entry at `(row, col)`, or `None` when either index is out of range
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Row `row` as a slice
    ///
    /// Panics when `row >= rows`, matching slice indexing.
    pub fn row(&self, row: usize) -> &[T] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }
}

impl<T: Zero + Copy> Matrix<T> {
    /// All-zero matrix of the given shape
    ///
    /// Zero is a valid dimension and produces an empty buffer.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }
}

impl<T: Zero + One + Copy> Matrix<T> {
    /// Square zero matrix with a unit diagonal
    pub fn identity(size: usize) -> Self {
        let mut m = Self::zeros(size, size);
        for i in 0..size {
            m.data[i * size + i] = T::one();
        }
        m
    }
}

impl<T: Copy> Matrix<T> {
    /// Builds a matrix from nested rows, validating rectangularity
    ///
    /// Every row's length is checked against the first row's; a ragged input
    /// fails with [`Error::DimensionMismatch`]. Zero rows produce the 0x0
    /// matrix.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(Error::dimension_mismatch(
                    format!("from_rows row {idx}"),
                    format!("{cols} columns"),
                    format!("{} columns", row.len()),
                ));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Builds a matrix around an existing flat row-major buffer
    ///
    /// Fails with [`Error::DimensionMismatch`] unless `data.len()` equals
    /// `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::dimension_mismatch(
                "from_vec",
                format!("{} elements", rows * cols),
                format!("{} elements", data.len()),
            ));
        }
        Ok(Self { rows, cols, data })
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use numkit_core::Error;

    #[test]
    fn test_zeros_shape_and_entries() {
        let m: Matrix<f64> = Matrix::zeros(2, 3);
        assert_eq!(m.shape(), (2, 3));
        assert!(!m.is_square());
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(m[(i, j)], 0.0);
            }
        }
    }

    #[test]
    fn test_zero_dimensions_are_valid() {
        let m: Matrix<f64> = Matrix::zeros(0, 3);
        assert_eq!(m.shape(), (0, 3));
        let m: Matrix<f64> = Matrix::zeros(3, 0);
        assert_eq!(m.shape(), (3, 0));
        let m: Matrix<f64> = Matrix::zeros(0, 0);
        assert_eq!(m.shape(), (0, 0));
    }

    #[test]
    fn test_identity_diagonal() {
        let m: Matrix<i64> = Matrix::identity(3);
        assert!(m.is_square());
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(m[(i, j)], i64::from(i == j));
            }
        }
    }

    #[test]
    fn test_from_rows_round_trip() {
        let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m[(0, 0)], 1);
        assert_eq!(m[(1, 2)], 6);
        assert_eq!(m.row(1), &[4, 5, 6]);
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        let err = Matrix::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { .. }));
    }

    #[test]
    fn test_from_rows_empty_is_zero_by_zero() {
        let m = Matrix::<f64>::from_rows(vec![]).unwrap();
        assert_eq!(m.shape(), (0, 0));
    }

    #[test]
    fn test_from_vec_validates_length() {
        let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(m[(1, 0)], 3.0);
        let err = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { .. }));
    }

    #[test]
    fn test_get_out_of_range_is_none() {
        let m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(m.get(1, 1), Some(&4));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 2), None);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_out_of_bounds_panics() {
        let m: Matrix<f64> = Matrix::zeros(2, 2);
        let _ = m[(2, 0)];
    }
}
