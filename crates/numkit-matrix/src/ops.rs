//! Element-wise and linear-algebra operations

use crate::dense::Matrix;
use num_traits::Num;
use numkit_core::{Error, Result};

impl<T: Copy> Matrix<T> {
    /// Transpose: `result[j][i] = self[i][j]`, shape `cols x rows`
    ///
    /// Total for every shape. The stored column count makes the transpose of
    /// a zero-row matrix well-defined: a `0 x n` matrix becomes `n x 0` and
    /// transposes back unchanged.
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.cols {
            for i in 0..self.rows {
                data.push(self.data[i * self.cols + j]);
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }
}

impl<T: Num + Copy> Matrix<T> {
    /// Element-wise sum of two matrices of identical shape
    ///
    /// Fails with [`Error::DimensionMismatch`] unless both row and column
    /// counts agree. Rectangularity itself is a construction invariant and
    /// is not re-checked per row.
    pub fn add(&self, other: &Self) -> Result<Self> {
        if self.shape() != other.shape() {
            return Err(Error::shape_mismatch("add", self.shape(), other.shape()));
        }
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| a + b)
            .collect();
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    /// Matrix product by the standard triple-nested-loop definition
    ///
    /// `result[i][j] = sum over k of self[i][k] * other[k][j]`; the result
    /// is `self.rows x other.cols`. Fails with [`Error::DimensionMismatch`]
    /// unless `self.cols` equals `other.rows`. A zero-length inner dimension
    /// legally yields an all-zero result (the empty sum).
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(Error::dimension_mismatch(
                "multiply",
                format!("{} rows", self.cols),
                format!("{} rows", other.rows),
            ));
        }
        let mut data = Vec::with_capacity(self.rows * other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut acc = T::zero();
                for k in 0..self.cols {
                    acc = acc + self.data[i * self.cols + k] * other.data[k * other.cols + j];
                }
                data.push(acc);
            }
        }
        Ok(Self {
            rows: self.rows,
            cols: other.cols,
            data,
        })
    }

    /// 2x2 determinant, `m00 * m11 - m01 * m10`
    ///
    /// Fails with [`Error::DimensionMismatch`] unless the shape is exactly
    /// 2x2. No general determinant is provided.
    pub fn determinant2x2(&self) -> Result<T> {
        if self.shape() != (2, 2) {
            return Err(Error::shape_mismatch(
                "determinant2x2",
                (2, 2),
                self.shape(),
            ));
        }
        Ok(self.data[0] * self.data[3] - self.data[1] * self.data[2])
    }
}
