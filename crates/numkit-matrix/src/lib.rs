//! Dense 2-D matrices and linear-algebra operations
//!
//! [`Matrix`] stores its entries row-major in one flat buffer beside
//! explicit dimensions, so the uniform-row-length invariant holds by
//! construction and never needs re-validation. Operations cover
//! construction (`zeros`, `identity`, `from_rows`, `from_vec`),
//! element-wise addition, the standard triple-loop product, transposition,
//! and the 2x2 determinant.
//!
//! Shape incompatibilities fail with
//! [`numkit_core::Error::DimensionMismatch`]; nothing panics on a shape
//! that merely disagrees.
//!
//! # Example
//!
//! ```rust
//! use numkit_matrix::Matrix;
//!
//! let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
//! let i = Matrix::identity(2);
//! assert_eq!(a.multiply(&i).unwrap(), a);
//! assert_eq!(a.transpose().transpose(), a);
//! assert_eq!(a.determinant2x2().unwrap(), -2);
//! ```

pub mod dense;
mod ops;

pub use dense::Matrix;
