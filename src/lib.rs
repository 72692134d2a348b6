//! Stateless numeric computation kernels
//!
//! This crate re-exports the numkit workspace: a small set of pure,
//! dependency-light numeric routines for application code that needs
//! self-contained primitives without a full numerics stack.
//!
//! | Component | Responsibility |
//! |-----------|----------------|
//! | [`stats`] | Aggregate measures over a sequence of numbers |
//! | [`integer`] | Integer-domain algorithms (primality, gcd/lcm, sequences) |
//! | [`matrix`] | Dense 2-D matrix construction and linear algebra |
//!
//! Every function is synchronous and side-effect-free: each call receives
//! borrowed or owned inputs and produces a freshly owned result. Nothing is
//! cached between calls, so concurrent use from multiple threads needs no
//! locks.
//!
//! # Example
//!
//! ```rust
//! use numkit::{stats, integer, Matrix};
//!
//! let sample = [1.0, 2.0, 2.0, 3.0, 4.0, 4.0, 4.0, 5.0];
//! assert_eq!(stats::median(&sample), 3.5);
//! assert_eq!(stats::mode(&sample), vec![4.0]);
//!
//! assert!(integer::is_prime(97));
//! assert_eq!(integer::gcd(48, 18), 6);
//!
//! let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
//! assert_eq!(m.determinant2x2().unwrap(), -2.0);
//! ```

pub use numkit_core::{Error, Result};
pub use numkit_integer as integer;
pub use numkit_matrix as matrix;
pub use numkit_stats as stats;

pub use numkit_matrix::Matrix;
pub use numkit_stats::MinMax;
