//! Error types for the numeric kernels
//!
//! Provides a unified error type for all numkit crates. Every fallible
//! kernel operation fails immediately and synchronously with one of these
//! kinds; there are no partial results.

use thiserror::Error;

/// Error type shared by all numeric kernel operations
#[derive(Error, Debug)]
pub enum Error {
    /// Input outside a function's mathematically valid domain
    #[error("Domain error: {0}")]
    Domain(String),

    /// Operands with incompatible shapes
    #[error("Dimension mismatch in {context}: expected {expected}, got {found}")]
    DimensionMismatch {
        context: String,
        expected: String,
        found: String,
    },

    /// Division by a zero operand where the result is undefined
    #[error("Division by zero in {0}")]
    ZeroDivision(String),

    /// Result does not fit the fixed-width result type
    #[error("Arithmetic overflow in {0}")]
    Overflow(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper constructors for common error patterns

impl Error {
    /// Create a domain error
    pub fn domain(context: impl Into<String>) -> Self {
        Self::Domain(context.into())
    }

    /// Create a dimension mismatch error from free-form descriptions
    pub fn dimension_mismatch(
        context: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::DimensionMismatch {
            context: context.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create a dimension mismatch error from two `(rows, cols)` shapes
    pub fn shape_mismatch(context: &str, expected: (usize, usize), found: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            context: context.to_string(),
            expected: format!("{}x{}", expected.0, expected.1),
            found: format!("{}x{}", found.0, found.1),
        }
    }

    /// Create a division-by-zero error
    pub fn zero_division(context: impl Into<String>) -> Self {
        Self::ZeroDivision(context.into())
    }

    /// Create an overflow error
    pub fn overflow(context: impl Into<String>) -> Self {
        Self::Overflow(context.into())
    }
}
