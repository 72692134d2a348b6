//! Integer-domain algorithms
//!
//! This crate provides the integer side of the numkit kernels:
//! - Primality testing by trial division on the 6k±1 wheel
//! - Divisor sums and perfect-number testing
//! - Euclidean gcd and lcm with a canonical sign convention
//! - Eagerly materialized sequences (factorial, Fibonacci)
//!
//! All algorithms are iterative, so the call stack never bounds the input,
//! and every fixed-width overflow fails fast with
//! [`numkit_core::Error::Overflow`] instead of wrapping.

pub mod divisors;
pub mod euclid;
pub mod primality;
pub mod sequences;

// Re-exports
pub use divisors::{aliquot_sum, is_perfect};
pub use euclid::{gcd, lcm};
pub use primality::is_prime;
pub use sequences::{factorial, fibonacci_sequence};
