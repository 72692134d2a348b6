//! Eagerly materialized integer sequences

use numkit_core::{Error, Result};

/// Factorial, the product `1 * 2 * ... * n`
///
/// Fails with [`Error::Domain`] for negative `n` and returns 1 for
/// `n` of 0 or 1. The product is computed iteratively, so the call stack
/// never bounds the input; what does bound it is the result width, and the
/// first product that no longer fits `u128` (at `n = 35`) fails with
/// [`Error::Overflow`].
pub fn factorial(n: i64) -> Result<u128> {
    if n < 0 {
        return Err(Error::domain(format!(
            "factorial({n}): argument must be non-negative"
        )));
    }
    let mut product: u128 = 1;
    for k in 2..=n as u128 {
        product = product
            .checked_mul(k)
            .ok_or_else(|| Error::overflow(format!("factorial({n})")))?;
    }
    Ok(product)
}

/// First `n` terms of the Fibonacci sequence 0, 1, 1, 2, 3, ...
///
/// The sequence is finite and eagerly materialized; no state survives the
/// call. `n = 0` yields an empty vector. Fails with [`Error::Overflow`] once
/// a term no longer fits `u64`, which first happens at the 95th term.
pub fn fibonacci_sequence(n: usize) -> Result<Vec<u64>> {
    let mut terms = Vec::with_capacity(n);
    if n == 0 {
        return Ok(terms);
    }
    terms.push(0);
    if n == 1 {
        return Ok(terms);
    }
    terms.push(1);
    for _ in 2..n {
        let next = terms[terms.len() - 1]
            .checked_add(terms[terms.len() - 2])
            .ok_or_else(|| Error::overflow(format!("fibonacci_sequence({n})")))?;
        terms.push(next);
    }
    Ok(terms)
}
