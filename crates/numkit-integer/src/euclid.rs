//! Euclidean gcd and lcm

use numkit_core::{Error, Result};

/// Greatest common divisor by the iterative Euclidean algorithm
///
/// Operands enter as absolute values, so the result is non-negative for
/// every input — including `i64::MIN`, whose magnitude `unsigned_abs`
/// represents exactly — and the sign behavior of `%` never enters.
/// `gcd(a, 0)` is `|a|`, and `gcd(0, 0)` is 0.
pub fn gcd(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Least common multiple, `|a * b| / gcd(a, b)`
///
/// Computed as `(|a| / g) * |b|` so the division happens before the product.
/// Fails with [`Error::ZeroDivision`] when both operands are zero (the gcd
/// is 0) and with [`Error::Overflow`] when the result does not fit `u64`.
/// `lcm(0, b)` is 0 for non-zero `b`.
pub fn lcm(a: i64, b: i64) -> Result<u64> {
    let g = gcd(a, b);
    if g == 0 {
        return Err(Error::zero_division("lcm(0, 0)"));
    }
    (a.unsigned_abs() / g)
        .checked_mul(b.unsigned_abs())
        .ok_or_else(|| Error::overflow(format!("lcm({a}, {b})")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd_basic() {
        assert_eq!(gcd(48, 18), 6);
        assert_eq!(gcd(18, 48), 6);
        assert_eq!(gcd(7, 13), 1);
        assert_eq!(gcd(12, 12), 12);
    }

    #[test]
    fn test_gcd_with_zero() {
        assert_eq!(gcd(5, 0), 5);
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(gcd(0, 0), 0);
    }

    #[test]
    fn test_gcd_negative_operands_give_non_negative_result() {
        assert_eq!(gcd(-48, 18), 6);
        assert_eq!(gcd(48, -18), 6);
        assert_eq!(gcd(-48, -18), 6);
        assert_eq!(gcd(i64::MIN, 0), 1u64 << 63);
    }

    #[test]
    fn test_lcm_basic() {
        assert_eq!(lcm(4, 6).unwrap(), 12);
        assert_eq!(lcm(21, 6).unwrap(), 42);
        assert_eq!(lcm(-4, 6).unwrap(), 12);
    }

    #[test]
    fn test_lcm_zero_operand() {
        assert_eq!(lcm(0, 7).unwrap(), 0);
        assert_eq!(lcm(7, 0).unwrap(), 0);
    }

    #[test]
    fn test_lcm_both_zero_fails() {
        assert!(matches!(lcm(0, 0), Err(Error::ZeroDivision(_))));
    }

    #[test]
    fn test_lcm_overflow_fails() {
        // Two large coprime operands whose product exceeds u64.
        let err = lcm(i64::MAX, i64::MAX - 1).unwrap_err();
        assert!(matches!(err, Error::Overflow(_)));
    }
}
