//! Integer helpers shared by normalization and ordering.
//!
//! Both work on magnitudes in `u128` so that the `i64 × i64` cross products
//! computed by the arithmetic operations can be reduced without overflow.

/// Greatest common divisor of two non-negative integers.
///
/// `gcd(0, b)` is `b`. Each remainder step stands for the run of
/// subtractions `a -= b` that the classic Euclidean method would perform.
pub(crate) fn gcd(mut a: u128, mut b: u128) -> u128 {
    if a == 0 {
        return b;
    }
    while b != 0 {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}

/// Least common denominator: `a * b / gcd(a, b)`.
///
/// Only called with positive denominators.
pub(crate) fn lcd(a: u128, b: u128) -> u128 {
    a / gcd(a, b) * b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(4, 12), 4);
        assert_eq!(gcd(5, 20), 5);
        assert_eq!(gcd(100, 2), 2);
        assert_eq!(gcd(3, 5), 1);
    }

    #[test]
    fn test_gcd_with_zero() {
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(0, 1), 1);
        assert_eq!(gcd(9, 0), 9);
    }

    #[test]
    fn test_gcd_large_quotient() {
        // A pure subtraction loop would need 10^18 iterations here
        assert_eq!(gcd(1_000_000_000_000_000_000, 1), 1);
        assert_eq!(gcd(1 << 100, 1 << 64), 1 << 64);
    }

    #[test]
    fn test_lcd() {
        assert_eq!(lcd(2, 5), 10);
        assert_eq!(lcd(4, 83), 332);
        assert_eq!(lcd(19, 24), 456);
        assert_eq!(lcd(6, 4), 12);
    }
}
