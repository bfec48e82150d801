//! Digit Constraint Generators
//!
//! TigerStyle: Draw fixed-length digit sequences whose sum meets a bound,
//! which is how a generator forces a carry or borrow at a chosen column.

use crate::constants::{DIGIT_BASE, DIGIT_VALUE_MAX, OPERAND_DIGITS_MAX};
use crate::rng::DeterministicRng;

// =============================================================================
// Constrained Sequences
// =============================================================================

/// Draw `n` digits whose sum is at least `min_sum`.
///
/// Each position keeps the remaining slots able to cover what is still
/// needed. A `min_sum` above `9 * n` is clamped, yielding all nines.
pub fn digits_with_min_sum(rng: &mut DeterministicRng, n: usize, min_sum: u32) -> Vec<u32> {
    let mut need = min_sum.min(sum_capacity(n));
    let mut digits = Vec::with_capacity(n);

    for i in 0..n {
        let left = sum_capacity(n - i - 1);
        let lo = need.saturating_sub(left);
        let digit = rng.rand_int(lo, DIGIT_VALUE_MAX);
        need = need.saturating_sub(digit);
        digits.push(digit);
    }

    // Postcondition
    debug_assert!(digits.iter().sum::<u32>() >= min_sum.min(sum_capacity(n)));

    digits
}

/// Draw `n` digits whose sum is exactly `exact_sum`.
///
/// A sum above `9 * n` is clamped, yielding all nines.
pub fn digits_with_exact_sum(rng: &mut DeterministicRng, n: usize, exact_sum: u32) -> Vec<u32> {
    let target = exact_sum.min(sum_capacity(n));
    let mut remaining = target;
    let mut digits = Vec::with_capacity(n);

    for i in 0..n {
        let left = sum_capacity(n - i - 1);
        let lo = remaining.saturating_sub(left);
        let hi = remaining.min(DIGIT_VALUE_MAX);
        let digit = rng.rand_int(lo, hi);
        remaining -= digit;
        digits.push(digit);
    }

    // Postcondition
    assert_eq!(remaining, 0, "exact-sum digits left {} undistributed", remaining);

    digits
}

/// Draw `n` unconstrained digits.
pub fn free_digits(rng: &mut DeterministicRng, n: usize) -> Vec<u32> {
    (0..n).map(|_| rng.rand_int(0, DIGIT_VALUE_MAX)).collect()
}

fn sum_capacity(slots: usize) -> u32 {
    u32::try_from(slots).map_or(u32::MAX, |n| n.saturating_mul(DIGIT_VALUE_MAX))
}

// =============================================================================
// Digit Helpers
// =============================================================================

/// Decimal digit count; zero has one digit.
#[must_use]
pub fn digit_count(mut n: u32) -> u32 {
    let mut count = 1;
    while n >= DIGIT_BASE {
        n /= DIGIT_BASE;
        count += 1;
    }
    count
}

/// Decimal digits, most significant first.
#[must_use]
pub fn digits_of(n: u32) -> Vec<u32> {
    let mut digits = Vec::with_capacity(digit_count(n) as usize);
    let mut rest = n;
    loop {
        digits.push(rest % DIGIT_BASE);
        rest /= DIGIT_BASE;
        if rest == 0 {
            break;
        }
    }
    digits.reverse();
    digits
}

/// `10^exp`.
#[must_use]
pub fn pow10(exp: u32) -> u32 {
    DIGIT_BASE.pow(exp)
}

/// Smallest and largest value with exactly `digits` digits.
///
/// # Panics
/// Panics if `digits` is zero or wider than the operand limit.
#[must_use]
pub fn width_bounds(digits: u32) -> (u32, u32) {
    // Precondition
    assert!(
        (1..=OPERAND_DIGITS_MAX + 1).contains(&digits),
        "width {} outside [1, {}]",
        digits,
        OPERAND_DIGITS_MAX + 1
    );

    (pow10(digits - 1), pow10(digits) - 1)
}

/// Uniform value with exactly `digits` digits.
pub fn rand_with_digits(rng: &mut DeterministicRng, digits: u32) -> u32 {
    let (lo, hi) = width_bounds(digits);
    rng.rand_int(lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_sum_respected() {
        let mut rng = DeterministicRng::new(11);

        for n in 1..=4 {
            for min_sum in 0..=(9 * n as u32) {
                let digits = digits_with_min_sum(&mut rng, n, min_sum);
                assert_eq!(digits.len(), n);
                assert!(digits.iter().all(|d| *d <= 9));
                assert!(digits.iter().sum::<u32>() >= min_sum);
            }
        }
    }

    #[test]
    fn test_exact_sum_respected() {
        let mut rng = DeterministicRng::new(12);

        for n in 1..=4 {
            for exact in 0..=(9 * n as u32) {
                let digits = digits_with_exact_sum(&mut rng, n, exact);
                assert_eq!(digits.len(), n);
                assert!(digits.iter().all(|d| *d <= 9));
                assert_eq!(digits.iter().sum::<u32>(), exact);
            }
        }
    }

    #[test]
    fn test_infeasible_sum_clamps_to_nines() {
        let mut rng = DeterministicRng::new(13);

        assert_eq!(digits_with_min_sum(&mut rng, 1, 10), vec![9]);
        assert_eq!(digits_with_exact_sum(&mut rng, 2, 30), vec![9, 9]);
    }

    #[test]
    fn test_zero_length() {
        let mut rng = DeterministicRng::new(14);

        assert!(digits_with_min_sum(&mut rng, 0, 1).is_empty());
        assert!(digits_with_exact_sum(&mut rng, 0, 0).is_empty());
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(9_999), 4);
        assert_eq!(digit_count(10_000), 5);
    }

    #[test]
    fn test_digits_of() {
        assert_eq!(digits_of(0), vec![0]);
        assert_eq!(digits_of(7), vec![7]);
        assert_eq!(digits_of(4_056), vec![4, 0, 5, 6]);
    }

    #[test]
    fn test_width_bounds() {
        assert_eq!(width_bounds(1), (1, 9));
        assert_eq!(width_bounds(3), (100, 999));
    }

    #[test]
    #[should_panic(expected = "width 0")]
    fn test_width_bounds_zero() {
        let _ = width_bounds(0);
    }

    #[test]
    fn test_rand_with_digits() {
        let mut rng = DeterministicRng::new(15);

        for digits in 1..=4 {
            for _ in 0..50 {
                assert_eq!(digit_count(rand_with_digits(&mut rng, digits)), digits);
            }
        }
    }
}
