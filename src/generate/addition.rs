//! Addition Operand Generators
//!
//! TigerStyle: Carry chains are built column by column from the ones place,
//! then verified against the intended widths. Bounded retries, total fallback.

use crate::constants::{CHAIN_COLUMNS_MIN, DIGIT_BASE, GENERATION_ATTEMPTS_MAX};
use crate::digits::{
    digit_count, digits_with_exact_sum, digits_with_min_sum, free_digits, pow10, rand_with_digits,
};
use crate::rng::DeterministicRng;

/// Independent random addends, each with its own width in `[min_digits, max_digits]`.
pub fn generate_addition(
    rng: &mut DeterministicRng,
    min_digits: u32,
    max_digits: u32,
    count: usize,
) -> Vec<u32> {
    (0..count)
        .map(|_| {
            let width = rng.rand_int(min_digits, max_digits);
            rand_with_digits(rng, width)
        })
        .collect()
}

/// Addends whose sum carries out of every column of a chain starting at the ones place.
///
/// The chain covers `[min(2, width), width]` columns, where `width` is the
/// widest addend drawn. Falls back to [`generate_addition`] when no attempt
/// keeps every addend at its drawn width.
pub fn generate_carry_chain_addition(
    rng: &mut DeterministicRng,
    min_digits: u32,
    max_digits: u32,
    count: usize,
) -> Vec<u32> {
    // Preconditions
    assert!(count >= 2, "carry chain needs at least two addends, got {}", count);
    assert!(min_digits <= max_digits, "min_digits {} > max_digits {}", min_digits, max_digits);

    for attempt in 0..GENERATION_ATTEMPTS_MAX {
        let widths: Vec<u32> = (0..count)
            .map(|_| rng.rand_int(min_digits, max_digits))
            .collect();
        let width = widths.iter().copied().max().unwrap_or(min_digits);
        let chain_len = rng.rand_int(CHAIN_COLUMNS_MIN.min(width), width);

        let operands = build_carry_columns(rng, &widths, chain_len);

        let widths_match = operands
            .iter()
            .zip(&widths)
            .all(|(value, w)| digit_count(*value) == *w);
        if widths_match {
            tracing::trace!(attempt, chain_len, ?operands, "carry chain accepted");
            return operands;
        }
    }

    tracing::debug!(
        min_digits,
        max_digits,
        count,
        "carry chain not found, falling back to plain addition"
    );
    generate_addition(rng, min_digits, max_digits, count)
}

/// Fill columns ones-first. Chain columns force a carry-out; the rest are free.
fn build_carry_columns(rng: &mut DeterministicRng, widths: &[u32], chain_len: u32) -> Vec<u32> {
    let width = widths.iter().copied().max().unwrap_or(0);
    let mut operands = vec![0u32; widths.len()];
    let mut carry = 0u32;

    for col in 0..width {
        let active: Vec<usize> = (0..widths.len()).filter(|i| widths[*i] > col).collect();
        let n = active.len();

        let digits = if col >= chain_len {
            free_digits(rng, n)
        } else if col == 0 {
            digits_with_min_sum(rng, n, DIGIT_BASE)
        } else if col + 1 < chain_len {
            // Total of exactly ten: carry-out of exactly one.
            digits_with_exact_sum(rng, n, DIGIT_BASE.saturating_sub(carry))
        } else {
            digits_with_min_sum(rng, n, DIGIT_BASE.saturating_sub(carry))
        };

        let place = pow10(col);
        for (slot, digit) in active.iter().zip(&digits) {
            operands[*slot] += digit * place;
        }

        let total: u32 = digits.iter().sum::<u32>() + carry;
        carry = total / DIGIT_BASE;
    }

    operands
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Columns, ones-first, that produce a carry-out before the first that does not.
    fn leading_carry_run(operands: &[u32]) -> u32 {
        let width = operands.iter().map(|v| digit_count(*v)).max().unwrap_or(0);
        let mut carry = 0;
        let mut run = 0;

        for col in 0..width {
            let place = pow10(col);
            let total: u32 = operands.iter().map(|v| (v / place) % 10).sum::<u32>() + carry;
            carry = total / 10;
            if carry == 0 {
                break;
            }
            run += 1;
        }
        run
    }

    #[test]
    fn test_plain_addition_widths() {
        let mut rng = DeterministicRng::new(1);

        for _ in 0..200 {
            let operands = generate_addition(&mut rng, 1, 3, 3);
            assert_eq!(operands.len(), 3);
            for value in operands {
                assert!((1..=3).contains(&digit_count(value)));
            }
        }
    }

    #[test]
    fn test_carry_chain_two_digit_pair() {
        for seed in 0..200 {
            let mut rng = DeterministicRng::new(seed);
            let operands = generate_carry_chain_addition(&mut rng, 2, 2, 2);

            assert!(operands.iter().all(|v| digit_count(*v) == 2));
            assert!(
                leading_carry_run(&operands) >= 2,
                "seed {} produced {:?}",
                seed,
                operands
            );
        }
    }

    #[test]
    fn test_carry_chain_seed_one() {
        let mut rng = DeterministicRng::new(1);
        let operands = generate_carry_chain_addition(&mut rng, 2, 2, 2);
        assert!(leading_carry_run(&operands) >= 2);
    }

    #[test]
    fn test_carry_chain_many_addends() {
        for seed in 0..100 {
            let mut rng = DeterministicRng::new(seed);
            let operands = generate_carry_chain_addition(&mut rng, 3, 4, 4);

            assert_eq!(operands.len(), 4);
            assert!(operands.iter().all(|v| (3..=4).contains(&digit_count(*v))));
            assert!(leading_carry_run(&operands) >= 1);
        }
    }

    #[test]
    fn test_carry_chain_single_digit() {
        for seed in 0..100 {
            let mut rng = DeterministicRng::new(seed);
            let operands = generate_carry_chain_addition(&mut rng, 1, 1, 2);

            assert!(operands.iter().all(|v| digit_count(*v) == 1));
            assert!(operands.iter().sum::<u32>() >= 10);
        }
    }

    #[test]
    #[should_panic(expected = "at least two addends")]
    fn test_carry_chain_rejects_single_addend() {
        let mut rng = DeterministicRng::new(0);
        let _ = generate_carry_chain_addition(&mut rng, 2, 2, 1);
    }
}
