//! Subtraction Operand Generators
//!
//! TigerStyle: The minuend is always operand 0 and the difference never
//! goes negative. Borrow chains are best effort: a column that cannot be
//! forced degrades in place instead of restarting the attempt.

use crate::constants::{CHAIN_COLUMNS_MIN, DIGIT_BASE, DIGIT_VALUE_MAX, GENERATION_ATTEMPTS_MAX};
use crate::digits::{digit_count, digits_with_min_sum, free_digits, pow10, width_bounds};
use crate::rng::DeterministicRng;

/// Minuend followed by `count - 1` subtrahends whose total never exceeds it.
///
/// Each subtrahend is drawn from a shrinking budget that still leaves room
/// for the smallest legal value of every subtrahend after it.
pub fn generate_subtraction(
    rng: &mut DeterministicRng,
    min_digits: u32,
    max_digits: u32,
    count: usize,
) -> Vec<u32> {
    // Preconditions
    assert!(count >= 2, "subtraction needs a minuend and a subtrahend, got {}", count);
    assert!(min_digits <= max_digits, "min_digits {} > max_digits {}", min_digits, max_digits);

    let (smallest, _) = width_bounds(min_digits);
    let (_, largest) = width_bounds(max_digits);
    let subtrahends = count_u32(count - 1);

    let minuend_floor = smallest.max(smallest * subtrahends);
    let minuend = rng.rand_int(minuend_floor.min(largest), largest);

    let mut operands = Vec::with_capacity(count);
    operands.push(minuend);

    let mut running = minuend;
    for k in 0..subtrahends {
        let still_to_draw = subtrahends - k - 1;
        let budget = running.saturating_sub(smallest * still_to_draw).max(smallest);

        let widest = digit_count(budget).min(max_digits).max(min_digits);
        let width = rng.rand_int(min_digits, widest);
        let (lo, hi) = width_bounds(width);
        let value = rng.rand_int(lo, hi.min(budget).max(lo));

        running = running.saturating_sub(value);
        operands.push(value);
    }

    operands
}

/// Minuend and subtrahends that borrow in every column of a chain starting at the ones place.
///
/// The chain spans `[min(2, w - 1), w - 1]` columns of the minuend width
/// `w`; the top column is left free because a borrow there would make the
/// difference negative. Falls back to [`generate_subtraction`].
pub fn generate_borrow_chain_subtraction(
    rng: &mut DeterministicRng,
    min_digits: u32,
    max_digits: u32,
    count: usize,
) -> Vec<u32> {
    // Preconditions
    assert!(count >= 2, "subtraction needs a minuend and a subtrahend, got {}", count);
    assert!(min_digits <= max_digits, "min_digits {} > max_digits {}", min_digits, max_digits);

    for attempt in 0..GENERATION_ATTEMPTS_MAX {
        let minuend_width = rng.rand_int(min_digits, max_digits);
        let mut widths = vec![minuend_width];
        widths.extend((1..count).map(|_| rng.rand_int(min_digits, minuend_width)));

        let top = minuend_width - 1;
        let chain_len = if top == 0 {
            0
        } else {
            rng.rand_int(CHAIN_COLUMNS_MIN.min(top), top)
        };

        let operands = build_borrow_columns(rng, &widths, chain_len);

        let subtrahend_total: u32 = operands[1..].iter().sum();
        let widths_match = operands
            .iter()
            .zip(&widths)
            .all(|(value, w)| digit_count(*value) == *w);
        if widths_match && operands[0] >= subtrahend_total {
            tracing::trace!(attempt, chain_len, ?operands, "borrow chain accepted");
            return operands;
        }
    }

    tracing::debug!(
        min_digits,
        max_digits,
        count,
        "borrow chain not found, falling back to plain subtraction"
    );
    generate_subtraction(rng, min_digits, max_digits, count)
}

/// Fill columns ones-first. `widths[0]` is the minuend's.
fn build_borrow_columns(rng: &mut DeterministicRng, widths: &[u32], chain_len: u32) -> Vec<u32> {
    let mut operands = vec![0u32; widths.len()];
    let mut borrow = 0u32;

    for col in 0..widths[0] {
        let active: Vec<usize> = (1..widths.len()).filter(|i| widths[*i] > col).collect();
        let n = active.len();

        let (minuend_digit, digits) = if col < chain_len {
            let mut minuend_digit = rng.rand_int(0, DIGIT_VALUE_MAX - 1);
            let mut need = minuend_digit + 1;
            if need < borrow || need - borrow > DIGIT_VALUE_MAX * count_u32(n) {
                minuend_digit = 0;
                need = 1;
            }
            let need = need.saturating_sub(borrow);
            (minuend_digit, digits_with_min_sum(rng, n, need))
        } else {
            (rng.rand_int(0, DIGIT_VALUE_MAX), free_digits(rng, n))
        };

        let place = pow10(col);
        operands[0] += minuend_digit * place;
        for (slot, digit) in active.iter().zip(&digits) {
            operands[*slot] += digit * place;
        }

        let owed = digits.iter().sum::<u32>() + borrow;
        borrow = owed.saturating_sub(minuend_digit).div_ceil(DIGIT_BASE);
    }

    operands
}

fn count_u32(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}
