//! Division Operand Generators
//!
//! TigerStyle: Exact, remainder and decimal division pairs.
//!
//! Decimal pairs are screened against the long-division layout budget
//! before they are accepted: the divisor, the bracket, the dividend and
//! every decimal place must fit in [`DIV_GRID_COLUMNS_MAX`] columns, and
//! all steps in [`DIV_QUOTIENT_ROWS_MAX`] quotient rows.

use serde::{Deserialize, Serialize};

use crate::config::DivConfig;
use crate::constants::{
    DIVISOR_VALUE_MIN, DIV_GRID_COLUMNS_MAX, DIV_QUOTIENT_ROWS_MAX, GENERATION_ATTEMPTS_MAX,
};
use crate::digits::{digit_count, rand_with_digits, width_bounds};
use crate::rng::DeterministicRng;
use crate::simulate::{compute_div_details, division_cycle_length, division_terminates};

// =============================================================================
// Types
// =============================================================================

/// Decimal extension accepted for one division problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DivExtra {
    /// Decimal places to carry the division to
    pub extra_digits: u32,
    /// Decimal places before the repeating block
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle_start: Option<u32>,
    /// Length of the repeating block
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle_length: Option<u32>,
}

/// A decimal division pair and how far to extend it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivisionProblem {
    /// Dividend
    pub dividend: u32,
    /// Divisor
    pub divisor: u32,
    /// Decimal extension
    pub extra: DivExtra,
}

// =============================================================================
// Generators
// =============================================================================

/// A dividend that the divisor divides exactly.
///
/// Draws the divisor, then a quotient that lands the product inside the
/// dividend width range. Falls back to `(divisor * 2, divisor)`.
pub fn generate_exact_division(rng: &mut DeterministicRng, config: &DivConfig) -> [u32; 2] {
    let (dividend_lo, _) = width_bounds(config.min_digits);
    let (_, dividend_hi) = width_bounds(config.max_digits);

    for _ in 0..GENERATION_ATTEMPTS_MAX {
        let divisor = draw_divisor(rng, config);
        let quotient_lo = dividend_lo.div_ceil(divisor).max(1);
        let quotient_hi = dividend_hi / divisor;
        if quotient_lo > quotient_hi {
            continue;
        }

        let quotient = rng.rand_int(quotient_lo, quotient_hi);
        return [divisor * quotient, divisor];
    }

    let divisor = smallest_divisor(config);
    tracing::debug!(divisor, "exact division not found, falling back to double");
    [divisor * 2, divisor]
}

/// Independent dividend and divisor with `dividend >= divisor`.
///
/// Falls back to the largest dividend and smallest divisor of the ranges.
pub fn generate_remainder_division(rng: &mut DeterministicRng, config: &DivConfig) -> [u32; 2] {
    for _ in 0..GENERATION_ATTEMPTS_MAX {
        let width = rng.rand_int(config.min_digits, config.max_digits);
        let dividend = rand_with_digits(rng, width);
        let divisor = draw_divisor(rng, config);
        if dividend >= divisor {
            return [dividend, divisor];
        }
    }

    let (_, dividend) = width_bounds(config.max_digits);
    let divisor = smallest_divisor(config);
    tracing::debug!(dividend, divisor, "remainder division not found, using range bounds");
    [dividend, divisor]
}

/// A division whose decimal expansion fits the layout budget.
///
/// Terminating expansions are preferred; with `allow_repeating`, a
/// repeating expansion whose first period fits is also accepted. Falls
/// back to an exact pair with no extension.
pub fn generate_decimal_division(rng: &mut DeterministicRng, config: &DivConfig) -> DivisionProblem {
    for attempt in 0..GENERATION_ATTEMPTS_MAX {
        let [dividend, divisor] = generate_remainder_division(rng, config);
        if dividend % divisor == 0 {
            continue;
        }

        let Some(budget) = extra_budget(dividend, divisor) else {
            continue;
        };

        let termination = division_terminates(dividend, divisor, budget);
        if termination.terminates {
            tracing::trace!(attempt, dividend, divisor, "terminating decimal accepted");
            return DivisionProblem {
                dividend,
                divisor,
                extra: DivExtra {
                    extra_digits: termination.steps_needed,
                    ..DivExtra::default()
                },
            };
        }

        if !config.allow_repeating {
            continue;
        }
        if let Some(cycle) = division_cycle_length(dividend, divisor, budget) {
            tracing::trace!(attempt, dividend, divisor, ?cycle, "repeating decimal accepted");
            return DivisionProblem {
                dividend,
                divisor,
                extra: DivExtra {
                    extra_digits: cycle.start + cycle.length,
                    cycle_start: Some(cycle.start),
                    cycle_length: Some(cycle.length),
                },
            };
        }
    }

    tracing::debug!("decimal division not found, falling back to exact division");
    let [dividend, divisor] = generate_exact_division(rng, config);
    DivisionProblem {
        dividend,
        divisor,
        extra: DivExtra::default(),
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Decimal places that still fit the layout, or `None` if the integer part alone overflows it.
fn extra_budget(dividend: u32, divisor: u32) -> Option<u32> {
    let columns = division_layout_columns(dividend, divisor, 0);
    let integer_rows = compute_div_details(dividend, divisor, 0).steps.len();
    if columns > DIV_GRID_COLUMNS_MAX || integer_rows > DIV_QUOTIENT_ROWS_MAX {
        return None;
    }

    let spare_rows = u32::try_from(DIV_QUOTIENT_ROWS_MAX - integer_rows).unwrap_or(0);
    Some((DIV_GRID_COLUMNS_MAX - columns).min(spare_rows))
}

fn draw_divisor(rng: &mut DeterministicRng, config: &DivConfig) -> u32 {
    let width = rng.rand_int(config.div_min_digits, config.div_max_digits);
    let (lo, hi) = width_bounds(width);
    rng.rand_int(lo.max(DIVISOR_VALUE_MIN), hi)
}

fn smallest_divisor(config: &DivConfig) -> u32 {
    width_bounds(config.div_min_digits).0.max(DIVISOR_VALUE_MIN)
}

/// Total grid columns a long division occupies, extension included.
#[must_use]
pub fn division_layout_columns(dividend: u32, divisor: u32, extra_digits: u32) -> u32 {
    digit_count(divisor) + 1 + digit_count(dividend) + extra_digits
}

// =============================================================================
// Tests
// =============================================================================
