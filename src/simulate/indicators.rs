//! Indicator Computer
//!
//! TigerStyle: Per-column annotations for the addition and subtraction
//! grids. Columns run left to right over `max_digits + 1` positions; the
//! extra leftmost column catches the final carry.

use serde::{Deserialize, Serialize};

use crate::config::Operator;
use crate::constants::DIGIT_BASE;
use crate::digits::{digit_count, digits_of};

/// Column annotations for a worked addition or subtraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indicators {
    /// Carry (addition) or borrow (subtraction) flowing into each column
    pub indicators: Vec<u32>,
    /// Whether the column borrows from its left neighbour
    pub borrow_out: Vec<bool>,
    /// Rewritten minuend digit for columns that were borrowed from
    pub borrow_display: Vec<Option<u32>>,
}

impl Indicators {
    fn empty(columns: usize) -> Self {
        Self {
            indicators: vec![0; columns],
            borrow_out: vec![false; columns],
            borrow_display: vec![None; columns],
        }
    }
}

/// Compute the carry or borrow annotations for `operands`.
///
/// Multiplication and division have no column indicators; they get an
/// all-empty record of the same shape.
///
/// # Panics
/// Panics if an operand is wider than `max_digits + 1` columns, or if a
/// subtraction problem has no operands.
#[must_use]
pub fn compute_indicators(operands: &[u32], max_digits: u32, operator: Operator) -> Indicators {
    let columns = max_digits as usize + 1;

    // Precondition
    for value in operands {
        assert!(
            digit_count(*value) as usize <= columns,
            "operand {} wider than {} columns",
            value,
            columns
        );
    }

    let grid: Vec<Vec<Option<u32>>> = operands.iter().map(|v| pad_left(*v, columns)).collect();

    match operator {
        Operator::Add => carry_indicators(&grid, columns),
        Operator::Sub => {
            assert!(!grid.is_empty(), "subtraction needs a minuend");
            borrow_indicators(&grid, columns)
        }
        Operator::Mul | Operator::Div => Indicators::empty(columns),
    }
}

/// Digits right-aligned in `columns` slots, `None` where the operand has no digit.
fn pad_left(value: u32, columns: usize) -> Vec<Option<u32>> {
    let digits = digits_of(value);
    let mut row = vec![None; columns - digits.len()];
    row.extend(digits.into_iter().map(Some));
    row
}

fn column_sum(rows: &[Vec<Option<u32>>], col: usize) -> u32 {
    rows.iter().filter_map(|row| row[col]).sum()
}

fn carry_indicators(grid: &[Vec<Option<u32>>], columns: usize) -> Indicators {
    let mut result = Indicators::empty(columns);
    let mut carry = 0;

    for col in (0..columns).rev() {
        result.indicators[col] = carry;
        carry = (column_sum(grid, col) + carry) / DIGIT_BASE;
    }

    result
}

fn borrow_indicators(grid: &[Vec<Option<u32>>], columns: usize) -> Indicators {
    let mut result = Indicators::empty(columns);
    let (minuend, subtrahends) = (&grid[0], &grid[1..]);
    let mut borrow = 0;

    for col in (0..columns).rev() {
        let digit = minuend[col].unwrap_or(0);
        let owed = column_sum(subtrahends, col) + borrow;
        let next_borrow = owed.saturating_sub(digit).div_ceil(DIGIT_BASE);

        result.indicators[col] = borrow;
        result.borrow_out[col] = next_borrow > 0;
        if borrow > 0 {
            result.borrow_display[col] = Some(digit + next_borrow * DIGIT_BASE - borrow);
        }

        borrow = next_borrow;
    }

    result
}
