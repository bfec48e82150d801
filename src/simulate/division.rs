//! Division Detail Computer
//!
//! TigerStyle: Long division exactly as written by hand, one step per
//! quotient digit, optionally extended past the decimal point.
//!
//! # Cycle detection
//!
//! While bringing down zeros, every remainder is remembered together with
//! the index at which it first appeared (the remainder left by the integer
//! part sits at index 0, the remainder after extension step `e` at
//! `e + 1`). The first repeat closes the period. Remainders live in
//! `[0, divisor)`, so a repeat or a zero remainder appears within
//! `divisor` steps.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants::DIGIT_BASE;
use crate::digits::digits_of;

// =============================================================================
// Types
// =============================================================================

/// One step of long division.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivStep {
    /// Column of the digit just brought down (extension steps continue past the dividend)
    pub position: u32,
    /// Partial dividend this step divides
    pub dividend_so_far: u32,
    /// Quotient digit written above the column
    pub quotient_digit: u32,
    /// `divisor * quotient_digit`, written under the partial dividend
    pub product: u32,
    /// `dividend_so_far - product`
    pub remainder: u32,
}

/// A repeating block in a decimal expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivCycle {
    /// Decimal digits before the repeating block
    pub start: u32,
    /// Digits in the repeating block
    pub length: u32,
}

/// Full long-division trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivComputed {
    /// Integer quotient
    pub quotient: u32,
    /// Integer remainder
    pub remainder: u32,
    /// Integer steps followed by extension steps
    pub steps: Vec<DivStep>,
    /// Steps produced past the last dividend digit
    pub extra_step_count: u32,
    /// Repeating block, when one closed inside the extension
    pub cycle: Option<DivCycle>,
}

impl DivComputed {
    /// Quotient digits produced past the decimal point.
    #[must_use]
    pub fn decimal_digits(&self) -> Vec<u32> {
        let integer_steps = self.steps.len() - self.extra_step_count as usize;
        self.steps[integer_steps..]
            .iter()
            .map(|step| step.quotient_digit)
            .collect()
    }

    /// Steps for the integer part only.
    #[must_use]
    pub fn integer_steps(&self) -> &[DivStep] {
        &self.steps[..self.steps.len() - self.extra_step_count as usize]
    }
}

/// Outcome of probing whether a decimal expansion ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Termination {
    /// The expansion reached a zero remainder within the step budget
    pub terminates: bool,
    /// Extension steps taken
    pub steps_needed: u32,
}

// =============================================================================
// Decimal Extension
// =============================================================================

/// Brings down zeros after the integer part, watching for a repeated remainder.
struct Extension {
    divisor: u32,
    current: u32,
    steps: u32,
    first_seen: HashMap<u32, u32>,
    cycle: Option<DivCycle>,
}

impl Extension {
    fn new(remainder: u32, divisor: u32) -> Self {
        let mut first_seen = HashMap::new();
        first_seen.insert(remainder, 0);
        Self {
            divisor,
            current: remainder,
            steps: 0,
            first_seen,
            cycle: None,
        }
    }

    fn is_exact(&self) -> bool {
        self.current == 0
    }

    fn advance(&mut self, position: u32) -> DivStep {
        // Precondition
        assert!(!self.is_exact(), "extension past an exact quotient");

        let step = divide_step(position, self.current * DIGIT_BASE, self.divisor);
        self.current = step.remainder;
        self.steps += 1;

        if self.cycle.is_none() {
            if let Some(&start) = self.first_seen.get(&step.remainder) {
                self.cycle = Some(DivCycle {
                    start,
                    length: self.steps - start,
                });
            } else {
                self.first_seen.insert(step.remainder, self.steps);
            }
        }

        step
    }
}

fn divide_step(position: u32, dividend_so_far: u32, divisor: u32) -> DivStep {
    let quotient_digit = dividend_so_far / divisor;
    let product = divisor * quotient_digit;

    // Postcondition
    debug_assert!(quotient_digit < DIGIT_BASE, "step digit {} overflows", quotient_digit);

    DivStep {
        position,
        dividend_so_far,
        quotient_digit,
        product,
        remainder: dividend_so_far - product,
    }
}

// =============================================================================
// Operations
// =============================================================================

/// Long division of `dividend` by `divisor`, extended by up to `extra_digits`
/// decimal places (stopping early once the remainder is zero).
///
/// # Panics
/// Panics if `divisor` is zero.
#[must_use]
pub fn compute_div_details(dividend: u32, divisor: u32, extra_digits: u32) -> DivComputed {
    // Precondition
    assert!(divisor > 0, "division by zero");

    let digits = digits_of(dividend);
    let mut steps = Vec::with_capacity(digits.len() + extra_digits as usize);
    let mut current = 0u32;
    let mut started = false;

    for (position, digit) in (0u32..).zip(&digits) {
        current = current * DIGIT_BASE + digit;
        if started || current >= divisor {
            started = true;
            let step = divide_step(position, current, divisor);
            current = step.remainder;
            steps.push(step);
        }
    }

    let quotient = dividend / divisor;
    let remainder = current;

    // Postcondition
    assert_eq!(remainder, dividend % divisor, "integer steps lost the remainder");

    let integer_columns = u32::try_from(digits.len()).unwrap_or(u32::MAX);
    let mut extension = Extension::new(remainder, divisor);
    while extension.steps < extra_digits && !extension.is_exact() {
        let position = integer_columns + extension.steps;
        steps.push(extension.advance(position));
    }

    DivComputed {
        quotient,
        remainder,
        steps,
        extra_step_count: extension.steps,
        cycle: extension.cycle,
    }
}

/// Whether `dividend / divisor` ends within `max_extra_steps` decimal places.
///
/// # Panics
/// Panics if `divisor` is zero.
#[must_use]
pub fn division_terminates(dividend: u32, divisor: u32, max_extra_steps: u32) -> Termination {
    // Precondition
    assert!(divisor > 0, "division by zero");

    let mut extension = Extension::new(dividend % divisor, divisor);
    while extension.steps < max_extra_steps && !extension.is_exact() {
        extension.advance(0);
    }

    Termination {
        terminates: extension.is_exact(),
        steps_needed: extension.steps,
    }
}

/// The repeating block of `dividend / divisor`, if it closes within `max_steps`
/// decimal places.
///
/// # Panics
/// Panics if `divisor` is zero.
#[must_use]
pub fn division_cycle_length(dividend: u32, divisor: u32, max_steps: u32) -> Option<DivCycle> {
    // Precondition
    assert!(divisor > 0, "division by zero");

    let mut extension = Extension::new(dividend % divisor, divisor);
    while extension.steps < max_steps && !extension.is_exact() && extension.cycle.is_none() {
        extension.advance(0);
    }

    extension.cycle
}

// =============================================================================
// Tests
// =============================================================================
