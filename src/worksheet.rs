//! Worksheet Generation
//!
//! TigerStyle: One seed, one RNG stream, one dispatch on the operator.
//!
//! Every problem on a worksheet draws from the same advancing stream, so
//! it is the whole sequence that replays for a seed, not any single call.

use serde::{Deserialize, Serialize};

use crate::config::{AddConfig, DivConfig, MulConfig, Operator, SubConfig, WorksheetConfig};
use crate::constants::{
    DECIMAL_PLACES_MAX, PROBLEMS_COUNT_DECIMAL, PROBLEMS_COUNT_STANDARD, PROBLEMS_COUNT_WIDE,
    SUB_OPERANDS_COUNT,
};
use crate::generate::{
    generate_addition, generate_borrow_chain_subtraction, generate_carry_chain_addition,
    generate_decimal_division, generate_exact_division, generate_multiplication,
    generate_remainder_division, generate_subtraction, DivExtra,
};
use crate::rng::DeterministicRng;
use crate::simulate::{
    compute_div_details, compute_indicators, compute_mul_details, DivComputed, Indicators,
    MulComputed,
};

// =============================================================================
// Types
// =============================================================================

/// Operands of one problem, top to bottom as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Problem {
    /// Addends, minuend then subtrahends, `[multiplicand, multiplier]` or `[dividend, divisor]`
    pub operands: Vec<u32>,
}

impl Problem {
    /// Wrap an operand list.
    #[must_use]
    pub fn new(operands: Vec<u32>) -> Self {
        Self { operands }
    }
}

/// A generated worksheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worksheet {
    /// Seed the worksheet was generated from
    pub seed: u32,
    /// Normalized configuration it was generated with
    pub config: WorksheetConfig,
    /// Problems in order
    pub problems: Vec<Problem>,
    /// Decimal places per operand, per problem (decimal add/sub only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimal_places: Option<Vec<Vec<u32>>>,
    /// Decimal extension per problem (decimal division only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub div_extra: Option<Vec<DivExtra>>,
}

/// Worked solution of one problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Solution {
    /// Carry or borrow columns
    Indicators(Indicators),
    /// Partial products
    Multiplication(MulComputed),
    /// Long-division steps
    Division(DivComputed),
}

// =============================================================================
// Problem-Count Policy
// =============================================================================

/// Problems a worksheet for `config` should hold.
#[must_use]
pub fn problem_count(config: &WorksheetConfig) -> usize {
    match config {
        WorksheetConfig::Add(AddConfig { decimal_mode, .. })
        | WorksheetConfig::Sub(SubConfig { decimal_mode, .. }) => {
            if *decimal_mode {
                PROBLEMS_COUNT_DECIMAL
            } else {
                PROBLEMS_COUNT_STANDARD
            }
        }
        WorksheetConfig::Mul(MulConfig { mul_max_digits, .. }) => {
            if *mul_max_digits <= 1 {
                PROBLEMS_COUNT_STANDARD
            } else {
                PROBLEMS_COUNT_WIDE
            }
        }
        WorksheetConfig::Div(_) => PROBLEMS_COUNT_WIDE,
    }
}

// =============================================================================
// Generation
// =============================================================================

/// Generate the worksheet for `seed` and `config`.
///
/// The configuration is normalized first. Identical arguments always
/// produce identical worksheets.
#[must_use]
pub fn generate_problems(seed: u32, config: &WorksheetConfig) -> Worksheet {
    let config = config.clone().normalize();
    let count = problem_count(&config);
    let mut rng = DeterministicRng::new(seed);

    let mut problems = Vec::with_capacity(count);
    let mut decimal_places = None;
    let mut div_extra = None;

    match &config {
        WorksheetConfig::Add(add) => {
            let mut places = Vec::new();
            for _ in 0..count {
                let operands = add_operands(&mut rng, add);
                if add.decimal_mode {
                    places.push(draw_decimal_places(&mut rng, add.min_digits, operands.len()));
                }
                problems.push(Problem::new(operands));
            }
            decimal_places = add.decimal_mode.then_some(places);
        }
        WorksheetConfig::Sub(sub) => {
            let mut places = Vec::new();
            for _ in 0..count {
                let operands = sub_operands(&mut rng, sub);
                if sub.decimal_mode {
                    places.push(draw_decimal_places(&mut rng, sub.min_digits, operands.len()));
                }
                problems.push(Problem::new(operands));
            }
            decimal_places = sub.decimal_mode.then_some(places);
        }
        WorksheetConfig::Mul(mul) => {
            for _ in 0..count {
                let pair = generate_multiplication(
                    &mut rng,
                    mul.min_digits,
                    mul.max_digits,
                    mul.mul_min_digits,
                    mul.mul_max_digits,
                );
                problems.push(Problem::new(pair.to_vec()));
            }
        }
        WorksheetConfig::Div(div) => {
            let mut extras = Vec::new();
            for _ in 0..count {
                let (pair, extra) = div_operands(&mut rng, div);
                problems.push(Problem::new(pair.to_vec()));
                extras.extend(extra);
            }
            div_extra = div.decimal_mode.then_some(extras);
        }
    }

    tracing::debug!(
        seed,
        operator = %config.operator(),
        count = problems.len(),
        "worksheet generated"
    );

    // Postcondition
    assert_eq!(problems.len(), count, "worksheet must hold exactly {} problems", count);

    Worksheet {
        seed,
        config,
        problems,
        decimal_places,
        div_extra,
    }
}

fn add_operands(rng: &mut DeterministicRng, add: &AddConfig) -> Vec<u32> {
    if add.consecutive_carries {
        generate_carry_chain_addition(rng, add.min_digits, add.max_digits, add.num_operands)
    } else {
        generate_addition(rng, add.min_digits, add.max_digits, add.num_operands)
    }
}

fn sub_operands(rng: &mut DeterministicRng, sub: &SubConfig) -> Vec<u32> {
    if sub.consecutive_borrows {
        generate_borrow_chain_subtraction(rng, sub.min_digits, sub.max_digits, SUB_OPERANDS_COUNT)
    } else {
        generate_subtraction(rng, sub.min_digits, sub.max_digits, SUB_OPERANDS_COUNT)
    }
}

fn div_operands(rng: &mut DeterministicRng, div: &DivConfig) -> ([u32; 2], Option<DivExtra>) {
    if div.decimal_mode {
        let problem = generate_decimal_division(rng, div);
        ([problem.dividend, problem.divisor], Some(problem.extra))
    } else if div.allow_remainder {
        (generate_remainder_division(rng, div), None)
    } else {
        (generate_exact_division(rng, div), None)
    }
}

/// One shared decimal-place count for every operand of a problem.
fn draw_decimal_places(rng: &mut DeterministicRng, min_digits: u32, operands: usize) -> Vec<u32> {
    let places = rng.rand_int(1, DECIMAL_PLACES_MAX.min(min_digits).max(1));
    vec![places; operands]
}

// =============================================================================
// Solutions
// =============================================================================

impl Worksheet {
    /// The operator of every problem on this worksheet.
    #[must_use]
    pub fn operator(&self) -> Operator {
        self.config.operator()
    }

    /// Worked solution for every problem, in order.
    #[must_use]
    pub fn solutions(&self) -> Vec<Solution> {
        let operator = self.operator();
        let max_digits = self.config.max_digits();

        self.problems
            .iter()
            .enumerate()
            .map(|(index, problem)| match operator {
                Operator::Add | Operator::Sub => Solution::Indicators(compute_indicators(
                    &problem.operands,
                    max_digits,
                    operator,
                )),
                Operator::Mul => Solution::Multiplication(compute_mul_details(
                    problem.operands[0],
                    problem.operands[1],
                )),
                Operator::Div => {
                    let extra_digits = self
                        .div_extra
                        .as_ref()
                        .and_then(|extras| extras.get(index))
                        .map_or(0, |extra| extra.extra_digits);
                    Solution::Division(compute_div_details(
                        problem.operands[0],
                        problem.operands[1],
                        extra_digits,
                    ))
                }
            })
            .collect()
    }
}

// =============================================================================
// Tests
// =============================================================================
