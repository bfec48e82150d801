//! Property tests over whole worksheets.
//!
//! Every property is checked across arbitrary seeds and configurations,
//! including configurations that only make sense after normalization.

use drillsheet::digits::digit_count;
use drillsheet::{
    compute_div_details, compute_mul_details, division_cycle_length, division_terminates,
    generate_problems, problem_count, AddConfig, DivConfig, DivCycle, MulConfig, Solution,
    SubConfig, WorksheetConfig,
};
use proptest::prelude::*;

fn any_config() -> impl Strategy<Value = WorksheetConfig> {
    let add = (0u32..6, 0u32..6, 0usize..6, any::<bool>(), any::<bool>()).prop_map(
        |(min_digits, max_digits, num_operands, consecutive_carries, decimal_mode)| {
            WorksheetConfig::Add(AddConfig {
                min_digits,
                max_digits,
                num_operands,
                consecutive_carries,
                decimal_mode,
            })
        },
    );
    let sub = (0u32..6, 0u32..6, any::<bool>(), any::<bool>()).prop_map(
        |(min_digits, max_digits, consecutive_borrows, decimal_mode)| {
            WorksheetConfig::Sub(SubConfig {
                min_digits,
                max_digits,
                consecutive_borrows,
                decimal_mode,
            })
        },
    );
    let mul = (0u32..6, 0u32..6, 0u32..6, 0u32..6).prop_map(
        |(min_digits, max_digits, mul_min_digits, mul_max_digits)| {
            WorksheetConfig::Mul(MulConfig {
                min_digits,
                max_digits,
                mul_min_digits,
                mul_max_digits,
            })
        },
    );
    let div = (
        0u32..6,
        0u32..6,
        0u32..6,
        0u32..6,
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(
                min_digits,
                max_digits,
                div_min_digits,
                div_max_digits,
                allow_remainder,
                decimal_mode,
                allow_repeating,
            )| {
                WorksheetConfig::Div(DivConfig {
                    min_digits,
                    max_digits,
                    div_min_digits,
                    div_max_digits,
                    allow_remainder,
                    decimal_mode,
                    allow_repeating,
                })
            },
        );

    prop_oneof![add, sub, mul, div]
}

/// Digit-width range of operand `index` under a normalized config.
fn width_range(config: &WorksheetConfig, index: usize) -> (u32, u32) {
    match config {
        WorksheetConfig::Add(c) => (c.min_digits, c.max_digits),
        WorksheetConfig::Sub(c) => (c.min_digits, c.max_digits),
        WorksheetConfig::Mul(c) if index == 1 => (c.mul_min_digits, c.mul_max_digits),
        WorksheetConfig::Mul(c) => (c.min_digits, c.max_digits),
        WorksheetConfig::Div(c) if index == 1 => (c.div_min_digits, c.div_max_digits),
        WorksheetConfig::Div(c) => (c.min_digits, c.max_digits),
    }
}

fn leading_carry_run(operands: &[u32]) -> u32 {
    let mut carry = 0;
    let mut run = 0;
    let mut place = 1;

    loop {
        let total: u32 = operands.iter().map(|v| (v / place) % 10).sum::<u32>() + carry;
        carry = total / 10;
        if carry == 0 {
            return run;
        }
        run += 1;
        place *= 10;
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn worksheets_are_deterministic(seed in any::<u32>(), config in any_config()) {
        let first = generate_problems(seed, &config);
        let second = generate_problems(seed, &config);

        prop_assert_eq!(first, second);
    }

    #[test]
    fn operands_respect_width_ranges(seed in any::<u32>(), config in any_config()) {
        let sheet = generate_problems(seed, &config);

        prop_assert_eq!(sheet.problems.len(), problem_count(&sheet.config));
        for problem in &sheet.problems {
            for (index, value) in problem.operands.iter().enumerate() {
                let (lo, hi) = width_range(&sheet.config, index);
                let digits = digit_count(*value);
                prop_assert!(
                    lo <= digits && digits <= hi,
                    "operand {} of {:?} outside [{}, {}]",
                    value,
                    problem.operands,
                    lo,
                    hi
                );
            }
        }
    }

    #[test]
    fn subtraction_never_goes_negative(
        seed in any::<u32>(),
        min_digits in 1u32..=4,
        max_digits in 1u32..=4,
        consecutive_borrows in any::<bool>(),
    ) {
        let config = WorksheetConfig::Sub(SubConfig {
            min_digits,
            max_digits,
            consecutive_borrows,
            decimal_mode: false,
        });

        for problem in generate_problems(seed, &config).problems {
            let subtrahends: u32 = problem.operands[1..].iter().sum();
            prop_assert!(problem.operands[0] >= subtrahends, "{:?}", problem.operands);
        }
    }

    #[test]
    fn two_digit_carry_chains_span_both_columns(seed in any::<u32>()) {
        let config = WorksheetConfig::Add(AddConfig {
            min_digits: 2,
            max_digits: 2,
            num_operands: 2,
            consecutive_carries: true,
            decimal_mode: false,
        });

        for problem in generate_problems(seed, &config).problems {
            prop_assert!(leading_carry_run(&problem.operands) >= 2, "{:?}", problem.operands);
        }
    }

    #[test]
    fn division_solutions_satisfy_identity(seed in any::<u32>(), config in any_config()) {
        let sheet = generate_problems(seed, &config);

        for (problem, solution) in sheet.problems.iter().zip(sheet.solutions()) {
            match solution {
                Solution::Division(details) => {
                    let (dividend, divisor) = (problem.operands[0], problem.operands[1]);
                    prop_assert_eq!(details.quotient * divisor + details.remainder, dividend);
                    let from_steps = details
                        .integer_steps()
                        .iter()
                        .fold(0, |acc, step| acc * 10 + step.quotient_digit);
                    prop_assert_eq!(from_steps, details.quotient);
                }
                Solution::Multiplication(details) => {
                    prop_assert_eq!(details.final_answer, problem.operands[0] * problem.operands[1]);
                }
                Solution::Indicators(indicators) => {
                    let columns = sheet.config.max_digits() as usize + 1;
                    prop_assert_eq!(indicators.indicators.len(), columns);
                    prop_assert_eq!(indicators.indicators[columns - 1], 0);
                }
            }
        }
    }

    #[test]
    fn normalization_is_idempotent(config in any_config()) {
        let once = config.normalize();
        prop_assert_eq!(once.clone().normalize(), once);
    }

    #[test]
    fn cycle_probe_matches_trace(dividend in 1u32..10_000, divisor in 2u32..100) {
        let probe = division_cycle_length(dividend, divisor, divisor);
        let trace = compute_div_details(dividend, divisor, divisor);

        prop_assert_eq!(probe, trace.cycle);
        prop_assert_eq!(division_terminates(dividend, divisor, divisor).terminates, probe.is_none());
    }
}

#[test]
fn test_carry_chain_seed_one() {
    let config = WorksheetConfig::Add(AddConfig {
        min_digits: 2,
        max_digits: 2,
        num_operands: 2,
        consecutive_carries: true,
        decimal_mode: false,
    });

    let sheet = generate_problems(1, &config);

    assert!(leading_carry_run(&sheet.problems[0].operands) >= 2);
}

#[test]
fn test_known_division_cycles() {
    let seventh = compute_div_details(22, 7, 6);
    assert_eq!(seventh.cycle, Some(DivCycle { start: 0, length: 6 }));
    assert_eq!(seventh.decimal_digits(), vec![1, 4, 2, 8, 5, 7]);

    let third = compute_div_details(10, 3, 1);
    assert_eq!(third.cycle, Some(DivCycle { start: 0, length: 1 }));

    let twelfth = compute_div_details(14, 12, 2);
    assert_eq!(twelfth.cycle, Some(DivCycle { start: 1, length: 1 }));
}

#[test]
fn test_known_multiplication() {
    let details = compute_mul_details(456, 789);

    assert_eq!(details.final_answer, 359_784);
    let partials: Vec<(u32, u32)> = details.partials.iter().map(|p| (p.value, p.shift)).collect();
    assert_eq!(partials, vec![(4_104, 0), (3_648, 1), (3_192, 2)]);
}

#[test]
fn test_termination_probe() {
    assert!(!division_terminates(75, 4, 1).terminates);

    let probe = division_terminates(75, 4, 2);
    assert!(probe.terminates);
    assert_eq!(probe.steps_needed, 2);
}

#[test]
fn test_worksheet_json_round_trip() {
    let config = WorksheetConfig::Div(DivConfig {
        decimal_mode: true,
        allow_repeating: true,
        ..DivConfig::default()
    });
    let sheet = generate_problems(0x00C0_FFEE, &config);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sheet.json");
    std::fs::write(&path, serde_json::to_string_pretty(&sheet).unwrap()).unwrap();
    let loaded: drillsheet::Worksheet =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

    assert_eq!(loaded, sheet);
}
