//! Operand Generators
//!
//! TigerStyle: One generator per operator, each a function of the RNG and
//! explicit width parameters. Constrained generators retry a bounded number
//! of times and always finish with a fallback, so generation never fails.

mod addition;
mod division;
mod multiplication;
mod subtraction;

pub use addition::{generate_addition, generate_carry_chain_addition};
pub use division::{
    division_layout_columns, generate_decimal_division, generate_exact_division,
    generate_remainder_division, DivExtra, DivisionProblem,
};
pub use multiplication::generate_multiplication;
pub use subtraction::{generate_borrow_chain_subtraction, generate_subtraction};
