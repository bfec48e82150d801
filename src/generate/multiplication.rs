//! Multiplication Operand Generator

use crate::digits::rand_with_digits;
use crate::rng::DeterministicRng;

/// Multiplicand and multiplier drawn independently from their width ranges.
pub fn generate_multiplication(
    rng: &mut DeterministicRng,
    min_digits: u32,
    max_digits: u32,
    mul_min_digits: u32,
    mul_max_digits: u32,
) -> [u32; 2] {
    let width = rng.rand_int(min_digits, max_digits);
    let multiplicand = rand_with_digits(rng, width);

    let mul_width = rng.rand_int(mul_min_digits, mul_max_digits);
    let multiplier = rand_with_digits(rng, mul_width);

    [multiplicand, multiplier]
}
