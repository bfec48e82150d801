//! Multiplication Detail Computer
//!
//! TigerStyle: One partial product per multiplier digit, with the carries a
//! student pencils above the multiplicand while forming it.

use serde::{Deserialize, Serialize};

use crate::constants::DIGIT_BASE;
use crate::digits::digits_of;

/// The product of the multiplicand and one multiplier digit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialProduct {
    /// `multiplicand * digit`, before shifting
    pub value: u32,
    /// Position of the multiplier digit, counted from the ones place
    pub shift: u32,
    /// Carry out of each multiplicand digit, ones place first
    pub carries: Vec<u32>,
}

/// Full long-multiplication trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MulComputed {
    /// Partial products, ones digit of the multiplier first
    pub partials: Vec<PartialProduct>,
    /// `multiplicand * multiplier`
    pub final_answer: u32,
}

/// Long multiplication of `multiplicand` by `multiplier`.
#[must_use]
pub fn compute_mul_details(multiplicand: u32, multiplier: u32) -> MulComputed {
    let mut ones_first = digits_of(multiplicand);
    ones_first.reverse();

    let partials: Vec<PartialProduct> = (0u32..)
        .zip(digits_of(multiplier).into_iter().rev())
        .map(|(shift, digit)| {
            let mut carry = 0;
            let carries = ones_first
                .iter()
                .map(|m| {
                    carry = (m * digit + carry) / DIGIT_BASE;
                    carry
                })
                .collect();

            PartialProduct {
                value: multiplicand * digit,
                shift,
                carries,
            }
        })
        .collect();

    let final_answer = multiplicand * multiplier;

    // Postcondition
    debug_assert_eq!(
        partials
            .iter()
            .map(|p| p.value * DIGIT_BASE.pow(p.shift))
            .sum::<u32>(),
        final_answer,
        "partial products must sum to the answer"
    );

    MulComputed {
        partials,
        final_answer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_by_three() {
        let computed = compute_mul_details(456, 789);

        assert_eq!(computed.final_answer, 359_784);
        let shape: Vec<(u32, u32)> = computed.partials.iter().map(|p| (p.value, p.shift)).collect();
        assert_eq!(shape, vec![(4_104, 0), (3_648, 1), (3_192, 2)]);
    }

    #[test]
    fn test_carries_per_digit() {
        let computed = compute_mul_details(456, 789);

        assert_eq!(computed.partials[0].carries, vec![5, 5, 4]);
        assert_eq!(computed.partials[1].carries, vec![4, 4, 3]);
        assert_eq!(computed.partials[2].carries, vec![4, 3, 3]);
    }

    #[test]
    fn test_zero_multiplier_digit() {
        let computed = compute_mul_details(57, 305);

        assert_eq!(computed.final_answer, 17_385);
        assert_eq!(computed.partials[1].value, 0);
        assert_eq!(computed.partials[1].carries, vec![0, 0]);
    }

    #[test]
    fn test_single_digit() {
        let computed = compute_mul_details(7, 8);

        assert_eq!(computed.partials.len(), 1);
        assert_eq!(computed.partials[0].carries, vec![5]);
        assert_eq!(computed.final_answer, 56);
    }
}
