//! TigerStyle Constants
//!
//! Every limit the generators and simulators rely on lives here, named
//! `<THING>_<UNIT>_<MIN|MAX>` so the bound is visible at the call site.

// =============================================================================
// Generation
// =============================================================================

/// Attempts a constrained generator makes before taking its fallback branch
pub const GENERATION_ATTEMPTS_MAX: usize = 100;

/// Widest operand any configuration may request
pub const OPERAND_DIGITS_MAX: u32 = 4;

/// Narrowest operand any configuration may request
pub const OPERAND_DIGITS_MIN: u32 = 1;

/// Fewest addends on an addition worksheet
pub const ADD_OPERANDS_COUNT_MIN: usize = 2;

/// Most addends on an addition worksheet
pub const ADD_OPERANDS_COUNT_MAX: usize = 4;

/// Subtraction problems are always minuend and one subtrahend
pub const SUB_OPERANDS_COUNT: usize = 2;

/// Widest multiplicand and multiplier
pub const MUL_DIGITS_MAX: u32 = 3;

/// Narrowest dividend
pub const DIV_DIVIDEND_DIGITS_MIN: u32 = 2;

/// Smallest divisor ever drawn (dividing by one teaches nothing)
pub const DIVISOR_VALUE_MIN: u32 = 2;

/// Shortest forced carry/borrow chain (when the operands are wide enough)
pub const CHAIN_COLUMNS_MIN: u32 = 2;

/// Decimal places drawn for decimal-mode addition and subtraction
pub const DECIMAL_PLACES_MAX: u32 = 2;

// =============================================================================
// Digits
// =============================================================================

/// Number base of every simulated algorithm
pub const DIGIT_BASE: u32 = 10;

/// Largest single digit
pub const DIGIT_VALUE_MAX: u32 = 9;

// =============================================================================
// Division layout budget
// =============================================================================

/// Grid columns a long-division layout may occupy
pub const DIV_GRID_COLUMNS_MAX: u32 = 9;

/// Quotient rows (division steps) a long-division layout may occupy
pub const DIV_QUOTIENT_ROWS_MAX: usize = 5;

// =============================================================================
// Problem counts
// =============================================================================

/// Problems on a standard add/sub/single-digit-multiplier worksheet
pub const PROBLEMS_COUNT_STANDARD: usize = 12;

/// Problems on a decimal-mode add/sub worksheet
pub const PROBLEMS_COUNT_DECIMAL: usize = 8;

/// Problems on a wide-multiplier or division worksheet
pub const PROBLEMS_COUNT_WIDE: usize = 6;
