//! Worksheet Configuration
//!
//! TigerStyle: One record per operator, normalized once before use.
//!
//! Configurations arrive from a JSON file or from CLI flags. Either way
//! they pass through [`WorksheetConfig::normalize`], which is pure and
//! idempotent, so the generators never see `min > max` or widths outside
//! what the layout can draw.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{
    ADD_OPERANDS_COUNT_MAX, ADD_OPERANDS_COUNT_MIN, DIV_DIVIDEND_DIGITS_MIN, MUL_DIGITS_MAX,
    OPERAND_DIGITS_MAX, OPERAND_DIGITS_MIN,
};

// =============================================================================
// Operator
// =============================================================================

/// The four column-arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// Column addition
    Add,
    /// Column subtraction
    Sub,
    /// Long multiplication
    Mul,
    /// Long division
    Div,
}

impl Operator {
    /// Get string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
        }
    }

    /// Parse from string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "add" | "+" => Some(Self::Add),
            "sub" | "-" => Some(Self::Sub),
            "mul" | "x" | "*" => Some(Self::Mul),
            "div" | "/" => Some(Self::Div),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Per-Operator Records
// =============================================================================

/// Addition worksheet settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddConfig {
    /// Narrowest addend
    pub min_digits: u32,
    /// Widest addend
    pub max_digits: u32,
    /// Addends per problem
    pub num_operands: usize,
    /// Force a carry in every column of a chain starting at the ones place
    pub consecutive_carries: bool,
    /// Render operands as decimals
    pub decimal_mode: bool,
}

impl Default for AddConfig {
    fn default() -> Self {
        Self {
            min_digits: 2,
            max_digits: 2,
            num_operands: 2,
            consecutive_carries: false,
            decimal_mode: false,
        }
    }
}

/// Subtraction worksheet settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubConfig {
    /// Narrowest operand
    pub min_digits: u32,
    /// Widest operand
    pub max_digits: u32,
    /// Force a borrow in every column of a chain starting at the ones place
    pub consecutive_borrows: bool,
    /// Render operands as decimals
    pub decimal_mode: bool,
}

impl Default for SubConfig {
    fn default() -> Self {
        Self {
            min_digits: 2,
            max_digits: 2,
            consecutive_borrows: false,
            decimal_mode: false,
        }
    }
}

/// Multiplication worksheet settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MulConfig {
    /// Narrowest multiplicand
    pub min_digits: u32,
    /// Widest multiplicand
    pub max_digits: u32,
    /// Narrowest multiplier
    pub mul_min_digits: u32,
    /// Widest multiplier
    pub mul_max_digits: u32,
}

impl Default for MulConfig {
    fn default() -> Self {
        Self {
            min_digits: 2,
            max_digits: 3,
            mul_min_digits: 1,
            mul_max_digits: 1,
        }
    }
}

/// Division worksheet settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DivConfig {
    /// Narrowest dividend
    pub min_digits: u32,
    /// Widest dividend
    pub max_digits: u32,
    /// Narrowest divisor
    pub div_min_digits: u32,
    /// Widest divisor
    pub div_max_digits: u32,
    /// Allow a non-zero remainder
    pub allow_remainder: bool,
    /// Carry the division past the decimal point
    pub decimal_mode: bool,
    /// In decimal mode, allow repeating decimals
    pub allow_repeating: bool,
}

impl Default for DivConfig {
    fn default() -> Self {
        Self {
            min_digits: 2,
            max_digits: 3,
            div_min_digits: 1,
            div_max_digits: 1,
            allow_remainder: false,
            decimal_mode: false,
            allow_repeating: false,
        }
    }
}

// =============================================================================
// Worksheet Config
// =============================================================================

/// A worksheet configuration, discriminated by operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "operator", rename_all = "snake_case")]
pub enum WorksheetConfig {
    /// Addition
    Add(AddConfig),
    /// Subtraction
    Sub(SubConfig),
    /// Multiplication
    Mul(MulConfig),
    /// Division
    Div(DivConfig),
}

impl WorksheetConfig {
    /// Default configuration for an operator.
    #[must_use]
    pub fn for_operator(operator: Operator) -> Self {
        match operator {
            Operator::Add => Self::Add(AddConfig::default()),
            Operator::Sub => Self::Sub(SubConfig::default()),
            Operator::Mul => Self::Mul(MulConfig::default()),
            Operator::Div => Self::Div(DivConfig::default()),
        }
    }

    /// The operator this configuration drives.
    #[must_use]
    pub fn operator(&self) -> Operator {
        match self {
            Self::Add(_) => Operator::Add,
            Self::Sub(_) => Operator::Sub,
            Self::Mul(_) => Operator::Mul,
            Self::Div(_) => Operator::Div,
        }
    }

    /// Widest first operand (addend, minuend, multiplicand or dividend).
    #[must_use]
    pub fn max_digits(&self) -> u32 {
        match self {
            Self::Add(c) => c.max_digits,
            Self::Sub(c) => c.max_digits,
            Self::Mul(c) => c.max_digits,
            Self::Div(c) => c.max_digits,
        }
    }

    /// Whether operands are rendered or extended as decimals.
    #[must_use]
    pub fn decimal_mode(&self) -> bool {
        match self {
            Self::Add(c) => c.decimal_mode,
            Self::Sub(c) => c.decimal_mode,
            Self::Mul(_) => false,
            Self::Div(c) => c.decimal_mode,
        }
    }

    /// Normalize widths and flags into a consistent configuration.
    ///
    /// Pure and idempotent: `c.normalize().normalize() == c.normalize()`.
    #[must_use]
    pub fn normalize(self) -> Self {
        let normalized = match self {
            Self::Add(c) => {
                let (min_digits, max_digits) =
                    clamp_range(c.min_digits, c.max_digits, OPERAND_DIGITS_MIN, OPERAND_DIGITS_MAX);
                Self::Add(AddConfig {
                    min_digits,
                    max_digits,
                    num_operands: c
                        .num_operands
                        .clamp(ADD_OPERANDS_COUNT_MIN, ADD_OPERANDS_COUNT_MAX),
                    ..c
                })
            }
            Self::Sub(c) => {
                let (min_digits, max_digits) =
                    clamp_range(c.min_digits, c.max_digits, OPERAND_DIGITS_MIN, OPERAND_DIGITS_MAX);
                Self::Sub(SubConfig {
                    min_digits,
                    max_digits,
                    ..c
                })
            }
            Self::Mul(c) => {
                let (min_digits, max_digits) =
                    clamp_range(c.min_digits, c.max_digits, OPERAND_DIGITS_MIN, MUL_DIGITS_MAX);
                let (mul_min_digits, mul_max_digits) = clamp_range(
                    c.mul_min_digits,
                    c.mul_max_digits,
                    OPERAND_DIGITS_MIN,
                    MUL_DIGITS_MAX,
                );
                Self::Mul(MulConfig {
                    min_digits,
                    max_digits,
                    mul_min_digits,
                    mul_max_digits,
                })
            }
            Self::Div(c) => {
                let (min_digits, max_digits) = clamp_range(
                    c.min_digits,
                    c.max_digits,
                    DIV_DIVIDEND_DIGITS_MIN,
                    OPERAND_DIGITS_MAX,
                );
                let (div_min_digits, div_max_digits) =
                    clamp_range(c.div_min_digits, c.div_max_digits, OPERAND_DIGITS_MIN, max_digits);
                Self::Div(DivConfig {
                    min_digits,
                    max_digits,
                    div_min_digits,
                    div_max_digits,
                    allow_repeating: c.allow_repeating && c.decimal_mode,
                    ..c
                })
            }
        };

        // Postcondition
        debug_assert!(normalized.max_digits() >= OPERAND_DIGITS_MIN);

        normalized
    }

    /// Parse a configuration from JSON text.
    ///
    /// The result is normalized.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.normalize())
    }

    /// Load a configuration from a JSON file.
    ///
    /// The result is normalized.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

// =============================================================================
// Seeds
// =============================================================================

/// Hex characters in a formatted seed
pub const SEED_HEX_CHARS: usize = 8;

/// Parse a seed given as 8 hex characters (`0x` optional) or as a decimal `u32`.
///
/// Exactly eight characters are read as hex, so `"00000010"` is 16.
pub fn parse_seed(s: &str) -> Result<u32, ConfigError> {
    let trimmed = s.trim();
    let invalid = || ConfigError::InvalidSeed(s.to_string());

    if let Some(hex) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        return u32::from_str_radix(hex, 16).map_err(|_| invalid());
    }
    if trimmed.len() == SEED_HEX_CHARS {
        return u32::from_str_radix(trimmed, 16).map_err(|_| invalid());
    }
    trimmed.parse::<u32>().map_err(|_| invalid())
}

/// Format a seed as 8 lowercase hex characters.
#[must_use]
pub fn format_seed(seed: u32) -> String {
    format!("{:0width$x}", seed, width = SEED_HEX_CHARS)
}

/// Clamp both ends into `[floor, ceil]`, then lower `min` to `max` if they cross.
fn clamp_range(min: u32, max: u32, floor: u32, ceil: u32) -> (u32, u32) {
    let max = max.clamp(floor, ceil);
    let min = min.clamp(floor, ceil).min(max);

    // Postcondition
    debug_assert!(floor <= min && min <= max && max <= ceil);

    (min, max)
}

// =============================================================================
// Errors
// =============================================================================

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path that failed
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Config JSON did not match any operator record
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Seed string was neither decimal nor 8 hex characters
    #[error("invalid seed {0:?}: expected a decimal u32 or 8 hex characters")]
    InvalidSeed(String),
}

// =============================================================================
// Tests
// =============================================================================
