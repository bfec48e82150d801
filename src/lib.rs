//! Drillsheet - Column Arithmetic Worksheets
//!
//! TigerStyle: seeded, constraint-driven worksheet generation with
//! worked-solution traces of the manual base-10 algorithms.
//!
//! # Philosophy
//!
//! > "Same seed, same worksheet."
//!
//! 1. Every generator is a pure function of an explicit RNG and a config
//! 2. Constrained searches are bounded and always end in a fallback
//! 3. Simulators replay the algorithm a student writes, digit by digit
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               Drillsheet                     │
//! ├─────────────────────────────────────────────┤
//! │  worksheet   │ seed → problems → solutions  │
//! ├─────────────────────────────────────────────┤
//! │  generate    │ carry / borrow chains, pairs │
//! │  simulate    │ indicators, partials, steps  │
//! ├─────────────────────────────────────────────┤
//! │  digits      │ constrained digit sequences  │
//! │  rng         │ ChaCha8 seeded stream        │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use drillsheet::{generate_problems, AddConfig, WorksheetConfig};
//!
//! let config = WorksheetConfig::Add(AddConfig {
//!     consecutive_carries: true,
//!     ..AddConfig::default()
//! });
//!
//! let sheet = generate_problems(42, &config);
//! assert_eq!(sheet, generate_problems(42, &config));
//! assert_eq!(sheet.solutions().len(), sheet.problems.len());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod constants;
pub mod digits;
pub mod generate;
pub mod rng;
pub mod simulate;
pub mod worksheet;

// Re-export common types
pub use config::{
    format_seed, parse_seed, AddConfig, ConfigError, DivConfig, MulConfig, Operator, SubConfig,
    WorksheetConfig,
};
pub use generate::DivExtra;
pub use rng::DeterministicRng;
pub use simulate::{
    compute_div_details, compute_indicators, compute_mul_details, division_cycle_length,
    division_terminates, DivComputed, DivCycle, DivStep, Indicators, MulComputed, PartialProduct,
    Termination,
};
pub use worksheet::{generate_problems, problem_count, Problem, Solution, Worksheet};
