//! Arithmetic Simulators
//!
//! TigerStyle: Replay the paper-and-pencil algorithms digit by digit and
//! return the full trace a worked solution is drawn from.
//!
//! ```text
//! operands ──► compute_indicators    (add / sub carry & borrow columns)
//!          ──► compute_mul_details   (partial products + carries)
//!          ──► compute_div_details   (long-division steps + decimal cycle)
//! ```

mod division;
mod indicators;
mod multiplication;

pub use division::{
    compute_div_details, division_cycle_length, division_terminates, DivComputed, DivCycle,
    DivStep, Termination,
};
pub use indicators::{compute_indicators, Indicators};
pub use multiplication::{compute_mul_details, MulComputed, PartialProduct};
