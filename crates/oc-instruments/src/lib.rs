//! # oc-instruments
//!
//! Option contracts: exercise styles, the payoff seam, and the contract
//! value object that pricing engines query for payouts and exercise rights.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod exercise;
pub mod instrument;
pub mod option;
pub mod payoff;

pub use exercise::ExerciseKind;
pub use instrument::Exercisable;
pub use option::{NoBoundary, OptionContract, OptionContractBuilder};
pub use payoff::Payoff;
