//! # optcontract
//!
//! Option contract terms and exercise-eligibility rules, for use by lattice,
//! PDE and Monte-Carlo pricing engines.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `oc-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! optcontract = "0.1"
//! ```
//!
//! ```rust
//! use optcontract::instruments::{ExerciseKind, OptionContract};
//!
//! let put = |spot: f64| (100.0 - spot).max(0.0);
//! let contract = OptionContract::new(put, 1.0, ExerciseKind::American, vec![1.0])?;
//!
//! assert!(contract.is_exercisable(0.3));
//! assert!(!contract.is_exercisable(1.2));
//! assert_eq!(contract.evaluate(90.0), 10.0);
//! # Ok::<(), optcontract::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use oc_core as core;

/// Option contracts, exercise styles and payoffs.
pub use oc_instruments as instruments;
