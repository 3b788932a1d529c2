//! Error types for optcontract.
//!
//! Every failure a contract can raise on its own happens at construction
//! time and is one of the variants below. Errors produced by caller-supplied
//! payoff functions are never converted into this type.

use thiserror::Error;

/// The top-level error type used throughout optcontract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested exercise kind is not one of the supported styles.
    #[error("invalid exercise kind '{kind}': must be one of [{}]", allowed.join(", "))]
    InvalidKind {
        /// The rejected kind, as supplied.
        kind: String,
        /// The names of the supported kinds.
        allowed: Vec<String>,
    },

    /// The maturity does not appear in the exercising-time schedule.
    #[error("maturity {maturity} is not in the exercising times {exercising_times}")]
    InconsistentSchedule {
        /// The contract maturity, rendered for display.
        maturity: String,
        /// The schedule that was checked, rendered for display.
        exercising_times: String,
    },
}

/// Shorthand `Result` type used throughout optcontract.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err($err)` from the enclosing function if `$cond` is false.
///
/// # Example
/// ```
/// use oc_core::{ensure, errors::{Error, Result}};
/// fn on_schedule(t: f64, schedule: &[f64]) -> Result<()> {
///     ensure!(
///         schedule.contains(&t),
///         Error::InconsistentSchedule {
///             maturity: format!("{t:?}"),
///             exercising_times: format!("{schedule:?}"),
///         }
///     );
///     Ok(())
/// }
/// assert!(on_schedule(1.0, &[0.5, 1.0]).is_ok());
/// assert!(on_schedule(2.0, &[0.5, 1.0]).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr $(,)?) => {
        if !$cond {
            return Err($err);
        }
    };
}
