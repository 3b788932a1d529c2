//! Option exercise styles.
//!
//! An [`ExerciseKind`] decides *when* a contract may be exercised. Each
//! variant carries its own eligibility rule, see
//! [`ExerciseKind::is_exercisable`].

use oc_core::errors::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Exercise style of an option contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExerciseKind {
    /// Can only be exercised at maturity.
    #[default]
    European,
    /// Can be exercised on the dates of a discrete schedule.
    Bermudean,
    /// Can be exercised at any time up to and including maturity.
    American,
}

impl ExerciseKind {
    /// Every supported kind, in canonical order.
    pub const ALL: [ExerciseKind; 3] = [
        ExerciseKind::European,
        ExerciseKind::Bermudean,
        ExerciseKind::American,
    ];

    /// Canonical name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            ExerciseKind::European => "European",
            ExerciseKind::Bermudean => "Bermudean",
            ExerciseKind::American => "American",
        }
    }

    /// Whether exercise before maturity can ever be allowed.
    pub fn allows_early_exercise(self) -> bool {
        matches!(self, ExerciseKind::Bermudean | ExerciseKind::American)
    }

    /// Exercise rule for this style at time `t`.
    ///
    /// - European: `t == maturity`.
    /// - Bermudean: `t` is an element of `schedule` (exact equality).
    /// - American: `t <= maturity`.
    pub fn is_exercisable<T: PartialOrd>(self, t: &T, maturity: &T, schedule: &[T]) -> bool {
        match self {
            ExerciseKind::European => t == maturity,
            ExerciseKind::Bermudean => schedule.contains(t),
            ExerciseKind::American => t <= maturity,
        }
    }

    fn allowed_names() -> Vec<String> {
        Self::ALL.iter().map(|k| k.name().to_string()).collect()
    }
}

impl FromStr for ExerciseKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| Error::InvalidKind {
                kind: s.to_string(),
                allowed: Self::allowed_names(),
            })
    }
}

impl fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
