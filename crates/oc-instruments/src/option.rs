//! Option contract.
//!
//! [`OptionContract`] holds the economic terms of an option (payoff,
//! maturity, exercise style and schedule) together with two boundary
//! descriptors that are passed through untouched to whichever numerical
//! solver prices it.
//!
//! # Example
//! ```
//! use oc_instruments::{ExerciseKind, OptionContract};
//!
//! let call = |spot: f64| (spot - 100.0).max(0.0);
//! let contract = OptionContract::builder(call, 1.0)
//!     .with_kind(ExerciseKind::Bermudean)
//!     .with_exercising_times(vec![0.25, 0.5, 0.75, 1.0])
//!     .build()
//!     .unwrap();
//!
//! assert!(contract.is_exercisable(0.5));
//! assert!(!contract.is_exercisable(0.6));
//! assert_eq!(contract.evaluate(120.0), 20.0);
//! ```

use crate::exercise::ExerciseKind;
use crate::instrument::Exercisable;
use crate::payoff::Payoff;
use oc_core::{
    ensure,
    errors::{Error, Result},
    Time,
};
use std::fmt;
use tracing::debug;

/// Boundary type of a contract built without boundary descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NoBoundary;

// ────────────────────────────────────────────────────────────────────────────
// OptionContract
// ────────────────────────────────────────────────────────────────────────────

/// Immutable terms of an option contract.
///
/// - `P`: the payoff, any [`Payoff`] of the caller's state type.
/// - `B`: boundary descriptor type, opaque to the contract.
/// - `T`: time type, [`Time`] unless the caller counts time otherwise.
///
/// The maturity is always an element of the exercising times, whatever the
/// exercise style.
#[derive(Clone)]
pub struct OptionContract<P, B = NoBoundary, T = Time> {
    payoff: P,
    maturity: T,
    kind: ExerciseKind,
    exercising_times: Vec<T>,
    left_boundary: Option<B>,
    right_boundary: Option<B>,
}

impl<P, T> OptionContract<P, NoBoundary, T> {
    /// Start building a contract with the given payoff and maturity.
    ///
    /// Defaults: European exercise, empty exercising times, no boundaries.
    pub fn builder(payoff: P, maturity: T) -> OptionContractBuilder<P, NoBoundary, T> {
        OptionContractBuilder {
            payoff,
            maturity,
            kind: KindSpec::Kind(ExerciseKind::default()),
            exercising_times: Vec::new(),
            left_boundary: None,
            right_boundary: None,
        }
    }

    /// Build a contract without boundary descriptors.
    pub fn new(
        payoff: P,
        maturity: T,
        kind: ExerciseKind,
        exercising_times: Vec<T>,
    ) -> Result<Self>
    where
        T: PartialOrd + fmt::Debug,
    {
        Self::builder(payoff, maturity)
            .with_kind(kind)
            .with_exercising_times(exercising_times)
            .build()
    }
}

impl<P, B, T> OptionContract<P, B, T> {
    /// The payoff.
    pub fn payoff(&self) -> &P {
        &self.payoff
    }

    /// Terminal time.
    pub fn maturity(&self) -> &T {
        &self.maturity
    }

    /// The exercise style.
    pub fn kind(&self) -> ExerciseKind {
        self.kind
    }

    /// Exercising times, exactly as supplied at construction.
    pub fn exercising_times(&self) -> &[T] {
        &self.exercising_times
    }

    /// Left boundary descriptor, if any.
    pub fn left_boundary(&self) -> Option<&B> {
        self.left_boundary.as_ref()
    }

    /// Right boundary descriptor, if any.
    pub fn right_boundary(&self) -> Option<&B> {
        self.right_boundary.as_ref()
    }

    /// Payout for the underlying `state`.
    ///
    /// Returns whatever the payoff returns. A fallible payoff's error comes
    /// back as-is and a panicking payoff unwinds through this call.
    pub fn evaluate<S>(&self, state: S) -> P::Output
    where
        P: Payoff<S>,
    {
        self.payoff.value(state)
    }

    /// Whether the contract may be exercised at time `t`.
    ///
    /// See [`ExerciseKind::is_exercisable`] for the rule of each style.
    pub fn is_exercisable(&self, t: T) -> bool
    where
        T: PartialOrd,
    {
        self.kind
            .is_exercisable(&t, &self.maturity, &self.exercising_times)
    }
}

impl<P, B, T> Exercisable<T> for OptionContract<P, B, T>
where
    B: fmt::Debug,
    T: PartialOrd + Copy + fmt::Debug,
{
    fn maturity(&self) -> T {
        self.maturity
    }

    fn kind(&self) -> ExerciseKind {
        self.kind
    }

    fn is_exercisable(&self, t: T) -> bool {
        OptionContract::is_exercisable(self, t)
    }
}

impl<P, B: fmt::Debug, T: fmt::Debug> fmt::Debug for OptionContract<P, B, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionContract")
            .field("payoff", &format_args!("<payoff>"))
            .field("maturity", &self.maturity)
            .field("kind", &self.kind)
            .field("exercising_times", &self.exercising_times)
            .field("left_boundary", &self.left_boundary)
            .field("right_boundary", &self.right_boundary)
            .finish()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Builder
// ────────────────────────────────────────────────────────────────────────────

/// Exercise kind as requested, either already typed or still a name.
#[derive(Debug, Clone)]
enum KindSpec {
    Kind(ExerciseKind),
    Named(String),
}

/// Builder for [`OptionContract`].
///
/// Nothing is validated until [`build`](Self::build).
pub struct OptionContractBuilder<P, B = NoBoundary, T = Time> {
    payoff: P,
    maturity: T,
    kind: KindSpec,
    exercising_times: Vec<T>,
    left_boundary: Option<B>,
    right_boundary: Option<B>,
}

impl<P, B, T> OptionContractBuilder<P, B, T> {
    /// Exercise style.
    pub fn with_kind(mut self, kind: ExerciseKind) -> Self {
        self.kind = KindSpec::Kind(kind);
        self
    }

    /// Exercise style by name ("European", "Bermudean" or "American").
    ///
    /// An unknown name makes [`build`](Self::build) fail with
    /// [`Error::InvalidKind`].
    pub fn with_kind_name(mut self, name: impl Into<String>) -> Self {
        self.kind = KindSpec::Named(name.into());
        self
    }

    /// Exercising times. Stored as given: neither sorted nor deduplicated.
    pub fn with_exercising_times(mut self, times: Vec<T>) -> Self {
        self.exercising_times = times;
        self
    }

    /// Both boundary descriptors. Replaces any previously set boundary.
    pub fn with_boundaries<B2>(
        self,
        left: Option<B2>,
        right: Option<B2>,
    ) -> OptionContractBuilder<P, B2, T> {
        OptionContractBuilder {
            payoff: self.payoff,
            maturity: self.maturity,
            kind: self.kind,
            exercising_times: self.exercising_times,
            left_boundary: left,
            right_boundary: right,
        }
    }

    /// Left boundary descriptor.
    pub fn with_left_boundary(mut self, boundary: B) -> Self {
        self.left_boundary = Some(boundary);
        self
    }

    /// Right boundary descriptor.
    pub fn with_right_boundary(mut self, boundary: B) -> Self {
        self.right_boundary = Some(boundary);
        self
    }

    /// Validate the terms and build the contract.
    ///
    /// Checks, in order:
    /// 1. a kind given by name is one of the supported styles, else
    ///    [`Error::InvalidKind`];
    /// 2. the maturity is one of the exercising times, else
    ///    [`Error::InconsistentSchedule`]. This holds for every style,
    ///    European and American included.
    pub fn build(self) -> Result<OptionContract<P, B, T>>
    where
        T: PartialOrd + fmt::Debug,
    {
        let kind = match self.validate() {
            Ok(kind) => kind,
            Err(e) => {
                debug!(error = %e, "option contract rejected");
                return Err(e);
            }
        };
        debug!(
            %kind,
            maturity = ?self.maturity,
            exercise_dates = self.exercising_times.len(),
            "option contract built"
        );
        Ok(OptionContract {
            payoff: self.payoff,
            maturity: self.maturity,
            kind,
            exercising_times: self.exercising_times,
            left_boundary: self.left_boundary,
            right_boundary: self.right_boundary,
        })
    }

    fn validate(&self) -> Result<ExerciseKind>
    where
        T: PartialOrd + fmt::Debug,
    {
        let kind = match &self.kind {
            KindSpec::Kind(kind) => *kind,
            KindSpec::Named(name) => name.parse()?,
        };
        ensure!(
            self.exercising_times.contains(&self.maturity),
            Error::InconsistentSchedule {
                maturity: format!("{:?}", self.maturity),
                exercising_times: format!("{:?}", self.exercising_times),
            }
        );
        Ok(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use oc_core::Real;

    fn call(strike: Real) -> impl Fn(Real) -> Real + Clone {
        move |spot| (spot - strike).max(0.0)
    }

    #[test]
    fn european_exercisable_only_at_maturity() {
        let c = OptionContract::new(call(100.0), 1.0, ExerciseKind::European, vec![1.0]).unwrap();
        assert!(c.is_exercisable(1.0));
        assert!(!c.is_exercisable(0.5));
        assert!(!c.is_exercisable(1.5));
    }

    #[test]
    fn bermudean_exercisable_on_schedule() {
        let c = OptionContract::builder(call(100.0), 1.0)
            .with_kind(ExerciseKind::Bermudean)
            .with_exercising_times(vec![0.25, 0.5, 0.75, 1.0])
            .build()
            .unwrap();
        assert!(c.is_exercisable(0.5));
        assert!(!c.is_exercisable(0.6));
        assert!(c.is_exercisable(1.0));
    }

    #[test]
    fn american_exercisable_up_to_maturity() {
        let c = OptionContract::builder(call(100.0), 1.0)
            .with_kind_name("American")
            .with_exercising_times(vec![1.0])
            .build()
            .unwrap();
        assert_eq!(c.kind(), ExerciseKind::American);
        assert!(c.is_exercisable(0.01));
        assert!(c.is_exercisable(1.0));
        assert!(!c.is_exercisable(1.01));
    }

    #[test]
    fn builder_without_kind_is_european() {
        let c = OptionContract::builder(call(100.0), 1.0)
            .with_exercising_times(vec![1.0])
            .build()
            .unwrap();
        assert_eq!(c.kind(), ExerciseKind::European);
        assert!(c.is_exercisable(1.0));
        assert!(!c.is_exercisable(0.5));
    }

    #[test]
    fn non_copy_time_axis() {
        let expiry = "2027-01-15".to_string();
        let c = OptionContract::builder(|spot: Real| spot * 2.0, expiry.clone())
            .with_kind(ExerciseKind::Bermudean)
            .with_exercising_times(vec!["2026-07-15".to_string(), expiry.clone()])
            .build()
            .unwrap();
        assert_eq!(c.maturity(), &expiry);
        assert_eq!(c.kind(), ExerciseKind::Bermudean);
        assert_eq!(c.exercising_times().len(), 2);
        assert!(c.is_exercisable("2026-07-15".to_string()));
        assert!(!c.is_exercisable("2026-10-15".to_string()));
        assert_abs_diff_eq!(c.evaluate(3.0), 6.0, epsilon = 1e-15);
        assert!(c.left_boundary().is_none());
        assert!(c.payoff().value(1.5) > 0.0);
    }

    #[test]
    fn unknown_kind_name_is_rejected() {
        let err = OptionContract::builder(call(100.0), 1.0)
            .with_kind_name("Asian")
            .with_exercising_times(vec![1.0])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            Error::InvalidKind {
                kind: "Asian".into(),
                allowed: vec!["European".into(), "Bermudean".into(), "American".into()],
            }
        );
    }

    #[test]
    fn maturity_missing_from_schedule_is_rejected() {
        let err = OptionContract::new(call(100.0), 2.0, ExerciseKind::European, vec![1.0])
            .unwrap_err();
        assert_eq!(
            err,
            Error::InconsistentSchedule {
                maturity: "2.0".into(),
                exercising_times: "[1.0]".into(),
            }
        );
    }

    #[test]
    fn default_schedule_is_empty_so_bare_builder_fails() {
        let err = OptionContract::builder(call(100.0), 1.0).build().unwrap_err();
        assert!(matches!(err, Error::InconsistentSchedule { .. }));
    }

    #[test]
    fn kind_is_checked_before_schedule() {
        let err = OptionContract::builder(call(100.0), 2.0)
            .with_kind_name("Asian")
            .with_exercising_times(vec![1.0])
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidKind { .. }));
    }

    #[test]
    fn evaluate_returns_payoff_value() {
        let c = OptionContract::new(call(100.0), 1.0, ExerciseKind::European, vec![1.0]).unwrap();
        assert_abs_diff_eq!(c.evaluate(120.0), 20.0, epsilon = 1e-15);
        assert_abs_diff_eq!(c.evaluate(80.0), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn evaluate_passes_payoff_errors_through() {
        #[derive(Debug, PartialEq)]
        struct NegativeSpot(Real);

        let checked = |spot: Real| {
            if spot < 0.0 {
                Err(NegativeSpot(spot))
            } else {
                Ok(spot)
            }
        };
        let c = OptionContract::new(checked, 1.0, ExerciseKind::European, vec![1.0]).unwrap();
        assert_eq!(c.evaluate(-5.0), Err(NegativeSpot(-5.0)));
        assert_eq!(c.evaluate(5.0), Ok(5.0));
    }

    #[test]
    #[should_panic(expected = "payoff blew up")]
    fn evaluate_does_not_catch_payoff_panics() {
        let c = OptionContract::new(
            |_: Real| -> Real { panic!("payoff blew up") },
            1.0,
            ExerciseKind::European,
            vec![1.0],
        )
        .unwrap();
        c.evaluate(1.0);
    }

    #[test]
    fn schedule_is_stored_unmodified() {
        let times = vec![1.0, 0.25, 0.5, 0.25];
        let c = OptionContract::new(call(100.0), 1.0, ExerciseKind::Bermudean, times.clone())
            .unwrap();
        assert_eq!(c.exercising_times(), times.as_slice());
        assert_eq!(*c.maturity(), 1.0);
    }

    #[test]
    fn boundaries_are_passed_through() {
        #[derive(Debug, Clone, PartialEq)]
        enum Bc {
            Dirichlet(Real),
            Neumann(Real),
        }

        let c = OptionContract::builder(call(100.0), 1.0)
            .with_exercising_times(vec![1.0])
            .with_boundaries(Some(Bc::Dirichlet(0.0)), None)
            .with_right_boundary(Bc::Neumann(1.0))
            .build()
            .unwrap();
        assert_eq!(c.left_boundary(), Some(&Bc::Dirichlet(0.0)));
        assert_eq!(c.right_boundary(), Some(&Bc::Neumann(1.0)));
    }

    #[test]
    fn no_boundaries_by_default() {
        let c = OptionContract::new(call(100.0), 1.0, ExerciseKind::American, vec![1.0]).unwrap();
        assert_eq!(c.left_boundary(), None);
        assert_eq!(c.right_boundary(), None);
    }

    #[test]
    fn vector_state_payoff() {
        let basket = |spots: &[Real]| (spots.iter().sum::<Real>() / spots.len() as Real - 100.0).max(0.0);
        let c = OptionContract::new(basket, 1.0, ExerciseKind::European, vec![1.0]).unwrap();
        let spots = [110.0, 130.0];
        assert_abs_diff_eq!(c.evaluate(&spots[..]), 20.0, epsilon = 1e-12);
    }

    #[test]
    fn integer_time_axis() {
        let c = OptionContract::builder(call(100.0), 365u32)
            .with_kind(ExerciseKind::Bermudean)
            .with_exercising_times(vec![91, 182, 273, 365])
            .build()
            .unwrap();
        assert!(c.is_exercisable(182));
        assert!(!c.is_exercisable(183));
    }

    #[test]
    fn exercisable_trait_matches_inherent_query() {
        let c = OptionContract::builder(call(100.0), 1.0)
            .with_kind(ExerciseKind::Bermudean)
            .with_exercising_times(vec![0.5, 1.0])
            .build()
            .unwrap();
        let grid = [0.0, 0.25, 0.5, 0.75, 1.0, 1.25];
        assert_eq!(
            c.exercise_mask(&grid),
            [false, false, true, false, true, false]
        );
        assert_eq!(c.exercise_times_on(&grid), [0.5, 1.0]);
        assert!(Exercisable::is_expired(&c, 1.25));
    }

    #[test]
    fn clone_keeps_terms() {
        let c = OptionContract::new(call(90.0), 1.0, ExerciseKind::American, vec![0.5, 1.0])
            .unwrap();
        let d = c.clone();
        assert_eq!(d.kind(), ExerciseKind::American);
        assert_eq!(d.exercising_times(), [0.5, 1.0]);
        assert_abs_diff_eq!(d.evaluate(100.0), 10.0, epsilon = 1e-15);
    }

    #[test]
    fn debug_hides_payoff() {
        let c = OptionContract::new(call(100.0), 1.0, ExerciseKind::European, vec![1.0]).unwrap();
        let s = format!("{c:?}");
        assert!(s.contains("<payoff>"));
        assert!(s.contains("European"));
    }

    #[test]
    fn shared_across_threads() {
        let c = OptionContract::builder(call(100.0), 1.0)
            .with_kind(ExerciseKind::American)
            .with_exercising_times(vec![1.0])
            .build()
            .unwrap();
        std::thread::scope(|s| {
            for i in 0..4 {
                let c = &c;
                s.spawn(move || {
                    let t = i as Real * 0.5;
                    assert_eq!(c.is_exercisable(t), t <= 1.0);
                    assert_abs_diff_eq!(c.evaluate(100.0 + t), t, epsilon = 1e-12);
                });
            }
        });
    }
}
