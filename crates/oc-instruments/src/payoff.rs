//! The payoff seam.
//!
//! A payoff maps the state of the underlying at exercise (a spot price, a
//! basket of prices, a path summary…) to a payout. The contract only ever
//! invokes it; what the state and the payout look like is up to the caller.
//!
//! Any `Fn(S) -> R` is a payoff, so closures and plain functions can be
//! handed to [`OptionContract`](crate::option::OptionContract) directly.
//! Fallible payoffs simply return a `Result`, which is passed back to the
//! caller untouched.

/// A payout function of the underlying state `S`.
pub trait Payoff<S> {
    /// Payout type (usually [`Real`](oc_core::Real), possibly a `Result`).
    type Output;

    /// Compute the payout for the underlying state at exercise/expiry.
    fn value(&self, state: S) -> Self::Output;
}

impl<S, R, F> Payoff<S> for F
where
    F: Fn(S) -> R,
{
    type Output = R;

    #[inline]
    fn value(&self, state: S) -> R {
        self(state)
    }
}
