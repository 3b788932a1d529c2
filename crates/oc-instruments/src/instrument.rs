//! `Exercisable` trait.
//!
//! This is the surface a pricing engine programs against. A lattice or PDE
//! solver walks its own time grid and asks the instrument, step by step,
//! whether early-exercise logic applies; a Monte-Carlo engine does the same
//! along each path. The instrument never sees the grid or the solver.

use crate::exercise::ExerciseKind;
use oc_core::Time;
use std::fmt;

/// An instrument with exercise rights.
pub trait Exercisable<T = Time>: fmt::Debug
where
    T: PartialOrd + Copy,
{
    /// Terminal time of the instrument.
    fn maturity(&self) -> T;

    /// Exercise style.
    fn kind(&self) -> ExerciseKind;

    /// Whether exercise is permitted at time `t`.
    fn is_exercisable(&self, t: T) -> bool;

    /// Whether `t` lies strictly after maturity.
    fn is_expired(&self, t: T) -> bool {
        t > self.maturity()
    }

    /// [`is_exercisable`](Self::is_exercisable) at each point of `grid`, in
    /// grid order.
    fn exercise_mask(&self, grid: &[T]) -> Vec<bool> {
        grid.iter().map(|&t| self.is_exercisable(t)).collect()
    }

    /// The points of `grid` at which exercise is permitted, in grid order.
    fn exercise_times_on(&self, grid: &[T]) -> Vec<T> {
        grid.iter()
            .copied()
            .filter(|&t| self.is_exercisable(t))
            .collect()
    }
}
