//! The [`RoundObserver`] hook for presentation layers.
//!
//! An observer sees the run's initial state, every round as it completes,
//! and the final summary. Drawing, charting and pacing all live on this
//! side of the seam; the engine never sleeps or renders.

use crate::run::RoundOutcome;
use crate::summary::RunSummary;
use crate::trajectory::Trajectory;

/// Receives the states of a run as it is driven by
/// [`EvolutionRun::run_with`](crate::EvolutionRun::run_with).
///
/// # Contract
///
/// - `on_begin` is called exactly once, before any round executes in that
///   call, with the trajectory recorded so far.
/// - `on_round` is called once per executed round, after the new
///   proportion has been clamped and appended.
/// - `on_finish` is called exactly once, after the last round.
///
/// Only `on_round` is required.
pub trait RoundObserver {
    /// The run is about to execute its remaining rounds.
    fn on_begin(&mut self, _trajectory: &Trajectory) {}

    /// One round has been executed.
    fn on_round(&mut self, outcome: &RoundOutcome, trajectory: &Trajectory);

    /// The run has executed its final round.
    fn on_finish(&mut self, _summary: &RunSummary) {}
}

/// An observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl RoundObserver for NullObserver {
    fn on_round(&mut self, _outcome: &RoundOutcome, _trajectory: &Trajectory) {}
}
