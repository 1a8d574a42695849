//! Append-only record of the Jumper proportion over a run.

use rookery_core::RoundId;
use serde::Serialize;

use crate::config::ROUNDS_RANGE;

/// Ordered sequence of proportions, one per round.
///
/// Index 0 is the (clamped) initial proportion; index `n` is the state
/// after round `n`. A trajectory is never empty. Only the owning
/// [`EvolutionRun`](crate::EvolutionRun) can append to it.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Trajectory {
    points: Vec<f64>,
}

impl Trajectory {
    /// Start a trajectory at `initial`, expecting `rounds` more points.
    ///
    /// Only budgets up to the largest slider value are reserved up front;
    /// longer runs grow on demand.
    pub(crate) fn new(initial: f64, rounds: usize) -> Self {
        let reserve = rounds.min(*ROUNDS_RANGE.end() as usize);
        let mut points = Vec::with_capacity(reserve + 1);
        points.push(initial);
        Self { points }
    }

    pub(crate) fn push(&mut self, proportion: f64) {
        self.points.push(proportion);
    }

    pub(crate) fn truncate_to_initial(&mut self) {
        self.points.truncate(1);
    }

    /// The proportion at round 0.
    pub fn initial(&self) -> f64 {
        self.points[0]
    }

    /// The most recently recorded proportion.
    pub fn last(&self) -> f64 {
        self.points[self.points.len() - 1]
    }

    /// Proportion recorded at `round`, if that round has been reached.
    pub fn get(&self, round: RoundId) -> Option<f64> {
        self.points.get(round.0 as usize).copied()
    }

    /// Number of recorded points (rounds executed + 1).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; a trajectory holds at least its initial point.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of rounds executed so far.
    pub fn rounds(&self) -> u32 {
        (self.points.len() - 1) as u32
    }

    /// All recorded points in round order.
    pub fn as_slice(&self) -> &[f64] {
        &self.points
    }

    /// Per-round changes `x[n] - x[n-1]`, one fewer than [`len`](Self::len).
    pub fn deltas(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.windows(2).map(|w| w[1] - w[0])
    }

    /// Whether the sequence never moves away from `target`.
    ///
    /// Holds for every trajectory produced by the damped update whose
    /// start lies in `[0, 1]`.
    pub fn approaches(&self, target: f64) -> bool {
        self.points
            .windows(2)
            .all(|w| (target - w[1]).abs() <= (target - w[0]).abs())
    }
}
