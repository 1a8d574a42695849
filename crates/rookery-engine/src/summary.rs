//! End-of-run report.

use std::fmt;

use rookery_core::{fixed_point, target};
use serde::Serialize;

/// What a run ended with, next to where the dynamic was heading.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunSummary {
    /// Rounds executed.
    pub rounds: u32,
    /// Waiting cost `T` of the run.
    pub waiting_cost: f64,
    /// Proportion of Jumpers at round 0, after clamping.
    pub initial_proportion: f64,
    /// Proportion of Jumpers after the last executed round.
    pub final_proportion: f64,
    /// Unclamped rest point `x*(T)`.
    pub rest_point: f64,
    /// Rest point clamped into `[0, 1]`; the value the run converges to.
    pub target: f64,
    /// `target - final_proportion`.
    pub remaining_gap: f64,
}

impl RunSummary {
    pub(crate) fn new(
        rounds: u32,
        waiting_cost: f64,
        initial_proportion: f64,
        final_proportion: f64,
    ) -> Self {
        let clamped = target(waiting_cost);
        Self {
            rounds,
            waiting_cost,
            initial_proportion,
            final_proportion,
            rest_point: fixed_point(waiting_cost),
            target: clamped,
            remaining_gap: clamped - final_proportion,
        }
    }

    /// Whether the final proportion is within `tolerance` of the target.
    pub fn converged(&self, tolerance: f64) -> bool {
        self.remaining_gap.abs() <= tolerance
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Final proportion of Jumpers:  x ≈ {:.4}",
            self.final_proportion
        )?;
        write!(f, "Continuous rest point:  x*(T) ≈ {:.4}", self.rest_point)
    }
}
