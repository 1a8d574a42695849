//! Reusable run fixtures.
//!
//! - [`RecordingObserver`]: logs every observer callback in order.
//! - [`canonical`], [`cold_start`], [`saturated`]: the three reference
//!   scenarios (moderate gap, empty colony, clamped target).

use rookery_core::RoundId;
use rookery_engine::{RoundObserver, RoundOutcome, RunConfig, RunSummary, Trajectory};

/// `x0 = 0.3`, `T = 3.0`, 30 rounds. Converges to `x*(3) ≈ 0.66298`.
pub fn canonical() -> RunConfig {
    RunConfig::new(0.3, 3.0, 30)
}

/// `x0 = 0.0`, `T = 0.0`, one round. Lands on exactly 0.140625.
pub fn cold_start() -> RunConfig {
    RunConfig::new(0.0, 0.0, 1)
}

/// `x0 = 1.0`, `T = 12.0`, 10 rounds. The rest point exceeds 1.0, the
/// clamped target coincides with the start and nothing moves.
pub fn saturated() -> RunConfig {
    RunConfig::new(1.0, 12.0, 10)
}

/// Assert `actual` is within `tol` of `expected`.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected} +/- {tol}, got {actual} (off by {})",
        (actual - expected).abs()
    );
}

/// One observer callback, as captured by [`RecordingObserver`].
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedEvent {
    Begin { points: usize },
    Round(RoundOutcome),
    Finish(RunSummary),
}

/// Records every callback it receives, in order.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub events: Vec<RecordedEvent>,
    /// Trajectory length seen at each `on_round` call.
    pub lengths_seen: Vec<usize>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Outcomes of every recorded round.
    pub fn rounds(&self) -> Vec<RoundOutcome> {
        self.events
            .iter()
            .filter_map(|e| match e {
                RecordedEvent::Round(o) => Some(*o),
                _ => None,
            })
            .collect()
    }

    /// Round ids of every recorded round.
    pub fn round_ids(&self) -> Vec<RoundId> {
        self.rounds().iter().map(|o| o.round).collect()
    }

    /// The summary passed to `on_finish`, if any.
    pub fn summary(&self) -> Option<&RunSummary> {
        self.events.iter().find_map(|e| match e {
            RecordedEvent::Finish(s) => Some(s),
            _ => None,
        })
    }
}

impl RoundObserver for RecordingObserver {
    fn on_begin(&mut self, trajectory: &Trajectory) {
        self.events.push(RecordedEvent::Begin {
            points: trajectory.len(),
        });
    }

    fn on_round(&mut self, outcome: &RoundOutcome, trajectory: &Trajectory) {
        self.lengths_seen.push(trajectory.len());
        self.events.push(RecordedEvent::Round(*outcome));
    }

    fn on_finish(&mut self, summary: &RunSummary) {
        self.events.push(RecordedEvent::Finish(summary.clone()));
    }
}
