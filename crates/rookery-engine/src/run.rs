//! Caller-owned simulation run.
//!
//! [`EvolutionRun`] is the primary user-facing API. Each call to
//! [`step()`](EvolutionRun::step) applies one damped update, clamps the
//! result into `[0, 1]`, appends it to the trajectory and returns a
//! [`RoundOutcome`]. A run has a fixed round budget taken from its
//! [`RunConfig`]; there is no convergence-based early stop.
//!
//! # Ownership model
//!
//! All mutating methods take `&mut self` and the run holds no shared or
//! global state, so independent runs never interact. Borrowing the
//! trajectory while stepping is prevented by the borrow checker.

use std::error::Error;
use std::fmt;

use rookery_core::{advance_clamped, clamp_proportion, gap, target, RoundId};
use tracing::{debug, info, warn};

use crate::config::{ConfigError, RunConfig};
use crate::observer::{NullObserver, RoundObserver};
use crate::summary::RunSummary;
use crate::trajectory::Trajectory;

// ── RunError ────────────────────────────────────────────────────

/// Errors from [`EvolutionRun::step()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunError {
    /// Every configured round has already been executed.
    Completed {
        /// The configured round budget.
        rounds: u32,
    },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed { rounds } => {
                write!(f, "run already completed all {rounds} rounds")
            }
        }
    }
}

impl Error for RunError {}

// ── RoundOutcome ────────────────────────────────────────────────

/// Result of executing a single round.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundOutcome {
    /// The round just executed (1-based; round 0 is the initial state).
    pub round: RoundId,
    /// Proportion of Jumpers before the update.
    pub previous: f64,
    /// Proportion of Jumpers after the update and clamp.
    pub proportion: f64,
    /// Clamped rest point the update moved toward.
    pub target: f64,
    /// `target - proportion` after the update.
    pub remaining_gap: f64,
}

impl RoundOutcome {
    /// Signed change applied this round.
    pub fn delta(&self) -> f64 {
        self.proportion - self.previous
    }
}

// ── EvolutionRun ────────────────────────────────────────────────

/// A single simulation run: one scalar state and its trajectory.
///
/// # Example
///
/// ```
/// use rookery_engine::{EvolutionRun, RunConfig};
///
/// let mut run = EvolutionRun::new(RunConfig::new(0.3, 3.0, 30)).unwrap();
/// let summary = run.run_to_end();
/// assert!((summary.final_proportion - 0.66298).abs() < 1e-3);
/// assert_eq!(run.trajectory().len(), 31);
/// ```
#[derive(Clone, Debug)]
pub struct EvolutionRun {
    config: RunConfig,
    initial: f64,
    proportion: f64,
    round: RoundId,
    trajectory: Trajectory,
}

impl EvolutionRun {
    /// Create a run from a [`RunConfig`].
    ///
    /// Validates the configuration and clamps the initial proportion into
    /// `[0, 1]`. The returned run sits at round 0.
    pub fn new(config: RunConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let initial = clamp_proportion(config.initial_proportion);
        if initial != config.initial_proportion {
            warn!(
                requested = config.initial_proportion,
                clamped = initial,
                "initial proportion outside [0, 1]; clamped"
            );
        }
        let trajectory = Trajectory::new(initial, config.rounds as usize);
        Ok(Self {
            config,
            initial,
            proportion: initial,
            round: RoundId::INITIAL,
            trajectory,
        })
    }

    /// Execute one round.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Completed`] once the round budget is spent.
    /// The run's state is left unchanged in that case.
    pub fn step(&mut self) -> Result<RoundOutcome, RunError> {
        if self.is_complete() {
            return Err(RunError::Completed {
                rounds: self.config.rounds,
            });
        }
        Ok(self.advance_one())
    }

    /// Execute every remaining round and return the summary.
    ///
    /// Calling this on a completed run executes nothing and returns the
    /// same summary again.
    pub fn run_to_end(&mut self) -> RunSummary {
        self.run_with(&mut NullObserver)
    }

    /// Execute every remaining round, reporting each to `observer`.
    pub fn run_with(&mut self, observer: &mut dyn RoundObserver) -> RunSummary {
        info!(
            initial_proportion = self.proportion,
            waiting_cost = self.config.waiting_cost,
            rounds = self.remaining_rounds(),
            "run started"
        );
        observer.on_begin(&self.trajectory);
        while !self.is_complete() {
            let outcome = self.advance_one();
            observer.on_round(&outcome, &self.trajectory);
        }
        let summary = self.summary();
        info!(
            final_proportion = summary.final_proportion,
            rest_point = summary.rest_point,
            remaining_gap = summary.remaining_gap,
            "run finished"
        );
        observer.on_finish(&summary);
        summary
    }

    /// Return to round 0, discarding every recorded round.
    pub fn reset(&mut self) {
        self.proportion = self.initial;
        self.round = RoundId::INITIAL;
        self.trajectory.truncate_to_initial();
    }

    /// Summary of the run as it stands.
    pub fn summary(&self) -> RunSummary {
        RunSummary::new(
            self.round.0,
            self.config.waiting_cost,
            self.initial,
            self.proportion,
        )
    }

    /// Current proportion of Jumpers.
    pub fn proportion(&self) -> f64 {
        self.proportion
    }

    /// Rounds executed so far (0 after construction or reset).
    pub fn current_round(&self) -> RoundId {
        self.round
    }

    /// Rounds still to execute.
    pub fn remaining_rounds(&self) -> u32 {
        self.config.rounds - self.round.0
    }

    /// Whether the round budget is spent.
    pub fn is_complete(&self) -> bool {
        self.round.0 >= self.config.rounds
    }

    /// Clamped rest point this run converges to.
    pub fn target(&self) -> f64 {
        target(self.config.waiting_cost)
    }

    /// Every proportion recorded so far.
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// The configuration this run was built from.
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    fn advance_one(&mut self) -> RoundOutcome {
        let t = self.config.waiting_cost;
        let previous = self.proportion;
        self.proportion = advance_clamped(previous, t);
        self.round = self.round.next();
        self.trajectory.push(self.proportion);

        let outcome = RoundOutcome {
            round: self.round,
            previous,
            proportion: self.proportion,
            target: target(t),
            remaining_gap: gap(self.proportion, t),
        };
        debug!(
            round = %outcome.round,
            proportion = outcome.proportion,
            remaining_gap = outcome.remaining_gap,
            "round advanced"
        );
        outcome
    }
}
