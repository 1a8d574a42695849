//! Run configuration, validation, and error types.
//!
//! [`RunConfig`] is the builder-input for an [`EvolutionRun`](crate::EvolutionRun).
//! [`validate()`](RunConfig::validate) rejects inputs the dynamic cannot
//! meaningfully iterate on; an initial proportion outside `[0, 1]` is not
//! an error and is clamped when the run is constructed.

use std::error::Error;
use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Range of initial proportions a presentation layer should offer.
pub const INITIAL_PROPORTION_RANGE: RangeInclusive<f64> = 0.0..=1.0;

/// Range of waiting costs a presentation layer should offer.
///
/// The rest point saturates at 1.0 once `T` passes roughly 7.69, so the
/// upper part of the range exercises the clamped-target regime.
pub const WAITING_COST_RANGE: RangeInclusive<f64> = 0.0..=12.0;

/// Range of round counts a presentation layer should offer.
///
/// The engine itself accepts any `u32`, including zero.
pub const ROUNDS_RANGE: RangeInclusive<u32> = 5..=60;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`RunConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The initial proportion is NaN or infinite.
    InvalidInitialProportion {
        /// The invalid value.
        value: f64,
    },
    /// The waiting cost is NaN, infinite, or negative.
    InvalidWaitingCost {
        /// The invalid value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInitialProportion { value } => {
                write!(f, "initial proportion must be finite, got {value}")
            }
            Self::InvalidWaitingCost { value } => {
                write!(f, "waiting cost must be finite and >= 0, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}

// ── RunConfig ──────────────────────────────────────────────────────

/// Complete configuration for a single simulation run.
///
/// Immutable once handed to [`EvolutionRun::new`](crate::EvolutionRun::new).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Initial proportion of Jumpers, `x0`. Default: 0.3.
    pub initial_proportion: f64,
    /// Waiting cost `T`. Default: 3.0.
    pub waiting_cost: f64,
    /// Number of rounds to iterate. Default: 30.
    pub rounds: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            initial_proportion: 0.3,
            waiting_cost: 3.0,
            rounds: 30,
        }
    }
}

impl RunConfig {
    /// Create a config from the three run parameters.
    pub fn new(initial_proportion: f64, waiting_cost: f64, rounds: u32) -> Self {
        Self {
            initial_proportion,
            waiting_cost,
            rounds,
        }
    }

    /// Validate all invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.initial_proportion.is_finite() {
            return Err(ConfigError::InvalidInitialProportion {
                value: self.initial_proportion,
            });
        }
        // `!(x >= 0.0)` also catches NaN.
        if !self.waiting_cost.is_finite() || !(self.waiting_cost >= 0.0) {
            return Err(ConfigError::InvalidWaitingCost {
                value: self.waiting_cost,
            });
        }
        Ok(())
    }

    /// Whether every parameter lies inside the ranges a presentation layer
    /// is expected to expose.
    pub fn within_ui_ranges(&self) -> bool {
        INITIAL_PROPORTION_RANGE.contains(&self.initial_proportion)
            && WAITING_COST_RANGE.contains(&self.waiting_cost)
            && ROUNDS_RANGE.contains(&self.rounds)
    }
}
