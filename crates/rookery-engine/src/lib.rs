//! Run loop orchestrating Rookery simulations.
//!
//! An [`EvolutionRun`] owns everything a single simulation needs: the
//! validated [`RunConfig`], the current Jumper proportion, the round
//! counter and the append-only [`Trajectory`]. Callers either step it one
//! round at a time or drive it to completion, optionally with a
//! [`RoundObserver`] that receives every intermediate state.
//!
//! There is no global state and no notion of time; pacing between rounds
//! is left to the observer.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod observer;
pub mod run;
pub mod summary;
pub mod trajectory;

pub use config::{
    ConfigError, RunConfig, INITIAL_PROPORTION_RANGE, ROUNDS_RANGE, WAITING_COST_RANGE,
};
pub use observer::{NullObserver, RoundObserver};
pub use run::{EvolutionRun, RoundOutcome, RunError};
pub use summary::RunSummary;
pub use trajectory::Trajectory;
