//! Rookery: an evolutionary game between Jumpers and Waiters.
//!
//! A colony of penguins gathers at the water's edge. Jumpers dive first
//! and take the risk; Waiters hold back and pay a waiting cost `T`. The
//! proportion of Jumpers evolves round by round toward the rest point
//! `x*(T) = (3 + T) / (8 + 0.35 T)` under a damped update that never
//! overshoots.
//!
//! This is the top-level facade crate that re-exports the public API of the
//! sub-crates and hosts the `rookery` command-line runner.
//!
//! # Quick start
//!
//! ```rust
//! use rookery::prelude::*;
//!
//! let mut run = EvolutionRun::new(RunConfig::new(0.3, 3.0, 30)).unwrap();
//! let summary = run.run_to_end();
//! assert!((summary.final_proportion - fixed_point(3.0)).abs() < 1e-3);
//!
//! let layout = ColonyLayout::for_round(
//!     summary.final_proportion,
//!     &ColonyConfig::default(),
//!     run.current_round(),
//! )
//! .unwrap();
//! assert_eq!(layout.jumpers(), 27);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`dynamics`] | `rookery-core` | Rest point, damped update, `Strategy`, `RoundId` |
//! | [`engine`] | `rookery-engine` | `RunConfig`, `EvolutionRun`, `Trajectory`, observers |
//! | [`colony`] | `rookery-colony` | Shuffled colony layouts for display |
//! | [`settings`] | | Environment-driven CLI settings |
//! | [`report`] | | Console and JSON output for the CLI |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Pure dynamics and shared types (`rookery-core`).
pub use rookery_core as dynamics;

/// Run loop, configuration and trajectory (`rookery-engine`).
pub use rookery_engine as engine;

/// Colony layouts (`rookery-colony`).
pub use rookery_colony as colony;

pub mod report;
pub mod settings;

/// Common imports for typical Rookery usage.
///
/// ```rust
/// use rookery::prelude::*;
/// ```
pub mod prelude {
    pub use rookery_core::{
        advance, advance_clamped, clamp_proportion, fixed_point, target, RoundId, Strategy, STEP,
    };

    pub use rookery_engine::{
        ConfigError, EvolutionRun, NullObserver, RoundObserver, RoundOutcome, RunConfig, RunError,
        RunSummary, Trajectory,
    };

    pub use rookery_colony::{ColonyConfig, ColonyLayout, LayoutError};
}
