//! Benchmark profiles for the Rookery simulation.
//!
//! - [`sweep_profile`]: a grid of `(x0, T)` starting points covering the
//!   presentation ranges
//! - [`long_profile`]: a single run far longer than any interactive one

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rookery_engine::{RunConfig, INITIAL_PROPORTION_RANGE, WAITING_COST_RANGE};

/// `steps x steps` configs spread evenly over the initial-proportion and
/// waiting-cost ranges, each running `rounds` rounds.
pub fn sweep_profile(steps: u32, rounds: u32) -> Vec<RunConfig> {
    let steps = steps.max(2);
    let span = |lo: f64, hi: f64, i: u32| lo + (hi - lo) * f64::from(i) / f64::from(steps - 1);
    let (x_lo, x_hi) = (*INITIAL_PROPORTION_RANGE.start(), *INITIAL_PROPORTION_RANGE.end());
    let (t_lo, t_hi) = (*WAITING_COST_RANGE.start(), *WAITING_COST_RANGE.end());

    (0..steps)
        .flat_map(|i| {
            (0..steps).map(move |j| {
                RunConfig::new(span(x_lo, x_hi, i), span(t_lo, t_hi, j), rounds)
            })
        })
        .collect()
}

/// Canonical starting point run for 100K rounds.
pub fn long_profile() -> RunConfig {
    RunConfig::new(0.3, 3.0, 100_000)
}
