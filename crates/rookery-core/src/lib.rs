//! Core types and dynamics for the Rookery penguin evolution simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! replicator-style update between the two strategies of the colony
//! (Jumpers and Waiters), the closed-form rest point, and the small set of
//! identifiers shared by the rest of the workspace.
//!
//! Everything here is pure: no allocation, no I/O, no randomness.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dynamics;
pub mod id;
pub mod strategy;

pub use dynamics::{
    advance, advance_clamped, clamp_proportion, fixed_point, gap, target, DENOMINATOR_POLE, STEP,
};
pub use id::RoundId;
pub use strategy::Strategy;
