//! Colony layouts for presenting a simulation state.
//!
//! Turns a Jumper proportion into a concrete colony of discrete members,
//! shuffled into a reproducible order and split into rows. This crate sits
//! downstream of the dynamics: it only ever reads a proportion.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod layout;

pub use config::{ColonyConfig, LayoutError, MAX_COLONY_SIZE};
pub use layout::{jumper_count, ColonyLayout};
