//! Test utilities and fixtures for Rookery development.
//!
//! Provides a [`RecordingObserver`] that captures every callback of a run,
//! canonical [`RunConfig`]s for the scenarios the test suites share, and
//! float assertion helpers.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    assert_close, canonical, cold_start, saturated, RecordedEvent, RecordingObserver,
};
