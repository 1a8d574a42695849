//! Strongly-typed identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Monotonically increasing round counter.
///
/// Round 0 is the initial state of a run; round `n` is the state after
/// the `n`-th update has been applied.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct RoundId(pub u32);

impl RoundId {
    /// The round before any update has been applied.
    pub const INITIAL: RoundId = RoundId(0);

    /// The round that follows this one.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for RoundId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
