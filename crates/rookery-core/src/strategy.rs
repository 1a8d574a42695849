//! The two behavioural strategies present in the colony.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A penguin's strategy at the water's edge.
///
/// The simulation state `x` is the proportion of the colony playing
/// [`Strategy::Jumper`]; the remainder play [`Strategy::Waiter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Jumps into the water first, risking predators.
    Jumper,
    /// Waits for others to jump, paying the waiting cost `T`.
    Waiter,
}

impl Strategy {
    /// Single-character glyph used in textual colony dumps.
    pub fn glyph(self) -> char {
        match self {
            Self::Jumper => 'J',
            Self::Waiter => 'w',
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jumper => write!(f, "jumper"),
            Self::Waiter => write!(f, "waiter"),
        }
    }
}
