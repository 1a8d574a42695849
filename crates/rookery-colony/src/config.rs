//! Colony configuration and layout errors.

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Largest colony a layout will draw.
pub const MAX_COLONY_SIZE: usize = 100_000;

/// Errors from building a [`ColonyLayout`](crate::ColonyLayout).
#[derive(Clone, Debug, PartialEq)]
pub enum LayoutError {
    /// The colony has no members.
    EmptyColony,
    /// The colony exceeds [`MAX_COLONY_SIZE`].
    ColonyTooLarge {
        /// The requested size.
        size: usize,
    },
    /// Rows must hold at least one member.
    ZeroRowWidth,
    /// The proportion to lay out is NaN.
    InvalidProportion {
        /// The invalid value.
        value: f64,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyColony => write!(f, "colony size must be at least 1"),
            Self::ColonyTooLarge { size } => {
                write!(f, "colony size {size} exceeds the maximum of {MAX_COLONY_SIZE}")
            }
            Self::ZeroRowWidth => write!(f, "row width must be at least 1"),
            Self::InvalidProportion { value } => {
                write!(f, "cannot lay out proportion {value}")
            }
        }
    }
}

impl Error for LayoutError {}

/// Shape and seed of the displayed colony.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColonyConfig {
    /// Number of penguins drawn, `1..=MAX_COLONY_SIZE`. Default: 40.
    pub size: usize,
    /// Penguins per row. Default: 10.
    pub row_width: usize,
    /// Seed for the per-round shuffle. Default: 42.
    pub seed: u64,
}

impl Default for ColonyConfig {
    fn default() -> Self {
        Self {
            size: 40,
            row_width: 10,
            seed: 42,
        }
    }
}

impl ColonyConfig {
    /// Validate all invariants.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.size == 0 {
            return Err(LayoutError::EmptyColony);
        }
        if self.size > MAX_COLONY_SIZE {
            return Err(LayoutError::ColonyTooLarge { size: self.size });
        }
        if self.row_width == 0 {
            return Err(LayoutError::ZeroRowWidth);
        }
        Ok(())
    }
}
