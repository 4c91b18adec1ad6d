//! The value held by a single grid cell.

use serde::{Deserialize, Serialize};

use super::config::{MAX_CUBE_VALUE, MIN_CUBE_VALUE};

/// A cell value: 0 is empty, 1-6 is a numbered tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cube(pub u8);

impl Cube {
    pub const EMPTY: Cube = Cube(0);

    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True for empty cells and the six tile values.
    #[must_use]
    pub const fn is_in_range(self) -> bool {
        self.0 == 0 || (self.0 >= MIN_CUBE_VALUE && self.0 <= MAX_CUBE_VALUE)
    }
}

impl std::fmt::Display for Cube {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
