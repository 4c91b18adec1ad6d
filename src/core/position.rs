//! Grid coordinates and movement directions.
//!
//! Coordinates are signed so that callers can pass arbitrary input (including
//! negative values) to the command surface; such positions simply fail every
//! validity check. [`Position::INVALID`] is the "no position" sentinel and is
//! never used to index the grid.

use serde::{Deserialize, Serialize};

/// A zero-based (row, column) pair on the internal grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub column: i32,
}

impl Position {
    /// Sentinel carrying no grid meaning.
    pub const INVALID: Position = Position { row: -1, column: -1 };

    #[must_use]
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// True when both coordinates are non-negative.
    ///
    /// This does not check the upper bounds; use
    /// [`GameSettings::is_valid_position`](super::GameSettings::is_valid_position) for that.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.row >= 0 && self.column >= 0
    }

    /// The neighbouring position one step in `direction`.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dr, dc) = direction.delta();
        Self {
            row: self.row + dr,
            column: self.column + dc,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, column): (i32, i32)) -> Self {
        Self { row, column }
    }
}

/// One of the four grid directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Left, Direction::Right, Direction::Up, Direction::Down];

    /// (row, column) offset of a single step.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
        }
    }
}
