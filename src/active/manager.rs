//! The single in-flight cube.

use crate::board::{self, Board};
use crate::core::{Cube, Direction, Position, RandomSource};

/// Tracks where the player's cube is.
///
/// The cube has no value of its own: its value is whatever the board holds at
/// the tracked position. The position survives a commit (the cell it points at
/// is then empty) and is only cleared by [`reset`](Self::reset).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActiveCube {
    position: Option<Position>,
}

impl ActiveCube {
    /// No cube tracked yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking an existing position.
    pub(crate) fn at(position: Option<Position>) -> Self {
        Self { position }
    }

    /// Tracked position, kept after a commit.
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// True once a cube has been spawned, even after it was committed.
    #[must_use]
    pub fn has_position(&self) -> bool {
        self.position.is_some()
    }

    /// The tracked cube if it is still on the board.
    #[must_use]
    pub fn cube(&self, board: &Board) -> Option<Cube> {
        self.position
            .and_then(|p| board.get(p))
            .filter(|cube| !cube.is_empty())
    }

    /// Place a fresh random cube at the entry cell and track it.
    ///
    /// Overwrites whatever the entry cell holds; the caller makes sure the
    /// previous cube was committed.
    pub fn spawn(&mut self, board: &mut Board, rng: &mut impl RandomSource) -> Position {
        let entry = board.settings().center_entry_position();
        let cube = rng.next_cube();
        board.set(entry, cube);
        self.position = Some(entry);
        tracing::trace!(position = %entry, value = cube.value(), "spawned cube");
        entry
    }

    /// Move the cube to any enterable cell.
    ///
    /// Returns false without mutating anything when no cube is in flight or
    /// `target` cannot be entered.
    pub fn try_move_to(&mut self, board: &mut Board, target: Position) -> bool {
        let (Some(from), Some(cube)) = (self.position, self.cube(board)) else {
            return false;
        };
        if !board.can_enter(target) {
            return false;
        }

        board.set(target, cube);
        board.set(from, Cube::EMPTY);
        self.position = Some(target);
        tracing::trace!(%from, to = %target, "moved cube");
        true
    }

    /// Move the cube one cell in `direction`.
    pub fn nudge(&mut self, board: &mut Board, direction: Direction) -> bool {
        match self.position {
            Some(from) => self.try_move_to(board, from.step(direction)),
            None => false,
        }
    }

    /// Whether the cube sits on a non-corner border cell.
    #[must_use]
    pub fn can_commit(&self, board: &Board) -> bool {
        self.commit_direction(board).is_some()
    }

    /// Launch the cube into the field by sliding its line.
    ///
    /// Top row cubes slide down, left column cubes slide right and right
    /// column cubes slide left. No-op returning false unless
    /// [`can_commit`](Self::can_commit) holds.
    pub fn commit(&self, board: &mut Board) -> bool {
        match (self.position, self.commit_direction(board)) {
            (Some(position), Some(direction)) => {
                tracing::trace!(%position, ?direction, "committing cube");
                board::slide(board, position, direction)
            }
            _ => false,
        }
    }

    /// Stop tracking any cube.
    pub fn reset(&mut self) {
        self.position = None;
    }

    fn commit_direction(&self, board: &Board) -> Option<Direction> {
        let position = self.position?;
        self.cube(board)?;

        let settings = board.settings();
        if settings.is_corner(position) {
            return None;
        }
        if position.row == 0 {
            Some(Direction::Down)
        } else if position.column == 0 {
            Some(Direction::Right)
        } else if position.column == settings.column_count() - 1 {
            Some(Direction::Left)
        } else {
            None
        }
    }
}
