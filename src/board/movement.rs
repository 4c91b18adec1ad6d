//! Border-ring sliding.
//!
//! A committed cube does not jump into the field: it pushes the line it sits
//! on. Each slide works on one whole row (left/right) or one whole column
//! (up/down) of the internal grid. The line is shifted one cell toward the
//! moving edge, but only up to the first empty cell found scanning from the
//! far side, so a push moves just the contiguous run of cubes in front of the
//! mover. When no empty cell exists the cube at the far end falls off.
//!
//! Two lines skip the empty-cell search and always shift end to end: the top
//! row for horizontal slides, and the side columns for vertical ones.
//!
//! Corners are cleared after every slide; a cube pushed into one is lost.

use crate::core::{Cube, Direction, GameSettings, Position};

use super::Board;

/// Whether a slide from `position` in `direction` is defined.
///
/// The position must be on the grid and not already on the edge it would move
/// toward.
#[must_use]
pub fn can_slide(settings: &GameSettings, position: Position, direction: Direction) -> bool {
    if !settings.is_valid_position(position) {
        return false;
    }
    match direction {
        Direction::Left => position.column > 0,
        Direction::Right => position.column < settings.column_count() - 1,
        Direction::Up => position.row > 0,
        Direction::Down => position.row < settings.row_count() - 1,
    }
}

/// Slide the line through `position` one cell toward `direction`.
///
/// Returns false without touching the board when [`can_slide`] rejects the
/// move.
pub fn slide(board: &mut Board, position: Position, direction: Direction) -> bool {
    if !can_slide(board.settings(), position, direction) {
        return false;
    }

    match direction {
        Direction::Left => shift_row_left(board, position.row),
        Direction::Right => shift_row_right(board, position.row),
        Direction::Down => shift_column_down(board, position.column),
        Direction::Up => shift_column_up(board, position.column),
    }
    clear_corners(board);

    tracing::trace!(%position, ?direction, "slid line");
    true
}

fn shift_row_left(board: &mut Board, row: i32) {
    let last = board.settings().column_count() - 1;
    let first_column = if row == 0 {
        0
    } else {
        (1..=last)
            .find(|&column| board.is_empty(Position::new(row, column)))
            .unwrap_or(0)
    };

    for column in first_column..last {
        let next = board.value_at(Position::new(row, column + 1));
        board.set(Position::new(row, column), next);
    }
    board.set(Position::new(row, last), Cube::EMPTY);
    board.set(Position::new(row, 0), Cube::EMPTY);
}

fn shift_row_right(board: &mut Board, row: i32) {
    let last = board.settings().column_count() - 1;
    let first_column = if row == 0 {
        last - 1
    } else {
        (1..last - 1)
            .rev()
            .find(|&column| board.is_empty(Position::new(row, column)))
            .map_or(last - 1, |column| column - 1)
    };

    for column in (0..=first_column).rev() {
        let previous = board.value_at(Position::new(row, column));
        board.set(Position::new(row, column + 1), previous);
    }
    board.set(Position::new(row, 0), Cube::EMPTY);
    board.set(Position::new(row, last), Cube::EMPTY);
}

fn shift_column_down(board: &mut Board, column: i32) {
    let settings = *board.settings();
    let last = settings.row_count() - 1;
    let side = column == 0 || column == settings.column_count() - 1;
    let first_row = if side {
        last
    } else {
        (1..=last)
            .rev()
            .find(|&row| board.is_empty(Position::new(row, column)))
            .unwrap_or(last)
    };

    for row in (0..first_row).rev() {
        let above = board.value_at(Position::new(row, column));
        board.set(Position::new(row + 1, column), above);
    }
    board.set(Position::new(0, column), Cube::EMPTY);
}

fn shift_column_up(board: &mut Board, column: i32) {
    let last = board.settings().row_count() - 1;

    for row in 0..last {
        let below = board.value_at(Position::new(row + 1, column));
        board.set(Position::new(row, column), below);
    }
    board.set(Position::new(last, column), Cube::EMPTY);
}

fn clear_corners(board: &mut Board) {
    let last_row = board.settings().row_count() - 1;
    let last_column = board.settings().column_count() - 1;
    for (row, column) in [(0, 0), (0, last_column), (last_row, 0), (last_row, last_column)] {
        board.set(Position::new(row, column), Cube::EMPTY);
    }
}
