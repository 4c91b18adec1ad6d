//! Match detection: three equal non-empty cubes in a line.
//!
//! The scan visits playable cells row by row, top to bottom and left to right.
//! At each cell the vertical triple (the cell and the two below) is tested
//! before the horizontal triple (the cell and the two to its right), and the
//! first hit wins. Only that one triple is removed per call; a longer run is
//! cleared three cells at a time over successive settle iterations.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{Cube, Position};

/// Line direction of a combo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A detected triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combo {
    /// Shared cube value.
    pub value: u8,
    /// The matched cells, in scan order.
    pub positions: [Position; 3],
    pub orientation: Orientation,
}

/// The first combo in scan order, if any.
#[must_use]
pub fn find(board: &Board) -> Option<Combo> {
    let settings = board.settings();
    let last_row = settings.row_count() - 1;
    let last_playable_column = settings.playable_columns().end - 1;

    for row in settings.playable_rows() {
        for column in settings.playable_columns() {
            let origin = Position::new(row, column);

            if row + 2 <= last_row {
                let triple = [origin, Position::new(row + 1, column), Position::new(row + 2, column)];
                if let Some(combo) = match_triple(board, triple, Orientation::Vertical) {
                    return Some(combo);
                }
            }

            if column + 2 <= last_playable_column {
                let triple = [origin, Position::new(row, column + 1), Position::new(row, column + 2)];
                if let Some(combo) = match_triple(board, triple, Orientation::Horizontal) {
                    return Some(combo);
                }
            }
        }
    }

    None
}

/// Empty the three cells of `combo`.
pub fn remove(board: &mut Board, combo: &Combo) {
    for &position in &combo.positions {
        board.set(position, Cube::EMPTY);
    }
}

/// [`find`] then [`remove`].
pub fn find_and_remove(board: &mut Board) -> Option<Combo> {
    let combo = find(board)?;
    remove(board, &combo);
    Some(combo)
}

fn match_triple(board: &Board, positions: [Position; 3], orientation: Orientation) -> Option<Combo> {
    let [a, b, c] = positions.map(|p| board.value_at(p));
    if a.is_empty() || a != b || b != c {
        return None;
    }
    Some(Combo {
        value: a.value(),
        positions,
        orientation,
    })
}
