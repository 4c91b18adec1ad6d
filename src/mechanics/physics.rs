//! Gravity: column-wise compaction of the playable field.

use crate::board::Board;
use crate::core::{Cube, Position, FORCE_DROP_ITERATIONS};

/// Pull the non-empty playable cells of `column` down to the bottom.
///
/// Relative order is preserved and vacated cells are emptied. Returns whether
/// any cube moved.
pub fn drop_column(board: &mut Board, column: i32) -> bool {
    let settings = *board.settings();
    if !settings.playable_columns().contains(&column) {
        return false;
    }

    let mut moved = false;
    let mut write_row = settings.row_count() - 1;

    for read_row in settings.playable_rows().rev() {
        let read = Position::new(read_row, column);
        let cube = board.value_at(read);
        if cube.is_empty() {
            continue;
        }
        if read_row != write_row {
            board.set(Position::new(write_row, column), cube);
            board.set(read, Cube::EMPTY);
            moved = true;
        }
        write_row -= 1;
    }

    moved
}

/// Apply [`drop_column`] to every playable column.
pub fn drop_all(board: &mut Board) -> bool {
    let mut moved = false;
    for column in board.settings().playable_columns() {
        moved |= drop_column(board, column);
    }
    moved
}

/// Repeat [`drop_all`] until nothing moves or the pass cap is reached.
///
/// A well-formed board settles in a single pass. Hitting the cap is logged
/// and the board is left as is. Returns whether the board came to rest.
pub fn force_drop_all(board: &mut Board) -> bool {
    for _ in 0..FORCE_DROP_ITERATIONS {
        if !drop_all(board) {
            return true;
        }
    }
    tracing::warn!(passes = FORCE_DROP_ITERATIONS, "forced drop did not converge");
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameSettings;

    fn board_from(rows: &[&[u8]]) -> Board {
        let settings = GameSettings::new(rows.len() as i32 - 1, rows[0].len() as i32 - 2, 1, 10).unwrap();
        let rows: Vec<Vec<u8>> = rows.iter().map(|r| r.to_vec()).collect();
        Board::from_rows(settings, &rows).unwrap()
    }

    fn column(board: &Board, column: usize) -> Vec<u8> {
        board.to_rows().iter().map(|r| r[column]).collect()
    }

    #[test]
    fn test_drop_column_compacts_preserving_order() {
        let mut board = board_from(&[
            &[0, 0, 0],
            &[0, 4, 0],
            &[0, 0, 0],
            &[0, 2, 0],
            &[0, 0, 0],
        ]);

        assert!(drop_column(&mut board, 1));
        assert_eq!(column(&board, 1), vec![0, 0, 0, 4, 2]);
        assert!(!drop_column(&mut board, 1));
    }

    #[test]
    fn test_drop_column_ignores_border_row() {
        let mut board = board_from(&[
            &[0, 5, 0],
            &[0, 0, 0],
            &[0, 1, 0],
        ]);

        assert!(!drop_column(&mut board, 1));
        assert_eq!(column(&board, 1), vec![5, 0, 1]);
    }

    #[test]
    fn test_drop_column_rejects_side_columns() {
        let mut board = board_from(&[
            &[0, 0, 0],
            &[3, 0, 0],
            &[0, 0, 0],
        ]);

        assert!(!drop_column(&mut board, 0));
        assert!(!drop_column(&mut board, 7));
        assert_eq!(column(&board, 0), vec![0, 3, 0]);
    }

    #[test]
    fn test_drop_all_reports_any_column() {
        let mut board = board_from(&[
            &[0, 0, 0, 0],
            &[0, 1, 2, 0],
            &[0, 3, 0, 0],
        ]);

        assert!(drop_all(&mut board));
        assert_eq!(board.to_rows(), vec![vec![0, 0, 0, 0], vec![0, 1, 0, 0], vec![0, 3, 2, 0]]);
        assert!(board.validate_integrity());
        assert!(!drop_all(&mut board));
    }

    #[test]
    fn test_force_drop_all_converges() {
        let mut board = board_from(&[
            &[0, 0, 0, 0, 0],
            &[0, 1, 2, 3, 0],
            &[0, 0, 4, 0, 0],
            &[0, 5, 0, 0, 0],
            &[0, 0, 0, 0, 0],
        ]);

        assert!(force_drop_all(&mut board));
        assert!(board.validate_integrity());
        assert_eq!(board.to_rows()[4], vec![0, 5, 4, 3, 0]);
    }
}
