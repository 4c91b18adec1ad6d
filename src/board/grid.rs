//! Pre-allocated grid of cube cells.

use crate::core::{Cube, GameSettings, Position, RandomSource};
use crate::error::SnapshotError;

/// The full internal grid, border ring included.
///
/// Cells live in a single row-major `Vec` allocated once at construction.
/// Every accessor range-checks its position: off-grid reads return `None`
/// and off-grid writes are ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    settings: GameSettings,
    cells: Vec<Cube>,
}

impl Board {
    /// An all-empty board.
    #[must_use]
    pub fn new(settings: GameSettings) -> Self {
        Self {
            settings,
            cells: vec![Cube::EMPTY; settings.cell_count()],
        }
    }

    /// Rebuild a board from rows of raw values.
    pub fn from_rows(settings: GameSettings, rows: &[Vec<u8>]) -> Result<Self, SnapshotError> {
        let expected_rows = settings.row_count() as usize;
        let expected_columns = settings.column_count() as usize;
        let shape_error = || SnapshotError::Shape {
            rows: rows.len(),
            columns: rows.first().map_or(0, Vec::len),
            expected_rows,
            expected_columns,
        };

        if rows.len() != expected_rows {
            return Err(shape_error());
        }

        let mut cells = Vec::with_capacity(settings.cell_count());
        for (row, values) in rows.iter().enumerate() {
            if values.len() != expected_columns {
                return Err(SnapshotError::Shape {
                    rows: rows.len(),
                    columns: values.len(),
                    expected_rows,
                    expected_columns,
                });
            }
            for (column, &value) in values.iter().enumerate() {
                let cube = Cube::new(value);
                if !cube.is_in_range() {
                    return Err(SnapshotError::CubeValue { row, column, value });
                }
                cells.push(cube);
            }
        }

        Ok(Self { settings, cells })
    }

    /// Geometry this board was built for.
    #[must_use]
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// The cube at `position`, `None` when off the grid.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<Cube> {
        self.settings.index(position).map(|i| self.cells[i])
    }

    /// Write a cube; returns false (and writes nothing) when off the grid.
    pub fn set(&mut self, position: Position, cube: Cube) -> bool {
        match self.settings.index(position) {
            Some(i) => {
                self.cells[i] = cube;
                true
            }
            None => false,
        }
    }

    /// The cube at `position`, treating off-grid cells as empty.
    pub(crate) fn value_at(&self, position: Position) -> Cube {
        self.get(position).unwrap_or(Cube::EMPTY)
    }

    /// True for an on-grid empty cell.
    #[must_use]
    pub fn is_empty(&self, position: Position) -> bool {
        self.get(position).is_some_and(Cube::is_empty)
    }

    /// Whether a single cube may move into `position`.
    #[must_use]
    pub fn can_enter(&self, position: Position) -> bool {
        self.is_empty(position)
            && !self.settings.is_corner(position)
            && (self.settings.is_playable(position) || self.settings.is_border(position))
    }

    /// Every grid position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let columns = self.settings.column_count();
        (0..self.settings.row_count()).flat_map(move |row| (0..columns).map(move |column| Position::new(row, column)))
    }

    /// Every enterable position, recomputed on each call.
    pub fn valid_moves(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions().filter(move |&p| self.can_enter(p))
    }

    /// Rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cube]> {
        self.cells.chunks(self.settings.column_count() as usize)
    }

    /// Clear the border ring and fill the playable field with random cubes.
    pub fn initialize(&mut self, rng: &mut impl RandomSource) {
        self.cells.fill(Cube::EMPTY);
        for row in self.settings.playable_rows() {
            for column in self.settings.playable_columns() {
                self.set(Position::new(row, column), rng.next_cube());
            }
        }
    }

    /// Replace empty playable cells with random cubes, returning how many.
    pub fn fill_empty_playable_cells(&mut self, rng: &mut impl RandomSource) -> usize {
        let mut filled = 0;
        for row in self.settings.playable_rows() {
            for column in self.settings.playable_columns() {
                let position = Position::new(row, column);
                if self.is_empty(position) {
                    self.set(position, rng.next_cube());
                    filled += 1;
                }
            }
        }
        filled
    }

    /// No cube in a playable column sits above an empty playable cell.
    ///
    /// Advisory only: a `false` result is never corrected here.
    #[must_use]
    pub fn validate_integrity(&self) -> bool {
        self.settings.playable_columns().all(|column| {
            let mut found_empty = false;
            for row in self.settings.playable_rows().rev() {
                if self.value_at(Position::new(row, column)).is_empty() {
                    found_empty = true;
                } else if found_empty {
                    return false;
                }
            }
            true
        })
    }

    /// Raw values row by row, for snapshots.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows().map(|row| row.iter().map(|c| c.value()).collect()).collect()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let mut first = true;
            for cube in row {
                if !first {
                    write!(f, " ")?;
                }
                write!(f, "{cube}")?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;

    fn settings(rows: i32, columns: i32) -> GameSettings {
        GameSettings::new(rows, columns, 2, 1000).unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(settings(3, 3));
        assert!(board.positions().all(|p| board.is_empty(p)));
        assert_eq!(board.positions().count(), 4 * 5);
    }

    #[test]
    fn test_get_and_set() {
        let mut board = Board::new(settings(3, 3));
        let p = Position::new(2, 2);

        assert_eq!(board.get(p), Some(Cube::EMPTY));
        assert!(board.set(p, Cube::new(4)));
        assert_eq!(board.get(p), Some(Cube::new(4)));
        assert!(!board.is_empty(p));
    }

    #[test]
    fn test_invalid_positions_are_no_ops() {
        let mut board = Board::new(settings(3, 3));
        let before = board.clone();

        for p in [Position::INVALID, Position::new(4, 0), Position::new(0, 5), Position::new(-2, 1)] {
            assert_eq!(board.get(p), None);
            assert!(!board.set(p, Cube::new(1)));
            assert!(!board.is_empty(p));
            assert!(!board.can_enter(p));
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_can_enter() {
        let mut board = Board::new(settings(3, 3));

        assert!(board.can_enter(Position::new(0, 2)));
        assert!(board.can_enter(Position::new(2, 0)));
        assert!(board.can_enter(Position::new(2, 2)));
        assert!(!board.can_enter(Position::new(0, 0)));
        assert!(!board.can_enter(Position::new(3, 4)));

        board.set(Position::new(2, 2), Cube::new(1));
        assert!(!board.can_enter(Position::new(2, 2)));
    }

    #[test]
    fn test_valid_moves_excludes_corners_and_occupied() {
        let mut board = Board::new(settings(2, 2));
        // 3x4 grid, corners excluded: 12 - 4 = 8
        assert_eq!(board.valid_moves().count(), 8);

        board.set(Position::new(1, 1), Cube::new(2));
        let moves: Vec<_> = board.valid_moves().collect();
        assert_eq!(moves.len(), 7);
        assert!(!moves.contains(&Position::new(1, 1)));
        assert!(!moves.contains(&Position::new(0, 0)));
    }

    #[test]
    fn test_initialize_fills_only_playable() {
        let s = settings(5, 4);
        let mut board = Board::new(s);
        board.initialize(&mut GameRng::new(3));

        for p in board.positions() {
            let cube = board.get(p).unwrap();
            if s.is_playable(p) {
                assert!((1..=6).contains(&cube.value()), "playable {p} holds {cube}");
            } else {
                assert!(cube.is_empty(), "border {p} holds {cube}");
            }
        }
    }

    #[test]
    fn test_fill_empty_playable_cells() {
        let s = settings(3, 3);
        let mut board = Board::new(s);
        board.set(Position::new(3, 2), Cube::new(5));
        board.set(Position::new(0, 2), Cube::new(5));

        let filled = board.fill_empty_playable_cells(&mut GameRng::new(1));
        assert_eq!(filled, 8);
        assert_eq!(board.get(Position::new(3, 2)), Some(Cube::new(5)));
        assert_eq!(board.get(Position::new(0, 2)), Some(Cube::new(5)));
        assert!(board.is_empty(Position::new(0, 1)));
        assert_eq!(board.fill_empty_playable_cells(&mut GameRng::new(1)), 0);
    }

    #[test]
    fn test_validate_integrity() {
        let mut board = Board::new(settings(3, 3));
        assert!(board.validate_integrity());

        board.set(Position::new(3, 1), Cube::new(2));
        board.set(Position::new(2, 1), Cube::new(3));
        assert!(board.validate_integrity());

        // Floating cube over an empty cell
        board.set(Position::new(2, 3), Cube::new(4));
        assert!(!board.validate_integrity());

        // Border cells are not part of the check
        let mut border_only = Board::new(settings(3, 3));
        border_only.set(Position::new(0, 2), Cube::new(1));
        assert!(border_only.validate_integrity());
    }

    #[test]
    fn test_rows_round_trip_and_display() {
        let s = settings(1, 2);
        let mut board = Board::new(s);
        board.set(Position::new(1, 1), Cube::new(3));
        board.set(Position::new(1, 2), Cube::new(6));

        let rows = board.to_rows();
        assert_eq!(rows, vec![vec![0, 0, 0, 0], vec![0, 3, 6, 0]]);
        assert_eq!(Board::from_rows(s, &rows).unwrap(), board);
        assert_eq!(board.to_string(), "0 0 0 0\n0 3 6 0\n");
    }

    #[test]
    fn test_from_rows_rejects_bad_input() {
        let s = settings(1, 2);
        assert!(matches!(
            Board::from_rows(s, &[vec![0; 4]]),
            Err(SnapshotError::Shape { rows: 1, expected_rows: 2, .. })
        ));
        assert!(matches!(
            Board::from_rows(s, &[vec![0; 4], vec![0; 3]]),
            Err(SnapshotError::Shape { columns: 3, expected_columns: 4, .. })
        ));
        assert!(matches!(
            Board::from_rows(s, &[vec![0; 4], vec![0, 9, 0, 0]]),
            Err(SnapshotError::CubeValue { row: 1, column: 1, value: 9 })
        ));
    }
}
