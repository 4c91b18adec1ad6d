//! Error types.
//!
//! Only construction and snapshot restore can fail. Every in-game command is
//! total and reports rejection through its return value instead.

/// Errors raised while validating a game configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: i64 },

    #[error("at most 255 players supported, got {0}")]
    TooManyPlayers(i32),

    #[error("a {rows}x{columns} field does not fit the grid index range")]
    TooLarge { rows: i32, columns: i32 },
}

/// Errors raised while rebuilding a game from a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("board shape {rows}x{columns} does not match expected {expected_rows}x{expected_columns}")]
    Shape {
        rows: usize,
        columns: usize,
        expected_rows: usize,
        expected_columns: usize,
    },

    #[error("cube value {value} at ({row}, {column}) is out of range")]
    CubeValue { row: usize, column: usize, value: u8 },

    #[error("snapshot holds {found} players, configuration expects {expected}")]
    PlayerCount { found: usize, expected: usize },

    #[error("current player index {0} is out of range")]
    CurrentPlayer(usize),

    #[error("active position {0} is not on the board")]
    ActivePosition(crate::core::Position),

    #[error("encoding error: {0}")]
    Encode(#[from] bincode::Error),
}
