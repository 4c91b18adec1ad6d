//! Game configuration and board geometry.
//!
//! Callers describe a game with a [`GameConfig`] (the playable size as seen by
//! a player, the roster size and the winning score). Validating it yields the
//! immutable [`GameSettings`] that every engine component reads:
//!
//! - the internal grid adds one border row on top and one border column on
//!   each side of the playable field
//! - the playable field is `[1, row_count) x [1, column_count - 1)`
//! - the four grid corners are never playable and never enterable
//! - the remaining top row and side columns form the border ring where cubes
//!   enter and queue before being committed

use serde::{Deserialize, Serialize};

use super::Position;
use crate::error::ConfigError;

/// Cap on settle iterations (and on construction-time stabilization rounds).
pub const MAX_ITERATIONS: usize = 50;
/// Cap on repeated gravity passes in a forced drop.
pub const FORCE_DROP_ITERATIONS: usize = 20;
/// Smallest cube value.
pub const MIN_CUBE_VALUE: u8 = 1;
/// Largest cube value.
pub const MAX_CUBE_VALUE: u8 = 6;
/// Display-score deduction per recorded turn.
pub const TURN_PENALTY: i64 = 5;
/// Points per unit of combo value.
pub const COMBO_MULTIPLIER: i64 = 10;

/// User-facing game configuration.
///
/// ```
/// use slide_lama::core::GameConfig;
///
/// let settings = GameConfig::default()
///     .with_size(6, 5)
///     .with_players(3)
///     .validate()
///     .unwrap();
///
/// assert_eq!(settings.row_count(), 7);
/// assert_eq!(settings.column_count(), 7);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Playable rows.
    pub rows: i32,
    /// Playable columns.
    pub columns: i32,
    /// Number of players.
    pub players: i32,
    /// Raw score a player needs to win.
    pub win_score: i64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 8,
            columns: 8,
            players: 2,
            win_score: 1000,
        }
    }
}

impl GameConfig {
    /// A raw configuration; nothing is checked until [`validate`](Self::validate).
    pub fn new(rows: i32, columns: i32, players: i32, win_score: i64) -> Self {
        Self {
            rows,
            columns,
            players,
            win_score,
        }
    }

    /// Set the playable size.
    #[must_use]
    pub fn with_size(mut self, rows: i32, columns: i32) -> Self {
        self.rows = rows;
        self.columns = columns;
        self
    }

    /// Set the roster size.
    #[must_use]
    pub fn with_players(mut self, players: i32) -> Self {
        self.players = players;
        self
    }

    /// Set the raw score that ends the game.
    #[must_use]
    pub fn with_win_score(mut self, win_score: i64) -> Self {
        self.win_score = win_score;
        self
    }

    /// Check every value and derive the board geometry.
    ///
    /// Fails on non-positive values, more than 255 players, or a field whose
    /// internal grid has more than `i32::MAX` cells.
    pub fn validate(&self) -> Result<GameSettings, ConfigError> {
        let checks = [
            ("rows", i64::from(self.rows)),
            ("columns", i64::from(self.columns)),
            ("players", i64::from(self.players)),
            ("win_score", self.win_score),
        ];
        for (field, value) in checks {
            if value <= 0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if self.players > 255 {
            return Err(ConfigError::TooManyPlayers(self.players));
        }

        // Every row-major offset must fit in an i32
        let too_large = ConfigError::TooLarge {
            rows: self.rows,
            columns: self.columns,
        };
        let row_count = self.rows.checked_add(1).ok_or_else(|| too_large.clone())?;
        let column_count = self.columns.checked_add(2).ok_or_else(|| too_large.clone())?;
        row_count.checked_mul(column_count).ok_or(too_large)?;

        Ok(GameSettings {
            config: *self,
            row_count,
            column_count,
        })
    }
}

/// Validated, immutable board geometry.
///
/// Serializes as the [`GameConfig`] it was built from and re-validates when
/// deserialized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameConfig", into = "GameConfig")]
pub struct GameSettings {
    config: GameConfig,
    row_count: i32,
    column_count: i32,
}

impl GameSettings {
    /// Shorthand for `GameConfig::new(..).validate()`.
    pub fn new(rows: i32, columns: i32, players: i32, win_score: i64) -> Result<Self, ConfigError> {
        GameConfig::new(rows, columns, players, win_score).validate()
    }

    /// The configuration these settings were derived from.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Internal row count, border included.
    #[must_use]
    pub fn row_count(&self) -> i32 {
        self.row_count
    }

    /// Internal column count, borders included.
    #[must_use]
    pub fn column_count(&self) -> i32 {
        self.column_count
    }

    /// Roster size.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.config.players as usize
    }

    /// Raw score that ends the game.
    #[must_use]
    pub fn win_score(&self) -> i64 {
        self.config.win_score
    }

    /// Rows of the playable field, top to bottom.
    pub fn playable_rows(&self) -> std::ops::Range<i32> {
        1..self.row_count
    }

    /// Columns of the playable field, left to right.
    pub fn playable_columns(&self) -> std::ops::Range<i32> {
        1..self.column_count - 1
    }

    /// Whether `position` lies on the internal grid.
    #[must_use]
    pub fn is_valid_position(&self, position: Position) -> bool {
        (0..self.row_count).contains(&position.row) && (0..self.column_count).contains(&position.column)
    }

    /// Whether `position` lies in the playable field.
    #[must_use]
    pub fn is_playable(&self, position: Position) -> bool {
        self.playable_rows().contains(&position.row) && self.playable_columns().contains(&position.column)
    }

    /// One of the four grid corners, which never hold a cube.
    #[must_use]
    pub fn is_corner(&self, position: Position) -> bool {
        let last_row = self.row_count - 1;
        let last_column = self.column_count - 1;
        (position.row == 0 || position.row == last_row)
            && (position.column == 0 || position.column == last_column)
    }

    /// Non-corner cell of the top row or a side column.
    #[must_use]
    pub fn is_border(&self, position: Position) -> bool {
        if !self.is_valid_position(position) || self.is_corner(position) {
            return false;
        }
        position.row == 0 || position.column == 0 || position.column == self.column_count - 1
    }

    /// Where new cubes enter: the middle of the top border row.
    #[must_use]
    pub fn center_entry_position(&self) -> Position {
        Position::new(0, (self.column_count - 1) / 2)
    }

    /// Row-major offset of a position, `None` when off the grid.
    #[must_use]
    pub fn index(&self, position: Position) -> Option<usize> {
        if !self.is_valid_position(position) {
            return None;
        }
        Some((position.row * self.column_count + position.column) as usize)
    }

    /// Number of cells on the internal grid.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        (self.row_count * self.column_count) as usize
    }
}

impl TryFrom<GameConfig> for GameSettings {
    type Error = ConfigError;

    fn try_from(config: GameConfig) -> Result<Self, Self::Error> {
        config.validate()
    }
}

impl From<GameSettings> for GameConfig {
    fn from(settings: GameSettings) -> Self {
        settings.config
    }
}
