//! The game orchestrator.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::active::ActiveCube;
use crate::board::Board;
use crate::core::{
    Cube, Direction, GameConfig, GameRng, GameSettings, Player, PlayerId, Position, RandomSource, COMBO_MULTIPLIER,
    MAX_ITERATIONS,
};
use crate::error::ConfigError;
use crate::mechanics::{combo, physics, Combo};
use crate::players::PlayerManager;
use crate::scores::ScoreEntry;

/// Overall game status. `Win` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    Playing,
    Win,
}

/// One game instance: board, in-flight cube, roster and status.
///
/// Every command is total. Rejected commands return `false` (or do nothing)
/// instead of failing; only construction can error.
///
/// A `Game` is meant to be owned by a single session and driven one command
/// at a time. Randomness comes exclusively from the injected source.
///
/// ```
/// use slide_lama::{Game, GameRng, GameState};
///
/// let mut game = Game::new(8, 8, 2, 1000, GameRng::new(7)).unwrap();
/// assert!(game.validate_integrity());
///
/// game.add_cube();
/// assert!(game.has_active_cube());
/// assert!(game.commit_cube());
/// while game.settle_once() {}
///
/// assert!(game.validate_integrity());
/// assert_eq!(game.game_state(), GameState::Playing);
/// ```
#[derive(Clone, Debug)]
pub struct Game<R = GameRng> {
    settings: GameSettings,
    board: Board,
    active: ActiveCube,
    players: PlayerManager,
    state: GameState,
    rng: R,
}

impl<R: RandomSource> Game<R> {
    /// Build and stabilize a game with the given playable size.
    pub fn new(rows: i32, columns: i32, players: i32, win_score: i64, rng: R) -> Result<Self, ConfigError> {
        Self::with_config(GameConfig::new(rows, columns, players, win_score), rng)
    }

    /// Build and stabilize a game from a raw configuration.
    pub fn with_config(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        Ok(Self::with_settings(config.validate()?, rng))
    }

    /// Build from already validated settings.
    ///
    /// The random fill is stabilized (settled and topped up) before play
    /// starts. Points scored by that pass are discarded.
    pub fn with_settings(settings: GameSettings, rng: R) -> Self {
        let mut game = Self {
            settings,
            board: Board::new(settings),
            active: ActiveCube::new(),
            players: PlayerManager::new(settings.player_count()),
            state: GameState::Playing,
            rng,
        };

        game.board.initialize(&mut game.rng);
        game.stabilize();
        game.players.reset_current_stats();
        game.state = GameState::Playing;

        tracing::debug!(
            rows = settings.row_count(),
            columns = settings.column_count(),
            players = settings.player_count(),
            win_score = settings.win_score(),
            "game ready"
        );
        game
    }

    pub(crate) fn from_parts(
        settings: GameSettings,
        board: Board,
        active: ActiveCube,
        players: PlayerManager,
        state: GameState,
        rng: R,
    ) -> Self {
        Self {
            settings,
            board,
            active,
            players,
            state,
            rng,
        }
    }

    // === Commands ===

    /// Spawn a new cube at the entry cell.
    ///
    /// If a cube was spawned before, the turn passes to the next player first.
    /// The (new) current player's turn counter is incremented.
    pub fn add_cube(&mut self) -> Position {
        if self.active.has_position() {
            self.players.switch_to_next();
        }
        let entry = self.active.spawn(&mut self.board, &mut self.rng);
        self.players.add_turn();
        entry
    }

    /// Move the active cube to any enterable cell.
    pub fn move_current_cube(&mut self, row: i32, column: i32) -> bool {
        self.active.try_move_to(&mut self.board, Position::new(row, column))
    }

    /// Move the active cube one cell in `direction`.
    pub fn nudge_cube(&mut self, direction: Direction) -> bool {
        self.active.nudge(&mut self.board, direction)
    }

    /// Slide the active cube from the border into the field.
    ///
    /// Does not settle the board. Refused once the game is won.
    pub fn commit_cube(&mut self) -> bool {
        if self.state == GameState::Win {
            return false;
        }
        self.active.commit(&mut self.board)
    }

    /// Alternate gravity and combo removal until the field is stable.
    ///
    /// Each combo awards its value times ten to the current player. Stops
    /// after an iteration with no drop and no combo, or after
    /// [`MAX_ITERATIONS`]. Returns whether any iteration dropped or removed a
    /// cube, which tells the caller whether it is worth refilling and
    /// settling again.
    #[instrument(level = "debug", skip(self))]
    pub fn settle_once(&mut self) -> bool {
        let mut changed = false;

        for iteration in 0..MAX_ITERATIONS {
            let dropped = physics::drop_all(&mut self.board);
            let combo = combo::find_and_remove(&mut self.board);

            if let Some(combo) = &combo {
                self.process_combo(combo);
            }
            if !dropped && combo.is_none() {
                tracing::trace!(iterations = iteration + 1, "board settled");
                return changed;
            }
            changed = true;
        }

        tracing::warn!(iterations = MAX_ITERATIONS, "settle loop hit its iteration cap");
        changed
    }

    /// Settle, refill empty playable cells, and repeat while settling changed
    /// anything. Returns the number of rounds that changed the board.
    pub fn stabilize(&mut self) -> usize {
        for round in 0..MAX_ITERATIONS {
            if !self.settle_once() {
                return round;
            }
            self.board.fill_empty_playable_cells(&mut self.rng);
        }
        tracing::warn!(rounds = MAX_ITERATIONS, "stabilization hit its round cap");
        MAX_ITERATIONS
    }

    /// Apply gravity repeatedly until nothing moves (bounded).
    pub fn force_drop_all(&mut self) -> bool {
        physics::force_drop_all(&mut self.board)
    }

    fn process_combo(&mut self, combo: &Combo) {
        if self.state == GameState::Win {
            return;
        }

        let points = i64::from(combo.value) * COMBO_MULTIPLIER;
        self.players.add_score(points);
        tracing::debug!(
            player = %self.players.current(),
            value = combo.value,
            orientation = ?combo.orientation,
            points,
            "combo scored"
        );

        if self.players.check_win(self.settings.win_score()) {
            self.state = GameState::Win;
            tracing::info!(
                player = %self.players.current(),
                score = self.players.current_player().score,
                "game won"
            );
        }
    }

    // === Queries ===

    /// Cube at a grid cell, `None` when off the grid.
    #[must_use]
    pub fn cube_at(&self, row: i32, column: i32) -> Option<Cube> {
        self.board.get(Position::new(row, column))
    }

    /// Whether a spawned cube is still in flight.
    #[must_use]
    pub fn has_active_cube(&self) -> bool {
        self.active.cube(&self.board).is_some()
    }

    /// Value of the in-flight cube, 0 when there is none.
    #[must_use]
    pub fn active_cube_value(&self) -> u8 {
        self.active.cube(&self.board).map_or(0, Cube::value)
    }

    /// Last known position of the player's cube.
    #[must_use]
    pub fn active_position(&self) -> Option<Position> {
        self.active.position()
    }

    /// Whether the active cube could move to this cell.
    #[must_use]
    pub fn can_move_to(&self, row: i32, column: i32) -> bool {
        self.board.can_enter(Position::new(row, column))
    }

    /// Whether the active cube sits on a border cell it can be launched from.
    #[must_use]
    pub fn can_commit(&self) -> bool {
        self.state == GameState::Playing && self.active.can_commit(&self.board)
    }

    /// The current player's score after the turn penalty.
    #[must_use]
    pub fn current_player_score(&self) -> i64 {
        self.players.current_score_display()
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.players.current()
    }

    /// Counters of one player, `None` outside the roster.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.player(id)
    }

    /// Every player in roster order.
    pub fn players(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players.players()
    }

    /// Playing or won.
    #[must_use]
    pub fn game_state(&self) -> GameState {
        self.state
    }

    /// Every cell a cube could currently move into.
    pub fn valid_moves(&self) -> impl Iterator<Item = Position> + '_ {
        self.board.valid_moves()
    }

    /// Whether no playable cube floats above an empty cell.
    #[must_use]
    pub fn validate_integrity(&self) -> bool {
        self.board.validate_integrity()
    }

    /// Board geometry and rules.
    #[must_use]
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// Read-only view of the grid.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// A score-table entry for the current player.
    #[must_use]
    pub fn score_entry(&self, player_name: impl Into<String>) -> ScoreEntry {
        ScoreEntry::new(player_name, self.current_player_score())
    }

    pub(crate) fn roster(&self) -> &PlayerManager {
        &self.players
    }

    /// Give back the random source.
    pub fn into_rng(self) -> R {
        self.rng
    }
}
