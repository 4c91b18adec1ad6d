//! Scenario tests for the game surface.
//!
//! Boards are set up through snapshots so each test controls the exact
//! cell layout.

use std::collections::VecDeque;

use slide_lama::core::GameRng;
use slide_lama::mechanics::combo;
use slide_lama::{
    Board, Cube, Direction, Game, GameConfig, GameSettings, GameSnapshot, GameState, MemoryScoreStore, Orientation,
    Player, PlayerId, Position, RandomSource, ScoreStore,
};

/// Plays back a fixed list of draws, then keeps returning the minimum.
struct ScriptedRng(VecDeque<i32>);

impl ScriptedRng {
    fn new(draws: &[i32]) -> Self {
        Self(draws.iter().copied().collect())
    }
}

impl RandomSource for ScriptedRng {
    fn next(&mut self, min: i32, _max_exclusive: i32) -> i32 {
        self.0.pop_front().unwrap_or(min)
    }
}

/// A snapshot of a fresh two-player game with the given internal cells.
fn snapshot_with(config: GameConfig, cells: Vec<Vec<u8>>) -> GameSnapshot {
    GameSnapshot {
        config,
        cells,
        active: None,
        players: vec![Player::default(); config.players as usize],
        current_player: 0,
        state: GameState::Playing,
    }
}

/// 3x3 playable field whose first column is a vertical triple of twos.
fn triple_cells() -> Vec<Vec<u8>> {
    vec![
        vec![0, 0, 0, 0, 0],
        vec![0, 2, 1, 3, 0],
        vec![0, 2, 3, 1, 0],
        vec![0, 2, 1, 3, 0],
    ]
}

/// A vertical triple ahead of a horizontal one in scan order is found first.
#[test]
fn test_vertical_combo_wins_scan_order() {
    let settings = GameSettings::new(6, 6, 2, 1000).unwrap();
    let mut rows = vec![vec![0u8; 8]; 7];
    for row in 1..=3 {
        rows[row][2] = 3;
    }
    for column in 3..=5 {
        rows[1][column] = 4;
    }
    let board = Board::from_rows(settings, &rows).unwrap();

    let found = combo::find(&board).unwrap();
    assert_eq!(found.orientation, Orientation::Vertical);
    assert_eq!(found.value, 3);
    assert_eq!(
        found.positions,
        [Position::new(1, 2), Position::new(2, 2), Position::new(3, 2)]
    );
}

/// Displayed score subtracts five points per turn, floored at zero.
#[test]
fn test_turn_penalty_score() {
    let mut snapshot = snapshot_with(GameConfig::new(3, 3, 2, 1000), triple_cells());
    snapshot.players[0] = Player { score: 100, turns: 12 };
    let game = Game::restore(&snapshot, GameRng::new(1)).unwrap();
    assert_eq!(game.current_player_score(), 40);

    snapshot.players[0].turns = 30;
    let game = Game::restore(&snapshot, GameRng::new(1)).unwrap();
    assert_eq!(game.current_player_score(), 0);
}

/// A combo reaching the win score ends the game on the same settle.
#[test]
fn test_win_transition() {
    let snapshot = snapshot_with(GameConfig::new(3, 3, 2, 20), triple_cells());
    let mut game = Game::restore(&snapshot, GameRng::new(1)).unwrap();
    assert_eq!(game.game_state(), GameState::Playing);

    assert!(game.settle_once());
    assert_eq!(game.game_state(), GameState::Win);
    assert_eq!(game.player(PlayerId::new(0)).unwrap().score, 20);
    for row in 1..=3 {
        assert_eq!(game.cube_at(row, 1), Some(Cube::EMPTY));
    }

    // Non-scoring commands keep the game won
    let entry = game.add_cube();
    assert_eq!(entry, Position::new(0, 2));
    assert!(game.has_active_cube());
    assert!(!game.can_commit());
    assert!(!game.commit_cube());
    assert!(game.move_current_cube(0, 3));
    assert!(!game.settle_once());
    assert_eq!(game.game_state(), GameState::Win);
}

/// A full scripted turn: spawn, commit, settle, score, win.
#[test]
fn test_scripted_turn_scores_and_wins() {
    // 1x3 field: initial fill 3 2 3, then the spawned cube is a 3
    let mut game = Game::new(1, 3, 1, 30, ScriptedRng::new(&[3, 2, 3, 3])).unwrap();
    assert_eq!(game.game_state(), GameState::Playing);

    assert_eq!(game.add_cube(), Position::new(0, 2));
    assert_eq!(game.active_cube_value(), 3);
    assert!(game.commit_cube());
    // The pushed 2 falls off the bottom of the column
    assert_eq!(game.cube_at(1, 2), Some(Cube::new(3)));

    assert!(game.settle_once());
    assert_eq!(game.game_state(), GameState::Win);
    assert_eq!(game.player(PlayerId::new(0)).unwrap().score, 30);
    assert_eq!(game.current_player_score(), 25);
    assert!((1..=3).all(|column| game.cube_at(1, column) == Some(Cube::EMPTY)));
}

/// Combos still clear after a win but award nothing.
#[test]
fn test_no_points_after_win() {
    let mut snapshot = snapshot_with(GameConfig::new(3, 3, 2, 20), triple_cells());
    snapshot.state = GameState::Win;
    let mut game = Game::restore(&snapshot, GameRng::new(1)).unwrap();

    assert!(game.settle_once());
    assert_eq!(game.cube_at(1, 1), Some(Cube::EMPTY));
    assert_eq!(game.player(PlayerId::new(0)).unwrap().score, 0);
    assert_eq!(game.game_state(), GameState::Win);
}

/// A settle pass that hits the iteration cap stops with a partial result.
#[test]
fn test_settle_stops_at_iteration_cap() {
    // One playable column of 180 ones: 60 stacked vertical triples
    let mut cells = vec![vec![0, 1, 0]; 181];
    cells[0] = vec![0, 0, 0];
    let snapshot = snapshot_with(GameConfig::new(180, 1, 1, 1_000_000), cells);
    let mut game = Game::restore(&snapshot, GameRng::new(1)).unwrap();
    let cubes_left = |game: &Game| (1..=180).filter(|&row| game.cube_at(row, 1) != Some(Cube::EMPTY)).count();

    assert!(game.settle_once());
    assert_eq!(game.player(PlayerId::new(0)).unwrap().score, 500);
    assert_eq!(cubes_left(&game), 30);
    assert_eq!(game.game_state(), GameState::Playing);

    assert!(game.settle_once());
    assert_eq!(game.player(PlayerId::new(0)).unwrap().score, 600);
    assert_eq!(cubes_left(&game), 0);
    assert!(!game.settle_once());
}

/// Settling a settled board reports no change and leaves it untouched.
#[test]
fn test_settle_is_idempotent_on_settled_board() {
    for seed in 0..10 {
        let mut game = Game::new(8, 8, 2, 1000, GameRng::new(seed)).unwrap();
        let before = game.snapshot();
        assert!(!game.settle_once());
        assert_eq!(game.snapshot(), before);
    }
}

/// Every spawn lands on the empty center cell of the top row.
#[test]
fn test_entry_is_center_of_top_row() {
    let mut game = Game::new(8, 8, 2, 1000, GameRng::new(2024)).unwrap();
    let entry = Position::new(0, 4);
    assert_eq!(game.settings().center_entry_position(), entry);

    for _ in 0..12 {
        if game.game_state() == GameState::Win {
            break;
        }
        assert_eq!(game.cube_at(entry.row, entry.column), Some(Cube::EMPTY));
        assert_eq!(game.add_cube(), entry);
        assert!(game.commit_cube());
        game.settle_once();
        assert!(game.validate_integrity());
    }
}

/// Each spawn after the first passes the turn to the next player.
#[test]
fn test_turns_rotate_round_robin() {
    let mut game = Game::new(5, 5, 3, 1_000_000, GameRng::new(9)).unwrap();

    for turn in 0..7u8 {
        game.add_cube();
        assert_eq!(game.current_player(), PlayerId::new(turn % 3));
        game.commit_cube();
        game.settle_once();
    }

    let turns: Vec<u32> = game.players().map(|(_, p)| p.turns).collect();
    assert_eq!(turns, [3, 2, 2]);
}

/// A cube walked to the left border pushes its row to the right.
#[test]
fn test_side_commit_after_walking_the_border() {
    let mut game = Game::new(4, 4, 1, 1_000_000, GameRng::new(5)).unwrap();
    game.add_cube();
    let value = game.active_cube_value();

    // Walk the top row to the left edge, then down the left column
    assert!(game.nudge_cube(Direction::Left));
    assert!(!game.nudge_cube(Direction::Left));
    assert!(game.move_current_cube(3, 0));
    assert!(game.can_commit());
    assert!(game.commit_cube());

    assert_eq!(game.cube_at(3, 0), Some(Cube::EMPTY));
    assert_eq!(game.cube_at(3, 1), Some(Cube::new(value)));
    assert!(!game.has_active_cube());
}

/// Finished games report display scores to a score table.
#[test]
fn test_scores_feed_a_store() {
    let mut store = MemoryScoreStore::new();
    for (seed, name) in [(1, "ann"), (2, "bob")] {
        let mut game = Game::new(6, 6, 1, 1_000_000, GameRng::new(seed)).unwrap();
        for _ in 0..5 {
            game.add_cube();
            game.commit_cube();
            game.settle_once();
        }
        store.add(game.score_entry(name));
    }

    let top = store.top(2);
    assert_eq!(top.len(), 2);
    assert!(top[0].points >= top[1].points);
}

/// Equal seeds and commands give equal games.
#[test]
fn test_seeded_games_are_reproducible() {
    let play = |seed| {
        let mut game = Game::new(7, 7, 2, 1000, GameRng::new(seed)).unwrap();
        for _ in 0..10 {
            game.add_cube();
            game.commit_cube();
            game.settle_once();
        }
        game.snapshot()
    };

    assert_eq!(play(77), play(77));
}
