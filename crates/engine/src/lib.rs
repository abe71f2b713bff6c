//! Azul Rules Engine
//!
//! A forward model for the Azul tile-drafting game: set up a game, list the
//! legal moves for a player, apply one, and read back scores and the winner.
//! Core object is a single `GameState` (plain data owning its RNG stream).
//! The free functions below are the whole public surface a search or
//! learning agent needs; the per-entity types behind them are re-exported
//! for inspection.
//!
//! ```
//! use azul_rules_engine::{enumerate_actions, execute, setup, Action};
//!
//! let mut state = setup(2, 7).unwrap();
//! let moves = enumerate_actions(&state, 0);
//! assert!(matches!(moves[0], Action::Draft(_)));
//! execute(&mut state, moves[0]).unwrap();
//! assert_eq!(state.current_player(), 1);
//! ```

pub mod action;
pub mod config;
pub mod error;
pub mod grid;
pub mod penalty;
pub mod player;
pub mod pool;
pub mod reservoir;
pub mod round;
pub mod rules;
pub mod scoring;
pub mod staging;
pub mod state;
pub mod summary;
pub mod supply;
pub mod tile;

pub use action::{Action, Destination, Draft, PlayerId, Source};
pub use config::{ConfigError, GameConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use error::IllegalAction;
pub use grid::{column_for, ScoringGrid, WALL_PATTERN};
pub use penalty::{floor_penalty, PenaltyTrack, FLOOR_CAPACITY, FLOOR_PENALTY};
pub use player::PlayerBoard;
pub use pool::SharedPool;
pub use reservoir::TileReservoir;
pub use round::{Placement, PlayerRoundReport, RoundReport};
pub use rules::{enumerate_actions, execute};
pub use scoring::{end_game_bonus, heuristic_score, placement_score, results, PlayerResult};
pub use staging::StagingLine;
pub use state::{assert_tile_invariants, EndReason, GameState, Phase};
pub use summary::{summary, GameSummary, PlayerSummary};
pub use supply::{supply_count, Supply, SUPPLY_CAPACITY};
pub use tile::{Color, Piece, ALL_COLORS, BOARD_SIZE, TILE_COLORS};

/// New game with the standard rules.
pub fn setup(player_count: u8, seed: u64) -> Result<GameState, ConfigError> {
    GameState::new(GameConfig::default(), player_count, seed)
}

pub fn setup_with_config(
    config: &GameConfig,
    player_count: u8,
    seed: u64,
) -> Result<GameState, ConfigError> {
    GameState::new(config.clone(), player_count, seed)
}

pub fn is_game_over(state: &GameState) -> bool {
    state.is_game_over()
}

/// Top scorers once the game is over (several on a tie); empty before that.
pub fn winner(state: &GameState) -> Vec<PlayerId> {
    scoring::winners(state)
}

/// Panics if `player` is out of range.
pub fn score(state: &GameState, player: PlayerId) -> i32 {
    state.player(player).score()
}

pub fn phase(state: &GameState) -> Phase {
    state.phase()
}

/// Copy of `state` for search; see [`GameState::clone_for_player`].
pub fn clone_for_player(state: &GameState, viewer: Option<PlayerId>) -> GameState {
    state.clone_for_player(viewer)
}
