//! End-of-game (or mid-game) metrics for reporting.

use serde::Serialize;

use crate::scoring::{results, winners, PlayerResult};
use crate::state::{EndReason, GameState, Phase};
use crate::tile::BOARD_SIZE;
use crate::PlayerId;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayerSummary {
    pub player: PlayerId,
    pub score: i32,
    pub result: Option<PlayerResult>,
    /// Wall cells filled
    pub tiles_placed: usize,
    /// Completed rows, columns, color sets
    pub rows: u32,
    pub columns: u32,
    pub color_sets: u32,
    /// Fraction of the wall filled, 0.0..=1.0
    pub wall_completion: f64,
    /// Tiles on the floor line not yet scored
    pub pending_floor: u8,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameSummary {
    pub seed: u64,
    pub phase: Phase,
    pub end_reason: Option<EndReason>,
    pub rounds: u16,
    pub turns: u32,
    pub winners: Vec<PlayerId>,
    pub players: Vec<PlayerSummary>,
}

pub fn summary(state: &GameState) -> GameSummary {
    let results = results(state);
    let players = state
        .players
        .iter()
        .enumerate()
        .map(|(i, board)| {
            let grid = &board.grid;
            let tiles_placed = grid.filled_count();
            PlayerSummary {
                player: i as PlayerId,
                score: board.score,
                result: results.as_ref().map(|r| r[i]),
                tiles_placed,
                rows: grid.completed_rows(),
                columns: grid.completed_columns(),
                color_sets: grid.completed_color_sets(),
                wall_completion: tiles_placed as f64 / (BOARD_SIZE * BOARD_SIZE) as f64,
                pending_floor: board.penalty.count(),
            }
        })
        .collect();

    GameSummary {
        seed: state.seed,
        phase: state.phase,
        end_reason: state.end_reason,
        rounds: state.round,
        turns: state.turn,
        winners: winners(state),
        players,
    }
}
