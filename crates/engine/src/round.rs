//! Round state machine: turn passing, end-of-round wall tiling, game end
//! detection and the refill for the next round.

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::action::PlayerId;
use crate::penalty::floor_penalty;
use crate::scoring::{apply_end_game_bonuses, placement_score};
use crate::state::{EndReason, GameState, Phase};
use crate::tile::{Color, BOARD_SIZE};

/// A tile moved from a staging line onto the wall.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
pub struct Placement {
    pub row: u8,
    pub col: u8,
    pub color: Color,
    pub points: i32,
}

/// What happened to one player during a round's resolution.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize)]
pub struct PlayerRoundReport {
    pub placements: Vec<Placement>,
    /// Floor tiles counted (0..=7)
    pub floor_tiles: u8,
    /// Penalty applied from the lookup table (zero or negative)
    pub penalty: i32,
    /// End-of-game bonus, present only after the final round
    pub bonus: Option<i32>,
    pub score_after: i32,
}

/// Summary of one resolved round.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize)]
pub struct RoundReport {
    /// 1-based number of the round that was resolved
    pub round: u16,
    pub players: Vec<PlayerRoundReport>,
    pub end: Option<EndReason>,
}

/// True once every display is empty and the pool holds no colored tile.
pub(crate) fn drafting_exhausted(state: &GameState) -> bool {
    state.supplies.iter().all(|s| s.is_empty()) && !state.pool.has_tiles()
}

/// Called after every successful draft: either pass the turn on, or run the
/// tiling phase and move to the next round or the end of the game.
pub(crate) fn finish_turn(state: &mut GameState) {
    if drafting_exhausted(state) {
        resolve_round(state);
    } else {
        state.current_player = next_player(state.current_player, state.num_players());
    }
}

fn next_player(current: PlayerId, num_players: u8) -> PlayerId {
    (current + 1) % num_players
}

#[instrument(level = "debug", skip_all, fields(round = state.round + 1))]
fn resolve_round(state: &mut GameState) {
    state.phase = Phase::Tiling;

    let mut players: Vec<PlayerRoundReport> = (0..state.players.len())
        .map(|p| tile_player(state, p))
        .collect();

    let game_over = state.players.iter().any(|p| p.grid.has_complete_row());
    let end = if game_over {
        let bonuses = apply_end_game_bonuses(state);
        for ((report, bonus), board) in players.iter_mut().zip(bonuses).zip(&state.players) {
            report.bonus = Some(bonus);
            report.score_after = board.score;
        }
        Some(EndReason::WallRowCompleted)
    } else if state.reservoir.is_exhausted() {
        Some(EndReason::ReservoirExhausted)
    } else {
        None
    };

    state.round += 1;
    state.last_round = Some(RoundReport {
        round: state.round,
        players,
        end,
    });

    match end {
        Some(reason) => {
            state.phase = Phase::GameOver;
            state.end_reason = Some(reason);
            let scores: Vec<i32> = state.players.iter().map(|p| p.score).collect();
            info!(?reason, ?scores, rounds = state.round, "game over");
        }
        None => start_next_round(state),
    }
}

/// Commit one player's full staging lines to the wall, then apply and reset
/// the floor line.
fn tile_player(state: &mut GameState, p: usize) -> PlayerRoundReport {
    let GameState {
        config,
        players,
        reservoir,
        ..
    } = state;
    let board = &mut players[p];
    let mut report = PlayerRoundReport::default();

    for row in 0..BOARD_SIZE {
        if !board.lines[row].is_full() {
            continue;
        }
        let Some((color, count)) = board.lines[row].clear() else {
            continue;
        };
        match board.grid.place(row, color) {
            Some(col) => {
                let points = placement_score(&board.grid, row, col);
                board.add_points(points, config.allow_negative_scores);
                reservoir.discard(color, count as usize - 1);
                report.placements.push(Placement {
                    row: row as u8,
                    col: col as u8,
                    color,
                    points,
                });
            }
            None => {
                // Drafting never allows this; nothing to score.
                debug!(row, ?color, "full line for a color already on the wall");
                reservoir.discard(color, count as usize);
            }
        }
    }

    report.floor_tiles = board.penalty.reset();
    report.penalty = floor_penalty(&config.floor_penalties, report.floor_tiles);
    board.add_points(report.penalty, config.allow_negative_scores);
    report.score_after = board.score;

    debug!(
        player = p,
        placed = report.placements.len(),
        penalty = report.penalty,
        score = report.score_after,
        "tiled"
    );
    report
}

fn start_next_round(state: &mut GameState) {
    let drawn = state.refill_supplies();
    state.pool.seed_marker();
    state.current_player = state.starting_player_next_round;
    state.phase = Phase::Drafting;
    debug!(
        drawn,
        starter = state.current_player,
        bag = state.reservoir.bag_len(),
        discard = state.reservoir.discard_len(),
        "next round"
    );
}
