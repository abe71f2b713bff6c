//! Scoring rules: wall placement adjacency, floor penalties, end-of-game
//! bonuses and winner determination.

use serde::Serialize;

use crate::action::PlayerId;
use crate::config::GameConfig;
use crate::grid::ScoringGrid;
use crate::state::GameState;
use crate::tile::BOARD_SIZE;

/// Points for a tile placed at (row, col): one for the tile itself plus the
/// unbroken runs of filled cells to its left, right, above and below.
/// Whether (row, col) itself is already marked filled does not matter.
pub fn placement_score(grid: &ScoringGrid, row: usize, col: usize) -> i32 {
    let left = (0..col).rev().take_while(|&c| grid.is_filled(row, c)).count();
    let right = (col + 1..BOARD_SIZE)
        .take_while(|&c| grid.is_filled(row, c))
        .count();
    let up = (0..row).rev().take_while(|&r| grid.is_filled(r, col)).count();
    let down = (row + 1..BOARD_SIZE)
        .take_while(|&r| grid.is_filled(r, col))
        .count();

    1 + (left + right + up + down) as i32
}

/// End-of-game bonus for one wall.
pub fn end_game_bonus(config: &GameConfig, grid: &ScoringGrid) -> i32 {
    grid.completed_rows() as i32 * config.row_bonus
        + grid.completed_columns() as i32 * config.column_bonus
        + grid.completed_color_sets() as i32 * config.color_set_bonus
}

/// Add end-of-game bonuses to every player's score, returning the bonus
/// each player received.
pub(crate) fn apply_end_game_bonuses(state: &mut GameState) -> Vec<i32> {
    let GameState {
        config, players, ..
    } = state;
    players
        .iter_mut()
        .map(|player| {
            let bonus = end_game_bonus(config, &player.grid);
            player.add_points(bonus, config.allow_negative_scores);
            bonus
        })
        .collect()
}

/// Outcome for one player at game end.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerResult {
    Win,
    Draw,
    Lose,
}

/// Players holding the highest score. Empty until the game is over.
pub fn winners(state: &GameState) -> Vec<PlayerId> {
    if !state.is_game_over() {
        return Vec::new();
    }
    let Some(best) = state.players.iter().map(|p| p.score).max() else {
        return Vec::new();
    };
    (0..state.num_players())
        .filter(|&p| state.players[p as usize].score == best)
        .collect()
}

/// Per-player results: a sole top scorer wins; tied top scorers draw;
/// everyone else loses. `None` until the game is over.
pub fn results(state: &GameState) -> Option<Vec<PlayerResult>> {
    if !state.is_game_over() {
        return None;
    }
    let top = winners(state);
    let shared = top.len() > 1;
    Some(
        (0..state.num_players())
            .map(|p| match (top.contains(&p), shared) {
                (true, false) => PlayerResult::Win,
                (true, true) => PlayerResult::Draw,
                (false, _) => PlayerResult::Lose,
            })
            .collect(),
    )
}

/// Rough position value for search players: current score plus the bonuses
/// the wall would earn now, minus one point per pending floor tile, scaled
/// down by 100.
pub fn heuristic_score(state: &GameState, player: PlayerId) -> f64 {
    let board = state.player(player);
    let bonus = end_game_bonus(&state.config, &board.grid);
    let pending = -(board.penalty.count() as i32);
    (board.score + bonus + pending) as f64 / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{column_for, WALL_PATTERN};
    use crate::state::Phase;
    use crate::tile::{Color, ALL_COLORS};

    fn grid_with(cells: &[(usize, usize)]) -> ScoringGrid {
        let mut grid = ScoringGrid::new();
        for &(r, c) in cells {
            grid.place(r, WALL_PATTERN[r][c]);
        }
        grid
    }

    // =========================================================================
    // Placement scoring
    // =========================================================================

    #[test]
    fn test_score_placement_isolated() {
        let grid = ScoringGrid::new();
        assert_eq!(placement_score(&grid, 0, column_for(0, Color::Blue)), 1);
    }

    #[test]
    fn test_score_placement_fills_gap_in_row() {
        let grid = grid_with(&[(2, 1), (2, 3)]);
        assert_eq!(placement_score(&grid, 2, 2), 3);
    }

    #[test]
    fn test_score_placement_gap_with_vertical_run() {
        let grid = grid_with(&[(2, 1), (2, 3), (1, 2), (0, 2)]);
        assert_eq!(placement_score(&grid, 2, 2), 5);
    }

    #[test]
    fn test_score_placement_stops_at_gap() {
        // (2,0) is separated from (2,2) by the empty (2,1)
        let grid = grid_with(&[(2, 0), (2, 3), (2, 4)]);
        assert_eq!(placement_score(&grid, 2, 2), 3);
    }

    #[test]
    fn test_score_placement_cross() {
        let grid = grid_with(&[(2, 1), (2, 3), (1, 2), (3, 2)]);
        assert_eq!(placement_score(&grid, 2, 2), 5);
    }

    #[test]
    fn test_score_placement_corner_with_neighbor() {
        let grid = grid_with(&[(0, 1)]);
        assert_eq!(placement_score(&grid, 0, 0), 2);
    }

    #[test]
    fn test_score_ignores_own_cell() {
        let grid = grid_with(&[(4, 4), (4, 3)]);
        assert_eq!(placement_score(&grid, 4, 4), 2);
    }

    // =========================================================================
    // End-game bonuses
    // =========================================================================

    #[test]
    fn test_endgame_bonus_rows_and_column() {
        // Two full rows and one full column
        let mut cells = Vec::new();
        for c in 0..BOARD_SIZE {
            cells.push((0, c));
            cells.push((1, c));
        }
        for r in 2..BOARD_SIZE {
            cells.push((r, 0));
        }
        let grid = grid_with(&cells);
        assert_eq!(grid.completed_color_sets(), 0);
        assert_eq!(end_game_bonus(&GameConfig::default(), &grid), 2 * 2 + 7);
    }

    #[test]
    fn test_endgame_bonus_complete_color() {
        let mut grid = ScoringGrid::new();
        for row in 0..BOARD_SIZE {
            grid.place(row, Color::Blue);
        }
        assert_eq!(end_game_bonus(&GameConfig::default(), &grid), 10);
    }

    #[test]
    fn test_endgame_bonus_full_wall() {
        let mut grid = ScoringGrid::new();
        for row in 0..BOARD_SIZE {
            for color in ALL_COLORS {
                grid.place(row, color);
            }
        }
        // 5 rows * 2 + 5 cols * 7 + 5 colors * 10
        assert_eq!(end_game_bonus(&GameConfig::default(), &grid), 95);
    }

    // =========================================================================
    // Winners
    // =========================================================================

    fn finished_game(scores: &[i32]) -> GameState {
        let mut state =
            GameState::new(GameConfig::default(), scores.len() as u8, 3).unwrap();
        for (board, &s) in state.players.iter_mut().zip(scores) {
            board.score = s;
        }
        state.phase = Phase::GameOver;
        state
    }

    #[test]
    fn test_no_winner_while_playing() {
        let state = GameState::new(GameConfig::default(), 2, 3).unwrap();
        assert!(winners(&state).is_empty());
        assert_eq!(results(&state), None);
    }

    #[test]
    fn test_single_winner() {
        let state = finished_game(&[12, 30, 7]);
        assert_eq!(winners(&state), vec![1]);
        assert_eq!(
            results(&state).unwrap(),
            vec![PlayerResult::Lose, PlayerResult::Win, PlayerResult::Lose]
        );
    }

    #[test]
    fn test_tie_is_a_draw_for_top_scorers() {
        let state = finished_game(&[40, 12, 40, 39]);
        assert_eq!(winners(&state), vec![0, 2]);
        assert_eq!(
            results(&state).unwrap(),
            vec![
                PlayerResult::Draw,
                PlayerResult::Lose,
                PlayerResult::Draw,
                PlayerResult::Lose
            ]
        );
    }

    #[test]
    fn test_heuristic_score_counts_bonus_and_floor() {
        let mut state = GameState::new(GameConfig::default(), 2, 3).unwrap();
        state.players[0].score = 20;
        for color in ALL_COLORS {
            state.players[0].grid.place(0, color);
        }
        state.players[0].penalty.add(3);
        // (20 + 2 - 3) / 100
        assert!((heuristic_score(&state, 0) - 0.19).abs() < 1e-9);
        assert_eq!(heuristic_score(&state, 1), 0.0);
    }
}
