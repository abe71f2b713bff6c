//! Legal move enumeration and draft execution.

use tracing::{instrument, trace};

use crate::action::{Action, Destination, Draft, PlayerId, Source};
use crate::error::IllegalAction;
use crate::grid::column_for;
use crate::player::PlayerBoard;
use crate::round::finish_turn;
use crate::state::{GameState, Phase};
use crate::tile::{Color, BOARD_SIZE};

/// Check that staging line `row` of `board` can take `color`: the wall cell
/// for that color is open, and the line is empty or holds that color with
/// room to spare.
fn row_accepts(board: &PlayerBoard, row: usize, color: Color) -> Result<(), IllegalAction> {
    if board.grid.is_filled(row, column_for(row, color)) {
        return Err(IllegalAction::ColorAlreadyOnWall {
            row: row as u8,
            color,
        });
    }
    let line = &board.lines[row];
    match line.color() {
        Some(held) if held != color => Err(IllegalAction::RowHoldsOtherColor {
            row: row as u8,
            held,
            color,
        }),
        _ if line.is_full() => Err(IllegalAction::RowFull(row as u8)),
        _ => Ok(()),
    }
}

/// Every legal action for `player`, in a fixed order: displays ascending,
/// then the center pool; colors in `ALL_COLORS` order; rows 0..4 then the
/// floor. Returns `[Action::Pass]` when nothing can be drafted.
pub fn enumerate_actions(state: &GameState, player: PlayerId) -> Vec<Action> {
    if state.phase != Phase::Drafting || player >= state.num_players() {
        return vec![Action::Pass];
    }

    let board = state.player(player);
    let mut actions = Vec::new();
    let mut push_drafts = |source: Source, color: Color| {
        let draft = |destination| {
            Action::Draft(Draft {
                player,
                source,
                color,
                destination,
            })
        };
        for row in 0..BOARD_SIZE {
            if row_accepts(board, row, color).is_ok() {
                actions.push(draft(Destination::Row(row as u8)));
            }
        }
        // Floor always allowed
        actions.push(draft(Destination::Floor));
    };

    for (i, supply) in state.supplies.iter().enumerate() {
        for color in supply.colors() {
            push_drafts(Source::Supply(i as u8), color);
        }
    }
    for color in state.pool.colors() {
        push_drafts(Source::Pool, color);
    }

    if actions.is_empty() {
        actions.push(Action::Pass);
    }
    actions
}

fn validate(state: &GameState, draft: &Draft) -> Result<(), IllegalAction> {
    if state.phase != Phase::Drafting {
        return Err(IllegalAction::WrongPhase(state.phase));
    }
    if draft.player != state.current_player {
        return Err(IllegalAction::NotPlayersTurn {
            player: draft.player,
            current: state.current_player,
        });
    }

    let present = match draft.source {
        Source::Supply(i) => state
            .supplies
            .get(i as usize)
            .ok_or(IllegalAction::UnknownSupply(i))?
            .contains(draft.color),
        Source::Pool => state.pool.contains(draft.color),
    };
    if !present {
        return Err(IllegalAction::ColorNotInSource {
            from: draft.source,
            color: draft.color,
        });
    }

    match draft.destination {
        Destination::Floor => Ok(()),
        Destination::Row(r) if r as usize >= BOARD_SIZE => Err(IllegalAction::RowOutOfRange(r)),
        Destination::Row(r) => row_accepts(state.player(draft.player), r as usize, draft.color),
    }
}

/// Apply `action` in place. On error the state is left untouched.
#[instrument(level = "trace", skip_all)]
pub fn execute(state: &mut GameState, action: Action) -> Result<(), IllegalAction> {
    match action {
        Action::Pass => {
            let drafts_open = state.phase == Phase::Drafting
                && enumerate_actions(state, state.current_player)
                    .iter()
                    .any(|a| matches!(a, Action::Draft(_)));
            if drafts_open {
                return Err(IllegalAction::PassWhileDraftsAvailable);
            }
            Ok(())
        }
        Action::Draft(draft) => {
            validate(state, &draft)?;
            apply_draft(state, draft);
            trace!(turn = state.turn, %action, "draft");
            finish_turn(state);
            Ok(())
        }
    }
}

/// Move the drafted tiles. Assumes `draft` passed validation.
fn apply_draft(state: &mut GameState, draft: Draft) {
    let Draft {
        player,
        source,
        color,
        destination,
    } = draft;

    let (taken, took_marker) = match source {
        Source::Supply(i) => {
            let (taken, rest) = state.supplies[i as usize].take(color);
            state.pool.add_tiles(rest);
            (taken, false)
        }
        Source::Pool => state.pool.take(color),
    };
    if took_marker {
        state.starting_player_next_round = player;
    }

    let GameState {
        players, reservoir, ..
    } = state;
    let board = &mut players[player as usize];

    let overflow = match destination {
        Destination::Row(r) => board.lines[r as usize].fill(color, taken),
        Destination::Floor => taken,
    };
    // Floor tiles leave play immediately; the track only counts them.
    board.penalty.add(overflow + took_marker as u8);
    reservoir.discard(color, overflow as usize);

    state.turn += 1;
}
