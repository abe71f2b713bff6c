//! Property tests over randomly played games.
//!
//! Each case plays a seeded game with uniformly random legal moves and checks
//! the rules engine's invariants after every step.

use std::collections::HashSet;

use azul_rules_engine::{
    assert_tile_invariants, enumerate_actions, execute, setup, Action, Color, Destination, Draft,
    GameState, Phase, PlayerId, Piece, Source, TileReservoir, ALL_COLORS, BOARD_SIZE,
};
use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Every draft a player could name, legal or not, including one unknown
/// display and one row past the end.
fn every_draft(state: &GameState, player: PlayerId) -> Vec<Action> {
    let mut sources: Vec<Source> = (0..=state.supplies().len() as u8)
        .map(Source::Supply)
        .collect();
    sources.push(Source::Pool);

    let mut destinations: Vec<Destination> =
        (0..=BOARD_SIZE as u8).map(Destination::Row).collect();
    destinations.push(Destination::Floor);

    let mut all = Vec::new();
    for &source in &sources {
        for color in ALL_COLORS {
            for &destination in &destinations {
                all.push(Action::Draft(Draft {
                    player,
                    source,
                    color,
                    destination,
                }));
            }
        }
    }
    all
}

fn filled_cells(state: &GameState) -> Vec<(usize, usize, usize)> {
    let mut cells = Vec::new();
    for (p, board) in state.players().iter().enumerate() {
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                if board.grid().is_filled(r, c) {
                    cells.push((p, r, c));
                }
            }
        }
    }
    cells
}

fn scores(state: &GameState) -> Vec<i32> {
    state.players().iter().map(|p| p.score()).collect()
}

/// Random game driver: picks uniformly among enumerated actions and hands
/// each (before, action, after) step to `check`.
fn play(
    players: u8,
    seed: u64,
    pick_seed: u64,
    mut check: impl FnMut(&GameState, Action, &GameState),
) -> GameState {
    let mut state = setup(players, seed).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(pick_seed);
    for _ in 0..2000 {
        if state.is_game_over() {
            break;
        }
        let actions = enumerate_actions(&state, state.current_player());
        let action = actions[rng.random_range(0..actions.len())];
        let before = state.clone();
        execute(&mut state, action).unwrap();
        check(&before, action, &state);
    }
    state
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn tiles_are_conserved(players in 2u8..=4, seed in any::<u64>(), pick in any::<u64>()) {
        let end = play(players, seed, pick, |_, _, after| assert_tile_invariants(after));
        prop_assert!(end.is_game_over());
    }

    #[test]
    fn enumeration_is_sound_and_complete(players in 2u8..=4, seed in any::<u64>(), pick in any::<u64>()) {
        play(players, seed, pick, |before, _, _| {
            let current = before.current_player();
            let legal: HashSet<Action> = enumerate_actions(before, current).into_iter().collect();

            for action in every_draft(before, current) {
                let mut probe = before.clone();
                let outcome = execute(&mut probe, action);
                assert_eq!(
                    outcome.is_ok(),
                    legal.contains(&action),
                    "{action}: {outcome:?}"
                );
                if outcome.is_err() {
                    assert_eq!(&probe, before, "rejected {action} changed state");
                }
            }

            // Nobody else may move
            for other in (0..before.num_players()).filter(|&p| p != current) {
                for action in enumerate_actions(before, other) {
                    let mut probe = before.clone();
                    assert!(execute(&mut probe, action).is_err());
                }
            }
        });
    }

    #[test]
    fn walls_only_grow(players in 2u8..=4, seed in any::<u64>(), pick in any::<u64>()) {
        play(players, seed, pick, |before, _, after| {
            let after_cells: HashSet<_> = filled_cells(after).into_iter().collect();
            for cell in filled_cells(before) {
                assert!(after_cells.contains(&cell), "wall cell {cell:?} was cleared");
            }
            assert!(after.players().iter().all(|p| p.score() >= 0));
            if after.round() == before.round() {
                assert_eq!(scores(before), scores(after), "score moved during drafting");
            }
        });
    }

    #[test]
    fn round_end_transitions(players in 2u8..=4, seed in any::<u64>(), pick in any::<u64>()) {
        play(players, seed, pick, |before, action, after| {
            let Action::Draft(draft) = action else {
                panic!("drafting phase offered a pass");
            };

            if after.round() == before.round() {
                assert_eq!(after.phase(), Phase::Drafting);
                assert_eq!(
                    after.current_player(),
                    (draft.player + 1) % before.num_players()
                );
                return;
            }

            // Drafting ended: every display and the pool were emptied of tiles.
            let report = after.last_round().unwrap();
            assert_eq!(report.round, after.round());
            for (board, player_report) in after.players().iter().zip(&report.players) {
                assert!(board.lines().iter().all(|l| !l.is_full()));
                assert_eq!(board.penalty().count(), 0);
                assert_eq!(player_report.score_after, board.score());
            }

            match after.phase() {
                Phase::GameOver => {
                    assert!(after.end_reason().is_some());
                    assert_eq!(enumerate_actions(after, 0), vec![Action::Pass]);
                }
                Phase::Drafting => {
                    assert_eq!(after.pool().pieces(), &[Piece::FirstPlayerMarker]);
                    assert_eq!(after.current_player(), after.starting_player_next_round());
                    let on_display: usize = after.supplies().iter().map(|s| s.len()).sum();
                    assert!(on_display > 0);
                }
                Phase::Tiling => panic!("tiling is never observable between calls"),
            }
        });
    }

    #[test]
    fn replay_is_deterministic(players in 2u8..=4, seed in any::<u64>(), pick in any::<u64>()) {
        let mut history = Vec::new();
        let first = play(players, seed, pick, |_, action, _| history.push(action));

        let mut second = setup(players, seed).unwrap();
        for action in history {
            execute(&mut second, action).unwrap();
        }
        prop_assert_eq!(first, second);
    }

    #[test]
    fn reservoir_draws_from_discard(discarded in prop::collection::vec(0u8..5, 0..40), seed in any::<u64>()) {
        let discard: Vec<Color> = discarded
            .iter()
            .filter_map(|&i| Color::from_index(i))
            .collect();
        let mut reservoir = TileReservoir::from_parts(Vec::new(), discard.clone());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let mut drawn = Vec::new();
        while let Some(color) = reservoir.draw(&mut rng) {
            drawn.push(color);
        }
        prop_assert!(reservoir.is_exhausted());

        let mut expected = discard;
        expected.sort();
        drawn.sort();
        prop_assert_eq!(drawn, expected);
    }
}
