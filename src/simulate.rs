//! Self-play driver: play seeded games between agents, optionally many at
//! once on the rayon pool.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, instrument};

use azul_rules_engine::{
    enumerate_actions, execute, setup_with_config, summary, ConfigError, GameConfig,
    GameSummary, IllegalAction, PlayerResult,
};

use crate::agent::{Agent, AgentInput, GreedyAgent, RandomAgent};

/// Hard stop for a single game; real games finish in a few hundred moves.
pub const MAX_MOVES: usize = 10_000;

/// Offset between the game seed and the seed of the agents' RNG, so move
/// choice and tile draws use separate streams.
const AGENT_SEED_SALT: u64 = 0x5EED_A6E7;

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("agent chose an illegal action: {0}")]
    Illegal(#[from] IllegalAction),
    #[error("game with seed {seed} did not finish within {max} moves", max = MAX_MOVES)]
    Unfinished { seed: u64 },
}

/// Which policy seats every player in a simulated game.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum AgentKind {
    #[default]
    Random,
    Greedy,
}

/// Play one game to completion with the same policy in every seat.
#[instrument(level = "debug", skip(config))]
pub fn play_game(
    config: &GameConfig,
    players: u8,
    seed: u64,
    kind: AgentKind,
) -> Result<GameSummary, SimulationError> {
    match kind {
        AgentKind::Random => play_with(config, players, seed, &mut RandomAgent::new()),
        AgentKind::Greedy => play_with(config, players, seed, &mut GreedyAgent::new()),
    }
}

/// Play one game, asking `agent` for every move.
pub fn play_with<A: Agent>(
    config: &GameConfig,
    players: u8,
    seed: u64,
    agent: &mut A,
) -> Result<GameSummary, SimulationError> {
    let mut state = setup_with_config(config, players, seed)?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed ^ AGENT_SEED_SALT);

    for _ in 0..MAX_MOVES {
        if state.is_game_over() {
            let summary = summary(&state);
            debug!(seed, rounds = summary.rounds, winners = ?summary.winners, "game finished");
            return Ok(summary);
        }
        let current_player = state.current_player();
        let legal_actions = enumerate_actions(&state, current_player);
        let action = {
            let input = AgentInput {
                state: &state,
                legal_actions: &legal_actions,
                current_player,
            };
            agent.select_action(&input, &mut rng)
        };
        execute(&mut state, action)?;
    }
    Err(SimulationError::Unfinished { seed })
}

/// Play `games` games in parallel, game `i` seeded with `seed + i`.
/// Results come back in seed order.
pub fn run_batch(
    config: &GameConfig,
    players: u8,
    seed: u64,
    games: usize,
    kind: AgentKind,
) -> Result<Vec<GameSummary>, SimulationError> {
    (0..games as u64)
        .into_par_iter()
        .map(|i| play_game(config, players, seed.wrapping_add(i), kind))
        .collect()
}

/// Aggregate outcome of a batch of games.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct BatchStats {
    pub games: usize,
    pub wins: Vec<u32>,
    pub draws: Vec<u32>,
    pub mean_score: Vec<f64>,
    pub mean_rounds: f64,
}

impl BatchStats {
    pub fn from_summaries(players: u8, summaries: &[GameSummary]) -> Self {
        let n = players as usize;
        let mut stats = BatchStats {
            games: summaries.len(),
            wins: vec![0; n],
            draws: vec![0; n],
            mean_score: vec![0.0; n],
            mean_rounds: 0.0,
        };
        if summaries.is_empty() {
            return stats;
        }

        for game in summaries {
            for (p, player) in game.players.iter().enumerate().take(n) {
                match player.result {
                    Some(PlayerResult::Win) => stats.wins[p] += 1,
                    Some(PlayerResult::Draw) => stats.draws[p] += 1,
                    Some(PlayerResult::Lose) | None => {}
                }
                stats.mean_score[p] += player.score as f64;
            }
            stats.mean_rounds += game.rounds as f64;
        }

        let games = summaries.len() as f64;
        for mean in &mut stats.mean_score {
            *mean /= games;
        }
        stats.mean_rounds /= games;
        stats
    }
}
