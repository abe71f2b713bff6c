//! Top-level game state and read-only queries.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::debug;

use crate::action::PlayerId;
use crate::config::{check_player_count, ConfigError, GameConfig};
use crate::player::PlayerBoard;
use crate::pool::SharedPool;
use crate::reservoir::TileReservoir;
use crate::round::RoundReport;
use crate::supply::{supply_count, Supply};
use crate::tile::{Color, ALL_COLORS, TILE_COLORS};

/// Game phase / status
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Players drafting
    Drafting,
    /// Round resolution in progress; never waits for input
    Tiling,
    /// Terminal; no more drafts
    GameOver,
}

/// Why the game ended.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// A player completed a horizontal wall row; end bonuses were scored.
    WallRowCompleted,
    /// Bag and discard were both empty when the next round needed tiles.
    ReservoirExhausted,
}

/// Complete game state. Owns its RNG stream, so independent games share
/// nothing and can run on separate threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub(crate) config: GameConfig,
    pub(crate) players: Vec<PlayerBoard>,
    pub(crate) supplies: Vec<Supply>,
    pub(crate) pool: SharedPool,
    pub(crate) reservoir: TileReservoir,

    /// Whose turn it is while drafting
    pub(crate) current_player: PlayerId,
    /// Who starts the next round (whoever took the marker this round)
    pub(crate) starting_player_next_round: PlayerId,

    pub(crate) phase: Phase,
    pub(crate) end_reason: Option<EndReason>,

    /// Rounds completed so far (0 during the first round)
    pub(crate) round: u16,
    /// Drafts executed so far
    pub(crate) turn: u32,

    pub(crate) last_round: Option<RoundReport>,

    pub(crate) seed: u64,
    pub(crate) rng: ChaCha8Rng,
}

impl GameState {
    /// Set up a new game: full shuffled bag, filled displays, marker in the
    /// center, player 0 to move.
    pub fn new(config: GameConfig, num_players: u8, seed: u64) -> Result<Self, ConfigError> {
        check_player_count(num_players)?;
        config.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let reservoir = TileReservoir::new(config.tiles_per_color, &mut rng);

        let mut state = GameState {
            config,
            players: vec![PlayerBoard::default(); num_players as usize],
            supplies: vec![Supply::default(); supply_count(num_players)],
            pool: SharedPool::default(),
            reservoir,
            current_player: 0,
            starting_player_next_round: 0,
            phase: Phase::Drafting,
            end_reason: None,
            round: 0,
            turn: 0,
            last_round: None,
            seed,
            rng,
        };
        state.refill_supplies();
        state.pool.seed_marker();

        debug!(num_players, seed, "new game");
        Ok(state)
    }

    /// Fill every display from the reservoir. Returns tiles drawn.
    pub(crate) fn refill_supplies(&mut self) -> usize {
        let GameState {
            supplies,
            reservoir,
            rng,
            ..
        } = self;
        supplies
            .iter_mut()
            .map(|s| s.refill(reservoir, rng))
            .sum()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn num_players(&self) -> u8 {
        self.players.len() as u8
    }

    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    pub fn starting_player_next_round(&self) -> PlayerId {
        self.starting_player_next_round
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    pub fn round(&self) -> u16 {
        self.round
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Panics if `player` is out of range.
    pub fn player(&self, player: PlayerId) -> &PlayerBoard {
        &self.players[player as usize]
    }

    pub fn players(&self) -> &[PlayerBoard] {
        &self.players
    }

    pub fn supplies(&self) -> &[Supply] {
        &self.supplies
    }

    pub fn pool(&self) -> &SharedPool {
        &self.pool
    }

    pub fn reservoir(&self) -> &TileReservoir {
        &self.reservoir
    }

    /// Report of the most recently resolved round.
    pub fn last_round(&self) -> Option<&RoundReport> {
        self.last_round.as_ref()
    }

    /// Deep copy for search. With `viewer == None` the copy is exact. With
    /// `Some(viewer)` the hidden bag order is reshuffled and the RNG reseeded
    /// from (seed, viewer, round, turn), so the copy cannot reveal upcoming
    /// draws while staying reproducible.
    pub fn clone_for_player(&self, viewer: Option<PlayerId>) -> GameState {
        let mut copy = self.clone();
        if let Some(viewer) = viewer {
            let seed = redacted_seed(self.seed, viewer, self.round, self.turn);
            copy.seed = seed;
            copy.rng = ChaCha8Rng::seed_from_u64(seed);
            let GameState { reservoir, rng, .. } = &mut copy;
            reservoir.redact(rng);
        }
        copy
    }

    /// Tiles of each color currently anywhere in the game.
    pub fn tile_census(&self) -> [usize; TILE_COLORS] {
        let mut totals = [0usize; TILE_COLORS];
        for color in ALL_COLORS {
            totals[color.index()] = self.count_color(color);
        }
        totals
    }

    fn count_color(&self, color: Color) -> usize {
        let reservoir = self.reservoir.bag_count(color) + self.reservoir.discard_count(color);
        let supplies: usize = self.supplies.iter().map(|s| s.count(color)).sum();
        let pool = self.pool.count(color);
        let boards: usize = self
            .players
            .iter()
            .map(|p| {
                let staged: usize = p
                    .lines
                    .iter()
                    .filter(|l| l.color() == Some(color))
                    .map(|l| l.len() as usize)
                    .sum();
                staged + p.grid.color_count(color)
            })
            .sum();
        reservoir + supplies + pool + boards
    }
}

fn redacted_seed(seed: u64, viewer: PlayerId, round: u16, turn: u32) -> u64 {
    const GOLDEN: u64 = 0x9E37_79B9_7F4A_7C15;
    const MIX: u64 = 0xBF58_476D_1CE4_E5B9;
    let clock = ((round as u64) << 32) | turn as u64;
    seed ^ (viewer as u64 + 1).wrapping_mul(GOLDEN) ^ clock.wrapping_mul(MIX)
}

/// Panics if any color's tile count differs from the configured total.
pub fn assert_tile_invariants(state: &GameState) {
    let expected = state.config.tiles_per_color as usize;
    for color in ALL_COLORS {
        let total = state.count_color(color);
        assert_eq!(
            total, expected,
            "Tile count invariant violated for {color:?}: expected {expected}, got {total}"
        );
    }
}
