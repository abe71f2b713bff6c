//! Azul Rules Engine and self-play driver
//!
//! This crate re-exports the rules engine and adds agents plus a parallel
//! batch simulator used by the `azul` binary.

pub use azul_rules_engine::*;

pub mod agent;
pub mod simulate;

pub use agent::{Agent, AgentInput, GreedyAgent, RandomAgent};
pub use simulate::{play_game, play_with, run_batch, AgentKind, BatchStats, SimulationError};
