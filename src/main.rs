//! Self-play CLI for Azul
//!
//! Plays a batch of seeded games between agents and reports scores and
//! winners.

use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use azul_rules::{run_batch, AgentKind, BatchStats, GameConfig};

/// Batch self-play for the Azul rules engine
#[derive(Parser, Debug)]
#[command(name = "azul")]
#[command(about = "Play seeded Azul games between agents and report the results", long_about = None)]
struct Args {
    /// Players per game (2-4)
    #[arg(long, default_value_t = 2)]
    players: u8,

    /// Seed of the first game; game i uses seed + i
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of games to play
    #[arg(long, default_value_t = 100)]
    games: usize,

    /// Policy used in every seat
    #[arg(long, value_enum, default_value_t = AgentKind::Random)]
    agent: AgentKind,

    /// YAML file overriding the standard game parameters
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print one JSON document instead of the text report
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Log round resolution (debug level) unless RUST_LOG is set
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    info!(
        players = args.players,
        games = args.games,
        seed = args.seed,
        agent = ?args.agent,
        "starting batch"
    );
    let summaries = run_batch(&config, args.players, args.seed, args.games, args.agent)?;
    let stats = BatchStats::from_summaries(args.players, &summaries);

    if args.json {
        let report = serde_json::json!({ "games": summaries, "stats": stats });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for game in &summaries {
        let scores: Vec<String> = game.players.iter().map(|p| p.score.to_string()).collect();
        let winners: Vec<String> = game.winners.iter().map(|w| w.to_string()).collect();
        println!(
            "seed {:>6}  rounds {:>2}  scores [{}]  winners [{}]",
            game.seed,
            game.rounds,
            scores.join(", "),
            winners.join(", ")
        );
    }

    println!();
    println!("Games: {}", stats.games);
    println!("Mean rounds: {:.1}", stats.mean_rounds);
    for p in 0..args.players as usize {
        println!(
            "  Player {p}: {} wins, {} draws, mean score {:.1}",
            stats.wins[p], stats.draws[p], stats.mean_score[p]
        );
    }
    Ok(())
}
