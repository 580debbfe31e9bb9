use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use connect4::{parse_history, Evaluation, GameState, GameStatus, Searcher};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;

use config::{DriverConfig, EngineSeats};

/// Replays a move history, lets the engine play its seats and prints the
/// resulting game as JSON.
#[derive(Debug, Parser)]
#[command(name = "connect4-driver", about = "Headless Connect 4 match driver")]
struct Cli {
    /// TOML file with `engine` and a `[search]` table
    #[arg(long, default_value = "connect4.toml")]
    config: PathBuf,

    /// Columns played before the engine takes over, e.g. "3342"
    #[arg(long, default_value = "")]
    moves: String,

    #[arg(long)]
    depth: Option<u8>,

    #[arg(long, value_enum)]
    engine: Option<EngineSeats>,

    #[arg(long)]
    no_pruning: bool,

    #[arg(long, value_enum)]
    evaluation: Option<EvaluationArg>,

    #[arg(long)]
    node_budget: Option<u64>,

    /// Stop after this many engine moves
    #[arg(long)]
    max_plies: Option<usize>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum EvaluationArg {
    Zero,
    OpenLines,
}

impl From<EvaluationArg> for Evaluation {
    fn from(arg: EvaluationArg) -> Self {
        match arg {
            EvaluationArg::Zero => Evaluation::Zero,
            EvaluationArg::OpenLines => Evaluation::OpenLines,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    let history = parse_history(&cli.moves).context("parsing --moves")?;

    let state = run_match(&history, &config, cli.max_plies)?;
    println!("{}", serde_json::to_string_pretty(&state.snapshot())?);
    Ok(())
}

fn init_tracing() {
    // stdout carries the JSON result, logs go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn resolve_config(cli: &Cli) -> Result<DriverConfig> {
    let mut config = DriverConfig::load_or_default(&cli.config)?;
    if let Some(depth) = cli.depth {
        config.search.max_depth = depth;
    }
    if let Some(engine) = cli.engine {
        config.engine = engine;
    }
    if cli.no_pruning {
        config.search.pruning = false;
    }
    if let Some(evaluation) = cli.evaluation {
        config.search.evaluation = evaluation.into();
    }
    if cli.node_budget.is_some() {
        config.search.node_budget = cli.node_budget;
    }
    config.search.validate()?;
    Ok(config)
}

fn run_match(
    history: &[usize],
    config: &DriverConfig,
    max_plies: Option<usize>,
) -> Result<GameState> {
    let mut state = GameState::from_history(history).context("replaying move history")?;
    info!(moves = history.len(), "history replayed");

    let searcher = Searcher::new(config.search.clone());
    let mut engine_moves = 0;
    while !state.is_terminal() {
        let player = state.active_player();
        if !config.engine.controls(player) {
            info!(?player, "waiting for a human move");
            break;
        }
        if max_plies.is_some_and(|max| engine_moves >= max) {
            info!(engine_moves, "ply limit reached");
            break;
        }
        let report = searcher.search(&state, player)?;
        let outcome = state.play(report.column)?;
        engine_moves += 1;
        info!(
            ?player,
            column = outcome.column,
            row = outcome.row,
            score = report.score,
            nodes = report.nodes,
            "engine moved"
        );
    }

    match state.status() {
        GameStatus::Won(winner) => info!(?winner, "game over"),
        GameStatus::Drawn => info!("game drawn"),
        GameStatus::InProgress => {}
    }
    Ok(state)
}
