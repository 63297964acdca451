//! Referee-protocol checkers player
//!
//! Board states travel as single-line messages on stdin/stdout, and
//! each player answers with the state after its move. Two players can
//! be wired together with a pipe pair:
//!
//! ```bash
//! mkfifo pipe
//! player --first < pipe | player > pipe
//! ```
//!
//! All logging goes to stderr so stdout stays clean for the protocol.

use anyhow::{bail, Context, Result};
use checkers_core::{legal_moves, Color, Deadline, Engine, GameState};
use clap::Parser;
use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;
use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Engine to play with, e.g. "minimax", "minimax:8" or "random"
    #[arg(long, default_value = "minimax")]
    engine: String,

    /// Make the first move instead of waiting for the opponent
    #[arg(long)]
    first: bool,

    /// Time budget per move in milliseconds (unlimited if absent)
    #[arg(long)]
    move_time_ms: Option<u64>,

    /// Safety cap on game length, counted in this player's moves
    #[arg(long, default_value_t = 500)]
    max_plies: u32,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn create_engine(spec: &str) -> Result<Box<dyn Engine>> {
    let parts: Vec<&str> = spec.split(':').collect();
    match parts[0].to_lowercase().as_str() {
        "minimax" => {
            if parts.len() > 1 {
                let depth = parts[1]
                    .parse()
                    .with_context(|| format!("invalid search depth in '{}'", spec))?;
                Ok(Box::new(MinimaxEngine::new(depth)))
            } else {
                Ok(Box::new(MinimaxEngine::default()))
            }
        }
        "random" => Ok(Box::new(RandomEngine::new())),
        _ => bail!("unknown engine '{}'", spec),
    }
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::Red => "red",
        Color::White => "white",
    }
}

/// Describe a finished game from `my_color`'s side, or None while play
/// continues.
fn outcome(state: &GameState, my_color: Color) -> Option<String> {
    if !state.is_eog() {
        return None;
    }
    if state.is_draw() {
        return Some("draw by the move-limit rule".to_string());
    }
    match state.winner() {
        Some(winner) => {
            let verdict = if winner == my_color { "we win" } else { "we lose" };
            Some(format!("{} wins ({})", color_name(winner), verdict))
        }
        None => Some("draw".to_string()),
    }
}

/// Notation of the move that turned `before` into `after`.
fn played_move(before: &GameState, after: &GameState) -> String {
    legal_moves(before)
        .into_iter()
        .find(|mv| &before.apply(mv) == after)
        .map(|mv| mv.to_string())
        .unwrap_or_else(|| "?".to_string())
}

/// Read the next state message, or None once the opponent closes.
fn read_state(input: &mut impl BufRead) -> Result<Option<GameState>> {
    let mut line = String::new();
    let bytes = input
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    if bytes == 0 {
        return Ok(None);
    }
    let state = GameState::from_message(line.trim())
        .map_err(|e| anyhow::anyhow!(e))
        .context("bad state message from opponent")?;
    Ok(Some(state))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let mut engine = create_engine(&args.engine)?;
    // The first mover plays red; startpos has red to move.
    let my_color = if args.first { Color::Red } else { Color::White };
    tracing::info!("playing {} as {}", color_name(my_color), engine.name());

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let mut state = if args.first {
        GameState::startpos()
    } else {
        match read_state(&mut input)? {
            Some(initial) => initial,
            None => bail!("no initial state received"),
        }
    };

    for _ply in 0..args.max_plies {
        if let Some(result) = outcome(&state, my_color) {
            tracing::info!("game over: {}", result);
            return Ok(());
        }

        let deadline = match args.move_time_ms {
            Some(ms) => Deadline::from_budget(Duration::from_millis(ms)),
            None => Deadline::unlimited(),
        };
        let started = Instant::now();
        let chosen = engine.select_move(&state, &deadline);
        let elapsed = started.elapsed();
        if deadline.is_expired() {
            tracing::warn!("search overran its budget, took {:?}", elapsed);
        }
        tracing::debug!(
            "played {} (depth {}, score {}, {} nodes, {:?})",
            played_move(&state, &chosen.state),
            chosen.depth,
            chosen.score,
            chosen.nodes,
            elapsed
        );
        state = chosen.state;

        writeln!(output, "{}", state.to_message()).context("failed to write to stdout")?;
        output.flush().context("failed to flush stdout")?;

        if let Some(result) = outcome(&state, my_color) {
            tracing::info!("game over: {}", result);
            return Ok(());
        }

        state = match read_state(&mut input)? {
            Some(next) => next,
            None => {
                tracing::info!("opponent closed the connection");
                return Ok(());
            }
        };
    }

    tracing::warn!("stopping after {} plies without a result", args.max_plies);
    Ok(())
}
