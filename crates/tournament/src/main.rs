//! Tournament CLI
//!
//! Run matches between engines and track Elo ratings.

use checkers_core::Engine;
use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;
use std::env;
use std::path::Path;
use tournament::{Leaderboard, MatchRunner, TournamentConfig, TournamentResults};

const ELO_FILE: &str = "tournament_elo.json";

fn print_usage() {
    println!("Checkers Tournament Runner");
    println!();
    println!("Usage:");
    println!("  tournament match <engine1> <engine2> [options]");
    println!("  tournament gauntlet <challenger> [options]");
    println!("  tournament leaderboard");
    println!();
    println!("Options:");
    println!("  --config, -c <file>     Load tournament settings from TOML");
    println!("  --games, -g <N>         Games per match");
    println!("  --openings, -o <N>      Random opening plies per game");
    println!("  --move-time-ms, -t <N>  Time budget per move (0 = unlimited)");
    println!();
    println!("Engines:");
    println!("  minimax       - Alpha-beta minimax at the default depth");
    println!("  minimax:D     - Alpha-beta minimax searching D plies");
    println!("  random        - Uniformly random legal moves");
    println!();
    println!("Examples:");
    println!("  tournament match minimax:6 random --games 20");
    println!("  tournament gauntlet minimax:8 --games 10 --openings 4");
}

fn create_engine(spec: &str) -> Box<dyn Engine> {
    let parts: Vec<&str> = spec.split(':').collect();
    match parts[0].to_lowercase().as_str() {
        "minimax" => {
            if parts.len() > 1 {
                match parts[1].parse() {
                    Ok(depth) => Box::new(MinimaxEngine::new(depth)),
                    Err(_) => {
                        eprintln!("Warning: invalid depth in '{}', using default", spec);
                        Box::new(MinimaxEngine::default())
                    }
                }
            } else {
                Box::new(MinimaxEngine::default())
            }
        }
        "random" => Box::new(RandomEngine::new()),
        _ => {
            eprintln!("Unknown engine: {}", spec);
            Box::new(RandomEngine::new())
        }
    }
}

/// Parse shared options, starting from a config file if one is given
fn parse_config(args: &[String]) -> TournamentConfig {
    let mut config = TournamentConfig::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    match TournamentConfig::load(Path::new(&args[i + 1])) {
                        Ok(loaded) => config = loaded,
                        Err(e) => eprintln!("Warning: {}", e),
                    }
                    i += 1;
                }
            }
            "--games" | "-g" => {
                if i + 1 < args.len() {
                    config.games_per_match = args[i + 1].parse().unwrap_or(config.games_per_match);
                    i += 1;
                }
            }
            "--openings" | "-o" => {
                if i + 1 < args.len() {
                    config.opening_plies = args[i + 1].parse().unwrap_or(config.opening_plies);
                    i += 1;
                }
            }
            "--move-time-ms" | "-t" => {
                if i + 1 < args.len() {
                    config.move_time_ms = args[i + 1].parse().unwrap_or(config.move_time_ms);
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn run_match(args: &[String]) {
    if args.len() < 2 {
        eprintln!("Error: match requires two engine specifications");
        print_usage();
        return;
    }

    let engine1_spec = &args[0];
    let engine2_spec = &args[1];
    let config = parse_config(&args[2..]);

    println!("=== Match: {} vs {} ===", engine1_spec, engine2_spec);
    println!(
        "Games: {}, Opening plies: {}",
        config.games_per_match, config.opening_plies
    );
    println!();

    let mut engine1 = create_engine(engine1_spec);
    let mut engine2 = create_engine(engine2_spec);

    let runner = MatchRunner::new(config.match_config(true));
    let score = runner.run_match(engine1.as_mut(), engine2.as_mut());

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        engine1_spec, score.wins, score.losses, score.draws
    );
    println!("Score: {:.1}%", score.score() * 100.0);

    // Update the Elo leaderboard
    let mut leaderboard = Leaderboard::load(ELO_FILE).unwrap_or_default();
    leaderboard.record_match(engine1_spec, engine2_spec, &score);
    leaderboard.print_standings();

    if let Err(e) = leaderboard.save(ELO_FILE) {
        eprintln!("Warning: Failed to save leaderboard: {}", e);
    }
}

fn run_gauntlet(args: &[String]) {
    if args.is_empty() {
        eprintln!("Error: gauntlet requires a challenger engine");
        print_usage();
        return;
    }

    let challenger_spec = &args[0];
    let config = parse_config(&args[1..]);

    let opponents: Vec<String> = config
        .engines
        .iter()
        .filter(|spec| spec.as_str() != challenger_spec.as_str())
        .cloned()
        .collect();

    println!("=== Gauntlet: {} vs all ===", challenger_spec);
    println!("Opponents: {:?}", opponents);
    println!("Games per match: {}", config.games_per_match);
    println!();

    let mut leaderboard = Leaderboard::load(ELO_FILE).unwrap_or_default();
    let mut results = TournamentResults::new(
        &format!("Gauntlet: {}", challenger_spec),
        std::iter::once(challenger_spec.to_string())
            .chain(opponents.iter().cloned())
            .collect(),
        config.clone(),
    );

    for opponent in &opponents {
        println!("\n--- {} vs {} ---", challenger_spec, opponent);

        let mut challenger = create_engine(challenger_spec);
        let mut opp_engine = create_engine(opponent);

        let runner = MatchRunner::new(config.match_config(true));
        let score = runner.run_match(challenger.as_mut(), opp_engine.as_mut());

        println!(
            "Result: {}-{}-{} (Score: {:.1}%)",
            score.wins,
            score.losses,
            score.draws,
            score.score() * 100.0
        );

        leaderboard.record_match(challenger_spec, opponent, &score);
        results.add_match(challenger_spec, opponent, score);
    }

    println!();
    leaderboard.print_standings();
    results.print_report();

    if let Err(e) = leaderboard.save(ELO_FILE) {
        eprintln!("Warning: Failed to save leaderboard: {}", e);
    }
}

fn show_leaderboard() {
    match Leaderboard::load(ELO_FILE) {
        Ok(leaderboard) => leaderboard.print_standings(),
        Err(_) => {
            println!("No tournament data found. Run some matches first!");
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "gauntlet" => run_gauntlet(&args[2..]),
        "leaderboard" | "elo" => show_leaderboard(),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
        }
    }
}
