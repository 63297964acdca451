//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p checkers_core -- [depth] [message]
//!
//! Examples:
//!   # Default: depth 9 from the starting position
//!   cargo flamegraph --example perft_bench -p checkers_core
//!
//!   # Custom depth
//!   cargo flamegraph --example perft_bench -p checkers_core -- 10
//!
//!   # Custom depth and position
//!   cargo flamegraph --example perft_bench -p checkers_core -- 9 "r.rr.rr.r.r...w.rw.w..w.w.www..w r 12"

use checkers_core::{board::GameState, perft::perft};
use std::env;
use std::time::Instant;

/// Test positions for comprehensive profiling
const TEST_POSITIONS: &[(&str, &str)] = &[
    (
        "Starting position",
        "rrrrrrrrrrrr........wwwwwwwwwwww r 0",
    ),
    (
        "Middlegame",
        "r.rr.rr.r.r...w.rw.w..w.w.www..w r 12",
    ),
    (
        "Kings endgame",
        "...R....W......R....w.......W..r w 3",
    ),
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(9);

    // If a position message is provided, use single position mode
    if let Some(msg) = args.get(2) {
        run_single_position(msg, depth);
    } else {
        run_all_positions(depth);
    }
}

fn run_single_position(msg: &str, depth: u8) {
    let state = GameState::from_message(msg).expect("invalid position message");

    println!("Position: {msg}");
    println!("Depth: {depth}");
    println!();

    // Warm-up run at lower depth
    if depth > 2 {
        let _ = perft(&state, depth.saturating_sub(2));
    }

    let start = Instant::now();
    let nodes = perft(&state, depth);
    let elapsed = start.elapsed();

    let nps = if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    };

    println!("Nodes: {nodes}");
    println!("Time: {elapsed:.3?}");
    println!("NPS: {nps:.0}");
}

fn run_all_positions(depth: u8) {
    println!("=== Perft Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = std::time::Duration::ZERO;

    for (name, msg) in TEST_POSITIONS {
        let state = GameState::from_message(msg).expect("invalid position message");

        print!("{name:.<30}");

        let start = Instant::now();
        let nodes = perft(&state, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        let nps = if elapsed.as_secs_f64() > 0.0 {
            nodes as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        println!(" {nodes:>12} nodes in {elapsed:>8.3?} ({nps:>10.0} nps)");
    }

    println!();
    println!("{:=<70}", "");
    let total_nps = if total_time.as_secs_f64() > 0.0 {
        total_nodes as f64 / total_time.as_secs_f64()
    } else {
        0.0
    };
    println!("TOTAL: {total_nodes} nodes in {total_time:.3?} ({total_nps:.0} nps)");
}
