//! Random Move Checkers Engine
//!
//! A simple engine that selects uniformly at random from all successor
//! states. Useful for:
//! - Testing infrastructure end to end
//! - Baseline comparisons (any real engine should easily beat this)
//! - Stress testing move generation

use checkers_core::{find_possible_moves, Deadline, Engine, GameState, Move, SearchResult};
use rand::seq::SliceRandom;
use rand::thread_rng;


/// A checkers engine that plays random legal moves.
///
/// This engine provides no evaluation - it simply picks a random
/// successor from all available ones. It's the simplest possible
/// engine and serves as a baseline for testing.
#[derive(Debug, Clone, Default)]
pub struct RandomEngine {
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for RandomEngine {
    fn select_move(&mut self, state: &GameState, _deadline: &Deadline) -> SearchResult {
        self.nodes = 1;

        let successors = find_possible_moves(state);
        let next = successors
            .choose(&mut thread_rng())
            .cloned()
            .unwrap_or_else(|| state.apply(&Move::Pass));

        SearchResult {
            state: next,
            score: 0,
            depth: 0,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "random"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
