//! Minimax Checkers Engine
//!
//! Fixed-depth minimax over successor states with alpha-beta pruning
//! and material-based evaluation.
//! This is the baseline engine the harnesses play by default.

mod eval;
mod search;

use checkers_core::{Deadline, Engine, GameState, SearchResult};

/// Checkers engine using fixed-depth minimax with alpha-beta pruning.
///
/// This engine uses:
/// - Minimax over successor states with alpha-beta pruning
/// - Simple material evaluation with a bonus for kings
/// - Forced-move and pass short-circuits that skip the search
/// - A fixed ply budget; the per-move deadline is advisory
#[derive(Debug, Clone)]
pub struct MinimaxEngine {
    /// Search depth in plies
    depth: u8,
    /// Node counter for statistics
    nodes: u64,
    name: String,
}

impl MinimaxEngine {
    pub fn new(depth: u8) -> Self {
        Self {
            depth,
            nodes: 0,
            name: format!("minimax(d={})", depth),
        }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(search::DEFAULT_DEPTH)
    }
}

impl Engine for MinimaxEngine {
    fn select_move(&mut self, state: &GameState, _deadline: &Deadline) -> SearchResult {
        self.nodes = 0;

        let choice = search::select_move(state, self.depth, &mut self.nodes);

        SearchResult {
            state: choice.state,
            score: choice.score.unwrap_or(0),
            depth: self.depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use eval::{evaluate, Perspective, KING_VALUE, MAN_VALUE, WIN_SCORE};
pub use search::{select_move, Choice, DEFAULT_DEPTH, INFINITY};
