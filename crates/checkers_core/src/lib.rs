pub mod board;
pub mod deadline;
pub mod movegen;
pub mod perft;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use deadline::*;
pub use movegen::*;
pub use perft::perft;
pub use types::*;

// =============================================================================
// Engine trait, implemented by all checkers engines
// =============================================================================

/// Result of one move selection
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The successor state the engine wants to move to
    pub state: GameState,
    /// Score of the chosen line from the engine's perspective
    pub score: i32,
    /// Search depth used, in plies
    pub depth: u8,
    /// Number of nodes visited (for stats)
    pub nodes: u64,
}

/// Trait that all checkers engines must implement.
///
/// This allows swapping between the alpha-beta engine, the random
/// baseline and whatever an experiment needs, behind one seam.
pub trait Engine: Send {
    /// Pick the successor state to move to.
    ///
    /// # Arguments
    /// * `state` - The current state, with this engine's side to move
    /// * `deadline` - Advisory time budget for this move
    fn select_move(&mut self, state: &GameState, deadline: &Deadline) -> SearchResult;

    /// Engine name for logs and leaderboards
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
