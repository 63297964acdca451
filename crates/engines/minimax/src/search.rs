//! Minimax search with alpha-beta pruning
//!
//! The tree alternates a minimizing layer (opponent to move) and a
//! maximizing layer (player to move), always scored for the side the
//! root call acts for. Real scores stay strictly inside
//! `(-INFINITY, INFINITY)`, so the root loop always prefers a searched
//! line over its initial sentinel.

use checkers_core::{find_possible_moves, GameState, Move};

use crate::eval::{evaluate, Perspective};

/// Window bound outside every reachable score.
pub const INFINITY: i32 = 2_000;

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u8 = 11;

/// Result of one root selection.
pub struct Choice {
    /// The successor state to move to
    pub state: GameState,
    /// Root minimax value, `None` when the move was forced and no
    /// search ran
    pub score: Option<i32>,
}

/// Picks the successor state to move to.
///
/// With no legal move the turn passes and the game goes on; a forced
/// move is returned without searching. Otherwise every successor is
/// scored by alpha-beta and the first one reaching the best score
/// wins, with the window tightening as the root scan proceeds.
///
/// # Arguments
/// * `state` - The state to move from
/// * `max_depth` - Ply budget below the root's successors
/// * `nodes` - Counter for nodes searched (for statistics)
pub fn select_move(state: &GameState, max_depth: u8, nodes: &mut u64) -> Choice {
    let mut successors = find_possible_moves(state);

    if successors.is_empty() {
        return Choice {
            state: state.apply(&Move::Pass),
            score: None,
        };
    }
    if successors.len() == 1 {
        return Choice {
            state: successors.swap_remove(0),
            score: None,
        };
    }

    let persp = Perspective::of(state, &successors[0]);

    let mut best_index = 0;
    let mut value = -INFINITY;
    let mut alpha = -INFINITY;
    let beta = INFINITY;

    for (i, succ) in successors.iter().enumerate() {
        let score = min_value(succ, persp, 0, alpha, beta, max_depth, nodes);
        // Strict improvement keeps the earliest best successor
        if score > value {
            best_index = i;
        }
        value = value.max(score);
        alpha = alpha.max(value);
    }

    Choice {
        state: successors.swap_remove(best_index),
        score: Some(value),
    }
}

/// Minimizing layer: the opponent picks the reply worst for the root
/// player. `depth` counts plies below the root's successors; a node
/// reaching `max_depth` is evaluated instead of expanded, as is any
/// finished game.
fn min_value(
    state: &GameState,
    persp: Perspective,
    depth: u8,
    alpha: i32,
    mut beta: i32,
    max_depth: u8,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;
    if state.is_eog() || depth >= max_depth {
        return evaluate(state, persp);
    }

    let mut value = INFINITY;
    for succ in find_possible_moves(state) {
        value = value.min(max_value(&succ, persp, depth + 1, alpha, beta, max_depth, nodes));
        if alpha >= value {
            return value; // Alpha cutoff
        }
        beta = beta.min(value);
    }
    value
}

/// Maximizing layer, the dual of `min_value`.
fn max_value(
    state: &GameState,
    persp: Perspective,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    max_depth: u8,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;
    if state.is_eog() || depth >= max_depth {
        return evaluate(state, persp);
    }

    let mut value = -INFINITY;
    for succ in find_possible_moves(state) {
        value = value.max(min_value(&succ, persp, depth + 1, alpha, beta, max_depth, nodes));
        if value >= beta {
            return value; // Beta cutoff
        }
        alpha = alpha.max(value);
    }
    value
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
