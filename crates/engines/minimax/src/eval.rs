//! Material-based state evaluation
//!
//! Scores are always from the root player's point of view, no matter
//! whose turn the evaluated state is.

use checkers_core::{Color, GameState, PieceKind};

/// Score of a decided game. Larger than any material differential.
pub const WIN_SCORE: i32 = 700;

/// Material value of a plain man.
pub const MAN_VALUE: i32 = 1;
/// Material value of a king.
pub const KING_VALUE: i32 = 5;

/// The two sides of one search, fixed at the root and never
/// reassigned while the tree is explored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Perspective {
    /// The side the root call acts for
    pub player: Color,
    /// The side replying
    pub opponent: Color,
}

impl Perspective {
    /// Fixes both identities from the root state and its first
    /// successor.
    pub fn of(root: &GameState, first_successor: &GameState) -> Self {
        Self {
            player: root.next_player,
            opponent: first_successor.next_player,
        }
    }
}

/// Evaluates `state` for `persp.player`.
///
/// Draws come first: a state that is both drawn and decided scores 0.
/// Decided states score exactly `±WIN_SCORE` regardless of material.
/// Everything else is the material differential, men worth
/// `MAN_VALUE` and kings `KING_VALUE`.
pub fn evaluate(state: &GameState, persp: Perspective) -> i32 {
    if state.is_draw() {
        return 0;
    }
    if is_win_for(state, persp.player) {
        return WIN_SCORE;
    }
    if is_win_for(state, persp.opponent) {
        return -WIN_SCORE;
    }

    let mut player = 0;
    let mut opponent = 0;
    for pc in state.board.iter().flatten() {
        let v = piece_value(pc.kind);
        if pc.color == persp.player {
            player += v;
        } else {
            opponent += v;
        }
    }
    player - opponent
}

fn is_win_for(state: &GameState, color: Color) -> bool {
    match color {
        Color::Red => state.is_red_win(),
        Color::White => state.is_white_win(),
    }
}

/// Returns the material value of a piece.
#[inline]
pub fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Man => MAN_VALUE,
        PieceKind::King => KING_VALUE,
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
