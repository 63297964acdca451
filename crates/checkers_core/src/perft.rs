use crate::{board::GameState, movegen::legal_moves};

/// Pure perft node count: the number of distinct move sequences of
/// length `depth` from this state. A whole jump chain counts as one
/// move, matching `legal_moves`.
pub fn perft(state: &GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = legal_moves(state);
    if depth == 1 {
        return moves.len() as u64;
    }
    let mut nodes = 0u64;
    for mv in &moves {
        nodes += perft(&state.apply(mv), depth - 1);
    }
    nodes
}
