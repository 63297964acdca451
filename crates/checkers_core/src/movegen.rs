use crate::{board::GameState, types::*};

// Row/col deltas. Red men use the first pair, white men the last,
// kings all four.
static ALL_DIRS: [(i8, i8); 4] = [(1, -1), (1, 1), (-1, -1), (-1, 1)];

fn directions(piece: Piece) -> &'static [(i8, i8)] {
    match piece.kind {
        PieceKind::King => &ALL_DIRS,
        PieceKind::Man => match piece.color {
            Color::Red => &ALL_DIRS[0..2],
            Color::White => &ALL_DIRS[2..4],
        },
    }
}

/// Generate all legal moves for the side to move.
///
/// Captures are mandatory: when any jump exists, only jumps are
/// returned. Jumps are maximal chains; when a chain branches, every
/// maximal branch is a separate move and any of them may be played.
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    let mut jumps = Vec::new();
    let mut scratch = state.clone();
    for sq in 0..NUM_SQUARES {
        let pc = match state.piece_at(sq) {
            Some(p) if p.color == state.next_player => p,
            _ => continue,
        };
        collect_jumps(&mut scratch, pc, sq, &mut vec![sq], &mut Vec::new(), &mut jumps);
    }
    if !jumps.is_empty() {
        return jumps;
    }

    let mut steps = Vec::new();
    for sq in 0..NUM_SQUARES {
        let pc = match state.piece_at(sq) {
            Some(p) if p.color == state.next_player => p,
            _ => continue,
        };
        collect_steps(state, pc, sq, &mut steps);
    }
    steps
}

/// Successor states for the side to move, one per legal move, in
/// generation order. An empty result means no legal move exists.
pub fn find_possible_moves(state: &GameState) -> Vec<GameState> {
    legal_moves(state).iter().map(|mv| state.apply(mv)).collect()
}

/// Whether `color` has at least one legal move in `state`, without
/// materializing full jump chains.
pub fn side_has_move(state: &GameState, color: Color) -> bool {
    for sq in 0..NUM_SQUARES {
        let pc = match state.piece_at(sq) {
            Some(p) if p.color == color => p,
            _ => continue,
        };
        let row = row_of(sq);
        let col = col_of(sq);
        for &(dr, dc) in directions(pc) {
            let over = match sq_at(row + dr, col + dc) {
                Some(s) => s,
                None => continue,
            };
            match state.piece_at(over) {
                None => return true,
                Some(v) if v.color != pc.color => {
                    if let Some(landing) = sq_at(row + 2 * dr, col + 2 * dc) {
                        if state.piece_at(landing).is_none() {
                            return true;
                        }
                    }
                }
                _ => {}
            }
        }
    }
    false
}

fn collect_steps(state: &GameState, piece: Piece, from: u8, out: &mut Vec<Move>) {
    let row = row_of(from);
    let col = col_of(from);
    for &(dr, dc) in directions(piece) {
        if let Some(to) = sq_at(row + dr, col + dc) {
            if state.piece_at(to).is_none() {
                out.push(Move::Step { from, to });
            }
        }
    }
}

/// Depth-first extension of a jump chain. Hops are played on the
/// scratch board so a captured piece cannot be jumped twice and the
/// vacated origin counts as empty for kings circling back; every hop
/// is undone before returning.
fn collect_jumps(
    state: &mut GameState,
    piece: Piece,
    from: u8,
    path: &mut Vec<u8>,
    captured: &mut Vec<u8>,
    out: &mut Vec<Move>,
) {
    let mut extended = false;
    let row = row_of(from);
    let col = col_of(from);
    for &(dr, dc) in directions(piece) {
        let over = match sq_at(row + dr, col + dc) {
            Some(s) => s,
            None => continue,
        };
        let landing = match sq_at(row + 2 * dr, col + 2 * dc) {
            Some(s) => s,
            None => continue,
        };
        let victim = match state.piece_at(over) {
            Some(pc) if pc.color != piece.color => pc,
            _ => continue,
        };
        if state.piece_at(landing).is_some() {
            continue;
        }

        state.set_piece(from, None);
        state.set_piece(over, None);
        state.set_piece(landing, Some(piece));
        path.push(landing);
        captured.push(over);

        if piece.kind == PieceKind::Man && row_of(landing) == piece.color.promotion_row() {
            // Promotion ends the move even when the new king could
            // keep jumping.
            out.push(Move::Jump {
                path: path.clone(),
                captures: captured.clone(),
            });
        } else {
            collect_jumps(state, piece, landing, path, captured, out);
        }

        captured.pop();
        path.pop();
        state.set_piece(landing, None);
        state.set_piece(over, Some(victim));
        state.set_piece(from, Some(piece));
        extended = true;
    }

    // No further hop possible: the chain so far is maximal.
    if !extended && path.len() > 1 {
        out.push(Move::Jump {
            path: path.clone(),
            captures: captured.clone(),
        });
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
