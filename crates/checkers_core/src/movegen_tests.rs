use super::*;

fn man(color: Color) -> Piece {
    Piece {
        color,
        kind: PieceKind::Man,
    }
}
fn king(color: Color) -> Piece {
    Piece {
        color,
        kind: PieceKind::King,
    }
}

#[test]
fn test_startpos_moves() {
    let state = GameState::startpos();
    let moves = legal_moves(&state);
    // Starting position has 7 legal moves, all steps
    assert_eq!(moves.len(), 7);
    assert!(moves.iter().all(|mv| !mv.is_capture()));
}

#[test]
fn test_captures_are_mandatory() {
    // Red could step with the man on 0, but the man on 13 has a jump,
    // so only the jump is legal.
    let mut state = GameState::empty(Color::Red);
    state.set_piece(0, Some(man(Color::Red)));
    state.set_piece(13, Some(man(Color::Red)));
    state.set_piece(17, Some(man(Color::White)));

    let moves = legal_moves(&state);
    assert_eq!(
        moves,
        vec![Move::Jump {
            path: vec![13, 22],
            captures: vec![17],
        }]
    );
}

#[test]
fn test_multi_jump_chain() {
    // Three white men lined up for a forced triple capture.
    let mut state = GameState::empty(Color::Red);
    state.set_piece(1, Some(man(Color::Red)));
    state.set_piece(6, Some(man(Color::White)));
    state.set_piece(14, Some(man(Color::White)));
    state.set_piece(21, Some(man(Color::White)));

    let moves = legal_moves(&state);
    assert_eq!(
        moves,
        vec![Move::Jump {
            path: vec![1, 10, 17, 24],
            captures: vec![6, 14, 21],
        }]
    );

    let next = state.apply(&moves[0]);
    assert_eq!(next.count(Color::White, PieceKind::Man), 0);
    assert_eq!(next.piece_at(24), Some(man(Color::Red)));
}

#[test]
fn test_promotion_ends_jump_chain() {
    // The man on 20 jumps into the back row and promotes. The new king
    // could capture the man on 25, but promotion ends the move.
    let mut state = GameState::empty(Color::Red);
    state.set_piece(20, Some(man(Color::Red)));
    state.set_piece(24, Some(man(Color::White)));
    state.set_piece(25, Some(man(Color::White)));

    let moves = legal_moves(&state);
    assert_eq!(
        moves,
        vec![Move::Jump {
            path: vec![20, 29],
            captures: vec![24],
        }]
    );

    let next = state.apply(&moves[0]);
    assert_eq!(next.piece_at(29), Some(king(Color::Red)));
    assert_eq!(next.piece_at(25), Some(man(Color::White)));
}

#[test]
fn test_branching_jumps_yield_one_move_each() {
    // From 9 the man can jump left or right; both maximal chains are
    // legal moves.
    let mut state = GameState::empty(Color::Red);
    state.set_piece(9, Some(man(Color::Red)));
    state.set_piece(13, Some(man(Color::White)));
    state.set_piece(14, Some(man(Color::White)));

    let mut moves = legal_moves(&state);
    moves.sort_by_key(|mv| match mv {
        Move::Jump { path, .. } => path[path.len() - 1],
        _ => u8::MAX,
    });
    assert_eq!(
        moves,
        vec![
            Move::Jump {
                path: vec![9, 16],
                captures: vec![13],
            },
            Move::Jump {
                path: vec![9, 18],
                captures: vec![14],
            },
        ]
    );
}

#[test]
fn test_king_steps_all_directions() {
    let mut state = GameState::empty(Color::Red);
    state.set_piece(17, Some(king(Color::Red)));
    state.set_piece(0, Some(man(Color::White)));
    assert_eq!(legal_moves(&state).len(), 4);

    // The same square as a man only moves forward
    state.set_piece(17, Some(man(Color::Red)));
    assert_eq!(legal_moves(&state).len(), 2);
}

#[test]
fn test_king_jumps_backward() {
    let mut state = GameState::empty(Color::White);
    state.set_piece(5, Some(king(Color::White)));
    state.set_piece(9, Some(man(Color::Red)));

    let moves = legal_moves(&state);
    assert_eq!(
        moves,
        vec![Move::Jump {
            path: vec![5, 14],
            captures: vec![9],
        }]
    );
}

#[test]
fn test_blocked_side_has_no_moves() {
    // The white man on 28 is wedged behind a red king and cannot jump
    // because the landing square is occupied.
    let state = GameState::from_message(".....................r..R...w... w 0").unwrap();
    assert!(legal_moves(&state).is_empty());
    assert!(!side_has_move(&state, Color::White));
    assert!(side_has_move(&state, Color::Red));
}

#[test]
fn test_side_has_move_via_jump_only() {
    // The man on 0 has both steps blocked by its own pieces but still
    // has a capture.
    let mut state = GameState::empty(Color::Red);
    state.set_piece(0, Some(man(Color::Red)));
    state.set_piece(4, Some(man(Color::Red)));
    state.set_piece(5, Some(man(Color::White)));
    state.set_piece(8, Some(man(Color::White)));
    state.set_piece(10, Some(man(Color::White)));

    assert!(side_has_move(&state, Color::Red));
    let moves = legal_moves(&state);
    assert!(moves.iter().all(|mv| mv.is_capture()));
}

#[test]
fn test_successors_follow_move_order() {
    let state = GameState::startpos();
    let moves = legal_moves(&state);
    let successors = find_possible_moves(&state);
    assert_eq!(successors.len(), moves.len());
    for (mv, succ) in moves.iter().zip(&successors) {
        assert_eq!(state.apply(mv), *succ);
    }
}
