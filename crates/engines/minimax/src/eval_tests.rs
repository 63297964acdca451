use super::*;
use checkers_core::{find_possible_moves, Piece, DRAW_MOVE_LIMIT};

const RED_PERSP: Perspective = Perspective {
    player: Color::Red,
    opponent: Color::White,
};
const WHITE_PERSP: Perspective = Perspective {
    player: Color::White,
    opponent: Color::Red,
};

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
fn test_perspective_fixed_from_root() {
    let state = GameState::startpos();
    let successors = find_possible_moves(&state);
    assert_eq!(Perspective::of(&state, &successors[0]), RED_PERSP);
}

#[test]
fn test_startpos_is_balanced() {
    let state = GameState::startpos();
    assert_eq!(evaluate(&state, RED_PERSP), 0);
    assert_eq!(evaluate(&state, WHITE_PERSP), 0);
}

#[test]
fn test_win_scores_are_exact() {
    // White to move with no legal move: a red win worth exactly
    // WIN_SCORE, whatever the material count says.
    let state = GameState::from_message(".....................r..R...w... w 0").unwrap();
    assert!(state.is_red_win());
    assert_eq!(evaluate(&state, RED_PERSP), WIN_SCORE);
    assert_eq!(evaluate(&state, WHITE_PERSP), -WIN_SCORE);

    // Elimination win
    let state = GameState::from_message(&format!(".......R{} w 0", ".".repeat(24))).unwrap();
    assert!(state.is_red_win());
    assert_eq!(evaluate(&state, RED_PERSP), WIN_SCORE);
}

#[test]
fn test_draw_scores_zero_before_wins() {
    // Clock has run out in a position white has also lost; the draw
    // takes precedence.
    let state = GameState::from_message(&format!(
        ".....................r..R...w... w {}",
        DRAW_MOVE_LIMIT
    ))
    .unwrap();
    assert!(state.is_draw() && state.is_red_win());
    assert_eq!(evaluate(&state, RED_PERSP), 0);
    assert_eq!(evaluate(&state, WHITE_PERSP), 0);
}

#[test]
fn test_material_differential() {
    // Four men against two men and a king: 4 - (2 + 5) = -3
    let mut state = GameState::empty(Color::Red);
    for sq in [8, 9, 10, 12] {
        state.set_piece(sq, Some(man(Color::Red)));
    }
    for sq in [21, 22] {
        state.set_piece(sq, Some(man(Color::White)));
    }
    state.set_piece(25, Some(king(Color::White)));

    assert!(!state.is_eog());
    assert_eq!(evaluate(&state, RED_PERSP), -3);
    assert_eq!(evaluate(&state, WHITE_PERSP), 3);
}

#[test]
fn test_kings_worth_five() {
    let mut state = GameState::empty(Color::White);
    state.set_piece(13, Some(king(Color::Red)));
    state.set_piece(26, Some(man(Color::White)));
    state.set_piece(27, Some(man(Color::White)));

    assert!(!state.is_eog());
    assert_eq!(evaluate(&state, RED_PERSP), KING_VALUE - 2 * MAN_VALUE);
    assert_eq!(piece_value(PieceKind::Man), MAN_VALUE);
    assert_eq!(piece_value(PieceKind::King), KING_VALUE);
}

#[test]
fn test_evaluation_is_pure() {
    let state = GameState::from_message("rr...ww.r...r.wwr.r..w.w.r.r.... r 0").unwrap();
    let copy = state.clone();
    let first = evaluate(&state, RED_PERSP);
    let second = evaluate(&state, RED_PERSP);
    assert_eq!(first, second);
    assert_eq!(state, copy);
}
