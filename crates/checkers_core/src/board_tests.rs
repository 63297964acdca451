use super::*;

const START_MSG: &str = "rrrrrrrrrrrr........wwwwwwwwwwww r 0";

fn red_man() -> Piece {
    Piece {
        color: Color::Red,
        kind: PieceKind::Man,
    }
}
fn white_man() -> Piece {
    Piece {
        color: Color::White,
        kind: PieceKind::Man,
    }
}
fn red_king() -> Piece {
    Piece {
        color: Color::Red,
        kind: PieceKind::King,
    }
}

#[test]
fn test_startpos() {
    let state = GameState::startpos();
    assert_eq!(state.next_player, Color::Red);
    assert_eq!(state.halfmove_clock, 0);
    assert_eq!(state.count(Color::Red, PieceKind::Man), 12);
    assert_eq!(state.count(Color::White, PieceKind::Man), 12);
    assert_eq!(state.count(Color::Red, PieceKind::King), 0);
    assert_eq!(state.to_message(), START_MSG);
}

#[test]
fn test_message_round_trip() {
    let msg = ".R...w.....r........W........w.. w 17";
    let state = GameState::from_message(msg).unwrap();
    assert_eq!(state.piece_at(1), Some(red_king()));
    assert_eq!(state.piece_at(5), Some(white_man()));
    assert_eq!(state.piece_at(11), Some(red_man()));
    assert_eq!(
        state.piece_at(20),
        Some(Piece {
            color: Color::White,
            kind: PieceKind::King,
        })
    );
    assert_eq!(state.next_player, Color::White);
    assert_eq!(state.halfmove_clock, 17);
    assert_eq!(state.to_message(), msg);
}

#[test]
fn test_malformed_messages() {
    // Missing fields
    assert!(GameState::from_message("rrrr r").is_err());
    // Board string too short
    assert!(GameState::from_message("rrr w 0").is_err());
    // Unknown piece character
    assert!(GameState::from_message(&format!("x{} r 0", ".".repeat(31))).is_err());
    // Bad side tag
    assert!(GameState::from_message(&format!("{} b 0", ".".repeat(32))).is_err());
    // Bad clock
    assert!(GameState::from_message(&format!("{} r abc", ".".repeat(32))).is_err());
}

#[test]
fn test_apply_step() {
    let mut state = GameState::startpos();
    state.halfmove_clock = 9;
    let next = state.apply(&Move::Step { from: 8, to: 13 });

    assert_eq!(next.piece_at(8), None);
    assert_eq!(next.piece_at(13), Some(red_man()));
    assert_eq!(next.next_player, Color::White);
    // Man moves reset the quiet-move clock
    assert_eq!(next.halfmove_clock, 0);
    // The source state is untouched
    assert_eq!(state.piece_at(8), Some(red_man()));
    assert_eq!(state.next_player, Color::Red);
}

#[test]
fn test_apply_king_step_ticks_clock() {
    let mut state = GameState::empty(Color::Red);
    state.set_piece(13, Some(red_king()));
    state.set_piece(0, Some(white_man()));
    state.halfmove_clock = 5;

    let next = state.apply(&Move::Step { from: 13, to: 17 });
    assert_eq!(next.piece_at(17), Some(red_king()));
    assert_eq!(next.halfmove_clock, 6);
}

#[test]
fn test_apply_jump() {
    let mut state = GameState::empty(Color::Red);
    state.set_piece(13, Some(red_man()));
    state.set_piece(17, Some(white_man()));
    state.halfmove_clock = 12;

    let next = state.apply(&Move::Jump {
        path: vec![13, 22],
        captures: vec![17],
    });
    assert_eq!(next.piece_at(13), None);
    assert_eq!(next.piece_at(17), None);
    assert_eq!(next.piece_at(22), Some(red_man()));
    assert_eq!(next.next_player, Color::White);
    assert_eq!(next.halfmove_clock, 0);
}

#[test]
fn test_apply_promotes_on_last_row() {
    // Step into the back row
    let mut state = GameState::empty(Color::Red);
    state.set_piece(25, Some(red_man()));
    state.set_piece(0, Some(white_man()));
    let next = state.apply(&Move::Step { from: 25, to: 29 });
    assert_eq!(next.piece_at(29), Some(red_king()));

    // Jump into the back row
    let mut state = GameState::empty(Color::Red);
    state.set_piece(21, Some(red_man()));
    state.set_piece(25, Some(white_man()));
    let next = state.apply(&Move::Jump {
        path: vec![21, 30],
        captures: vec![25],
    });
    assert_eq!(next.piece_at(30), Some(red_king()));
}

#[test]
fn test_apply_pass() {
    let mut state = GameState::empty(Color::White);
    state.set_piece(4, Some(red_man()));
    state.set_piece(28, Some(white_man()));
    state.halfmove_clock = 3;

    let next = state.apply(&Move::Pass);
    assert_eq!(next.board, state.board);
    assert_eq!(next.next_player, Color::Red);
    assert_eq!(next.halfmove_clock, 4);
}

#[test]
fn test_display_shows_side_to_move() {
    let rendered = GameState::startpos().to_string();
    assert!(rendered.contains("red to move, clock 0"));
}
