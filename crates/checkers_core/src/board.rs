use std::fmt;

use crate::movegen;
use crate::types::*;

/// Number of plies without a capture or man move before the game is
/// drawn (40 moves per side).
pub const DRAW_MOVE_LIMIT: u32 = 80;

/// A full game state: board contents, side to move and the quiet-move
/// clock. The search layer treats states as values and never mutates
/// one in place; `apply` builds the successor instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub board: [Option<Piece>; 32],
    pub next_player: Color,
    pub halfmove_clock: u32,
}

impl GameState {
    pub fn startpos() -> Self {
        let mut p = GameState {
            board: [None; 32],
            next_player: Color::Red,
            halfmove_clock: 0,
        };
        // Red on rows 0..3, white on rows 5..8, red moves first.
        for sq in 0..12 {
            p.board[sq] = Some(Piece {
                color: Color::Red,
                kind: PieceKind::Man,
            });
        }
        for sq in 20..32 {
            p.board[sq] = Some(Piece {
                color: Color::White,
                kind: PieceKind::Man,
            });
        }
        p
    }

    /// An empty board with `next_player` to move. Test positions are
    /// built on top of this with `set_piece`.
    pub fn empty(next_player: Color) -> Self {
        GameState {
            board: [None; 32],
            next_player,
            halfmove_clock: 0,
        }
    }

    /// Parse a referee message: 32 board characters, the side tag and
    /// the quiet-move clock, space separated.
    ///
    /// Example: `rrrrrrrrrrrr........wwwwwwwwwwww r 0`
    pub fn from_message(msg: &str) -> Result<GameState, String> {
        let parts: Vec<&str> = msg.split_whitespace().collect();
        if parts.len() != 3 {
            return Err(format!(
                "expected 3 message fields, got {}: '{}'",
                parts.len(),
                msg
            ));
        }

        let cells: Vec<char> = parts[0].chars().collect();
        if cells.len() != NUM_SQUARES as usize {
            return Err(format!(
                "expected {} board characters, got {}",
                NUM_SQUARES,
                cells.len()
            ));
        }
        let mut board = [None; 32];
        for (i, &ch) in cells.iter().enumerate() {
            if ch == '.' {
                continue;
            }
            match Piece::from_char(ch) {
                Some(pc) => board[i] = Some(pc),
                None => return Err(format!("invalid piece character '{}' at square {}", ch, i)),
            }
        }

        let next_player = match parts[1] {
            "r" => Color::Red,
            "w" => Color::White,
            other => return Err(format!("invalid side tag '{}'", other)),
        };

        let halfmove_clock: u32 = parts[2]
            .parse()
            .map_err(|_| format!("invalid clock field '{}'", parts[2]))?;

        Ok(GameState {
            board,
            next_player,
            halfmove_clock,
        })
    }

    /// Render this state as a referee message, the inverse of
    /// `from_message`.
    pub fn to_message(&self) -> String {
        let mut cells = String::with_capacity(NUM_SQUARES as usize + 8);
        for sq in 0..NUM_SQUARES {
            match self.piece_at(sq) {
                Some(pc) => cells.push(pc.to_char()),
                None => cells.push('.'),
            }
        }
        let tag = match self.next_player {
            Color::Red => "r",
            Color::White => "w",
        };
        format!("{} {} {}", cells, tag, self.halfmove_clock)
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board[sq as usize]
    }
    pub fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        self.board[sq as usize] = pc;
    }

    pub fn count(&self, color: Color, kind: PieceKind) -> u32 {
        self.board
            .iter()
            .flatten()
            .filter(|pc| pc.color == color && pc.kind == kind)
            .count() as u32
    }

    fn has_pieces(&self, color: Color) -> bool {
        self.board.iter().flatten().any(|pc| pc.color == color)
    }

    /// Build the successor state reached by playing `mv`.
    ///
    /// Assumes `mv` is legal for this state; jumps and steps that
    /// reference empty squares panic. The quiet-move clock resets on
    /// any capture or man move, since both are irreversible.
    pub fn apply(&self, mv: &Move) -> GameState {
        let mut next = self.clone();
        next.next_player = self.next_player.other();

        match mv {
            Move::Pass => {
                next.halfmove_clock = self.halfmove_clock + 1;
            }
            Move::Step { from, to } => {
                let piece = self.piece_at(*from).expect("step from an empty square");
                next.set_piece(*from, None);
                next.set_piece(*to, Some(promote_if_due(piece, *to)));
                next.halfmove_clock = if piece.kind == PieceKind::Man {
                    0
                } else {
                    self.halfmove_clock + 1
                };
            }
            Move::Jump { path, captures } => {
                let from = path[0];
                let to = path[path.len() - 1];
                let piece = self.piece_at(from).expect("jump from an empty square");
                next.set_piece(from, None);
                for &cap in captures {
                    next.set_piece(cap, None);
                }
                next.set_piece(to, Some(promote_if_due(piece, to)));
                next.halfmove_clock = 0;
            }
        }
        next
    }

    /// Quiet-move clock has run out. Checked before the win
    /// classifiers wherever both could hold.
    pub fn is_draw(&self) -> bool {
        self.halfmove_clock >= DRAW_MOVE_LIMIT
    }

    /// Red has won: white has no pieces left, or white is to move with
    /// no legal move. Being unable to move loses.
    pub fn is_red_win(&self) -> bool {
        if !self.has_pieces(Color::White) {
            return true;
        }
        self.next_player == Color::White && !movegen::side_has_move(self, Color::White)
    }

    pub fn is_white_win(&self) -> bool {
        if !self.has_pieces(Color::Red) {
            return true;
        }
        self.next_player == Color::Red && !movegen::side_has_move(self, Color::Red)
    }

    pub fn is_eog(&self) -> bool {
        self.is_draw() || self.is_red_win() || self.is_white_win()
    }

    /// Which side has won, ignoring the draw clock. Harnesses check
    /// `is_draw` first.
    pub fn winner(&self) -> Option<Color> {
        if self.is_red_win() {
            Some(Color::Red)
        } else if self.is_white_win() {
            Some(Color::White)
        } else {
            None
        }
    }
}

fn promote_if_due(piece: Piece, to: u8) -> Piece {
    if piece.kind == PieceKind::Man && row_of(to) == piece.color.promotion_row() {
        Piece {
            color: piece.color,
            kind: PieceKind::King,
        }
    } else {
        piece
    }
}

impl fmt::Display for GameState {
    /// 8x8 diagram with light squares left blank, for logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            for col in 0..8 {
                let cell = match sq_at(row, col) {
                    Some(sq) => match self.piece_at(sq) {
                        Some(pc) => pc.to_char(),
                        None => '.',
                    },
                    None => ' ',
                };
                write!(f, "{} ", cell)?;
            }
            writeln!(f)?;
        }
        let tag = match self.next_player {
            Color::Red => "red",
            Color::White => "white",
        };
        write!(f, "{} to move, clock {}", tag, self.halfmove_clock)
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
