use std::fmt;

/// Number of playable (dark) squares on the board.
pub const NUM_SQUARES: u8 = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    White,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::Red => Color::White,
            Color::White => Color::Red,
        }
    }
    /// Row a man of this color promotes on. Red men move toward row 7,
    /// white men toward row 0.
    pub fn promotion_row(self) -> i8 {
        match self {
            Color::Red => 7,
            Color::White => 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceKind {
    Man,
    King,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    /// Wire-format character: men lowercase, kings uppercase.
    pub fn to_char(self) -> char {
        match (self.color, self.kind) {
            (Color::Red, PieceKind::Man) => 'r',
            (Color::Red, PieceKind::King) => 'R',
            (Color::White, PieceKind::Man) => 'w',
            (Color::White, PieceKind::King) => 'W',
        }
    }

    pub fn from_char(c: char) -> Option<Piece> {
        let (color, kind) = match c {
            'r' => (Color::Red, PieceKind::Man),
            'R' => (Color::Red, PieceKind::King),
            'w' => (Color::White, PieceKind::Man),
            'W' => (Color::White, PieceKind::King),
            _ => return None,
        };
        Some(Piece { color, kind })
    }
}

/// A transition between two board states.
///
/// `Jump` carries the full capture chain: `path` lists every square the
/// moving piece touches (at least two entries), `captures` the removed
/// enemy squares, one per hop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Move {
    Step { from: u8, to: u8 },
    Jump { path: Vec<u8>, captures: Vec<u8> },
    /// Turn passes with the board unchanged. Played only when the side
    /// to move has no legal move.
    Pass,
}

impl Move {
    pub fn is_capture(&self) -> bool {
        matches!(self, Move::Jump { .. })
    }
}

impl fmt::Display for Move {
    /// Standard checkers notation with 1-based square numbers:
    /// `9-13` for a step, `9x18x25` for a jump chain.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Step { from, to } => write!(f, "{}-{}", from + 1, to + 1),
            Move::Jump { path, .. } => {
                for (i, sq) in path.iter().enumerate() {
                    if i > 0 {
                        write!(f, "x")?;
                    }
                    write!(f, "{}", sq + 1)?;
                }
                Ok(())
            }
            Move::Pass => write!(f, "pass"),
        }
    }
}

// Helpers
pub fn row_of(sq: u8) -> i8 {
    (sq / 4) as i8
}
pub fn col_of(sq: u8) -> i8 {
    // Dark squares sit on odd columns in even rows and vice versa.
    (2 * (sq % 4) + (sq / 4 + 1) % 2) as i8
}
pub fn sq_at(row: i8, col: i8) -> Option<u8> {
    if !(0..8).contains(&row) || !(0..8).contains(&col) {
        return None;
    }
    if row % 2 == col % 2 {
        // Light square, not addressable.
        return None;
    }
    Some((row as u8) * 4 + (col as u8) / 2)
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
