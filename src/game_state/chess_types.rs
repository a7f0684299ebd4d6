//! Core value types for the mailbox board.
//!
//! Squares are plain indices `0..=63` laid out row-major from the top of the
//! board: row 0 is Black's back rank and row 7 is White's back rank.

use std::fmt;

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::move_record::MoveRecord;

/// Board square index (`0..=63`).
pub type Square = u8;

/// Number of squares on the board.
pub const BOARD_SQUARES: usize = 64;

/// Width (and height) of the board.
pub const BOARD_WIDTH: i8 = 8;

/// Side to move, and owner of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        f.write_str(name)
    }
}

/// A piece is nothing more than its kind and its side. Promoted pawns are
/// indistinguishable from queens that started on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, side: Side) -> Self {
        Self { kind, side }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.side, self.kind)
    }
}

/// True iff `piece` belongs to `side`.
#[inline]
pub fn is_own_piece(piece: Piece, side: Side) -> bool {
    piece.side == side
}

#[inline]
pub const fn square_row(square: Square) -> i8 {
    (square / 8) as i8
}

#[inline]
pub const fn square_col(square: Square) -> i8 {
    (square % 8) as i8
}

#[inline]
pub const fn is_valid_square(square: Square) -> bool {
    (square as usize) < BOARD_SQUARES
}

/// Square at `(row, col)`, or `None` when the coordinates fall off the board.
#[inline]
pub const fn square_at(row: i8, col: i8) -> Option<Square> {
    if row < 0 || row >= BOARD_WIDTH || col < 0 || col >= BOARD_WIDTH {
        return None;
    }
    Some((row * BOARD_WIDTH + col) as Square)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_geometry_is_row_major_from_the_top() {
        assert_eq!(square_row(52), 6);
        assert_eq!(square_col(52), 4);
        assert_eq!(square_at(4, 4), Some(36));
        assert_eq!(square_at(7, 7), Some(63));
        assert_eq!(square_at(-1, 3), None);
        assert_eq!(square_at(2, 8), None);
        assert!(!is_valid_square(64));
    }

    #[test]
    fn ownership_follows_side_only() {
        let queen = Piece::new(PieceKind::Queen, Side::Black);
        assert!(is_own_piece(queen, Side::Black));
        assert!(!is_own_piece(queen, Side::White));
        assert_eq!(Side::White.opposite(), Side::Black);
        assert_eq!(queen.to_string(), "Black queen");
    }
}
