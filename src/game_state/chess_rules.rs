//! Rule constants for the simplified rule set.
//!
//! Starting layout, pawn geometry, and the promotion rows. Only queen
//! promotion exists.

use crate::game_state::chess_types::{PieceKind, Side};

/// Placement string of the standard starting position, top row first.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Back-rank order, left to right, shared by both sides.
pub const BACK_RANK_ORDER: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Kind a pawn becomes on the far row.
pub const PROMOTION_KIND: PieceKind = PieceKind::Queen;

#[inline]
pub const fn back_row(side: Side) -> i8 {
    match side {
        Side::White => 7,
        Side::Black => 0,
    }
}

/// Row delta of a forward pawn step.
#[inline]
pub const fn pawn_direction(side: Side) -> i8 {
    match side {
        Side::White => -1,
        Side::Black => 1,
    }
}

/// Row from which a pawn may make its double step.
#[inline]
pub const fn pawn_start_row(side: Side) -> i8 {
    match side {
        Side::White => 6,
        Side::Black => 1,
    }
}

/// Far row on which a pawn of `side` promotes.
#[inline]
pub const fn promotion_row(side: Side) -> i8 {
    back_row(side.opposite())
}
