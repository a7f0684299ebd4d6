use crate::game_state::chess_types::{Piece, Square};

/// One entry of the append-only move history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    /// The piece as it stood on `from`, before any promotion.
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub promoted_to: Option<Piece>,
}

impl MoveRecord {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.promoted_to.is_some()
    }
}
