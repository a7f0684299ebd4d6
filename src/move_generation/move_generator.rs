use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

pub trait MoveGenerator {
    /// Destinations for the piece on `square`, in generation order. Empty
    /// when the square is empty or off the board.
    fn destinations(&self, game_state: &GameState, square: Square) -> Vec<Square>;
}

/// Piece movement ignoring check, castling and en passant.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplifiedMoveGenerator;

impl MoveGenerator for SimplifiedMoveGenerator {
    fn destinations(&self, game_state: &GameState, square: Square) -> Vec<Square> {
        let mut out = Vec::new();
        let Some(piece) = game_state.piece_at(square) else {
            return out;
        };

        match piece.kind {
            PieceKind::Pawn => generate_pawn_moves(game_state, square, piece.side, &mut out),
            PieceKind::Knight => generate_knight_moves(game_state, square, piece.side, &mut out),
            PieceKind::Bishop => generate_bishop_moves(game_state, square, piece.side, &mut out),
            PieceKind::Rook => generate_rook_moves(game_state, square, piece.side, &mut out),
            PieceKind::Queen => generate_queen_moves(game_state, square, piece.side, &mut out),
            PieceKind::King => generate_king_moves(game_state, square, piece.side, &mut out),
        }

        tracing::trace!(square, piece = %piece, count = out.len(), "generated destinations");
        out
    }
}
