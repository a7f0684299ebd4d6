//! Mailbox board state.
//!
//! `GameState` owns the 64 squares, the side to move and the move history.
//! It offers lookups and raw mutation primitives only; whether a move is
//! allowed is decided by the move generator before `apply_move_unchecked`
//! is reached.

use crate::chess_errors::{ChessErrors, MoveRejection};
use crate::game_state::chess_rules::{
    back_row, pawn_start_row, promotion_row, BACK_RANK_ORDER, PROMOTION_KIND,
};
use crate::game_state::chess_types::*;
use crate::utils::placement::parse_placement;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: [Option<Piece>; BOARD_SQUARES],
    side_to_move: Side,
    history: Vec<MoveRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard starting position, White to move.
    pub fn new_game() -> Self {
        let mut board = [None; BOARD_SQUARES];

        for side in [Side::White, Side::Black] {
            for (col, kind) in BACK_RANK_ORDER.iter().enumerate() {
                let col = col as i8;
                if let Some(sq) = square_at(back_row(side), col) {
                    board[sq as usize] = Some(Piece::new(*kind, side));
                }
                if let Some(sq) = square_at(pawn_start_row(side), col) {
                    board[sq as usize] = Some(Piece::new(PieceKind::Pawn, side));
                }
            }
        }

        Self {
            board,
            side_to_move: Side::White,
            history: Vec::new(),
        }
    }

    /// Empty board with no history.
    pub fn new_empty(side_to_move: Side) -> Self {
        Self {
            board: [None; BOARD_SQUARES],
            side_to_move,
            history: Vec::new(),
        }
    }

    /// Build a position from a placement string such as
    /// `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`.
    pub fn from_placement(placement: &str, side_to_move: Side) -> Result<Self, ChessErrors> {
        let board = parse_placement(placement)?;
        Ok(Self {
            board,
            side_to_move,
            history: Vec::new(),
        })
    }

    /// Piece on `square`; `None` when empty or off the board.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.get(square as usize).copied().flatten()
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[inline]
    pub fn board(&self) -> &[Option<Piece>; BOARD_SQUARES] {
        &self.board
    }

    /// Setup primitive: put `piece` (or nothing) on `square`. Does not touch
    /// history or turn.
    pub fn place_piece(&mut self, square: Square, piece: Option<Piece>) -> Result<(), ChessErrors> {
        let slot = self
            .board
            .get_mut(square as usize)
            .ok_or(ChessErrors::SquareOutOfBounds(square))?;
        *slot = piece;
        Ok(())
    }

    /// Relocate the piece on `from` to `to` without any legality check.
    ///
    /// Whatever stood on `to` is overwritten, which is how captures happen.
    /// A pawn reaching its far row becomes a queen. The turn is left alone.
    /// Only a missing source piece, an off-board square or `from == to` is
    /// refused.
    pub fn apply_move_unchecked(
        &mut self,
        from: Square,
        to: Square,
    ) -> Result<MoveRecord, ChessErrors> {
        if !is_valid_square(from) || !is_valid_square(to) {
            return Err(ChessErrors::InvalidMove {
                from,
                to,
                reason: MoveRejection::OutOfBounds,
            });
        }

        let piece = self.board[from as usize].ok_or(ChessErrors::InvalidMove {
            from,
            to,
            reason: MoveRejection::EmptySource,
        })?;

        if from == to {
            return Err(ChessErrors::InvalidMove {
                from,
                to,
                reason: MoveRejection::SameSquare,
            });
        }

        let captured = self.board[to as usize].take();
        self.board[from as usize] = None;

        let promoted_to = (piece.kind == PieceKind::Pawn
            && square_row(to) == promotion_row(piece.side))
        .then(|| Piece::new(PROMOTION_KIND, piece.side));

        self.board[to as usize] = Some(promoted_to.unwrap_or(piece));

        let record = MoveRecord {
            from,
            to,
            piece,
            captured,
            promoted_to,
        };
        self.history.push(record);

        tracing::debug!(
            from,
            to,
            piece = %piece,
            capture = captured.is_some(),
            promotion = promoted_to.is_some(),
            "applied move"
        );

        Ok(record)
    }

    #[inline]
    pub fn toggle_turn(&mut self) {
        self.side_to_move = self.side_to_move.opposite();
    }

    /// Discard everything and start a fresh game.
    pub fn reset(&mut self) {
        tracing::debug!(moves_played = self.history.len(), "resetting game");
        *self = Self::new_game();
    }
}
