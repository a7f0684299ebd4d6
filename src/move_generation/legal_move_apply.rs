//! Validated move application.
//!
//! `apply_move` checks the destination against the generator before handing
//! off to `GameState::apply_move_unchecked`. `play_move` additionally checks
//! turn ownership and passes the turn afterwards.

use crate::chess_errors::{ChessErrors, MoveRejection};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::legal_destinations;

/// Apply `from -> to` if `to` is a generated destination of the piece on
/// `from`. Turn ownership is not checked and the turn is not passed.
pub fn apply_move(game_state: &mut GameState, from: Square, to: Square) -> Result<MoveRecord, ChessErrors> {
    if !is_valid_square(from) || !is_valid_square(to) {
        return Err(ChessErrors::InvalidMove {
            from,
            to,
            reason: MoveRejection::OutOfBounds,
        });
    }

    if game_state.piece_at(from).is_none() {
        return Err(ChessErrors::InvalidMove {
            from,
            to,
            reason: MoveRejection::EmptySource,
        });
    }

    if !legal_destinations(game_state, from).contains(&to) {
        return Err(ChessErrors::InvalidMove {
            from,
            to,
            reason: MoveRejection::IllegalDestination,
        });
    }

    game_state.apply_move_unchecked(from, to)
}

/// Caller-facing move: the piece must belong to the side to move. On
/// success the turn passes to the opponent.
pub fn play_move(game_state: &mut GameState, from: Square, to: Square) -> Result<MoveRecord, ChessErrors> {
    if let Some(piece) = game_state.piece_at(from) {
        let expected = game_state.side_to_move();
        if !is_own_piece(piece, expected) {
            return Err(ChessErrors::WrongSide {
                square: from,
                expected,
                found: piece.side,
            });
        }
    }

    let record = apply_move(game_state, from, to)?;
    game_state.toggle_turn();
    Ok(record)
}
