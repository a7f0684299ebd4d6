//! Pawn destinations: forward pushes onto empty squares, a double push from
//! the start row, and diagonal captures. No en passant. Promotion happens
//! when the move is applied, not here.

use crate::game_state::chess_rules::{pawn_direction, pawn_start_row};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::offset_square;

pub fn generate_pawn_moves(game_state: &GameState, from: Square, side: Side, out: &mut Vec<Square>) {
    let direction = pawn_direction(side);

    if let Some(one_step) = offset_square(from, (direction, 0)) {
        if game_state.piece_at(one_step).is_none() {
            out.push(one_step);

            if square_row(from) == pawn_start_row(side) {
                if let Some(two_step) = offset_square(one_step, (direction, 0)) {
                    if game_state.piece_at(two_step).is_none() {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for col_delta in [-1i8, 1i8] {
        let Some(to) = offset_square(from, (direction, col_delta)) else {
            continue;
        };
        if matches!(game_state.piece_at(to), Some(target) if target.side != side) {
            out.push(to);
        }
    }
}
