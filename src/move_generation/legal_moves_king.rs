//! King destinations: one step in any direction. No castling, and squares
//! attacked by the opponent are not filtered out.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{push_offset_targets, Offset};

pub const KING_OFFSETS: [Offset; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub fn generate_king_moves(game_state: &GameState, from: Square, side: Side, out: &mut Vec<Square>) {
    push_offset_targets(game_state, from, side, &KING_OFFSETS, out);
}
