use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{push_offset_targets, Offset};

pub const KNIGHT_OFFSETS: [Offset; 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub fn generate_knight_moves(
    game_state: &GameState,
    from: Square,
    side: Side,
    out: &mut Vec<Square>,
) {
    push_offset_targets(game_state, from, side, &KNIGHT_OFFSETS, out);
}
