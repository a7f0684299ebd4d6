use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{push_ray_targets, Offset};
use crate::move_generation::legal_moves_bishop::BISHOP_DIRECTIONS;
use crate::move_generation::legal_moves_rook::ROOK_DIRECTIONS;

/// Rook directions followed by bishop directions.
pub const QUEEN_DIRECTIONS: [Offset; 8] = [
    ROOK_DIRECTIONS[0],
    ROOK_DIRECTIONS[1],
    ROOK_DIRECTIONS[2],
    ROOK_DIRECTIONS[3],
    BISHOP_DIRECTIONS[0],
    BISHOP_DIRECTIONS[1],
    BISHOP_DIRECTIONS[2],
    BISHOP_DIRECTIONS[3],
];

pub fn generate_queen_moves(
    game_state: &GameState,
    from: Square,
    side: Side,
    out: &mut Vec<Square>,
) {
    push_ray_targets(game_state, from, side, &QUEEN_DIRECTIONS, out);
}
