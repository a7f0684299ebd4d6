use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{push_ray_targets, Offset};

pub const BISHOP_DIRECTIONS: [Offset; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub fn generate_bishop_moves(
    game_state: &GameState,
    from: Square,
    side: Side,
    out: &mut Vec<Square>,
) {
    push_ray_targets(game_state, from, side, &BISHOP_DIRECTIONS, out);
}
