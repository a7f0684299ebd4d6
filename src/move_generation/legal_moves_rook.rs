//! Rook destinations: rays along rows and columns.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{push_ray_targets, Offset};

pub const ROOK_DIRECTIONS: [Offset; 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub fn generate_rook_moves(game_state: &GameState, from: Square, side: Side, out: &mut Vec<Square>) {
    push_ray_targets(game_state, from, side, &ROOK_DIRECTIONS, out);
}
