//! Primitives shared by every per-piece generator.

use crate::game_state::chess_types::*;

/// A `(row, col)` step.
pub type Offset = (i8, i8);

#[inline]
pub const fn on_board(row: i8, col: i8) -> bool {
    row >= 0 && row < BOARD_WIDTH && col >= 0 && col < BOARD_WIDTH
}

/// Square reached from `from` by `offset`, if it stays on the board.
#[inline]
pub fn offset_square(from: Square, (d_row, d_col): Offset) -> Option<Square> {
    let row = square_row(from) + d_row;
    let col = square_col(from) + d_col;
    if !on_board(row, col) {
        return None;
    }
    square_at(row, col)
}

/// Empty, or held by the opponent of `mover`.
#[inline]
pub fn can_land(game_state: &GameState, square: Square, mover: Side) -> bool {
    match game_state.piece_at(square) {
        None => true,
        Some(piece) => !is_own_piece(piece, mover),
    }
}

/// Single-step generators (knight and king).
pub fn push_offset_targets(
    game_state: &GameState,
    from: Square,
    mover: Side,
    offsets: &[Offset],
    out: &mut Vec<Square>,
) {
    for &offset in offsets {
        if let Some(to) = offset_square(from, offset) {
            if can_land(game_state, to, mover) {
                out.push(to);
            }
        }
    }
}

/// Ray casting for sliding pieces. Each ray stops at the edge, before an own
/// piece, or on an opposing piece.
pub fn push_ray_targets(
    game_state: &GameState,
    from: Square,
    mover: Side,
    directions: &[Offset],
    out: &mut Vec<Square>,
) {
    for &direction in directions {
        let mut current = from;
        while let Some(to) = offset_square(current, direction) {
            match game_state.piece_at(to) {
                None => out.push(to),
                Some(piece) => {
                    if !is_own_piece(piece, mover) {
                        out.push(to);
                    }
                    break;
                }
            }
            current = to;
        }
    }
}
