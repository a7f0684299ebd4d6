//! Public entry points into move generation.

use std::collections::BTreeSet;

use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::{MoveGenerator, SimplifiedMoveGenerator};

/// Destination squares for the piece on `square`, as an ordered set.
pub fn legal_destinations(game_state: &GameState, square: Square) -> BTreeSet<Square> {
    SimplifiedMoveGenerator
        .destinations(game_state, square)
        .into_iter()
        .collect()
}

/// Every `(from, to)` pair available to `side`, scanning squares in order.
pub fn all_moves_for(game_state: &GameState, side: Side) -> Vec<(Square, Square)> {
    let generator = SimplifiedMoveGenerator;
    let mut moves = Vec::new();

    for from in 0..BOARD_SQUARES as Square {
        match game_state.piece_at(from) {
            Some(piece) if is_own_piece(piece, side) => {
                moves.extend(
                    generator
                        .destinations(game_state, from)
                        .into_iter()
                        .map(|to| (from, to)),
                );
            }
            _ => {}
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::{all_moves_for, legal_destinations};
    use crate::game_state::chess_types::*;

    #[test]
    fn empty_squares_have_no_destinations() {
        let game = GameState::new_game();
        for sq in 16..48 {
            assert!(legal_destinations(&game, sq).is_empty());
        }
        assert!(legal_destinations(&game, 64).is_empty());
    }

    #[test]
    fn e2_pawn_in_starting_position() {
        let game = GameState::new_game();
        assert_eq!(legal_destinations(&game, 52), BTreeSet::from([44, 36]));
    }

    #[test]
    fn destinations_do_not_depend_on_side_to_move() {
        // Black's pieces can be queried while White is to move.
        let game = GameState::new_game();
        assert_eq!(legal_destinations(&game, 1), BTreeSet::from([16, 18]));
    }

    #[test]
    fn starting_position_has_twenty_moves_per_side() {
        let game = GameState::new_game();
        assert_eq!(all_moves_for(&game, Side::White).len(), 20);
        assert_eq!(all_moves_for(&game, Side::Black).len(), 20);
    }

    #[test]
    fn generation_is_stable() {
        let game = GameState::from_placement("r3k2r/8/8/3Q4/8/2n5/8/R3K2R", Side::White)
            .expect("placement should parse");
        assert_eq!(
            all_moves_for(&game, Side::White),
            all_moves_for(&game, Side::White)
        );
    }
}
