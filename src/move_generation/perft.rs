//! Move-tree node counting under the simplified rules.
//!
//! Every generated move for the side to move is played with `play_move`, so
//! the counts also exercise the validated apply path and turn passing.

use crate::chess_errors::ChessErrors;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::play_move;
use crate::move_generation::legal_move_generator::all_moves_for;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub promotions: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
    }
}

/// Leaf count `depth` plies below `game_state`, with the captures and
/// promotions made on the final ply.
pub fn perft(game_state: &GameState, depth: u8) -> Result<PerftCounts, ChessErrors> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();

    for (from, to) in all_moves_for(game_state, game_state.side_to_move()) {
        let mut child = game_state.clone();
        let record = play_move(&mut child, from, to)?;

        if depth == 1 {
            total.nodes += 1;
            if record.is_capture() {
                total.captures += 1;
            }
            if record.is_promotion() {
                total.promotions += 1;
            }
        } else {
            total.merge(perft(&child, depth - 1)?);
        }
    }

    Ok(total)
}
