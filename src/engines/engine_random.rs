//! Random mover.
//!
//! Picks uniformly among every destination available to the side to move.
//! Used by the driver's `random` command and for smoke-testing long move
//! sequences.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::game_state::chess_types::{GameState, Square};
use crate::move_generation::legal_move_generator::all_moves_for;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn name(&self) -> &str {
        "Mailbox Random"
    }

    /// A `(from, to)` pair for the side to move, or `None` if it has no moves.
    pub fn choose_move(&mut self, game_state: &GameState) -> Option<(Square, Square)> {
        let moves = all_moves_for(game_state, game_state.side_to_move());
        let picked = moves.as_slice().choose(&mut self.rng).copied();
        tracing::debug!(candidates = moves.len(), ?picked, "random engine picked a move");
        picked
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}
