//! Crate root module declarations for the mailbox chess board manager.
//!
//! The core is `game_state` (the 64-square board, turn and history) and
//! `move_generation` (per-piece destinations and validated application).
//! `session`, `engines` and `utils` build the interactive workflow, a random
//! mover and text formats on top of that core.

pub mod chess_errors;
pub mod config;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod move_record;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
}

pub mod engines {
    pub mod engine_random;
}

pub mod session {
    pub mod board_session;
    pub mod commands;
    pub mod text_driver;
}

pub mod utils {
    pub mod algebraic;
    pub mod placement;
    pub mod render_game_state;
}

pub use chess_errors::{ChessErrors, MoveRejection};
pub use game_state::chess_types::{GameState, MoveRecord, Piece, PieceKind, Side, Square};
pub use move_generation::legal_move_apply::{apply_move, play_move};
pub use move_generation::legal_move_generator::legal_destinations;
