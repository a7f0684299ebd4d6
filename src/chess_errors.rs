//! Errors used throughout the crate.
//!
//! `ChessErrors` is the single error type returned by board mutation,
//! validated move application, text parsing and the driver's command reader.
//! The move generator itself never fails: an empty or out-of-range square
//! simply has no destinations.

use std::fmt;

use thiserror::Error;

use crate::game_state::chess_types::{Side, Square};

/// Why a move was refused by `apply_move` or its raw primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    /// The source square holds no piece.
    EmptySource,
    /// The destination is not among the piece's generated destinations.
    IllegalDestination,
    /// One of the squares is not in `0..=63`.
    OutOfBounds,
    /// Source and destination are the same square.
    SameSquare,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::EmptySource => write!(f, "source square is empty"),
            MoveRejection::IllegalDestination => write!(f, "destination is not reachable"),
            MoveRejection::OutOfBounds => write!(f, "square is off the board"),
            MoveRejection::SameSquare => write!(f, "source and destination are the same square"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// A square index outside `0..=63` was used for setup or lookup.
    #[error("square index {0} is off the board")]
    SquareOutOfBounds(Square),

    /// A move was refused before touching the board.
    #[error("invalid move {from} -> {to}: {reason}")]
    InvalidMove {
        from: Square,
        to: Square,
        reason: MoveRejection,
    },

    /// The piece on `square` belongs to `found`, but `expected` is to move.
    #[error("piece on square {square} belongs to {found}, but {expected} is to move")]
    WrongSide {
        square: Square,
        expected: Side,
        found: Side,
    },

    /// A placement string could not be parsed.
    #[error("invalid placement: {0}")]
    InvalidPlacement(String),

    /// An algebraic coordinate could not be parsed.
    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraic(String),

    /// A driver command line could not be understood.
    #[error("invalid command: {0}")]
    InvalidCommand(String),
}
