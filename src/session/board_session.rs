//! Click-driven selection session.
//!
//! Holds one game plus the current selection and turns square clicks into
//! selections, deselections and moves, the way a board UI drives the core.

use std::collections::BTreeSet;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::play_move;
use crate::move_generation::legal_move_generator::legal_destinations;

/// What a click did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    Selected {
        square: Square,
        destinations: BTreeSet<Square>,
    },
    Deselected,
    Moved(MoveRecord),
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareShade {
    Light,
    Dark,
}

#[derive(Debug, Clone, Default)]
pub struct BoardSession {
    game: GameState,
    selected: Option<Square>,
    valid_moves: BTreeSet<Square>,
}

impl BoardSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_game(game: GameState) -> Self {
        Self {
            game,
            selected: None,
            valid_moves: BTreeSet::new(),
        }
    }

    #[inline]
    pub fn game(&self) -> &GameState {
        &self.game
    }

    #[inline]
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    #[inline]
    pub fn valid_moves(&self) -> &BTreeSet<Square> {
        &self.valid_moves
    }

    pub fn click(&mut self, square: Square) -> ClickOutcome {
        if let Some(selected) = self.selected {
            if selected == square {
                self.clear_selection();
                return ClickOutcome::Deselected;
            }

            if self.valid_moves.contains(&square) {
                self.clear_selection();
                return match play_move(&mut self.game, selected, square) {
                    Ok(record) => ClickOutcome::Moved(record),
                    Err(err) => {
                        tracing::warn!(%err, "selected move was refused");
                        ClickOutcome::Deselected
                    }
                };
            }

            if self.owns(square) {
                return self.select(square);
            }

            self.clear_selection();
        }

        if self.owns(square) {
            return self.select(square);
        }

        ClickOutcome::Ignored
    }

    /// Play `from -> to` directly, bypassing selection.
    pub fn play(&mut self, from: Square, to: Square) -> Result<MoveRecord, ChessErrors> {
        let record = play_move(&mut self.game, from, to)?;
        self.clear_selection();
        Ok(record)
    }

    pub fn reset(&mut self) {
        self.game.reset();
        self.clear_selection();
    }

    pub fn status_message(&self) -> String {
        format!("{}'s Turn", self.game.side_to_move())
    }

    pub fn player_status(&self, side: Side) -> &'static str {
        if self.game.side_to_move() == side {
            "Your Turn"
        } else {
            "Waiting..."
        }
    }

    /// Valid destination that currently holds a piece.
    pub fn is_capture_hint(&self, square: Square) -> bool {
        self.valid_moves.contains(&square) && self.game.piece_at(square).is_some()
    }

    fn owns(&self, square: Square) -> bool {
        self.game
            .piece_at(square)
            .is_some_and(|piece| is_own_piece(piece, self.game.side_to_move()))
    }

    fn select(&mut self, square: Square) -> ClickOutcome {
        let destinations = legal_destinations(&self.game, square);
        self.selected = Some(square);
        self.valid_moves = destinations.clone();
        ClickOutcome::Selected {
            square,
            destinations,
        }
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.valid_moves.clear();
    }
}

pub fn square_shade(square: Square) -> SquareShade {
    if (square_row(square) + square_col(square)) % 2 == 0 {
        SquareShade::Light
    } else {
        SquareShade::Dark
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::{square_shade, BoardSession, ClickOutcome, SquareShade};
    use crate::game_state::chess_types::*;

    #[test]
    fn clicking_own_piece_selects_it() {
        let mut session = BoardSession::new();
        let outcome = session.click(52);

        assert_eq!(
            outcome,
            ClickOutcome::Selected {
                square: 52,
                destinations: BTreeSet::from([36, 44]),
            }
        );
        assert_eq!(session.selected(), Some(52));
    }

    #[test]
    fn clicking_opponent_or_empty_square_is_ignored() {
        let mut session = BoardSession::new();
        assert_eq!(session.click(12), ClickOutcome::Ignored);
        assert_eq!(session.click(36), ClickOutcome::Ignored);
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn clicking_selected_square_deselects() {
        let mut session = BoardSession::new();
        session.click(52);
        assert_eq!(session.click(52), ClickOutcome::Deselected);
        assert!(session.valid_moves().is_empty());
    }

    #[test]
    fn clicking_destination_moves_and_passes_turn() {
        let mut session = BoardSession::new();
        session.click(52);
        let outcome = session.click(36);

        let ClickOutcome::Moved(record) = outcome else {
            panic!("expected a move, got {outcome:?}");
        };
        assert_eq!((record.from, record.to), (52, 36));
        assert_eq!(session.game().side_to_move(), Side::Black);
        assert_eq!(session.selected(), None);
        assert_eq!(session.status_message(), "Black's Turn");
        assert_eq!(session.player_status(Side::Black), "Your Turn");
        assert_eq!(session.player_status(Side::White), "Waiting...");
    }

    #[test]
    fn clicking_another_own_piece_reselects() {
        let mut session = BoardSession::new();
        session.click(52);
        let outcome = session.click(62);

        assert_eq!(
            outcome,
            ClickOutcome::Selected {
                square: 62,
                destinations: BTreeSet::from([45, 47]),
            }
        );
    }

    #[test]
    fn clicking_elsewhere_clears_selection() {
        let mut session = BoardSession::new();
        session.click(52);
        assert_eq!(session.click(20), ClickOutcome::Ignored);
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn capture_hints_follow_occupied_destinations() {
        let game = GameState::from_placement("4k3/8/8/3p4/4P3/8/8/4K3", Side::White)
            .expect("placement should parse");
        let mut session = BoardSession::with_game(game);
        session.click(36);

        assert!(session.is_capture_hint(27));
        assert!(!session.is_capture_hint(28));
        assert!(session.valid_moves().contains(&28));
    }

    #[test]
    fn reset_clears_game_and_selection() {
        let mut session = BoardSession::new();
        session.click(52);
        session.click(36);
        session.click(12);
        session.reset();

        assert_eq!(session.game(), &GameState::new_game());
        assert_eq!(session.selected(), None);
        assert_eq!(session.status_message(), "White's Turn");
    }

    #[test]
    fn squares_alternate_shades() {
        assert_eq!(square_shade(0), SquareShade::Light);
        assert_eq!(square_shade(1), SquareShade::Dark);
        assert_eq!(square_shade(8), SquareShade::Dark);
        assert_eq!(square_shade(63), SquareShade::Light);
    }
}
