//! Terminal-oriented Unicode board renderer.
//!
//! Row 0 is printed first, so White sits at the bottom just like the
//! on-screen board.

use crate::game_state::chess_types::*;
use crate::session::board_session::{square_shade, BoardSession, SquareShade};

/// Render the session's board. Destinations of the selected piece show as
/// `*` when empty and bracketed when they hold a capture; other empty
/// squares show their shade.
pub fn render_session(session: &BoardSession) -> String {
    let game_state = session.game();
    let mut out = String::new();

    out.push_str("   a  b  c  d  e  f  g  h\n");

    for row in 0..BOARD_WIDTH {
        let rank = char::from(b'8' - row as u8);
        out.push(rank);
        out.push(' ');

        for col in 0..BOARD_WIDTH {
            let Some(sq) = square_at(row, col) else {
                continue;
            };
            match game_state.piece_at(sq) {
                Some(piece) if session.is_capture_hint(sq) => {
                    out.push('[');
                    out.push(piece_to_unicode(piece));
                    out.push(']');
                }
                Some(piece) => {
                    out.push(' ');
                    out.push(piece_to_unicode(piece));
                    out.push(' ');
                }
                None if session.valid_moves().contains(&sq) => out.push_str(" * "),
                None => match square_shade(sq) {
                    SquareShade::Light => out.push_str("   "),
                    SquareShade::Dark => out.push_str(" · "),
                },
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("   a  b  c  d  e  f  g  h");

    out
}

pub fn piece_to_unicode(piece: Piece) -> char {
    match (piece.side, piece.kind) {
        (Side::White, PieceKind::Pawn) => '♙',
        (Side::White, PieceKind::Knight) => '♘',
        (Side::White, PieceKind::Bishop) => '♗',
        (Side::White, PieceKind::Rook) => '♖',
        (Side::White, PieceKind::Queen) => '♕',
        (Side::White, PieceKind::King) => '♔',
        (Side::Black, PieceKind::Pawn) => '♟',
        (Side::Black, PieceKind::Knight) => '♞',
        (Side::Black, PieceKind::Bishop) => '♝',
        (Side::Black, PieceKind::Rook) => '♜',
        (Side::Black, PieceKind::Queen) => '♛',
        (Side::Black, PieceKind::King) => '♚',
    }
}
