//! Placement strings (the board field of FEN).
//!
//! Rows are listed from row 0 (Black's back rank) down to row 7, separated by
//! `/`. Digits count empty squares; uppercase letters are White pieces and
//! lowercase letters are Black pieces. Letter case is only read and written
//! here; inside the crate a piece's side is always the `Side` enum.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;

pub fn parse_placement(placement: &str) -> Result<[Option<Piece>; BOARD_SQUARES], ChessErrors> {
    let rows: Vec<&str> = placement.trim().split('/').collect();
    if rows.len() != BOARD_WIDTH as usize {
        return Err(ChessErrors::InvalidPlacement(format!(
            "expected 8 rows, found {}",
            rows.len()
        )));
    }

    let mut board = [None; BOARD_SQUARES];

    for (row, row_str) in rows.iter().enumerate() {
        let mut col = 0usize;

        for ch in row_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidPlacement(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = piece_from_char(ch).ok_or_else(|| {
                ChessErrors::InvalidPlacement(format!("invalid piece character '{ch}'"))
            })?;

            if col >= BOARD_WIDTH as usize {
                return Err(ChessErrors::InvalidPlacement(format!(
                    "row {row} has too many squares"
                )));
            }

            board[row * BOARD_WIDTH as usize + col] = Some(piece);
            col += 1;
        }

        if col != BOARD_WIDTH as usize {
            return Err(ChessErrors::InvalidPlacement(format!(
                "row {row} covers {col} squares instead of 8"
            )));
        }
    }

    Ok(board)
}

pub fn generate_placement(game_state: &GameState) -> String {
    let mut out = String::new();

    for row in 0..BOARD_WIDTH {
        let mut empty_count = 0u8;

        for col in 0..BOARD_WIDTH {
            let piece = square_at(row, col).and_then(|sq| game_state.piece_at(sq));
            match piece {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece_to_char(piece));
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < BOARD_WIDTH - 1 {
            out.push('/');
        }
    }

    out
}

fn piece_from_char(ch: char) -> Option<Piece> {
    let side = if ch.is_ascii_uppercase() {
        Side::White
    } else if ch.is_ascii_lowercase() {
        Side::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(kind, side))
}

fn piece_to_char(piece: Piece) -> char {
    let ch = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.side {
        Side::White => ch.to_ascii_uppercase(),
        Side::Black => ch,
    }
}
