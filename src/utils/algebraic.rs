//! Square conversions for algebraic coordinates.
//!
//! Row 0 of the board is rank 8, so `a8` is square 0, `h1` is square 63 and
//! `e2` is square 52.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{is_valid_square, square_col, square_row, Square};

/// Convert algebraic notation (for example: "e4") to a square index.
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraic(square.to_owned()));
    }

    let col = file - b'a';
    let row = b'8' - rank;
    Ok(row * 8 + col)
}

/// Convert a square index (`0..=63`) to algebraic notation (for example: "e4").
pub fn square_to_algebraic(square: Square) -> Result<String, ChessErrors> {
    if !is_valid_square(square) {
        return Err(ChessErrors::SquareOutOfBounds(square));
    }

    let file_char = char::from(b'a' + square_col(square) as u8);
    let rank_char = char::from(b'8' - square_row(square) as u8);

    Ok(format!("{file_char}{rank_char}"))
}

/// Accept either algebraic notation or a raw index such as "52".
pub fn parse_square(token: &str) -> Result<Square, ChessErrors> {
    if let Ok(index) = token.parse::<u8>() {
        return if is_valid_square(index) {
            Ok(index)
        } else {
            Err(ChessErrors::SquareOutOfBounds(index))
        };
    }
    algebraic_to_square(token)
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, parse_square, square_to_algebraic};
    use crate::chess_errors::ChessErrors;

    #[test]
    fn corner_and_pawn_squares_convert() {
        assert_eq!(algebraic_to_square("a8").expect("a8 should parse"), 0);
        assert_eq!(algebraic_to_square("h1").expect("h1 should parse"), 63);
        assert_eq!(algebraic_to_square("e2").expect("e2 should parse"), 52);
        assert_eq!(algebraic_to_square("E4").expect("E4 should parse"), 36);
        assert_eq!(square_to_algebraic(0).expect("0 should convert"), "a8");
        assert_eq!(square_to_algebraic(44).expect("44 should convert"), "e3");
    }

    #[test]
    fn bad_input_is_rejected() {
        assert!(matches!(algebraic_to_square("i1"), Err(ChessErrors::InvalidAlgebraic(_))));
        assert!(matches!(algebraic_to_square("a9"), Err(ChessErrors::InvalidAlgebraic(_))));
        assert!(matches!(algebraic_to_square("e44"), Err(ChessErrors::InvalidAlgebraic(_))));
        assert_eq!(square_to_algebraic(64), Err(ChessErrors::SquareOutOfBounds(64)));
    }

    #[test]
    fn parse_square_accepts_indices_and_coordinates() {
        assert_eq!(parse_square("52").expect("index should parse"), 52);
        assert_eq!(parse_square("e2").expect("coordinate should parse"), 52);
        assert_eq!(parse_square("64"), Err(ChessErrors::SquareOutOfBounds(64)));
        assert!(parse_square("zz").is_err());
    }
}
