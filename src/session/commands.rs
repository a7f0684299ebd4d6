//! Line commands understood by the terminal driver.

use std::str::FromStr;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Square;
use crate::utils::algebraic::parse_square;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Act as a click on the square.
    Click(Square),
    Moves(Square),
    Move(Square, Square),
    Random,
    History,
    Board,
    Placement,
    Reset,
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
commands:
  <square>          click a square (e2 or 52)
  moves <square>    list destinations of the piece on a square
  move <from> <to>  play a move for the side to move
  random            let the random mover play one move
  history           list moves played so far
  board             print the board
  placement         print the placement string
  reset             start a new game
  help              show this text
  quit              leave";

impl FromStr for Command {
    type Err = ChessErrors;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = line.split_whitespace().collect();

        let command = match tokens.as_slice() {
            ["moves", square] => Command::Moves(parse_square(square)?),
            ["move", from, to] => Command::Move(parse_square(from)?, parse_square(to)?),
            ["random"] => Command::Random,
            ["history"] => Command::History,
            ["board"] => Command::Board,
            ["placement"] => Command::Placement,
            ["reset"] => Command::Reset,
            ["help"] => Command::Help,
            ["quit"] | ["exit"] => Command::Quit,
            [square] => Command::Click(parse_square(square)?),
            _ => return Err(ChessErrors::InvalidCommand(line.trim().to_owned())),
        };

        Ok(command)
    }
}
