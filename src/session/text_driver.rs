//! Line-oriented front end over a `BoardSession`.
//!
//! Each input line produces one reply. Rejected input is reported in the
//! reply text and never ends the session.

use std::fmt::Write as _;

use crate::chess_errors::ChessErrors;
use crate::engines::engine_random::RandomEngine;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::legal_destinations;
use crate::session::board_session::{BoardSession, ClickOutcome};
use crate::session::commands::{Command, HELP_TEXT};
use crate::utils::algebraic::square_to_algebraic;
use crate::utils::placement::generate_placement;
use crate::utils::render_game_state::render_session;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverReply {
    pub text: String,
    pub quit: bool,
}

pub struct TextDriver {
    session: BoardSession,
    engine: RandomEngine,
    show_board: bool,
}

impl TextDriver {
    pub fn new(engine: RandomEngine, show_board: bool) -> Self {
        Self {
            session: BoardSession::new(),
            engine,
            show_board,
        }
    }

    pub fn session(&self) -> &BoardSession {
        &self.session
    }

    /// Board plus status lines.
    pub fn banner(&self) -> String {
        let mut out = String::new();
        if self.show_board {
            out.push_str(&render_session(&self.session));
            out.push('\n');
        }
        let _ = write!(
            out,
            "{} (White: {}, Black: {})",
            self.session.status_message(),
            self.session.player_status(Side::White),
            self.session.player_status(Side::Black)
        );
        out
    }

    pub fn handle_line(&mut self, line: &str) -> DriverReply {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => return reply(format!("error: {err}")),
        };

        match self.execute(command) {
            Ok(done) => done,
            Err(err) => {
                tracing::warn!(%err, "command failed");
                reply(format!("error: {err}"))
            }
        }
    }

    fn execute(&mut self, command: Command) -> Result<DriverReply, ChessErrors> {
        let outcome = match command {
            Command::Click(square) => {
                let text = match self.session.click(square) {
                    ClickOutcome::Selected {
                        square,
                        destinations,
                    } => format!(
                        "selected {}: {}",
                        square_to_algebraic(square)?,
                        format_squares(destinations.iter().copied())?
                    ),
                    ClickOutcome::Deselected => "selection cleared".to_owned(),
                    ClickOutcome::Moved(record) => describe_move(&record)?,
                    ClickOutcome::Ignored => "nothing to select there".to_owned(),
                };
                self.with_banner(text)
            }
            Command::Moves(square) => {
                let destinations = legal_destinations(self.session.game(), square);
                reply(format!(
                    "{}: {}",
                    square_to_algebraic(square)?,
                    format_squares(destinations.into_iter())?
                ))
            }
            Command::Move(from, to) => {
                let record = self.session.play(from, to)?;
                let text = describe_move(&record)?;
                self.with_banner(text)
            }
            Command::Random => match self.engine.choose_move(self.session.game()) {
                Some((from, to)) => {
                    let record = self.session.play(from, to)?;
                    let text = format!("{} plays {}", self.engine.name(), describe_move(&record)?);
                    self.with_banner(text)
                }
                None => reply(format!("{} has no moves", self.session.game().side_to_move())),
            },
            Command::History => {
                let mut text = String::new();
                for (ply, record) in self.session.game().history().iter().enumerate() {
                    let _ = writeln!(text, "{:>3}. {}", ply + 1, describe_move(record)?);
                }
                if text.is_empty() {
                    text.push_str("no moves yet");
                }
                reply(text.trim_end().to_owned())
            }
            Command::Board => reply(self.banner()),
            Command::Placement => reply(generate_placement(self.session.game())),
            Command::Reset => {
                self.session.reset();
                self.with_banner("new game".to_owned())
            }
            Command::Help => reply(HELP_TEXT.to_owned()),
            Command::Quit => DriverReply {
                text: "bye".to_owned(),
                quit: true,
            },
        };

        Ok(outcome)
    }

    fn with_banner(&self, text: String) -> DriverReply {
        reply(format!("{text}\n{}", self.banner()))
    }
}

fn reply(text: String) -> DriverReply {
    DriverReply { text, quit: false }
}

fn format_squares(squares: impl Iterator<Item = Square>) -> Result<String, ChessErrors> {
    let names = squares
        .map(square_to_algebraic)
        .collect::<Result<Vec<_>, _>>()?;
    if names.is_empty() {
        return Ok("no moves".to_owned());
    }
    Ok(names.join(" "))
}

fn describe_move(record: &MoveRecord) -> Result<String, ChessErrors> {
    let mut text = format!(
        "{} {}-{}",
        record.piece,
        square_to_algebraic(record.from)?,
        square_to_algebraic(record.to)?
    );
    if let Some(captured) = record.captured {
        let _ = write!(text, " takes {captured}");
    }
    if let Some(promoted) = record.promoted_to {
        let _ = write!(text, ", promotes to {}", promoted.kind);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::TextDriver;
    use crate::engines::engine_random::RandomEngine;
    use crate::game_state::chess_types::Side;

    fn driver() -> TextDriver {
        TextDriver::new(RandomEngine::with_seed(3), false)
    }

    #[test]
    fn click_flow_moves_a_pawn() {
        let mut driver = driver();

        let reply = driver.handle_line("e2");
        assert!(reply.text.starts_with("selected e2: e4 e3"), "{}", reply.text);

        let reply = driver.handle_line("e4");
        assert!(reply.text.starts_with("White pawn e2-e4"), "{}", reply.text);
        assert!(reply.text.ends_with("Black's Turn (White: Waiting..., Black: Your Turn)"));
        assert_eq!(driver.session().game().side_to_move(), Side::Black);
    }

    #[test]
    fn move_command_reports_wrong_side() {
        let mut driver = driver();
        let reply = driver.handle_line("move e7 e5");
        assert!(reply.text.starts_with("error: piece on square 12"), "{}", reply.text);
        assert!(!reply.quit);
    }

    #[test]
    fn history_and_placement_follow_the_game() {
        let mut driver = driver();
        driver.handle_line("move e2 e4");
        driver.handle_line("move e7 e5");

        let reply = driver.handle_line("history");
        assert_eq!(reply.text, "  1. White pawn e2-e4\n  2. Black pawn e7-e5");

        let reply = driver.handle_line("placement");
        assert_eq!(reply.text, "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR");
    }

    #[test]
    fn random_and_reset() {
        let mut driver = driver();
        driver.handle_line("random");
        assert_eq!(driver.session().game().history().len(), 1);

        driver.handle_line("reset");
        assert!(driver.session().game().history().is_empty());
    }

    #[test]
    fn banner_draws_the_selection() {
        let mut driver = TextDriver::new(RandomEngine::with_seed(3), true);
        driver.handle_line("e2");

        let banner = driver.banner();
        let lines: Vec<&str> = banner.lines().collect();
        assert_eq!(lines[5], "4     ·     ·  *  ·     ·  4");
        assert_eq!(
            lines.last().copied(),
            Some("White's Turn (White: Your Turn, Black: Waiting...)")
        );
    }

    #[test]
    fn quit_ends_the_session() {
        let mut driver = driver();
        assert!(driver.handle_line("quit").quit);
        assert!(!driver.handle_line("help").quit);
    }
}
