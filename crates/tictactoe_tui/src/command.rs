//! Player commands typed at the line-oriented front ends.

use derive_more::{Display, Error};
use tictactoe_engine::Position;
use tracing::instrument;

/// A command read from one line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayCommand {
    /// Place the current mark at a board index.
    ///
    /// The index is not range-checked here; the engine rejects bad ones.
    Place(usize),
    /// Start a new game.
    Reset,
    /// Leave the session.
    Quit,
    /// Show the command summary.
    Help,
}

/// Input that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CommandError {
    /// Blank line.
    #[display("Empty command")]
    Empty,
    /// Anything else.
    #[display("Unknown command: {}", _0)]
    Unknown(#[error(not(source))] String),
}

/// Summary of accepted commands.
pub const HELP: &str = "Commands: 0-8 or a cell name (e.g. \"center\") to place, r to reset, q to quit";

impl std::str::FromStr for PlayCommand {
    type Err = CommandError;

    #[instrument]
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let word = line.trim();
        if word.is_empty() {
            return Err(CommandError::Empty);
        }

        match word.to_ascii_lowercase().as_str() {
            "r" | "reset" | "new" => return Ok(PlayCommand::Reset),
            "q" | "quit" | "exit" => return Ok(PlayCommand::Quit),
            "h" | "help" | "?" => return Ok(PlayCommand::Help),
            _ => {}
        }

        if let Ok(index) = word.parse::<usize>() {
            return Ok(PlayCommand::Place(index));
        }

        Position::from_label_or_number(word)
            .map(|pos| PlayCommand::Place(pos.index()))
            .ok_or_else(|| CommandError::Unknown(word.to_string()))
    }
}
