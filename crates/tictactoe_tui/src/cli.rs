//! Command-line interface for the tictactoe binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe for two players at one terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file (overrides the config file)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Front end to run (defaults to the interactive board)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available front ends
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Interactive board (keyboard and mouse)
    Tui,

    /// Line-oriented play on stdin/stdout with an ASCII board
    Text,

    /// Line-oriented play emitting one JSON object per update
    Json,
}

impl Cli {
    /// The front end to run.
    pub fn front_end(&self) -> Command {
        self.command.unwrap_or(Command::Tui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_tui() {
        let cli = Cli::parse_from(["tictactoe"]);
        assert_eq!(cli.front_end(), Command::Tui);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["tictactoe", "text", "--log-file", "game.log"]);
        assert_eq!(cli.front_end(), Command::Text);
        assert_eq!(cli.log_file, Some(PathBuf::from("game.log")));
    }

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
