//! Tic-tac-toe - two players, one terminal.

use anyhow::Result;
use clap::Parser;
use std::io;
use tictactoe_tui::render::{JsonRenderer, TextRenderer};
use tictactoe_tui::{Cli, Command, TuiConfig, logging, session, tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file (RUST_LOG)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = TuiConfig::load(cli.config.as_deref())?;
    if let Some(log_file) = cli.log_file.clone() {
        config = config.with_log_file(log_file);
    }

    match cli.front_end() {
        Command::Tui => {
            logging::init_file(&config)?;
            tui::run_tui(&config)
        }
        Command::Text => {
            logging::init_stderr(&config);
            let mut renderer = TextRenderer::new(io::stdout(), *config.cell_hints());
            let engine = session::run(io::stdin().lock(), &mut renderer)?;
            info!(status = ?engine.status(), "Session ended");
            Ok(())
        }
        Command::Json => {
            logging::init_stderr(&config);
            let mut renderer = JsonRenderer::new(io::stdout());
            let engine = session::run(io::stdin().lock(), &mut renderer)?;
            info!(status = ?engine.status(), "Session ended");
            Ok(())
        }
    }
}
