//! Interactive terminal board.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::move_cursor;
pub use ui::draw;

use crate::config::TuiConfig;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Write};
use tracing::{error, info, instrument};

/// Runs the interactive board until the player quits.
#[instrument(skip_all)]
pub fn run_tui(config: &TuiConfig) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let _guard = TerminalGuard;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(*config.cell_hints());
    let res = run_app(&mut terminal, app);
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Leaves raw mode and the alternate screen when dropped.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = restore_terminal(&mut io::stdout()) {
            error!(error = ?err, "Failed to restore terminal");
        }
    }
}

fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(out, LeaveAlternateScreen, DisableMouseCapture)
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        let mut areas = None;
        terminal.draw(|f| areas = Some(draw(f, &app)))?;
        if let Some(areas) = areas {
            app.set_cell_areas(areas);
        }

        match event::read()? {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => {}
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
