//! Application state and input handling.

use super::input::move_cursor;
use crate::render::BoardView;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tictactoe_engine::{GameEngine, MoveResult, Position};
use tracing::{debug, info};

/// Main application state.
pub struct App {
    engine: GameEngine,
    cursor: Position,
    last_result: Option<MoveResult>,
    cell_hints: bool,
    cell_areas: [Rect; 9],
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(cell_hints: bool) -> Self {
        Self {
            engine: GameEngine::new(),
            cursor: Position::Center,
            last_result: None,
            cell_hints,
            cell_areas: [Rect::default(); 9],
            should_quit: false,
        }
    }

    /// Gets the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Gets the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether empty cells show their key number.
    pub fn cell_hints(&self) -> bool {
        self.cell_hints
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Builds the view to draw.
    pub fn view(&self) -> BoardView {
        BoardView::new(&self.engine, self.last_result.as_ref())
    }

    /// Remembers where cells were drawn, for mouse hit-testing.
    pub fn set_cell_areas(&mut self, areas: [Rect; 9]) {
        self.cell_areas = areas;
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor.index()),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(digit) = c.to_digit(10) {
                    self.place(digit as usize - 1);
                }
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.cursor = move_cursor(self.cursor, key.code);
            }
            _ => {}
        }
    }

    /// Handles a mouse event; a left click places on the clicked cell.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let hit = self.cell_areas.iter().position(|area| {
            mouse.column >= area.x
                && mouse.column < area.x + area.width
                && mouse.row >= area.y
                && mouse.row < area.y + area.height
        });
        if let Some(index) = hit {
            self.place(index);
        }
    }

    fn place(&mut self, index: usize) {
        let result = self.engine.place_mark(index);
        if let Some(pos) = result.position() {
            self.cursor = pos;
        }
        debug!(index, accepted = result.is_accepted(), "Move applied to UI state");
        self.last_result = Some(result);
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.engine.reset();
        self.last_result = None;
    }
}
