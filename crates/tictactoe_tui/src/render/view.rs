//! Presentation model derived from engine state.

use derive_getters::Getters;
use serde::Serialize;
use tictactoe_engine::{GameEngine, GameStatus, Mark, MoveResult, Position, WinningLine};
use tracing::instrument;

/// One cell as a renderer should show it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct CellView {
    /// Board index (0-8).
    index: usize,
    /// Mark in the cell, if any.
    mark: Option<Mark>,
    /// Cell can't be chosen (occupied, or the game is over).
    disabled: bool,
    /// Cell is part of the winning line.
    winning: bool,
    /// Accessible description, e.g. "Cell 5, X".
    label: String,
}

impl CellView {
    /// Text to draw in the cell: the mark, or empty.
    pub fn text(&self) -> String {
        self.mark.map(|m| m.to_string()).unwrap_or_default()
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct BoardView {
    /// Cells in row-major order.
    cells: Vec<CellView>,
    /// Status line.
    status: String,
    /// Feedback about the last command, such as a rejected move.
    notice: Option<String>,
    /// The game is won or drawn.
    game_over: bool,
    /// Completed line, serialized as board indices.
    line: Option<WinningLine>,
    /// Engine state behind this view.
    #[serde(skip_serializing_if = "Option::is_none")]
    last_result: Option<MoveResult>,
}

impl BoardView {
    /// Builds a view of the engine, with feedback from the last move if any.
    #[instrument(skip_all)]
    pub fn new(engine: &GameEngine, last: Option<&MoveResult>) -> Self {
        let status = engine.status();
        let game_over = status.is_terminal();
        let line = status.line();

        let cells = Position::ALL
            .iter()
            .map(|&pos| {
                let mark = engine.board().get(pos).mark();
                let label = match mark {
                    Some(mark) => format!("Cell {}, {}", pos.index() + 1, mark),
                    None => format!("Cell {}", pos.index() + 1),
                };
                CellView {
                    index: pos.index(),
                    mark,
                    disabled: game_over || mark.is_some(),
                    winning: line.is_some_and(|l| l.contains(pos)),
                    label,
                }
            })
            .collect();

        Self {
            cells,
            status: status_text(status, engine.turn()),
            notice: last.and_then(|r| r.reason()).map(|r| r.to_string()),
            game_over,
            line,
            last_result: last.cloned(),
        }
    }

    /// Replaces the notice line, e.g. with a command parse error.
    pub fn with_notice(mut self, notice: impl Into<String>) -> Self {
        self.notice = Some(notice.into());
        self
    }
}

/// Status line for a game state.
pub fn status_text(status: &GameStatus, turn: Mark) -> String {
    match status {
        GameStatus::InProgress => format!("Player {}'s turn", turn),
        GameStatus::Won { winner, .. } => format!("Player {} wins!", winner),
        GameStatus::Draw => "It's a draw.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_game_view() {
        let view = BoardView::new(&GameEngine::new(), None);
        assert_eq!(view.status(), "Player X's turn");
        assert_eq!(view.cells().len(), 9);
        assert!(view.cells().iter().all(|c| !c.disabled() && !c.winning()));
        assert_eq!(view.cells()[0].label(), "Cell 1");
        assert!(view.notice().is_none());
    }

    #[test]
    fn test_won_game_view() {
        let engine = GameEngine::replay(&[0, 3, 1, 4, 2]).unwrap();
        let view = BoardView::new(&engine, None);

        assert_eq!(view.status(), "Player X wins!");
        assert!(*view.game_over());
        let winning: Vec<usize> = view
            .cells()
            .iter()
            .filter(|c| *c.winning())
            .map(|c| *c.index())
            .collect();
        assert_eq!(winning, vec![0, 1, 2]);
        assert!(view.cells().iter().all(|c| *c.disabled()));
        assert_eq!(view.cells()[3].label(), "Cell 4, O");
        assert_eq!(view.cells()[3].text(), "O");
        assert_eq!(view.line().as_ref().map(|l| l.indices()), Some([0, 1, 2]));
    }

    #[test]
    fn test_draw_view() {
        let engine = GameEngine::replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).unwrap();
        assert_eq!(BoardView::new(&engine, None).status(), "It's a draw.");
    }

    #[test]
    fn test_rejection_becomes_notice() {
        let mut engine = GameEngine::new();
        engine.place_mark(4);
        let result = engine.place_mark(4);
        let view = BoardView::new(&engine, Some(&result));

        assert_eq!(view.notice().as_deref(), Some("Center is already occupied"));
        assert_eq!(view.status(), "Player O's turn");
    }

    #[test]
    fn test_notice_replaced() {
        let engine = GameEngine::new();
        let view = BoardView::new(&engine, None).with_notice("Unknown command: banana");
        assert_eq!(view.notice().as_deref(), Some("Unknown command: banana"));
        assert!(view.line().is_none());
    }
}
