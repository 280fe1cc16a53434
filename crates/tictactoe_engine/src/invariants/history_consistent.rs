//! History consistency invariant: the board is exactly the moves played.

use super::Invariant;
use crate::engine::GameEngine;
use crate::types::Cell;

/// Invariant: every recorded move is on the board and nothing else is.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let board = engine.board();
        let history = engine.history();

        history
            .iter()
            .all(|mv| board.get(mv.position) == Cell::Occupied(mv.mark))
            && board.occupied() == history.len()
    }

    fn description() -> &'static str {
        "Board matches move history"
    }
}
