//! The tic-tac-toe game engine.
//!
//! [`GameEngine`] owns the board, the turn and the status. Play moves
//! through three states:
//!
//! - `InProgress` -> `InProgress` on a non-terminal move (turn flips)
//! - `InProgress` -> `Won` / `Draw` on a terminal move (turn stays)
//! - any state -> `InProgress` on [`GameEngine::reset`]
//!
//! Rejected moves never change anything.

use crate::action::{Move, MoveResult, RejectReason};
use crate::invariants::{EngineInvariants, InvariantSet};
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Cell, GameStatus, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEngine {
    board: Board,
    turn: Mark,
    status: GameStatus,
    history: Vec<Move>,
}

impl GameEngine {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Rebuilds a game by playing the given indices in order.
    ///
    /// Fails with the first rejection encountered.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Result<Self, RejectReason> {
        let mut engine = Self::new();
        for &index in indices {
            if let Some(reason) = engine.place_mark(index).reason() {
                return Err(reason);
            }
        }
        Ok(engine)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that moves next.
    ///
    /// After a terminal move this stays on the player who made it.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the accepted moves since the last reset.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Number of accepted moves since the last reset.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns the empty positions, or none once the game is over.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_over() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Places the current turn's mark at a board index (0-8).
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn place_mark(&mut self, index: usize) -> MoveResult {
        if self.is_over() {
            return self.reject(RejectReason::GameAlreadyOver);
        }
        match Position::from_index(index) {
            Some(pos) => self.place(pos),
            None => self.reject(RejectReason::OutOfRange(index)),
        }
    }

    /// Places the current turn's mark at a position.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn place(&mut self, pos: Position) -> MoveResult {
        if self.is_over() {
            return self.reject(RejectReason::GameAlreadyOver);
        }
        if !self.board.is_empty(pos) {
            return self.reject(RejectReason::CellOccupied(pos));
        }

        let mark = self.turn;
        self.board.set(pos, Cell::Occupied(mark));
        self.history.push(Move::new(mark, pos));

        self.status = rules::evaluate(&self.board);
        match self.status {
            GameStatus::InProgress => self.turn = mark.opponent(),
            GameStatus::Won { winner, line } => {
                info!(%winner, line = ?line.indices(), "Game won");
            }
            GameStatus::Draw => info!("Game drawn"),
        }
        debug!(%mark, position = pos.index(), status = ?self.status, "Move accepted");

        self.check_invariants();

        MoveResult::accepted(pos, self.board.clone(), self.status)
    }

    /// Starts a fresh game: empty board, X to move, in progress.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(moves = self.history.len(), "Resetting game");
        *self = Self::new();
    }

    fn reject(&self, reason: RejectReason) -> MoveResult {
        debug!(%reason, "Move rejected");
        MoveResult::rejected(reason, self.board.clone(), self.status)
    }

    fn check_invariants(&self) {
        if let Err(violations) = EngineInvariants::check_all(self) {
            for violation in &violations {
                warn!(description = %violation.description, "Invariant violated");
            }
            debug_assert!(violations.is_empty(), "Engine invariants violated");
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let engine = GameEngine::new();
        assert_eq!(engine.board(), &Board::new());
        assert_eq!(engine.turn(), Mark::X);
        assert_eq!(engine.status(), &GameStatus::InProgress);
        assert_eq!(engine.valid_moves().len(), 9);
    }

    #[test]
    fn test_accepted_move_flips_turn() {
        let mut engine = GameEngine::new();
        let result = engine.place_mark(4);
        assert!(result.is_accepted());
        assert_eq!(result.position(), Some(Position::Center));
        assert_eq!(result.board().get(Position::Center), Cell::Occupied(Mark::X));
        assert_eq!(engine.turn(), Mark::O);
    }

    #[test]
    fn test_out_of_range_checked_before_occupancy() {
        let mut engine = GameEngine::new();
        let result = engine.place_mark(100);
        assert_eq!(result.reason(), Some(RejectReason::OutOfRange(100)));
        assert_eq!(engine.turn(), Mark::X);
    }

    #[test]
    fn test_game_over_checked_first() {
        let mut engine = GameEngine::replay(&[0, 3, 1, 4, 2]).unwrap();
        // Occupied and out-of-range cells both report the game is over.
        assert_eq!(engine.place_mark(0).reason(), Some(RejectReason::GameAlreadyOver));
        assert_eq!(engine.place_mark(42).reason(), Some(RejectReason::GameAlreadyOver));
    }

    #[test]
    fn test_terminal_move_keeps_turn() {
        let engine = GameEngine::replay(&[0, 3, 1, 4, 2]).unwrap();
        assert_eq!(engine.turn(), Mark::X);
        assert!(engine.is_over());
        assert!(engine.valid_moves().is_empty());
    }

    #[test]
    fn test_replay_stops_at_first_rejection() {
        assert_eq!(
            GameEngine::replay(&[4, 4]),
            Err(RejectReason::CellOccupied(Position::Center))
        );
    }

    #[test]
    fn test_reset_clears_history() {
        let mut engine = GameEngine::replay(&[0, 1, 2]).unwrap();
        engine.reset();
        assert_eq!(engine, GameEngine::new());
        assert_eq!(engine.move_count(), 0);
    }
}
