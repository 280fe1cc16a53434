//! Moves and move results.
//!
//! A move is a domain event: a mark placed at a position. Every call to
//! the engine hands back a [`MoveResult`], whether the move was accepted
//! or not, so a renderer can redraw from it without asking the engine
//! again.

use crate::position::Position;
use crate::rules::WinningLine;
use crate::types::{Board, GameStatus, Mark};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Why a move was refused.
///
/// A refused move leaves the engine untouched.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, derive_more::Error,
)]
pub enum RejectReason {
    /// The index is not a cell on the board.
    #[display("Position {} is out of range (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),

    /// The cell already holds a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),

    /// The game has been won or drawn.
    #[display("Game is already over")]
    GameAlreadyOver,
}

/// Whether the engine took the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveVerdict {
    /// The mark was written at this position.
    Accepted(Position),
    /// Nothing changed.
    Rejected(RejectReason),
}

/// Outcome of a placement attempt plus the state to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct MoveResult {
    /// Accepted or rejected.
    verdict: MoveVerdict,
    /// Board after the attempt.
    board: Board,
    /// Status after the attempt.
    status: GameStatus,
}

impl MoveResult {
    #[instrument(skip(board))]
    pub(crate) fn accepted(position: Position, board: Board, status: GameStatus) -> Self {
        Self {
            verdict: MoveVerdict::Accepted(position),
            board,
            status,
        }
    }

    #[instrument(skip(board))]
    pub(crate) fn rejected(reason: RejectReason, board: Board, status: GameStatus) -> Self {
        Self {
            verdict: MoveVerdict::Rejected(reason),
            board,
            status,
        }
    }

    /// Returns true if the mark was placed.
    pub fn is_accepted(&self) -> bool {
        matches!(self.verdict, MoveVerdict::Accepted(_))
    }

    /// The rejection reason, for refused moves.
    pub fn reason(&self) -> Option<RejectReason> {
        match self.verdict {
            MoveVerdict::Rejected(reason) => Some(reason),
            MoveVerdict::Accepted(_) => None,
        }
    }

    /// The position written, for accepted moves.
    pub fn position(&self) -> Option<Position> {
        match self.verdict {
            MoveVerdict::Accepted(pos) => Some(pos),
            MoveVerdict::Rejected(_) => None,
        }
    }

    /// The winning line, if the game is won.
    pub fn line(&self) -> Option<WinningLine> {
        self.status.line()
    }
}
