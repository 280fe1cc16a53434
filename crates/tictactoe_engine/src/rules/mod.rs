//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are kept apart from the
//! engine so they can be checked on any board, including ones built in
//! tests.

mod draw;
mod win;

pub use draw::{is_draw, is_full};
pub use win::{NotALine, WINNING_LINES, WinningLine, find_winning_line};

use crate::types::{Board, GameStatus};
use tracing::instrument;

/// Evaluates a board from scratch.
///
/// A completed line wins; otherwise a full board is a draw; otherwise play
/// continues.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some((winner, line)) = find_winning_line(board) {
        GameStatus::Won { winner, line }
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
