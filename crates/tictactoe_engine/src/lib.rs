//! Tic-tac-toe game state engine.
//!
//! The engine owns a 3x3 board, the current turn and the game status.
//! Callers feed it "place a mark at cell N" commands and render the
//! [`MoveResult`] it hands back. Rendering, input devices and labels live
//! outside this crate.
//!
//! # Architecture
//!
//! - **Types**: marks, cells, the board and the game status
//! - **Position**: typed cell index (0-8, row-major)
//! - **Rules**: win and draw detection over the eight fixed lines
//! - **Action**: moves, rejection reasons and move results
//! - **Engine**: the [`GameEngine`] state machine
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, GameStatus, Mark};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 3, 1, 4, 2] {
//!     engine.place_mark(index);
//! }
//! assert!(matches!(engine.status(), GameStatus::Won { winner: Mark::X, .. }));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod invariants;
mod position;
mod rules;
mod types;

// Crate-level exports - Domain types
pub use types::{Board, Cell, GameStatus, Mark};

// Crate-level exports - Positions
pub use position::Position;

// Crate-level exports - Rules
pub use rules::{NotALine, WINNING_LINES, WinningLine, evaluate, find_winning_line, is_draw, is_full};

// Crate-level exports - Actions and results
pub use action::{Move, MoveResult, MoveVerdict, RejectReason};

// Crate-level exports - Engine
pub use engine::GameEngine;

// Crate-level exports - Invariants
pub use invariants::{
    AlternatingTurnInvariant, EngineInvariants, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation,
};
