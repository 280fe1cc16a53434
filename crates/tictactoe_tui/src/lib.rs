//! Terminal front ends for the tic-tac-toe engine.
//!
//! The engine in `tictactoe_engine` holds all game state. This crate turns
//! player input into engine calls and draws what comes back:
//!
//! - **tui**: interactive board driven by keyboard and mouse
//! - **session**: line-oriented play for pipes and scripts
//! - **render**: view model plus text and JSON renderers

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod command;
pub mod config;
pub mod logging;
pub mod render;
pub mod session;
pub mod tui;

pub use cli::{Cli, Command};
pub use command::{CommandError, PlayCommand};
pub use config::{ConfigError, TuiConfig};
