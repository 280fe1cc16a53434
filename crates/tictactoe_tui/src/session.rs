//! Line-oriented game session.

use crate::command::{HELP, PlayCommand};
use crate::render::{BoardView, Renderer};
use anyhow::Result;
use std::io::BufRead;
use tictactoe_engine::GameEngine;
use tracing::{debug, info, instrument};

/// Plays one engine from line input until quit or end of input.
///
/// Every line is one command. The board is rendered at start, after every
/// placement attempt and after every reset. Returns the engine as it was
/// left.
#[instrument(skip_all)]
pub fn run<R, Rn>(input: R, renderer: &mut Rn) -> Result<GameEngine>
where
    R: BufRead,
    Rn: Renderer,
{
    let mut engine = GameEngine::new();
    info!("Starting line session");
    renderer.render(&BoardView::new(&engine, None))?;

    for line in input.lines() {
        let line = line?;
        match line.parse::<PlayCommand>() {
            Ok(PlayCommand::Place(index)) => {
                let result = engine.place_mark(index);
                renderer.render(&BoardView::new(&engine, Some(&result)))?;
            }
            Ok(PlayCommand::Reset) => {
                engine.reset();
                renderer.render(&BoardView::new(&engine, None))?;
            }
            Ok(PlayCommand::Help) => renderer.message(HELP)?,
            Ok(PlayCommand::Quit) => {
                info!("Player quit");
                break;
            }
            Err(e) => {
                debug!(error = %e, "Ignoring input");
                renderer.render(&BoardView::new(&engine, None).with_notice(e.to_string()))?;
                renderer.message(HELP)?;
            }
        }
    }

    Ok(engine)
}
