//! Renderers for the game board.
//!
//! The engine knows nothing about drawing. Front ends turn engine state
//! into a [`BoardView`] and hand it to a [`Renderer`].

mod json;
mod text;
mod view;

pub use json::JsonRenderer;
pub use text::TextRenderer;
pub use view::{BoardView, CellView, status_text};

/// Something that can show a board view.
pub trait Renderer {
    /// Draws one frame.
    fn render(&mut self, view: &BoardView) -> anyhow::Result<()>;

    /// Shows a message outside the board, such as help text.
    fn message(&mut self, text: &str) -> anyhow::Result<()>;
}
