//! Plain-text board rendering.

use super::{BoardView, CellView, Renderer};
use std::io::Write;

/// Writes an ASCII board after every update.
///
/// Winning cells are bracketed, e.g. `[X]`.
pub struct TextRenderer<W: Write> {
    out: W,
    cell_hints: bool,
}

impl<W: Write> TextRenderer<W> {
    /// Creates a renderer writing to `out`.
    pub fn new(out: W, cell_hints: bool) -> Self {
        Self { out, cell_hints }
    }

    /// Consumes the renderer and returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn cell(&self, cell: &CellView) -> String {
        let text = match cell.mark() {
            None if self.cell_hints => cell.index().to_string(),
            _ => cell.text(),
        };
        if *cell.winning() {
            format!("[{}]", text)
        } else {
            format!("{:^3}", text)
        }
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, view: &BoardView) -> anyhow::Result<()> {
        let mut grid = String::new();
        for (row, cells) in view.cells().chunks(3).enumerate() {
            if row > 0 {
                grid.push_str("---+---+---\n");
            }
            let line: Vec<String> = cells.iter().map(|c| self.cell(c)).collect();
            grid.push_str(&line.join("|"));
            grid.push('\n');
        }

        write!(self.out, "{}", grid)?;
        if let Some(notice) = view.notice() {
            writeln!(self.out, "! {}", notice)?;
        }
        writeln!(self.out, "{}", view.status())?;
        self.out.flush()?;
        Ok(())
    }

    fn message(&mut self, text: &str) -> anyhow::Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }
}
