//! JSON-lines rendering for scripted play.

use super::{BoardView, Renderer};
use serde_json::json;
use std::io::Write;

/// Writes one JSON object per line.
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    /// Creates a renderer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the renderer and returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render(&mut self, view: &BoardView) -> anyhow::Result<()> {
        serde_json::to_writer(&mut self.out, view)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }

    fn message(&mut self, text: &str) -> anyhow::Result<()> {
        serde_json::to_writer(&mut self.out, &json!({ "message": text }))?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tictactoe_engine::GameEngine;

    #[test]
    fn test_one_object_per_render() {
        let mut engine = GameEngine::new();
        let result = engine.place_mark(4);
        let mut renderer = JsonRenderer::new(Vec::new());
        renderer.render(&BoardView::new(&engine, Some(&result))).unwrap();
        renderer.message("hello").unwrap();

        let out = String::from_utf8(renderer.into_inner()).unwrap();
        let lines: Vec<Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["status"], "Player O's turn");
        assert_eq!(lines[0]["cells"][4]["mark"], "X");
        assert_eq!(lines[0]["last_result"]["verdict"]["Accepted"], "Center");
        assert!(lines[0]["line"].is_null());
        assert_eq!(lines[1]["message"], "hello");
    }
}
