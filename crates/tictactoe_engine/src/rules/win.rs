//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three positions in a straight line.
///
/// Serializes as its board indices, e.g. `[0, 1, 2]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "[usize; 3]", try_from = "[usize; 3]")]
pub struct WinningLine([Position; 3]);

/// Index triple that is not one of the [`WINNING_LINES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("{_0:?} is not a winning line")]
pub struct NotALine(#[error(not(source))] pub [usize; 3]);

impl WinningLine {
    /// Creates a line from three positions.
    pub const fn new(cells: [Position; 3]) -> Self {
        Self(cells)
    }

    /// The positions of the line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::index)
    }

    /// Checks if the line passes through a position.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

impl From<WinningLine> for [usize; 3] {
    fn from(line: WinningLine) -> Self {
        line.indices()
    }
}

impl TryFrom<[usize; 3]> for WinningLine {
    type Error = NotALine;

    fn try_from(indices: [usize; 3]) -> Result<Self, Self::Error> {
        WINNING_LINES
            .into_iter()
            .find(|line| line.indices() == indices)
            .ok_or(NotALine(indices))
    }
}

/// The eight lines that win: rows, then columns, then diagonals.
pub const WINNING_LINES: [WinningLine; 8] = [
    // Rows
    WinningLine::new([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    WinningLine::new([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    WinningLine::new([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    WinningLine::new([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    WinningLine::new([Position::TopCenter, Position::Center, Position::BottomCenter]),
    WinningLine::new([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    WinningLine::new([Position::TopLeft, Position::Center, Position::BottomRight]),
    WinningLine::new([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Finds the first uniformly marked line on the board.
///
/// Lines are scanned in [`WINNING_LINES`] order, so the result is
/// deterministic even on boards that could not arise in play.
#[instrument(skip(board))]
pub fn find_winning_line(board: &Board) -> Option<(Mark, WinningLine)> {
    WINNING_LINES.iter().find_map(|line| {
        let [a, b, c] = line.positions();
        match board.get(a) {
            Cell::Occupied(mark) if board.get(b) == Cell::Occupied(mark) && board.get(c) == Cell::Occupied(mark) => {
                Some((mark, *line))
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Position, Mark)]) -> Board {
        let mut board = Board::new();
        for (pos, mark) in marks {
            board.set(*pos, Cell::Occupied(*mark));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(find_winning_line(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::X),
            (Position::TopRight, Mark::X),
        ]);
        assert_eq!(find_winning_line(&board), Some((Mark::X, WINNING_LINES[0])));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[
            (Position::TopRight, Mark::O),
            (Position::Center, Mark::O),
            (Position::BottomLeft, Mark::O),
        ]);
        let (mark, line) = find_winning_line(&board).expect("diagonal should win");
        assert_eq!(mark, Mark::O);
        assert_eq!(line.indices(), [2, 4, 6]);
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::O),
            (Position::TopRight, Mark::X),
        ]);
        assert_eq!(find_winning_line(&board), None);
    }

    #[test]
    fn test_first_line_in_order_is_reported() {
        // Top row and left column both complete; rows are scanned first.
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::X),
            (Position::TopRight, Mark::X),
            (Position::MiddleLeft, Mark::X),
            (Position::BottomLeft, Mark::X),
        ]);
        assert_eq!(find_winning_line(&board).map(|(_, l)| l.indices()), Some([0, 1, 2]));
    }

    #[test]
    fn test_line_serializes_as_indices() {
        let json = serde_json::to_value(WINNING_LINES[7]).unwrap();
        assert_eq!(json, serde_json::json!([2, 4, 6]));

        let back: WinningLine = serde_json::from_value(json).unwrap();
        assert_eq!(back, WINNING_LINES[7]);
        assert!(serde_json::from_str::<WinningLine>("[0, 4, 5]").is_err());
        assert_eq!(WinningLine::try_from([0, 4, 5]), Err(NotALine([0, 4, 5])));
    }

    #[test]
    fn test_every_line_is_straight() {
        for line in WINNING_LINES {
            let [a, b, c] = line.positions();
            let same_row = a.row() == b.row() && b.row() == c.row();
            let same_col = a.column() == b.column() && b.column() == c.column();
            let diagonal = line.contains(Position::Center) && !same_row && !same_col;
            assert!(same_row || same_col || diagonal, "{:?}", line);
        }
    }
}
