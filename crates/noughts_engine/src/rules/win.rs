//! Win detection: scanning rows, columns, and diagonals.

use crate::board::Board;
use crate::types::PlayerId;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A complete line on a square grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// The row at the given index.
    Row(usize),
    /// The column at the given index.
    Column(usize),
    /// The diagonal from top-left to bottom-right.
    MainDiagonal,
    /// The diagonal from top-right to bottom-left.
    AntiDiagonal,
}

impl Line {
    /// Coordinates of the line's cells on a grid of the given side
    /// length, for callers highlighting a finished game.
    pub fn cells(&self, size: usize) -> Vec<(usize, usize)> {
        match *self {
            Line::Row(row) => (0..size).map(|col| (row, col)).collect(),
            Line::Column(col) => (0..size).map(|row| (row, col)).collect(),
            Line::MainDiagonal => (0..size).map(|i| (i, i)).collect(),
            Line::AntiDiagonal => (0..size).map(|i| (i, size - 1 - i)).collect(),
        }
    }
}

/// A fully-occupied line whose cells share one player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    /// The player occupying every cell of the line.
    pub player: PlayerId,
    /// Which line completed.
    pub line: Line,
}

/// Scans the board for a completed line.
///
/// Rows are scanned top to bottom, then columns left to right, then
/// the two diagonals; the first complete line found is reported. A
/// line counts only when all of its cells are occupied by the same
/// player, so empty cells never compare equal.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<WinningLine> {
    let size = board.size();
    let rows = (0..size).map(Line::Row);
    let columns = (0..size).map(Line::Column);
    let diagonals = [Line::MainDiagonal, Line::AntiDiagonal];

    rows.chain(columns)
        .chain(diagonals)
        .find_map(|line| line_owner(board, line).map(|player| WinningLine { player, line }))
}

/// Returns the player occupying every cell of the line, if any.
fn line_owner(board: &Board, line: Line) -> Option<PlayerId> {
    let mut cells = line.cells(board.size()).into_iter();
    let (row, col) = cells.next()?;
    let owner = board.get(row, col)?.occupant()?;
    cells
        .all(|(row, col)| board.get(row, col).and_then(|cell| cell.occupant()) == Some(owner))
        .then_some(owner)
}
