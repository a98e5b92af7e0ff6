//! Draw detection.

use crate::board::Board;
use tracing::instrument;

/// True iff every cell on the board is occupied.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board with no completed line is a draw.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && super::win::winning_line(board).is_none()
}
