//! First-class move records and move rejection errors.
//!
//! Moves are domain events, not side effects. The engine records each
//! accepted move in its history, which is enough to replay or audit a
//! game.

use crate::board::PlaceError;
use crate::types::PlayerId;
use serde::{Deserialize, Serialize};

/// One accepted move: a player's mark placed at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player who moved.
    pub player: PlayerId,
    /// Target row.
    pub row: usize,
    /// Target column.
    pub col: usize,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> ({}, {})", self.player, self.row, self.col)
    }
}

/// Error returned when a move attempt is rejected.
///
/// All rejections are recoverable user errors: the engine performs no
/// state transition and the current player retains the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The coordinate lies outside the grid.
    #[display("({row}, {col}) is outside the {size}x{size} grid")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Side length of the grid.
        size: usize,
    },
    /// The target cell already holds a mark.
    #[display("cell ({row}, {col}) is already occupied")]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// The game has already reached a terminal state.
    #[display("game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

impl From<PlaceError> for MoveError {
    fn from(err: PlaceError) -> Self {
        match err {
            PlaceError::OutOfBounds { row, col, size } => MoveError::OutOfBounds { row, col, size },
            PlaceError::CellOccupied { row, col } => MoveError::CellOccupied { row, col },
        }
    }
}
