//! Board storage: a square grid of cells with placement and occupancy
//! queries. Win and draw evaluation lives in [`crate::rules`].

use crate::types::PlayerId;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Occupancy of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// No mark placed yet.
    Empty,
    /// Marked by a player.
    Occupied(PlayerId),
}

/// One grid position and its occupancy.
///
/// The stored position always matches the cell's grid index, and an
/// occupied cell keeps its mark until [`Board::clear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    row: usize,
    col: usize,
    square: Square,
}

impl Cell {
    /// Row of this cell.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column of this cell.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Occupancy of this cell.
    pub fn square(&self) -> Square {
        self.square
    }

    /// True once a mark has been placed here.
    pub fn is_occupied(&self) -> bool {
        matches!(self.square, Square::Occupied(_))
    }

    /// The player occupying this cell, if any.
    pub fn occupant(&self) -> Option<PlayerId> {
        match self.square {
            Square::Occupied(player) => Some(player),
            Square::Empty => None,
        }
    }
}

/// Error returned when a placement is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlaceError {
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
}

impl std::error::Error for PlaceError {}

/// A square grid of [`Cell`]s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board with the given side length.
    ///
    /// The engine's [`crate::GameConfig`] enforces the minimum playable
    /// side of 3 before a board is built.
    pub fn new(size: usize) -> Self {
        let cells = (0..size * size)
            .map(|index| Cell {
                row: index / size,
                col: index % size,
                square: Square::Empty,
            })
            .collect();
        Self { size, cells }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the cell at the coordinate, or `None` off the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < self.size && col < self.size {
            self.cells.get(row * self.size + col)
        } else {
            None
        }
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Whether the cell at the coordinate holds a mark.
    ///
    /// Off-grid coordinates count as unoccupied.
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(|cell| cell.is_occupied())
    }

    /// Places a player's mark at the coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::OutOfBounds`] off the grid and
    /// [`PlaceError::CellOccupied`] when the cell already holds a mark.
    /// A rejected placement never overwrites the stored mark; the
    /// failure is authoritative.
    #[instrument(skip(self))]
    pub fn place(&mut self, row: usize, col: usize, player: PlayerId) -> Result<(), PlaceError> {
        if row >= self.size || col >= self.size {
            return Err(PlaceError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        let index = row * self.size + col;
        let cell = &mut self.cells[index];
        if cell.is_occupied() {
            return Err(PlaceError::CellOccupied { row, col });
        }
        cell.square = Square::Occupied(player);
        debug!(row, col, ?player, "Mark placed");
        Ok(())
    }

    /// True iff every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Cell::is_occupied)
    }

    /// Scans for a completed line; see [`crate::rules::winning_line`].
    pub fn winning_line(&self) -> Option<crate::rules::WinningLine> {
        crate::rules::winning_line(self)
    }

    /// Resets every cell to unoccupied. Used between games, never
    /// mid-game.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.square = Square::Empty;
        }
        debug!(size = self.size, "Board cleared");
    }

    /// Formats the board one row per line, using the given marks for
    /// players one and two and `.` for empty cells.
    pub fn display(&self, marks: [char; 2]) -> String {
        let mut out = String::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let symbol = match self.get(row, col).and_then(Cell::occupant) {
                    Some(PlayerId::One) => marks[0],
                    Some(PlayerId::Two) => marks[1],
                    None => '.',
                };
                out.push(symbol);
                if col + 1 < self.size {
                    out.push('|');
                }
            }
            if row + 1 < self.size {
                out.push('\n');
                for col in 0..self.size {
                    out.push('-');
                    if col + 1 < self.size {
                        out.push('+');
                    }
                }
                out.push('\n');
            }
        }
        out
    }
}
