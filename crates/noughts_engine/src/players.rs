//! Caller-side move policies built on the public engine API.
//!
//! The engine never special-cases computer players. An opponent policy
//! reads the board snapshot, picks a coordinate, and plays it through
//! [`GameEngine::attempt_move`] like any other caller would.

use crate::action::MoveError;
use crate::board::Board;
use crate::engine::{GameEngine, MoveOutcome};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// An opponent that plays a uniformly random unoccupied cell.
#[derive(Debug)]
pub struct RandomOpponent {
    rng: StdRng,
}

impl RandomOpponent {
    /// Creates an opponent seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates an opponent with a fixed seed, for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Picks a uniformly random unoccupied coordinate, or `None` on a
    /// full board.
    #[instrument(skip(self, board))]
    pub fn choose(&mut self, board: &Board) -> Option<(usize, usize)> {
        let open: Vec<(usize, usize)> = board
            .cells()
            .iter()
            .filter(|cell| !cell.is_occupied())
            .map(|cell| (cell.row(), cell.col()))
            .collect();
        if open.is_empty() {
            return None;
        }
        let pick = open[self.rng.random_range(0..open.len())];
        debug!(?pick, candidates = open.len(), "Random opponent chose");
        Some(pick)
    }

    /// Chooses a cell and plays it for whoever holds the turn.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] when the game is terminal, whether
    /// reported by the engine or because no unoccupied cell is left to
    /// choose from.
    #[instrument(skip(self, engine))]
    pub fn play(&mut self, engine: &mut GameEngine) -> Result<MoveOutcome, MoveError> {
        let (row, col) = self.choose(engine.board()).ok_or(MoveError::GameOver)?;
        engine.attempt_move(row, col)
    }
}

impl Default for RandomOpponent {
    fn default() -> Self {
        Self::new()
    }
}
