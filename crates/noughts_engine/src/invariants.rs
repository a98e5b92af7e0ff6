//! Consistency invariants over engine state.
//!
//! The engine's state space is small and fully enumerable, so an
//! inconsistent state is a logic defect, not a runtime fault. The
//! engine asserts these in debug builds after every accepted move;
//! tests exercise them directly.

use crate::board::Board;
use crate::engine::GameEngine;
use crate::types::PlayerId;
use strum::IntoEnumIterator;

/// A property that must hold for every reachable engine state.
pub trait Invariant {
    /// Checks the property.
    fn holds(engine: &GameEngine) -> bool;

    /// Human-readable description of the property.
    fn description() -> &'static str;
}

/// Report of a violated invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("invariant violated: {description}")]
pub struct InvariantViolation {
    /// Description of the violated property.
    pub description: &'static str,
}

impl std::error::Error for InvariantViolation {}

/// Every cell's stored position matches its grid index.
pub struct PositionsAligned;

impl Invariant for PositionsAligned {
    fn holds(engine: &GameEngine) -> bool {
        let size = engine.board().size();
        engine
            .board()
            .cells()
            .iter()
            .enumerate()
            .all(|(index, cell)| cell.row() == index / size && cell.col() == index % size)
    }

    fn description() -> &'static str {
        "every cell's stored position matches its grid index"
    }
}

/// Under alternation, no player is ever more than one move ahead.
pub struct MarksBalanced;

impl Invariant for MarksBalanced {
    fn holds(engine: &GameEngine) -> bool {
        let mut counts = PlayerId::iter().map(|id| {
            engine
                .board()
                .cells()
                .iter()
                .filter(|cell| cell.occupant() == Some(id))
                .count()
        });
        let one = counts.next().unwrap_or(0);
        let two = counts.next().unwrap_or(0);
        one.abs_diff(two) <= 1
    }

    fn description() -> &'static str {
        "mark counts differ by at most one"
    }
}

/// Replaying the history onto an empty board reconstructs the current
/// board exactly.
pub struct HistoryConsistent;

impl Invariant for HistoryConsistent {
    fn holds(engine: &GameEngine) -> bool {
        let mut replayed = Board::new(engine.board().size());
        for mov in engine.history() {
            if replayed.place(mov.row, mov.col, mov.player).is_err() {
                return false;
            }
        }
        replayed == *engine.board()
    }

    fn description() -> &'static str {
        "replaying the history reconstructs the board"
    }
}

/// Checks every invariant, reporting the first violation.
pub fn check(engine: &GameEngine) -> Result<(), InvariantViolation> {
    fn verify<I: Invariant>(engine: &GameEngine) -> Result<(), InvariantViolation> {
        if I::holds(engine) {
            Ok(())
        } else {
            Err(InvariantViolation {
                description: I::description(),
            })
        }
    }

    verify::<PositionsAligned>(engine)?;
    verify::<MarksBalanced>(engine)?;
    verify::<HistoryConsistent>(engine)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::types::Player;

    fn new_game() -> GameEngine {
        GameEngine::new(
            Player::new("Ada", 'X', "Crosses"),
            Player::new("Ben", 'O', "Noughts"),
            GameConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_fresh_game_holds() {
        assert!(check(&new_game()).is_ok());
    }

    #[test]
    fn test_holds_after_moves() {
        let mut game = new_game();
        game.attempt_move(0, 0).unwrap();
        game.attempt_move(1, 1).unwrap();
        game.attempt_move(2, 2).unwrap();
        assert!(check(&game).is_ok());
    }

    #[test]
    fn test_unbalanced_marks_detected() {
        let mut game = new_game();
        // Bypass the engine: two marks for the same player, no history.
        game.board.place(0, 0, PlayerId::One).unwrap();
        game.board.place(0, 1, PlayerId::One).unwrap();

        assert!(!MarksBalanced::holds(&game));
        assert_eq!(
            check(&game),
            Err(InvariantViolation {
                description: MarksBalanced::description()
            })
        );
    }

    #[test]
    fn test_history_divergence_detected() {
        let mut game = new_game();
        game.attempt_move(0, 0).unwrap();
        // Corrupt the board behind the history's back.
        game.board.place(2, 2, game.current).unwrap();

        assert!(!HistoryConsistent::holds(&game));
        assert!(check(&game).is_err());
    }

    #[test]
    fn test_violation_message() {
        let violation = InvariantViolation {
            description: "mark counts differ by at most one",
        };
        assert_eq!(
            violation.to_string(),
            "invariant violated: mark counts differ by at most one"
        );
    }
}
