//! The game engine: turn order, end-state bookkeeping, and restart.

use crate::action::{Move, MoveError};
use crate::board::Board;
use crate::config::{ConfigError, GameConfig};
use crate::invariants;
use crate::rules::{self, Line};
use crate::types::{Player, PlayerId};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Current phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Waiting for the current player's move.
    AwaitingMove,
    /// Terminal: the player completed a line.
    Won(PlayerId),
    /// Terminal: the board filled with no completed line.
    Tied,
}

impl GameStatus {
    /// True in [`GameStatus::Won`] or [`GameStatus::Tied`].
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::AwaitingMove)
    }
}

/// Result of an accepted move, for the caller to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The game continues; the other player is up.
    Continue {
        /// The player now holding the turn.
        next: PlayerId,
    },
    /// The move completed a line and ended the game.
    Win {
        /// The player who completed the line.
        winner: PlayerId,
        /// The completed line, for highlighting.
        line: Line,
    },
    /// The move filled the board with no line completed.
    Tie,
}

/// Game-state engine for one match between two players.
///
/// The engine owns the board and both player identities. State mutates
/// only through [`GameEngine::attempt_move`] and
/// [`GameEngine::restart`]; every other method is a read-only query.
/// The engine is synchronous and single-caller: the surrounding layer
/// serializes its input events into one call at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEngine {
    pub(crate) board: Board,
    pub(crate) players: [Player; 2],
    pub(crate) config: GameConfig,
    pub(crate) current: PlayerId,
    pub(crate) status: GameStatus,
    pub(crate) turns_taken: u32,
    pub(crate) history: Vec<Move>,
}

impl GameEngine {
    /// Creates a game from two player profiles and a configuration.
    ///
    /// The opening player comes from the configuration's
    /// [`crate::FirstPlayerPolicy`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::BoardTooSmall`] for grids below 3x3.
    #[instrument(skip(player_one, player_two))]
    pub fn new(
        player_one: Player,
        player_two: Player,
        config: GameConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let current = config.first_player.choose();
        info!(size = config.size, first = ?current, "Starting new game");
        Ok(Self {
            board: Board::new(config.size),
            players: [player_one, player_two],
            config,
            current,
            status: GameStatus::AwaitingMove,
            turns_taken: 0,
            history: Vec::new(),
        })
    }

    /// Attempts a move at the coordinate for the current player.
    ///
    /// On success the engine evaluates end conditions and either ends
    /// the game or hands the turn to the other player. A rejected move
    /// leaves the engine untouched: the current player retains the
    /// turn and no move is consumed.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] once the game is terminal, otherwise
    /// the board's rejection ([`MoveError::OutOfBounds`] or
    /// [`MoveError::CellOccupied`]) passed through unchanged.
    #[instrument(skip(self), fields(player = ?self.current))]
    pub fn attempt_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let player = self.current;
        self.board.place(row, col, player)?;
        self.turns_taken += 1;
        self.history.push(Move { player, row, col });

        let outcome = if let Some(win) = rules::winning_line(&self.board) {
            self.status = GameStatus::Won(win.player);
            info!(winner = ?win.player, line = ?win.line, "Game won");
            MoveOutcome::Win {
                winner: win.player,
                line: win.line,
            }
        } else if self.board.is_full() {
            self.status = GameStatus::Tied;
            info!(turns = self.turns_taken, "Game tied");
            MoveOutcome::Tie
        } else {
            self.current = player.opponent();
            MoveOutcome::Continue { next: self.current }
        };

        debug_assert!(
            invariants::check(self).is_ok(),
            "accepted move left the engine inconsistent: {:?}",
            invariants::check(self)
        );
        Ok(outcome)
    }

    /// Restarts the match: clears the board, resets turn bookkeeping
    /// and history, and re-applies the first-player policy. Legal in
    /// any state.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.board.clear();
        self.history.clear();
        self.turns_taken = 0;
        self.status = GameStatus::AwaitingMove;
        self.current = self.config.first_player.choose();
        info!(first = ?self.current, "Game restarted");
    }

    /// The player holding the turn.
    ///
    /// Remains the winner's id after a win; meaningless once tied.
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// The profile registered under the given id.
    pub fn player(&self, id: PlayerId) -> &Player {
        match id {
            PlayerId::One => &self.players[0],
            PlayerId::Two => &self.players[1],
        }
    }

    /// Current phase of the game.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The winner's id, or `None` while live or tied.
    pub fn winner(&self) -> Option<PlayerId> {
        match self.status {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    /// Read-only snapshot of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Accepted moves so far this game.
    pub fn turns_taken(&self) -> u32 {
        self.turns_taken
    }

    /// Accepted moves in order of play.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The configuration this game was created with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Renders the board using each player's mark symbol.
    pub fn display(&self) -> String {
        self.board
            .display([self.players[0].mark(), self.players[1].mark()])
    }
}
