//! Noughts engine - a pure tic-tac-toe game-state engine.
//!
//! The crate owns board representation, move validation, turn-taking,
//! and win/tie detection. Rendering, input wiring, and menu flows
//! belong to the caller: a UI layer of any kind (terminal, web, test
//! harness) drives the engine through [`GameEngine::attempt_move`] and
//! reads results back through its queries. The engine is synchronous
//! and single-threaded; every call runs to completion or fails
//! immediately.
//!
//! # Architecture
//!
//! - **Board**: grid storage, placement, and occupancy queries
//! - **Rules**: pure win/draw evaluation over a board
//! - **Engine**: turn order, end-state bookkeeping, restart
//! - **Players**: caller-side move policies (random opponent)
//!
//! # Example
//!
//! ```
//! use noughts_engine::{GameConfig, GameEngine, MoveOutcome, Player, PlayerId};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut game = GameEngine::new(
//!     Player::new("Player 1", '☠', "Skulls"),
//!     Player::new("Player 2", '☻', "Smileys"),
//!     GameConfig::default(),
//! )?;
//!
//! match game.attempt_move(1, 1)? {
//!     MoveOutcome::Continue { next } => assert_eq!(next, PlayerId::Two),
//!     outcome => panic!("unexpected outcome: {outcome:?}"),
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod board;
mod config;
mod engine;
mod players;
mod types;

// Public rule and invariant surfaces
pub mod invariants;
pub mod rules;

// Crate-level exports - Moves
pub use action::{Move, MoveError};

// Crate-level exports - Board
pub use board::{Board, Cell, PlaceError, Square};

// Crate-level exports - Configuration
pub use config::{ConfigError, FirstPlayerPolicy, GameConfig, MIN_SIZE};

// Crate-level exports - Engine
pub use engine::{GameEngine, GameStatus, MoveOutcome};

// Crate-level exports - Player identity
pub use types::{Player, PlayerId};

// Crate-level exports - Caller-side policies
pub use players::RandomOpponent;

// Crate-level exports - Rules (also reachable under `rules::`)
pub use rules::{Line, WinningLine};
