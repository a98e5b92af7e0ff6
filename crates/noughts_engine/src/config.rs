//! Game configuration: grid size and first-player policy.

use crate::types::PlayerId;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Smallest supported grid side.
pub const MIN_SIZE: usize = 3;

/// How the opening player is chosen at game start and on restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirstPlayerPolicy {
    /// The same player always opens.
    Fixed(PlayerId),
    /// A coin flip per game.
    Random,
}

impl FirstPlayerPolicy {
    /// Resolves the policy to an opening player.
    #[instrument]
    pub fn choose(self) -> PlayerId {
        match self {
            FirstPlayerPolicy::Fixed(player) => player,
            FirstPlayerPolicy::Random => {
                if rand::random() {
                    PlayerId::One
                } else {
                    PlayerId::Two
                }
            }
        }
    }
}

/// Configuration for a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the grid.
    pub size: usize,
    /// Opening-player policy, re-applied on every restart.
    pub first_player: FirstPlayerPolicy,
}

impl GameConfig {
    /// Checks that the configuration describes a playable game.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::BoardTooSmall`] for grids below 3x3.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < MIN_SIZE {
            return Err(ConfigError::BoardTooSmall { size: self.size });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    /// A classic 3x3 game where player one opens.
    fn default() -> Self {
        Self {
            size: 3,
            first_player: FirstPlayerPolicy::Fixed(PlayerId::One),
        }
    }
}

/// Error returned for an unusable configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ConfigError {
    /// Grids below 3x3 cannot form a line worth winning.
    #[display("grid side {size} is below the minimum of 3")]
    BoardTooSmall {
        /// Requested side length.
        size: usize,
    },
}

impl std::error::Error for ConfigError {}
