//! Core domain types shared across the engine.

use serde::{Deserialize, Serialize};

/// Opaque identity of one of the two players in a game.
///
/// Cells, outcomes, and history entries refer to players only through
/// their id. Names, marks, and team labels live in [`Player`] and are
/// formatted into messages by the caller, never by the engine.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum PlayerId {
    /// The first registered player.
    One,
    /// The second registered player.
    Two,
}

impl PlayerId {
    /// Returns the other player's id.
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }
}

/// A player's identity, fixed for the lifetime of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    name: String,
    /// Single-symbol mark shown in cells.
    mark: char,
    /// Team label, available to callers for outcome messaging.
    team: String,
}

impl Player {
    /// Creates a player profile. Set once before play begins.
    pub fn new(name: impl Into<String>, mark: char, team: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mark,
            team: team.into(),
        }
    }

    /// The player's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player's mark symbol.
    pub fn mark(&self) -> char {
        self.mark
    }

    /// The player's team label.
    pub fn team(&self) -> &str {
        &self.team
    }
}
