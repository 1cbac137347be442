//! Lifecycle phases and game outcomes.

use super::Player;
use serde::{Deserialize, Serialize};

/// Lifecycle stage of a game session.
///
/// ```text
/// Setup --start--> InProgress --line or full board--> Finished
///   ^                  ^                                  |
///   |                  +------------- reset --------------+
///   +------------------------- new game -----------------+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Phase {
    /// Collecting player names.
    #[display("setup")]
    Setup,
    /// Cells are being played.
    #[display("in progress")]
    InProgress,
    /// A win or tie has been reached.
    #[display("finished")]
    Finished,
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player completed a line.
    Winner(Player),
    /// Board filled without a line.
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Tie => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}
