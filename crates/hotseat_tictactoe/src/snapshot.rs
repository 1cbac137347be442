//! Read-only engine view for rendering and serialization.

use super::action::Move;
use super::engine::GameEngine;
use super::phases::{Outcome, Phase};
use super::{Board, Player, PlayerNames};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Everything the presentation layer reads on each render.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Board contents.
    board: Board,
    /// Lifecycle phase.
    phase: Phase,
    /// Player to move (last mover once finished).
    current_player: Player,
    /// Both player names, untrimmed.
    names: PlayerNames,
    /// Outcome; `None` unless finished.
    outcome: Option<Outcome>,
    /// Marks placed since the board was cleared.
    move_count: usize,
    /// Accepted moves in order.
    history: Vec<Move>,
    /// Display status line.
    status: String,
}

impl From<&GameEngine> for GameSnapshot {
    fn from(engine: &GameEngine) -> Self {
        Self {
            board: engine.board().clone(),
            phase: engine.phase(),
            current_player: engine.current_player(),
            names: engine.names().clone(),
            outcome: engine.outcome(),
            move_count: engine.move_count(),
            history: engine.history().to_vec(),
            status: engine.status_line(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Slot;

    #[test]
    fn test_snapshot_mirrors_engine() {
        let engine = GameEngine::replay(PlayerNames::new("Ann", "Bob"), &[4, 0]).unwrap();
        let snapshot = engine.snapshot();

        assert_eq!(snapshot.board(), engine.board());
        assert_eq!(*snapshot.phase(), Phase::InProgress);
        assert_eq!(*snapshot.current_player(), Player::X);
        assert_eq!(snapshot.names().get(Slot::Two), "Bob");
        assert_eq!(*snapshot.move_count(), 2);
        assert_eq!(*snapshot.outcome(), None);
        assert_eq!(snapshot.status(), "Current Player: Ann (X)");
    }

    #[test]
    fn test_snapshot_json_shape() {
        let engine = GameEngine::replay(PlayerNames::new("Ann", "Bob"), &[0, 3, 1, 4, 2]).unwrap();
        let json = serde_json::to_value(engine.snapshot()).unwrap();

        assert_eq!(json["phase"], "Finished");
        assert_eq!(json["outcome"]["Winner"], "X");
        assert_eq!(json["move_count"], 5);
        assert_eq!(json["board"]["squares"][0]["Occupied"], "X");
        assert_eq!(json["board"]["squares"][8], "Empty");
    }
}
