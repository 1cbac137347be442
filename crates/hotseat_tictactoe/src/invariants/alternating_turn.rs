//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameEngine, Phase, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Move history must show X, O, X, O, ... starting with X. While in progress
/// the player to move follows the last mover; once finished the last mover
/// stays current.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();

        let alternates = history
            .iter()
            .enumerate()
            .all(|(n, m)| m.player == if n % 2 == 0 { Player::X } else { Player::O });
        if !alternates {
            return false;
        }

        let expected = match (engine.phase(), history.last()) {
            (_, None) => Player::X,
            (Phase::Finished, Some(last)) => last.player,
            (_, Some(last)) => last.player.opponent(),
        };
        engine.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
