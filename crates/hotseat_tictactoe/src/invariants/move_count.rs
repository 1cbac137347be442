//! Move count invariant: history length equals occupied squares.

use super::super::{GameEngine, Square};
use super::Invariant;

/// Invariant: every mark on the board has exactly one history entry, and
/// each history entry's square holds that player's mark.
pub struct MoveCountInvariant;

impl Invariant<GameEngine> for MoveCountInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let board = engine.board();
        board.occupied() == engine.move_count()
            && engine
                .history()
                .iter()
                .all(|m| board.get(m.position) == Square::Occupied(m.player))
    }

    fn description() -> &'static str {
        "Move count matches occupied squares and history"
    }
}
