//! Outcome/phase agreement.

use super::super::{GameEngine, Outcome, Phase, rules};
use super::Invariant;

/// Invariant: an outcome exists exactly when the game is finished, and it
/// agrees with the board. Setup always shows an empty board.
pub struct OutcomePhaseInvariant;

impl Invariant<GameEngine> for OutcomePhaseInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let board = engine.board();
        match (engine.phase(), engine.outcome()) {
            (Phase::Setup, None) => board.occupied() == 0,
            (Phase::InProgress, None) => rules::check_winner(board).is_none() && !rules::is_full(board),
            (Phase::Finished, Some(Outcome::Winner(player))) => rules::check_winner(board) == Some(player),
            (Phase::Finished, Some(Outcome::Tie)) => rules::is_draw(board),
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Outcome is present only when finished and matches the board"
    }
}
