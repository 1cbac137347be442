//! First-class invariants for the game engine.
//!
//! Invariants are logical properties that must hold after every engine
//! operation. The engine checks them in debug builds; tests can check them
//! directly.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect<S>(checks: &[(fn(&S) -> bool, fn() -> &'static str)], state: &S) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = checks
        .iter()
        .filter(|(holds, _)| !holds(state))
        .map(|(_, description)| InvariantViolation::new(description()))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(
            &[
                (I1::holds, I1::description),
                (I2::holds, I2::description),
                (I3::holds, I3::description),
            ],
            state,
        )
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(
            &[(I1::holds, I1::description), (I2::holds, I2::description)],
            state,
        )
    }
}

pub mod alternating_turn;
pub mod move_count;
pub mod outcome_phase;

pub use alternating_turn::AlternatingTurnInvariant;
pub use move_count::MoveCountInvariant;
pub use outcome_phase::OutcomePhaseInvariant;

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    MoveCountInvariant,
    AlternatingTurnInvariant,
    OutcomePhaseInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameEngine, Player, PlayerNames, Position, Square};

    #[test]
    fn test_invariant_set_holds_for_new_engine() {
        assert!(EngineInvariants::check_all(&GameEngine::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let engine = GameEngine::replay(PlayerNames::new("Ann", "Bob"), &[0, 4, 2]).unwrap();
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut engine = GameEngine::replay(PlayerNames::new("Ann", "Bob"), &[4]).unwrap();
        // Extra O mark with no history entry: count and turn order both break.
        engine.board.set(Position::TopLeft, Square::Occupied(Player::O));
        engine.to_move = Player::X;

        let violations = EngineInvariants::check_all(&engine).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (MoveCountInvariant, OutcomePhaseInvariant);
        assert!(TwoInvariants::check_all(&GameEngine::new()).is_ok());
    }
}
