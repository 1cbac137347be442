//! Engine error types.
//!
//! Every error is recoverable: the engine state is untouched when an
//! operation returns one.

use super::{Phase, Position, Slot};

/// Error that can occur when applying an intent to the engine.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// A player name is empty after trimming whitespace.
    #[display("Player {} needs a name before the game can start", _0)]
    InvalidStartCondition(Slot),

    /// The square at the position is already occupied.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// A cell was played outside the in-progress phase, or a start was
    /// requested outside setup.
    #[display("Not allowed during the {} phase", _0)]
    GameNotInProgress(Phase),

    /// Cell index outside 0-8.
    #[display("Cell index {} is out of range (0-8)", _0)]
    IndexOutOfRange(usize),

    /// Seat number other than 1 or 2.
    #[display("Player slot {} does not exist (expected 1 or 2)", _0)]
    InvalidSlot(u8),
}

impl std::error::Error for EngineError {}
