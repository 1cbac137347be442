//! Hotseat tic-tac-toe engine.
//!
//! A deterministic state machine for two players sharing one device:
//! collect names, alternate turns on a 3x3 board, detect wins and ties,
//! reset or start over. Rendering is left to the caller, which reads a
//! [`GameSnapshot`] and forwards intents to the [`GameEngine`].
//!
//! # Example
//!
//! ```
//! use hotseat_tictactoe::{GameEngine, Outcome, Phase, Player, Slot};
//!
//! let mut engine = GameEngine::new();
//! engine.set_player_name(Slot::One, "Ann");
//! engine.set_player_name(Slot::Two, "Bob");
//! engine.start_game()?;
//!
//! for index in [0, 4, 1, 5, 2] {
//!     engine.play_cell(index)?;
//! }
//!
//! assert_eq!(engine.phase(), Phase::Finished);
//! assert_eq!(engine.outcome(), Some(Outcome::Winner(Player::X)));
//! # Ok::<(), hotseat_tictactoe::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod error;
mod phases;
mod position;
mod snapshot;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Move, MoveOutcome};
pub use engine::GameEngine;
pub use error::EngineError;
pub use phases::{Outcome, Phase};
pub use position::Position;
pub use snapshot::GameSnapshot;
pub use types::{Board, Player, PlayerNames, Slot, Square};
