//! The game engine: names, turns, wins, ties and restarts.
//!
//! All state lives in one owned value. Each operation either applies all of
//! its effects or returns an [`EngineError`] and leaves the engine untouched.

use super::action::{Move, MoveOutcome};
use super::error::EngineError;
use super::invariants::{EngineInvariants, InvariantSet};
use super::phases::{Outcome, Phase};
use super::snapshot::GameSnapshot;
use super::{Board, Player, PlayerNames, Position, Slot, Square, rules};
use tracing::{debug, info, instrument, warn};

/// Two-player tic-tac-toe session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    pub(crate) names: PlayerNames,
    pub(crate) phase: Phase,
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) outcome: Option<Outcome>,
    pub(crate) history: Vec<Move>,
}

impl GameEngine {
    /// Creates an engine in the setup phase with empty names.
    #[instrument]
    pub fn new() -> Self {
        Self {
            names: PlayerNames::default(),
            phase: Phase::Setup,
            board: Board::new(),
            to_move: Player::X,
            outcome: None,
            history: Vec::new(),
        }
    }

    /// Stores a player name verbatim. Allowed in any phase.
    #[instrument(skip(self, name))]
    pub fn set_player_name(&mut self, slot: Slot, name: impl Into<String>) {
        let name = name.into();
        debug!(%slot, name = %name, "Player name updated");
        self.names.set(slot, name);
    }

    /// True when both names are non-blank and the engine is in setup.
    pub fn can_start(&self) -> bool {
        self.phase == Phase::Setup && self.names.first_blank().is_none()
    }

    /// Starts play with an empty board and X to move.
    ///
    /// # Errors
    ///
    /// - [`EngineError::GameNotInProgress`] outside the setup phase.
    /// - [`EngineError::InvalidStartCondition`] if a name is blank after trimming.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn start_game(&mut self) -> Result<(), EngineError> {
        if self.phase != Phase::Setup {
            warn!("Start requested outside setup");
            return Err(EngineError::GameNotInProgress(self.phase));
        }
        if let Some(slot) = self.names.first_blank() {
            warn!(%slot, "Start requested with blank name");
            return Err(EngineError::InvalidStartCondition(slot));
        }

        self.clear_board();
        self.phase = Phase::InProgress;
        info!(
            x = %self.names.of(Player::X),
            o = %self.names.of(Player::O),
            "Game started"
        );
        self.check_invariants();
        Ok(())
    }

    /// Plays the cell at `index` (0-8) for the current player.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - [`EngineError::IndexOutOfRange`] for an index above 8.
    /// - [`EngineError::GameNotInProgress`] in the setup or finished phase.
    /// - [`EngineError::CellOccupied`] if the cell already holds a mark.
    #[instrument(skip(self))]
    pub fn play_cell(&mut self, index: usize) -> Result<MoveOutcome, EngineError> {
        let position = Position::from_index(index).ok_or(EngineError::IndexOutOfRange(index))?;
        self.play(position)
    }

    /// Plays `position` for the current player.
    ///
    /// # Errors
    ///
    /// Same as [`GameEngine::play_cell`], minus the range check.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play(&mut self, position: Position) -> Result<MoveOutcome, EngineError> {
        if self.phase != Phase::InProgress {
            return Err(EngineError::GameNotInProgress(self.phase));
        }
        if !self.board.is_empty(position) {
            return Err(EngineError::CellOccupied(position));
        }

        let player = self.to_move;
        self.board.set(position, Square::Occupied(player));
        self.history.push(Move::new(player, position));
        debug!(%position, move_count = self.history.len(), "Mark placed");

        let result = if let Some(winner) = rules::check_winner(&self.board) {
            self.finish(Outcome::Winner(winner))
        } else if self.history.len() == Position::ALL.len() {
            self.finish(Outcome::Tie)
        } else {
            self.to_move = player.opponent();
            MoveOutcome::Continue { next: self.to_move }
        };

        self.check_invariants();
        Ok(result)
    }

    fn finish(&mut self, outcome: Outcome) -> MoveOutcome {
        self.phase = Phase::Finished;
        self.outcome = Some(outcome);
        info!(%outcome, moves = self.history.len(), "Game finished");
        MoveOutcome::Finished(outcome)
    }

    /// Clears the board and starts over with the same names. Allowed in any phase.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn reset_game(&mut self) {
        self.clear_board();
        self.phase = Phase::InProgress;
        info!("Game reset");
        self.check_invariants();
    }

    /// Clears the board and both names, returning to setup. Allowed in any phase.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn new_game(&mut self) {
        self.clear_board();
        self.names.clear();
        self.phase = Phase::Setup;
        info!("New game, back to setup");
        self.check_invariants();
    }

    fn clear_board(&mut self) {
        self.board = Board::new();
        self.to_move = Player::X;
        self.outcome = None;
        self.history.clear();
    }

    /// Invariant checks run after every mutation in debug builds.
    fn check_invariants(&self) {
        if !cfg!(debug_assertions) {
            return;
        }
        if let Err(violations) = EngineInvariants::check_all(self) {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            panic!("Engine invariant violated: {}", descriptions);
        }
    }

    /// Builds a started engine and plays `indices` in order.
    ///
    /// # Errors
    ///
    /// Returns the first error from starting or from a rejected move.
    #[instrument(skip(names))]
    pub fn replay(names: PlayerNames, indices: &[usize]) -> Result<Self, EngineError> {
        let mut engine = Self::new();
        for slot in Slot::ALL {
            engine.set_player_name(slot, names.get(slot));
        }
        engine.start_game()?;
        for index in indices {
            engine.play_cell(*index)?;
        }
        Ok(engine)
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move (or who made the final move once finished).
    pub fn current_player(&self) -> Player {
        self.to_move
    }

    /// Stored player names.
    pub fn names(&self) -> &PlayerNames {
        &self.names
    }

    /// Outcome, present only in the finished phase.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Number of marks placed since the board was last cleared.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Empty positions, or none when no game is in progress.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.phase == Phase::InProgress {
            Position::valid_moves(&self.board)
        } else {
            Vec::new()
        }
    }

    /// Name of the winning player, if the game was won.
    pub fn winner_name(&self) -> Option<&str> {
        self.outcome
            .and_then(|outcome| outcome.winner())
            .map(|player| self.names.of(player))
    }

    /// One-line status for display.
    pub fn status_line(&self) -> String {
        match (self.phase, self.outcome) {
            (Phase::Setup, _) => "Enter both player names to start".to_string(),
            (Phase::Finished, Some(Outcome::Tie)) => "Game Tied!".to_string(),
            (Phase::Finished, Some(Outcome::Winner(player))) => {
                format!("{} Wins!", self.names.of(player))
            }
            _ => format!(
                "Current Player: {} ({})",
                self.names.of(self.to_move),
                self.to_move
            ),
        }
    }

    /// Read-only view for the presentation layer.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
