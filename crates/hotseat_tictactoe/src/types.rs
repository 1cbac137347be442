//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Player symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player X (goes first, seat one).
    #[display("X")]
    X,
    /// Player O (goes second, seat two).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the seat this symbol is assigned to.
    pub fn slot(self) -> Slot {
        match self {
            Player::X => Slot::One,
            Player::O => Slot::Two,
        }
    }
}

/// Seat of a named player. Seat one always plays X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Slot {
    /// First seat (X).
    #[display("1")]
    One,
    /// Second seat (O).
    #[display("2")]
    Two,
}

impl Slot {
    /// Both seats, in order.
    pub const ALL: [Slot; 2] = [Slot::One, Slot::Two];

    /// Returns the symbol played from this seat.
    pub fn player(self) -> Player {
        match self {
            Slot::One => Player::X,
            Slot::Two => Player::O,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Slot::One => 0,
            Slot::Two => 1,
        }
    }
}

impl TryFrom<u8> for Slot {
    type Error = crate::EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Slot::One),
            2 => Ok(Slot::Two),
            other => Err(crate::EngineError::InvalidSlot(other)),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their index (0-8).
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => pos.to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Display names for both seats.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerNames {
    names: [String; 2],
}

impl PlayerNames {
    /// Creates names for seat one and seat two.
    pub fn new(one: impl Into<String>, two: impl Into<String>) -> Self {
        Self {
            names: [one.into(), two.into()],
        }
    }

    /// Returns the stored (untrimmed) name for a seat.
    pub fn get(&self, slot: Slot) -> &str {
        &self.names[slot.index()]
    }

    /// Returns the name of the seat playing `player`.
    pub fn of(&self, player: Player) -> &str {
        self.get(player.slot())
    }

    pub(crate) fn set(&mut self, slot: Slot, name: String) {
        self.names[slot.index()] = name;
    }

    /// First seat whose name is blank after trimming.
    pub fn first_blank(&self) -> Option<Slot> {
        Slot::ALL
            .into_iter()
            .find(|slot| self.get(*slot).trim().is_empty())
    }

    pub(crate) fn clear(&mut self) {
        self.names = Default::default();
    }
}
