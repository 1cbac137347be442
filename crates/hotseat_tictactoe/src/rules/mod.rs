//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). The engine calls them
//! once per accepted move; the terminal front-end uses them for highlighting.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, winning_line};
