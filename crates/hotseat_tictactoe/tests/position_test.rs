//! Tests for the board position enum.

use hotseat_tictactoe::{Board, GameEngine, PlayerNames, Position};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_index_is_row_major() {
    for pos in Position::ALL {
        assert_eq!(pos.to_index(), pos.row() * 3 + pos.col());
    }
    assert_eq!(Position::MiddleRight.row(), 1);
    assert_eq!(Position::MiddleRight.col(), 2);
}

#[test]
fn test_from_label_or_number() {
    assert_eq!(Position::from_label_or_number("4"), Some(Position::Center));
    assert_eq!(Position::from_label_or_number(" top-right "), Some(Position::TopRight));
    assert_eq!(Position::from_label_or_number("12"), None);
    assert_eq!(Position::from_label_or_number(""), None);
}

#[test]
fn test_valid_moves_empty_board() {
    let board = Board::new();
    assert_eq!(Position::valid_moves(&board).len(), 9);
}

#[test]
fn test_valid_moves_filters_occupied() {
    let engine = GameEngine::replay(PlayerNames::new("Ann", "Bob"), &[0, 4]).unwrap();

    let valid = Position::valid_moves(engine.board());
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
    assert_eq!(engine.valid_moves(), valid);
}
