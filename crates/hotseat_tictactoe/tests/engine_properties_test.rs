//! Properties checked over every game reachable from a fixed move order.
//!
//! The move sequences are all permutations of the nine cells, truncated at
//! the point the game finishes. That is every legal game of tic-tac-toe.

use hotseat_tictactoe::invariants::{EngineInvariants, InvariantSet};
use hotseat_tictactoe::{
    EngineError, GameEngine, MoveOutcome, Outcome, Phase, Player, PlayerNames, Position, rules,
};

fn fresh() -> GameEngine {
    GameEngine::replay(PlayerNames::new("Ann", "Bob"), &[]).unwrap()
}

/// Walks every legal game depth-first, calling `visit` before each move.
fn walk(engine: &GameEngine, visit: &mut impl FnMut(&GameEngine, usize)) {
    for index in 0..9 {
        if !engine.board().is_empty(Position::from_index(index).unwrap()) {
            continue;
        }
        visit(engine, index);
        let mut next = engine.clone();
        if let Ok(MoveOutcome::Continue { .. }) = next.play_cell(index) {
            walk(&next, visit);
        }
    }
}

#[test]
fn test_turn_and_count_follow_move_number() {
    let mut games = 0usize;
    walk(&fresh(), &mut |engine, index| {
        let n = engine.move_count();
        let expected = if n % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(engine.current_player(), expected);

        let mut next = engine.clone();
        next.play_cell(index).unwrap();
        assert_eq!(next.move_count(), n + 1);
        assert_eq!(next.board().occupied(), n + 1);
        assert!(EngineInvariants::check_all(&next).is_ok());
        games += 1;
    });
    // 549,945 legal moves across all games.
    assert_eq!(games, 549_945);
}

#[test]
fn test_finish_matches_rules() {
    walk(&fresh(), &mut |engine, index| {
        let mut next = engine.clone();
        match next.play_cell(index).unwrap() {
            MoveOutcome::Finished(Outcome::Winner(player)) => {
                assert_eq!(player, engine.current_player());
                assert_eq!(rules::check_winner(next.board()), Some(player));
                assert_eq!(next.phase(), Phase::Finished);
            }
            MoveOutcome::Finished(Outcome::Tie) => {
                assert!(rules::is_draw(next.board()));
                assert_eq!(next.move_count(), 9);
            }
            MoveOutcome::Continue { next: player } => {
                assert_eq!(player, engine.current_player().opponent());
                assert_eq!(rules::check_winner(next.board()), None);
                assert_eq!(next.outcome(), None);
            }
        }
    });
}

#[test]
fn test_occupied_cells_never_change_state() {
    walk(&fresh(), &mut |engine, _| {
        for taken in engine.history() {
            let mut attempt = engine.clone();
            assert_eq!(
                attempt.play(taken.position),
                Err(EngineError::CellOccupied(taken.position))
            );
            assert_eq!(&attempt, engine);
        }
    });
}
