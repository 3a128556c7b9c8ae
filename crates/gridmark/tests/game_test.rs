//! Integration tests for the game state machine.

use gridmark::{Game, GameStatus, Mark, PlaceError, Position, Square};

fn pos(index: usize) -> Position {
    Position::from_index(index).unwrap()
}

fn occupied_count(game: &Game) -> usize {
    game.board()
        .squares()
        .iter()
        .filter(|s| **s != Square::Empty)
        .count()
}

#[test]
fn test_move_count_tracks_board_contents() {
    let mut game = Game::new(Mark::X);
    let sequence = [4, 0, 8, 2, 3];
    let mut mark = Mark::X;
    for index in sequence {
        game.place(pos(index), mark).unwrap();
        assert_eq!(game.move_count() as usize, occupied_count(&game));
        mark = mark.opponent();
    }
}

#[test]
fn test_rejections_leave_count_consistent() {
    let mut game = Game::new(Mark::X);
    game.place(pos(4), Mark::X).unwrap();
    // Occupied square and out-of-turn attempts change nothing.
    assert!(game.place(pos(4), Mark::O).is_err());
    assert!(game.place(pos(0), Mark::X).is_err());
    assert_eq!(game.move_count() as usize, occupied_count(&game));
    assert_eq!(game.move_count(), 1);
}

#[test]
fn test_turn_alternates_while_in_progress() {
    let mut game = Game::new(Mark::O);
    let mut expected = Mark::O;
    for index in [4, 0, 8, 2, 6, 1] {
        assert_eq!(game.to_move(), expected);
        game.place(pos(index), expected).unwrap();
        expected = expected.opponent();
    }
}

#[test]
fn test_top_row_win_locks_the_game() {
    // Scenario: X@0, O@3, X@1, O@4, X@2 completes the top row.
    let mut game = Game::new(Mark::X);
    game.place(pos(0), Mark::X).unwrap();
    game.place(pos(3), Mark::O).unwrap();
    game.place(pos(1), Mark::X).unwrap();
    game.place(pos(4), Mark::O).unwrap();
    game.place(pos(2), Mark::X).unwrap();

    assert_eq!(game.status(), GameStatus::Won(Mark::X));
    assert_eq!(game.place(pos(5), Mark::O), Err(PlaceError::GameOver));
    assert_eq!(game.move_count(), 5);
}

#[test]
fn test_full_board_without_line_is_tied() {
    // X O X / O X X / O X O - nine moves, no line completed.
    let mut game = Game::new(Mark::X);
    for (index, mark) in [
        (0, Mark::X),
        (1, Mark::O),
        (2, Mark::X),
        (3, Mark::O),
        (4, Mark::X),
        (6, Mark::O),
        (5, Mark::X),
        (8, Mark::O),
        (7, Mark::X),
    ] {
        game.place(pos(index), mark).unwrap();
    }
    assert_eq!(game.status(), GameStatus::Tied);
    assert_eq!(game.move_count(), 9);
    assert_eq!(game.place(pos(0), Mark::O), Err(PlaceError::GameOver));
}

#[test]
fn test_reset_restores_initial_conditions() {
    let mut game = Game::new(Mark::O);
    game.place(pos(4), Mark::O).unwrap();
    game.place(pos(0), Mark::X).unwrap();

    game.reset(Mark::X);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.move_count(), 0);
    assert!(Position::ALL.iter().all(|p| game.board().is_empty(*p)));
    assert_eq!(game.to_move(), Mark::X);
    assert!(game.place(pos(4), Mark::X).is_ok());
}

#[test]
fn test_diagonal_and_column_wins() {
    // O takes the {2,4,6} diagonal.
    let mut game = Game::new(Mark::O);
    game.place(pos(2), Mark::O).unwrap();
    game.place(pos(0), Mark::X).unwrap();
    game.place(pos(4), Mark::O).unwrap();
    game.place(pos(1), Mark::X).unwrap();
    game.place(pos(6), Mark::O).unwrap();
    assert_eq!(game.status(), GameStatus::Won(Mark::O));

    // X takes the left column.
    let mut game = Game::new(Mark::X);
    game.place(pos(0), Mark::X).unwrap();
    game.place(pos(1), Mark::O).unwrap();
    game.place(pos(3), Mark::X).unwrap();
    game.place(pos(2), Mark::O).unwrap();
    game.place(pos(6), Mark::X).unwrap();
    assert_eq!(game.status(), GameStatus::Won(Mark::X));
}
