//! Integration tests for the opponent heuristic.

use gridmark::policy::{choose_move, winning_move};
use gridmark::{Board, Game, GameStatus, Mark, Position, Square};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn pos(index: usize) -> Position {
    Position::from_index(index).unwrap()
}

fn board_with(occupied: &[(usize, Mark)]) -> Board {
    let mut board = Board::new();
    for (index, mark) in occupied {
        board.set(pos(*index), Square::Occupied(*mark));
    }
    board
}

#[test]
fn test_win_priority_beats_block() {
    // O is one move from {0,1,2} while X is one move from {3,4,5};
    // the policy completes its own line instead of blocking.
    let board = board_with(&[(0, Mark::O), (1, Mark::O), (3, Mark::X), (4, Mark::X)]);
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(choose_move(&board, Mark::O, &mut rng), Some(pos(2)));
}

#[test]
fn test_block_priority_beats_random() {
    // No O line is close; X holds {0,4} of the main diagonal.
    let board = board_with(&[(0, Mark::X), (4, Mark::X), (1, Mark::O)]);
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(choose_move(&board, Mark::O, &mut rng), Some(pos(8)));
}

#[test]
fn test_simultaneous_blocks_resolve_by_line_order() {
    // X threatens the top row (missing 2) and the left column (missing 6).
    // Rows precede columns in the line table.
    let board = board_with(&[(0, Mark::X), (1, Mark::X), (3, Mark::X), (4, Mark::O)]);
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(choose_move(&board, Mark::O, &mut rng), Some(pos(2)));
}

#[test]
fn test_simultaneous_wins_resolve_by_line_order() {
    let board = board_with(&[(3, Mark::O), (5, Mark::O), (6, Mark::O), (7, Mark::O)]);
    // {3,4,5} (middle row, missing the middle cell) precedes {6,7,8}.
    assert_eq!(winning_move(&board, Mark::O), Some(pos(4)));
}

#[test]
fn test_policy_output_is_always_placeable() {
    // Drive whole games with the policy on both seats: every chosen
    // square must be accepted by the engine.
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Game::new(Mark::X);
        while game.status() == GameStatus::InProgress {
            let mark = game.to_move();
            let square = choose_move(game.board(), mark, &mut rng)
                .expect("in-progress board has an empty square");
            game.place(square, mark).unwrap();
        }
    }
}

#[test]
fn test_policy_never_mutates_the_board() {
    let board = board_with(&[(0, Mark::X), (4, Mark::O)]);
    let snapshot = board.clone();
    let mut rng = StdRng::seed_from_u64(5);
    let _ = choose_move(&board, Mark::O, &mut rng);
    assert_eq!(board, snapshot);
}
