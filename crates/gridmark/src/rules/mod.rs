//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating game state, separated from board
//! storage so the game engine and the opponent policy share one
//! line table and one notion of win/tie.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_winner;

use crate::position::Position;
use crate::types::{Board, GameStatus};

/// The 8 winning lines: rows, columns, diagonals.
///
/// Process-wide constant; scan order is part of the opponent policy's
/// contract, so the table order is fixed.
pub const WIN_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Evaluates the status of a board with the given move count.
///
/// Win scan runs first (in table order), then a full board with no
/// winner is a tie.
pub fn status(board: &Board, move_count: u8) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if move_count == 9 {
        GameStatus::Tied
    } else {
        GameStatus::InProgress
    }
}
