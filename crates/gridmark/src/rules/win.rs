//! Win detection logic.

use super::WIN_LINES;
use crate::types::{Board, Mark, Square};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Scans the line table in its fixed order and returns the mark of the
/// first fully occupied line, `None` if no line is complete.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in WIN_LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return match sq {
                Square::Occupied(mark) => Some(mark),
                Square::Empty => None,
            };
        }
    }

    None
}
