//! The opponent's move selection heuristic.
//!
//! Two-tier heuristic, deliberately not minimax: complete an own line if
//! possible, otherwise block the opponent's, otherwise pick a random
//! empty square. The line-table scan order decides which line wins when
//! several qualify at once, so both deterministic tiers are part of the
//! contract.

use crate::position::Position;
use crate::rules::WIN_LINES;
use crate::types::{Board, Mark, Square};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Finds the empty square that would complete a line for `mark`.
///
/// Scans the line table in its fixed order; within a line the missing
/// cell is checked third, middle, first. Returns the first completion
/// found, `None` if no line is one move from completion.
#[instrument(skip(board))]
pub fn winning_move(board: &Board, mark: Mark) -> Option<Position> {
    let own = Square::Occupied(mark);
    for [a, b, c] in WIN_LINES {
        if board.get(a) == own && board.get(b) == own && board.is_empty(c) {
            return Some(c);
        }
        if board.get(a) == own && board.get(c) == own && board.is_empty(b) {
            return Some(b);
        }
        if board.get(b) == own && board.get(c) == own && board.is_empty(a) {
            return Some(a);
        }
    }

    None
}

/// Chooses the opponent's next square, in strict priority order:
/// win if possible, block if needed, else a uniform random empty square.
///
/// The caller applies the result through [`crate::Game::place`]; this
/// function has no side effects. Returns `None` only on a full board,
/// which callers must not pass in.
#[instrument(skip(board, rng), fields(mark = %self_mark))]
pub fn choose_move<R: Rng>(board: &Board, self_mark: Mark, rng: &mut R) -> Option<Position> {
    if let Some(pos) = winning_move(board, self_mark) {
        debug!(%pos, "Taking winning square");
        return Some(pos);
    }

    if let Some(pos) = winning_move(board, self_mark.opponent()) {
        debug!(%pos, "Blocking opponent");
        return Some(pos);
    }

    let empties = board.empty_positions();
    let pos = empties.choose(rng).copied();
    debug!(?pos, "Random fallback");
    pos
}
