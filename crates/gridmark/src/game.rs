//! The tic-tac-toe game state machine.

use crate::position::Position;
use crate::rules;
use crate::types::{Board, GameStatus, Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A single game of tic-tac-toe.
///
/// State machine with one transition, [`Game::place`]: `InProgress` moves
/// to `Won` or `Tied` and stays there until [`Game::reset`]. The move
/// count is maintained in lockstep with board mutations here and nowhere
/// else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Mark,
    move_count: u8,
    status: GameStatus,
}

/// Error rejecting an invalid move.
///
/// Rejections are local and recoverable: the game state is never mutated
/// on the error path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlaceError {
    /// The square at the position is already occupied.
    #[display("{} is already occupied", _0)]
    SquareOccupied(Position),

    /// It's not this mark's turn.
    #[display("It's not {}'s turn", _0)]
    OutOfTurn(Mark),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for PlaceError {}

impl Game {
    /// Creates a new game with the given starting mark.
    pub fn new(starter: Mark) -> Self {
        Self {
            board: Board::new(),
            to_move: starter,
            move_count: 0,
            status: GameStatus::InProgress,
        }
    }

    /// Clears the board and starts a fresh game with the given starter.
    #[instrument(skip(self))]
    pub fn reset(&mut self, starter: Mark) {
        debug!(%starter, "Resetting game");
        *self = Self::new(starter);
    }

    /// Places `mark` at `pos`.
    ///
    /// On success the square is set, the move count incremented, the
    /// status recomputed, and the turn flipped only if the game is still
    /// in progress.
    ///
    /// # Errors
    ///
    /// Rejects without mutating state when the game is over
    /// ([`PlaceError::GameOver`]), when `mark` is not the turn owner
    /// ([`PlaceError::OutOfTurn`]), or when the square is occupied
    /// ([`PlaceError::SquareOccupied`]).
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), PlaceError> {
        if self.status != GameStatus::InProgress {
            return Err(PlaceError::GameOver);
        }
        if mark != self.to_move {
            return Err(PlaceError::OutOfTurn(mark));
        }
        if !self.board.is_empty(pos) {
            return Err(PlaceError::SquareOccupied(pos));
        }

        self.board.set(pos, Square::Occupied(mark));
        self.move_count += 1;
        self.status = rules::status(&self.board, self.move_count);

        if self.status == GameStatus::InProgress {
            self.to_move = mark.opponent();
        } else {
            debug!(status = ?self.status, "Game over");
        }

        Ok(())
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark whose placement is currently legal.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the number of marks on the board (0-9).
    pub fn move_count(&self) -> u8 {
        self.move_count
    }

    /// Returns the current game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Mark::X)
    }
}
