//! Core domain types for tic-tac-toe.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Mark {
    /// Mark X (the conventional first mover).
    X,
    /// Mark O.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

/// 3x3 tic-tac-toe board, indexed by [`Position`].
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
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns the empty positions in board order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-9 key, occupied squares their mark.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(mark) => mark.to_string(),
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

/// Current status of the game.
///
/// Derived from the board after every successful placement; once the
/// game is won or tied, no further placements are accepted until reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a winning mark.
    Won(Mark),
    /// Board is full with no winner.
    Tied,
}
