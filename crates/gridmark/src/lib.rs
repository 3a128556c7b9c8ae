//! Gridmark - tic-tac-toe game logic with a heuristic opponent.
//!
//! # Architecture
//!
//! - **Game**: the move-by-move state machine (board, turn owner, status)
//! - **Rules**: pure win/tie evaluation over the fixed line table
//! - **Policy**: the opponent's win/block/random move selection
//! - **Session**: game lifecycle across resets (mode, alternating starter)
//!
//! The library performs no I/O; a frontend applies human input and the
//! policy's choices through [`Game::place`] and renders the results.
//!
//! # Example
//!
//! ```
//! use gridmark::{Game, Mark, Position};
//!
//! let mut game = Game::new(Mark::X);
//! game.place(Position::Center, Mark::X)?;
//! game.place(Position::TopLeft, Mark::O)?;
//! assert_eq!(game.to_move(), Mark::X);
//! # Ok::<(), gridmark::PlaceError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod position;
pub mod policy;
pub mod rules;
mod session;
mod types;

pub use game::{Game, PlaceError};
pub use position::Position;
pub use session::{GameMode, Session};
pub use types::{Board, GameStatus, Mark, Square};
