//! Game lifecycle across resets.

use crate::game::{Game, PlaceError};
use crate::position::Position;
use crate::types::Mark;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Game mode - who plays O?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Two humans sharing the input.
    HumanVsHuman,
    /// Human (X) against the heuristic opponent (O).
    #[default]
    HumanVsAi,
}

impl GameMode {
    /// Returns display name.
    pub fn name(&self) -> &str {
        match self {
            GameMode::HumanVsHuman => "Player vs Player",
            GameMode::HumanVsAi => "Player vs AI",
        }
    }
}

/// Owns the current [`Game`] and its lifecycle across resets.
///
/// The starting mark alternates with every reset. The generation counter
/// increments with it, so a scheduled opponent move carrying an old
/// generation can be recognized as stale and dropped.
#[derive(Debug, Clone)]
pub struct Session {
    game: Game,
    mode: GameMode,
    starter: Mark,
    generation: u64,
}

impl Session {
    /// Human seat in [`GameMode::HumanVsAi`].
    pub const HUMAN_MARK: Mark = Mark::X;
    /// Opponent seat in [`GameMode::HumanVsAi`].
    pub const AI_MARK: Mark = Mark::O;

    /// Creates a session; the first game starts with X.
    pub fn new(mode: GameMode) -> Self {
        info!(mode = mode.name(), "Starting session");
        Self {
            game: Game::new(Mark::X),
            mode,
            starter: Mark::X,
            generation: 0,
        }
    }

    /// Starts a fresh game with the alternated starting mark.
    ///
    /// Bumps the generation, invalidating any in-flight scheduled
    /// opponent move from the previous game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.starter = self.starter.opponent();
        self.generation += 1;
        self.game.reset(self.starter);
        info!(starter = %self.starter, generation = self.generation, "New game");
    }

    /// Places `mark` at `pos` in the current game.
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), PlaceError> {
        self.game.place(pos, mark)
    }

    /// Returns the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the starting mark of the current game.
    pub fn starter(&self) -> Mark {
        self.starter
    }

    /// Returns the current generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True if the AI holds the turn in the current game.
    pub fn ai_to_move(&self) -> bool {
        self.mode == GameMode::HumanVsAi && self.game.to_move() == Self::AI_MARK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GameStatus;

    #[test]
    fn test_first_game_starts_with_x() {
        let session = Session::new(GameMode::HumanVsHuman);
        assert_eq!(session.starter(), Mark::X);
        assert_eq!(session.game().to_move(), Mark::X);
    }

    #[test]
    fn test_starter_alternates_across_resets() {
        let mut session = Session::new(GameMode::HumanVsHuman);
        session.reset();
        assert_eq!(session.starter(), Mark::O);
        assert_eq!(session.game().to_move(), Mark::O);
        session.reset();
        assert_eq!(session.starter(), Mark::X);
    }

    #[test]
    fn test_reset_bumps_generation() {
        let mut session = Session::new(GameMode::HumanVsAi);
        let stale = session.generation();
        session.reset();
        assert_ne!(session.generation(), stale);
    }

    #[test]
    fn test_reset_clears_game() {
        let mut session = Session::new(GameMode::HumanVsHuman);
        session.place(Position::Center, Mark::X).unwrap();
        session.reset();
        assert_eq!(session.game().move_count(), 0);
        assert_eq!(session.game().status(), GameStatus::InProgress);
    }

    #[test]
    fn test_ai_to_move() {
        let mut session = Session::new(GameMode::HumanVsAi);
        assert!(!session.ai_to_move());
        session.place(Position::Center, Mark::X).unwrap();
        assert!(session.ai_to_move());
        // After a reset the alternation gives O the start: the AI opens.
        session.reset();
        assert!(session.ai_to_move());
    }

    #[test]
    fn test_pvp_mode_never_reports_ai_turn() {
        let mut session = Session::new(GameMode::HumanVsHuman);
        session.place(Position::Center, Mark::X).unwrap();
        assert!(!session.ai_to_move());
    }
}
