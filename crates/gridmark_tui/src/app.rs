//! Application state and logic.

use crossterm::event::KeyCode;
use gridmark::{GameMode, GameStatus, Mark, Session, policy};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, instrument};

/// Pacing delay between a human move and the opponent's reply.
pub const AI_REPLY_DELAY: Duration = Duration::from_millis(500);

/// Events delivered to the UI loop from scheduled tasks.
#[derive(Debug, Clone, Copy)]
pub enum UiEvent {
    /// A scheduled opponent reply is due. Stale if the generation no
    /// longer matches the session's.
    AiMoveDue {
        /// Session generation at scheduling time.
        generation: u64,
    },
}

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Welcome screen with mode selection.
    ModeSelect,
    /// The board.
    InGame,
}

/// Main application state.
pub struct App {
    screen: Screen,
    session: Session,
    status_message: String,
    ai_pending: bool,
    event_tx: mpsc::UnboundedSender<UiEvent>,
}

impl App {
    /// Creates a new application on the mode-selection screen.
    pub fn new(event_tx: mpsc::UnboundedSender<UiEvent>) -> Self {
        Self {
            screen: Screen::ModeSelect,
            session: Session::new(GameMode::default()),
            status_message: String::new(),
            ai_pending: false,
            event_tx,
        }
    }

    /// Current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True while an opponent reply is pending; cell input is ignored.
    pub fn ai_pending(&self) -> bool {
        self.ai_pending
    }

    /// Handles a key press for the current screen.
    pub fn handle_key(&mut self, code: KeyCode) {
        match self.screen {
            Screen::ModeSelect => match code {
                KeyCode::Char('1') => self.start(GameMode::HumanVsHuman),
                KeyCode::Char('2') => self.start(GameMode::HumanVsAi),
                _ => {}
            },
            Screen::InGame => match code {
                KeyCode::Char('r') => self.reset(),
                KeyCode::Char('m') => self.screen = Screen::ModeSelect,
                KeyCode::Char(c @ '1'..='9') => {
                    let index = c as usize - '1' as usize;
                    self.place_at(index);
                }
                _ => {}
            },
        }
    }

    /// Handles an event from a scheduled task.
    #[instrument(skip(self))]
    pub fn handle_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::AiMoveDue { generation } => self.apply_ai_move(generation),
        }
    }

    /// Starts a fresh session in the chosen mode.
    fn start(&mut self, mode: GameMode) {
        self.session = Session::new(mode);
        self.screen = Screen::InGame;
        self.ai_pending = false;
        self.refresh_status();
    }

    /// Starts a new game; the starting mark alternates.
    fn reset(&mut self) {
        self.session.reset();
        self.ai_pending = false;
        self.refresh_status();
        if self.session.ai_to_move() {
            // The alternation gave the opponent the opening move.
            self.schedule_ai_reply();
        }
    }

    /// Places the human's mark at the given cell (0-8).
    fn place_at(&mut self, index: usize) {
        if self.ai_pending {
            debug!(index, "Ignoring input while opponent reply is pending");
            return;
        }
        let Some(pos) = gridmark::Position::from_index(index) else {
            return;
        };
        let mark = match self.session.mode() {
            GameMode::HumanVsHuman => self.session.game().to_move(),
            GameMode::HumanVsAi => Session::HUMAN_MARK,
        };
        match self.session.place(pos, mark) {
            Ok(()) => {
                self.refresh_status();
                if self.session.ai_to_move() {
                    self.schedule_ai_reply();
                }
            }
            Err(e) => {
                self.status_message = format!("Invalid move: {e}. Try again.");
            }
        }
    }

    /// Schedules the opponent's reply after the pacing delay.
    ///
    /// The task carries the session generation; a reset in the meantime
    /// bumps it and the reply arrives stale.
    fn schedule_ai_reply(&mut self) {
        self.ai_pending = true;
        self.status_message = "Opponent is thinking...".to_string();
        let generation = self.session.generation();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(AI_REPLY_DELAY).await;
            let _ = tx.send(UiEvent::AiMoveDue { generation });
        });
    }

    /// Applies the opponent's move if the scheduled reply is still current.
    fn apply_ai_move(&mut self, generation: u64) {
        if generation != self.session.generation() {
            debug!(generation, "Dropping stale opponent reply");
            return;
        }
        self.ai_pending = false;
        if !self.session.ai_to_move() {
            return;
        }
        let chosen = policy::choose_move(self.session.game().board(), Session::AI_MARK, &mut rand::rng());
        if let Some(pos) = chosen {
            // The policy only returns placeable squares.
            if let Err(e) = self.session.place(pos, Session::AI_MARK) {
                tracing::warn!(error = %e, "Opponent move rejected");
            }
        }
        self.refresh_status();
    }

    fn refresh_status(&mut self) {
        self.status_message = match self.session.game().status() {
            GameStatus::InProgress => match (self.session.mode(), self.session.game().to_move()) {
                (GameMode::HumanVsAi, Mark::O) => "Opponent is thinking...".to_string(),
                (_, mark) => format!("{mark}'s turn. Press 1-9 to make a move."),
            },
            GameStatus::Won(mark) => {
                format!("Congratulations, {mark} wins! Press 'r' for a new game.")
            }
            GameStatus::Tied => "It's a tie! Press 'r' for a new game.".to_string(),
        };
    }
}
