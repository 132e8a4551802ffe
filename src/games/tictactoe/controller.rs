//! Game controller: owns the state and notifies subscribers.
//!
//! The front end never mutates [`GameState`] directly. It forwards cell
//! clicks and play-again presses here, reads [`GameView`] snapshots, and
//! listens for [`GameEvent`]s to drive anything that reacts to a change.

use super::{ActionError, GameState, GameStatus, GameView, Player, Position};
use std::sync::mpsc::{Receiver, Sender, channel};
use tracing::{debug, info, instrument};

/// Notification published after an accepted transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A mark was placed.
    MovePlayed {
        /// Who moved.
        player: Player,
        /// Where the mark went.
        position: Position,
    },
    /// The move just played ended the game. `None` means a tie.
    GameOver {
        /// Winning player, if any.
        winner: Option<Player>,
    },
    /// The board was cleared for a new game.
    Reset,
}

/// Tic-tac-toe game with change notification.
#[derive(Debug, Default)]
pub struct Game {
    state: GameState,
    subscribers: Vec<Sender<GameEvent>>,
}

impl Game {
    /// Creates a new game.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the derived status.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Snapshot of the cells, status line and reset availability.
    pub fn view(&self) -> GameView {
        GameView::from(&self.state)
    }

    /// Registers a new listener for game events.
    pub fn subscribe(&mut self) -> Receiver<GameEvent> {
        let (tx, rx) = channel();
        self.subscribers.push(tx);
        debug!(subscribers = self.subscribers.len(), "Subscriber added");
        rx
    }

    /// Handles a click on the cell at `position`.
    #[instrument(skip(self))]
    pub fn click(&mut self, position: Position) -> Result<Player, ActionError> {
        let player = self.state.apply_move(position)?;
        self.publish(GameEvent::MovePlayed { player, position });

        let status = self.state.status();
        if status.is_terminal() {
            debug!(%status, board = %self.state.board().display(), "Final board");
        }
        match status {
            GameStatus::Winner(winner) => self.publish(GameEvent::GameOver {
                winner: Some(winner),
            }),
            GameStatus::Tie => self.publish(GameEvent::GameOver { winner: None }),
            GameStatus::Next(_) => {}
        }
        Ok(player)
    }

    /// Handles the play-again control; ignored until the game has ended.
    #[instrument(skip(self))]
    pub fn play_again(&mut self) -> Result<(), ActionError> {
        self.state.reset()?;
        self.publish(GameEvent::Reset);
        Ok(())
    }

    fn publish(&mut self, event: GameEvent) {
        self.subscribers.retain(|tx| tx.send(event).is_ok());
        info!(?event, subscribers = self.subscribers.len(), "Published game event");
    }
}
