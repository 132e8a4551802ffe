//! Tic-tac-toe with an explicit game-state core.
//!
//! The game itself is a small state machine: a [`GameState`] accepts
//! moves and resets, and derives its [`GameStatus`] from the board on
//! every call. A [`Game`] wraps the state for a front end, exposing
//! cell clicks, a play-again control, [`GameView`] snapshots and a
//! [`GameEvent`] subscription.
//!
//! The terminal front end ([`run_tui`]) animates the screen on entry;
//! that timing lives in [`AnimationConfig`] and never touches the game.
//!
//! # Example
//!
//! ```
//! use tictactoe::{Game, GameStatus, Player, Position};
//!
//! let mut game = Game::new();
//! for i in [0, 3, 1, 4, 2] {
//!     let pos = Position::from_index(i).expect("index in range");
//!     game.click(pos).expect("legal move");
//! }
//! assert_eq!(game.status(), GameStatus::Winner(Player::X));
//! assert_eq!(game.view().status, "Winner: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod animation_config;
mod games;
mod tui;

// Crate-level exports - Animation configuration
pub use animation_config::{AnimationConfig, ConfigError, Element, Entrance};

// Crate-level exports - Terminal front end
pub use tui::{App, run_tui};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    ActionError, Board, CellView, Game, GameEvent, GameState, GameStatus, GameView, LINES,
    Player, Position, Square, derive_status, detect_winner,
};
