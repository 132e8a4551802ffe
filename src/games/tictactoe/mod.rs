mod action;
mod controller;
mod position;
mod rules;
mod types;
mod view;

pub use action::ActionError;
pub use controller::{Game, GameEvent};
pub use position::Position;
pub use rules::{LINES, derive_status, detect_winner};
pub use types::{Board, GameState, GameStatus, Player, Square};
pub use view::{CellView, GameView};
