//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board. They hold no state, so the game state
//! can recompute its status on every call.

pub mod status;
pub mod win;

pub use status::derive_status;
pub use win::{LINES, detect_winner};
