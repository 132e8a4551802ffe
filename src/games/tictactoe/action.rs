//! Reasons a player action left the game unchanged.

use super::Position;

/// Why a click or reset was ignored.
///
/// None of these are shown to the player; the front end drops them after
/// logging. They exist so callers and tests can tell a no-op from a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ActionError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// A player has already completed a line.
    #[display("Game is already over")]
    GameOver,

    /// Reset requested before the game reached a win or tie.
    #[display("Game is still in progress")]
    GameInProgress,
}

impl std::error::Error for ActionError {}
