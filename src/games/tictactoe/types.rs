//! Core domain types for tic-tac-toe.

use super::action::ActionError;
use super::position::Position;
use super::rules::{derive_status, detect_winner};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Player in the game.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Display value of the square: `""`, `"X"` or `"O"`.
    pub fn label(self) -> &'static str {
        match self {
            Square::Empty => "",
            Square::Occupied(Player::X) => "X",
            Square::Occupied(Player::O) => "O",
        }
    }

    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from explicit squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let rows: Vec<String> = self
            .squares
            .chunks(3)
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(col, square)| match square {
                        Square::Empty => (row * 3 + col + 1).to_string(),
                        occupied => occupied.label().to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect();
        rows.join("\n-+-+-\n")
    }

    fn place(&mut self, pos: Position, player: Player) {
        self.squares[pos.to_index()] = Square::Occupied(player);
    }
}

/// Derived status of the game.
///
/// Never stored: [`GameState::status`] recomputes it on every call.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// A player completed a line.
    #[display("Winner: {_0}")]
    Winner(Player),
    /// All nine squares filled with no line.
    #[display("Tie")]
    Tie,
    /// Game in progress, naming the player to move.
    #[display("Next player: {_0}")]
    Next(Player),
}

impl GameStatus {
    /// True for `Winner` and `Tie`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Next(_))
    }
}

/// Complete game state: board, turn and move count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    to_move: Player,
    move_count: u8,
}

impl GameState {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            move_count: 0,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Number of accepted moves since the last reset.
    pub fn move_count(&self) -> u8 {
        self.move_count
    }

    /// Returns the winner, if a line is complete.
    pub fn winner(&self) -> Option<Player> {
        detect_winner(&self.board)
    }

    /// Current status, derived from board, turn and move count.
    pub fn status(&self) -> GameStatus {
        derive_status(&self.board, self.to_move, self.move_count)
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Returns the player who moved. The state is left untouched when the
    /// square is occupied or a winner already exists.
    #[instrument(skip(self), fields(player = %self.to_move, move_count = self.move_count))]
    pub fn apply_move(&mut self, pos: Position) -> Result<Player, ActionError> {
        if !self.board.is_empty(pos) {
            debug!(%pos, "Rejected move on occupied square");
            return Err(ActionError::SquareOccupied(pos));
        }
        if self.winner().is_some() {
            debug!(%pos, "Rejected move after game was won");
            return Err(ActionError::GameOver);
        }

        let player = self.to_move;
        self.board.place(pos, player);
        self.to_move = player.opponent();
        self.move_count += 1;
        debug_assert_eq!(usize::from(self.move_count), self.board.occupied_count());

        info!(%pos, %player, status = %self.status(), "Move applied");
        Ok(player)
    }

    /// Clears the board once the game has ended.
    ///
    /// A no-op returning [`ActionError::GameInProgress`] while the game is
    /// still being played.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Result<(), ActionError> {
        let status = self.status();
        if !status.is_terminal() {
            debug!(%status, "Ignoring reset while game is in progress");
            return Err(ActionError::GameInProgress);
        }

        *self = Self::new();
        info!(previous = %status, "Game reset");
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
