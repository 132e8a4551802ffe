//! Derived state handed to the front end.

use super::{GameState, GameStatus, Position, Square};
use serde::Serialize;

/// Display value of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellView {
    /// Where the cell sits on the grid.
    pub position: Position,
    /// Occupant of the cell.
    pub square: Square,
    /// `""`, `"X"` or `"O"`.
    pub value: &'static str,
}

/// Everything a renderer needs to draw one frame of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// Cells in board order.
    pub cells: [CellView; 9],
    /// Status the line below was rendered from.
    pub game_status: GameStatus,
    /// Status line, e.g. `"Next player: X"`.
    pub status: String,
    /// Whether the play-again control does anything.
    pub reset_enabled: bool,
}

impl From<&GameState> for GameView {
    fn from(state: &GameState) -> Self {
        let status = state.status();
        Self {
            cells: Position::ALL.map(|position| {
                let square = state.board().get(position);
                CellView {
                    position,
                    square,
                    value: square.label(),
                }
            }),
            game_status: status,
            status: status.to_string(),
            reset_enabled: status.is_terminal(),
        }
    }
}

impl GameView {
    /// Occupant of the cell at `pos`.
    pub fn square(&self, pos: Position) -> Square {
        self.cells[pos.to_index()].square
    }

    /// Display value of the cell at `pos`.
    pub fn value(&self, pos: Position) -> &'static str {
        self.cells[pos.to_index()].value
    }
}
