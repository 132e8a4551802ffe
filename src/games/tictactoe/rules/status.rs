//! Status derivation.

use super::super::{Board, GameStatus, Player};
use super::win::detect_winner;

/// Number of squares; a game with this many moves and no line is a tie.
pub const FULL_BOARD: u8 = 9;

/// Derives the status from board, turn and move count.
///
/// A completed line wins even on the ninth move; the move count alone
/// decides a full board without rescanning the squares.
pub fn derive_status(board: &Board, to_move: Player, move_count: u8) -> GameStatus {
    if let Some(winner) = detect_winner(board) {
        GameStatus::Winner(winner)
    } else if move_count >= FULL_BOARD {
        GameStatus::Tie
    } else {
        GameStatus::Next(to_move)
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::Square;
    use super::*;

    const X: Square = Square::Occupied(Player::X);
    const O: Square = Square::Occupied(Player::O);

    #[test]
    fn test_empty_board_is_next() {
        assert_eq!(derive_status(&Board::new(), Player::X, 0), GameStatus::Next(Player::X));
    }

    #[test]
    fn test_full_board_without_line_is_tie() {
        let board = Board::from_squares([X, O, X, X, O, O, O, X, X]);
        assert_eq!(derive_status(&board, Player::O, 9), GameStatus::Tie);
    }

    #[test]
    fn test_win_on_last_square_beats_tie() {
        let board = Board::from_squares([X, O, X, O, X, O, O, X, X]);
        assert_eq!(derive_status(&board, Player::O, 9), GameStatus::Winner(Player::X));
    }
}
