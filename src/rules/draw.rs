//! Draw detection logic.

use crate::types::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (all cells taken).
///
/// A full board with no winner is a tie.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|&c| c != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::win::winner;
    use super::*;
    use crate::types::Side;

    fn is_tie(board: &Board) -> bool {
        is_full(board) && winner(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.apply(4, Side::A);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_tie_detection() {
        let mut board = Board::new();
        // A B A / B A A / B A B - full, no line held by either side.
        for (index, side) in [
            (0, Side::A),
            (1, Side::B),
            (2, Side::A),
            (3, Side::B),
            (4, Side::A),
            (5, Side::A),
            (6, Side::B),
            (7, Side::A),
            (8, Side::B),
        ] {
            board.apply(index, side);
        }
        assert!(is_tie(&board));
    }

    #[test]
    fn test_not_tie_if_winner() {
        let mut board = Board::new();
        board.apply(0, Side::A);
        board.apply(1, Side::A);
        board.apply(2, Side::A);
        board.apply(3, Side::B);
        board.apply(4, Side::B);

        assert!(!is_tie(&board));
    }
}
