//! Core domain types for the board model.

use serde::{Deserialize, Serialize};

/// A side in the game.
///
/// Sides are abstract marks; how they render (X/O, colors) is the
/// hosting application's business.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Side {
    /// The side that moves first by default.
    A,
    /// The opposing side.
    B,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell taken by a side.
    Taken(Side),
}

/// 3x3 board.
///
/// Cells are indexed 0-8 in row-major order: 0,1,2 across the top,
/// 3,4,5 across the middle, 6,7,8 across the bottom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given index (0-8).
    pub(crate) fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks whether a move at the given index would be legal:
    /// in range and targeting an empty cell.
    pub fn is_legal(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Places a mark for `side` at the given index.
    ///
    /// # Panics
    ///
    /// Panics if the move is not legal. Callers must check [`Board::is_legal`]
    /// first; violating that is a programming error, not a recoverable one.
    pub fn apply(&mut self, index: usize, side: Side) {
        assert!(self.is_legal(index), "illegal move at index {index}");
        self.cells[index] = Cell::Taken(side);
    }

    /// Clears the cell at the given index.
    ///
    /// Only used to undo a hypothetical move during search; committed
    /// moves are never taken back.
    pub fn revert(&mut self, index: usize) {
        self.cells[index] = Cell::Empty;
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Indices of all empty cells, in ascending order.
    pub fn legal_moves(&self) -> Vec<usize> {
        (0..9).filter(|&index| self.is_legal(index)).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Current outcome of a board.
///
/// Always derived from the cells on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// A side has three in a row.
    Win(Side),
    /// Board is full with no winner.
    Tie,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.cells().iter().all(|&c| c == Cell::Empty));
        assert_eq!(board.legal_moves().len(), 9);
    }

    #[test]
    fn test_is_legal_rejects_occupied_and_out_of_range() {
        let mut board = Board::new();
        board.apply(4, Side::A);
        assert!(!board.is_legal(4));
        assert!(!board.is_legal(9));
        assert!(!board.is_legal(usize::MAX));
        assert!(board.is_legal(0));
    }

    #[test]
    fn test_apply_then_revert_restores_board() {
        let mut board = Board::new();
        board.apply(0, Side::A);
        board.apply(4, Side::B);
        let before = board.clone();

        board.apply(8, Side::A);
        board.revert(8);

        assert_eq!(board, before);
    }

    #[test]
    #[should_panic(expected = "illegal move")]
    fn test_apply_panics_on_occupied_cell() {
        let mut board = Board::new();
        board.apply(4, Side::A);
        board.apply(4, Side::B);
    }

    #[test]
    #[should_panic(expected = "illegal move")]
    fn test_apply_panics_out_of_range() {
        let mut board = Board::new();
        board.apply(9, Side::A);
    }

    #[test]
    fn test_cells_expose_full_state_for_host_rendering() {
        // The crate ships no string rendering; a host draws the grid
        // from `cells()` alone.
        let mut board = Board::new();
        board.apply(0, Side::A);
        board.apply(4, Side::B);

        assert_eq!(board.cells()[0], Cell::Taken(Side::A));
        assert_eq!(board.cells()[4], Cell::Taken(Side::B));
        assert_eq!(
            board.cells().iter().filter(|&&c| c == Cell::Empty).count(),
            7
        );
    }

    #[test]
    fn test_legal_moves_ascending() {
        let mut board = Board::new();
        board.apply(1, Side::A);
        board.apply(5, Side::B);
        assert_eq!(board.legal_moves(), vec![0, 2, 3, 4, 6, 7, 8]);
    }
}
