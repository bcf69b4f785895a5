//! Win detection logic.

use crate::types::{Board, Cell, Side};
use tracing::instrument;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // Rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // Columns
    [0, 4, 8],
    [2, 4, 6], // Diagonals
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(side)` if that side occupies all three cells of any
/// winning line, `None` otherwise. Legal play can never produce a
/// board where both sides hold a line, so the first matching line
/// decides.
#[instrument]
pub fn winner(board: &Board) -> Option<Side> {
    for [a, b, c] in LINES {
        let cell = board.get(a);
        if cell != Some(Cell::Empty) && cell == board.get(b) && cell == board.get(c) {
            return match cell {
                Some(Cell::Taken(side)) => Some(side),
                _ => None,
            };
        }
    }

    None
}
