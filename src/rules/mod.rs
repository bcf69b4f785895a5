//! Terminal-condition queries for a board.
//!
//! This module contains pure functions for classifying a board
//! according to the game rules. Rules are separated from board
//! storage so the search engine and the session layer share one
//! source of truth.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::winner;

use crate::types::{Board, Outcome};

/// Classifies a board as won, tied, or still in progress.
///
/// Exactly one classification holds for any board reachable
/// through legal play.
pub fn outcome(board: &Board) -> Outcome {
    if let Some(side) = winner(board) {
        Outcome::Win(side)
    } else if is_full(board) {
        Outcome::Tie
    } else {
        Outcome::InProgress
    }
}
