//! Exhaustive minimax move selection.
//!
//! The full game tree from any 3x3 position holds at most 9! leaf
//! paths, so an unpruned full-depth search completes well within
//! interactive latency. The engine is a plain synchronous function
//! with no shared state; if a host wants the call off its interactive
//! thread, that scheduling is the host's concern.

use crate::rules;
use crate::types::{Board, Outcome, Side};
use tracing::{debug, instrument};

/// Terminal score magnitude. Anything above the deepest possible ply
/// (9) works; depth is subtracted so faster wins outscore slower ones
/// and slower losses outscore faster ones.
const WIN_SCORE: i32 = 10;

/// Picks the optimal move for `side` on a non-terminal board.
///
/// Evaluates every legal move by full-depth minimax with `side` as the
/// maximizer and returns the index with the greatest value. When
/// several moves share the maximal value, the lowest index wins; the
/// tie-break is a deterministic contract, not an accident, since
/// callers and tests rely on a single expected answer per position.
///
/// The input board is left untouched; the search explores a private
/// copy.
///
/// # Panics
///
/// Panics if the board is already terminal. Callers must check
/// [`rules::outcome`] before asking for a move.
#[instrument(skip(board))]
pub fn best_move(board: &Board, side: Side) -> usize {
    assert_eq!(
        rules::outcome(board),
        Outcome::InProgress,
        "best_move called on a terminal board"
    );

    let mut scratch = board.clone();
    let mut best: Option<(usize, i32)> = None;

    for index in board.legal_moves() {
        scratch.apply(index, side);
        let score = minimax(&mut scratch, 1, side, side.opponent());
        scratch.revert(index);

        debug!(index, score, "evaluated candidate move");
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }

    // The board is non-terminal, so at least one move was evaluated.
    let (index, score) = best.expect("non-terminal board has a legal move");
    debug!(index, score, side = %side, "selected move");
    index
}

/// Recursive minimax value of `board` with `to_move` next, `depth`
/// plies below the root call.
fn minimax(board: &mut Board, depth: i32, maximizer: Side, to_move: Side) -> i32 {
    match rules::outcome(board) {
        Outcome::Win(side) if side == maximizer => WIN_SCORE - depth,
        Outcome::Win(_) => depth - WIN_SCORE,
        Outcome::Tie => 0,
        Outcome::InProgress => {
            let maximizing = to_move == maximizer;
            let mut best = if maximizing { i32::MIN } else { i32::MAX };
            for index in board.legal_moves() {
                board.apply(index, to_move);
                let score = minimax(board, depth + 1, maximizer, to_move.opponent());
                board.revert(index);
                best = if maximizing {
                    best.max(score)
                } else {
                    best.min(score)
                };
            }
            best
        }
    }
}
