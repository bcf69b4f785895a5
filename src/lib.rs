//! Tic-tac-toe core: board model, terminal rules, and an exhaustive
//! minimax engine, plus a small session layer for turn sequencing.
//!
//! # Architecture
//!
//! - **types**: the 3x3 [`Board`] and its [`Side`]/[`Cell`]/[`Outcome`] vocabulary
//! - **rules**: pure terminal-condition queries ([`winner`], [`is_full`], [`outcome`])
//! - **engine**: [`best_move`], a full-depth minimax over the remaining game tree
//! - **session**: validated move entry for a hosting application, with
//!   player-vs-player and player-vs-computer modes
//!
//! Rendering, input collection, and scheduling belong to the hosting
//! application; everything here is synchronous and in-process.
//!
//! # Example
//!
//! ```
//! use noughts::{best_move, outcome, Board, Outcome, Side};
//!
//! let mut board = Board::new();
//! board.apply(4, Side::A);
//! assert_eq!(outcome(&board), Outcome::InProgress);
//!
//! let reply = best_move(&board, Side::B);
//! assert!(board.is_legal(reply));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
pub mod rules;
mod session;
mod types;

// Crate-level exports - search engine
pub use engine::best_move;

// Crate-level exports - terminal rules
pub use rules::{is_full, outcome, winner};

// Crate-level exports - session layer
pub use session::{Game, Mode, MoveError, Session, SessionConfig, COMPUTER_SIDE};

// Crate-level exports - board model
pub use types::{Board, Cell, Outcome, Side};
