//! Turn sequencing and game modes.
//!
//! The core stays pure; this layer owns a board per game, validates
//! committed moves from outside input, and in human-vs-computer mode
//! answers each human move with the engine's reply. Mode and starting
//! side are explicit configuration rather than ad-hoc global flags.

use crate::engine;
use crate::rules;
use crate::types::{Board, Outcome, Side};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// The side the computer plays in [`Mode::Pvai`].
pub const COMPUTER_SIDE: Side = Side::B;

/// How a session is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    /// Two humans alternating at the same board.
    Pvp,
    /// Human as [`Side::A`] against the engine as [`Side::B`].
    Pvai,
}

/// Session configuration supplied by the hosting application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Game mode.
    pub mode: Mode,
    /// Side that opens the first game.
    pub starting_side: Side,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Pvp,
            starting_side: Side::A,
        }
    }
}

/// Errors for committed moves fed in from outside.
///
/// These are the recoverable counterpart to the core's fail-fast
/// preconditions: external input gets validated here, and only
/// validated moves reach [`Board::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The game has already ended.
    #[display("game is already over")]
    GameOver,
    /// Index outside 0-8.
    #[display("index {index} is out of bounds (must be 0-8)")]
    OutOfBounds {
        /// The rejected index.
        index: usize,
    },
    /// Target cell already holds a mark.
    #[display("cell {index} is already occupied")]
    Occupied {
        /// The rejected index.
        index: usize,
    },
}

/// A single game: a board plus the side to move.
///
/// The outcome is derived from the board on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Side,
}

impl Game {
    /// Creates a new game with `starting_side` to move on an empty board.
    pub fn new(starting_side: Side) -> Self {
        Self {
            board: Board::new(),
            to_move: starting_side,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move. Meaningless once the game is over.
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Classifies the current board.
    pub fn outcome(&self) -> Outcome {
        rules::outcome(&self.board)
    }

    /// Commits a move for the side to move at the given index.
    ///
    /// On success the turn passes to the opponent.
    #[instrument(skip(self), fields(side = %self.to_move))]
    pub fn make_move(&mut self, index: usize) -> Result<(), MoveError> {
        if self.outcome() != Outcome::InProgress {
            return Err(MoveError::GameOver);
        }
        if index >= 9 {
            return Err(MoveError::OutOfBounds { index });
        }
        if !self.board.is_legal(index) {
            return Err(MoveError::Occupied { index });
        }

        let side = self.to_move;
        self.board.apply(index, side);
        self.to_move = side.opponent();

        debug!(index, outcome = ?self.outcome(), "move committed");
        Ok(())
    }
}

/// A sequence of games under one configuration.
///
/// In [`Mode::Pvai`] the starting side alternates between consecutive
/// games, and whenever the computer opens a game its move is applied
/// before control returns.
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    next_start: Side,
    game: Game,
}

impl Session {
    /// Creates a session and starts its first game.
    #[instrument]
    pub fn new(config: SessionConfig) -> Self {
        let mut session = Self {
            config,
            next_start: config.starting_side,
            game: Game::new(config.starting_side),
        };
        session.new_game();
        session
    }

    /// Returns the session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Discards the current game and starts a fresh one.
    ///
    /// In [`Mode::Pvai`] the opening side flips for the next game; if
    /// the computer opens this one, its move is played immediately.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        let start = self.next_start;
        self.game = Game::new(start);
        info!(mode = %self.config.mode, starting_side = %start, "starting new game");

        if self.config.mode == Mode::Pvai {
            self.next_start = start.opponent();
            if start == COMPUTER_SIDE {
                self.computer_move();
            }
        }
    }

    /// Commits a human move, then the computer's reply where due.
    ///
    /// In [`Mode::Pvp`] this is a plain validated move. In
    /// [`Mode::Pvai`] a successful human move that leaves the game in
    /// progress is answered by the engine before returning.
    #[instrument(skip(self))]
    pub fn play(&mut self, index: usize) -> Result<(), MoveError> {
        self.game.make_move(index)?;

        if self.config.mode == Mode::Pvai
            && self.game.outcome() == Outcome::InProgress
            && self.game.to_move() == COMPUTER_SIDE
        {
            self.computer_move();
        }

        Ok(())
    }

    fn computer_move(&mut self) {
        let index = engine::best_move(self.game.board(), self.game.to_move());
        debug!(index, "computer reply");
        self.game
            .make_move(index)
            .expect("engine returned a legal move");
    }
}
