//! Adapter-owned game state.
//!
//! A [`GameSession`] bundles what every front end tracks between moves:
//! the board, whose turn it is, the notation history and the finished
//! flag. The engine never holds one of these itself; adapters own the
//! session and drive it through [`GameSession::play`]. The struct is also
//! the exact JSON document the web adapter writes to its save file.

use serde::{Deserialize, Serialize};

use crate::board::{Board, InvalidBoardSize};
use crate::coord::Coord;
use crate::disc::Disc;
use crate::game::{self, TurnOutcome};
use crate::rules;

/// The full state of one game in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    pub board: Board,
    /// Whose turn it is to move.
    pub current: Disc,
    /// Notation of every applied move, in order ("C4", "D3", ...).
    pub move_history: Vec<String>,
    pub game_finished: bool,
}

/// What happened when a legal move was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedMove {
    /// Notation of the move just played.
    pub notation: String,
    /// Number of discs flipped, excluding the placed one.
    pub flips: usize,
    /// Turn resolution after the move; adapters phrase their own pass and
    /// game-over messages from this.
    pub outcome: TurnOutcome,
}

impl GameSession {
    /// Starts a fresh game on a board of the given size, Black to move.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBoardSize`] when `size` is odd or below 2.
    pub fn new(size: usize) -> Result<GameSession, InvalidBoardSize> {
        Ok(GameSession {
            board: Board::new(size)?,
            current: Disc::Black,
            move_history: Vec::new(),
            game_finished: false,
        })
    }

    /// Attempts to play the current colour at `coord`.
    ///
    /// On a legal move the board is mutated, the notation recorded, and
    /// the next actor resolved (handling passes and game end).
    ///
    /// # Returns
    ///
    /// `Some(PlayedMove)` when the move was legal and applied, `None` when
    /// it was illegal and the session is untouched.
    pub fn play(&mut self, coord: Coord) -> Option<PlayedMove> {
        if !rules::is_legal_move(self.current, coord, &self.board) {
            return None;
        }
        let flips = rules::apply_move(self.current, coord, &mut self.board);
        let notation = coord.to_string();
        self.move_history.push(notation.clone());

        let outcome = game::resolve_turn(self.current, &self.board);
        match outcome {
            TurnOutcome::Next(next) => self.current = next,
            TurnOutcome::Pass { next, .. } => self.current = next,
            TurnOutcome::Finished(_) => {
                self.current = self.current.opposite();
                self.game_finished = true;
            }
        }

        Some(PlayedMove {
            notation,
            flips,
            outcome,
        })
    }

    /// Recomputes the finished flag from the board alone.
    ///
    /// Loaded positions carry no trustworthy history, so the flag must be
    /// derived from scratch rather than believed.
    pub fn refresh_finished(&mut self) {
        self.game_finished = game::is_game_over(&self.board);
    }
}
