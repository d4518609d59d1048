//! Turn resolution and game termination.
//!
//! Standard Othello pass rules as a small state machine: after a move the
//! opponent plays next unless they have no legal move, in which case the
//! mover goes again, and the game ends when neither side can move.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::disc::Disc;
use crate::rules;

/// Final score of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub black: usize,
    pub white: usize,
}

impl GameResult {
    /// Reads the final counts off a board.
    pub fn from_board(board: &Board) -> GameResult {
        let (black, white) = board.count_pieces();
        GameResult { black, white }
    }

    /// Returns the winning colour, or `None` for a draw.
    ///
    /// Whichever colour holds strictly more discs wins.
    pub fn winner(&self) -> Option<Disc> {
        match self.black.cmp(&self.white) {
            std::cmp::Ordering::Greater => Some(Disc::Black),
            std::cmp::Ordering::Less => Some(Disc::White),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Short result phrase, e.g. "Black wins!".
    pub fn verdict(&self) -> &'static str {
        match self.winner() {
            Some(Disc::Black) => "Black wins!",
            Some(Disc::White) => "White wins!",
            _ => "It's a draw!",
        }
    }
}

impl fmt::Display for GameResult {
    /// Formats the end-of-game summary shown to players.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Game Over! Final Score — Black: {}, White: {}. {}",
            self.black,
            self.white,
            self.verdict()
        )
    }
}

/// Who acts next after a move, or the final result if nobody can.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Normal alternation: the opponent moves next.
    Next(Disc),
    /// The opponent has no legal move and is skipped; callers must surface
    /// the pass notice to the players.
    Pass { skipped: Disc, next: Disc },
    /// Neither side can move.
    Finished(GameResult),
}

/// Decides who acts after `current` has just moved on `board`.
///
/// The lookahead order is fixed: the opponent is checked first, then the
/// mover as the pass fallback, and only then is the game declared over.
pub fn resolve_turn(current: Disc, board: &Board) -> TurnOutcome {
    let opponent = current.opposite();
    if rules::has_any_legal_move(opponent, board) {
        TurnOutcome::Next(opponent)
    } else if rules::has_any_legal_move(current, board) {
        TurnOutcome::Pass {
            skipped: opponent,
            next: current,
        }
    } else {
        TurnOutcome::Finished(GameResult::from_board(board))
    }
}

/// Checks whether the game is over on `board`.
///
/// True exactly when neither colour has a legal move. Always recomputed
/// from the position itself, so it holds for loaded or hand-built boards
/// with no move history behind them. A board with no empty cell is always
/// terminal.
pub fn is_game_over(board: &Board) -> bool {
    !rules::has_any_legal_move(Disc::Black, board) && !rules::has_any_legal_move(Disc::White, board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_alternates() {
        let mut board = Board::new(8).unwrap();
        rules::apply_move(Disc::Black, crate::coord::Coord::new(3, 4), &mut board);
        assert_eq!(resolve_turn(Disc::Black, &board), TurnOutcome::Next(Disc::White));
    }

    #[test]
    fn test_pass_when_opponent_is_stuck() {
        // White's only discs are gone; Black can still extend the row,
        // White has nothing to flip.
        let board = Board::from_diagram(
            "XO------\n\
             --------\n\
             --------\n\
             --------\n\
             --------\n\
             --------\n\
             --------\n\
             -------X",
        )
        .unwrap();
        assert!(rules::has_any_legal_move(Disc::Black, &board));
        assert!(!rules::has_any_legal_move(Disc::White, &board));
        assert_eq!(
            resolve_turn(Disc::Black, &board),
            TurnOutcome::Pass {
                skipped: Disc::White,
                next: Disc::Black
            }
        );
    }

    #[test]
    fn test_finished_when_neither_side_can_move() {
        let board = Board::from_diagram("XX\nXX").unwrap();
        assert_eq!(
            resolve_turn(Disc::White, &board),
            TurnOutcome::Finished(GameResult { black: 4, white: 0 })
        );
    }

    #[test]
    fn test_is_game_over_initial_position() {
        let board = Board::new(8).unwrap();
        assert!(!is_game_over(&board));
    }

    #[test]
    fn test_is_game_over_full_board() {
        let mut board = Board::new(4).unwrap();
        for x in 0..4 {
            for y in 0..4 {
                board.set(x, y, Disc::White);
            }
        }
        assert!(board.is_full());
        assert!(is_game_over(&board));
    }

    #[test]
    fn test_is_game_over_fastest_game_position() {
        // The position after the fastest possible game, all discs black.
        let board = Board::from_diagram(
            "--------\n\
             --------\n\
             ----X---\n\
             ---XXX--\n\
             --XXXXX-\n\
             ---XXX--\n\
             ----X---\n\
             --------",
        )
        .unwrap();
        assert!(is_game_over(&board));
    }

    #[test]
    fn test_is_game_over_is_stable() {
        let board = Board::from_diagram("OO\nOO").unwrap();
        assert!(is_game_over(&board));
        // No mutation in between, so the answer must not change.
        assert!(is_game_over(&board));
        assert!(is_game_over(&board));
    }

    #[test]
    fn test_winner_and_summary() {
        let result = GameResult { black: 13, white: 0 };
        assert_eq!(result.winner(), Some(Disc::Black));
        assert_eq!(
            result.to_string(),
            "Game Over! Final Score — Black: 13, White: 0. Black wins!"
        );

        let draw = GameResult { black: 32, white: 32 };
        assert_eq!(draw.winner(), None);
        assert!(draw.to_string().ends_with("It's a draw!"));

        let white = GameResult { black: 20, white: 44 };
        assert_eq!(white.winner(), Some(Disc::White));
    }
}
