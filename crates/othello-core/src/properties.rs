//! Randomized-playout properties of the rules engine.
//!
//! Each test drives a game with moves chosen by quickcheck-supplied pick
//! indices and asserts an invariant that must hold at every step.

use quickcheck::quickcheck;

use crate::board::Board;
use crate::coord::Coord;
use crate::disc::Disc;
use crate::game;
use crate::rules;
use crate::session::GameSession;

/// All legal coordinates for `colour`, in scan order.
fn legal_moves(colour: Disc, board: &Board) -> Vec<Coord> {
    let mut moves = Vec::new();
    for row in 1..=board.size() {
        for col in 1..=board.size() {
            let coord = Coord::new(col, row);
            if rules::is_legal_move(colour, coord, board) {
                moves.push(coord);
            }
        }
    }
    moves
}

/// Number of cells whose disc differs between two boards.
fn changed_cells(before: &Board, after: &Board) -> usize {
    let mut changed = 0;
    for y in 0..before.size() {
        for x in 0..before.size() {
            if before.get(x, y) != after.get(x, y) {
                changed += 1;
            }
        }
    }
    changed
}

quickcheck! {
    /// Every applied move places exactly one disc and recolours exactly
    /// `flips` others.
    fn prop_conservation(picks: Vec<usize>) -> bool {
        let mut session = GameSession::new(8).unwrap();
        for pick in picks {
            if session.game_finished {
                break;
            }
            let moves = legal_moves(session.current, &session.board);
            if moves.is_empty() {
                return false;
            }
            let coord = moves[pick % moves.len()];
            let before = session.board.clone();
            let (black, white) = before.count_pieces();
            let played = match session.play(coord) {
                Some(played) => played,
                None => return false,
            };
            let (black2, white2) = session.board.count_pieces();
            if black2 + white2 != black + white + 1 {
                return false;
            }
            // The placed cell went from empty to a colour; every other
            // changed cell is a flip.
            if changed_cells(&before, &session.board) != played.flips + 1 {
                return false;
            }
        }
        true
    }

    /// A move is legal exactly when applying it would flip at least one
    /// disc, at every position a game can reach.
    fn prop_legality_iff_flips(picks: Vec<usize>) -> bool {
        let mut session = GameSession::new(8).unwrap();
        for pick in picks {
            if session.game_finished {
                break;
            }
            for row in 1..=8usize {
                for col in 1..=8usize {
                    let coord = Coord::new(col, row);
                    let legal = rules::is_legal_move(session.current, coord, &session.board);
                    let mut scratch = session.board.clone();
                    let flips = rules::apply_move(session.current, coord, &mut scratch);
                    if legal != (flips >= 1) {
                        return false;
                    }
                    if !legal && scratch != session.board {
                        return false;
                    }
                }
            }
            let moves = legal_moves(session.current, &session.board);
            if session.play(moves[pick % moves.len()]).is_none() {
                return false;
            }
        }
        true
    }

    /// Read-only checks never mutate the board.
    fn prop_checks_are_read_only(picks: Vec<usize>) -> bool {
        let mut session = GameSession::new(8).unwrap();
        for pick in picks {
            if session.game_finished {
                break;
            }
            let snapshot = session.board.clone();
            let _ = rules::has_any_legal_move(Disc::Black, &session.board);
            let _ = rules::has_any_legal_move(Disc::White, &session.board);
            let _ = game::is_game_over(&session.board);
            if session.board != snapshot {
                return false;
            }
            let moves = legal_moves(session.current, &session.board);
            if session.play(moves[pick % moves.len()]).is_none() {
                return false;
            }
        }
        true
    }

    /// Once a playout finishes, the terminal verdict is stable.
    fn prop_termination_is_monotone(picks: Vec<usize>) -> bool {
        let mut session = GameSession::new(4).unwrap();
        for pick in picks {
            if session.game_finished {
                break;
            }
            let moves = legal_moves(session.current, &session.board);
            if session.play(moves[pick % moves.len()]).is_none() {
                return false;
            }
        }
        if session.game_finished {
            // The board sees no further mutation, so the answer may not
            // flap between calls.
            (0..3).all(|_| game::is_game_over(&session.board))
        } else {
            !game::is_game_over(&session.board)
        }
    }
}
