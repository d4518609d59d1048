//! Move legality and disc flipping.
//!
//! This module is the single source of truth for what a legal Othello move
//! is. Legality is a predicate, not a fallible operation: every invalid
//! request (out of bounds, occupied cell, no bracketed discs, `Empty` as
//! the acting colour) uniformly reads as "no flips", never as a panic.

use crate::board::Board;
use crate::coord::Coord;
use crate::disc::Disc;

/// The 8 compass directions of a bracketing walk.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Computes the opposing discs flipped by `colour` playing at 0-based `(x, y)`.
///
/// For each direction the walk collects consecutive opposing discs and keeps
/// them only when it ends on a disc of `colour`; running off the board or
/// into an empty cell discards the line.
///
/// # Returns
///
/// The 0-based cells that would change colour. Empty when the move is
/// illegal or the request itself is invalid (target out of bounds or
/// occupied, or `colour` is not Black/White).
pub fn candidate_flips(board: &Board, colour: Disc, x: usize, y: usize) -> Vec<(usize, usize)> {
    let size = board.size();
    if colour == Disc::Empty || x >= size || y >= size || board.get(x, y) != Disc::Empty {
        return Vec::new();
    }

    let other = colour.opposite();
    let mut flips = Vec::new();
    for (dx, dy) in DIRECTIONS {
        let mut cx = x as isize + dx;
        let mut cy = y as isize + dy;
        let mut line = Vec::new();
        while cx >= 0 && cy >= 0 && (cx as usize) < size && (cy as usize) < size {
            let cell = board.get(cx as usize, cy as usize);
            if cell == other {
                line.push((cx as usize, cy as usize));
            } else {
                if cell == colour && !line.is_empty() {
                    flips.append(&mut line);
                }
                break;
            }
            cx += dx;
            cy += dy;
        }
    }
    flips
}

/// Checks whether `colour` may play at the 1-based `coord`.
///
/// Out-of-bounds coordinates are rejected outright; otherwise the move is
/// legal exactly when it would flip at least one disc. No other criterion
/// applies.
pub fn is_legal_move(colour: Disc, coord: Coord, board: &Board) -> bool {
    match coord.to_indices(board.size()) {
        Some((x, y)) => !candidate_flips(board, colour, x, y).is_empty(),
        None => false,
    }
}

/// Applies a move for `colour` at the 1-based `coord`, mutating the board.
///
/// The flip set is recomputed here rather than trusted from an earlier
/// legality check. Callers must still gate on [`is_legal_move`]: when the
/// move turns out illegal the board is left untouched and 0 is returned,
/// which silently wastes a turn if treated as success.
///
/// # Returns
///
/// The number of discs flipped (excluding the placed disc).
pub fn apply_move(colour: Disc, coord: Coord, board: &mut Board) -> usize {
    let Some((x, y)) = coord.to_indices(board.size()) else {
        return 0;
    };
    let flips = candidate_flips(board, colour, x, y);
    if flips.is_empty() {
        return 0;
    }
    board.set(x, y, colour);
    for &(fx, fy) in &flips {
        board.set(fx, fy, colour);
    }
    flips.len()
}

/// Checks whether `colour` has at least one legal move anywhere.
///
/// Scans every cell and stops at the first hit. Cubic in the edge length
/// in the worst case, which is fine for interactive play.
pub fn has_any_legal_move(colour: Disc, board: &Board) -> bool {
    for row in 1..=board.size() {
        for col in 1..=board.size() {
            if is_legal_move(colour, Coord::new(col, row), board) {
                return true;
            }
        }
    }
    false
}
