//! Othello board representation.
//!
//! A [`Board`] is an N by N grid of [`Disc`] values and nothing more; move
//! legality and mutation rules live in [`crate::rules`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coord::column_letter;
use crate::disc::Disc;

/// Board edge length used when no size is configured.
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// The error type for constructing a board with an unusable edge length.
///
/// Othello needs an even size of at least 2 so the four-disc opening fits
/// in the exact center. Anything else is a configuration error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidBoardSize(pub usize);

impl std::error::Error for InvalidBoardSize {}

impl fmt::Display for InvalidBoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Board size must be an even number of at least 2, got {}",
            self.0
        )
    }
}

/// An N by N Othello board.
///
/// Cells are stored in row-major order and addressed with 0-based
/// `(x, y)` indices, `x` being the column. The grid never changes size
/// after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Disc>,
}

impl Default for Board {
    /// Creates a standard 8x8 board with the four-disc opening.
    fn default() -> Self {
        Board::new(DEFAULT_BOARD_SIZE).expect("default board size is valid")
    }
}

impl Board {
    /// Creates a board of the given size with the standard opening layout.
    ///
    /// White sits on the two center cells of the main diagonal, Black on
    /// the two center cells of the anti-diagonal, so an 8x8 board opens
    /// with White on D4/E5 and Black on E4/D5.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBoardSize`] when `size` is odd or below 2.
    pub fn new(size: usize) -> Result<Board, InvalidBoardSize> {
        if size < 2 || size % 2 != 0 {
            return Err(InvalidBoardSize(size));
        }
        let mut board = Board {
            size,
            cells: vec![Disc::Empty; size * size],
        };
        let (lo, hi) = (size / 2 - 1, size / 2);
        board.set(lo, lo, Disc::White);
        board.set(hi, hi, Disc::White);
        board.set(hi, lo, Disc::Black);
        board.set(lo, hi, Disc::Black);
        Ok(board)
    }

    /// Creates a board from a text diagram, one line per row.
    ///
    /// 'X' marks a black disc and 'O' a white one; every other character
    /// in a row reads as an empty cell, matching the render format. Spaces
    /// between cells are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBoardSize`] when the diagram is not square with an
    /// even edge length of at least 2.
    pub fn from_diagram(diagram: &str) -> Result<Board, InvalidBoardSize> {
        let rows: Vec<Vec<char>> = diagram
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect())
            .filter(|row: &Vec<char>| !row.is_empty())
            .collect();
        let size = rows.len();
        if size < 2 || size % 2 != 0 || rows.iter().any(|row| row.len() != size) {
            return Err(InvalidBoardSize(size));
        }
        let mut board = Board {
            size,
            cells: vec![Disc::Empty; size * size],
        };
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.iter().enumerate() {
                let disc = match c {
                    'X' => Disc::Black,
                    'O' => Disc::White,
                    _ => Disc::Empty,
                };
                board.set(x, y, disc);
            }
        }
        Ok(board)
    }

    /// Returns the edge length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the disc at 0-based `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics when either index is outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Disc {
        assert!(x < self.size && y < self.size, "cell ({x}, {y}) out of bounds");
        self.cells[y * self.size + x]
    }

    /// Places `disc` at 0-based `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics when either index is outside the grid.
    pub fn set(&mut self, x: usize, y: usize, disc: Disc) {
        assert!(x < self.size && y < self.size, "cell ({x}, {y}) out of bounds");
        self.cells[y * self.size + x] = disc;
    }

    /// Counts the discs of both colours.
    ///
    /// # Returns
    ///
    /// A `(black, white)` tuple; empty cells are not counted.
    pub fn count_pieces(&self) -> (usize, usize) {
        let mut black = 0;
        let mut white = 0;
        for cell in &self.cells {
            match cell {
                Disc::Black => black += 1,
                Disc::White => white += 1,
                Disc::Empty => {}
            }
        }
        (black, white)
    }

    /// Returns `true` when no empty cell remains.
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Disc::Empty)
    }
}

impl fmt::Display for Board {
    /// Renders the advisory text grid used by the CLI.
    ///
    /// Each row is prefixed with its 1-based number, cells are separated
    /// by single spaces, and a separator line divides the grid from the
    /// bottom row of column letters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            write!(f, "{:>2} ", y + 1)?;
            for x in 0..self.size {
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.get(x, y).to_char())?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   {}", "-".repeat(self.size * 2 - 1))?;
        write!(f, "   ")?;
        for x in 0..self.size {
            if x > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", column_letter(x))?;
        }
        Ok(())
    }
}
