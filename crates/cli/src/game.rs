//! Game state wrapper for the Othello CLI.
//!
//! Thin layer over the core [`GameSession`] that adds a colored terminal
//! rendering of the board and score.

use colored::Colorize;
use othello_core::board::InvalidBoardSize;
use othello_core::coord::{Coord, column_letter};
use othello_core::disc::Disc;
use othello_core::rules;
use othello_core::session::GameSession;

/// A CLI game: the shared session plus display helpers.
pub struct CliGame {
    session: GameSession,
}

impl CliGame {
    /// Starts a fresh game on a board of the given size.
    pub fn new(size: usize) -> Result<CliGame, InvalidBoardSize> {
        Ok(CliGame {
            session: GameSession::new(size)?,
        })
    }

    /// Returns the underlying session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Returns the underlying session for mutation.
    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    /// The last move played, if any.
    fn last_move(&self) -> Option<Coord> {
        self.session
            .move_history
            .last()
            .and_then(|notation| notation.parse().ok())
    }

    /// Prints a colored board with row numbers, column letters, the legal
    /// moves of the side to move, and a score panel.
    pub fn print(&self) {
        let board = &self.session.board;
        let size = board.size();
        let current = self.session.current;
        let last_move = self.last_move().and_then(|c| c.to_indices(size));
        let (black_count, white_count) = board.count_pieces();

        for y in 0..size {
            print!("{:>2} ", y + 1);
            for x in 0..size {
                let coord = Coord::new(x + 1, y + 1);
                let is_legal =
                    !self.session.game_finished && rules::is_legal_move(current, coord, board);
                let is_last = last_move == Some((x, y));
                let symbol = match board.get(x, y) {
                    Disc::Black if is_last => "X".on_bright_black().bright_green(),
                    Disc::White if is_last => "O".on_bright_black().bright_yellow(),
                    Disc::Black => "X".bright_green(),
                    Disc::White => "O".bright_yellow(),
                    Disc::Empty if is_legal => "·".bright_cyan(),
                    Disc::Empty => "-".dimmed(),
                };
                if x > 0 {
                    print!(" ");
                }
                print!("{symbol}");
            }
            match y {
                0 => println!("   {}", turn_label(current, self.session.game_finished)),
                1 => println!("   Black: {}", black_count.to_string().bright_green()),
                2 => println!("   White: {}", white_count.to_string().bright_yellow()),
                _ => println!(),
            }
        }
        println!("   {}", "-".repeat(size * 2 - 1));
        print!("   ");
        for x in 0..size {
            if x > 0 {
                print!(" ");
            }
            print!("{}", column_letter(x));
        }
        println!();
    }
}

fn turn_label(current: Disc, finished: bool) -> String {
    if finished {
        return "*** Game Over ***".bright_red().to_string();
    }
    match current {
        Disc::Black => "Black's turn (X)".bright_green().to_string(),
        Disc::White => "White's turn (O)".bright_yellow().to_string(),
        Disc::Empty => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_propagates_bad_size() {
        assert!(CliGame::new(7).is_err());
        assert!(CliGame::new(8).is_ok());
    }

    #[test]
    fn test_last_move_tracking() {
        let mut game = CliGame::new(8).unwrap();
        assert!(game.last_move().is_none());
        game.session_mut().play(Coord::new(3, 4)).unwrap();
        assert_eq!(game.last_move(), Some(Coord::new(3, 4)));
    }
}
