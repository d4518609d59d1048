//! Move input parsing for the terminal front end.
//!
//! Accepts free-form text like "A 6", "d7" or "c,4" and turns it into a
//! 1-based board coordinate. Rejections are descriptive and recoverable;
//! the prompt loop re-asks instead of giving up.

use std::fmt;

use othello_core::coord::{Coord, column_letter};

/// A parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Move(Coord),
    Quit,
}

/// The error type for rejected move input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseMoveError {
    /// Fewer than two usable characters.
    TooShort,
    /// First character is not a column letter on this board.
    InvalidColumn { found: char, max: char },
    /// The part after the letter is not a number.
    RowNotANumber(String),
    /// The row number falls outside the board.
    RowOutOfRange { row: usize, size: usize },
}

impl std::error::Error for ParseMoveError {}

impl fmt::Display for ParseMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseMoveError::TooShort => {
                write!(f, "Input must contain a letter and a number.")
            }
            ParseMoveError::InvalidColumn { found, max } => {
                write!(f, "Column must be a letter from A to {max}, got '{found}'.")
            }
            ParseMoveError::RowNotANumber(rest) => {
                write!(f, "Row must be a number, got '{rest}'.")
            }
            ParseMoveError::RowOutOfRange { row, size } => {
                write!(f, "Row must be between 1 and {size}, got {row}.")
            }
        }
    }
}

/// Parses one line of input against a board of the given size.
///
/// Whitespace and commas may appear anywhere and case is ignored, so
/// "  d  6 " reads as D6. "q", "quit" and "exit" (any case) quit.
pub fn parse_command(raw: &str, size: usize) -> Result<Command, ParseMoveError> {
    let lowered = raw.trim().to_ascii_lowercase();
    if matches!(lowered.as_str(), "q" | "quit" | "exit") {
        return Ok(Command::Quit);
    }

    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| c.to_ascii_uppercase())
        .collect();
    if cleaned.chars().count() < 2 {
        return Err(ParseMoveError::TooShort);
    }

    let Some(letter) = cleaned.chars().next() else {
        return Err(ParseMoveError::TooShort);
    };
    let max = column_letter(size - 1);
    if !letter.is_ascii_uppercase() || letter > max {
        return Err(ParseMoveError::InvalidColumn { found: letter, max });
    }
    let col = (letter as u8 - b'A') as usize + 1;

    let rest = &cleaned[1..];
    let row: usize = rest
        .parse()
        .map_err(|_| ParseMoveError::RowNotANumber(rest.to_string()))?;
    if row < 1 || row > size {
        return Err(ParseMoveError::RowOutOfRange { row, size });
    }

    Ok(Command::Move(Coord::new(col, row)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Result<Command, ParseMoveError> {
        parse_command(raw, 8)
    }

    #[test]
    fn test_basic_valid_inputs() {
        assert_eq!(parse("A 3"), Ok(Command::Move(Coord::new(1, 3))));
        assert_eq!(parse("H8"), Ok(Command::Move(Coord::new(8, 8))));
        assert_eq!(parse("c4"), Ok(Command::Move(Coord::new(3, 4))));
    }

    #[test]
    fn test_irregular_whitespace_and_case() {
        assert_eq!(parse("  d  6 "), Ok(Command::Move(Coord::new(4, 6))));
        assert_eq!(parse("d 7"), Ok(Command::Move(Coord::new(4, 7))));
        assert_eq!(parse("\tB\t2"), Ok(Command::Move(Coord::new(2, 2))));
    }

    #[test]
    fn test_commas_are_ignored() {
        assert_eq!(parse("C,4"), Ok(Command::Move(Coord::new(3, 4))));
        assert_eq!(parse("a, 6"), Ok(Command::Move(Coord::new(1, 6))));
    }

    #[test]
    fn test_missing_number() {
        assert_eq!(parse("A"), Err(ParseMoveError::TooShort));
        assert_eq!(parse(""), Err(ParseMoveError::TooShort));
        assert_eq!(parse("  "), Err(ParseMoveError::TooShort));
    }

    #[test]
    fn test_non_letter_first_character() {
        assert_eq!(
            parse("6A"),
            Err(ParseMoveError::InvalidColumn {
                found: '6',
                max: 'H'
            })
        );
        assert_eq!(
            parse("%5"),
            Err(ParseMoveError::InvalidColumn {
                found: '%',
                max: 'H'
            })
        );
    }

    #[test]
    fn test_column_beyond_board() {
        assert_eq!(
            parse("Z9"),
            Err(ParseMoveError::InvalidColumn {
                found: 'Z',
                max: 'H'
            })
        );
        // A 4x4 board only reaches column D.
        assert_eq!(
            parse_command("E2", 4),
            Err(ParseMoveError::InvalidColumn {
                found: 'E',
                max: 'D'
            })
        );
    }

    #[test]
    fn test_row_not_a_number() {
        assert!(matches!(parse("Ax"), Err(ParseMoveError::RowNotANumber(_))));
        assert!(matches!(parse("B!"), Err(ParseMoveError::RowNotANumber(_))));
    }

    #[test]
    fn test_row_out_of_range() {
        assert_eq!(
            parse("A0"),
            Err(ParseMoveError::RowOutOfRange { row: 0, size: 8 })
        );
        assert_eq!(
            parse("B12"),
            Err(ParseMoveError::RowOutOfRange { row: 12, size: 8 })
        );
    }

    #[test]
    fn test_quit_commands() {
        assert_eq!(parse("q"), Ok(Command::Quit));
        assert_eq!(parse("Q"), Ok(Command::Quit));
        assert_eq!(parse("quit"), Ok(Command::Quit));
        assert_eq!(parse("EXIT"), Ok(Command::Quit));
        assert_eq!(parse(" quit "), Ok(Command::Quit));
    }

    #[test]
    fn test_errors_are_descriptive() {
        let err = parse("Z9").unwrap_err();
        assert!(err.to_string().contains("A to H"));
        let err = parse("B12").unwrap_err();
        assert!(err.to_string().contains("between 1 and 8"));
    }
}
