//! Interactive prompt loop for two human players.
//!
//! Reads moves with rustyline, applies them through the shared engine,
//! announces passes, and prints the final score when neither side can
//! move. Quitting is always available and never an error.

use colored::Colorize;
use othello_core::game::{GameResult, TurnOutcome};
use rustyline::{DefaultEditor, error::ReadlineError};

use crate::game::CliGame;
use crate::input::{self, Command};

/// Runs a full game session on a board of the given size.
pub fn ui_loop(size: usize) -> Result<(), String> {
    let mut rl = DefaultEditor::new().map_err(|e| e.to_string())?;
    let mut game = CliGame::new(size).map_err(|e| e.to_string())?;
    // A tiny board can be terminal from the start.
    game.session_mut().refresh_finished();

    println!("Welcome to Othello");
    println!("Black moves first!");
    println!();

    loop {
        game.print();
        println!();
        if game.session().game_finished {
            break;
        }

        let current = game.session().current;
        let prompt = format!("{current} to move ('A 6', 'd7', or 'q' to quit) > ");
        let line = match rl.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("Goodbye!");
                return Ok(());
            }
            Err(err) => return Err(err.to_string()),
        };
        let _ = rl.add_history_entry(&line);

        match input::parse_command(&line, size) {
            Ok(Command::Quit) => {
                println!("Goodbye!");
                return Ok(());
            }
            Ok(Command::Move(coord)) => match game.session_mut().play(coord) {
                Some(played) => {
                    let flip_word = if played.flips == 1 { "disc" } else { "discs" };
                    println!(
                        "{current} played {}, {} {flip_word} flipped.",
                        played.notation, played.flips
                    );
                    if let TurnOutcome::Pass { skipped, next } = played.outcome {
                        println!("{skipped} has no legal moves, so {next} plays again.");
                    }
                    println!();
                }
                None => println!("Illegal move, please try again."),
            },
            Err(err) => println!("{err} Examples: 'A 6', 'd7', 'H8'"),
        }
    }

    let (black, white) = game.session().board.count_pieces();
    let result = GameResult { black, white };
    println!("{}", "Game over!".bright_red());
    println!("Black: {black}, White: {white}");
    println!("{}", result.verdict());
    Ok(())
}
