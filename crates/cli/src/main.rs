mod game;
mod input;
mod ui;

use clap::Parser;
use othello_core::board::DEFAULT_BOARD_SIZE;

/// Two-player Othello in the terminal.
#[derive(Parser, Debug)]
struct Cli {
    /// Board size; must be even and at least 2
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,
}

fn main() {
    let args = Cli::parse();
    if let Err(err) = ui::ui_loop(args.size) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
