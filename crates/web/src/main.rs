use std::path::PathBuf;

use clap::Parser;
use othello_core::board::DEFAULT_BOARD_SIZE;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use web::server::Server;

/// Web interface for two-player Othello.
#[derive(Parser)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 5000)]
    port: u16,

    /// Board size; must be even and at least 2
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,

    /// Where to keep the save-game JSON document
    #[arg(long, default_value = "savegame.json")]
    save_file: PathBuf,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(Targets::new().with_default(args.log_level))
        .init();

    let server = Server::new(args.size, args.save_file)?;
    server.run(&format!("{}:{}", args.host, args.port))
}
