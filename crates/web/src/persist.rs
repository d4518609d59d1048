//! Save-file persistence.
//!
//! The save document is the serialized [`GameSession`] itself: board,
//! side to move, move history and finished flag, as one JSON object.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use othello_core::session::GameSession;

/// Writes the session to `path` as JSON, replacing any previous save.
pub fn save_session(session: &GameSession, path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Cannot create save file '{}'", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, session)?;
    writer.flush()?;
    Ok(())
}

/// Reads a session back from `path`.
///
/// The finished flag is recomputed from the loaded board rather than
/// trusted; the file may describe any position.
pub fn load_session(path: &Path) -> anyhow::Result<GameSession> {
    let file =
        File::open(path).with_context(|| format!("Cannot open save file '{}'", path.display()))?;
    let mut session: GameSession = serde_json::from_reader(BufReader::new(file))?;
    session.refresh_finished();
    Ok(session)
}
