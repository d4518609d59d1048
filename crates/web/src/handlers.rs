//! Endpoint logic, independent of the transport.
//!
//! Every handler is a plain function over the game session and returns a
//! serializable response struct; the HTTP layer only turns these into
//! JSON bodies. Statuses follow the original contract: game-rule
//! rejections and missing saves are reported as `fail` in the payload,
//! never as transport errors.

use std::path::Path;

use othello_core::board::Board;
use othello_core::coord::Coord;
use othello_core::disc::Disc;
use othello_core::game::TurnOutcome;
use othello_core::session::GameSession;
use serde::{Deserialize, Serialize};

use crate::persist;

/// Outcome marker carried by every response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Fail,
}

/// Response of the move endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResponse {
    pub status: Status,
    pub message: String,
    pub board: Board,
    pub current_player: Disc,
    /// Notation of the applied move ("C4"); absent when nothing was played.
    pub notation: Option<String>,
    /// End-of-game summary, set only by the move that finished the game.
    pub finished: Option<String>,
}

impl MoveResponse {
    fn without_move(status: Status, message: String, session: &GameSession) -> MoveResponse {
        MoveResponse {
            status,
            message,
            board: session.board.clone(),
            current_player: session.current,
            notation: None,
            finished: None,
        }
    }
}

/// Response of the save, load and restart endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: Status,
    pub message: String,
}

/// Parses one 1-based coordinate query parameter.
fn parse_axis(value: Option<&str>) -> Option<usize> {
    value?.trim().parse().ok().filter(|v| *v >= 1)
}

/// Handles `/move?x=&y=`.
///
/// Malformed or missing parameters fail without touching the session. A
/// finished game reports success with a restart hint instead of playing.
/// Illegal moves fail with the attempted notation; legal moves apply,
/// announce flips and passes, and carry the final summary when the move
/// ends the game.
pub fn handle_move(session: &mut GameSession, x: Option<&str>, y: Option<&str>) -> MoveResponse {
    let (Some(col), Some(row)) = (parse_axis(x), parse_axis(y)) else {
        return MoveResponse::without_move(Status::Fail, "Invalid coordinates.".into(), session);
    };
    let coord = Coord::new(col, row);

    if session.game_finished {
        return MoveResponse::without_move(
            Status::Success,
            "The game is already over. Click 'Restart game' to play a new match!".into(),
            session,
        );
    }

    let current = session.current;
    let Some(played) = session.play(coord) else {
        return MoveResponse::without_move(
            Status::Fail,
            format!("{current} attempted {coord}, illegal move."),
            session,
        );
    };

    let flip_word = if played.flips == 1 { "disc" } else { "discs" };
    let mut message = format!(
        "{current} played {}, {} {flip_word} flipped.",
        played.notation, played.flips
    );
    let mut finished = None;
    match played.outcome {
        TurnOutcome::Next(_) => {}
        TurnOutcome::Pass { skipped, next } => {
            message.push_str(&format!(
                " {skipped} has no legal moves, so {next} plays again."
            ));
        }
        TurnOutcome::Finished(result) => finished = Some(result.to_string()),
    }

    MoveResponse {
        status: Status::Success,
        message,
        board: session.board.clone(),
        current_player: session.current,
        notation: Some(played.notation),
        finished,
    }
}

/// Handles `/save`: writes the session to the save file.
pub fn handle_save(session: &GameSession, path: &Path) -> StatusResponse {
    match persist::save_session(session, path) {
        Ok(()) => StatusResponse {
            status: Status::Success,
            message: "Game saved.".into(),
        },
        Err(err) => StatusResponse {
            status: Status::Fail,
            message: format!("Could not save game: {err}"),
        },
    }
}

/// Handles `/load`: replaces the session with the saved document.
///
/// A missing or unreadable save is recoverable: the session resets to a
/// fresh game and the response reports `fail`.
pub fn handle_load(
    session: &mut GameSession,
    path: &Path,
    initial: &GameSession,
) -> StatusResponse {
    match persist::load_session(path) {
        Ok(loaded) => {
            *session = loaded;
            StatusResponse {
                status: Status::Success,
                message: "Game loaded.".into(),
            }
        }
        Err(_) => {
            *session = initial.clone();
            StatusResponse {
                status: Status::Fail,
                message: "No save file found. A new game has been started.".into(),
            }
        }
    }
}

/// Handles `/restart`: back to the initial position.
pub fn handle_restart(session: &mut GameSession, initial: &GameSession) -> StatusResponse {
    *session = initial.clone();
    StatusResponse {
        status: Status::Success,
        message: "Game restarted.".into(),
    }
}
