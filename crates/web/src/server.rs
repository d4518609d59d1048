//! Minimal HTTP transport for the game endpoints.
//!
//! A sequential HTTP/1.1 GET loop over `std::net::TcpListener`: requests
//! are handled one at a time, which also serializes every mutation of the
//! single game session. The session lives behind a `Mutex` so a poisoned
//! lock degrades to an error response instead of unsafety.

use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use othello_core::board::InvalidBoardSize;
use othello_core::session::GameSession;
use tracing::{info, warn};

use crate::handlers;

const INDEX_HTML: &str = include_str!("../static/index.html");
const JSON: &str = "application/json";
const HTML: &str = "text/html; charset=utf-8";

/// One server instance owning exactly one game session.
pub struct Server {
    session: Mutex<GameSession>,
    /// Pristine state used by restart and as the load fallback.
    initial: GameSession,
    save_path: PathBuf,
}

impl Server {
    /// Creates a server with a fresh game on a board of the given size.
    pub fn new(size: usize, save_path: PathBuf) -> Result<Server, InvalidBoardSize> {
        let initial = GameSession::new(size)?;
        Ok(Server {
            session: Mutex::new(initial.clone()),
            initial,
            save_path,
        })
    }

    /// Binds `addr` and serves requests until the process ends.
    pub fn run(&self, addr: &str) -> anyhow::Result<()> {
        let listener = TcpListener::bind(addr).with_context(|| format!("Cannot bind {addr}"))?;
        info!("Othello server listening on http://{addr}");
        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    if let Err(err) = self.handle_connection(stream) {
                        warn!("Connection error: {err}");
                    }
                }
                Err(err) => warn!("Failed to accept connection: {err}"),
            }
        }
        Ok(())
    }

    fn handle_connection(&self, mut stream: TcpStream) -> anyhow::Result<()> {
        let mut reader = BufReader::new(stream.try_clone()?);
        let mut request_line = String::new();
        reader.read_line(&mut request_line)?;
        // Drain the headers; nothing in this protocol needs them.
        loop {
            let mut line = String::new();
            if reader.read_line(&mut line)? == 0 || line.trim_end().is_empty() {
                break;
            }
        }

        let Some((method, target)) = parse_request_line(&request_line) else {
            return write_response(&mut stream, 400, JSON, &error_body("Malformed request."));
        };
        info!("{method} {target}");

        let (status, content_type, body) = if method != "GET" {
            (405, JSON, error_body("Only GET is supported."))
        } else {
            let (path, query) = split_target(target);
            self.route(path, query)?
        };
        write_response(&mut stream, status, content_type, &body)
    }

    /// Dispatches one request to the matching handler.
    fn route(&self, path: &str, query: &str) -> anyhow::Result<(u16, &'static str, String)> {
        if path == "/" {
            return Ok((200, HTML, INDEX_HTML.to_string()));
        }

        let mut session = match self.session.lock() {
            Ok(guard) => guard,
            Err(_) => return Ok((500, JSON, error_body("Game state lock is poisoned."))),
        };
        Ok(match path {
            "/state" => (200, JSON, serde_json::to_string(&*session)?),
            "/move" => {
                let response = handlers::handle_move(
                    &mut session,
                    query_param(query, "x"),
                    query_param(query, "y"),
                );
                (200, JSON, serde_json::to_string(&response)?)
            }
            "/save" => {
                let response = handlers::handle_save(&session, &self.save_path);
                (200, JSON, serde_json::to_string(&response)?)
            }
            "/load" => {
                let response =
                    handlers::handle_load(&mut session, &self.save_path, &self.initial);
                (200, JSON, serde_json::to_string(&response)?)
            }
            "/restart" => {
                let response = handlers::handle_restart(&mut session, &self.initial);
                (200, JSON, serde_json::to_string(&response)?)
            }
            _ => (404, JSON, error_body("Not found.")),
        })
    }
}

/// Splits "GET /move?x=3&y=4 HTTP/1.1" into method and target.
fn parse_request_line(line: &str) -> Option<(&str, &str)> {
    let mut parts = line.split_whitespace();
    let method = parts.next()?;
    let target = parts.next()?;
    Some((method, target))
}

/// Splits a request target into path and query string.
fn split_target(target: &str) -> (&str, &str) {
    match target.split_once('?') {
        Some((path, query)) => (path, query),
        None => (target, ""),
    }
}

/// Looks up one key in an "a=1&b=2" query string.
fn query_param<'a>(query: &'a str, key: &str) -> Option<&'a str> {
    query.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        (k == key).then_some(v)
    })
}

fn error_body(message: &str) -> String {
    serde_json::json!({ "status": "fail", "message": message }).to_string()
}

fn write_response(
    stream: &mut TcpStream,
    status: u16,
    content_type: &str,
    body: &str,
) -> anyhow::Result<()> {
    let reason = match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        405 => "Method Not Allowed",
        _ => "Internal Server Error",
    };
    write!(
        stream,
        "HTTP/1.1 {status} {reason}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )?;
    stream.flush()?;
    Ok(())
}
