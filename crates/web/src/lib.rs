//! Web front end for two-player Othello.
//!
//! A small HTTP server over the shared rules engine. The endpoint logic
//! lives in [`handlers`] as plain functions over the game session, so the
//! whole surface is testable without a socket; [`server`] only parses
//! requests, dispatches, and serializes responses. [`persist`] stores the
//! session as a JSON document on disk.

pub mod handlers;
pub mod persist;
pub mod server;
