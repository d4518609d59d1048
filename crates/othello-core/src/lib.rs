//! Rules engine for two-player Othello (Reversi).
//!
//! The crate is front-end agnostic: the CLI and web crates drive the same
//! `Board`, legality/flip rules and turn resolution through this API.

pub mod board;
pub mod coord;
pub mod disc;
pub mod game;
pub mod rules;
pub mod session;

#[cfg(test)]
mod properties;
