//! Tic-Tac-Toe with a navigable move history
//!
//! This crate provides:
//! - Board, win detection and move application
//! - A snapshot history with "time travel" to earlier positions
//! - Event-driven sessions and text views for a front end
//! - A command-line player

pub mod cli;
pub mod config;
pub mod error;
pub mod session;
pub mod simulation;
pub mod tictactoe;

pub use error::{Error, Result};
pub use session::{Event, Session};
pub use tictactoe::{GameState, Player, Snapshot, Winner};
