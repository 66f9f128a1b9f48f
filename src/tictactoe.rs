//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game;
pub mod lines;
pub mod view;

pub use board::{Board, Cell, Player};
pub use game::{GameState, MAXIMUM_MOVES, Snapshot};
pub use lines::{LineAnalyzer, WINNING_LINES, Winner, detect_winner};
pub use view::{HistoryEntry, HistoryOrder, Status, history_entries, toggle_order};
