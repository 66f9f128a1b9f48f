//! Configuration types for session creation.

use serde::{Deserialize, Serialize};

use crate::tictactoe::HistoryOrder;

/// Configuration for creating a [`Session`](crate::session::Session).
///
/// # Examples
///
/// ```
/// use tictactoe_history::config::SessionConfig;
/// use tictactoe_history::tictactoe::HistoryOrder;
///
/// let config = SessionConfig::new()
///     .with_order(HistoryOrder::Descending)
///     .with_opening(vec![4, 0]);
/// assert_eq!(config.opening, vec![4, 0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Initial ordering of the move list
    pub order: HistoryOrder,
    /// Cells played, in order, before the session is handed out
    pub opening: Vec<usize>,
}

impl SessionConfig {
    /// Create a configuration for an empty board with an ascending move list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial move-list ordering.
    pub fn with_order(mut self, order: HistoryOrder) -> Self {
        self.order = order;
        self
    }

    /// Set the opening moves.
    pub fn with_opening(mut self, opening: Vec<usize>) -> Self {
        self.opening = opening;
        self
    }
}
