//! A game session driven by discrete user events

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    config::SessionConfig,
    tictactoe::{GameState, HistoryEntry, HistoryOrder, Snapshot, Status, history_entries},
};

/// Inbound events a front end can deliver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// A board cell was selected
    CellClicked(usize),
    /// A move-list entry was selected
    HistoryClicked(usize),
    /// The move-list ordering toggle was pressed
    ToggleOrder,
    /// Start over from the empty board
    Reset,
}

/// One game plus the presentation state that goes with it.
///
/// Every event either changes the session completely or not at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    game: GameState,
    order: HistoryOrder,
}

impl Session {
    pub fn new() -> Self {
        Self::with_config(&SessionConfig::default())
    }

    /// Create a session and play the configured opening.
    ///
    /// # Errors
    ///
    /// Returns error if any opening move is illegal.
    pub fn from_config(config: &SessionConfig) -> Result<Self, crate::Error> {
        let mut game = GameState::new();
        for &position in &config.opening {
            game.try_apply_move(position)?;
        }
        Ok(Self::created(game, config))
    }

    /// Create a session, skipping illegal opening moves
    pub fn with_config(config: &SessionConfig) -> Self {
        let mut game = GameState::new();
        for &position in &config.opening {
            game.apply_move(position);
        }
        Self::created(game, config)
    }

    fn created(game: GameState, config: &SessionConfig) -> Self {
        info!(
            opening = config.opening.len(),
            plies = game.cursor(),
            order = %config.order,
            "session created"
        );
        Session {
            game,
            order: config.order,
        }
    }

    /// Handle one event. Returns `true` if anything changed.
    pub fn dispatch(&mut self, event: Event) -> bool {
        let changed = match event {
            Event::CellClicked(position) => self.game.apply_move(position),
            Event::HistoryClicked(target) => self.game.jump_to(target),
            Event::ToggleOrder => {
                self.toggle_order();
                true
            }
            Event::Reset => {
                self.game.reset();
                info!("session reset");
                true
            }
        };
        debug!(?event, changed, cursor = self.game.cursor(), "event handled");
        changed
    }

    pub fn toggle_order(&mut self) {
        self.order = self.order.toggled();
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn order(&self) -> HistoryOrder {
        self.order
    }

    pub fn current(&self) -> &Snapshot {
        self.game.current()
    }

    pub fn status(&self) -> Status {
        Status::of(&self.game)
    }

    /// The move list in the session's current order
    pub fn entries(&self) -> Vec<HistoryEntry> {
        history_entries(&self.game, self.order)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Player;

    #[test]
    fn test_dispatch_cell_clicks() {
        let mut session = Session::new();
        assert!(session.dispatch(Event::CellClicked(4)));
        assert!(!session.dispatch(Event::CellClicked(4)));
        assert!(!session.dispatch(Event::CellClicked(12)));
        assert_eq!(session.game().cursor(), 1);
        assert_eq!(session.status(), Status::NextPlayer(Player::O));
    }

    #[test]
    fn test_dispatch_history_clicks() {
        let mut session = Session::new();
        for pos in [0, 1, 2] {
            session.dispatch(Event::CellClicked(pos));
        }
        assert!(session.dispatch(Event::HistoryClicked(0)));
        assert_eq!(*session.current(), Snapshot::initial());
        assert!(!session.dispatch(Event::HistoryClicked(4)));
        assert_eq!(session.game().cursor(), 0);
    }

    #[test]
    fn test_toggle_leaves_game_untouched() {
        let mut session = Session::new();
        session.dispatch(Event::CellClicked(0));
        let game = session.game().clone();

        assert!(session.dispatch(Event::ToggleOrder));
        assert_eq!(session.order(), HistoryOrder::Descending);
        assert_eq!(session.entries()[0].index, 1);
        assert_eq!(session.game(), &game);

        session.dispatch(Event::ToggleOrder);
        assert_eq!(session.order(), HistoryOrder::Ascending);
    }

    #[test]
    fn test_reset_keeps_order() {
        let mut session = Session::with_config(
            &SessionConfig::new()
                .with_order(HistoryOrder::Descending)
                .with_opening(vec![0, 1]),
        );
        assert_eq!(session.game().cursor(), 2);
        session.dispatch(Event::Reset);
        assert_eq!(session.game(), &GameState::new());
        assert_eq!(session.order(), HistoryOrder::Descending);
    }

    #[test]
    fn test_from_config_rejects_illegal_opening() {
        let config = SessionConfig::new().with_opening(vec![0, 0]);
        assert!(matches!(
            Session::from_config(&config),
            Err(crate::Error::CellOccupied { position: 0 })
        ));
        // The lenient constructor skips the repeat
        assert_eq!(Session::with_config(&config).game().cursor(), 1);
    }

    #[test]
    fn test_constructors_agree_on_legal_opening() {
        let config = SessionConfig::new()
            .with_order(HistoryOrder::Descending)
            .with_opening(vec![4, 0, 8]);
        let strict = Session::from_config(&config).unwrap();
        assert_eq!(Session::with_config(&config), strict);
        assert_eq!(strict.game().cursor(), 3);
        assert_eq!(Session::new(), Session::with_config(&SessionConfig::default()));
    }
}
