//! Read-only views of a game for rendering: status line and move list

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{GameState, Player, board::coordinates};

/// What the status line shows for the current snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Winner(Player),
    OutOfMoves,
    NextPlayer(Player),
}

impl Status {
    /// Derive the status of the game's current snapshot.
    ///
    /// A winner takes precedence over running out of moves, so a win on the
    /// ninth ply reports the winner.
    pub fn of(game: &GameState) -> Self {
        if let Some(winner) = game.current().winner {
            Status::Winner(winner.player)
        } else if game.is_out_of_moves() {
            Status::OutOfMoves
        } else {
            Status::NextPlayer(game.next_player())
        }
    }

    pub fn is_finished(self) -> bool {
        !matches!(self, Status::NextPlayer(_))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Winner(player) => write!(f, "Winner: {player}"),
            Status::OutOfMoves => write!(f, "Out of moves!"),
            Status::NextPlayer(player) => write!(f, "Next player: {player}"),
        }
    }
}

/// Order in which the move list is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HistoryOrder {
    #[default]
    Ascending,
    Descending,
}

impl HistoryOrder {
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            HistoryOrder::Ascending
        } else {
            HistoryOrder::Descending
        }
    }

    pub fn is_ascending(self) -> bool {
        self == HistoryOrder::Ascending
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        Self::from_ascending(toggle_order(self.is_ascending()))
    }
}

impl fmt::Display for HistoryOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryOrder::Ascending => write!(f, "Ascending"),
            HistoryOrder::Descending => write!(f, "Descending"),
        }
    }
}

/// Flip the history ordering flag. Has no effect on the game itself.
pub fn toggle_order(ascending: bool) -> bool {
    !ascending
}

/// One line of the move list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Index into the game's history, usable as a jump target
    pub index: usize,
    /// Player and cell of the move that produced this entry
    pub played: Option<(Player, usize)>,
    pub is_current: bool,
}

impl HistoryEntry {
    /// Text of the entry, e.g. `Go to move # 3: X (2, 1)`.
    ///
    /// Coordinates are `(column, row)`, both 1-indexed.
    pub fn description(&self) -> String {
        match self.played {
            None => "Go to game start".to_string(),
            Some((player, position)) => {
                let (column, row) = coordinates(position);
                format!("Go to move # {}: {player} ({column}, {row})", self.index)
            }
        }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

/// Build the move list for a game in the requested order
pub fn history_entries(game: &GameState, order: HistoryOrder) -> Vec<HistoryEntry> {
    let mut entries: Vec<HistoryEntry> = game
        .history()
        .iter()
        .enumerate()
        .map(|(index, snapshot)| HistoryEntry {
            index,
            played: game.player_at(index).zip(snapshot.last_position),
            is_current: index == game.cursor(),
        })
        .collect();

    if !order.is_ascending() {
        entries.reverse();
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_with(moves: &[usize]) -> GameState {
        let mut game = GameState::new();
        for &pos in moves {
            assert!(game.apply_move(pos));
        }
        game
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(Status::of(&GameState::new()).to_string(), "Next player: X");
        assert_eq!(Status::of(&game_with(&[4])).to_string(), "Next player: O");
        assert_eq!(
            Status::of(&game_with(&[0, 3, 1, 4, 2])).to_string(),
            "Winner: X"
        );
        assert_eq!(
            Status::of(&game_with(&[0, 2, 1, 3, 5, 4, 6, 7, 8])).to_string(),
            "Out of moves!"
        );
    }

    #[test]
    fn test_win_on_last_ply_reports_winner() {
        // X completes two lines with the ninth ply
        let game = game_with(&[0, 1, 2, 3, 5, 7, 4, 6, 8]);
        assert_eq!(game.cursor(), 9);
        assert_eq!(Status::of(&game), Status::Winner(Player::X));
    }

    #[test]
    fn test_descriptions() {
        let game = game_with(&[4, 2]);
        let entries = history_entries(&game, HistoryOrder::Ascending);
        let texts: Vec<String> = entries.iter().map(HistoryEntry::description).collect();
        assert_eq!(
            texts,
            vec![
                "Go to game start",
                "Go to move # 1: X (2, 2)",
                "Go to move # 2: O (3, 1)",
            ]
        );
        assert!(entries[2].is_current);
        assert!(!entries[0].is_current);
    }

    #[test]
    fn test_descending_order() {
        let mut game = game_with(&[0, 1, 2]);
        game.jump_to(1);
        let entries = history_entries(&game, HistoryOrder::Descending);
        let indices: Vec<usize> = entries.iter().map(|e| e.index).collect();
        assert_eq!(indices, vec![3, 2, 1, 0]);
        let current: Vec<usize> = entries
            .iter()
            .filter(|e| e.is_current)
            .map(|e| e.index)
            .collect();
        assert_eq!(current, vec![1]);
    }

    #[test]
    fn test_toggle_order() {
        assert!(!toggle_order(true));
        assert!(toggle_order(false));
        assert_eq!(HistoryOrder::Ascending.toggled(), HistoryOrder::Descending);
        assert_eq!(HistoryOrder::Descending.toggled(), HistoryOrder::Ascending);
        assert_eq!(HistoryOrder::default().to_string(), "Ascending");
    }
}
