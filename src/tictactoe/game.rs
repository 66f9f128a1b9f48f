//! Game state with a navigable move history

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    board::{Board, CELL_COUNT},
    lines::{Winner, detect_winner},
    Player,
};

/// Number of plies after which the game is out of moves
pub const MAXIMUM_MOVES: usize = CELL_COUNT;

/// A board at one point in the game, with the move that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    pub board: Board,
    /// Cell played to reach this board; `None` for the initial snapshot
    pub last_position: Option<usize>,
    pub winner: Option<Winner>,
}

impl Snapshot {
    /// The empty starting position
    pub fn initial() -> Self {
        Snapshot {
            board: Board::new(),
            last_position: None,
            winner: None,
        }
    }

    pub fn has_winner(&self) -> bool {
        self.winner.is_some()
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::initial()
    }
}

/// A game as a linear list of snapshots plus a cursor into it.
///
/// `history[0]` is always the empty board. The cursor marks the displayed
/// snapshot and doubles as the ply count: the player to move is derived from
/// its parity. Moving the cursor back ("time travel") keeps later snapshots
/// until the next move is played, which discards them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    history: Vec<Snapshot>,
    cursor: usize,
}

impl GameState {
    /// Create a new game at the empty board
    pub fn new() -> Self {
        GameState {
            history: vec![Snapshot::initial()],
            cursor: 0,
        }
    }

    /// All stored snapshots, oldest first
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The snapshot at the cursor
    pub fn current(&self) -> &Snapshot {
        &self.history[self.cursor]
    }

    /// The player who moves next from the current snapshot
    pub fn next_player(&self) -> Player {
        Player::for_ply(self.cursor)
    }

    /// Apply a move, ignoring it if illegal.
    ///
    /// Returns `true` when the move was applied. Occupied cells, positions off
    /// the board and moves after a win leave the game untouched.
    pub fn apply_move(&mut self, position: usize) -> bool {
        match self.try_apply_move(position).map(|_| ()) {
            Ok(()) => true,
            Err(e) => {
                debug!(position, cursor = self.cursor, error = %e, "move ignored");
                false
            }
        }
    }

    /// Apply a move from the current snapshot.
    ///
    /// Any snapshots after the cursor are discarded first, then the new
    /// snapshot is appended and becomes current.
    ///
    /// # Errors
    ///
    /// Returns error if the position is off the board, the current snapshot
    /// already has a winner, or the cell is occupied. The game is unchanged
    /// on error.
    pub fn try_apply_move(&mut self, position: usize) -> Result<&Snapshot, crate::Error> {
        let current = *self.current();
        if position >= CELL_COUNT {
            return Err(crate::Error::InvalidPosition { position });
        }
        if let Some(winner) = current.winner {
            return Err(crate::Error::GameAlreadyOver {
                winner: winner.player,
            });
        }

        let player = self.next_player();
        let board = current.board.place(position, player)?;
        let winner = detect_winner(&board);

        let discarded = self.history.len() - (self.cursor + 1);
        self.history.truncate(self.cursor + 1);
        self.history.push(Snapshot {
            board,
            last_position: Some(position),
            winner,
        });
        self.cursor = self.history.len() - 1;

        debug!(
            position,
            %player,
            ply = self.cursor,
            discarded,
            winner = ?winner.map(|w| w.player),
            "move applied"
        );
        Ok(self.current())
    }

    /// Whether the current snapshot ends the game.
    ///
    /// True when the snapshot has a winner or the cursor has reached
    /// [`MAXIMUM_MOVES`]. The second check relies on the cursor equalling
    /// the number of occupied cells, which holds because every snapshot adds
    /// exactly one piece.
    pub fn is_game_over(&self) -> bool {
        self.current().has_winner() || self.is_out_of_moves()
    }

    /// Cursor has reached [`MAXIMUM_MOVES`]
    pub fn is_out_of_moves(&self) -> bool {
        self.cursor == MAXIMUM_MOVES
    }

    /// Move the cursor to a stored snapshot, ignoring out-of-range targets.
    ///
    /// Returns `true` when the cursor was moved.
    pub fn jump_to(&mut self, target: usize) -> bool {
        match self.try_jump_to(target).map(|_| ()) {
            Ok(()) => true,
            Err(e) => {
                debug!(target, error = %e, "jump ignored");
                false
            }
        }
    }

    /// Move the cursor to `target` without touching the stored history.
    ///
    /// # Errors
    ///
    /// Returns error if `target` is not an index into the history.
    pub fn try_jump_to(&mut self, target: usize) -> Result<&Snapshot, crate::Error> {
        if target >= self.history.len() {
            return Err(crate::Error::CursorOutOfRange {
                target,
                len: self.history.len(),
            });
        }
        debug!(from = self.cursor, to = target, "jumped in history");
        self.cursor = target;
        Ok(self.current())
    }

    /// Discard all history and return to the empty board
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Player who made the move leading to history entry `index`.
    ///
    /// `None` for the initial snapshot or an index past the end.
    pub fn player_at(&self, index: usize) -> Option<Player> {
        (index > 0 && index < self.history.len()).then(|| Player::for_ply(index - 1))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
