//! Random self-play, used to exercise the game from the command line

use rand::{Rng, seq::IndexedRandom};
use serde::Serialize;
use tracing::trace;

use crate::tictactoe::{GameState, Player, Status};

/// Play uniformly random legal moves until the game ends
pub fn random_game(rng: &mut impl Rng) -> GameState {
    let mut game = GameState::new();
    while !game.is_game_over() {
        let moves = game.current().board.empty_positions();
        let Some(&position) = moves.choose(rng) else {
            break;
        };
        trace!(position, ply = game.cursor(), "random move");
        game.apply_move(position);
    }
    game
}

/// Outcome counts over a batch of games
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl Tally {
    pub fn record(&mut self, status: Status) {
        match status {
            Status::Winner(Player::X) => self.x_wins += 1,
            Status::Winner(Player::O) => self.o_wins += 1,
            Status::OutOfMoves => self.draws += 1,
            Status::NextPlayer(_) => {}
        }
    }

    pub fn total(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }
}
