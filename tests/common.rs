//! Common test utilities for the game-history test suite.

#![allow(dead_code)]

use tictactoe_history::tictactoe::{GameState, Snapshot};

/// Build a game by playing each cell in order, asserting every move is legal.
pub fn play_all(moves: &[usize]) -> GameState {
    let mut game = GameState::new();
    for &pos in moves {
        assert!(game.apply_move(pos), "move {pos} in {moves:?} was rejected");
    }
    game
}

/// Visit every game state reachable by legal play, depth first.
///
/// Each state is handed to `visit` with the cursor at the tail.
pub fn for_each_reachable(visit: &mut impl FnMut(&GameState)) {
    fn walk(game: &GameState, visit: &mut impl FnMut(&GameState)) {
        visit(game);
        if game.is_game_over() {
            return;
        }
        for pos in game.current().board.empty_positions() {
            let mut next = game.clone();
            assert!(next.apply_move(pos));
            walk(&next, visit);
        }
    }
    walk(&GameState::new(), visit);
}

/// Snapshot at the cursor, copied out so the game can be mutated afterwards
pub fn current(game: &GameState) -> Snapshot {
    *game.current()
}
