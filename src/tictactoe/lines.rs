//! Winning line detection for Tic-Tac-Toe

use serde::{Deserialize, Serialize};

use super::{Board, Cell, Player};

/// Winning line indices on the 3x3 board, in evaluation order
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// A completed line: the player who owns it and its three positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Winner {
    pub player: Player,
    pub line: [usize; 3],
}

impl Winner {
    /// Whether a position is part of the winning line
    pub fn contains(&self, pos: usize) -> bool {
        self.line.contains(&pos)
    }
}

/// Return the first completed line in [`WINNING_LINES`] order, if any.
///
/// When several lines are complete at once the earliest one in the table wins
/// the tie, so results are deterministic for any board.
pub fn detect_winner(board: &Board) -> Option<Winner> {
    LineAnalyzer::first_complete_line(&board.cells)
}

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has three in a row anywhere on the board
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// First line whose three cells hold the same player's symbol
    pub fn first_complete_line(cells: &[Cell; 9]) -> Option<Winner> {
        WINNING_LINES.iter().find_map(|&line| {
            let [a, b, c] = line;
            let player = cells[a].player()?;
            (cells[a] == cells[b] && cells[a] == cells[c]).then_some(Winner { player, line })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_won_horizontal() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::X;

        assert!(LineAnalyzer::has_won(&cells, Player::X));
        assert!(!LineAnalyzer::has_won(&cells, Player::O));
    }

    #[test]
    fn test_detect_winner_vertical() {
        let board = Board::from_string(".O. .O. .O.").unwrap();
        assert_eq!(
            detect_winner(&board),
            Some(Winner {
                player: Player::O,
                line: [1, 4, 7],
            })
        );
    }

    #[test]
    fn test_detect_winner_anti_diagonal() {
        let board = Board::from_string("..X .X. X..").unwrap();
        let winner = detect_winner(&board).unwrap();
        assert_eq!(winner.player, Player::X);
        assert_eq!(winner.line, [2, 4, 6]);
        assert!(winner.contains(4));
        assert!(!winner.contains(0));
    }

    #[test]
    fn test_detect_winner_none() {
        assert_eq!(detect_winner(&Board::new()), None);
        assert_eq!(detect_winner(&Board::from_string("XXO OOX XOX").unwrap()), None);
        // Two in a row is not enough
        assert_eq!(detect_winner(&Board::from_string("XX. ... ...").unwrap()), None);
    }

    #[test]
    fn test_detect_winner_prefers_earliest_line() {
        // Top row and left column both complete; the row comes first
        let board = Board::from_string("XXX X.. X..").unwrap();
        assert_eq!(detect_winner(&board).unwrap().line, [0, 1, 2]);

        // Middle column and main diagonal; the column comes first
        let board = Board::from_string("OO. .O. .OO").unwrap();
        assert_eq!(detect_winner(&board).unwrap().line, [1, 4, 7]);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in WINNING_LINES {
            let mut board = Board::new();
            for pos in line {
                board.cells[pos] = Cell::O;
            }
            let winner = detect_winner(&board).unwrap();
            assert_eq!(winner.player, Player::O);
            assert_eq!(winner.line, line);
        }
    }
}
