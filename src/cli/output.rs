//! Text rendering of sessions for the terminal

use crate::{
    session::Session,
    tictactoe::{Board, Cell, Winner, board::BOARD_SIDE},
};

/// Render a board as a 3x3 grid. Cells on the winning line are bracketed.
///
/// ```text
/// [X]|[X]|[X]
/// ---+---+---
///  O | O |
/// ```
pub fn render_board(board: &Board, winner: Option<&Winner>) -> String {
    let mut out = String::new();
    for row in 0..BOARD_SIDE {
        if row > 0 {
            out.push_str("---+---+---\n");
        }
        let cells: Vec<String> = (0..BOARD_SIDE)
            .map(|column| {
                let position = row * BOARD_SIDE + column;
                let symbol = match board.get(position) {
                    Cell::Empty => ' ',
                    cell => cell.to_char(),
                };
                if winner.is_some_and(|w| w.contains(position)) {
                    format!("[{symbol}]")
                } else {
                    format!(" {symbol} ")
                }
            })
            .collect();
        out.push_str(cells.join("|").trim_end());
        out.push('\n');
    }
    out
}

/// Render the board, status line and move list of a session
pub fn render_session(session: &Session) -> String {
    let snapshot = session.current();
    let mut out = render_board(&snapshot.board, snapshot.winner.as_ref());
    out.push('\n');
    out.push_str(&format!("{}\n", session.status()));
    out.push_str(&format!("History Sort: {}\n", session.order()));
    for entry in session.entries() {
        let marker = if entry.is_current { '>' } else { ' ' };
        out.push_str(&format!("{marker} {entry}\n"));
    }
    out
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:12} {}", format!("{}:", key), value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Event;

    #[test]
    fn test_render_empty_board() {
        let rendered = render_board(&Board::new(), None);
        assert_eq!(rendered, "   |   |\n---+---+---\n   |   |\n---+---+---\n   |   |\n");
    }

    #[test]
    fn test_render_highlights_winning_line() {
        let board = Board::from_string("XXX OO. ...").unwrap();
        let winner = crate::tictactoe::detect_winner(&board);
        let rendered = render_board(&board, winner.as_ref());
        let first_line = rendered.lines().next().unwrap();
        assert_eq!(first_line, "[X]|[X]|[X]");
        assert!(rendered.contains(" O | O |"));
    }

    #[test]
    fn test_render_session_marks_current_entry() {
        let mut session = Session::new();
        session.dispatch(Event::CellClicked(4));
        session.dispatch(Event::CellClicked(0));
        session.dispatch(Event::HistoryClicked(1));

        let rendered = render_session(&session);
        assert!(rendered.contains("Next player: O"));
        assert!(rendered.contains("History Sort: Ascending"));
        assert!(rendered.contains("  Go to game start"));
        assert!(rendered.contains("> Go to move # 1: X (2, 2)"));
        assert!(rendered.contains("  Go to move # 2: O (1, 1)"));
    }

    #[test]
    fn test_render_session_layout() {
        let mut session = Session::new();
        session.dispatch(Event::CellClicked(4));
        session.dispatch(Event::ToggleOrder);

        let rendered = render_session(&session);
        let tail: Vec<&str> = rendered.lines().skip(5).collect();
        assert_eq!(
            tail,
            vec![
                "",
                "Next player: O",
                "History Sort: Descending",
                "> Go to move # 1: X (2, 2)",
                "  Go to game start",
            ]
        );
        assert!(rendered.ends_with('\n'));
    }
}
