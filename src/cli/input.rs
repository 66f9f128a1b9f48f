//! Parsing of interactive commands and move lists

use crate::{
    Error,
    session::Event,
    tictactoe::board::{CELL_COUNT, position_from_coordinates},
};

/// A line of input from the interactive prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Event(Event),
    Help,
    Quit,
}

/// Parse one prompt line.
///
/// Accepted forms:
/// - `4` plays cell 4 (0-8, row-major)
/// - `2,3` plays row 2, column 3 (1-indexed)
/// - `j 3` / `jump 3` jumps to history entry 3
/// - `t` / `toggle`, `r` / `reset`, `h` / `help`, `q` / `quit`
///
/// # Errors
///
/// Returns error if the line matches none of the forms above.
pub fn parse_command(line: &str) -> Result<Command, Error> {
    let trimmed = line.trim();
    let lowered = trimmed.to_ascii_lowercase();
    let mut words = lowered.split_whitespace();
    let Some(head) = words.next() else {
        return Err(Error::invalid_command(trimmed, "empty input"));
    };
    let rest: Vec<&str> = words.collect();

    let command = match (head, rest.as_slice()) {
        ("t" | "toggle", []) => Command::Event(Event::ToggleOrder),
        ("r" | "reset", []) => Command::Event(Event::Reset),
        ("h" | "help" | "?", []) => Command::Help,
        ("q" | "quit" | "exit", []) => Command::Quit,
        ("j" | "jump", [target]) => {
            let target = target
                .parse::<usize>()
                .map_err(|_| Error::invalid_command(trimmed, "jump target must be a number"))?;
            Command::Event(Event::HistoryClicked(target))
        }
        (cell, []) => Command::Event(Event::CellClicked(parse_cell(cell)?)),
        _ => return Err(Error::invalid_command(trimmed, "unrecognised command")),
    };
    Ok(command)
}

/// Parse a cell given either as an index `0`-`8` or as `row,col` (1-3 each).
///
/// # Errors
///
/// Returns error if the token is neither form or names a cell off the board.
pub fn parse_cell(token: &str) -> Result<usize, Error> {
    if let Some((row, column)) = token.split_once(',') {
        let row = row.trim().parse::<usize>();
        let column = column.trim().parse::<usize>();
        return match (row, column) {
            (Ok(row), Ok(column)) => position_from_coordinates(row, column).ok_or_else(|| {
                Error::invalid_command(token, "row and column must each be 1-3")
            }),
            _ => Err(Error::invalid_command(token, "expected 'row,column'")),
        };
    }

    let position = token
        .parse::<usize>()
        .map_err(|_| Error::invalid_command(token, "expected a cell number 0-8"))?;
    if position >= CELL_COUNT {
        return Err(Error::InvalidPosition { position });
    }
    Ok(position)
}

/// Parse a comma- or space-separated list of cell indices, e.g. `0,4,1`.
///
/// Only the range 0-8 is checked; whether each move is legal is left to the
/// game.
///
/// # Errors
///
/// Returns error if any item is not a number in 0-8.
pub fn parse_moves(list: &str) -> Result<Vec<usize>, Error> {
    list.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|item| !item.is_empty())
        .map(|item| -> Result<usize, Error> {
            let position = item
                .parse::<usize>()
                .map_err(|_| Error::invalid_command(item, "expected a cell number 0-8"))?;
            if position >= CELL_COUNT {
                return Err(Error::InvalidPosition { position });
            }
            Ok(position)
        })
        .collect()
}
