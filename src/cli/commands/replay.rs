//! Replay command - Apply a move list and show the resulting session

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::warn;

use crate::{
    cli::{input::parse_moves, output::render_session},
    session::{Event, Session},
    tictactoe::{HistoryEntry, Snapshot, Status},
};

#[derive(Parser, Debug)]
#[command(about = "Replay a list of moves and print the result")]
pub struct ReplayArgs {
    /// Cells to play in order, e.g. "0,4,1,3,2"
    #[arg(long, short = 'm')]
    pub moves: String,

    /// History entry to jump to after replaying
    #[arg(long, short = 'j')]
    pub jump: Option<usize>,

    /// List the move history newest first
    #[arg(long)]
    pub descending: bool,

    /// Print the session as JSON instead of a board
    #[arg(long)]
    pub json: bool,
}

/// Machine-readable form of a replayed session
#[derive(Debug, Serialize)]
pub struct ReplayReport<'a> {
    /// Current board as nine cell characters, e.g. `XO..X....`
    pub board: String,
    pub cursor: usize,
    pub status: Status,
    pub game_over: bool,
    pub current: &'a Snapshot,
    pub history: &'a [Snapshot],
    pub entries: Vec<HistoryEntry>,
    pub ignored: Vec<usize>,
}

impl<'a> ReplayReport<'a> {
    pub fn new(session: &'a Session, ignored: Vec<usize>) -> Self {
        ReplayReport {
            board: session.current().board.encode(),
            cursor: session.game().cursor(),
            status: session.status(),
            game_over: session.game().is_game_over(),
            current: session.current(),
            history: session.game().history(),
            entries: session.entries(),
            ignored,
        }
    }

    /// Pretty-printed JSON form of the report
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub fn execute(args: ReplayArgs) -> Result<()> {
    let moves = parse_moves(&args.moves).context("invalid --moves")?;
    let mut session = Session::new();
    if args.descending {
        session.toggle_order();
    }

    let ignored = replay(&mut session, &moves, args.jump);
    for position in &ignored {
        warn!(position, "move ignored during replay");
    }

    if args.json {
        let report = ReplayReport::new(&session, ignored);
        println!("{}", report.to_json()?);
    } else {
        print!("{}", render_session(&session));
        if !ignored.is_empty() {
            println!("\nIgnored moves: {ignored:?}");
        }
    }
    Ok(())
}

/// Feed moves into a session, then optionally jump.
///
/// Returns the moves that were rejected. An out-of-range jump is ignored.
pub fn replay(session: &mut Session, moves: &[usize], jump: Option<usize>) -> Vec<usize> {
    let ignored: Vec<usize> = moves
        .iter()
        .copied()
        .filter(|&position| !session.dispatch(Event::CellClicked(position)))
        .collect();

    if let Some(target) = jump
        && !session.dispatch(Event::HistoryClicked(target))
    {
        warn!(target, "jump target out of range");
    }
    ignored
}
