//! Play command - Interactive game on the terminal

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use crate::{
    Error,
    cli::{
        input::{Command, parse_command, parse_moves},
        output::render_session,
    },
    config::SessionConfig,
    session::Session,
    tictactoe::HistoryOrder,
};

const HELP: &str = "\
Commands:
  0-8          play a cell (row-major, 0 is top left)
  row,col      play a cell by 1-indexed row and column
  j N, jump N  go to history entry N
  t, toggle    flip the history sort order
  r, reset     start a new game
  h, help      show this help
  q, quit      leave";

#[derive(Parser, Debug)]
#[command(about = "Play an interactive game")]
pub struct PlayArgs {
    /// List the move history newest first
    #[arg(long)]
    pub descending: bool,

    /// Moves to play before handing over, e.g. "4,0"
    #[arg(long)]
    pub opening: Option<String>,
}

impl PlayArgs {
    pub fn session_config(&self) -> Result<SessionConfig> {
        let opening = match &self.opening {
            Some(list) => parse_moves(list)?,
            None => Vec::new(),
        };
        Ok(SessionConfig::new()
            .with_order(HistoryOrder::from_ascending(!self.descending))
            .with_opening(opening))
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = args.session_config()?;
    let mut session = Session::from_config(&config).context("invalid opening")?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    Ok(run(&mut session, stdin.lock(), stdout.lock())?)
}

/// Drive a session from line-based input until `quit` or end of input
///
/// # Errors
///
/// Returns [`Error::Io`] if reading input or writing output fails.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    mut output: W,
) -> crate::Result<()> {
    writeln!(output, "{HELP}\n")?;
    write!(output, "{}", render_session(session))?;
    prompt(&mut output)?;

    for line in input.lines() {
        let line = line.map_err(|source| Error::Io {
            operation: "read input".to_string(),
            source,
        })?;
        if line.trim().is_empty() {
            prompt(&mut output)?;
            continue;
        }

        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => writeln!(output, "{HELP}")?,
            Ok(Command::Event(event)) => {
                if session.dispatch(event) {
                    write!(output, "\n{}", render_session(session))?;
                } else {
                    writeln!(output, "Ignored: {event:?} is not allowed here")?;
                }
            }
            Err(e) => {
                warn!(input = %line.trim(), error = %e, "unparseable command");
                writeln!(output, "{e} (type 'help' for commands)")?;
            }
        }
        prompt(&mut output)?;
    }

    writeln!(output)?;
    info!(status = %session.status(), plies = session.game().cursor(), "play finished");
    Ok(())
}

fn prompt<W: Write>(output: &mut W) -> crate::Result<()> {
    write!(output, "> ")?;
    output.flush()?;
    Ok(())
}
