//! Subcommands of the `tictactoe` binary

pub mod play;
pub mod random;
pub mod replay;
