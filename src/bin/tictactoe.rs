//! Tic-Tac-Toe with move history on the terminal

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Tic-Tac-Toe with move history and time travel", long_about = None)]
struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game
    Play(tictactoe_history::cli::commands::play::PlayArgs),

    /// Replay a list of moves and print the result
    Replay(tictactoe_history::cli::commands::replay::ReplayArgs),

    /// Play random games and tally the results
    Random(tictactoe_history::cli::commands::random::RandomArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Play(args) => tictactoe_history::cli::commands::play::execute(args),
        Commands::Replay(args) => tictactoe_history::cli::commands::replay::execute(args),
        Commands::Random(args) => tictactoe_history::cli::commands::random::execute(args),
    }
}
