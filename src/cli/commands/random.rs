//! Random command - Self-play with uniformly random moves

use anyhow::{Result, bail};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use tracing::info;

use crate::{
    cli::output::{print_kv, print_section, render_board},
    simulation::{Tally, random_game},
    tictactoe::{HistoryOrder, Status, history_entries},
};

#[derive(Parser, Debug)]
#[command(about = "Play random games and tally the results")]
pub struct RandomArgs {
    /// Number of games to play
    #[arg(long, short = 'g', default_value_t = 1)]
    pub games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the final board and move list of every game
    #[arg(long)]
    pub show_games: bool,
}

pub fn execute(args: RandomArgs) -> Result<()> {
    if args.games == 0 {
        bail!("--games must be at least 1");
    }

    let seed = args.seed.unwrap_or_else(rand::random::<u64>);
    let mut rng = StdRng::seed_from_u64(seed);
    info!(seed, games = args.games, "starting random self-play");

    let mut tally = Tally::default();
    for index in 0..args.games {
        let game = random_game(&mut rng);
        let status = Status::of(&game);
        tally.record(status);

        if args.show_games || args.games == 1 {
            let snapshot = game.current();
            print_section(&format!("Game {}", index + 1));
            print!("{}", render_board(&snapshot.board, snapshot.winner.as_ref()));
            println!("{status}");
            for entry in history_entries(&game, HistoryOrder::Ascending) {
                println!("  {entry}");
            }
        }
    }

    print_section("Results");
    print_kv("Seed", &seed.to_string());
    print_kv("Games", &tally.total().to_string());
    print_kv("X wins", &tally.x_wins.to_string());
    print_kv("O wins", &tally.o_wins.to_string());
    print_kv("Draws", &tally.draws.to_string());
    Ok(())
}
