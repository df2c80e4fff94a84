use clap::Parser;
use quickmath::{config::GameConfig, game::Game, random::StdRandom};
use std::{error::Error, io};
use tracing_subscriber::EnvFilter;

/// console arithmetic quiz with timed answers
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Answer randomly generated addition, subtraction, multiplication and division questions. Every answer is timed and kept in a history for the session; choose 0 in the main menu to view it or to quit."
)]
pub struct Cli {
    /// seed the question generator to replay the same sequence of questions
    #[clap(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Logs go to stderr; stdout carries the game itself.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig::with_seed(cli.seed);
    let rng = match config.seed {
        Some(seed) => StdRandom::seeded(seed),
        None => StdRandom::new(),
    };

    let stdin = io::stdin();
    let mut game = Game::new(rng, stdin.lock(), io::stdout().lock(), config);
    game.run()?;

    Ok(())
}
