use anyhow::Context;
use boomfield_core::{GameSession, GameStatus, RandomBoardGenerator};
use clap::Parser;

mod cli;
mod input;
mod render;
mod terminal;

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = args.game_config().context("Invalid board settings")?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("Starting {:?} with seed {}", config, seed);

    let mut session = GameSession::new(config, RandomBoardGenerator::new(seed))
        .context("Could not generate board")?;
    terminal::run(&mut session)?;

    match session.status() {
        GameStatus::Won => println!("You win! (seed {seed})"),
        GameStatus::Lost => println!("Boom. (seed {seed})"),
        GameStatus::InProgress => {}
    }
    Ok(())
}
