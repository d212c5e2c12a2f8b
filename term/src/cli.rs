use boomfield_core::{CellCount, Coord, GameConfig};
use clap::Parser;

/// Minesweeper in the terminal.
///
/// Move with h/j/k/l or the arrow keys, reveal with d or space, flag with f,
/// quit with q.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// What log level to use, logs go to stderr
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,

    /// Board width in cells
    #[arg(short = 'x', long, default_value_t = GameConfig::default().width)]
    pub width: Coord,

    /// Board height in cells
    #[arg(short = 'y', long, default_value_t = GameConfig::default().height)]
    pub height: Coord,

    /// Number of mines, must leave at least one safe cell
    #[arg(short, long, default_value_t = GameConfig::default().mines)]
    pub mines: CellCount,

    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,
}

impl Args {
    pub fn game_config(&self) -> boomfield_core::Result<GameConfig> {
        GameConfig::new(self.width, self.height, self.mines)
    }
}
