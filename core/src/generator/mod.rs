use crate::*;
pub use random::*;

mod random;

pub trait BoardGenerator {
    /// Builds a fresh board for `config`, failing with
    /// [`GameError::InvalidConfiguration`] when it cannot be satisfied.
    fn generate(self, config: GameConfig) -> Result<Board>;
}

/// Generates a `width` by `height` board with `mines` randomly placed mines.
pub fn generate(width: Coord, height: Coord, mines: CellCount, seed: u64) -> Result<Board> {
    RandomBoardGenerator::new(seed).generate(GameConfig::new(width, height, mines)?)
}
