use rand::{Rng, SeedableRng, rngs::SmallRng};

use super::*;

/// Uniform placement by rejection sampling: draw any index, keep it if it is
/// not already a mine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> Result<Board> {
        let config = config.validate()?;
        let total_cells = usize::from(config.total_cells());

        // sampling below only terminates while a safe cell remains
        debug_assert!(
            config.mines < config.total_cells(),
            "mine count must leave at least one safe cell"
        );

        let mut board = Board::empty(config);
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut draws: u32 = 0;

        while board.mine_count() < config.mines {
            let index = rng.random_range(0..total_cells);
            draws = draws.saturating_add(1);
            board.place_mine(index);
        }
        log::debug!(
            "Placed {} mines on {}x{} board in {} draws, seed {}",
            config.mines,
            config.width,
            config.height,
            draws,
            self.seed
        );

        board.compute_adjacent_counts();
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_mines_around(board: &Board, index: CellIndex) -> u8 {
        board
            .iter_neighbors(index)
            .filter(|&neighbor| board[neighbor].is_mine())
            .count()
            .try_into()
            .unwrap()
    }

    #[test]
    fn places_exact_mine_count() {
        for seed in 0..16 {
            let board = generate(8, 8, 10, seed).unwrap();

            assert_eq!(board.mine_count(), 10);
            assert_eq!(board.mine_indices().count(), 10);
        }
    }

    #[test]
    fn adjacency_counts_match_neighbors() {
        let board = generate(16, 9, 30, 7).unwrap();

        for index in 0..board.len() {
            if !board[index].is_mine() {
                assert_eq!(
                    board[index].adjacent_mine_count(),
                    count_mines_around(&board, index)
                );
            }
        }
    }

    #[test]
    fn same_seed_same_board() {
        let config = GameConfig::new(10, 10, 20).unwrap();

        let first = RandomBoardGenerator::new(42).generate(config).unwrap();
        let second = RandomBoardGenerator::new(42).generate(config).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn nearly_full_board_leaves_one_safe_cell() {
        let board = generate(3, 3, 8, 1).unwrap();

        let safe: alloc::vec::Vec<_> = (0..board.len()).filter(|&i| !board[i].is_mine()).collect();
        assert_eq!(safe.len(), 1);
    }

    #[test]
    fn invalid_configuration_is_rejected() {
        assert_eq!(
            generate(2, 2, 4, 0),
            Err(GameError::InvalidConfiguration(ConfigIssue::TooManyMines {
                mines: 4,
                cells: 4
            }))
        );
        assert_eq!(
            generate(0, 2, 0, 0),
            Err(GameError::InvalidConfiguration(ConfigIssue::EmptyBoard))
        );
    }

    #[test]
    fn zero_mines_is_allowed() {
        let board = generate(4, 4, 0, 3).unwrap();

        assert_eq!(board.mine_count(), 0);
        assert!(board.iter().all(|cell| cell.adjacent_mine_count() == 0));
    }
}
