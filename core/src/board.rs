use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Grid of cells, row-major, with the mine count fixed at creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoardParts")]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
}

/// Unchecked form of [`Board`] as it comes out of a deserializer.
#[derive(Deserialize)]
struct BoardParts {
    cells: Array2<Cell>,
    mine_count: CellCount,
}

impl TryFrom<BoardParts> for Board {
    type Error = GameError;

    fn try_from(BoardParts { cells, mine_count }: BoardParts) -> Result<Self> {
        let (rows, cols) = cells.dim();
        let (Ok(height), Ok(width)) = (Coord::try_from(rows), Coord::try_from(cols)) else {
            return Err(GameError::InvalidBoardShape);
        };
        GameConfig::new(width, height, mine_count)?;

        let board = Self { cells, mine_count };
        if board.mine_indices().count() != usize::from(mine_count) {
            return Err(GameError::InvalidBoardShape);
        }
        for index in 0..board.len() {
            let cell = board[index];
            let mines_around = board
                .iter_neighbors(index)
                .filter(|&neighbor| board[neighbor].is_mine())
                .count();
            let bad_count =
                !cell.is_mine() && usize::from(cell.adjacent_mine_count()) != mines_around;
            if bad_count || (cell.is_open() && cell.is_flagged()) {
                return Err(GameError::InvalidBoardShape);
            }
        }
        Ok(board)
    }
}

impl Board {
    /// All cells closed, safe and unflagged.
    pub(crate) fn empty(config: GameConfig) -> Self {
        let shape = (usize::from(config.height), usize::from(config.width));
        Self {
            cells: Array2::default(shape),
            mine_count: 0,
        }
    }

    /// Builds a board with mines at exactly the given indices. Duplicate
    /// indices are counted once.
    pub fn from_mine_indices(width: Coord, height: Coord, mines: &[CellIndex]) -> Result<Self> {
        let mut board = Self::empty(GameConfig::new(width, height, 0)?);

        for &index in mines {
            let index = board.validate_index(index)?;
            board.place_mine(index);
        }
        board.config().validate()?;

        board.compute_adjacent_counts();
        Ok(board)
    }

    /// Marks `index` as a mine. Returns `false` if it already was one.
    pub(crate) fn place_mine(&mut self, index: CellIndex) -> bool {
        let cell = self.cell_mut(index);
        if cell.is_mine() {
            return false;
        }
        cell.set_mine();
        self.mine_count += 1;
        true
    }

    /// Fills in the adjacency count of every safe cell. Must run once, after
    /// all mines are placed.
    pub(crate) fn compute_adjacent_counts(&mut self) {
        for index in 0..self.len() {
            if self[index].is_mine() {
                continue;
            }
            for neighbor in self.iter_neighbors(index) {
                if self[neighbor].is_mine() {
                    self.cell_mut(index).increment_adjacent_count();
                }
            }
        }
    }

    pub fn config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.width(), self.height(), self.mine_count)
    }

    pub fn width(&self) -> Coord {
        self.dim().1
    }

    pub fn height(&self) -> Coord {
        self.dim().0
    }

    /// `(height, width)`.
    fn dim(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        // dimensions are checked to fit `Coord` in `empty` and `TryFrom<BoardParts>`
        (rows as Coord, cols as Coord)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.width(), self.height())
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn validate_index(&self, index: CellIndex) -> Result<CellIndex> {
        if index < self.len() {
            Ok(index)
        } else {
            Err(GameError::InvalidIndex)
        }
    }

    /// `(row, col)` of a valid index.
    pub fn coords(&self, index: CellIndex) -> Coord2 {
        let [row, col] = self.nd_index(index);
        (row as Coord, col as Coord)
    }

    pub fn index_of(&self, (row, col): Coord2) -> CellIndex {
        usize::from(row) * usize::from(self.width()) + usize::from(col)
    }

    pub fn get(&self, index: CellIndex) -> Option<Cell> {
        self.validate_index(index).ok().map(|index| self[index])
    }

    pub(crate) fn cell_mut(&mut self, index: CellIndex) -> &mut Cell {
        let nd_index = self.nd_index(index);
        &mut self.cells[nd_index]
    }

    fn nd_index(&self, index: CellIndex) -> [usize; 2] {
        let width = usize::from(self.width());
        [index / width, index % width]
    }

    pub fn iter_neighbors(&self, index: CellIndex) -> NeighborIter {
        NeighborIter::new(self.coords(index), self.dim())
    }

    /// Cells in flat index order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    pub fn mine_indices(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_mine())
            .map(|(index, _)| index)
    }

    pub fn any_mine_open(&self) -> bool {
        self.iter().any(|cell| cell.is_mine() && cell.is_open())
    }
}

impl Index<CellIndex> for Board {
    type Output = Cell;

    fn index(&self, index: CellIndex) -> &Self::Output {
        &self.cells[self.nd_index(index)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn single_center_mine_gives_border_count_one() {
        let board = Board::from_mine_indices(3, 3, &[4]).unwrap();

        assert_eq!(board.mine_count(), 1);
        for index in [0, 1, 2, 3, 5, 6, 7, 8] {
            assert_eq!(board[index].adjacent_mine_count(), 1, "cell {index}");
        }
        assert!(board[4].is_mine());
    }

    #[test]
    fn counts_respect_row_boundaries() {
        // 4 wide, 2 tall; mine at the end of the first row
        let board = Board::from_mine_indices(4, 2, &[3]).unwrap();

        assert_eq!(board[2].adjacent_mine_count(), 1);
        assert_eq!(board[6].adjacent_mine_count(), 1);
        assert_eq!(board[7].adjacent_mine_count(), 1);
        // first cell of the second row is not next to the end of the first
        assert_eq!(board[4].adjacent_mine_count(), 0);
        assert_eq!(board[0].adjacent_mine_count(), 0);
    }

    #[test]
    fn duplicate_mine_indices_count_once() {
        let board = Board::from_mine_indices(2, 2, &[0, 0]).unwrap();

        assert_eq!(board.mine_count(), 1);
        assert_eq!(board.mine_indices().collect::<Vec<_>>(), [0]);
    }

    #[test]
    fn rejects_out_of_range_and_full_layouts() {
        assert_eq!(
            Board::from_mine_indices(2, 2, &[4]),
            Err(GameError::InvalidIndex)
        );
        assert_eq!(
            Board::from_mine_indices(1, 2, &[0, 1]),
            Err(GameError::InvalidConfiguration(ConfigIssue::TooManyMines {
                mines: 2,
                cells: 2
            }))
        );
    }

    #[test]
    fn flat_index_round_trips_through_coords() {
        let board = Board::from_mine_indices(5, 3, &[]).unwrap();

        assert_eq!(board.width(), 5);
        assert_eq!(board.height(), 3);
        assert_eq!(board.coords(7), (1, 2));
        assert_eq!(board.index_of((2, 4)), 14);
        assert_eq!(board.get(15), None);
    }

    fn parts(board: &Board) -> BoardParts {
        BoardParts {
            cells: board.cells.clone(),
            mine_count: board.mine_count,
        }
    }

    #[test]
    fn consistent_parts_rebuild_the_board() {
        let mut board = Board::from_mine_indices(4, 3, &[1, 10]).unwrap();
        board.reveal(8).unwrap();

        assert_eq!(Board::try_from(parts(&board)), Ok(board));
    }

    #[test]
    fn parts_wider_than_a_coord_are_rejected() {
        let parts = BoardParts {
            cells: Array2::default((1, 300)),
            mine_count: 0,
        };

        assert_eq!(Board::try_from(parts), Err(GameError::InvalidBoardShape));
    }

    #[test]
    fn parts_with_wrong_mine_count_are_rejected() {
        let board = Board::from_mine_indices(3, 3, &[4]).unwrap();
        let mut parts = parts(&board);
        parts.mine_count = 2;

        assert_eq!(Board::try_from(parts), Err(GameError::InvalidBoardShape));
    }

    #[test]
    fn parts_with_stale_adjacency_are_rejected() {
        let board = Board::from_mine_indices(3, 3, &[4]).unwrap();
        let mut parts = parts(&board);
        parts.cells[[0, 0]].increment_adjacent_count();

        assert_eq!(Board::try_from(parts), Err(GameError::InvalidBoardShape));
    }

    #[test]
    fn empty_parts_are_an_invalid_configuration() {
        let parts = BoardParts {
            cells: Array2::default((0, 4)),
            mine_count: 0,
        };

        assert_eq!(
            Board::try_from(parts),
            Err(GameError::InvalidConfiguration(ConfigIssue::EmptyBoard))
        );
    }
}
