use alloc::collections::VecDeque;

use crate::*;

impl Board {
    /// Opens the cell at `index`.
    ///
    /// A zero-count cell cascades breadth-first through its zero-count
    /// neighbors, stopping at the first ring of non-zero cells. Opening a
    /// mine opens every mine on the board and yields
    /// [`RevealOutcome::Lost`]. An already open cell yields
    /// [`RevealOutcome::NoChange`].
    ///
    /// Flags on opened cells are dropped and listed in
    /// [`RevealedCells::unflagged`] so flag counts can be kept in sync.
    pub fn reveal(&mut self, index: CellIndex) -> Result<RevealOutcome> {
        let index = self.validate_index(index)?;
        if self[index].is_open() {
            return Ok(RevealOutcome::NoChange);
        }

        let mut revealed = RevealedCells::default();
        self.open_cell(index, &mut revealed);

        if self[index].is_mine() {
            self.open_all_mines(&mut revealed);
            log::debug!(
                "Hit mine at {:?}, opened {} mines",
                self.coords(index),
                revealed.opened.len()
            );
            return Ok(RevealOutcome::Lost(revealed));
        }

        let count = self[index].adjacent_mine_count();
        log::debug!("Open cell at {:?}, mine count: {}", self.coords(index), count);
        if count == 0 {
            self.cascade_from(index, &mut revealed);
        }

        Ok(RevealOutcome::Revealed(revealed))
    }

    fn open_cell(&mut self, index: CellIndex, revealed: &mut RevealedCells) {
        if self.cell_mut(index).mark_open() {
            revealed.unflagged.push(index);
        }
        revealed.opened.push(index);
    }

    /// `origin` must already be open with a zero count. Every cell is opened
    /// before it is queued, so `is_open` doubles as the visited set.
    fn cascade_from(&mut self, origin: CellIndex, revealed: &mut RevealedCells) {
        let mut to_visit = VecDeque::from([origin]);

        while let Some(visit_index) = to_visit.pop_front() {
            for neighbor in self.iter_neighbors(visit_index) {
                if self[neighbor].is_open() {
                    continue;
                }
                debug_assert!(!self[neighbor].is_mine(), "zero cell next to a mine");

                self.open_cell(neighbor, revealed);
                let neighbor_count = self[neighbor].adjacent_mine_count();
                log::trace!(
                    "Flood opened cell at {:?}, mine count: {}",
                    self.coords(neighbor),
                    neighbor_count
                );

                if neighbor_count == 0 {
                    to_visit.push_back(neighbor);
                }
            }
        }
    }

    fn open_all_mines(&mut self, revealed: &mut RevealedCells) {
        for index in 0..self.len() {
            let cell = self[index];
            if cell.is_mine() && !cell.is_open() {
                self.open_cell(index, revealed);
            }
        }
    }
}
