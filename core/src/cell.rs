use serde::{Deserialize, Serialize};

/// State of a single board position.
///
/// `mine` and the adjacency count are fixed once the board is generated,
/// `open` only ever goes from `false` to `true`, and a flag can only be held
/// by a closed cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    mine: bool,
    open: bool,
    flagged: bool,
    adjacent_mines: u8,
}

impl Cell {
    pub const fn is_mine(self) -> bool {
        self.mine
    }

    pub const fn is_open(self) -> bool {
        self.open
    }

    pub const fn is_flagged(self) -> bool {
        self.flagged
    }

    /// Number of mines among the Moore neighbors. Not meaningful for mines.
    pub const fn adjacent_mine_count(self) -> u8 {
        self.adjacent_mines
    }

    pub fn set_mine(&mut self) {
        self.mine = true;
    }

    /// Opens the cell and drops its flag. Returns whether a flag was dropped.
    pub fn mark_open(&mut self) -> bool {
        let was_flagged = self.flagged;
        self.open = true;
        self.flagged = false;
        was_flagged
    }

    /// Flips the flag of a closed cell. Returns `false` without touching an
    /// open cell.
    pub fn toggle_flag(&mut self) -> bool {
        if self.open {
            return false;
        }
        self.flagged = !self.flagged;
        true
    }

    pub fn increment_adjacent_count(&mut self) {
        debug_assert!(self.adjacent_mines < 8, "a cell has at most 8 neighbors");
        self.adjacent_mines += 1;
    }

    pub const fn view(self) -> CellView {
        match (self.open, self.flagged, self.mine) {
            (false, false, _) => CellView::Hidden,
            (false, true, _) => CellView::Flagged,
            (true, _, true) => CellView::Mine,
            (true, _, false) => CellView::Revealed(self.adjacent_mines),
        }
    }
}

/// What a player is allowed to see of a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    #[default]
    Hidden,
    Flagged,
    Revealed(u8),
    Mine,
}
