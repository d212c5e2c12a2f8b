use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

/// Running flag counts for one board.
///
/// `correct` is the number of flagged cells that hold a mine; the game is won
/// once it reaches the board's mine count.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagTracker {
    correct: Saturating<CellCount>,
    placed: Saturating<CellCount>,
}

impl FlagTracker {
    pub fn correct_count(&self) -> CellCount {
        self.correct.0
    }

    pub fn placed_count(&self) -> CellCount {
        self.placed.0
    }

    /// Flags or unflags a closed cell. Open cells are left alone.
    pub fn toggle_flag(&mut self, board: &mut Board, index: CellIndex) -> Result<MarkOutcome> {
        let index = board.validate_index(index)?;
        let cell = board.cell_mut(index);

        if !cell.toggle_flag() {
            return Ok(MarkOutcome::NoChange);
        }

        if cell.is_flagged() {
            self.placed += 1;
            if cell.is_mine() {
                self.correct += 1;
            }
        } else {
            self.placed -= 1;
            if cell.is_mine() {
                self.correct -= 1;
            }
        }
        log::debug!(
            "Flag at {:?} now {}, correct flags: {}",
            board.coords(index),
            board[index].is_flagged(),
            self.correct
        );

        Ok(MarkOutcome::Changed)
    }

    /// Accounts for flags that a reveal dropped from `unflagged`.
    pub fn release(&mut self, board: &Board, unflagged: &[CellIndex]) {
        for &index in unflagged {
            self.placed -= 1;
            if board[index].is_mine() {
                self.correct -= 1;
            }
        }
    }
}
