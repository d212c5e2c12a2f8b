//! Board engine for single-player minesweeper.
//!
//! The crate owns the rules only: mine placement, adjacency counts, the
//! reveal cascade, flag bookkeeping and the win/loss status of a
//! [`GameSession`]. Rendering and input are left to the caller.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use flags::*;
pub use generator::*;
pub use session::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod flags;
mod generator;
mod reveal;
mod session;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub width: Coord,
    pub height: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(width: Coord, height: Coord, mines: CellCount) -> Self {
        Self {
            width,
            height,
            mines,
        }
    }

    pub fn new(width: Coord, height: Coord, mines: CellCount) -> Result<Self> {
        Self::new_unchecked(width, height, mines).validate()
    }

    /// Checks that the board is non-empty and leaves at least one safe cell.
    pub fn validate(self) -> Result<Self> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigIssue::EmptyBoard.into());
        }
        let cells = self.total_cells();
        if self.mines >= cells {
            return Err(ConfigIssue::TooManyMines {
                mines: self.mines,
                cells,
            }
            .into());
        }
        Ok(self)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }

    pub const fn safe_cell_count(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(8, 8, 10)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

/// Cells touched by a single reveal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealedCells {
    /// Newly opened cells, in the order they were opened.
    pub opened: Vec<CellIndex>,
    /// Opened cells that carried a flag before they were opened.
    pub unflagged: Vec<CellIndex>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The cell was already open.
    NoChange,
    Revealed(RevealedCells),
    /// A mine was opened; every mine on the board is now open.
    Lost(RevealedCells),
}

impl RevealOutcome {
    pub const fn has_update(&self) -> bool {
        !matches!(self, Self::NoChange)
    }

    pub const fn is_lost(&self) -> bool {
        matches!(self, Self::Lost(_))
    }

    pub fn cells(&self) -> Option<&RevealedCells> {
        match self {
            Self::NoChange => None,
            Self::Revealed(cells) | Self::Lost(cells) => Some(cells),
        }
    }

    pub fn opened(&self) -> &[CellIndex] {
        match self.cells() {
            Some(cells) => &cells.opened,
            None => &[],
        }
    }
}
