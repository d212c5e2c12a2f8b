use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    /// Every mine carries a flag
    Won,
    /// A mine was opened
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One game from start to finish: the board, the cursor and the flag counts.
///
/// Finished games are not guarded: callers are expected to stop sending
/// reveals and flags once [`GameSession::status`] is final.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    flags: FlagTracker,
    selected: CellIndex,
    detonated: Option<CellIndex>,
}

impl GameSession {
    pub fn new(config: GameConfig, generator: impl BoardGenerator) -> Result<Self> {
        Ok(Self::from_board(generator.generate(config)?))
    }

    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            flags: FlagTracker::default(),
            selected: 0,
            detonated: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> GameConfig {
        self.board.config()
    }

    pub fn status(&self) -> GameStatus {
        if self.board.any_mine_open() {
            GameStatus::Lost
        } else if self.flags.correct_count() == self.board.mine_count() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    pub fn selected(&self) -> CellIndex {
        self.selected
    }

    pub fn select(&mut self, index: CellIndex) -> Result<()> {
        self.selected = self.board.validate_index(index)?;
        Ok(())
    }

    /// Moves the cursor by whole rows and columns over the flat index,
    /// saturating at the first and last cell instead of wrapping.
    pub fn move_selection(&mut self, delta_row: isize, delta_col: isize) {
        let width = isize::from(self.board.width());
        let last = self.board.len().saturating_sub(1);
        let target = (self.selected as isize)
            .saturating_add(delta_row.saturating_mul(width))
            .saturating_add(delta_col);

        self.selected = usize::try_from(target).map_or(0, |target| target.min(last));
    }

    pub fn reveal(&mut self, index: CellIndex) -> Result<RevealOutcome> {
        self.warn_if_finished("reveal");
        let outcome = self.board.reveal(index)?;

        if let Some(cells) = outcome.cells() {
            self.flags.release(&self.board, &cells.unflagged);
        }
        if outcome.is_lost() {
            self.detonated.get_or_insert(index);
        }
        Ok(outcome)
    }

    pub fn reveal_selected(&mut self) -> Result<RevealOutcome> {
        self.reveal(self.selected)
    }

    pub fn toggle_flag(&mut self, index: CellIndex) -> Result<MarkOutcome> {
        self.warn_if_finished("flag");
        self.flags.toggle_flag(&mut self.board, index)
    }

    pub fn flag_selected(&mut self) -> Result<MarkOutcome> {
        self.toggle_flag(self.selected)
    }

    pub fn correct_flag_count(&self) -> CellCount {
        self.flags.correct_count()
    }

    pub fn placed_flag_count(&self) -> CellCount {
        self.flags.placed_count()
    }

    /// Mines minus placed flags; negative when the player over-flags.
    pub fn mines_left(&self) -> isize {
        (self.board.mine_count() as isize) - (self.flags.placed_count() as isize)
    }

    /// The mine whose reveal lost the game.
    pub fn detonated(&self) -> Option<CellIndex> {
        self.detonated
    }

    pub fn cell_view(&self, index: CellIndex) -> Option<CellView> {
        self.board.get(index).map(Cell::view)
    }

    fn warn_if_finished(&self, action: &str) {
        let status = self.status();
        if status.is_finished() {
            log::warn!("{} dispatched after game ended ({:?})", action, status);
        }
    }
}
