use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(ConfigIssue),
    #[error("Invalid cell index")]
    InvalidIndex,
    #[error("Board shape or contents are inconsistent")]
    InvalidBoardShape,
}

/// Reason a board configuration was rejected.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigIssue {
    #[error("board dimensions must be positive")]
    EmptyBoard,
    #[error("{mines} mines do not fit in {cells} cells")]
    TooManyMines { mines: CellCount, cells: CellCount },
}

impl From<ConfigIssue> for GameError {
    fn from(issue: ConfigIssue) -> Self {
        Self::InvalidConfiguration(issue)
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
