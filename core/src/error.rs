use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board must have exactly {expected} cells, got {actual}")]
    InvalidCellCount { expected: usize, actual: usize },
    #[error("Cell id {0} appears more than once")]
    DuplicateCellId(u8),
    #[error("Cells do not match the board reward distribution")]
    InvalidComposition,
    #[error("Cell {0} is already revealed, boards must start hidden")]
    CellAlreadyRevealed(u8),
}

pub type Result<T> = core::result::Result<T, GameError>;
