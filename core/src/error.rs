use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board must be a non-empty square grid of at most 255 cells per side")]
    InvalidBoardShape,
    #[error("No simulated move left to undo")]
    NothingToUndo,
    #[error("Unknown strategy name")]
    UnknownStrategy,
}

pub type Result<T> = core::result::Result<T, GameError>;
