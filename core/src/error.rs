use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board dimensions must be positive")]
    EmptyBoard,
    #[error("Alive probability must be between 0 and 100")]
    InvalidProbability,
}

pub type Result<T> = core::result::Result<T, BoardError>;
