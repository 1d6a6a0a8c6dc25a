//! Error types shared by every engine.

use crate::engine::Variant;

/// Why a move was rejected. A rejected move never changes the game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("point ({0}, {1}) is off the board")]
    OutOfBounds(usize, usize),

    #[error("point is not empty")]
    Occupied,

    #[error("suicide")]
    Suicide,

    #[error("retakes ko")]
    Ko,

    #[error("no opponent stones are bracketed")]
    NoBracket,
}

/// Coarse classification of a [`GameError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidMove,
    IllegalOperation,
    Construction,
    StateCorruption,
}

/// Errors returned by game operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("illegal move: {0}")]
    InvalidMove(#[from] MoveError),

    #[error("nothing to undo")]
    NothingToUndo,

    #[error("passing is not allowed in {0} right now")]
    PassNotAllowed(Variant),

    #[error("the game is over")]
    GameOver,

    #[error("no move available")]
    NoMoveAvailable,

    #[error("board size must be between 8 and 19 (got {0})")]
    InvalidSize(usize),

    #[error("corrupt snapshot: {0}")]
    Corrupt(String),
}

impl GameError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::InvalidMove(_) => ErrorKind::InvalidMove,
            GameError::NothingToUndo
            | GameError::PassNotAllowed(_)
            | GameError::GameOver
            | GameError::NoMoveAvailable => ErrorKind::IllegalOperation,
            GameError::InvalidSize(_) => ErrorKind::Construction,
            GameError::Corrupt(_) => ErrorKind::StateCorruption,
        }
    }
}
