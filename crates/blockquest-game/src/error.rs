//! Errors raised by the game layer.

use blockquest_levels::LevelError;
use blockquest_types::BlockKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// The program already holds the maximum number of blocks.
    #[error("program is full ({max} blocks)")]
    ProgramFull { max: usize },
    #[error("block index {index} out of range for {len} blocks")]
    IndexOutOfRange { index: usize, len: usize },
    /// Only `repeat` blocks carry a parameter.
    #[error("'{0}' blocks take no parameter")]
    NoParam(BlockKind),
    #[error(transparent)]
    Level(#[from] LevelError),
    #[error("progress data: {0}")]
    Json(#[from] serde_json::Error),
}

pub type GameResult<T> = Result<T, GameError>;
