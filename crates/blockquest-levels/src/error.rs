//! Level lookup errors.

use blockquest_types::GridError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    /// No catalog entry and no generator covers this id.
    #[error("level {0} not found")]
    NotFound(u32),
    /// A built-in map failed to parse.
    #[error("invalid level map: {0}")]
    Grid(#[from] GridError),
}

pub type LevelResult<T> = Result<T, LevelError>;
