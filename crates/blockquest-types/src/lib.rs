//! Shared types for BlockQuest.
//!
//! This crate defines the instruction blocks authored in the editor, the
//! structured program tree produced by the parser, grid cells, levels, and
//! the error types shared by every later stage.

mod block;
mod cell;
mod error;
mod level;

pub use block::{Block, BlockKind, Predicate, StructuredNode, DEFAULT_REPEAT};
pub use cell::{CellType, Grid};
pub use error::{GridError, InvalidDirection, RunError};
pub use level::{AgentState, Direction, Level};
