//! BlockQuest game layer.
//!
//! ```text
//! Session (edit blocks) → run → ExecutionResult → star_rating → LevelOutcome → Progress
//! ```
//!
//! Everything here is synchronous and in-memory. Animation and persistence
//! belong to the client.

mod error;
pub mod progress;
mod scoring;
mod session;

pub use error::{GameError, GameResult};
pub use progress::{
    world_of, BadgeDef, BadgeRule, EarnedBadge, Progress, ProgressSummary, Streak, BADGES,
    WORLD_THRESHOLDS,
};
pub use scoring::{star_rating, LevelOutcome, MAX_RATING};
pub use session::{indents, BlockIdGen, Session, MAX_BLOCKS, PARAM_MAX, PARAM_MIN};
