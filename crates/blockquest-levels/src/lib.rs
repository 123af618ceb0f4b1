//! BlockQuest level content.
//!
//! Three sources of levels:
//!
//! - [`catalog`]: hand-authored levels of worlds 1 to 3, ids `1..=75`
//! - [`generator`]: seeded mazes for worlds 4 to 8, ids `76..=200`
//! - [`sandbox`]: player-painted free-play rooms

pub mod catalog;
mod error;
pub mod generator;
pub mod sandbox;

pub use catalog::{catalog_level, catalog_levels};
pub use error::{LevelError, LevelResult};
pub use generator::{generate, generate_maze, generate_world, world_for, Maze, WORLDS};
pub use sandbox::{find_start, paint, sandbox_grid, sandbox_level};

use blockquest_types::Level;

/// Number of levels across all eight worlds.
pub const TOTAL_LEVELS: u32 = 200;

/// Number of worlds.
pub const WORLD_COUNT: u32 = 8;

/// Resolve a level id to a playable level.
pub fn level(id: u32) -> LevelResult<Level> {
    if let Some(level) = catalog_level(id) {
        return level;
    }
    generate(id).ok_or(LevelError::NotFound(id))
}

/// Every level this crate can resolve, in id order.
pub fn all_levels() -> LevelResult<Vec<Level>> {
    let mut levels = catalog_levels()?;
    levels.extend(WORLDS.iter().flat_map(|w| generate_world(w.id)));
    Ok(levels)
}
