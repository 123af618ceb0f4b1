//! Star rating of a finished run.

use blockquest_eval::ExecutionResult;
use serde::{Deserialize, Serialize};

/// Most stars a level can award.
pub const MAX_RATING: u8 = 3;

/// 0 stars without the goal. Otherwise one for finishing, one for taking
/// every star and one for a perfect run, capped at three.
///
/// A perfect run always takes every star, so "perfect" and "3 stars" mean
/// the same thing.
pub fn star_rating(result: &ExecutionResult) -> u8 {
    if !result.reached_goal {
        return 0;
    }
    let bonus = u8::from(result.collected_all_stars()) + u8::from(result.perfect);
    (1 + bonus).min(MAX_RATING)
}

/// What a finished level contributes to progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelOutcome {
    pub level_id: u32,
    pub stars: u8,
    pub perfect: bool,
}

impl LevelOutcome {
    /// `None` when the goal was not reached.
    pub fn from_result(level_id: u32, result: &ExecutionResult) -> Option<Self> {
        result.reached_goal.then(|| Self {
            level_id,
            stars: star_rating(result),
            perfect: result.perfect,
        })
    }
}
