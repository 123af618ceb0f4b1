//! Outcome aggregation: totals, the `perfect` flag, and trace fingerprints.

use crate::evaluator::RunOutcome;
use crate::trace::ExecutionStep;
use blockquest_types::{AgentState, CellType, Grid, RunError};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Everything a caller needs to animate and score a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Never empty; `steps[0]` is the `start` snapshot.
    pub steps: Vec<ExecutionStep>,
    pub reached_goal: bool,
    pub stars_collected: u32,
    pub gems_collected: u32,
    /// Stars on the original level grid.
    pub total_stars: u32,
    /// Gems on the original level grid.
    pub total_gems: u32,
    /// Moves plus bumps.
    pub total_steps: u32,
    pub error: Option<RunError>,
    pub perfect: bool,
}

/// Combine interpreter counters with totals counted on the untouched grid.
///
/// `original` must be the level's own grid, not the depleted live copy.
pub fn aggregate(original: &Grid, outcome: RunOutcome) -> ExecutionResult {
    let total_stars = original.count(CellType::Star) as u32;
    let total_gems = original.count(CellType::Gem) as u32;
    let perfect = outcome.reached_goal
        && outcome.stars_collected == total_stars
        && outcome.gems_collected == total_gems;

    ExecutionResult {
        steps: outcome.steps,
        reached_goal: outcome.reached_goal,
        stars_collected: outcome.stars_collected,
        gems_collected: outcome.gems_collected,
        total_stars,
        total_gems,
        total_steps: outcome.total_steps,
        error: outcome.error,
        perfect,
    }
}

impl ExecutionResult {
    /// The last recorded snapshot.
    pub fn final_step(&self) -> Option<&ExecutionStep> {
        self.steps.last()
    }

    pub fn final_agent(&self) -> Option<AgentState> {
        self.final_step().map(|s| s.agent)
    }

    pub fn collected_all_stars(&self) -> bool {
        self.stars_collected == self.total_stars
    }

    /// Hex SHA-256 over the trace and result flags.
    ///
    /// Two runs of the same program on the same level always produce the
    /// same digest, which lets a stored solution be verified by replay.
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        for step in &self.steps {
            hasher.update(step.agent.row.to_le_bytes());
            hasher.update(step.agent.col.to_le_bytes());
            hasher.update([step.agent.direction.index()]);
            for row in step.grid.iter_rows() {
                hasher.update((row.len() as u32).to_le_bytes());
                hasher.update(row.iter().map(|c| c.code()).collect::<Vec<_>>());
            }
            hasher.update(step.stars_collected.to_le_bytes());
            hasher.update(step.gems_collected.to_le_bytes());
            hasher.update(step.action.as_str().as_bytes());
            hasher.update([0u8]);
        }
        hasher.update([
            u8::from(self.reached_goal),
            u8::from(self.perfect),
            u8::from(self.error.is_some()),
        ]);
        hasher.update(self.total_steps.to_le_bytes());
        format!("{:x}", hasher.finalize())
    }
}
