//! Execution budgets.

use serde::{Deserialize, Serialize};

/// Step budget used by [`RunLimits::default`].
pub const MAX_STEPS: u32 = 500;

/// Nesting budget used by [`RunLimits::default`].
pub const MAX_DEPTH: u32 = 20;

/// Resource ceilings for one run.
///
/// Missing fields fall back to the defaults when deserialized, so
/// `{"max_steps": 50}` is a valid override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunLimits {
    /// The run aborts once more than this many moves/bumps have happened.
    pub max_steps: u32,
    /// The run aborts when a block list nested deeper than this is entered.
    pub max_depth: u32,
}

impl Default for RunLimits {
    fn default() -> Self {
        Self {
            max_steps: MAX_STEPS,
            max_depth: MAX_DEPTH,
        }
    }
}
