//! Recorded world snapshots.

use blockquest_types::{AgentState, BlockKind, Grid};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What produced a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepAction {
    /// The pre-execution snapshot.
    Start,
    /// A movement into a non-walkable cell; the agent stayed put.
    Bump,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
}

impl StepAction {
    /// The action recorded for a successful move instruction.
    pub fn for_move(kind: BlockKind) -> Option<Self> {
        match kind {
            BlockKind::MoveUp => Some(Self::MoveUp),
            BlockKind::MoveDown => Some(Self::MoveDown),
            BlockKind::MoveLeft => Some(Self::MoveLeft),
            BlockKind::MoveRight => Some(Self::MoveRight),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Bump => "bump",
            Self::MoveUp => "move_up",
            Self::MoveDown => "move_down",
            Self::MoveLeft => "move_left",
            Self::MoveRight => "move_right",
        }
    }
}

impl fmt::Display for StepAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One frame of the trace.
///
/// `grid` is an independent copy; later steps never alias earlier ones, so
/// any step can be read at any time without re-running the program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionStep {
    #[serde(flatten)]
    pub agent: AgentState,
    pub grid: Grid,
    pub stars_collected: u32,
    pub gems_collected: u32,
    pub action: StepAction,
}
