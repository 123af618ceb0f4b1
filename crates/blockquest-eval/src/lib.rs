//! BlockQuest tree-walking interpreter.
//!
//! Runs a block program against a level and returns the full trace of world
//! snapshots together with the scored outcome.
//!
//! ```text
//! [Block] → structure → [StructuredNode] → Evaluator → RunOutcome → aggregate → ExecutionResult
//! ```
//!
//! Runs are synchronous and always terminate: loops are count-bounded,
//! nesting is depth-bounded, and the step budget caps total work.

mod evaluator;
mod limits;
mod outcome;
mod trace;
pub mod world;

pub use evaluator::{Evaluator, RunOutcome};
pub use limits::{RunLimits, MAX_DEPTH, MAX_STEPS};
pub use outcome::{aggregate, ExecutionResult};
pub use trace::{ExecutionStep, StepAction};
pub use world::World;

use blockquest_parser::structure;
use blockquest_types::{Block, Level, StructuredNode};
use tracing::{debug, instrument};

/// Run a flat block list with the default budgets.
pub fn run(blocks: &[Block], level: &Level) -> ExecutionResult {
    run_with_limits(blocks, level, RunLimits::default())
}

/// Structure and run a flat block list.
#[instrument(skip_all, fields(level = level.id, blocks = blocks.len()))]
pub fn run_with_limits(blocks: &[Block], level: &Level, limits: RunLimits) -> ExecutionResult {
    let program = structure(blocks);
    run_structured(&program, level, limits)
}

/// Run an already structured program.
pub fn run_structured(
    program: &[StructuredNode],
    level: &Level,
    limits: RunLimits,
) -> ExecutionResult {
    let mut eval = Evaluator::new(level, limits);
    eval.exec_program(program);
    let result = aggregate(&level.grid, eval.finish());
    debug!(
        steps = result.steps.len(),
        total_steps = result.total_steps,
        reached_goal = result.reached_goal,
        perfect = result.perfect,
        error = ?result.error,
        "run finished"
    );
    result
}
