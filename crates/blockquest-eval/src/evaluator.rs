//! Tree-walking interpreter.

use crate::limits::RunLimits;
use crate::trace::{ExecutionStep, StepAction};
use crate::world::World;
use blockquest_types::{
    AgentState, BlockKind, CellType, Level, Predicate, RunError, StructuredNode, DEFAULT_REPEAT,
};
use tracing::{trace, warn};

/// Final counters of one run, before outcome aggregation.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub steps: Vec<ExecutionStep>,
    pub reached_goal: bool,
    pub stars_collected: u32,
    pub gems_collected: u32,
    pub total_steps: u32,
    pub error: Option<RunError>,
}

/// The interpreter state for a single run.
///
/// Holds a private copy of the level grid; the level passed to
/// [`Evaluator::new`] is never modified.
pub struct Evaluator {
    /// Live grid, depleted as collectibles are taken.
    world: World,
    /// Current agent pose. Movement never changes `direction`.
    agent: AgentState,
    /// Step and nesting budgets.
    limits: RunLimits,
    stars_collected: u32,
    gems_collected: u32,
    /// Moves plus bumps so far.
    total_steps: u32,
    /// Sticky once set.
    reached_goal: bool,
    /// First budget failure; short-circuits everything after it.
    error: Option<RunError>,
    /// Trace, starting with the `start` snapshot.
    steps: Vec<ExecutionStep>,
}

impl Evaluator {
    /// Set up a run on a fresh copy of the level grid and record the
    /// `start` snapshot.
    pub fn new(level: &Level, limits: RunLimits) -> Self {
        let mut eval = Self {
            world: World::new(level.grid.clone()),
            agent: level.start_state(),
            limits,
            stars_collected: 0,
            gems_collected: 0,
            total_steps: 0,
            reached_goal: false,
            error: None,
            steps: Vec::new(),
        };
        eval.record(StepAction::Start);
        eval
    }

    /// Execute a top-level program.
    pub fn exec_program(&mut self, program: &[StructuredNode]) {
        self.exec_list(program, 0);
    }

    /// Hand back the trace and counters.
    pub fn finish(self) -> RunOutcome {
        RunOutcome {
            steps: self.steps,
            reached_goal: self.reached_goal,
            stars_collected: self.stars_collected,
            gems_collected: self.gems_collected,
            total_steps: self.total_steps,
            error: self.error,
        }
    }

    // ══════════════════════════════════════════════════════════════════════
    // Block lists
    // ══════════════════════════════════════════════════════════════════════

    fn exec_list(&mut self, nodes: &[StructuredNode], depth: u32) {
        if depth > self.limits.max_depth {
            self.fail(RunError::TooMuchNesting);
            return;
        }
        for node in nodes {
            if self.error.is_some() {
                return;
            }
            if self.total_steps > self.limits.max_steps {
                self.fail(RunError::TooManySteps);
                return;
            }
            self.exec_node(node, depth);
        }
    }

    fn exec_node(&mut self, node: &StructuredNode, depth: u32) {
        let kind = node.kind();
        if let Some(offset) = kind.offset() {
            self.try_move(kind, offset);
        } else if kind.is_loop_open() {
            self.exec_loop(node, depth);
        } else if let Some(predicate) = kind.predicate() {
            if self.test(predicate) {
                self.exec_list(&node.children, depth + 1);
            } else if let Some(else_children) = &node.else_children {
                self.exec_list(else_children, depth + 1);
            }
        }
        // Stray markers and unknown blocks do nothing.
    }

    fn exec_loop(&mut self, node: &StructuredNode, depth: u32) {
        let times = node
            .block
            .param
            .filter(|&p| p > 0)
            .unwrap_or(DEFAULT_REPEAT);
        for _ in 0..times {
            self.exec_list(&node.children, depth + 1);
            if self.error.is_some() {
                return;
            }
        }
    }

    /// Evaluated once, when the conditional is reached.
    fn test(&self, predicate: Predicate) -> bool {
        match predicate {
            Predicate::WallAhead => self.world.wall_ahead(&self.agent),
            Predicate::PathAhead => self.world.path_ahead(&self.agent),
            Predicate::OnStar => {
                self.world.cell_at(self.agent.row, self.agent.col) == CellType::Star
            }
        }
    }

    // ══════════════════════════════════════════════════════════════════════
    // Movement
    // ══════════════════════════════════════════════════════════════════════

    /// Attempt one move. A bump costs a step just like a move does.
    fn try_move(&mut self, kind: BlockKind, (dr, dc): (i32, i32)) {
        let (row, col) = (self.agent.row + dr, self.agent.col + dc);
        self.total_steps += 1;

        let action = match StepAction::for_move(kind) {
            Some(action) if self.world.walkable(row, col) => {
                self.agent.row = row;
                self.agent.col = col;
                self.arrive();
                action
            }
            _ => StepAction::Bump,
        };
        self.record(action);
    }

    /// Collect whatever is under the agent and check for the goal.
    fn arrive(&mut self) {
        let (row, col) = (self.agent.row, self.agent.col);
        match self.world.take_collectible(row, col) {
            Some(CellType::Star) => self.stars_collected += 1,
            Some(CellType::Gem) => self.gems_collected += 1,
            _ => {}
        }
        if self.world.cell_at(row, col) == CellType::Goal {
            self.reached_goal = true;
        }
    }

    fn record(&mut self, action: StepAction) {
        trace!(
            step = self.steps.len(),
            %action,
            row = self.agent.row,
            col = self.agent.col,
            "step"
        );
        self.steps.push(ExecutionStep {
            agent: self.agent,
            grid: self.world.snapshot(),
            stars_collected: self.stars_collected,
            gems_collected: self.gems_collected,
            action,
        });
    }

    fn fail(&mut self, error: RunError) {
        if self.error.is_none() {
            warn!(%error, total_steps = self.total_steps, "run aborted");
            self.error = Some(error);
        }
    }
}
