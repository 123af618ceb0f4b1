//! Editor session: the block list a player is building for one level.

use crate::error::{GameError, GameResult};
use blockquest_eval::{run_with_limits, ExecutionResult, RunLimits};
use blockquest_levels::{level, sandbox_level};
use blockquest_types::{Block, BlockKind, Grid, Level};
use tracing::trace;

/// Most blocks a program may hold.
pub const MAX_BLOCKS: usize = 20;

/// Smallest parameter the editor allows.
pub const PARAM_MIN: u8 = 1;

/// Largest parameter the editor allows.
pub const PARAM_MAX: u8 = 9;

// ══════════════════════════════════════════════════════════════════════════════
// Block ids
// ══════════════════════════════════════════════════════════════════════════════

/// Hands out `<prefix>_<n>` ids with `n` strictly increasing.
#[derive(Debug, Clone)]
pub struct BlockIdGen {
    prefix: &'static str,
    last: u64,
}

impl BlockIdGen {
    /// Ids `block_1`, `block_2`, ...
    pub fn new() -> Self {
        Self::starting_after("block", 0)
    }

    /// The first id handed out is `<prefix>_<last + 1>`.
    pub fn starting_after(prefix: &'static str, last: u64) -> Self {
        Self { prefix, last }
    }

    pub fn next_id(&mut self) -> String {
        self.last += 1;
        format!("{}_{}", self.prefix, self.last)
    }
}

impl Default for BlockIdGen {
    fn default() -> Self {
        Self::new()
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Session
// ══════════════════════════════════════════════════════════════════════════════

/// A level plus the program being edited for it.
#[derive(Debug, Clone)]
pub struct Session {
    level: Level,
    blocks: Vec<Block>,
    ids: BlockIdGen,
    limits: RunLimits,
}

impl Session {
    pub fn new(level: Level) -> Self {
        Self {
            level,
            blocks: Vec::new(),
            ids: BlockIdGen::new(),
            limits: RunLimits::default(),
        }
    }

    /// Open a session on a built-in level.
    pub fn for_level(id: u32) -> GameResult<Self> {
        Ok(Self::new(level(id)?))
    }

    /// Open a session on a painted sandbox grid. Sandbox blocks are
    /// numbered `cblock_1001` onwards.
    pub fn sandbox(grid: Grid) -> Self {
        Self {
            ids: BlockIdGen::starting_after("cblock", 1000),
            ..Self::new(sandbox_level(grid))
        }
    }

    pub fn with_limits(mut self, limits: RunLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.blocks.len() >= MAX_BLOCKS
    }

    /// Append a block. `repeat` blocks start with a parameter of 2.
    pub fn add(&mut self, kind: BlockKind) -> GameResult<&Block> {
        if self.is_full() {
            return Err(GameError::ProgramFull { max: MAX_BLOCKS });
        }
        let block = Block {
            id: self.ids.next_id(),
            kind,
            param: kind.default_param(),
        };
        trace!(id = %block.id, %kind, "add block");
        self.blocks.push(block);
        let last = self.blocks.len() - 1;
        Ok(&self.blocks[last])
    }

    pub fn remove(&mut self, index: usize) -> GameResult<Block> {
        self.check(index)?;
        Ok(self.blocks.remove(index))
    }

    /// Move the block at `from` so it ends up at `to`. A `to` past the end
    /// moves the block last.
    pub fn move_block(&mut self, from: usize, to: usize) -> GameResult<()> {
        self.check(from)?;
        let block = self.blocks.remove(from);
        let to = to.min(self.blocks.len());
        self.blocks.insert(to, block);
        Ok(())
    }

    /// Set a parameter, clamped to `PARAM_MIN..=PARAM_MAX`. Returns the
    /// stored value.
    pub fn set_param(&mut self, index: usize, param: u8) -> GameResult<u8> {
        let block = self.param_block(index)?;
        let param = param.clamp(PARAM_MIN, PARAM_MAX);
        block.param = Some(param);
        Ok(param)
    }

    /// Raise a parameter by one, stopping at `PARAM_MAX`.
    pub fn increase_param(&mut self, index: usize) -> GameResult<u8> {
        let block = self.param_block(index)?;
        let current = current_param(block);
        if current < PARAM_MAX {
            block.param = Some(current + 1);
        }
        Ok(current_param(block))
    }

    /// Lower a parameter by one, stopping at `PARAM_MIN`.
    pub fn decrease_param(&mut self, index: usize) -> GameResult<u8> {
        let block = self.param_block(index)?;
        let current = current_param(block);
        if current > PARAM_MIN {
            block.param = Some(current - 1);
        }
        Ok(current_param(block))
    }

    /// Display indentation of the block at `index`.
    pub fn indent(&self, index: usize) -> GameResult<usize> {
        self.check(index)?;
        Ok(indents(&self.blocks[..=index])[index])
    }

    /// Display indentation of every block.
    pub fn indents(&self) -> Vec<usize> {
        indents(&self.blocks)
    }

    pub fn clear(&mut self) {
        self.blocks.clear();
    }

    /// Run the current program. An empty program is a valid run that
    /// records only the start snapshot.
    pub fn run(&self) -> ExecutionResult {
        run_with_limits(&self.blocks, &self.level, self.limits)
    }

    fn check(&self, index: usize) -> GameResult<()> {
        if index < self.blocks.len() {
            Ok(())
        } else {
            Err(GameError::IndexOutOfRange {
                index,
                len: self.blocks.len(),
            })
        }
    }

    fn param_block(&mut self, index: usize) -> GameResult<&mut Block> {
        self.check(index)?;
        let block = &mut self.blocks[index];
        if !block.kind.has_param() {
            return Err(GameError::NoParam(block.kind));
        }
        Ok(block)
    }
}

/// Missing and zero parameters read as the minimum in the editor.
fn current_param(block: &Block) -> u8 {
    block.param.filter(|&p| p > 0).unwrap_or(PARAM_MIN)
}

/// Indentation of each block in a flat list.
///
/// Open markers indent what follows them. `end_repeat`, `end_if` and
/// `else` sit one level out from their body, and the depth never goes
/// below zero however unbalanced the list is.
pub fn indents(blocks: &[Block]) -> Vec<usize> {
    let mut depth = 0usize;
    blocks
        .iter()
        .map(|block| {
            let kind = block.kind;
            let shown = if kind.is_structural_marker() {
                depth.saturating_sub(1)
            } else {
                depth
            };
            if kind.is_loop_open() || kind.is_conditional_open() {
                depth += 1;
            } else if kind == BlockKind::Else {
                depth = depth.saturating_sub(1) + 1;
            } else if kind.is_structural_marker() {
                depth = depth.saturating_sub(1);
            }
            shown
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_gen() {
        let mut ids = BlockIdGen::new();
        assert_eq!(ids.next_id(), "block_1");
        assert_eq!(ids.next_id(), "block_2");

        let mut sandbox = BlockIdGen::starting_after("cblock", 1000);
        assert_eq!(sandbox.next_id(), "cblock_1001");
    }

    #[test]
    fn test_current_param_defaults() {
        let plain = Block::new("r", BlockKind::Repeat);
        assert_eq!(current_param(&plain), 1);
        assert_eq!(current_param(&plain.clone().with_param(0)), 1);
        assert_eq!(current_param(&plain.with_param(7)), 7);
    }
}
