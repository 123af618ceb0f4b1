//! Levels, facing directions and agent state.

use crate::block::BlockKind;
use crate::cell::Grid;
use crate::error::InvalidDirection;
use serde::{Deserialize, Serialize};

/// Facing direction. On the wire: `0` up, `1` right, `2` down, `3` left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Direction {
    Up,
    #[default]
    Right,
    Down,
    Left,
}

impl Direction {
    /// Offset table, indexed by direction: up, right, down, left.
    const OFFSETS: [(i32, i32); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

    pub fn index(self) -> u8 {
        match self {
            Self::Up => 0,
            Self::Right => 1,
            Self::Down => 2,
            Self::Left => 3,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Up),
            1 => Some(Self::Right),
            2 => Some(Self::Down),
            3 => Some(Self::Left),
            _ => None,
        }
    }

    /// `(row, col)` step for one cell in this direction.
    pub fn offset(self) -> (i32, i32) {
        Self::OFFSETS[self.index() as usize]
    }

    pub fn turn_left(self) -> Self {
        Self::from_index((self.index() + 3) % 4).unwrap_or(self)
    }

    pub fn turn_right(self) -> Self {
        Self::from_index((self.index() + 1) % 4).unwrap_or(self)
    }
}

impl TryFrom<u8> for Direction {
    type Error = InvalidDirection;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_index(value).ok_or(InvalidDirection(value))
    }
}

impl From<Direction> for u8 {
    fn from(dir: Direction) -> Self {
        dir.index()
    }
}

/// Position and facing of the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentState {
    pub row: i32,
    pub col: i32,
    #[serde(rename = "dir")]
    pub direction: Direction,
}

impl AgentState {
    pub fn new(row: i32, col: i32, direction: Direction) -> Self {
        Self {
            row,
            col,
            direction,
        }
    }
}

/// A playable level.
///
/// Only `grid` and the start pose drive simulation. The remaining fields are
/// catalog metadata for the UI; `available_blocks` gates the palette but is
/// not enforced by the interpreter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub world_id: u32,
    #[serde(default)]
    pub title: String,
    pub grid: Grid,
    pub start_row: i32,
    pub start_col: i32,
    #[serde(default)]
    pub start_dir: Direction,
    #[serde(default)]
    pub available_blocks: Vec<BlockKind>,
    #[serde(default)]
    pub optimal_steps: u32,
    #[serde(default)]
    pub hint: String,
}

impl Level {
    /// A bare level with no catalog metadata.
    pub fn new(grid: Grid, start_row: i32, start_col: i32, start_dir: Direction) -> Self {
        Self {
            id: 0,
            world_id: 0,
            title: String::new(),
            grid,
            start_row,
            start_col,
            start_dir,
            available_blocks: Vec::new(),
            optimal_steps: 0,
            hint: String::new(),
        }
    }

    pub fn with_blocks(mut self, blocks: impl IntoIterator<Item = BlockKind>) -> Self {
        self.available_blocks = blocks.into_iter().collect();
        self
    }

    /// Agent pose before the first instruction runs.
    pub fn start_state(&self) -> AgentState {
        AgentState::new(self.start_row, self.start_col, self.start_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_wrap() {
        assert_eq!(Direction::Up.turn_left(), Direction::Left);
        assert_eq!(Direction::Left.turn_right(), Direction::Up);
        let mut dir = Direction::Right;
        for _ in 0..4 {
            dir = dir.turn_right();
        }
        assert_eq!(dir, Direction::Right);
    }

    #[test]
    fn test_offsets() {
        assert_eq!(Direction::Up.offset(), (-1, 0));
        assert_eq!(Direction::Right.offset(), (0, 1));
        assert_eq!(Direction::Down.offset(), (1, 0));
        assert_eq!(Direction::Left.offset(), (0, -1));
    }

    #[test]
    fn test_direction_wire_form() {
        assert_eq!(serde_json::to_string(&Direction::Down).unwrap(), "2");
        assert_eq!(serde_json::from_str::<Direction>("3").unwrap(), Direction::Left);
        assert!(serde_json::from_str::<Direction>("4").is_err());
    }

    #[test]
    fn test_level_defaults_start_dir_to_right() {
        let level: Level = serde_json::from_str(
            r#"{"grid":[["start","goal"]],"start_row":0,"start_col":0}"#,
        )
        .unwrap();
        assert_eq!(level.start_dir, Direction::Right);
        assert!(level.available_blocks.is_empty());
        assert_eq!(level.start_state(), AgentState::new(0, 0, Direction::Right));
    }
}
