//! Instruction blocks and the structured program tree.
//!
//! A program is authored as a flat list of [`Block`]s. Control flow is
//! expressed with explicit open/close markers (`repeat` … `end_repeat`,
//! `if_*` … `else` … `end_if`), which the parser folds into a tree of
//! [`StructuredNode`]s.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Iteration count of a `repeat` block with no usable param.
pub const DEFAULT_REPEAT: u8 = 2;

// ══════════════════════════════════════════════════════════════════════════════
// Block kinds
// ══════════════════════════════════════════════════════════════════════════════

/// The instruction tag of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Repeat,
    EndRepeat,
    IfWall,
    IfPath,
    IfStar,
    Else,
    EndIf,
    /// Any tag this build does not know. Executes as a no-op.
    #[serde(other)]
    Unknown,
}

impl BlockKind {
    /// The four movement instructions, in palette order.
    pub const MOVES: [BlockKind; 4] = [
        BlockKind::MoveUp,
        BlockKind::MoveDown,
        BlockKind::MoveLeft,
        BlockKind::MoveRight,
    ];

    /// Absolute `(row, col)` offset applied by a movement instruction.
    ///
    /// Movement ignores the agent's facing direction.
    pub fn offset(self) -> Option<(i32, i32)> {
        match self {
            Self::MoveUp => Some((-1, 0)),
            Self::MoveDown => Some((1, 0)),
            Self::MoveLeft => Some((0, -1)),
            Self::MoveRight => Some((0, 1)),
            _ => None,
        }
    }

    pub fn is_move(self) -> bool {
        self.offset().is_some()
    }

    pub fn is_loop_open(self) -> bool {
        self == Self::Repeat
    }

    /// The predicate tested by a conditional-open marker.
    pub fn predicate(self) -> Option<Predicate> {
        match self {
            Self::IfWall => Some(Predicate::WallAhead),
            Self::IfPath => Some(Predicate::PathAhead),
            Self::IfStar => Some(Predicate::OnStar),
            _ => None,
        }
    }

    pub fn is_conditional_open(self) -> bool {
        self.predicate().is_some()
    }

    /// `end_repeat`, `end_if` and `else`: markers that only have meaning
    /// inside an enclosing open marker.
    pub fn is_structural_marker(self) -> bool {
        matches!(self, Self::EndRepeat | Self::EndIf | Self::Else)
    }

    /// Whether the editor exposes a numeric parameter for this kind.
    pub fn has_param(self) -> bool {
        self == Self::Repeat
    }

    /// Parameter given to a freshly added block.
    pub fn default_param(self) -> Option<u8> {
        if self.has_param() {
            Some(DEFAULT_REPEAT)
        } else {
            None
        }
    }

    /// The wire tag, as used in JSON and in step action tags.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MoveUp => "move_up",
            Self::MoveDown => "move_down",
            Self::MoveLeft => "move_left",
            Self::MoveRight => "move_right",
            Self::Repeat => "repeat",
            Self::EndRepeat => "end_repeat",
            Self::IfWall => "if_wall",
            Self::IfPath => "if_path",
            Self::IfStar => "if_star",
            Self::Else => "else",
            Self::EndIf => "end_if",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Condition tested by a conditional block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    /// The cell in the agent's facing direction is not walkable.
    WallAhead,
    /// The cell in the agent's facing direction is walkable.
    PathAhead,
    /// The agent stands on an uncollected star.
    OnStar,
}

// ══════════════════════════════════════════════════════════════════════════════
// Blocks
// ══════════════════════════════════════════════════════════════════════════════

/// One authored instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Opaque id, unique within one program list.
    pub id: String,
    #[serde(rename = "type")]
    pub kind: BlockKind,
    /// Repeat count for `repeat` blocks (1..=9 in the editor).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param: Option<u8>,
}

impl Block {
    pub fn new(id: impl Into<String>, kind: BlockKind) -> Self {
        Self {
            id: id.into(),
            kind,
            param: None,
        }
    }

    pub fn with_param(mut self, param: u8) -> Self {
        self.param = Some(param);
        self
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Structured tree
// ══════════════════════════════════════════════════════════════════════════════

/// A block after delimiter matching.
///
/// `children` holds a loop body or the "then" branch of a conditional.
/// `else_children` is `Some` only for conditionals whose region contained a
/// top-level `else` marker (possibly followed by nothing).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredNode {
    #[serde(flatten)]
    pub block: Block,
    #[serde(default)]
    pub children: Vec<StructuredNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub else_children: Option<Vec<StructuredNode>>,
}

impl StructuredNode {
    /// A node with no nested body.
    pub fn leaf(block: Block) -> Self {
        Self {
            block,
            children: Vec::new(),
            else_children: None,
        }
    }

    pub fn kind(&self) -> BlockKind {
        self.block.kind
    }

    /// Number of nested bodies along the deepest path below (and including)
    /// this node. Leaves have depth 0.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 0)];
        while let Some((node, above)) = pending.pop() {
            if !node.opens_body() {
                continue;
            }
            let depth = above + 1;
            deepest = deepest.max(depth);
            let bodies = node.children.iter().chain(node.else_children.iter().flatten());
            pending.extend(bodies.map(|child| (child, depth)));
        }
        deepest
    }

    fn opens_body(&self) -> bool {
        self.kind().is_loop_open() || self.kind().is_conditional_open()
    }
}

impl Drop for StructuredNode {
    // Unlinks bodies onto a heap stack so deep trees drop without recursion.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        pending.extend(self.else_children.take().into_iter().flatten());
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
            pending.extend(node.else_children.take().into_iter().flatten());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_offsets() {
        assert_eq!(BlockKind::MoveUp.offset(), Some((-1, 0)));
        assert_eq!(BlockKind::MoveRight.offset(), Some((0, 1)));
        assert_eq!(BlockKind::Repeat.offset(), None);
        assert!(BlockKind::MOVES.iter().all(|k| k.is_move()));
    }

    #[test]
    fn test_markers() {
        assert!(BlockKind::Else.is_structural_marker());
        assert!(!BlockKind::IfStar.is_structural_marker());
        assert_eq!(BlockKind::IfPath.predicate(), Some(Predicate::PathAhead));
        assert_eq!(BlockKind::Repeat.default_param(), Some(2));
        assert_eq!(BlockKind::MoveDown.default_param(), None);
    }

    #[test]
    fn test_block_json_shape() {
        let block = Block::new("block_7", BlockKind::Repeat).with_param(3);
        let json = serde_json::to_string(&block).unwrap();
        assert_eq!(json, r#"{"id":"block_7","type":"repeat","param":3}"#);

        let plain: Block = serde_json::from_str(r#"{"id":"a","type":"move_left"}"#).unwrap();
        assert_eq!(plain.kind, BlockKind::MoveLeft);
        assert_eq!(plain.param, None);
    }

    #[test]
    fn test_unknown_tag_deserializes() {
        let block: Block = serde_json::from_str(r#"{"id":"x","type":"jump"}"#).unwrap();
        assert_eq!(block.kind, BlockKind::Unknown);
    }

    #[test]
    fn test_kind_display_matches_wire_tag() {
        for kind in BlockKind::MOVES {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
        }
    }

    #[test]
    fn test_node_depth() {
        let leaf = StructuredNode::leaf(Block::new("m", BlockKind::MoveUp));
        assert_eq!(leaf.depth(), 0);

        let inner = StructuredNode {
            block: Block::new("r2", BlockKind::Repeat),
            children: vec![leaf.clone()],
            else_children: None,
        };
        let outer = StructuredNode {
            block: Block::new("c", BlockKind::IfWall),
            children: vec![leaf],
            else_children: Some(vec![inner]),
        };
        assert_eq!(outer.depth(), 2);
    }

    #[test]
    fn test_deep_tree_drops() {
        let mut node = StructuredNode::leaf(Block::new("m", BlockKind::MoveUp));
        for i in 0..200_000 {
            node = StructuredNode {
                block: Block::new(format!("r{i}"), BlockKind::Repeat),
                children: vec![node],
                else_children: None,
            };
        }
        assert_eq!(node.depth(), 200_000);
        drop(node);
    }
}
