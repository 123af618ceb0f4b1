//! Delimiter matching over a flat block list.

use blockquest_types::{Block, BlockKind, StructuredNode};
use tracing::trace;

/// Structure a flat program. Convenience wrapper around [`Structurer`].
pub fn structure(blocks: &[Block]) -> Vec<StructuredNode> {
    Structurer::new(blocks).structure()
}

/// Left-to-right scan over a block slice with an explicit stack of open
/// bodies, so nesting depth costs heap rather than call stack.
///
/// Bodies are found by counting nested markers of the same family only:
/// a loop body counts `repeat`/`end_repeat`, a conditional region counts
/// `if_*`/`end_if`. A body never extends past the body that contains it.
pub struct Structurer<'a> {
    /// The block list being scanned.
    blocks: &'a [Block],
    /// Current index into `blocks`.
    pos: usize,
    markers: Markers,
}

/// Closers and branch markers resolved for every open marker.
struct Markers {
    /// Index of the `end_repeat` matching each `repeat`.
    loop_ends: Vec<Option<usize>>,
    /// Index of the `end_if` matching each `if_*`.
    conditional_ends: Vec<Option<usize>>,
    /// Depth-1 `else` markers of each `if_*`, ascending.
    elses: Vec<Vec<usize>>,
}

impl Markers {
    fn resolve(blocks: &[Block]) -> Self {
        let mut markers = Self {
            loop_ends: vec![None; blocks.len()],
            conditional_ends: vec![None; blocks.len()],
            elses: vec![Vec::new(); blocks.len()],
        };
        let mut open_loops = Vec::new();
        let mut open_conditionals = Vec::new();

        for (i, block) in blocks.iter().enumerate() {
            let kind = block.kind;
            if kind.is_loop_open() {
                open_loops.push(i);
            } else if kind.is_conditional_open() {
                open_conditionals.push(i);
            } else if kind == BlockKind::EndRepeat {
                if let Some(open) = open_loops.pop() {
                    markers.loop_ends[open] = Some(i);
                }
            } else if kind == BlockKind::EndIf {
                if let Some(open) = open_conditionals.pop() {
                    markers.conditional_ends[open] = Some(i);
                }
            } else if kind == BlockKind::Else {
                if let Some(&open) = open_conditionals.last() {
                    markers.elses[open].push(i);
                }
            }
        }
        markers
    }
}

/// A body still being filled.
struct Frame<'a> {
    block: &'a Block,
    children: Vec<StructuredNode>,
    else_children: Option<Vec<StructuredNode>>,
    /// End (exclusive) of the region being filled.
    limit: usize,
    /// Else region still to fill, as `(start, end)`.
    else_region: Option<(usize, usize)>,
    /// Where the enclosing body resumes once this one closes.
    resume: usize,
}

impl Frame<'_> {
    fn nodes(&mut self) -> &mut Vec<StructuredNode> {
        match &mut self.else_children {
            Some(else_children) => else_children,
            None => &mut self.children,
        }
    }

    fn into_node(self) -> StructuredNode {
        StructuredNode {
            block: self.block.clone(),
            children: self.children,
            else_children: self.else_children,
        }
    }
}

impl<'a> Structurer<'a> {
    pub fn new(blocks: &'a [Block]) -> Self {
        Self {
            blocks,
            pos: 0,
            markers: Markers::resolve(blocks),
        }
    }

    // ── Cursor ────────────────────────────────────────────────────────────────

    fn peek(&self) -> Option<&'a Block> {
        self.blocks.get(self.pos)
    }

    fn advance(&mut self) -> Option<&'a Block> {
        let block = self.peek()?;
        self.pos += 1;
        Some(block)
    }

    fn at_end(&self) -> bool {
        self.pos >= self.blocks.len()
    }

    // ── Structuring ───────────────────────────────────────────────────────────

    /// Consume the whole slice and return the structured tree.
    pub fn structure(mut self) -> Vec<StructuredNode> {
        let mut nodes = Vec::new();
        let mut frames: Vec<Frame<'a>> = Vec::new();

        loop {
            let limit = frames.last().map_or(self.blocks.len(), |f| f.limit);
            if self.pos >= limit {
                let Some(mut frame) = frames.pop() else { break };
                if let Some((start, end)) = frame.else_region.take() {
                    frame.else_children = Some(Vec::new());
                    frame.limit = end;
                    self.pos = start;
                    frames.push(frame);
                    continue;
                }
                self.pos = frame.resume;
                let node = frame.into_node();
                match frames.last_mut() {
                    Some(parent) => parent.nodes().push(node),
                    None => nodes.push(node),
                }
                continue;
            }

            let index = self.pos;
            let Some(block) = self.advance() else { break };
            let kind = block.kind;
            if kind.is_loop_open() {
                frames.push(self.loop_frame(block, index, limit));
            } else if kind.is_conditional_open() {
                frames.push(self.conditional_frame(block, index, limit));
            } else if kind.is_structural_marker() {
                trace!(id = %block.id, %kind, "skipping unmatched marker");
            } else {
                let leaf = StructuredNode::leaf(block.clone());
                match frames.last_mut() {
                    Some(frame) => frame.nodes().push(leaf),
                    None => nodes.push(leaf),
                }
            }
        }
        debug_assert!(self.at_end());
        nodes
    }

    /// Frame for the `repeat` at `index`. Without an `end_repeat` before
    /// `limit` the body runs to `limit`.
    fn loop_frame(&self, block: &'a Block, index: usize, limit: usize) -> Frame<'a> {
        let end = self.markers.loop_ends[index].filter(|&e| e < limit);
        Frame {
            block,
            children: Vec::new(),
            else_children: None,
            limit: end.unwrap_or(limit),
            else_region: None,
            resume: end.map_or(limit, |e| e + 1),
        }
    }

    /// Frame for the `if_*` at `index`.
    ///
    /// The first depth-1 `else` ends the then-region. The last one starts
    /// the else-region; blocks between the two are dropped.
    fn conditional_frame(&self, block: &'a Block, index: usize, limit: usize) -> Frame<'a> {
        let end = self.markers.conditional_ends[index].filter(|&e| e < limit);
        let region_end = end.unwrap_or(limit);
        let mut elses = self.markers.elses[index]
            .iter()
            .copied()
            .take_while(|&e| e < region_end);
        let first_else = elses.next();
        let last_else = elses.last().or(first_else);
        Frame {
            block,
            children: Vec::new(),
            else_children: None,
            limit: first_else.unwrap_or(region_end),
            else_region: last_else.map(|e| (e + 1, region_end)),
            resume: end.map_or(limit, |e| e + 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocks(kinds: &[BlockKind]) -> Vec<Block> {
        kinds
            .iter()
            .enumerate()
            .map(|(i, &k)| Block::new(format!("b{i}"), k))
            .collect()
    }

    #[test]
    fn test_loop_ends_match_innermost() {
        use BlockKind::*;
        let list = blocks(&[Repeat, Repeat, MoveUp, EndRepeat, EndRepeat, EndRepeat]);
        let markers = Markers::resolve(&list);
        assert_eq!(markers.loop_ends[0], Some(4));
        assert_eq!(markers.loop_ends[1], Some(3));
    }

    #[test]
    fn test_else_belongs_to_innermost_open_conditional() {
        use BlockKind::*;
        let list = blocks(&[IfWall, IfStar, Else, EndIf, Else, Else, EndIf, Else]);
        let markers = Markers::resolve(&list);
        assert_eq!(markers.elses[1], vec![2]);
        assert_eq!(markers.elses[0], vec![4, 5]);
        assert_eq!(markers.conditional_ends[0], Some(6));
    }

    #[test]
    fn test_conditional_frame_second_else_restarts() {
        use BlockKind::*;
        let list = blocks(&[IfWall, MoveUp, Else, MoveDown, Else, MoveLeft, EndIf]);
        let s = Structurer::new(&list);
        let frame = s.conditional_frame(&list[0], 0, list.len());
        assert_eq!(frame.limit, 2);
        assert_eq!(frame.else_region, Some((5, 6)));
        assert_eq!(frame.resume, 7);
    }

    #[test]
    fn test_loop_frame_capped_by_enclosing_body() {
        use BlockKind::*;
        let list = blocks(&[Repeat, MoveUp, EndRepeat]);
        let s = Structurer::new(&list);
        let frame = s.loop_frame(&list[0], 0, 2);
        assert_eq!(frame.limit, 2);
        assert_eq!(frame.resume, 2);
    }
}
