//! World model: queries and mutations over a live grid.

use blockquest_types::{AgentState, CellType, Direction, Grid};

/// Target cell of one step from `(row, col)` in `direction`.
pub fn forward(row: i32, col: i32, direction: Direction) -> (i32, i32) {
    let (dr, dc) = direction.offset();
    (row + dr, col + dc)
}

pub fn turn_left(direction: Direction) -> Direction {
    direction.turn_left()
}

pub fn turn_right(direction: Direction) -> Direction {
    direction.turn_right()
}

/// A grid owned by one run.
///
/// Every read is bounds-checked; out-of-bounds positions are never walkable
/// and read as [`CellType::Wall`].
#[derive(Debug, Clone)]
pub struct World {
    grid: Grid,
}

impl World {
    /// Take ownership of a grid. Callers pass a clone of the level grid so
    /// the level itself is never mutated.
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Deep copy of the current grid, for trace snapshots.
    pub fn snapshot(&self) -> Grid {
        self.grid.clone()
    }

    pub fn cell_at(&self, row: i32, col: i32) -> CellType {
        self.grid.get(row, col).unwrap_or(CellType::Wall)
    }

    /// In bounds and not a wall or hazard.
    pub fn walkable(&self, row: i32, col: i32) -> bool {
        self.grid.get(row, col).is_some_and(CellType::is_walkable)
    }

    /// The cell the agent faces is not walkable.
    pub fn wall_ahead(&self, agent: &AgentState) -> bool {
        let (row, col) = forward(agent.row, agent.col, agent.direction);
        !self.walkable(row, col)
    }

    pub fn path_ahead(&self, agent: &AgentState) -> bool {
        !self.wall_ahead(agent)
    }

    /// Consume a collectible at `(row, col)`, turning it into path.
    ///
    /// Returns the consumed cell type, or `None` if nothing was there.
    pub fn take_collectible(&mut self, row: i32, col: i32) -> Option<CellType> {
        let cell = self.grid.get(row, col)?;
        if !cell.is_collectible() {
            return None;
        }
        self.grid.set(row, col, CellType::Path);
        Some(cell)
    }

    pub fn count(&self, cell: CellType) -> usize {
        self.grid.count(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world(map: &str) -> World {
        World::new(Grid::parse(map).unwrap())
    }

    #[test]
    fn test_forward_uses_offset_table() {
        assert_eq!(forward(2, 2, Direction::Up), (1, 2));
        assert_eq!(forward(2, 2, Direction::Right), (2, 3));
        assert_eq!(forward(2, 2, Direction::Down), (3, 2));
        assert_eq!(forward(2, 2, Direction::Left), (2, 1));
    }

    #[test]
    fn test_walkable() {
        let w = world("#S~^*$G.");
        assert!(!w.walkable(0, 0));
        assert!(w.walkable(0, 1));
        assert!(!w.walkable(0, 2));
        assert!(!w.walkable(0, 3));
        assert!(w.walkable(0, 4));
        assert!(w.walkable(0, 5));
        assert!(w.walkable(0, 6));
        assert!(w.walkable(0, 7));
        assert!(!w.walkable(0, 8));
        assert!(!w.walkable(-1, 1));
    }

    #[test]
    fn test_wall_and_path_ahead_follow_facing() {
        let w = world("#S.#");
        let facing_right = AgentState::new(0, 1, Direction::Right);
        let facing_left = AgentState::new(0, 1, Direction::Left);
        let facing_up = AgentState::new(0, 1, Direction::Up);
        assert!(w.path_ahead(&facing_right));
        assert!(w.wall_ahead(&facing_left));
        assert!(w.wall_ahead(&facing_up), "off-grid counts as wall");
    }

    #[test]
    fn test_take_collectible() {
        let mut w = world("*$.");
        assert_eq!(w.take_collectible(0, 0), Some(CellType::Star));
        assert_eq!(w.take_collectible(0, 0), None);
        assert_eq!(w.take_collectible(0, 1), Some(CellType::Gem));
        assert_eq!(w.take_collectible(0, 2), None);
        assert_eq!(w.take_collectible(5, 5), None);
        assert_eq!(w.grid().to_string(), "...");
    }

    #[test]
    fn test_cell_at_out_of_bounds_is_wall() {
        let w = world("S");
        assert_eq!(w.cell_at(0, 0), CellType::Start);
        assert_eq!(w.cell_at(0, 1), CellType::Wall);
    }

    #[test]
    fn test_turn_helpers() {
        assert_eq!(turn_left(Direction::Up), Direction::Left);
        assert_eq!(turn_right(Direction::Left), Direction::Up);
    }
}
