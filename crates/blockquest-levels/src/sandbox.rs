//! Free-play sandbox grids painted by the player.

use blockquest_types::{BlockKind, CellType, Direction, Grid, Level};

/// Largest interior side the sandbox allows.
pub const SANDBOX_MAX: usize = 8;

/// Block palette offered in the sandbox.
pub const SANDBOX_BLOCKS: &[BlockKind] = &[
    BlockKind::MoveUp,
    BlockKind::MoveDown,
    BlockKind::MoveLeft,
    BlockKind::MoveRight,
    BlockKind::Repeat,
    BlockKind::EndRepeat,
    BlockKind::IfWall,
    BlockKind::IfPath,
    BlockKind::Else,
    BlockKind::EndIf,
];

/// An open `rows × cols` room inside a one-cell wall border, with the start
/// in the top-left corner and the goal in the bottom-right one.
///
/// Sides are clamped to `1..=SANDBOX_MAX`. In a 1×1 room the goal
/// overwrites the start.
pub fn sandbox_grid(rows: usize, cols: usize) -> Grid {
    let rows = rows.clamp(1, SANDBOX_MAX);
    let cols = cols.clamp(1, SANDBOX_MAX);
    let mut cells = vec![vec![CellType::Wall; cols + 2]; rows + 2];
    for row in cells.iter_mut().take(rows + 1).skip(1) {
        for cell in row.iter_mut().take(cols + 1).skip(1) {
            *cell = CellType::Path;
        }
    }
    let mut grid = Grid::from_rows(cells);
    grid.set(1, 1, CellType::Start);
    grid.set(rows as i32, cols as i32, CellType::Goal);
    grid
}

/// Paint one interior cell with `tool`. Painting a cell with the type it
/// already has clears it back to path. Border and out-of-range cells are
/// left alone; returns whether anything changed.
pub fn paint(grid: &mut Grid, row: i32, col: i32, tool: CellType) -> bool {
    let last_row = grid.rows() as i32 - 1;
    let last_col = grid.cols() as i32 - 1;
    if row <= 0 || col <= 0 || row >= last_row || col >= last_col {
        return false;
    }
    match grid.get(row, col) {
        Some(current) => {
            let next = if current == tool { CellType::Path } else { tool };
            grid.set(row, col, next)
        }
        None => false,
    }
}

/// Position of the first start cell, or `(1, 1)` when none is painted.
pub fn find_start(grid: &Grid) -> (i32, i32) {
    grid.find(CellType::Start)
        .map_or((1, 1), |(r, c)| (r as i32, c as i32))
}

/// A playable level over a painted grid.
pub fn sandbox_level(grid: Grid) -> Level {
    let (row, col) = find_start(&grid);
    let mut level = Level::new(grid, row, col, Direction::Right)
        .with_blocks(SANDBOX_BLOCKS.iter().copied());
    level.title = "Sandbox".to_string();
    level
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_room_layout() {
        let grid = sandbox_grid(5, 5);
        assert_eq!(
            grid.to_string(),
            "#######\n#S....#\n#.....#\n#.....#\n#.....#\n#....G#\n#######"
        );
    }

    #[test]
    fn test_rectangular_room() {
        let grid = sandbox_grid(2, 4);
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cols(), 6);
        assert_eq!(grid.get(2, 4), Some(CellType::Goal));
    }

    #[test]
    fn test_paint_toggles() {
        let mut grid = sandbox_grid(5, 5);
        assert!(paint(&mut grid, 2, 2, CellType::Star));
        assert_eq!(grid.get(2, 2), Some(CellType::Star));
        assert!(paint(&mut grid, 2, 2, CellType::Star));
        assert_eq!(grid.get(2, 2), Some(CellType::Path));
    }

    #[test]
    fn test_paint_ignores_border() {
        let mut grid = sandbox_grid(5, 5);
        assert!(!paint(&mut grid, 0, 3, CellType::Path));
        assert!(!paint(&mut grid, 3, 6, CellType::Star));
        assert!(!paint(&mut grid, -1, 2, CellType::Star));
        assert_eq!(grid.get(0, 3), Some(CellType::Wall));
    }

    #[test]
    fn test_find_start_fallback() {
        let mut grid = sandbox_grid(5, 5);
        assert_eq!(find_start(&grid), (1, 1));
        paint(&mut grid, 1, 1, CellType::Start);
        assert_eq!(grid.get(1, 1), Some(CellType::Path));
        assert_eq!(find_start(&grid), (1, 1));
        paint(&mut grid, 3, 4, CellType::Start);
        assert_eq!(find_start(&grid), (3, 4));
    }
}
