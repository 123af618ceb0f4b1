//! Grid cells and the rectangular level grid.

use crate::error::GridError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic tag of one grid tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    Path,
    Wall,
    Star,
    Gem,
    Water,
    Lava,
    Goal,
    Start,
}

impl CellType {
    /// Walls and both hazards block movement; everything else can be entered.
    pub fn is_walkable(self) -> bool {
        !matches!(self, Self::Wall | Self::Water | Self::Lava)
    }

    /// Stars and gems are consumed (turned into path) when entered.
    pub fn is_collectible(self) -> bool {
        matches!(self, Self::Star | Self::Gem)
    }

    /// Single-character map symbol.
    ///
    /// ```text
    /// .  path     #  wall     *  star     $  gem
    /// ~  water    ^  lava     G  goal     S  start
    /// ```
    pub fn symbol(self) -> char {
        match self {
            Self::Path => '.',
            Self::Wall => '#',
            Self::Star => '*',
            Self::Gem => '$',
            Self::Water => '~',
            Self::Lava => '^',
            Self::Goal => 'G',
            Self::Start => 'S',
        }
    }

    pub fn from_symbol(ch: char) -> Option<Self> {
        Some(match ch {
            '.' => Self::Path,
            '#' => Self::Wall,
            '*' => Self::Star,
            '$' => Self::Gem,
            '~' => Self::Water,
            '^' => Self::Lava,
            'G' => Self::Goal,
            'S' => Self::Start,
            _ => return None,
        })
    }

    /// Stable byte code, used when fingerprinting traces.
    pub fn code(self) -> u8 {
        match self {
            Self::Path => 0,
            Self::Wall => 1,
            Self::Star => 2,
            Self::Gem => 3,
            Self::Water => 4,
            Self::Lava => 5,
            Self::Goal => 6,
            Self::Start => 7,
        }
    }
}

/// A rectangular grid of cells, indexed `[row][col]`.
///
/// Serializes as a plain array of rows. Rectangularity and the single START
/// cell are the level author's responsibility; [`Grid::parse`] checks the
/// former.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    cells: Vec<Vec<CellType>>,
}

impl Grid {
    pub fn from_rows(cells: Vec<Vec<CellType>>) -> Self {
        Self { cells }
    }

    /// A `rows × cols` grid filled with one cell type.
    pub fn filled(rows: usize, cols: usize, cell: CellType) -> Self {
        Self {
            cells: vec![vec![cell; cols]; rows],
        }
    }

    /// Parse a text map, one line per row (see [`CellType::symbol`]).
    ///
    /// Leading/trailing blank lines and surrounding whitespace on each line
    /// are ignored.
    pub fn parse(map: &str) -> Result<Self, GridError> {
        let mut cells = Vec::new();
        for (row, line) in map
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .enumerate()
        {
            let mut cols = Vec::with_capacity(line.len());
            for (col, ch) in line.chars().enumerate() {
                let cell = CellType::from_symbol(ch)
                    .ok_or(GridError::UnknownSymbol { symbol: ch, row, col })?;
                cols.push(cell);
            }
            if let Some(first) = cells.first().map(Vec::len) {
                if cols.len() != first {
                    return Err(GridError::Ragged {
                        row,
                        expected: first,
                        found: cols.len(),
                    });
                }
            }
            cells.push(cols);
        }
        if cells.is_empty() {
            return Err(GridError::Empty);
        }
        Ok(Self { cells })
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Width of the grid, taken from the first row.
    pub fn cols(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows() && (col as usize) < self.cols()
    }

    /// Cell at a signed position, `None` when out of bounds.
    pub fn get(&self, row: i32, col: i32) -> Option<CellType> {
        if !self.in_bounds(row, col) {
            return None;
        }
        self.cells[row as usize].get(col as usize).copied()
    }

    /// Overwrite a cell. Returns `false` (and changes nothing) when out of
    /// bounds.
    pub fn set(&mut self, row: i32, col: i32, cell: CellType) -> bool {
        if !self.in_bounds(row, col) {
            return false;
        }
        match self.cells[row as usize].get_mut(col as usize) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// Number of cells of the given type.
    pub fn count(&self, cell: CellType) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    /// Position of the first cell of the given type, scanning row-major.
    pub fn find(&self, cell: CellType) -> Option<(usize, usize)> {
        self.cells.iter().enumerate().find_map(|(r, row)| {
            row.iter().position(|&c| c == cell).map(|c| (r, c))
        })
    }

    /// Row-major iteration over rows.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[CellType]> {
        self.cells.iter().map(Vec::as_slice)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORRIDOR: &str = "
        #####
        #S.G#
        #####
    ";

    #[test]
    fn test_parse_and_display() {
        let grid = Grid::parse(CORRIDOR).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 5);
        assert_eq!(grid.get(1, 1), Some(CellType::Start));
        assert_eq!(grid.get(1, 3), Some(CellType::Goal));
        assert_eq!(grid.to_string(), "#####\n#S.G#\n#####");
    }

    #[test]
    fn test_parse_rejects_bad_maps() {
        assert!(matches!(Grid::parse(""), Err(GridError::Empty)));
        assert!(matches!(
            Grid::parse("###\n##"),
            Err(GridError::Ragged { row: 1, expected: 3, found: 2 })
        ));
        assert!(matches!(
            Grid::parse("#x#"),
            Err(GridError::UnknownSymbol { symbol: 'x', row: 0, col: 1 })
        ));
    }

    #[test]
    fn test_bounds() {
        let grid = Grid::parse(CORRIDOR).unwrap();
        assert!(grid.in_bounds(0, 0));
        assert!(!grid.in_bounds(-1, 0));
        assert!(!grid.in_bounds(0, 5));
        assert_eq!(grid.get(3, 0), None);
    }

    #[test]
    fn test_set_and_count() {
        let mut grid = Grid::parse("#*$*#").unwrap();
        assert_eq!(grid.count(CellType::Star), 2);
        assert!(grid.set(0, 1, CellType::Path));
        assert!(!grid.set(0, 9, CellType::Path));
        assert_eq!(grid.count(CellType::Star), 1);
        assert_eq!(grid.find(CellType::Gem), Some((0, 2)));
    }

    #[test]
    fn test_walkability() {
        assert!(CellType::Star.is_walkable());
        assert!(CellType::Goal.is_walkable());
        assert!(!CellType::Water.is_walkable());
        assert!(!CellType::Lava.is_walkable());
        assert!(!CellType::Wall.is_walkable());
    }

    #[test]
    fn test_grid_json_is_array_of_rows() {
        let grid = Grid::parse("S.\n#G").unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, r#"[["start","path"],["wall","goal"]]"#);
    }
}
