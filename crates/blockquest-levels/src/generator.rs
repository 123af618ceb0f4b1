//! Seeded maze generator for worlds 4 through 8.
//!
//! Every level is a self-avoiding random walk carved out of a solid block of
//! wall, seeded from the level and world ids. The same id always yields the
//! same map, title, hint and optimal step count.

use blockquest_types::{BlockKind, CellType, Direction, Grid, Level};
use tracing::debug;

use BlockKind::{Else, EndIf, IfPath, IfStar, IfWall, MoveDown, MoveLeft, MoveRight, MoveUp};

/// Levels per generated world.
pub const LEVELS_PER_WORLD: u32 = 25;

/// Largest interior side length of a generated maze.
const MAX_INTERIOR: i32 = 8;

const MOVE_BLOCKS: &[BlockKind] = &[MoveUp, MoveDown, MoveLeft, MoveRight];
const IF_BLOCKS: &[BlockKind] = &[
    MoveUp, MoveDown, MoveLeft, MoveRight, IfWall, IfPath, Else, EndIf,
];
const ALL_BLOCKS: &[BlockKind] = &[
    MoveUp, MoveDown, MoveLeft, MoveRight, IfWall, IfPath, Else, EndIf, IfStar,
];

/// Walk order: right, down, left, up.
const WALK: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

const HINTS: [&str; 8] = [
    "Use arrows to navigate!",
    "Plan your route first!",
    "Collect all diamonds!",
    "Try using repeat!",
    "Watch out for walls!",
    "Think step by step!",
    "Combine arrows wisely!",
    "Use repeat for patterns!",
];

// ══════════════════════════════════════════════════════════════════════════════
// Worlds
// ══════════════════════════════════════════════════════════════════════════════

/// A generated world: its id, first level id, palette and level names.
#[derive(Debug, Clone, Copy)]
pub struct WorldConfig {
    pub id: u32,
    pub first_level: u32,
    pub name: &'static str,
    pub blocks: &'static [BlockKind],
    titles: [&'static str; LEVELS_PER_WORLD as usize],
}

impl WorldConfig {
    pub fn last_level(&self) -> u32 {
        self.first_level + LEVELS_PER_WORLD - 1
    }

    pub fn contains(&self, level_id: u32) -> bool {
        (self.first_level..=self.last_level()).contains(&level_id)
    }

    pub fn title(&self, index: u32) -> &'static str {
        self.titles
            .get(index as usize)
            .copied()
            .unwrap_or("Untitled")
    }
}

pub static WORLDS: [WorldConfig; 5] = [
    WorldConfig {
        id: 4,
        first_level: 76,
        name: "Forest",
        blocks: MOVE_BLOCKS,
        titles: [
            "Tall Trees", "Mossy Path", "Woodland Trail", "Fern Valley", "Pine Ridge",
            "Oak Bridge", "Ivy Walk", "Mushroom Glen", "Fox Den", "Bear Trail",
            "Bird Song", "Acorn Hunt", "Leaf Fall", "Root Bridge", "Forest Lake",
            "Willow Way", "Cedar Pass", "Bark Path", "Deer Run", "Squirrel Chase",
            "Owl Eyes", "Honey Tree", "Dark Woods", "Ancient Oak", "Forest Boss",
        ],
    },
    WorldConfig {
        id: 5,
        first_level: 101,
        name: "Mountains",
        blocks: IF_BLOCKS,
        titles: [
            "Base Camp", "Rocky Start", "Boulder Path", "Cliff Edge", "Peak View",
            "Snow Drift", "Eagle Nest", "Crystal Stream", "Cave Mouth", "Ridge Walk",
            "Summit Push", "Cloud Walk", "Goat Trail", "Wind Pass", "Ice Bridge",
            "Alpine Meadow", "Crevasse Jump", "Echo Point", "Mountain Lake", "Storm Peak",
            "Frost Bite", "Granite Stairs", "Thin Air", "Final Ascent", "Mountain Boss",
        ],
    },
    WorldConfig {
        id: 6,
        first_level: 126,
        name: "Space",
        blocks: IF_BLOCKS,
        titles: [
            "Launch Pad", "Orbit Entry", "Star Dust", "Asteroid Belt", "Moon Walk",
            "Saturn Rings", "Nebula Drift", "Comet Tail", "Galaxy Spin", "Black Hole Edge",
            "Space Walk", "Mars Landing", "Jupiter Fly", "Venus Glow", "Alien Signal",
            "Wormhole", "Light Speed", "Gravity Pull", "Solar Wind", "Star Gate",
            "Deep Space", "Meteor Shower", "Constellation", "Universe End", "Space Boss",
        ],
    },
    WorldConfig {
        id: 7,
        first_level: 151,
        name: "Volcano",
        blocks: ALL_BLOCKS,
        titles: [
            "Magma Flow", "Ash Rain", "Hot Springs", "Lava Bridge", "Smoke Signal",
            "Eruption Path", "Crystal Form", "Obsidian Wall", "Ember Trail", "Fire Walk",
            "Sulphur Lake", "Vent Climb", "Magma Chamber", "Igneous Path", "Basalt Bridge",
            "Pyroclast", "Thermal Rise", "Caldera Edge", "Inferno Gate", "Lava Tube",
            "Cinder Cone", "Pumice Trail", "Geode Cave", "Core Access", "Volcano Boss",
        ],
    },
    WorldConfig {
        id: 8,
        first_level: 176,
        name: "Crystal Cave",
        blocks: ALL_BLOCKS,
        titles: [
            "Crystal Entry", "Amethyst Path", "Quartz Tunnel", "Sapphire Room", "Ruby Chamber",
            "Emerald Hall", "Diamond Corridor", "Topaz Bridge", "Opal Cavern", "Garnet Pass",
            "Jade Garden", "Citrine Lake", "Pearl Drop", "Tourmaline Twist", "Zircon Maze",
            "Moonstone Mirror", "Onyx Depths", "Aquamarine Pool", "Tanzanite Trail",
            "Alexandrite Shift", "Bismuth Stairs", "Fluorite Glow", "Malachite Maze",
            "Platinum Path", "Crystal Boss",
        ],
    },
];

/// The generated world that owns `level_id`, if any.
pub fn world_for(level_id: u32) -> Option<&'static WorldConfig> {
    WORLDS.iter().find(|w| w.contains(level_id))
}

// ══════════════════════════════════════════════════════════════════════════════
// Random source
// ══════════════════════════════════════════════════════════════════════════════

/// Linear congruential generator with 31-bit state.
///
/// The multiply is carried out in double precision, so products past 2^53
/// lose their low bits before the 32-bit wrap. Published level maps depend
/// on that rounding.
#[derive(Debug, Clone)]
struct Lcg(u32);

impl Lcg {
    fn seeded(level_id: u32, world_id: u32) -> Self {
        Self(level_id * 137 + world_id * 31)
    }

    fn next(&mut self) -> u32 {
        let product = f64::from(self.0) * 1_103_515_245.0 + 12_345.0;
        self.0 = (product.rem_euclid(4_294_967_296.0) as u32) & 0x7fff_ffff;
        self.0
    }

    /// Uniform-ish index into a collection of `len` items (`len > 0`).
    fn below(&mut self, len: usize) -> usize {
        self.next() as usize % len
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Generation
// ══════════════════════════════════════════════════════════════════════════════

/// A carved maze together with the walk that carved it.
#[derive(Debug, Clone)]
pub struct Maze {
    pub level: Level,
    /// Cells visited by the carving walk, start first and goal last.
    pub route: Vec<(i32, i32)>,
}

impl Maze {
    /// The carving walk as movement blocks. Following it from the start
    /// reaches the goal and passes every collectible.
    pub fn solution(&self) -> Vec<BlockKind> {
        self.route
            .windows(2)
            .filter_map(|pair| {
                let (dr, dc) = (pair[1].0 - pair[0].0, pair[1].1 - pair[0].1);
                BlockKind::MOVES
                    .into_iter()
                    .find(|k| k.offset() == Some((dr, dc)))
            })
            .collect()
    }
}

/// Generate level `level_id`. `None` outside worlds 4..=8.
pub fn generate(level_id: u32) -> Option<Level> {
    generate_maze(level_id).map(|maze| maze.level)
}

/// Generate level `level_id` and keep its carving walk.
pub fn generate_maze(level_id: u32) -> Option<Maze> {
    let world = world_for(level_id)?;
    Some(carve(world, level_id - world.first_level))
}

/// All 25 levels of one generated world, in id order.
pub fn generate_world(world_id: u32) -> Vec<Level> {
    WORLDS
        .iter()
        .filter(|w| w.id == world_id)
        .flat_map(|w| (0..LEVELS_PER_WORLD).map(move |i| carve(w, i).level))
        .collect()
}

fn carve(world: &WorldConfig, index: u32) -> Maze {
    let level_id = world.first_level + index;
    let i = index as i32;
    let complexity = i / 5 + 3;
    let size = (4 + i / 4).min(MAX_INTERIOR);
    let side = (size + 2) as usize;

    let mut rng = Lcg::seeded(level_id, world.id);
    let mut grid = Grid::filled(side, side, CellType::Wall);
    let (mut row, mut col) = (1, 1);
    grid.set(row, col, CellType::Start);
    let mut route = vec![(row, col)];

    for _ in 0..complexity * 2 + i {
        let open: Vec<(i32, i32)> = WALK
            .iter()
            .copied()
            .filter(|&(dr, dc)| {
                let (r, c) = (row + dr, col + dc);
                (1..=size).contains(&r)
                    && (1..=size).contains(&c)
                    && grid.get(r, c) == Some(CellType::Wall)
            })
            .collect();
        if open.is_empty() {
            break;
        }
        let (dr, dc) = open[rng.below(open.len())];
        row += dr;
        col += dc;

        let roll = rng.next() % 10;
        let cell = if roll < 2 && i > 2 {
            CellType::Gem
        } else if roll < 3 && i > 5 {
            CellType::Star
        } else {
            CellType::Path
        };
        grid.set(row, col, cell);
        route.push((row, col));
    }
    grid.set(row, col, CellType::Goal);

    if i > 2 {
        seed_gem(&mut grid, route.get(route.len() / 2));
    }
    if i > 6 {
        seed_gem(&mut grid, route.get(route.len() / 4));
    }

    let optimal_steps = (route.len() as u32).saturating_sub(1).max(2);
    let hint = HINTS[rng.below(HINTS.len())];

    let mut level = Level::new(grid, 1, 1, Direction::Right).with_blocks(world.blocks.iter().copied());
    level.id = level_id;
    level.world_id = world.id;
    level.title = world.title(index).to_string();
    level.optimal_steps = optimal_steps;
    level.hint = hint.to_string();

    debug!(
        level = level_id,
        world = world.id,
        route = route.len(),
        optimal_steps,
        "generated level"
    );
    Maze { level, route }
}

/// Turn a plain path cell into a gem.
fn seed_gem(grid: &mut Grid, at: Option<&(i32, i32)>) {
    if let Some(&(r, c)) = at {
        if grid.get(r, c) == Some(CellType::Path) {
            grid.set(r, c, CellType::Gem);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lcg_first_draws() {
        let mut rng = Lcg(1);
        assert_eq!(rng.next(), 1_103_527_590);
        let mut small = Lcg(0);
        assert_eq!(small.next(), 12_345);
    }

    #[test]
    fn test_world_ranges() {
        assert_eq!(world_for(76).map(|w| w.id), Some(4));
        assert_eq!(world_for(100).map(|w| w.id), Some(4));
        assert_eq!(world_for(101).map(|w| w.id), Some(5));
        assert_eq!(world_for(200).map(|w| w.id), Some(8));
        assert!(world_for(75).is_none());
        assert!(world_for(201).is_none());
        assert_eq!(WORLDS[4].last_level(), 200);
    }

    #[test]
    fn test_grid_size_schedule() {
        let first = generate(76).unwrap();
        assert_eq!(first.grid.rows(), 6);
        let last = generate(100).unwrap();
        assert_eq!(last.grid.rows(), 10);
        assert_eq!(last.grid.cols(), 10);
    }

    #[test]
    fn test_solution_matches_route() {
        let maze = generate_maze(82).unwrap();
        assert_eq!(maze.solution().len() + 1, maze.route.len());
        assert_eq!(maze.route.first(), Some(&(1, 1)));
    }

    #[test]
    fn test_generate_world_unknown_is_empty() {
        assert!(generate_world(3).is_empty());
        assert_eq!(generate_world(6).len(), 25);
    }
}
