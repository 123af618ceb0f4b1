//! Hand-authored levels of worlds 1 to 3, ids `1..=75`.
//!
//! Maps use the symbols of [`CellType::symbol`](blockquest_types::CellType::symbol).

use crate::error::LevelResult;
use blockquest_types::{BlockKind, Direction, Grid, Level};

use BlockKind::{MoveDown, MoveLeft, MoveRight, MoveUp};

const RIGHT_ONLY: &[BlockKind] = &[MoveRight];
const RIGHT_DOWN: &[BlockKind] = &[MoveRight, MoveDown];
const ALL_MOVES: &[BlockKind] = &[MoveUp, MoveDown, MoveLeft, MoveRight];

struct Entry {
    id: u32,
    world: u32,
    title: &'static str,
    map: &'static str,
    /// `(row, col, direction index)`
    start: (i32, i32, u8),
    blocks: &'static [BlockKind],
    optimal_steps: u32,
    hint: &'static str,
}

impl Entry {
    fn to_level(&self) -> LevelResult<Level> {
        let (row, col, dir) = self.start;
        let mut level = Level::new(
            Grid::parse(self.map)?,
            row,
            col,
            Direction::from_index(dir).unwrap_or_default(),
        )
        .with_blocks(self.blocks.iter().copied());
        level.id = self.id;
        level.world_id = self.world;
        level.title = self.title.to_string();
        level.optimal_steps = self.optimal_steps;
        level.hint = self.hint.to_string();
        Ok(level)
    }
}

/// Look up a hand-authored level. `None` for ids outside the catalog.
pub fn catalog_level(id: u32) -> Option<LevelResult<Level>> {
    let index = id.checked_sub(1)? as usize;
    ENTRIES.get(index).map(Entry::to_level)
}

/// All hand-authored levels, in id order.
pub fn catalog_levels() -> LevelResult<Vec<Level>> {
    ENTRIES.iter().map(Entry::to_level).collect()
}

static ENTRIES: &[Entry] = &[
    Entry {
        id: 1,
        world: 1,
        title: "First Steps",
        map: "
            #####
            #S.G#
            #####
        ",
        start: (1, 1, 1),
        blocks: RIGHT_ONLY,
        optimal_steps: 2,
        hint: "Tap the → arrow to move right!",
    },
    Entry {
        id: 2,
        world: 1,
        title: "A Bit Further",
        map: "
            ######
            #S..G#
            ######
        ",
        start: (1, 1, 1),
        blocks: RIGHT_ONLY,
        optimal_steps: 3,
        hint: "Keep going right!",
    },
    Entry {
        id: 3,
        world: 1,
        title: "Collect the Star",
        map: "
            #####
            #S.*#
            ###G#
            #####
        ",
        start: (1, 1, 1),
        blocks: RIGHT_DOWN,
        optimal_steps: 3,
        hint: "Go right to the star, then down to home!",
    },
    Entry {
        id: 4,
        world: 1,
        title: "Going Down",
        map: "
            ####
            #S##
            #.##
            #G##
            ####
        ",
        start: (1, 1, 2),
        blocks: &[MoveDown],
        optimal_steps: 2,
        hint: "Tap ↓ to go down!",
    },
    Entry {
        id: 5,
        world: 1,
        title: "L-Shape",
        map: "
            #####
            #S..#
            ###.#
            ###G#
            #####
        ",
        start: (1, 1, 1),
        blocks: RIGHT_DOWN,
        optimal_steps: 4,
        hint: "Go right, then down!",
    },
    Entry {
        id: 6,
        world: 1,
        title: "Diamond Path",
        map: "
            #####
            #S$.#
            ###.#
            ###G#
            #####
        ",
        start: (1, 1, 1),
        blocks: RIGHT_DOWN,
        optimal_steps: 4,
        hint: "Collect the diamond on the way!",
    },
    Entry {
        id: 7,
        world: 1,
        title: "Zigzag",
        map: "
            #####
            #S###
            #..##
            ##.##
            ##G##
            #####
        ",
        start: (1, 1, 2),
        blocks: RIGHT_DOWN,
        optimal_steps: 5,
        hint: "Zigzag your way down!",
    },
    Entry {
        id: 8,
        world: 1,
        title: "Star Path",
        map: "
            ######
            #S*.*#
            ####G#
            ######
        ",
        start: (1, 1, 1),
        blocks: RIGHT_DOWN,
        optimal_steps: 5,
        hint: "Collect all stars!",
    },
    Entry {
        id: 9,
        world: 1,
        title: "Two Turns",
        map: "
            #####
            #S.##
            ##.##
            ##..#
            ###G#
            #####
        ",
        start: (1, 1, 1),
        blocks: RIGHT_DOWN,
        optimal_steps: 5,
        hint: "Use → and ↓ arrows!",
    },
    Entry {
        id: 10,
        world: 1,
        title: "Diamond & Stars",
        map: "
            ######
            #S*$*#
            ####G#
            ######
        ",
        start: (1, 1, 1),
        blocks: RIGHT_DOWN,
        optimal_steps: 5,
        hint: "Collect everything!",
    },
    Entry {
        id: 11,
        world: 1,
        title: "Going Up",
        map: "
            #####
            ###G#
            ###.#
            #S..#
            #####
        ",
        start: (3, 1, 1),
        blocks: &[MoveRight, MoveUp],
        optimal_steps: 4,
        hint: "Try the ↑ arrow!",
    },
    Entry {
        id: 12,
        world: 1,
        title: "Going Left",
        map: "
            #####
            #G.S#
            #####
        ",
        start: (1, 3, 3),
        blocks: &[MoveLeft],
        optimal_steps: 2,
        hint: "Try the ← arrow!",
    },
    Entry {
        id: 13,
        world: 1,
        title: "All Directions",
        map: "
            #####
            #.G.#
            #.#.#
            #S.$#
            #####
        ",
        start: (3, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 4,
        hint: "Use all four arrows!",
    },
    Entry {
        id: 14,
        world: 1,
        title: "U-Turn",
        map: "
            #####
            #.#S#
            #.#.#
            #G$.#
            #####
        ",
        start: (1, 3, 2),
        blocks: ALL_MOVES,
        optimal_steps: 6,
        hint: "Go around the wall!",
    },
    Entry {
        id: 15,
        world: 1,
        title: "Diamond Hunt",
        map: "
            ######
            #S.$.#
            ####.#
            ##$..#
            ##G###
            ######
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 7,
        hint: "Find all diamonds!",
    },
    Entry {
        id: 16,
        world: 1,
        title: "Corner Stars",
        map: "
            #####
            #S.*#
            ###.#
            #*$G#
            #####
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 6,
        hint: "Stars and diamonds at corners!",
    },
    Entry {
        id: 17,
        world: 1,
        title: "Meadow Walk",
        map: "
            #######
            #S....#
            #####.#
            #G$.$.#
            #######
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 10,
        hint: "A nice walk through the meadow!",
    },
    Entry {
        id: 18,
        world: 1,
        title: "Three Gems",
        map: "
            #####
            #S$##
            ##.##
            ##$.#
            ###$#
            ###G#
            #####
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 7,
        hint: "Get all three gems!",
    },
    Entry {
        id: 19,
        world: 1,
        title: "Crossroads",
        map: "
            ######
            ##.###
            #.S.##
            ##.###
            ##G###
            ######
        ",
        start: (2, 2, 2),
        blocks: ALL_MOVES,
        optimal_steps: 2,
        hint: "Which way will you go?",
    },
    Entry {
        id: 20,
        world: 1,
        title: "Diamond Box",
        map: "
            #######
            ###S###
            ##...##
            #.$*$.#
            ##...##
            ###G###
            #######
        ",
        start: (1, 3, 2),
        blocks: ALL_MOVES,
        optimal_steps: 4,
        hint: "Navigate the diamond box!",
    },
    Entry {
        id: 21,
        world: 1,
        title: "Gem Path",
        map: "
            ######
            #S$.$#
            ####.#
            ####G#
            ######
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 5,
        hint: "Collect the gems!",
    },
    Entry {
        id: 22,
        world: 1,
        title: "Winding Road",
        map: "
            ######
            #S.###
            ##.$##
            ###..#
            ####G#
            ######
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 6,
        hint: "Wind your way down!",
    },
    Entry {
        id: 23,
        world: 1,
        title: "Star & Diamond",
        map: "
            #####
            #S*$#
            ###.#
            ##G.#
            #####
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 5,
        hint: "Stars AND diamonds!",
    },
    Entry {
        id: 24,
        world: 1,
        title: "Long Zigzag",
        map: "
            #######
            #S..###
            ###.###
            ##$.###
            ##.####
            ##.$G##
            #######
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 9,
        hint: "The biggest zigzag yet!",
    },
    Entry {
        id: 25,
        world: 1,
        title: "Grasslands Boss",
        map: "
            #######
            #S*.$$#
            ###.###
            ##*.$##
            ###.###
            ###G###
            #######
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 8,
        hint: "Final Grasslands challenge!",
    },
    Entry {
        id: 26,
        world: 2,
        title: "Ocean Start",
        map: "
            ######
            #S...#
            ####.#
            ####G#
            ######
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 5,
        hint: "Dive into the ocean!",
    },
    Entry {
        id: 27,
        world: 2,
        title: "Coral Path",
        map: "
            ######
            #S.###
            ##.###
            ##.$G#
            ######
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 5,
        hint: "Swim past the coral!",
    },
    Entry {
        id: 28,
        world: 2,
        title: "Treasure Dive",
        map: "
            ######
            #S.$##
            ###.##
            ###.##
            ###G##
            ######
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 5,
        hint: "Dive deep for treasure!",
    },
    Entry {
        id: 29,
        world: 2,
        title: "Wave Rider",
        map: "
            #######
            #S..###
            ###.$##
            ####..#
            #####G#
            #######
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 7,
        hint: "Ride the waves!",
    },
    Entry {
        id: 30,
        world: 2,
        title: "Shell Collect",
        map: "
            ######
            #S*$.#
            ####.#
            ##$..#
            ##G###
            ######
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 7,
        hint: "Collect shells and gems!",
    },
    Entry {
        id: 31,
        world: 2,
        title: "Deep Sea",
        map: "
            #####
            #S.##
            ##.##
            ##.$#
            ###.#
            ###G#
            #####
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 6,
        hint: "Go deeper!",
    },
    Entry {
        id: 32,
        world: 2,
        title: "Seahorse Trail",
        map: "
            #######
            #S.$.*#
            #####.#
            #G$...#
            #######
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 10,
        hint: "Follow the seahorse!",
    },
    Entry {
        id: 33,
        world: 2,
        title: "Reef Maze",
        map: "
            ######
            #S.#.#
            ##.#.#
            ##.$.#
            ####G#
            ######
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 7,
        hint: "Navigate the reef!",
    },
    Entry {
        id: 34,
        world: 2,
        title: "Whirlpool",
        map: "
            ######
            #..$##
            #.#.##
            #S#G##
            ######
        ",
        start: (3, 1, 0),
        blocks: ALL_MOVES,
        optimal_steps: 6,
        hint: "Avoid the whirlpool!",
    },
    Entry {
        id: 35,
        world: 2,
        title: "Anchor Drop",
        map: "
            #####
            #S###
            #.###
            #.$.#
            ###.#
            ###G#
            #####
        ",
        start: (1, 1, 2),
        blocks: ALL_MOVES,
        optimal_steps: 6,
        hint: "Drop anchor at the goal!",
    },
    Entry {
        id: 36,
        world: 2,
        title: "Pearl Path",
        map: "
            ######
            #S$.##
            ###.##
            #G$.##
            ######
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 5,
        hint: "Find the pearls!",
    },
    Entry {
        id: 37,
        world: 2,
        title: "Starfish",
        map: "
            ######
            ##*###
            #*S$##
            ##.###
            ##G###
            ######
        ",
        start: (2, 2, 2),
        blocks: ALL_MOVES,
        optimal_steps: 2,
        hint: "A starfish shape!",
    },
    Entry {
        id: 38,
        world: 2,
        title: "Submarine",
        map: "
            #######
            #S.$..#
            #.###.#
            #G$...#
            #######
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 10,
        hint: "Circle like a submarine!",
    },
    Entry {
        id: 39,
        world: 2,
        title: "Jellyfish",
        map: "
            ######
            #S.$##
            ###..#
            #G$.##
            ######
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 6,
        hint: "Float like a jellyfish!",
    },
    Entry {
        id: 40,
        world: 2,
        title: "Dolphin Jump",
        map: "
            #######
            #S.#.G#
            ##.$.##
            #######
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 6,
        hint: "Jump like a dolphin!",
    },
    Entry {
        id: 41,
        world: 2,
        title: "Tidal Wave",
        map: "
            ######
            #S.$##
            ###.##
            ##..##
            ##.###
            ##G###
            ######
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 8,
        hint: "Ride the tidal wave!",
    },
    Entry {
        id: 42,
        world: 2,
        title: "Octopus Arms",
        map: "
            #######
            ##.#$##
            #.S...#
            ##.##G#
            #######
        ",
        start: (2, 2, 1),
        blocks: ALL_MOVES,
        optimal_steps: 4,
        hint: "Like an octopus!",
    },
    Entry {
        id: 43,
        world: 2,
        title: "Sunken Ship",
        map: "
            ######
            #S.$$#
            ####.#
            ##$..#
            ##G###
            ######
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 7,
        hint: "Explore the sunken ship!",
    },
    Entry {
        id: 44,
        world: 2,
        title: "Kelp Forest",
        map: "
            #######
            #S.#$.#
            ##.#.##
            ##.$.##
            ####G##
            #######
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 8,
        hint: "Swim through the kelp!",
    },
    Entry {
        id: 45,
        world: 2,
        title: "Bubble Trail",
        map: "
            ######
            #S*$##
            ###.##
            ##..##
            ##$*##
            ##G###
            ######
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 8,
        hint: "Follow the bubbles!",
    },
    Entry {
        id: 46,
        world: 2,
        title: "Shark Dodge",
        map: "
            #######
            #S.$..#
            #####.#
            #####.#
            #G$...#
            #######
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 12,
        hint: "Dodge the sharks!",
    },
    Entry {
        id: 47,
        world: 2,
        title: "Coral Reef",
        map: "
            ######
            #S.$##
            ###..#
            ##*.G#
            ######
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 6,
        hint: "Beautiful coral reef!",
    },
    Entry {
        id: 48,
        world: 2,
        title: "Fish School",
        map: "
            ######
            #S.$.#
            ####.#
            ##.$.#
            ##.###
            ##G###
            ######
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 9,
        hint: "Swim with the fish!",
    },
    Entry {
        id: 49,
        world: 2,
        title: "Treasure Chest",
        map: "
            #######
            #S*$*$#
            #####.#
            #G$.$.#
            #######
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 10,
        hint: "Find the treasure!",
    },
    Entry {
        id: 50,
        world: 2,
        title: "Ocean Boss",
        map: "
            #######
            #S.$*.#
            #####.#
            ##*$..#
            ##.####
            ##.$$G#
            #######
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 14,
        hint: "Defeat the ocean boss!",
    },
    Entry {
        id: 51,
        world: 3,
        title: "Loop Intro",
        map: "
            ########
            #S....G#
            ########
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 2,
        hint: "Use Repeat to move 5 times!",
    },
    Entry {
        id: 52,
        world: 3,
        title: "Straight Line",
        map: "
            #########
            #S.....G#
            #########
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 2,
        hint: "Repeat → arrow!",
    },
    Entry {
        id: 53,
        world: 3,
        title: "Star Line",
        map: "
            ########
            #S*$*$G#
            ########
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 2,
        hint: "Stars and diamonds along a line!",
    },
    Entry {
        id: 54,
        world: 3,
        title: "Loop Corner",
        map: "
            ######
            #S...#
            ####.#
            ####.#
            ####G#
            ######
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 4,
        hint: "Loop right then loop down!",
    },
    Entry {
        id: 55,
        world: 3,
        title: "Square Walk",
        map: "
            ######
            #S...#
            ####.#
            ####.#
            ##G$.#
            ######
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 6,
        hint: "Walk in a square!",
    },
    Entry {
        id: 56,
        world: 3,
        title: "Repeat Down",
        map: "
            ######
            #S.$##
            ###.##
            ###.$#
            ####G#
            ######
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 4,
        hint: "Repeat: → then ↓!",
    },
    Entry {
        id: 57,
        world: 3,
        title: "Loop Gems",
        map: "
            ########
            #S$$$$G#
            ########
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 2,
        hint: "Collect all gems with a loop!",
    },
    Entry {
        id: 58,
        world: 3,
        title: "Staircase",
        map: "
            ######
            #S.###
            ##.$##
            ###..#
            ####G#
            ######
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 4,
        hint: "Go down the stairs with loops!",
    },
    Entry {
        id: 59,
        world: 3,
        title: "Desert Sprint",
        map: "
            ##########
            #S$.$.$.G#
            ##########
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 2,
        hint: "Sprint across the desert!",
    },
    Entry {
        id: 60,
        world: 3,
        title: "Cactus Path",
        map: "
            ######
            #S.$.#
            ####.#
            #G$..#
            ######
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 6,
        hint: "Avoid the cacti!",
    },
    Entry {
        id: 61,
        world: 3,
        title: "Oasis",
        map: "
            #######
            #S.$*.#
            #####.#
            #G$.$.#
            #######
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 6,
        hint: "Find the oasis!",
    },
    Entry {
        id: 62,
        world: 3,
        title: "Sand Dunes",
        map: "
            ########
            #S.#$.##
            ##.#.###
            ##.$.###
            ####G###
            ########
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 6,
        hint: "Over the sand dunes!",
    },
    Entry {
        id: 63,
        world: 3,
        title: "Pyramid Step",
        map: "
            #######
            #S.####
            ##.$###
            ###..##
            ####.$#
            #####G#
            #######
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 4,
        hint: "Climb the pyramid!",
    },
    Entry {
        id: 64,
        world: 3,
        title: "Mirage",
        map: "
            #######
            #S.$..#
            #.###.#
            #G$.$.#
            #######
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 6,
        hint: "Is it a mirage?",
    },
    Entry {
        id: 65,
        world: 3,
        title: "Scarab Trail",
        map: "
            ########
            #S$.$.$#
            ######G#
            ########
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 3,
        hint: "Follow the scarabs!",
    },
    Entry {
        id: 66,
        world: 3,
        title: "Double Loop",
        map: "
            ######
            #S.$.#
            ####.#
            ####.#
            ####.#
            ####G#
            ######
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 4,
        hint: "Two loops in one!",
    },
    Entry {
        id: 67,
        world: 3,
        title: "Sand Snake",
        map: "
            #######
            #S.$.##
            ####.##
            ##$..##
            ##.####
            ##.$G##
            #######
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 8,
        hint: "Slither like a snake!",
    },
    Entry {
        id: 68,
        world: 3,
        title: "Tomb Entry",
        map: "
            ######
            #S.$*#
            ####.#
            ##*$.#
            ##G###
            ######
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 7,
        hint: "Enter the tomb!",
    },
    Entry {
        id: 69,
        world: 3,
        title: "Loop Practice",
        map: "
            #######
            #S.$..#
            #####.#
            #####.#
            #####G#
            #######
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 4,
        hint: "Practice your loops!",
    },
    Entry {
        id: 70,
        world: 3,
        title: "Desert Cross",
        map: "
            #######
            ###$###
            ###.###
            #$.S.$#
            ###.###
            ###G###
            #######
        ",
        start: (3, 3, 2),
        blocks: ALL_MOVES,
        optimal_steps: 2,
        hint: "A desert crossroads!",
    },
    Entry {
        id: 71,
        world: 3,
        title: "Camel Ride",
        map: "
            ########
            #S$.$..#
            ######.#
            #G$.$..#
            ########
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 6,
        hint: "Ride the camel!",
    },
    Entry {
        id: 72,
        world: 3,
        title: "Sandstorm",
        map: "
            ######
            #S.$.#
            ####.#
            ##$*.#
            ##G###
            ######
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 7,
        hint: "Brave the sandstorm!",
    },
    Entry {
        id: 73,
        world: 3,
        title: "Pharaoh Path",
        map: "
            #######
            #S.$$##
            ####.##
            ####.$#
            #####.#
            #####G#
            #######
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 7,
        hint: "Walk the pharaoh path!",
    },
    Entry {
        id: 74,
        world: 3,
        title: "Sphinx Riddle",
        map: "
            ########
            #S*$*$*#
            ######.#
            #G$.$..#
            ########
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 6,
        hint: "Solve the sphinx riddle!",
    },
    Entry {
        id: 75,
        world: 3,
        title: "Desert Boss",
        map: "
            ########
            #S.$.$*#
            ######.#
            ##$.$..#
            ##.#####
            ##.$$G##
            ########
        ",
        start: (1, 1, 1),
        blocks: ALL_MOVES,
        optimal_steps: 10,
        hint: "Defeat the desert boss!",
    },
];
