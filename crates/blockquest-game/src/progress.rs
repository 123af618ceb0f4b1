//! Player progress: completed levels, best ratings, daily streak, world
//! unlocks and badges.
//!
//! [`Progress`] is plain data. Persisting it is the caller's job; it
//! round-trips through JSON with [`Progress::to_json`] and
//! [`Progress::from_json`]. Days are caller-supplied day numbers (for
//! example days since the Unix epoch in the player's time zone).

use crate::error::GameResult;
use crate::scoring::LevelOutcome;
use blockquest_levels::{TOTAL_LEVELS, WORLD_COUNT};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Levels per world.
const WORLD_SIZE: u32 = 25;

/// Completed-level counts that unlock each world.
pub const WORLD_THRESHOLDS: [(u32, usize); 7] = [
    (2, 15),
    (3, 35),
    (4, 60),
    (5, 85),
    (6, 110),
    (7, 135),
    (8, 165),
];

/// The world a level id belongs to.
pub fn world_of(level_id: u32) -> u32 {
    level_id.saturating_sub(1) / WORLD_SIZE + 1
}

// ══════════════════════════════════════════════════════════════════════════════
// Badges
// ══════════════════════════════════════════════════════════════════════════════

/// When a badge is awarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeRule {
    /// At least this many levels completed.
    Completed(usize),
    /// Best ratings summing to at least this many stars.
    TotalStars(u32),
    /// A daily streak at least this long.
    Streak(u32),
    /// At least `count` completed levels with ids in `first..=last`.
    CompletedInRange { first: u32, last: u32, count: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeDef {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub rule: BadgeRule,
}

const fn badge(id: &'static str, name: &'static str, icon: &'static str, rule: BadgeRule) -> BadgeDef {
    BadgeDef { id, name, icon, rule }
}

pub static BADGES: [BadgeDef; 16] = [
    badge("first_step", "First Step", "👣", BadgeRule::Completed(1)),
    badge("ten_levels", "Explorer", "🗺️", BadgeRule::Completed(10)),
    badge("twenty_five", "Adventurer", "⚔️", BadgeRule::Completed(25)),
    badge("fifty_levels", "Champion", "🏆", BadgeRule::Completed(50)),
    badge("hundred_levels", "Master Coder", "👑", BadgeRule::Completed(100)),
    badge("all_levels", "Legend", "🌟", BadgeRule::Completed(200)),
    badge("star_collector", "Star Collector", "⭐", BadgeRule::TotalStars(50)),
    badge("star_master", "Star Master", "🌠", BadgeRule::TotalStars(200)),
    badge("streak_3", "3-Day Streak", "🔥", BadgeRule::Streak(3)),
    badge("streak_7", "Weekly Warrior", "💪", BadgeRule::Streak(7)),
    badge("streak_30", "Monthly Master", "📅", BadgeRule::Streak(30)),
    badge(
        "world1_done",
        "Grasslands Hero",
        "🌿",
        BadgeRule::CompletedInRange { first: 1, last: 25, count: 25 },
    ),
    badge(
        "world2_done",
        "Ocean Explorer",
        "🌊",
        BadgeRule::CompletedInRange { first: 26, last: 50, count: 25 },
    ),
    badge(
        "world3_done",
        "Desert Survivor",
        "🏜️",
        BadgeRule::CompletedInRange { first: 51, last: 75, count: 25 },
    ),
    badge(
        "loop_master",
        "Loop Master",
        "🔄",
        BadgeRule::CompletedInRange { first: 51, last: 100, count: 50 },
    ),
    badge(
        "logic_pro",
        "Logic Pro",
        "🧠",
        BadgeRule::CompletedInRange { first: 101, last: 150, count: 50 },
    ),
];

/// A badge the player holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarnedBadge {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub earned_day: i64,
}

// ══════════════════════════════════════════════════════════════════════════════
// Streak
// ══════════════════════════════════════════════════════════════════════════════

/// Consecutive days with at least one completed level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Streak {
    pub count: u32,
    pub last_day: Option<i64>,
}

impl Streak {
    /// Count a play on `day`: same day keeps the streak, the next day
    /// extends it, anything else starts over at one.
    pub fn touch(&mut self, day: i64) {
        match self.last_day {
            Some(last) if last == day => return,
            Some(last) if last + 1 == day => self.count += 1,
            _ => self.count = 1,
        }
        self.last_day = Some(day);
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Progress
// ══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Progress {
    /// Completed level ids in completion order, without duplicates.
    completed: Vec<u32>,
    /// Best rating per level.
    stars: BTreeMap<u32, u8>,
    streak: Streak,
    /// Unlocked world ids in unlock order.
    unlocked_worlds: Vec<u32>,
    /// Every world unlocked regardless of thresholds.
    full_unlock: bool,
    badges: Vec<EarnedBadge>,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            completed: Vec::new(),
            stars: BTreeMap::new(),
            streak: Streak::default(),
            unlocked_worlds: vec![1],
            full_unlock: false,
            badges: Vec::new(),
        }
    }
}

/// Snapshot for a progress screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub completed_count: usize,
    pub completed_levels: Vec<u32>,
    pub stars_per_level: BTreeMap<u32, u8>,
    pub total_stars: u32,
    pub streak: Streak,
    pub badges: Vec<EarnedBadge>,
    pub unlocked_worlds: Vec<u32>,
    pub total_levels: u32,
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed level played on `day`. Returns the badges earned
    /// by this completion.
    pub fn record(&mut self, outcome: &LevelOutcome, day: i64) -> Vec<EarnedBadge> {
        if !self.completed.contains(&outcome.level_id) {
            self.completed.push(outcome.level_id);
        }
        let best = self.stars.entry(outcome.level_id).or_insert(0);
        if outcome.stars > *best {
            *best = outcome.stars;
        }
        debug!(
            level = outcome.level_id,
            stars = outcome.stars,
            perfect = outcome.perfect,
            completed = self.completed.len(),
            "level recorded"
        );

        self.streak.touch(day);
        self.unlock_worlds();
        self.award_badges(day)
    }

    /// Open every world, or stop forcing them open. Turning the flag off
    /// keeps worlds already unlocked.
    pub fn set_full_unlock(&mut self, on: bool) {
        self.full_unlock = on;
        if on {
            self.unlocked_worlds = (1..=WORLD_COUNT).collect();
            info!("all worlds unlocked");
        }
    }

    pub fn is_completed(&self, level_id: u32) -> bool {
        self.completed.contains(&level_id)
    }

    /// Best rating for a level, 0 if never completed.
    pub fn best_stars(&self, level_id: u32) -> u8 {
        self.stars.get(&level_id).copied().unwrap_or(0)
    }

    pub fn total_stars(&self) -> u32 {
        self.stars.values().map(|&s| u32::from(s)).sum()
    }

    pub fn completed_levels(&self) -> &[u32] {
        &self.completed
    }

    pub fn streak(&self) -> Streak {
        self.streak
    }

    pub fn badges(&self) -> &[EarnedBadge] {
        &self.badges
    }

    pub fn has_badge(&self, id: &str) -> bool {
        self.badges.iter().any(|b| b.id == id)
    }

    pub fn unlocked_worlds(&self) -> &[u32] {
        &self.unlocked_worlds
    }

    pub fn is_world_unlocked(&self, world: u32) -> bool {
        self.full_unlock || self.unlocked_worlds.contains(&world)
    }

    pub fn is_level_unlocked(&self, level_id: u32) -> bool {
        (1..=TOTAL_LEVELS).contains(&level_id) && self.is_world_unlocked(world_of(level_id))
    }

    pub fn summary(&self) -> ProgressSummary {
        ProgressSummary {
            completed_count: self.completed.len(),
            completed_levels: self.completed.clone(),
            stars_per_level: self.stars.clone(),
            total_stars: self.total_stars(),
            streak: self.streak,
            badges: self.badges.clone(),
            unlocked_worlds: self.unlocked_worlds.clone(),
            total_levels: TOTAL_LEVELS,
        }
    }

    /// Forget everything, including the full-unlock flag.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_json(&self) -> GameResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> GameResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    fn unlock_worlds(&mut self) {
        if self.full_unlock {
            self.unlocked_worlds = (1..=WORLD_COUNT).collect();
            return;
        }
        let done = self.completed.len();
        for (world, threshold) in WORLD_THRESHOLDS {
            if done >= threshold && !self.unlocked_worlds.contains(&world) {
                info!(world, completed = done, "world unlocked");
                self.unlocked_worlds.push(world);
            }
        }
    }

    fn award_badges(&mut self, day: i64) -> Vec<EarnedBadge> {
        let mut earned = Vec::new();
        for def in &BADGES {
            if self.has_badge(def.id) || !self.meets(def.rule) {
                continue;
            }
            info!(badge = def.id, "badge earned");
            let badge = EarnedBadge {
                id: def.id.to_string(),
                name: def.name.to_string(),
                icon: def.icon.to_string(),
                earned_day: day,
            };
            self.badges.push(badge.clone());
            earned.push(badge);
        }
        earned
    }

    fn meets(&self, rule: BadgeRule) -> bool {
        match rule {
            BadgeRule::Completed(n) => self.completed.len() >= n,
            BadgeRule::TotalStars(n) => self.total_stars() >= n,
            BadgeRule::Streak(n) => self.streak.count >= n,
            BadgeRule::CompletedInRange { first, last, count } => {
                self.completed
                    .iter()
                    .filter(|&&id| (first..=last).contains(&id))
                    .count()
                    >= count
            }
        }
    }
}
