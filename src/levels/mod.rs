//! Level progression catalog.
//!
//! Levels are static content: one `LevelConfig` per level number, grouped
//! into contiguous per-world runs. The catalog validates the whole table
//! once at load (contiguity, threshold ordering, reward references) and is
//! immutable afterwards, so it can be shared freely across callers.

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::Serialize;

use crate::error::GameError;
use crate::wardrobe::{self, WardrobeCatalog};

// Per-world level tables live in separate files:
mod aurora;
mod snowfall;
mod toyshop;

pub use aurora::AURORA_LEVELS;
pub use snowfall::SNOWFALL_LEVELS;
pub use toyshop::TOYSHOP_LEVELS;

/// Named world groupings. Each world owns a contiguous run of levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum World {
    Snowfall,
    Toyshop,
    Aurora,
}

impl World {
    pub const ALL: [World; 3] = [World::Snowfall, World::Toyshop, World::Aurora];

    pub fn name(self) -> &'static str {
        match self {
            World::Snowfall => "snowfall",
            World::Toyshop => "toyshop",
            World::Aurora => "aurora",
        }
    }

    pub fn from_name(name: &str) -> Option<World> {
        Self::ALL.iter().copied().find(|w| w.name() == name.trim())
    }
}

/// Completion rewards: coins plus wardrobe items granted outright.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Rewards {
    pub coins: u32,
    pub items: &'static [&'static str],
}

/// One level definition (immutable content).
#[derive(Clone, Copy, Debug, Serialize)]
pub struct LevelConfig {
    pub number: u32,
    pub world: World,
    pub target_score: u32,
    /// Score cutoffs for 1/2/3 stars, non-decreasing.
    pub star_thresholds: [u32; 3],
    /// Currency cost to unlock out of sequence; 0 = sequential only.
    pub unlock_cost: u32,
    pub rewards: Rewards,
}

/// Validated, ordered level table.
pub struct LevelCatalog {
    levels: Vec<LevelConfig>,
}

impl LevelCatalog {
    /// Build a catalog, rejecting malformed content before anything is
    /// exposed to callers. Reward item ids are resolved against the
    /// wardrobe catalog so a level can never grant a phantom item.
    pub fn new(levels: Vec<LevelConfig>, wardrobe: &WardrobeCatalog) -> Result<Self, GameError> {
        for (i, lvl) in levels.iter().enumerate() {
            let expected = i as u32 + 1;
            if lvl.number != expected {
                return Err(GameError::InvalidCatalog(format!(
                    "level table entry {i} has number {}, expected {expected}",
                    lvl.number
                )));
            }
            let [t1, t2, t3] = lvl.star_thresholds;
            if t1 > t2 || t2 > t3 {
                return Err(GameError::InvalidCatalog(format!(
                    "level {} star thresholds [{t1}, {t2}, {t3}] are not non-decreasing",
                    lvl.number
                )));
            }
            for id in lvl.rewards.items {
                if wardrobe.get_item(id).is_err() {
                    return Err(GameError::InvalidCatalog(format!(
                        "level {} rewards unknown wardrobe item '{id}'",
                        lvl.number
                    )));
                }
            }
        }
        // Worlds must form contiguous runs: once a world's run ends it may
        // not reappear later in the table.
        let mut seen: Vec<World> = Vec::new();
        for lvl in &levels {
            match seen.last() {
                Some(&current) if current == lvl.world => {}
                _ => {
                    if seen.contains(&lvl.world) {
                        return Err(GameError::InvalidCatalog(format!(
                            "world {} is split across non-contiguous level runs",
                            lvl.world.name()
                        )));
                    }
                    seen.push(lvl.world);
                }
            }
        }
        Ok(Self { levels })
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LevelConfig> {
        self.levels.iter()
    }

    /// Look up a level by number.
    pub fn get_level(&self, number: u32) -> Result<&LevelConfig, GameError> {
        // Numbers are dense from 1, so the lookup is an index check.
        number
            .checked_sub(1)
            .and_then(|idx| self.levels.get(idx as usize))
            .ok_or(GameError::InvalidLevel(number))
    }

    /// All levels of one world in ascending number order. An empty world is
    /// not an error.
    pub fn list_by_world(&self, world: World) -> Vec<&LevelConfig> {
        self.levels.iter().filter(|l| l.world == world).collect()
    }

    /// Star rating for a completed level: the count of thresholds the score
    /// reached, ties inclusive (score == t1 is already 1 star).
    pub fn compute_stars(&self, number: u32, score: i64) -> Result<u8, GameError> {
        if score < 0 {
            return Err(GameError::InvalidInput(format!(
                "achieved score must be >= 0, got {score}"
            )));
        }
        let lvl = self.get_level(number)?;
        let stars = lvl
            .star_thresholds
            .iter()
            .filter(|&&t| i64::from(t) <= score)
            .count();
        Ok(stars as u8)
    }

    /// A level is open if it is the first, its predecessor is completed, or
    /// the player can afford to pay its unlock cost to skip ahead.
    pub fn is_unlocked(
        &self,
        number: u32,
        completed: &HashSet<u32>,
        currency: u32,
    ) -> Result<bool, GameError> {
        let lvl = self.get_level(number)?;
        if number == 1 || completed.contains(&(number - 1)) {
            return Ok(true);
        }
        Ok(lvl.unlock_cost > 0 && currency >= lvl.unlock_cost)
    }
}

fn all_levels() -> Vec<LevelConfig> {
    let mut levels = Vec::with_capacity(
        SNOWFALL_LEVELS.len() + TOYSHOP_LEVELS.len() + AURORA_LEVELS.len(),
    );
    levels.extend_from_slice(&SNOWFALL_LEVELS);
    levels.extend_from_slice(&TOYSHOP_LEVELS);
    levels.extend_from_slice(&AURORA_LEVELS);
    levels
}

/// Shared validated catalog, built once. A validation failure here is a
/// content-authoring defect and release blocking, so it aborts loudly
/// instead of surfacing a recoverable error to gameplay code.
pub fn catalog() -> &'static LevelCatalog {
    static CATALOG: OnceLock<LevelCatalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        let catalog = LevelCatalog::new(all_levels(), wardrobe::catalog())
            .expect("shipped level table failed validation");
        log::info!("level catalog loaded ({} levels)", catalog.len());
        catalog
    })
}
