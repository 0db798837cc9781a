//! Player progress persistence.
//!
//! The core treats storage as an external collaborator behind
//! [`ProgressStore`]; its failures surface as `GameError::Persistence` and
//! are never swallowed. The browser build persists to LocalStorage as
//! versionless JSON records keyed per player; `MemoryStore` backs native
//! runs and tests.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::levels::LevelCatalog;
use crate::outfit::PlayerOutfit;

/// Everything recorded about one player between sessions.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(default)]
    pub outfit: PlayerOutfit,
    #[serde(default)]
    pub unlocked_items: HashSet<String>,
    /// Best star rating per completed level number.
    #[serde(default)]
    pub completed: HashMap<u32, u8>,
    #[serde(default)]
    pub coins: u32,
}

pub trait ProgressStore {
    /// All-empty record for a player seen for the first time.
    fn load_outfit(&self, player: &str) -> Result<PlayerOutfit, GameError>;
    fn save_outfit(&self, player: &str, outfit: &PlayerOutfit) -> Result<(), GameError>;
    fn load_unlocked_items(&self, player: &str) -> Result<HashSet<String>, GameError>;
    fn load_completed_levels(&self, player: &str) -> Result<HashSet<u32>, GameError>;
    fn load_coins(&self, player: &str) -> Result<u32, GameError>;
    /// Record a completion, keeping the best star rating seen so far.
    fn record_completion(&self, player: &str, level: u32, stars: u8) -> Result<(), GameError>;
    /// Level-granted wardrobe items are explicit unlock events; they do not
    /// go through `WardrobeCatalog::can_unlock`.
    fn grant_items(&self, player: &str, items: &[&str]) -> Result<(), GameError>;
    fn add_coins(&self, player: &str, coins: u32) -> Result<(), GameError>;
}

/// The gameplay surface's report-back path: rate the run, and if the level
/// was passed, record the completion and hand out its rewards. Returns the
/// star count either way; a run below `target_score` records nothing.
pub fn complete_level(
    levels: &LevelCatalog,
    store: &dyn ProgressStore,
    player: &str,
    number: u32,
    score: i64,
) -> Result<u8, GameError> {
    let stars = levels.compute_stars(number, score)?;
    let lvl = levels.get_level(number)?;
    if score < i64::from(lvl.target_score) {
        return Ok(stars);
    }
    store.record_completion(player, number, stars)?;
    store.add_coins(player, lvl.rewards.coins)?;
    if !lvl.rewards.items.is_empty() {
        store.grant_items(player, lvl.rewards.items)?;
    }
    Ok(stars)
}

// --- In-memory store (native + tests) ----------------------------------------

#[derive(Default)]
pub struct MemoryStore {
    records: std::cell::RefCell<HashMap<String, PlayerRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read<T>(&self, player: &str, f: impl FnOnce(&PlayerRecord) -> T) -> T {
        let records = self.records.borrow();
        match records.get(player) {
            Some(record) => f(record),
            None => f(&PlayerRecord::default()),
        }
    }

    fn write(&self, player: &str, f: impl FnOnce(&mut PlayerRecord)) {
        let mut records = self.records.borrow_mut();
        f(records.entry(player.to_string()).or_default());
    }
}

impl ProgressStore for MemoryStore {
    fn load_outfit(&self, player: &str) -> Result<PlayerOutfit, GameError> {
        Ok(self.read(player, |r| r.outfit.clone()))
    }

    fn save_outfit(&self, player: &str, outfit: &PlayerOutfit) -> Result<(), GameError> {
        self.write(player, |r| r.outfit = outfit.clone());
        Ok(())
    }

    fn load_unlocked_items(&self, player: &str) -> Result<HashSet<String>, GameError> {
        Ok(self.read(player, |r| r.unlocked_items.clone()))
    }

    fn load_completed_levels(&self, player: &str) -> Result<HashSet<u32>, GameError> {
        Ok(self.read(player, |r| r.completed.keys().copied().collect()))
    }

    fn load_coins(&self, player: &str) -> Result<u32, GameError> {
        Ok(self.read(player, |r| r.coins))
    }

    fn record_completion(&self, player: &str, level: u32, stars: u8) -> Result<(), GameError> {
        self.write(player, |r| {
            let best = r.completed.entry(level).or_insert(0);
            *best = (*best).max(stars);
        });
        Ok(())
    }

    fn grant_items(&self, player: &str, items: &[&str]) -> Result<(), GameError> {
        self.write(player, |r| {
            for id in items {
                r.unlocked_items.insert((*id).to_string());
            }
        });
        Ok(())
    }

    fn add_coins(&self, player: &str, coins: u32) -> Result<(), GameError> {
        self.write(player, |r| r.coins = r.coins.saturating_add(coins));
        Ok(())
    }
}

// --- LocalStorage store (wasm only) ------------------------------------------

#[cfg(target_arch = "wasm32")]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    fn key(player: &str) -> String {
        format!("jingle_match_player_{player}")
    }

    fn storage() -> Result<web_sys::Storage, GameError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| GameError::Persistence("LocalStorage unavailable".into()))
    }

    fn load_record(player: &str) -> Result<PlayerRecord, GameError> {
        let storage = Self::storage()?;
        let json = storage
            .get_item(&Self::key(player))
            .map_err(|_| GameError::Persistence("LocalStorage read failed".into()))?;
        match json {
            Some(json) => serde_json::from_str(&json).map_err(|e| {
                log::warn!("corrupt player record for '{player}': {e}");
                GameError::Persistence(format!("corrupt player record: {e}"))
            }),
            None => {
                log::info!("no saved record for '{player}', starting fresh");
                Ok(PlayerRecord::default())
            }
        }
    }

    fn save_record(player: &str, record: &PlayerRecord) -> Result<(), GameError> {
        let storage = Self::storage()?;
        let json = serde_json::to_string(record)
            .map_err(|e| GameError::Persistence(format!("serialize failed: {e}")))?;
        storage
            .set_item(&Self::key(player), &json)
            .map_err(|_| GameError::Persistence("LocalStorage write failed".into()))
    }

    fn update(player: &str, f: impl FnOnce(&mut PlayerRecord)) -> Result<(), GameError> {
        let mut record = Self::load_record(player)?;
        f(&mut record);
        Self::save_record(player, &record)
    }
}

#[cfg(target_arch = "wasm32")]
impl ProgressStore for LocalStorageStore {
    fn load_outfit(&self, player: &str) -> Result<PlayerOutfit, GameError> {
        Ok(Self::load_record(player)?.outfit)
    }

    fn save_outfit(&self, player: &str, outfit: &PlayerOutfit) -> Result<(), GameError> {
        Self::update(player, |r| r.outfit = outfit.clone())
    }

    fn load_unlocked_items(&self, player: &str) -> Result<HashSet<String>, GameError> {
        Ok(Self::load_record(player)?.unlocked_items)
    }

    fn load_completed_levels(&self, player: &str) -> Result<HashSet<u32>, GameError> {
        Ok(Self::load_record(player)?.completed.keys().copied().collect())
    }

    fn load_coins(&self, player: &str) -> Result<u32, GameError> {
        Ok(Self::load_record(player)?.coins)
    }

    fn record_completion(&self, player: &str, level: u32, stars: u8) -> Result<(), GameError> {
        Self::update(player, |r| {
            let best = r.completed.entry(level).or_insert(0);
            *best = (*best).max(stars);
        })
    }

    fn grant_items(&self, player: &str, items: &[&str]) -> Result<(), GameError> {
        Self::update(player, |r| {
            for id in items {
                r.unlocked_items.insert((*id).to_string());
            }
        })
    }

    fn add_coins(&self, player: &str, coins: u32) -> Result<(), GameError> {
        Self::update(player, |r| r.coins = r.coins.saturating_add(coins))
    }
}
