//! Wardrobe: the cosmetic item catalog and unlock rules.
//!
//! Like the level table, the item table is static content validated once at
//! load. Items carry no gameplay effect; rarity is a display/sorting tier.

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::Serialize;

use crate::error::GameError;

mod items;

pub use items::WARDROBE_ITEMS;

/// The five cosmetic equip positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Slot {
    Hat,
    Shirt,
    Pants,
    Shoes,
    Accessory,
}

impl Slot {
    pub const ALL: [Slot; 5] = [
        Slot::Hat,
        Slot::Shirt,
        Slot::Pants,
        Slot::Shoes,
        Slot::Accessory,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Slot::Hat => "hat",
            Slot::Shirt => "shirt",
            Slot::Pants => "pants",
            Slot::Shoes => "shoes",
            Slot::Accessory => "accessory",
        }
    }

    pub fn from_name(name: &str) -> Option<Slot> {
        Self::ALL.iter().copied().find(|s| s.name() == name.trim())
    }
}

/// Display/sorting tier; derives `Ord` so common < uncommon < ... < legendary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

/// How an item becomes available. The variant carries the data the method
/// needs, so a purchase without a price cannot be authored at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum UnlockMethod {
    /// Available to every player from the start.
    Default,
    /// Bought with coins.
    Purchase { price: u32 },
    /// Granted when the named achievement is earned.
    Achievement { id: &'static str },
    /// Available only while the named event window is active.
    Event { id: &'static str },
    /// Granted on completing the given level (recorded as an explicit
    /// unlock by the persistence layer, not re-derived here).
    LevelReward { level: u32 },
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct WardrobeItem {
    pub id: &'static str,
    pub name: &'static str,
    pub slot: Slot,
    pub rarity: Rarity,
    pub unlock: UnlockMethod,
    /// Whether visual assets for this item have shipped yet.
    pub has_assets: bool,
}

/// Everything `can_unlock` needs to know about the player and the outside
/// world. Active event ids come from an external event-schedule collaborator.
pub struct UnlockContext<'a> {
    pub currency: u32,
    pub achievements: &'a HashSet<String>,
    pub player_level: u32,
    pub active_events: &'a HashSet<String>,
}

/// Validated item table, kept in declaration order.
pub struct WardrobeCatalog {
    items: Vec<WardrobeItem>,
}

impl WardrobeCatalog {
    pub fn new(items: Vec<WardrobeItem>) -> Result<Self, GameError> {
        let mut seen = HashSet::new();
        for item in &items {
            if item.id.is_empty() || item.name.is_empty() {
                return Err(GameError::InvalidCatalog(
                    "wardrobe item with empty id or name".into(),
                ));
            }
            if !seen.insert(item.id) {
                return Err(GameError::InvalidCatalog(format!(
                    "duplicate wardrobe item id '{}'",
                    item.id
                )));
            }
            match item.unlock {
                UnlockMethod::Purchase { price: 0 } => {
                    return Err(GameError::InvalidCatalog(format!(
                        "purchasable item '{}' has price 0",
                        item.id
                    )));
                }
                UnlockMethod::Achievement { id } | UnlockMethod::Event { id } if id.is_empty() => {
                    return Err(GameError::InvalidCatalog(format!(
                        "item '{}' references an empty achievement/event id",
                        item.id
                    )));
                }
                UnlockMethod::LevelReward { level: 0 } => {
                    return Err(GameError::InvalidCatalog(format!(
                        "item '{}' is rewarded by nonexistent level 0",
                        item.id
                    )));
                }
                _ => {}
            }
        }
        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WardrobeItem> {
        self.items.iter()
    }

    pub fn get_item(&self, id: &str) -> Result<&WardrobeItem, GameError> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or_else(|| GameError::NotFound(id.to_string()))
    }

    /// Items for one equip slot, catalog declaration order.
    pub fn items_by_slot(&self, slot: Slot) -> Vec<&WardrobeItem> {
        self.items.iter().filter(|item| item.slot == slot).collect()
    }

    /// Whether the player could unlock `item` right now. Level-reward items
    /// are treated as reachable once the player has progressed that far;
    /// the actual grant is an explicit event at the persistence layer.
    pub fn can_unlock(&self, item: &WardrobeItem, ctx: &UnlockContext<'_>) -> bool {
        match item.unlock {
            UnlockMethod::Default => true,
            UnlockMethod::Purchase { price } => ctx.currency >= price,
            UnlockMethod::Achievement { id } => ctx.achievements.contains(id),
            UnlockMethod::Event { id } => ctx.active_events.contains(id),
            UnlockMethod::LevelReward { level } => ctx.player_level >= level,
        }
    }
}

/// Shared validated catalog, built once. As with levels, a failure here is
/// a content-authoring defect and aborts loudly.
pub fn catalog() -> &'static WardrobeCatalog {
    static CATALOG: OnceLock<WardrobeCatalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        let catalog = WardrobeCatalog::new(WARDROBE_ITEMS.to_vec())
            .expect("shipped wardrobe table failed validation");
        log::info!("wardrobe catalog loaded ({} items)", catalog.len());
        catalog
    })
}
