//! Per-player equipped outfit.
//!
//! `PlayerOutfit` is an immutable snapshot: `equip` and `unequip` return a
//! new value and never mutate in place, so callers own persistence and any
//! last-writer-wins arbitration between rapid taps.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::wardrobe::{Slot, WardrobeCatalog};

/// One optional item id per equip slot. All-empty for a new player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerOutfit {
    #[serde(default)]
    pub hat: Option<String>,
    #[serde(default)]
    pub shirt: Option<String>,
    #[serde(default)]
    pub pants: Option<String>,
    #[serde(default)]
    pub shoes: Option<String>,
    #[serde(default)]
    pub accessory: Option<String>,
}

impl PlayerOutfit {
    pub fn slot(&self, slot: Slot) -> Option<&str> {
        match slot {
            Slot::Hat => self.hat.as_deref(),
            Slot::Shirt => self.shirt.as_deref(),
            Slot::Pants => self.pants.as_deref(),
            Slot::Shoes => self.shoes.as_deref(),
            Slot::Accessory => self.accessory.as_deref(),
        }
    }

    fn with_slot(&self, slot: Slot, value: Option<String>) -> PlayerOutfit {
        let mut next = self.clone();
        match slot {
            Slot::Hat => next.hat = value,
            Slot::Shirt => next.shirt = value,
            Slot::Pants => next.pants = value,
            Slot::Shoes => next.shoes = value,
            Slot::Accessory => next.accessory = value,
        }
        next
    }

    /// Equip `item_id` into `slot`, returning the new outfit. The item must
    /// exist in the catalog, declare exactly this slot, and be in the
    /// player's unlocked set; the other four slots are left untouched.
    pub fn equip(
        &self,
        catalog: &WardrobeCatalog,
        unlocked: &HashSet<String>,
        slot: Slot,
        item_id: &str,
    ) -> Result<PlayerOutfit, GameError> {
        let item = catalog.get_item(item_id)?;
        if item.slot != slot {
            return Err(GameError::SlotMismatch {
                item: item_id.to_string(),
                expected: item.slot.name(),
                requested: slot.name(),
            });
        }
        if !unlocked.contains(item_id) {
            return Err(GameError::NotUnlocked(item_id.to_string()));
        }
        Ok(self.with_slot(slot, Some(item_id.to_string())))
    }

    /// Empty out `slot`. Unequipping an already-empty slot is a no-op.
    pub fn unequip(&self, slot: Slot) -> PlayerOutfit {
        self.with_slot(slot, None)
    }

    /// Equipped item ids in stable slot order, skipping empty slots. This is
    /// what the character compositor renders from.
    pub fn equipped_items(&self) -> Vec<&str> {
        Slot::ALL.iter().filter_map(|&s| self.slot(s)).collect()
    }
}
