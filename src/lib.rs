//! Jingle Match core crate.
//!
//! Progression and wardrobe logic for a casual Christmas match-3 web game:
//! the validated level table (star thresholds, unlock costs, rewards), the
//! cosmetic wardrobe catalog, per-player outfit state, and the persistence
//! boundary. Rendering, the match-3 board itself, routing and auth live in
//! the JS shell; this crate only answers its queries.

use wasm_bindgen::prelude::*;

pub mod error;
pub mod levels;
pub mod outfit;
pub mod persist;
pub mod wardrobe;

pub use error::GameError;
pub use levels::{LevelCatalog, LevelConfig, Rewards, World};
pub use outfit::PlayerOutfit;
pub use persist::{MemoryStore, PlayerRecord, ProgressStore, complete_level};
pub use wardrobe::{Rarity, Slot, UnlockContext, UnlockMethod, WardrobeCatalog, WardrobeItem};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    let _ = console_log::init_with_level(log::Level::Info);
}

// -----------------------------------------------------------------------------
// JS shell bindings. Catalog data goes over as JSON strings; errors become
// JsValue messages the shell can show or log.
// -----------------------------------------------------------------------------

/// Levels of one world for the level-selection surface, as a JSON array in
/// ascending level order. `world` is a world name from the closed set.
#[wasm_bindgen]
pub fn levels_for_world(world: &str) -> Result<String, JsValue> {
    let world = World::from_name(world)
        .ok_or_else(|| JsValue::from_str(&format!("unknown world '{world}'")))?;
    let levels = levels::catalog().list_by_world(world);
    serde_json::to_string(&levels).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Star rating for a finished run, reported back by the gameplay surface.
#[wasm_bindgen]
pub fn stars_for(level: u32, score: i32) -> Result<u8, JsValue> {
    Ok(levels::catalog().compute_stars(level, i64::from(score))?)
}

/// Wardrobe entries for one equip slot, catalog order, as a JSON array.
#[wasm_bindgen]
pub fn wardrobe_for_slot(slot: &str) -> Result<String, JsValue> {
    let slot = Slot::from_name(slot)
        .ok_or_else(|| JsValue::from_str(&format!("unknown slot '{slot}'")))?;
    let items = wardrobe::catalog().items_by_slot(slot);
    serde_json::to_string(&items).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Whether the signed-in player can open a level right now, combining the
/// saved completion set and coin balance with the catalog's unlock rules.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn level_unlocked(player: &str, level: u32) -> Result<bool, JsValue> {
    let store = persist::LocalStorageStore;
    let completed = store.load_completed_levels(player)?;
    let coins = store.load_coins(player)?;
    Ok(levels::catalog().is_unlocked(level, &completed, coins)?)
}

/// Completion report from the gameplay surface: rates the run, records a
/// pass and banks its rewards. Returns the star count.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn report_completion(player: &str, level: u32, score: i32) -> Result<u8, JsValue> {
    let store = persist::LocalStorageStore;
    Ok(complete_level(
        levels::catalog(),
        &store,
        player,
        level,
        i64::from(score),
    )?)
}

/// Equip a wardrobe item for the signed-in player and persist the new
/// outfit. Fails if the item is unknown, in the wrong slot, or not owned.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn equip_item(player: &str, slot: &str, item_id: &str) -> Result<(), JsValue> {
    let slot = Slot::from_name(slot)
        .ok_or_else(|| JsValue::from_str(&format!("unknown slot '{slot}'")))?;
    let store = persist::LocalStorageStore;
    let unlocked = store.load_unlocked_items(player)?;
    let outfit = store.load_outfit(player)?;
    let next = outfit.equip(wardrobe::catalog(), &unlocked, slot, item_id)?;
    Ok(store.save_outfit(player, &next)?)
}

/// Clear one equip slot for the signed-in player. No-op if already empty.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn unequip_item(player: &str, slot: &str) -> Result<(), JsValue> {
    let slot = Slot::from_name(slot)
        .ok_or_else(|| JsValue::from_str(&format!("unknown slot '{slot}'")))?;
    let store = persist::LocalStorageStore;
    let outfit = store.load_outfit(player)?;
    Ok(store.save_outfit(player, &outfit.unequip(slot))?)
}

/// Equipped item ids for the character compositor, as a JSON array.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn equipped_items(player: &str) -> Result<String, JsValue> {
    let store = persist::LocalStorageStore;
    let outfit = store.load_outfit(player)?;
    serde_json::to_string(&outfit.equipped_items())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
