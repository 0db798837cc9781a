//! Crate-wide error taxonomy.
//!
//! Catalog and outfit operations fail fast with a specific kind; nothing in
//! this crate substitutes fallback content for a bad lookup.

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Unknown item id (caller bug or stale reference).
    #[error("no wardrobe item with id '{0}'")]
    NotFound(String),

    /// Malformed argument, e.g. a negative score.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Level number outside the catalog.
    #[error("no level numbered {0}")]
    InvalidLevel(u32),

    /// Equip attempted into a slot the item does not declare.
    #[error("item '{item}' belongs in the {expected} slot, not {requested}")]
    SlotMismatch {
        item: String,
        expected: &'static str,
        requested: &'static str,
    },

    /// Equip attempted for an item the player has not unlocked.
    #[error("item '{0}' is not unlocked")]
    NotUnlocked(String),

    /// Content-authoring defect caught by catalog validation. Release
    /// blocking; must never reach an end user.
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    /// External persistence collaborator failure, propagated unchanged.
    /// Retry policy is owned by the caller.
    #[error("persistence failure: {0}")]
    Persistence(String),
}

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
