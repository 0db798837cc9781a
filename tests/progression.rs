// Behaviour tests for progression, unlock rules, outfit transforms and the
// in-memory progress store. Native-friendly, no browser APIs.

use std::collections::HashSet;

use jingle_match::{
    GameError, MemoryStore, PlayerOutfit, ProgressStore, Slot, UnlockContext, complete_level,
    levels, wardrobe,
};

fn owned(ids: &[&str]) -> HashSet<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

// --- star ratings -------------------------------------------------------------

#[test]
fn stars_follow_thresholds_with_inclusive_ties() {
    // Level 1 ships with thresholds [400, 700, 1000].
    let catalog = levels::catalog();
    assert_eq!(catalog.get_level(1).unwrap().star_thresholds, [400, 700, 1000]);
    assert_eq!(catalog.compute_stars(1, 399).unwrap(), 0);
    assert_eq!(catalog.compute_stars(1, 400).unwrap(), 1);
    assert_eq!(catalog.compute_stars(1, 999).unwrap(), 2);
    assert_eq!(catalog.compute_stars(1, 1000).unwrap(), 3);
    assert_eq!(catalog.compute_stars(1, 1_000_000).unwrap(), 3);
}

#[test]
fn stars_are_monotonic_in_score() {
    let catalog = levels::catalog();
    for lvl in catalog.iter() {
        let mut prev = 0;
        for score in (0..8000).step_by(50) {
            let stars = catalog.compute_stars(lvl.number, score).unwrap();
            assert!(stars >= prev, "stars dropped at level {} score {score}", lvl.number);
            prev = stars;
        }
    }
}

#[test]
fn stars_reject_bad_input() {
    let catalog = levels::catalog();
    assert!(matches!(
        catalog.compute_stars(1, -1),
        Err(GameError::InvalidInput(_))
    ));
    assert!(matches!(
        catalog.compute_stars(9999, 500),
        Err(GameError::InvalidLevel(9999))
    ));
    assert!(matches!(
        catalog.get_level(0),
        Err(GameError::InvalidLevel(0))
    ));
}

// --- unlock rules -------------------------------------------------------------

#[test]
fn first_level_is_always_open() {
    let catalog = levels::catalog();
    assert!(catalog.is_unlocked(1, &HashSet::new(), 0).unwrap());
}

#[test]
fn sequential_unlock_requires_previous_completion() {
    let catalog = levels::catalog();
    assert!(!catalog.is_unlocked(2, &HashSet::new(), 0).unwrap());
    assert!(catalog.is_unlocked(2, &HashSet::from([1]), 0).unwrap());
    // A cost of 0 means sequential only; coins cannot force it open.
    assert!(!catalog.is_unlocked(2, &HashSet::new(), 1_000_000).unwrap());
}

#[test]
fn world_gates_can_be_paid_open() {
    let catalog = levels::catalog();
    // Level 7 opens the Toyshop world at a 250 coin cost.
    assert_eq!(catalog.get_level(7).unwrap().unlock_cost, 250);
    assert!(!catalog.is_unlocked(7, &HashSet::new(), 249).unwrap());
    assert!(catalog.is_unlocked(7, &HashSet::new(), 250).unwrap());
    assert!(catalog.is_unlocked(7, &HashSet::from([6]), 0).unwrap());
    assert!(matches!(
        catalog.is_unlocked(9999, &HashSet::new(), 0),
        Err(GameError::InvalidLevel(9999))
    ));
}

// --- wardrobe unlock methods --------------------------------------------------

#[test]
fn can_unlock_covers_every_method() {
    let catalog = wardrobe::catalog();
    let no_achievements = HashSet::new();
    let no_events = HashSet::new();
    let broke = UnlockContext {
        currency: 0,
        achievements: &no_achievements,
        player_level: 1,
        active_events: &no_events,
    };

    // Default: always available.
    let hat = catalog.get_item("red_santa_hat").unwrap();
    assert!(catalog.can_unlock(hat, &broke));

    // Purchase: affordable or not.
    let elf = catalog.get_item("green_elf_hat").unwrap();
    assert!(!catalog.can_unlock(elf, &broke));
    let rich = UnlockContext { currency: 250, ..broke_ctx(&no_achievements, &no_events) };
    assert!(catalog.can_unlock(elf, &rich));

    // Achievement: earned or not.
    let bell = catalog.get_item("golden_bell").unwrap();
    assert!(!catalog.can_unlock(bell, &broke));
    let earned = owned(&["ring_1000_bells"]);
    let achiever = UnlockContext {
        currency: 0,
        achievements: &earned,
        player_level: 1,
        active_events: &no_events,
    };
    assert!(catalog.can_unlock(bell, &achiever));

    // Level reward: reachable once progressed far enough.
    let boots = catalog.get_item("frost_boots").unwrap();
    assert!(!catalog.can_unlock(boots, &broke));
    let veteran = UnlockContext { player_level: 6, ..broke_ctx(&no_achievements, &no_events) };
    assert!(catalog.can_unlock(boots, &veteran));

    // Event: only during the active window.
    let charm = catalog.get_item("mistletoe_charm").unwrap();
    assert!(!catalog.can_unlock(charm, &broke));
    let advent = owned(&["advent_2026"]);
    let festive = UnlockContext {
        currency: 0,
        achievements: &no_achievements,
        player_level: 1,
        active_events: &advent,
    };
    assert!(catalog.can_unlock(charm, &festive));
}

fn broke_ctx<'a>(
    achievements: &'a HashSet<String>,
    events: &'a HashSet<String>,
) -> UnlockContext<'a> {
    UnlockContext {
        currency: 0,
        achievements,
        player_level: 1,
        active_events: events,
    }
}

#[test]
fn unknown_item_lookup_fails() {
    assert!(matches!(
        wardrobe::catalog().get_item("tinsel_cape"),
        Err(GameError::NotFound(_))
    ));
}

// --- outfit transforms --------------------------------------------------------

#[test]
fn equip_replaces_only_the_target_slot() {
    let catalog = wardrobe::catalog();
    let unlocked = owned(&["red_santa_hat", "cozy_red_sweater"]);
    let outfit = PlayerOutfit::default()
        .equip(catalog, &unlocked, Slot::Shirt, "cozy_red_sweater")
        .unwrap();
    let next = outfit
        .equip(catalog, &unlocked, Slot::Hat, "red_santa_hat")
        .unwrap();
    assert_eq!(next.hat.as_deref(), Some("red_santa_hat"));
    assert_eq!(next.shirt.as_deref(), Some("cozy_red_sweater"));
    assert_eq!(next.pants, None);
    assert_eq!(next.shoes, None);
    assert_eq!(next.accessory, None);
    // The input snapshot is untouched.
    assert_eq!(outfit.hat, None);
}

#[test]
fn cross_slot_equips_always_fail() {
    let catalog = wardrobe::catalog();
    let outfit = PlayerOutfit::default();
    for item in catalog.iter() {
        let unlocked = owned(&[item.id]);
        for slot in Slot::ALL {
            let result = outfit.equip(catalog, &unlocked, slot, item.id);
            if slot == item.slot {
                assert!(result.is_ok(), "equip of '{}' into its own slot failed", item.id);
            } else {
                assert!(
                    matches!(result, Err(GameError::SlotMismatch { .. })),
                    "equip of '{}' into {} did not fail",
                    item.id,
                    slot.name()
                );
            }
        }
    }
}

#[test]
fn equip_requires_known_and_owned_items() {
    let catalog = wardrobe::catalog();
    let outfit = PlayerOutfit::default();
    assert!(matches!(
        outfit.equip(catalog, &owned(&[]), Slot::Hat, "tinsel_cape"),
        Err(GameError::NotFound(_))
    ));
    assert!(matches!(
        outfit.equip(catalog, &owned(&[]), Slot::Hat, "red_santa_hat"),
        Err(GameError::NotUnlocked(_))
    ));
}

#[test]
fn unequip_is_idempotent() {
    let catalog = wardrobe::catalog();
    let unlocked = owned(&["felt_slippers"]);
    let outfit = PlayerOutfit::default()
        .equip(catalog, &unlocked, Slot::Shoes, "felt_slippers")
        .unwrap();
    let once = outfit.unequip(Slot::Shoes);
    let twice = once.unequip(Slot::Shoes);
    assert_eq!(once, twice);
    assert_eq!(once.shoes, None);
}

#[test]
fn equipped_list_agrees_with_catalog_slots() {
    let catalog = wardrobe::catalog();
    let unlocked = owned(&["red_santa_hat", "plain_wool_pants", "golden_bell"]);
    let outfit = PlayerOutfit::default()
        .equip(catalog, &unlocked, Slot::Hat, "red_santa_hat")
        .unwrap()
        .equip(catalog, &unlocked, Slot::Pants, "plain_wool_pants")
        .unwrap()
        .equip(catalog, &unlocked, Slot::Accessory, "golden_bell")
        .unwrap();
    let listed = outfit.equipped_items();
    assert_eq!(listed.len(), 3);
    for id in listed {
        let item = catalog.get_item(id).unwrap();
        assert_eq!(outfit.slot(item.slot), Some(id));
    }
}

// --- persistence & completion flow --------------------------------------------

#[test]
fn memory_store_round_trips_outfits() {
    let store = MemoryStore::new();
    let catalog = wardrobe::catalog();
    let unlocked = owned(&["red_santa_hat"]);
    assert_eq!(store.load_outfit("noel").unwrap(), PlayerOutfit::default());

    let outfit = PlayerOutfit::default()
        .equip(catalog, &unlocked, Slot::Hat, "red_santa_hat")
        .unwrap();
    store.save_outfit("noel", &outfit).unwrap();
    assert_eq!(store.load_outfit("noel").unwrap(), outfit);
    // Other players are unaffected.
    assert_eq!(store.load_outfit("holly").unwrap(), PlayerOutfit::default());
}

#[test]
fn completing_a_level_records_stars_coins_and_item_grants() {
    let store = MemoryStore::new();
    let catalog = levels::catalog();

    // Level 3 rewards 70 coins and the snowflake pin.
    let stars = complete_level(catalog, &store, "noel", 3, 1400).unwrap();
    assert_eq!(stars, 3);
    assert!(store.load_completed_levels("noel").unwrap().contains(&3));
    assert_eq!(store.load_coins("noel").unwrap(), 70);
    assert!(store.load_unlocked_items("noel").unwrap().contains("snowflake_pin"));

    // Completing level 3 opens level 4.
    let completed = store.load_completed_levels("noel").unwrap();
    assert!(catalog.is_unlocked(4, &completed, 0).unwrap());
}

#[test]
fn failed_runs_record_nothing() {
    let store = MemoryStore::new();
    let catalog = levels::catalog();
    // Level 1 target is 400; a 399 run is a fail with zero stars.
    let stars = complete_level(catalog, &store, "noel", 1, 399).unwrap();
    assert_eq!(stars, 0);
    assert!(store.load_completed_levels("noel").unwrap().is_empty());
    assert_eq!(store.load_coins("noel").unwrap(), 0);
}

#[test]
fn repeat_completions_keep_the_best_star_rating() {
    let store = MemoryStore::new();
    let catalog = levels::catalog();
    complete_level(catalog, &store, "noel", 1, 1000).unwrap();
    complete_level(catalog, &store, "noel", 1, 400).unwrap();
    store.record_completion("noel", 1, 1).unwrap();
    // Best rating survives; completions are not duplicated.
    let completed = store.load_completed_levels("noel").unwrap();
    assert_eq!(completed, HashSet::from([1]));
}

#[test]
fn persistence_errors_carry_the_taxonomy_kind() {
    struct FailingStore;
    impl ProgressStore for FailingStore {
        fn load_outfit(&self, _: &str) -> Result<PlayerOutfit, GameError> {
            Err(GameError::Persistence("backend down".into()))
        }
        fn save_outfit(&self, _: &str, _: &PlayerOutfit) -> Result<(), GameError> {
            Err(GameError::Persistence("backend down".into()))
        }
        fn load_unlocked_items(&self, _: &str) -> Result<HashSet<String>, GameError> {
            Err(GameError::Persistence("backend down".into()))
        }
        fn load_completed_levels(&self, _: &str) -> Result<HashSet<u32>, GameError> {
            Err(GameError::Persistence("backend down".into()))
        }
        fn load_coins(&self, _: &str) -> Result<u32, GameError> {
            Err(GameError::Persistence("backend down".into()))
        }
        fn record_completion(&self, _: &str, _: u32, _: u8) -> Result<(), GameError> {
            Err(GameError::Persistence("backend down".into()))
        }
        fn grant_items(&self, _: &str, _: &[&str]) -> Result<(), GameError> {
            Err(GameError::Persistence("backend down".into()))
        }
        fn add_coins(&self, _: &str, _: u32) -> Result<(), GameError> {
            Err(GameError::Persistence("backend down".into()))
        }
    }

    // A passing run against a broken store propagates the failure unchanged.
    let result = complete_level(levels::catalog(), &FailingStore, "noel", 1, 500);
    assert!(matches!(result, Err(GameError::Persistence(_))));
}
