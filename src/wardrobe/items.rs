// Wardrobe item table. Declaration order within a slot is the order the
// dress-up screen shows them in.
use super::{Rarity, Slot, UnlockMethod, WardrobeItem};

pub const WARDROBE_ITEMS: [WardrobeItem; 17] = [
    // Hats
    WardrobeItem { id: "red_santa_hat", name: "Red Santa Hat", slot: Slot::Hat, rarity: Rarity::Common, unlock: UnlockMethod::Default, has_assets: true },
    WardrobeItem { id: "green_elf_hat", name: "Green Elf Hat", slot: Slot::Hat, rarity: Rarity::Uncommon, unlock: UnlockMethod::Purchase { price: 250 }, has_assets: true },
    WardrobeItem { id: "nutcracker_hat", name: "Nutcracker Hat", slot: Slot::Hat, rarity: Rarity::Rare, unlock: UnlockMethod::LevelReward { level: 12 }, has_assets: true },
    WardrobeItem { id: "starlight_crown", name: "Starlight Crown", slot: Slot::Hat, rarity: Rarity::Legendary, unlock: UnlockMethod::LevelReward { level: 18 }, has_assets: false },
    // Shirts
    WardrobeItem { id: "cozy_red_sweater", name: "Cozy Red Sweater", slot: Slot::Shirt, rarity: Rarity::Common, unlock: UnlockMethod::Default, has_assets: true },
    WardrobeItem { id: "reindeer_jumper", name: "Reindeer Jumper", slot: Slot::Shirt, rarity: Rarity::Uncommon, unlock: UnlockMethod::Purchase { price: 300 }, has_assets: true },
    WardrobeItem { id: "toy_soldier_shirt", name: "Toy Soldier Shirt", slot: Slot::Shirt, rarity: Rarity::Rare, unlock: UnlockMethod::LevelReward { level: 9 }, has_assets: true },
    WardrobeItem { id: "gingerbread_hoodie", name: "Gingerbread Hoodie", slot: Slot::Shirt, rarity: Rarity::Epic, unlock: UnlockMethod::Event { id: "bake_off_2026" }, has_assets: false },
    // Pants
    WardrobeItem { id: "plain_wool_pants", name: "Plain Wool Pants", slot: Slot::Pants, rarity: Rarity::Common, unlock: UnlockMethod::Default, has_assets: true },
    WardrobeItem { id: "candy_stripe_pants", name: "Candy Stripe Pants", slot: Slot::Pants, rarity: Rarity::Uncommon, unlock: UnlockMethod::Purchase { price: 200 }, has_assets: true },
    WardrobeItem { id: "aurora_leggings", name: "Aurora Leggings", slot: Slot::Pants, rarity: Rarity::Epic, unlock: UnlockMethod::LevelReward { level: 15 }, has_assets: false },
    // Shoes
    WardrobeItem { id: "felt_slippers", name: "Felt Slippers", slot: Slot::Shoes, rarity: Rarity::Common, unlock: UnlockMethod::Default, has_assets: true },
    WardrobeItem { id: "jingle_sneakers", name: "Jingle Sneakers", slot: Slot::Shoes, rarity: Rarity::Uncommon, unlock: UnlockMethod::Purchase { price: 275 }, has_assets: true },
    WardrobeItem { id: "frost_boots", name: "Frost Boots", slot: Slot::Shoes, rarity: Rarity::Rare, unlock: UnlockMethod::LevelReward { level: 6 }, has_assets: true },
    // Accessories
    WardrobeItem { id: "snowflake_pin", name: "Snowflake Pin", slot: Slot::Accessory, rarity: Rarity::Uncommon, unlock: UnlockMethod::LevelReward { level: 3 }, has_assets: true },
    WardrobeItem { id: "golden_bell", name: "Golden Bell", slot: Slot::Accessory, rarity: Rarity::Rare, unlock: UnlockMethod::Achievement { id: "ring_1000_bells" }, has_assets: true },
    WardrobeItem { id: "mistletoe_charm", name: "Mistletoe Charm", slot: Slot::Accessory, rarity: Rarity::Epic, unlock: UnlockMethod::Event { id: "advent_2026" }, has_assets: false },
];
