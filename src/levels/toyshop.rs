// Toyshop Workshop world: levels 7-12.
use super::{LevelConfig, Rewards, World};

pub const TOYSHOP_LEVELS: [LevelConfig; 6] = [
    // World gate: skippable for coins before level 6 is cleared.
    LevelConfig { number: 7, world: World::Toyshop, target_score: 1100, star_thresholds: [1100, 1750, 2400], unlock_cost: 250, rewards: Rewards { coins: 130, items: &[] } },
    LevelConfig { number: 8, world: World::Toyshop, target_score: 1200, star_thresholds: [1200, 1900, 2600], unlock_cost: 0, rewards: Rewards { coins: 140, items: &[] } },
    LevelConfig { number: 9, world: World::Toyshop, target_score: 1300, star_thresholds: [1300, 2050, 2800], unlock_cost: 0, rewards: Rewards { coins: 150, items: &["toy_soldier_shirt"] } },
    LevelConfig { number: 10, world: World::Toyshop, target_score: 1400, star_thresholds: [1400, 2200, 3000], unlock_cost: 100, rewards: Rewards { coins: 160, items: &[] } },
    LevelConfig { number: 11, world: World::Toyshop, target_score: 1500, star_thresholds: [1500, 2350, 3200], unlock_cost: 0, rewards: Rewards { coins: 170, items: &[] } },
    LevelConfig { number: 12, world: World::Toyshop, target_score: 1800, star_thresholds: [1800, 2700, 3600], unlock_cost: 0, rewards: Rewards { coins: 200, items: &["nutcracker_hat"] } },
];
