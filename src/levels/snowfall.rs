// Snowfall Village world: levels 1-6, the tutorial run.
use super::{LevelConfig, Rewards, World};

pub const SNOWFALL_LEVELS: [LevelConfig; 6] = [
    LevelConfig { number: 1, world: World::Snowfall, target_score: 400, star_thresholds: [400, 700, 1000], unlock_cost: 0, rewards: Rewards { coins: 50, items: &[] } },
    LevelConfig { number: 2, world: World::Snowfall, target_score: 500, star_thresholds: [500, 850, 1200], unlock_cost: 0, rewards: Rewards { coins: 60, items: &[] } },
    LevelConfig { number: 3, world: World::Snowfall, target_score: 600, star_thresholds: [600, 1000, 1400], unlock_cost: 0, rewards: Rewards { coins: 70, items: &["snowflake_pin"] } },
    LevelConfig { number: 4, world: World::Snowfall, target_score: 700, star_thresholds: [700, 1150, 1600], unlock_cost: 0, rewards: Rewards { coins: 80, items: &[] } },
    LevelConfig { number: 5, world: World::Snowfall, target_score: 800, star_thresholds: [800, 1300, 1800], unlock_cost: 0, rewards: Rewards { coins: 90, items: &[] } },
    // World finale: first boots drop.
    LevelConfig { number: 6, world: World::Snowfall, target_score: 1000, star_thresholds: [1000, 1600, 2200], unlock_cost: 0, rewards: Rewards { coins: 120, items: &["frost_boots"] } },
];
