// Aurora Peaks world: levels 13-18, the current endgame run.
use super::{LevelConfig, Rewards, World};

pub const AURORA_LEVELS: [LevelConfig; 6] = [
    LevelConfig { number: 13, world: World::Aurora, target_score: 2000, star_thresholds: [2000, 3000, 4000], unlock_cost: 500, rewards: Rewards { coins: 220, items: &[] } },
    LevelConfig { number: 14, world: World::Aurora, target_score: 2200, star_thresholds: [2200, 3300, 4400], unlock_cost: 0, rewards: Rewards { coins: 240, items: &[] } },
    LevelConfig { number: 15, world: World::Aurora, target_score: 2400, star_thresholds: [2400, 3600, 4800], unlock_cost: 0, rewards: Rewards { coins: 260, items: &["aurora_leggings"] } },
    LevelConfig { number: 16, world: World::Aurora, target_score: 2600, star_thresholds: [2600, 3900, 5200], unlock_cost: 0, rewards: Rewards { coins: 280, items: &[] } },
    LevelConfig { number: 17, world: World::Aurora, target_score: 2800, star_thresholds: [2800, 4200, 5600], unlock_cost: 0, rewards: Rewards { coins: 300, items: &[] } },
    LevelConfig { number: 18, world: World::Aurora, target_score: 3200, star_thresholds: [3200, 4800, 6400], unlock_cost: 0, rewards: Rewards { coins: 350, items: &["starlight_crown"] } },
];
