use combat::Enemy;
use dungeon::{DungeonManager, DungeonRng};
use hero::Player;

/// 所有状态共享的实体，显式传给每个状态的 `update`
#[derive(Clone, Debug)]
pub struct GameContext {
    pub player: Player,
    pub enemy: Enemy,
    pub dungeon: DungeonManager,
    /// 战斗用的随机数，与地牢生成分开
    pub rng: DungeonRng,
}

impl GameContext {
    /// 地牢与战斗使用由同一个种子派生的两条随机流
    pub fn new(player_name: &str, seed: u64) -> Self {
        Self {
            player: Player::new(player_name),
            enemy: Enemy::default(),
            dungeon: DungeonManager::new(seed),
            rng: DungeonRng::new(seed.rotate_left(32) ^ 0x9E37_79B9_7F4A_7C15),
        }
    }
}

impl GameContext {
    /// 软重置：回满生命、药水补到 3 瓶，装备和进度不变
    pub fn reset_player(&mut self) {
        let max_hp = combat::Combatant::max_hp(&self.player);
        self.player.set_hp(max_hp);
        self.player.refill_potions(hero::STARTING_POTIONS);
        log::info!("{} restored to full strength", self.player.name);
    }

    /// 地牢回到第一层
    pub fn reset_dungeon_progress(&mut self) {
        self.dungeon.reset_to_first_floor();
        log::info!("Dungeon progress reset to floor 1");
    }

    /// 完全重置：玩家恢复基础属性，地牢回到第一层（只在死亡后触发）
    pub fn full_game_reset(&mut self) {
        self.player.reset_to_base_stats();
        self.enemy = Enemy::default();
        self.reset_dungeon_progress();
        log::info!("Full game reset");
    }
}
