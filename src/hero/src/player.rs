// src/hero/src/player.rs
use combat::Combatant;
use error::{GameError, GameResult};
use serde::{Deserialize, Serialize};

use crate::equipment::{Equipment, Gear};

/// 基础属性（完全重置时恢复到这些值）
pub const BASE_MAX_HP: u32 = 50;
pub const BASE_ATTACK: u32 = 9;
pub const BASE_DEFENSE: u32 = 3;
pub const STARTING_GOLD: u32 = 25;
pub const STARTING_POTIONS: u32 = 3;

/// 药水恢复最大生命值的百分比
const POTION_HEAL_PERCENT: u32 = 50;

/// 升到下一级所需经验
pub fn exp_to_next_level(level: u32) -> u32 {
    level * 20
}

/// 玩家核心数据结构
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    hp: u32,
    max_hp: u32,
    base_attack: u32,
    base_defense: u32,

    // 成长系统
    level: u32,
    experience: u32,

    // 资源
    gold: u32,
    potions: u32,
    equipment: Equipment,
}

impl Player {
    /// 以基础属性创建玩家
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            hp: BASE_MAX_HP,
            max_hp: BASE_MAX_HP,
            base_attack: BASE_ATTACK,
            base_defense: BASE_DEFENSE,
            level: 1,
            experience: 0,
            gold: STARTING_GOLD,
            potions: STARTING_POTIONS,
            equipment: Equipment::new(),
        }
    }

    pub fn current_hp(&self) -> u32 {
        self.hp
    }

    pub fn gold(&self) -> u32 {
        self.gold
    }

    pub fn potions(&self) -> u32 {
        self.potions
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn equipment(&self) -> &Equipment {
        &self.equipment
    }

    pub fn is_full_health(&self) -> bool {
        self.hp >= self.max_hp
    }

    /// 直接设置生命值（不超过最大值）
    pub fn set_hp(&mut self, hp: u32) {
        self.hp = hp.min(self.max_hp);
    }

    /// 直接设置金币
    pub fn set_gold(&mut self, gold: u32) {
        self.gold = gold;
    }

    /// 添加金币
    pub fn add_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }

    /// 消耗金币
    pub fn spend_gold(&mut self, amount: u32) -> GameResult<()> {
        if self.gold >= amount {
            self.gold -= amount;
            Ok(())
        } else {
            Err(GameError::InsufficientGold {
                cost: amount,
                gold: self.gold,
            })
        }
    }

    /// 把药水数量补到 `count`
    pub fn refill_potions(&mut self, count: u32) {
        self.potions = count;
    }

    /// 喝一瓶药水，返回实际恢复的生命值
    pub fn use_potion(&mut self) -> GameResult<u32> {
        if self.potions == 0 {
            return Err(GameError::NoPotions);
        }
        self.potions -= 1;
        let before = self.hp;
        self.heal(self.max_hp * POTION_HEAL_PERCENT / 100);
        Ok(self.hp - before)
    }

    /// 装备物品，返回被替换的旧装备
    pub fn equip(&mut self, gear: Gear) -> Option<Gear> {
        log::info!("{} equips {}", self.name, gear.name);
        self.equipment.equip(gear)
    }

    /// 获得经验，返回本次是否升级
    pub fn gain_experience(&mut self, exp: u32) -> bool {
        self.experience += exp;
        let mut leveled = false;
        while self.experience >= exp_to_next_level(self.level) {
            self.experience -= exp_to_next_level(self.level);
            self.level_up();
            leveled = true;
        }
        leveled
    }

    /// 升级系统
    fn level_up(&mut self) {
        self.level += 1;
        self.max_hp += 5;
        self.hp = self.max_hp;
        self.base_attack += 2;
        self.base_defense += 1;
        log::info!("{} reached level {}", self.name, self.level);
    }

    /// 恢复到基础属性：等级、经验、金币、装备全部清除
    pub fn reset_to_base_stats(&mut self) {
        let name = std::mem::take(&mut self.name);
        *self = Self::new(&name);
    }
}

impl Combatant for Player {
    fn hp(&self) -> u32 {
        self.hp
    }

    fn max_hp(&self) -> u32 {
        self.max_hp
    }

    fn attack_power(&self) -> u32 {
        self.base_attack + self.equipment.attack_bonus()
    }

    fn defense(&self) -> u32 {
        self.base_defense + self.equipment.defense_bonus()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn take_damage(&mut self, amount: u32) -> bool {
        self.hp = self.hp.saturating_sub(amount);
        self.is_alive()
    }

    fn heal(&mut self, amount: u32) {
        self.hp = self.max_hp.min(self.hp.saturating_add(amount));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn spend_gold_fails_without_mutating() {
        let mut player = Player::new("Hero");
        player.set_gold(15);

        let err = player.spend_gold(20).unwrap_err();
        assert!(matches!(err, GameError::InsufficientGold { cost: 20, gold: 15 }));
        assert_eq!(player.gold(), 15);

        player.spend_gold(15).unwrap();
        assert_eq!(player.gold(), 0);
    }

    #[test]
    fn heal_never_exceeds_max() {
        let mut player = Player::new("Hero");
        player.take_damage(30);
        assert_eq!(player.current_hp(), 20);

        player.heal(1000);
        assert_eq!(player.current_hp(), player.max_hp());
        assert!(player.is_full_health());
    }

    #[test]
    fn potion_heals_half_of_max() {
        let mut player = Player::new("Hero");
        player.take_damage(40);

        let healed = player.use_potion().unwrap();
        assert_eq!(healed, 25);
        assert_eq!(player.potions(), STARTING_POTIONS - 1);

        player.refill_potions(0);
        assert!(matches!(player.use_potion(), Err(GameError::NoPotions)));
    }

    #[test]
    fn experience_levels_up_and_restores_health() {
        let mut player = Player::new("Hero");
        player.take_damage(10);

        assert!(!player.gain_experience(19));
        assert!(player.gain_experience(1));
        assert_eq!(player.level(), 2);
        assert_eq!(player.experience(), 0);
        assert_eq!(player.max_hp(), BASE_MAX_HP + 5);
        assert!(player.is_full_health());
        assert_eq!(player.attack_power(), BASE_ATTACK + 2);
    }

    #[test]
    fn equipment_adds_to_combat_stats() {
        let mut player = Player::new("Hero");
        player.equip(Gear::weapon("Sword", 4));
        player.equip(Gear::armor("Leather", 2));

        assert_eq!(player.attack_power(), BASE_ATTACK + 4);
        assert_eq!(player.defense(), BASE_DEFENSE + 2);
    }

    #[test]
    fn reset_to_base_stats_wipes_progress_but_keeps_name() {
        let mut player = Player::new("Ayla");
        player.equip(Gear::weapon("Sword", 4));
        player.gain_experience(50);
        player.add_gold(100);

        player.reset_to_base_stats();
        assert_eq!(player, Player::new("Ayla"));
    }
}
