// src/combat/src/combatant.rs

use crate::enemy::Enemy;

/// 表示可以参加战斗的活体
pub trait Combatant {
    /// 获取当前生命值
    fn hp(&self) -> u32;

    /// 获取最大生命值
    fn max_hp(&self) -> u32;

    /// 获取攻击力（含装备加成）
    fn attack_power(&self) -> u32;

    /// 获取防御力（含装备加成）
    fn defense(&self) -> u32;

    /// 获取名称
    fn name(&self) -> &str;

    /// 是否存活
    fn is_alive(&self) -> bool {
        self.hp() > 0
    }

    /// 造成伤害，返回是否仍然存活
    fn take_damage(&mut self, amount: u32) -> bool;

    /// 治疗（不超过最大生命值）
    fn heal(&mut self, amount: u32);
}

// 为Enemy实现Combatant
impl Combatant for Enemy {
    fn hp(&self) -> u32 {
        self.hp
    }

    fn max_hp(&self) -> u32 {
        self.max_hp
    }

    fn attack_power(&self) -> u32 {
        self.attack
    }

    fn defense(&self) -> u32 {
        self.defense
    }

    fn name(&self) -> &str {
        self.kind.name()
    }

    fn take_damage(&mut self, amount: u32) -> bool {
        self.hp = self.hp.saturating_sub(amount);
        self.is_alive()
    }

    fn heal(&mut self, amount: u32) {
        self.hp = self.max_hp.min(self.hp.saturating_add(amount));
    }
}
