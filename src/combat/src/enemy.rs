// src/combat/src/enemy.rs

use serde::{Deserialize, Serialize};
use strum::{EnumIter, FromRepr};

/// 敌人实体，只保存战斗属性
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub hp: u32,
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub gold_reward: u32,
    pub exp_reward: u32,
    pub is_boss: bool,
}

/// 敌人种类，编号与房间生成时掷出的 1-3 对应
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, FromRepr, EnumIter,
)]
#[repr(u8)]
pub enum EnemyKind {
    #[default]
    Goblin = 1,
    Skeleton = 2,
    Orc = 3,
}

impl EnemyKind {
    /// 显示名称
    pub fn name(self) -> &'static str {
        match self {
            EnemyKind::Goblin => "Goblin",
            EnemyKind::Skeleton => "Skeleton",
            EnemyKind::Orc => "Orc",
        }
    }

    /// 由掷骰结果得到敌人种类，超出范围时退回哥布林
    pub fn from_roll(roll: u32) -> Self {
        u8::try_from(roll)
            .ok()
            .and_then(EnemyKind::from_repr)
            .unwrap_or_default()
    }

    /// 第一层的基础属性 (hp, attack, defense, gold, exp)
    fn base_stats(self) -> (u32, u32, u32, u32, u32) {
        match self {
            EnemyKind::Goblin => (20, 5, 1, 8, 5),
            EnemyKind::Skeleton => (26, 6, 2, 10, 7),
            EnemyKind::Orc => (34, 8, 3, 14, 10),
        }
    }
}

impl Default for Enemy {
    fn default() -> Self {
        Self::spawn(EnemyKind::default(), 1, false)
    }
}

impl Enemy {
    /// 按楼层生成敌人；首领生命翻倍、攻击 +3、奖励三倍
    pub fn spawn(kind: EnemyKind, floor: u32, is_boss: bool) -> Self {
        let (hp, attack, defense, gold, exp) = kind.base_stats();
        let depth = floor.saturating_sub(1);

        let mut enemy = Self {
            kind,
            hp: hp + depth * 6,
            max_hp: hp + depth * 6,
            attack: attack + depth * 2,
            defense: defense + depth / 2,
            gold_reward: gold + depth * 4,
            exp_reward: exp + depth * 3,
            is_boss,
        };

        if is_boss {
            enemy.max_hp *= 2;
            enemy.hp = enemy.max_hp;
            enemy.attack += 3;
            enemy.gold_reward *= 3;
            enemy.exp_reward *= 3;
        }

        enemy
    }

    /// 战斗画面上显示的名称
    pub fn title(&self) -> String {
        if self.is_boss {
            format!("{} Boss", self.kind.name())
        } else {
            self.kind.name().to_string()
        }
    }
}
