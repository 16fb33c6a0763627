// src/hero/src/equipment.rs
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// 装备位枚举
#[derive(Debug, Display, Clone, Copy, EnumIter, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipmentSlot {
    Weapon,
    Armor,
}

/// 一件装备，只携带数值加成
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gear {
    pub name: String,
    pub slot: EquipmentSlot,
    pub attack_bonus: u32,
    pub defense_bonus: u32,
}

impl Gear {
    pub fn weapon(name: &str, attack_bonus: u32) -> Self {
        Self {
            name: name.to_string(),
            slot: EquipmentSlot::Weapon,
            attack_bonus,
            defense_bonus: 0,
        }
    }

    pub fn armor(name: &str, defense_bonus: u32) -> Self {
        Self {
            name: name.to_string(),
            slot: EquipmentSlot::Armor,
            attack_bonus: 0,
            defense_bonus,
        }
    }
}

/// 装备栏
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub weapon: Option<Gear>,
    pub armor: Option<Gear>,
}

impl Equipment {
    /// 创建空装备栏
    pub fn new() -> Self {
        Self::default()
    }

    /// 装备到对应槽位，返回被替换下来的旧装备
    pub fn equip(&mut self, gear: Gear) -> Option<Gear> {
        match gear.slot {
            EquipmentSlot::Weapon => self.weapon.replace(gear),
            EquipmentSlot::Armor => self.armor.replace(gear),
        }
    }

    pub fn get(&self, slot: EquipmentSlot) -> Option<&Gear> {
        match slot {
            EquipmentSlot::Weapon => self.weapon.as_ref(),
            EquipmentSlot::Armor => self.armor.as_ref(),
        }
    }

    /// 所有装备的攻击加成
    pub fn attack_bonus(&self) -> u32 {
        self.weapon.iter().chain(self.armor.iter()).map(|g| g.attack_bonus).sum()
    }

    /// 所有装备的防御加成
    pub fn defense_bonus(&self) -> u32 {
        self.weapon.iter().chain(self.armor.iter()).map(|g| g.defense_bonus).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.weapon.is_none() && self.armor.is_none()
    }

    /// 卸下全部装备
    pub fn clear(&mut self) {
        self.weapon = None;
        self.armor = None;
    }
}
