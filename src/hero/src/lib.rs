// src/hero/src/lib.rs

mod equipment;
mod player;

pub use self::{
    equipment::{Equipment, EquipmentSlot, Gear},
    player::{
        BASE_ATTACK, BASE_DEFENSE, BASE_MAX_HP, Player, STARTING_GOLD, STARTING_POTIONS,
        exp_to_next_level,
    },
};
