// src/combat/src/lib.rs

use rand::Rng;

pub mod combatant;
pub mod enemy;

pub use crate::combatant::Combatant;
pub use crate::enemy::{Enemy, EnemyKind};

/// Handles a single blow between two combatants
pub struct Combat;

/// Combat configuration constants
mod constants {
    pub const CRIT_MULTIPLIER: f32 = 1.5; // Critical damage multiplier
    pub const BASE_CRIT_CHANCE: f64 = 0.1; // Base critical chance
    pub const DEFENSE_CAP: f32 = 0.8; // Maximum damage reduction from defense
    pub const MIN_DAMAGE: u32 = 1; // Minimum damage dealt
    pub const DAMAGE_VARIANCE: f32 = 0.4; // 80%-120% of attack power
}

impl Combat {
    /// Attacker strikes defender once. Every strike lands; defense only mitigates.
    pub fn strike<T, U, R>(attacker: &T, defender: &mut U, rng: &mut R) -> StrikeResult
    where
        T: Combatant + ?Sized,
        U: Combatant + ?Sized,
        R: Rng + ?Sized,
    {
        let critical = rng.random_bool(constants::BASE_CRIT_CHANCE);
        let damage = Self::calculate_damage(attacker, defender, critical, rng);
        let defender_alive = defender.take_damage(damage);

        let message = if critical {
            format!("Critical! {} deals {} damage", attacker.name(), damage)
        } else {
            format!("{} hits {} for {}", attacker.name(), defender.name(), damage)
        };
        log::debug!("{message}");

        StrikeResult {
            damage,
            critical,
            defender_alive,
            message,
        }
    }

    /// Calculate damage with variance, crit and defense mitigation
    pub fn calculate_damage<T, U, R>(attacker: &T, defender: &U, critical: bool, rng: &mut R) -> u32
    where
        T: Combatant + ?Sized,
        U: Combatant + ?Sized,
        R: Rng + ?Sized,
    {
        let base_damage = attacker.attack_power() as f32;
        let damage_var = 0.8 + rng.random_range(0.0..constants::DAMAGE_VARIANCE);
        let mut raw_damage = base_damage * damage_var;

        if critical {
            raw_damage *= constants::CRIT_MULTIPLIER;
        }

        // Defense reduces damage by percentage (capped at DEFENSE_CAP)
        let defense = defender.defense() as f32;
        let defense_factor = (defense / (defense + 5.0)).min(constants::DEFENSE_CAP);
        let mitigated_damage = raw_damage * (1.0 - defense_factor);

        mitigated_damage.max(constants::MIN_DAMAGE as f32) as u32
    }
}

/// Outcome of a single strike
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrikeResult {
    pub damage: u32,
    pub critical: bool,
    pub defender_alive: bool,
    pub message: String, // Short line for the combat screen
}

#[cfg(test)]
mod tests;
