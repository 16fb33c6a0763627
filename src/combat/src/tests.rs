use super::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use strum::IntoEnumIterator;

struct TestCombatant {
    name: String,
    hp: u32,
    max_hp: u32,
    attack: u32,
    defense: u32,
}

impl TestCombatant {
    fn new(name: &str, attack: u32, defense: u32) -> Self {
        Self {
            name: name.to_string(),
            hp: 100,
            max_hp: 100,
            attack,
            defense,
        }
    }
}

impl Combatant for TestCombatant {
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
        &self.name
    }
    fn take_damage(&mut self, amount: u32) -> bool {
        self.hp = self.hp.saturating_sub(amount);
        self.is_alive()
    }
    fn heal(&mut self, amount: u32) {
        self.hp = std::cmp::min(self.max_hp, self.hp + amount);
    }
}

#[test]
fn strike_always_deals_at_least_minimum_damage() {
    let mut rng = Pcg32::seed_from_u64(7);
    let weakling = TestCombatant::new("Weakling", 0, 0);
    let mut wall = TestCombatant::new("Wall", 0, 500);

    for _ in 0..20 {
        let result = Combat::strike(&weakling, &mut wall, &mut rng);
        assert!(result.damage >= 1);
    }
    assert_eq!(wall.hp, 80);
}

#[test]
fn damage_stays_within_variance_band() {
    let mut rng = Pcg32::seed_from_u64(42);
    let attacker = TestCombatant::new("Attacker", 10, 0);
    let defender = TestCombatant::new("Defender", 0, 0);

    for _ in 0..100 {
        let damage = Combat::calculate_damage(&attacker, &defender, false, &mut rng);
        assert!((8..=12).contains(&damage), "damage {damage} out of band");
    }
}

#[test]
fn lethal_strike_reports_defender_dead() {
    let mut rng = Pcg32::seed_from_u64(1);
    let attacker = TestCombatant::new("Giant", 1000, 0);
    let mut enemy = Enemy::spawn(EnemyKind::Goblin, 1, false);

    let result = Combat::strike(&attacker, &mut enemy, &mut rng);
    assert!(!result.defender_alive);
    assert_eq!(enemy.hp, 0);
    assert!(!enemy.is_alive());
}

#[test]
fn enemy_stats_scale_with_floor() {
    for kind in EnemyKind::iter() {
        let shallow = Enemy::spawn(kind, 1, false);
        let deep = Enemy::spawn(kind, 4, false);
        assert!(deep.max_hp > shallow.max_hp);
        assert!(deep.attack > shallow.attack);
        assert!(deep.gold_reward > shallow.gold_reward);
    }
}

#[test]
fn boss_doubles_health() {
    let normal = Enemy::spawn(EnemyKind::Orc, 1, false);
    let boss = Enemy::spawn(EnemyKind::Orc, 1, true);
    assert_eq!(boss.max_hp, normal.max_hp * 2);
    assert_eq!(boss.hp, boss.max_hp);
    assert_eq!(boss.title(), "Orc Boss");
}

#[test]
fn enemy_kind_from_roll_maps_one_to_three() {
    assert_eq!(EnemyKind::from_roll(1), EnemyKind::Goblin);
    assert_eq!(EnemyKind::from_roll(2), EnemyKind::Skeleton);
    assert_eq!(EnemyKind::from_roll(3), EnemyKind::Orc);
    assert_eq!(EnemyKind::from_roll(9), EnemyKind::Goblin);
}
