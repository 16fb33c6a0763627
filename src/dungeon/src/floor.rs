//src/dungeon/src/floor.rs
use combat::EnemyKind;
use error::{GameError, GameResult};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::room::{DoorIcon, Room, RoomType, TreasureKind};

/// 完成多少个房间后开放首领房间
pub const ROOMS_BEFORE_BOSS: u32 = 3;
/// 首领房间的固定编号
pub const BOSS_ROOM_ID: u32 = 999;
/// 每次提供的门数量（楼层未完成时）
pub const DOORS_PER_CHOICE: usize = 2;

const BOSS_SLOT: usize = 0;

/// 把 1-100 的掷骰结果映射为房间类型
pub fn room_type_for_roll(roll: u32) -> RoomType {
    if roll <= 60 {
        RoomType::Enemy
    } else if roll <= 85 {
        RoomType::Treasure
    } else {
        RoomType::Shop
    }
}

/// 均匀掷出 1-100 并决定房间类型
pub fn select_random_room_type<R: Rng + ?Sized>(rng: &mut R) -> RoomType {
    let roll = rng.random_range(1..=100);
    room_type_for_roll(roll)
}

/// 门的选择：房间的值快照，不持有引用
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorChoice {
    /// 在本次提供列表中的位置
    pub slot: usize,
    /// 生成批次，每次重新生成都会递增
    pub generation: u32,
    pub room_id: u32,
    pub room_type: RoomType,
    pub icon: DoorIcon,
    pub description: String,
}

impl DoorChoice {
    fn snapshot(slot: usize, generation: u32, room: &Room) -> Self {
        Self {
            slot,
            generation,
            room_id: room.id(),
            room_type: room.room_type(),
            icon: room.door_icon(),
            description: room.description(),
        }
    }
}

/// 单层地牢：固定的首领房间 + 每次现生成的候选房间
#[derive(Clone, Debug)]
pub struct Floor {
    floor_number: u32,
    rooms: Vec<Room>,
    offers: Vec<Room>,
    generation: u32,
    rooms_completed: u32,
    current_room: Option<Room>,
}

impl Floor {
    pub fn new(floor_number: u32) -> Self {
        Self {
            floor_number,
            rooms: Vec::new(),
            offers: Vec::new(),
            generation: 0,
            rooms_completed: 0,
            current_room: None,
        }
    }

    /// 清空房间并放入首领房间
    pub fn generate_floor(&mut self) {
        log::info!("Generating floor {}", self.floor_number);

        self.rooms.clear();
        self.offers.clear();
        self.current_room = None;

        let mut boss_room = Room::new(BOSS_ROOM_ID, RoomType::Boss);
        boss_room.set_enemy_type(EnemyKind::Orc);
        self.rooms.push(boss_room);
    }

    pub fn is_floor_complete(&self) -> bool {
        self.rooms_completed >= ROOMS_BEFORE_BOSS
    }

    pub fn boss_room(&self) -> Option<&Room> {
        self.rooms.get(BOSS_SLOT)
    }

    pub fn current_room(&self) -> Option<&Room> {
        self.current_room.as_ref()
    }

    pub fn rooms_completed(&self) -> u32 {
        self.rooms_completed
    }

    pub fn floor_number(&self) -> u32 {
        self.floor_number
    }

    pub fn increment_rooms_completed(&mut self) {
        self.rooms_completed += 1;
    }

    /// 结束当前房间，交出其所有权
    pub fn take_current_room(&mut self) -> Option<Room> {
        self.current_room.take()
    }

    /// 生成新的门选择，每次调用都会替换上一批候选房间
    pub fn available_choices<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<DoorChoice> {
        log::debug!(
            "Floor {}: getting choices, rooms completed: {}",
            self.floor_number,
            self.rooms_completed
        );

        self.generation = self.generation.wrapping_add(1);
        self.offers = if self.is_floor_complete() {
            self.boss_room().cloned().into_iter().collect()
        } else {
            (0..DOORS_PER_CHOICE)
                .map(|slot| self.roll_room(slot, rng))
                .collect()
        };

        self.offered_choices()
    }

    /// 当前提供列表的快照，不重新生成
    pub fn offered_choices(&self) -> Vec<DoorChoice> {
        self.offers
            .iter()
            .enumerate()
            .map(|(slot, room)| DoorChoice::snapshot(slot, self.generation, room))
            .collect()
    }

    /// 进入第 `choice` 扇门。只有还没有提供列表时才会生成，
    /// 因此进入的房间就是刚才显示的那一个。
    pub fn enter_room<R: Rng + ?Sized>(&mut self, choice: usize, rng: &mut R) -> GameResult<&Room> {
        if self.offers.is_empty() {
            self.available_choices(rng);
        }
        if self.offers.is_empty() {
            return Err(GameError::NoRoomAvailable);
        }
        if choice >= self.offers.len() {
            return Err(GameError::InvalidChoice {
                index: choice,
                available: self.offers.len(),
            });
        }

        let room = self.offers.swap_remove(choice);
        self.offers.clear();
        Ok(self.current_room.insert(room))
    }

    fn roll_room<R: Rng + ?Sized>(&self, slot: usize, rng: &mut R) -> Room {
        let id = self.rooms_completed * 10 + slot as u32;
        let mut room = Room::new(id, select_random_room_type(rng));

        match room.room_type() {
            RoomType::Enemy => {
                let enemy_type = rng.random_range(1..=3);
                room.set_enemy_type(EnemyKind::from_roll(enemy_type));
            }
            RoomType::Treasure => {
                let treasure_type = rng.random_range(1..=3);
                let treasure_value = self.floor_number + rng.random_range(1..=3);
                room.set_treasure(TreasureKind::from_roll(treasure_type), treasure_value);
            }
            RoomType::Shop | RoomType::Boss => {}
        }

        room
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::RoomPayload;
    use crate::rng::DungeonRng;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn floor_with_progress(completed: u32) -> Floor {
        let mut floor = Floor::new(1);
        floor.generate_floor();
        for _ in 0..completed {
            floor.increment_rooms_completed();
        }
        floor
    }

    #[test]
    fn roll_boundaries() {
        assert_eq!(room_type_for_roll(1), RoomType::Enemy);
        assert_eq!(room_type_for_roll(60), RoomType::Enemy);
        assert_eq!(room_type_for_roll(61), RoomType::Treasure);
        assert_eq!(room_type_for_roll(85), RoomType::Treasure);
        assert_eq!(room_type_for_roll(86), RoomType::Shop);
        assert_eq!(room_type_for_roll(100), RoomType::Shop);
    }

    #[test]
    fn generate_floor_installs_boss_room() {
        let floor = floor_with_progress(0);
        let boss = floor.boss_room().unwrap();
        assert_eq!(boss.id(), BOSS_ROOM_ID);
        assert_eq!(boss.room_type(), RoomType::Boss);
        assert_eq!(boss.payload(), RoomPayload::Enemy(EnemyKind::Orc));
        assert!(floor.current_room().is_none());
    }

    #[test]
    fn floor_completes_after_three_rooms() {
        for completed in 0..3 {
            assert!(!floor_with_progress(completed).is_floor_complete());
        }
        assert!(floor_with_progress(3).is_floor_complete());
        assert!(floor_with_progress(7).is_floor_complete());
    }

    #[test]
    fn incomplete_floor_offers_two_doors() {
        let mut rng = DungeonRng::new(11);
        let mut floor = floor_with_progress(1);

        let choices = floor.available_choices(&mut rng);
        assert_eq!(choices.len(), 2);
        assert_eq!(choices[0].room_id, 10);
        assert_eq!(choices[1].room_id, 11);
        assert!(choices.iter().all(|c| c.room_type != RoomType::Boss));
    }

    #[test]
    fn complete_floor_offers_only_boss() {
        let mut rng = DungeonRng::new(11);
        let mut floor = floor_with_progress(3);

        let choices = floor.available_choices(&mut rng);
        assert_eq!(choices.len(), 1);
        assert_eq!(choices[0].room_type, RoomType::Boss);
        assert_eq!(choices[0].icon, DoorIcon::Skull);
        assert_eq!(choices[0].description, "Final challenge awaits");
    }

    #[test]
    fn each_call_regenerates_choices() {
        let mut rng = DungeonRng::new(5);
        let mut floor = floor_with_progress(0);

        let first = floor.available_choices(&mut rng);
        let second = floor.available_choices(&mut rng);
        assert_eq!(first[0].generation + 1, second[0].generation);
    }

    #[test]
    fn enter_room_uses_the_displayed_offer() {
        let mut rng = DungeonRng::new(99);
        let mut floor = floor_with_progress(0);

        let shown = floor.available_choices(&mut rng);
        let entered = floor.enter_room(1, &mut rng).unwrap();
        assert_eq!(entered.id(), shown[1].room_id);
        assert_eq!(entered.room_type(), shown[1].room_type);
        assert_eq!(entered.description(), shown[1].description);
    }

    #[test]
    fn enter_room_out_of_range_keeps_current_room() {
        let mut rng = DungeonRng::new(3);
        let mut floor = floor_with_progress(0);

        floor.available_choices(&mut rng);
        let entered_id = floor.enter_room(0, &mut rng).unwrap().id();

        floor.available_choices(&mut rng);
        let err = floor.enter_room(2, &mut rng).unwrap_err();
        assert!(matches!(err, GameError::InvalidChoice { index: 2, available: 2 }));
        assert_eq!(floor.current_room().map(Room::id), Some(entered_id));
    }

    #[test]
    fn enter_room_without_boss_reports_no_room() {
        let mut rng = DungeonRng::new(3);
        let mut floor = Floor::new(1);
        for _ in 0..3 {
            floor.increment_rooms_completed();
        }

        assert!(floor.available_choices(&mut rng).is_empty());
        assert!(matches!(floor.enter_room(0, &mut rng), Err(GameError::NoRoomAvailable)));
        assert!(floor.current_room().is_none());
    }

    #[test]
    fn treasure_value_scales_with_floor() {
        let mut rng = DungeonRng::new(1234);
        let mut floor = Floor::new(4);
        floor.generate_floor();

        for _ in 0..200 {
            for choice in floor.available_choices(&mut rng) {
                let room = &floor.offers[choice.slot];
                if let RoomPayload::Treasure { value, .. } = room.payload() {
                    assert!((5..=7).contains(&value), "value {value}");
                }
            }
        }
    }

    proptest! {
        #[test]
        fn prop_rolls_map_to_expected_bands(roll in 1u32..=100) {
            let expected = match roll {
                1..=60 => RoomType::Enemy,
                61..=85 => RoomType::Treasure,
                _ => RoomType::Shop,
            };
            prop_assert_eq!(room_type_for_roll(roll), expected);
        }

        #[test]
        fn prop_choice_count_depends_only_on_completion(seed in any::<u64>(), completed in 0u32..6) {
            let mut rng = DungeonRng::new(seed);
            let mut floor = floor_with_progress(completed);
            let expected = if completed >= ROOMS_BEFORE_BOSS { 1 } else { 2 };
            prop_assert_eq!(floor.available_choices(&mut rng).len(), expected);
        }

        #[test]
        fn prop_enter_room_rejects_out_of_range(seed in any::<u64>(), index in 2usize..64) {
            let mut rng = DungeonRng::new(seed);
            let mut floor = floor_with_progress(0);
            floor.available_choices(&mut rng);
            prop_assert!(floor.enter_room(index, &mut rng).is_err());
            prop_assert!(floor.current_room().is_none());
        }

        #[test]
        fn prop_generated_rooms_carry_valid_payloads(seed in any::<u64>()) {
            let mut rng = DungeonRng::new(seed);
            let mut floor = floor_with_progress(0);
            floor.available_choices(&mut rng);
            for room in &floor.offers {
                match (room.room_type(), room.payload()) {
                    (RoomType::Enemy, RoomPayload::Enemy(_)) => {}
                    (RoomType::Treasure, RoomPayload::Treasure { value, .. }) => {
                        prop_assert!((2..=4).contains(&value));
                    }
                    (RoomType::Shop, RoomPayload::Empty) => {}
                    other => prop_assert!(false, "unexpected room {:?}", other),
                }
            }
        }
    }
}
