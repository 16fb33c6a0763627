//src/dungeon/src/lib.rs
use error::GameResult;

pub mod floor;
pub mod rng;
pub mod room;

pub use crate::floor::{
    BOSS_ROOM_ID, DOORS_PER_CHOICE, DoorChoice, Floor, ROOMS_BEFORE_BOSS, room_type_for_roll,
    select_random_room_type,
};
pub use crate::rng::DungeonRng;
pub use crate::room::{DoorIcon, Room, RoomPayload, RoomType, TreasureKind};

/// 房间结束后的结果，由游戏状态决定下一步去哪
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoomResolution {
    /// 普通房间完成，楼层进度 +1
    RoomCleared { rooms_completed: u32 },
    /// 击败首领，进入下一层
    FloorCleared { next_floor: u32 },
    /// 当前没有楼层房间（例如营火），进度不变
    Unchanged,
}

/// 地牢管理器：包装当前楼层，记录层数
#[derive(Clone, Debug)]
pub struct DungeonManager {
    floor_number: u32,
    floor: Floor,
    rng: DungeonRng,
}

impl DungeonManager {
    /// 从第一层开始的新地牢
    pub fn new(seed: u64) -> Self {
        Self::with_rng(DungeonRng::new(seed))
    }

    pub fn with_rng(rng: DungeonRng) -> Self {
        let mut floor = Floor::new(1);
        floor.generate_floor();
        Self {
            floor_number: 1,
            floor,
            rng,
        }
    }

    pub fn floor_number(&self) -> u32 {
        self.floor_number
    }

    pub fn current_floor(&self) -> &Floor {
        &self.floor
    }

    pub fn current_room(&self) -> Option<&Room> {
        self.floor.current_room()
    }

    /// 生成一批新的门选择（每次调用都会重新掷骰）
    pub fn available_rooms(&mut self) -> Vec<DoorChoice> {
        self.floor.available_choices(&mut self.rng)
    }

    /// 进入刚才提供的第 `index` 扇门
    pub fn select_room(&mut self, index: usize) -> GameResult<&Room> {
        match self.floor.enter_room(index, &mut self.rng) {
            Ok(room) => {
                log::info!("Entered {} (room {})", room.name(), room.id());
                Ok(room)
            }
            Err(err) => {
                log::warn!("Room selection {} rejected: {}", index, err);
                Err(err)
            }
        }
    }

    /// 结束当前房间
    pub fn complete_room(&mut self) -> RoomResolution {
        let Some(room) = self.floor.take_current_room() else {
            return RoomResolution::Unchanged;
        };

        if room.room_type() == crate::RoomType::Boss {
            self.advance_floor();
            RoomResolution::FloorCleared {
                next_floor: self.floor_number,
            }
        } else {
            self.floor.increment_rooms_completed();
            log::info!(
                "Room {} cleared ({}/{})",
                room.id(),
                self.floor.rooms_completed(),
                ROOMS_BEFORE_BOSS
            );
            RoomResolution::RoomCleared {
                rooms_completed: self.floor.rooms_completed(),
            }
        }
    }

    /// 放弃当前房间，不计入进度（例如宝箱房尚未实现就回到了菜单）
    pub fn abandon_room(&mut self) -> Option<Room> {
        let room = self.floor.take_current_room();
        if let Some(room) = &room {
            log::debug!("Abandoned room {} without clearing it", room.id());
        }
        room
    }

    /// 进入下一层
    pub fn advance_floor(&mut self) {
        self.floor_number += 1;
        self.floor = Floor::new(self.floor_number);
        self.floor.generate_floor();
        log::info!("Descending to floor {}", self.floor_number);
    }

    /// 回到第一层，进度清零
    pub fn reset_to_first_floor(&mut self) {
        self.floor_number = 1;
        self.floor = Floor::new(1);
        self.floor.generate_floor();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn clear_rooms(dungeon: &mut DungeonManager, count: u32) {
        for _ in 0..count {
            dungeon.available_rooms();
            dungeon.select_room(0).unwrap();
            dungeon.complete_room();
        }
    }

    #[test]
    fn starts_on_floor_one_with_boss() {
        let dungeon = DungeonManager::new(1);
        assert_eq!(dungeon.floor_number(), 1);
        assert!(dungeon.current_floor().boss_room().is_some());
        assert!(dungeon.current_room().is_none());
    }

    #[test]
    fn completing_rooms_unlocks_boss() {
        let mut dungeon = DungeonManager::new(7);
        clear_rooms(&mut dungeon, 3);

        assert!(dungeon.current_floor().is_floor_complete());
        let choices = dungeon.available_rooms();
        assert_eq!(choices.len(), 1);
        assert_eq!(choices[0].room_type, RoomType::Boss);
    }

    #[test]
    fn defeating_boss_advances_floor() {
        let mut dungeon = DungeonManager::new(7);
        clear_rooms(&mut dungeon, 3);

        dungeon.available_rooms();
        assert_eq!(dungeon.select_room(0).unwrap().room_type(), RoomType::Boss);
        assert_eq!(
            dungeon.complete_room(),
            RoomResolution::FloorCleared { next_floor: 2 }
        );
        assert_eq!(dungeon.floor_number(), 2);
        assert_eq!(dungeon.current_floor().rooms_completed(), 0);
        assert_eq!(dungeon.current_floor().floor_number(), 2);
    }

    #[test]
    fn completing_without_room_changes_nothing() {
        let mut dungeon = DungeonManager::new(7);
        assert_eq!(dungeon.complete_room(), RoomResolution::Unchanged);
        assert_eq!(dungeon.current_floor().rooms_completed(), 0);
    }

    #[test]
    fn reset_returns_to_first_floor() {
        let mut dungeon = DungeonManager::new(9);
        clear_rooms(&mut dungeon, 3);
        dungeon.available_rooms();
        dungeon.select_room(0).unwrap();
        dungeon.complete_room();
        assert_eq!(dungeon.floor_number(), 2);

        dungeon.reset_to_first_floor();
        assert_eq!(dungeon.floor_number(), 1);
        assert_eq!(dungeon.current_floor().rooms_completed(), 0);
        assert!(dungeon.current_room().is_none());
    }

    #[test]
    fn invalid_selection_is_rejected() {
        let mut dungeon = DungeonManager::new(2);
        dungeon.available_rooms();
        assert!(dungeon.select_room(5).is_err());
        assert!(dungeon.current_room().is_none());
    }

    #[test]
    fn abandoned_room_does_not_count() {
        let mut dungeon = DungeonManager::new(4);
        dungeon.available_rooms();
        dungeon.select_room(1).unwrap();

        assert!(dungeon.abandon_room().is_some());
        assert!(dungeon.current_room().is_none());
        assert_eq!(dungeon.complete_room(), RoomResolution::Unchanged);
        assert_eq!(dungeon.current_floor().rooms_completed(), 0);
    }
}
