//src/dungeon/src/room.rs
use combat::EnemyKind;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, FromRepr};

/// 房间类型
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
pub enum RoomType {
    Enemy,
    Treasure,
    Shop,
    Boss,
}

impl RoomType {
    /// 进入后是否需要战斗
    pub fn is_combat(self) -> bool {
        matches!(self, RoomType::Enemy | RoomType::Boss)
    }

    pub fn door_icon(self) -> DoorIcon {
        match self {
            RoomType::Enemy => DoorIcon::Sword,
            RoomType::Treasure => DoorIcon::Question,
            RoomType::Shop => DoorIcon::Coin,
            RoomType::Boss => DoorIcon::Skull,
        }
    }
}

/// 门上显示的图标
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DoorIcon {
    Sword,
    Question,
    Coin,
    Skull,
}

impl DoorIcon {
    /// TFT 上绘制的三字符图标
    pub fn label(self) -> &'static str {
        match self {
            DoorIcon::Sword => "[!]",
            DoorIcon::Question => "[?]",
            DoorIcon::Coin => "[$]",
            DoorIcon::Skull => "[X]",
        }
    }
}

/// 宝藏种类，编号与掷出的 1-3 对应
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, FromRepr, EnumIter, Serialize, Deserialize)]
#[repr(u8)]
pub enum TreasureKind {
    #[default]
    Gold = 1,
    Potion = 2,
    Gear = 3,
}

impl TreasureKind {
    pub fn from_roll(roll: u32) -> Self {
        u8::try_from(roll)
            .ok()
            .and_then(TreasureKind::from_repr)
            .unwrap_or_default()
    }
}

/// 房间内容
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomPayload {
    Empty,
    Enemy(EnemyKind),
    Treasure { kind: TreasureKind, value: u32 },
}

/// 一个遭遇节点
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    id: u32,
    room_type: RoomType,
    payload: RoomPayload,
}

impl Room {
    pub fn new(id: u32, room_type: RoomType) -> Self {
        Self {
            id,
            room_type,
            payload: RoomPayload::Empty,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn room_type(&self) -> RoomType {
        self.room_type
    }

    pub fn payload(&self) -> RoomPayload {
        self.payload
    }

    pub fn set_enemy_type(&mut self, kind: EnemyKind) {
        self.payload = RoomPayload::Enemy(kind);
    }

    pub fn set_treasure(&mut self, kind: TreasureKind, value: u32) {
        self.payload = RoomPayload::Treasure { kind, value };
    }

    /// 房间里的敌人种类（非战斗房间为 None）
    pub fn enemy_kind(&self) -> Option<EnemyKind> {
        match self.payload {
            RoomPayload::Enemy(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn door_icon(&self) -> DoorIcon {
        self.room_type.door_icon()
    }

    /// 门上的简短描述
    pub fn description(&self) -> String {
        match (self.room_type, self.payload) {
            (RoomType::Boss, _) => "Final challenge awaits".to_string(),
            (_, RoomPayload::Enemy(kind)) => format!("{} ahead", kind.name()),
            (RoomType::Treasure, _) => "Something glints".to_string(),
            (RoomType::Shop, _) => "A merchant waits".to_string(),
            (RoomType::Enemy, _) => "Danger ahead".to_string(),
        }
    }

    /// 日志里使用的房间名称
    pub fn name(&self) -> String {
        match (self.room_type, self.payload) {
            (RoomType::Boss, RoomPayload::Enemy(kind)) => format!("{} Boss Lair", kind.name()),
            (RoomType::Boss, _) => "Boss Lair".to_string(),
            (_, RoomPayload::Enemy(kind)) => format!("{} Den", kind.name()),
            (RoomType::Treasure, _) => "Treasure Room".to_string(),
            (RoomType::Shop, _) => "Shop".to_string(),
            (RoomType::Enemy, _) => "Enemy Room".to_string(),
        }
    }
}
