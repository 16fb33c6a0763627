use strum::{Display, EnumIter, FromRepr};

/// 状态转换请求
///
/// 原始编号保留给串口调试命令使用，`0` 表示“无请求”，
/// 在 Rust 中用 `Option<Transition>` 表达。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, FromRepr, EnumIter, Display)]
#[repr(u8)]
pub enum Transition {
    #[strum(to_string = "MAIN_MENU")]
    MainMenu = 1,
    #[strum(to_string = "DOOR_CHOICE")]
    DoorChoice = 2,
    #[strum(to_string = "COMBAT")]
    Combat = 3,
    #[strum(to_string = "CAMPFIRE")]
    Campfire = 4,
    #[strum(to_string = "GAME_OVER")]
    GameOver = 5,
    #[strum(to_string = "SETTINGS")]
    Settings = 6,
    #[strum(to_string = "CREDITS")]
    Credits = 7,
}

impl Transition {
    /// 无请求的原始编号
    pub const NONE_CODE: u8 = 0;

    pub fn code(self) -> u8 {
        self as u8
    }

    /// 解析原始编号：`Ok(None)` 表示无请求，`Err(code)` 表示未知编号
    pub fn from_code(code: u8) -> Result<Option<Self>, u8> {
        if code == Self::NONE_CODE {
            return Ok(None);
        }
        Self::from_repr(code).map(Some).ok_or(code)
    }
}
