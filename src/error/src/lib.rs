//! 游戏错误处理模块
//!
//! 地牢生成、玩家资源和配置加载可能出现的错误。
//! 所有玩法错误都是可恢复的：调用方要么把它当作空操作，要么显示提示后回到菜单。

use thiserror::Error;

/// 游戏运行过程中可能出现的错误类型
#[derive(Debug, Error)]
pub enum GameError {
    /// 门的选择索引越界
    #[error("Invalid choice {index} (only {available} available)")]
    InvalidChoice { index: usize, available: usize },

    /// 当前楼层没有可进入的房间
    #[error("No room available to enter")]
    NoRoomAvailable,

    /// 金币不足
    #[error("Not enough gold: need {cost}, have {gold}")]
    InsufficientGold { cost: u32, gold: u32 },

    /// 生命值已满，无需休息
    #[error("Already at full health")]
    AlreadyAtFullHealth,

    /// 没有治疗药水
    #[error("No health potions left")]
    NoPotions,

    /// 配置文件内容无效
    #[error("Config error: {0}")]
    Config(String),

    /// IO操作错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// 处理游戏错误并转换为屏幕上显示的短消息
pub fn handle_error(error: &GameError) -> String {
    match error {
        GameError::InsufficientGold { .. } => "Not enough gold!".to_string(),
        GameError::AlreadyAtFullHealth => "Already at full health!".to_string(),
        GameError::NoPotions => "No potions left!".to_string(),
        GameError::NoRoomAvailable => "No door here".to_string(),
        GameError::InvalidChoice { .. } => "Nothing there".to_string(),
        GameError::Io(e) => match e.kind() {
            std::io::ErrorKind::NotFound => "Config file not found".to_string(),
            std::io::ErrorKind::PermissionDenied => "No permission to read config".to_string(),
            _ => format!("IO error: {}", e),
        },
        _ => error.to_string(),
    }
}

/// 玩法层面的结果类型
pub type GameResult<T> = Result<T, GameError>;
