//! TFT 地牢爬行游戏的核心
//!
//! 游戏核心只依赖 `ui::Display` 和 `ui::Input` 两个接口；
//! `terminal` 模块提供在桌面终端上运行的实现。

pub mod config;
pub mod core;
pub mod game_loop;
pub mod logger;
pub mod states;
pub mod terminal;

pub use crate::config::GameConfig;
pub use crate::core::{GameContext, GameStateManager, Transition};
pub use crate::game_loop::{Clock, GameLoop, SystemClock};
pub use crate::states::GameState;
