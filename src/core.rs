//! 游戏核心：共享实体、状态转换请求和顶层状态管理器
//!
//! 每一帧的流程：
//! - 采集一次按键快照
//! - 调用当前状态的 `update`
//! - 如果状态返回了转换请求，立即执行 exit → 选择 → enter

pub mod context;
pub mod game_state;
pub mod transition;

pub use context::GameContext;
pub use game_state::GameStateManager;
pub use transition::Transition;
