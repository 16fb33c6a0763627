//! 运行配置（JSON 文件，缺失字段使用默认值）

use std::fs;
use std::path::Path;
use std::time::Duration;

use error::{GameError, GameResult};
use serde::{Deserialize, Serialize};

/// 宿主程序的配置
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// 固定种子；为空时每次启动随机
    pub seed: Option<u64>,
    pub player_name: String,
    /// 每帧间隔（毫秒）
    pub frame_interval_ms: u64,
    /// 日志面板保留的行数
    pub log_lines: usize,
    pub show_log_panel: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            player_name: "Hero".to_string(),
            frame_interval_ms: 33,
            log_lines: 6,
            show_log_panel: true,
        }
    }
}

impl GameConfig {
    /// 读取并解析配置文件
    pub fn load(path: &Path) -> GameResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| GameError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// 没有给出路径时使用默认配置
    pub fn load_or_default(path: Option<&Path>) -> GameResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> GameResult<()> {
        if self.frame_interval_ms == 0 {
            return Err(GameError::Config("frame_interval_ms must be positive".to_string()));
        }
        if self.player_name.trim().is_empty() {
            return Err(GameError::Config("player_name must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    /// 配置的种子，未配置时随机生成一个
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
