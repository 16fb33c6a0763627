//! 固定帧率的游戏循环
//!
//! 每一帧：
//! - 管理器采集按键并运行当前界面
//! - 调用宿主的帧结束回调（呈现画面、收集下一帧的输入）
//! - 睡到下一帧开始
//!
//! 时间通过 [`Clock`] 抽象，测试里可以换成假时钟。

use std::ops::ControlFlow;
use std::time::{Duration, Instant};

use ui::{Display, Input};

use crate::core::GameStateManager;

/// 时间来源
pub trait Clock {
    /// 当前时间
    fn now(&self) -> Instant;

    /// 睡眠指定时长
    fn sleep(&self, duration: Duration);
}

/// 系统时钟
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// 主游戏循环
pub struct GameLoop<D: Display, I: Input, C: Clock> {
    pub manager: GameStateManager,
    pub display: D,
    pub input: I,
    pub clock: C,
    frame_interval: Duration,
    frames: u64,
}

impl<D: Display, I: Input, C: Clock> GameLoop<D, I, C> {
    pub fn new(manager: GameStateManager, display: D, input: I, clock: C, frame_interval: Duration) -> Self {
        Self {
            manager,
            display,
            input,
            clock,
            frame_interval,
            frames: 0,
        }
    }

    /// 已运行的帧数
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// 运行一帧（不睡眠）
    pub fn tick(&mut self) {
        self.manager.update(&mut self.display, &mut self.input);
        self.frames += 1;
    }

    /// 一直运行到 `end_frame` 返回 `Break`，返回运行的帧数
    pub fn run<F>(&mut self, mut end_frame: F) -> anyhow::Result<u64>
    where
        F: FnMut(&mut D, &mut I) -> anyhow::Result<ControlFlow<()>>,
    {
        self.manager.initialize(&mut self.display);

        loop {
            let frame_start = self.clock.now();
            self.tick();

            if end_frame(&mut self.display, &mut self.input)?.is_break() {
                log::info!("Game loop stopped after {} frames", self.frames);
                return Ok(self.frames);
            }

            let elapsed = self.clock.now().saturating_duration_since(frame_start);
            if let Some(remaining) = self.frame_interval.checked_sub(elapsed) {
                self.clock.sleep(remaining);
            }
        }
    }
}
