//! 无硬件运行时使用的显示与输入实现
//!
//! `HeadlessDisplay` 把每次清屏后的文字记录下来，`ScriptedInput`
//! 按帧回放预先写好的按键。串口调试和自动化测试都用它们驱动游戏核心。

use std::collections::VecDeque;

use crate::display::{Color, Display};
use crate::input::{Button, Buttons, Input};

/// 记录屏幕文字的显示器
#[derive(Clone, Debug, Default)]
pub struct HeadlessDisplay {
    lines: Vec<String>,
    clears: usize,
}

impl HeadlessDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// 上次清屏以来绘制的所有文字
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// 当前屏幕是否包含某段文字
    pub fn shows(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    /// 清屏次数（即整屏重绘次数）
    pub fn clear_count(&self) -> usize {
        self.clears
    }
}

impl Display for HeadlessDisplay {
    fn clear(&mut self) {
        self.lines.clear();
        self.clears += 1;
    }

    fn draw_text(&mut self, text: &str, _x: i32, _y: i32, _color: Color, _scale: u8) {
        self.lines.push(text.to_string());
    }

    fn draw_rect(&mut self, _x: i32, _y: i32, _w: i32, _h: i32, _color: Color) {}

    fn fill_rect(&mut self, _x: i32, _y: i32, _w: i32, _h: i32, _color: Color) {}
}

/// 按帧回放的输入源
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Buttons>,
    current: Buttons,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一帧：只按下 `button`
    pub fn press(&mut self, button: Button) -> &mut Self {
        self.frames.push_back(Buttons::only(button));
        self
    }

    /// 追加一帧：什么都不按
    pub fn idle(&mut self) -> &mut Self {
        self.frames.push_back(Buttons::default());
        self
    }

    /// 剩余未回放的帧数
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl Input for ScriptedInput {
    /// 取出下一帧；脚本用完后一直是空帧
    fn next_frame(&mut self) {
        self.current = self.frames.pop_front().unwrap_or_default();
    }

    fn was_pressed(&mut self, button: Button) -> bool {
        self.current.pressed(button)
    }
}
