//! 按键输入
//!
//! 硬件只有四个按键。`Input::was_pressed` 是边沿触发的：
//! 每次按下只会被报告一次。游戏每帧调用 [`Buttons::poll`]：先通知
//! 输入源进入新的一帧，再对每个按键恰好查询一次，之后各状态只读取这份快照。

use strum::{EnumIter, IntoEnumIterator};

/// 物理按键
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum Button {
    Up,
    Down,
    A,
    B,
}

/// 按键查询接口
#[cfg_attr(test, mockall::automock)]
pub trait Input {
    /// 开始新的一帧，在本帧第一次查询之前调用
    fn next_frame(&mut self) {}

    /// 本帧该按键是否被按下（边沿触发）
    fn was_pressed(&mut self, button: Button) -> bool;
}

/// 一帧内的按键快照
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Buttons {
    pub up: bool,
    pub down: bool,
    pub a: bool,
    pub b: bool,
}

impl Buttons {
    /// 进入新的一帧，然后每个按键查询一次
    pub fn poll<I: Input + ?Sized>(input: &mut I) -> Self {
        input.next_frame();
        let mut buttons = Self::default();
        for button in Button::iter() {
            if input.was_pressed(button) {
                buttons.set(button);
            }
        }
        buttons
    }

    /// 只有一个按键被按下
    pub fn only(button: Button) -> Self {
        let mut buttons = Self::default();
        buttons.set(button);
        buttons
    }

    pub fn set(&mut self, button: Button) {
        match button {
            Button::Up => self.up = true,
            Button::Down => self.down = true,
            Button::A => self.a = true,
            Button::B => self.b = true,
        }
    }

    pub fn pressed(&self, button: Button) -> bool {
        match button {
            Button::Up => self.up,
            Button::Down => self.down,
            Button::A => self.a,
            Button::B => self.b,
        }
    }

    /// 四个按键中任意一个
    pub fn any(&self) -> bool {
        self.up || self.down || self.a || self.b
    }
}
