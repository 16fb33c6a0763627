//! TFT 显示与按键的协作接口，以及通用的菜单控件。
//!
//! 游戏核心只通过 [`Display`] 和 [`Input`] 与硬件打交道：
//! - `Display`：立即模式绘制（清屏、文字、矩形）
//! - `Input`：边沿触发的按键查询（本帧是否按下）

pub mod display;
pub mod headless;
pub mod input;
pub mod menu;

pub use display::{Color, Display, SCREEN_HEIGHT, SCREEN_WIDTH};
pub use headless::{HeadlessDisplay, ScriptedInput};
pub use input::{Button, Buttons, Input};
pub use menu::{MainMenu, MainMenuOption, MenuBase, MenuResult};
