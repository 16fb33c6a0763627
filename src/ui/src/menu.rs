//! 菜单控件
//!
//! [`MenuBase`] 只负责选中项的移动（上下循环）和确认/取消；
//! [`MainMenu`] 在它之上加上标题画面和“只在选中项变化时重绘”。

use strum::{EnumCount, EnumIter, FromRepr, IntoEnumIterator};

use crate::display::{Color, Display};
use crate::input::{Button, Buttons};

/// 菜单输入结果
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuResult {
    None,
    Selected(usize),
    Cancelled,
}

/// 通用的可选列表
#[derive(Clone, Debug)]
pub struct MenuBase {
    selected: usize,
    max_options: usize,
    active: bool,
    selection_made: Option<usize>,
}

impl MenuBase {
    pub fn new(max_options: usize) -> Self {
        Self {
            selected: 0,
            max_options,
            active: false,
            selection_made: None,
        }
    }

    /// 激活菜单并把光标放回第一项
    pub fn activate(&mut self) {
        self.active = true;
        self.selected = 0;
        self.selection_made = None;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn max_options(&self) -> usize {
        self.max_options
    }

    /// 最近一次确认的选项
    pub fn selection_made(&self) -> Option<usize> {
        self.selection_made
    }

    pub fn move_selection_up(&mut self) {
        if self.max_options == 0 {
            return;
        }
        self.selected = match self.selected {
            0 => self.max_options - 1,
            n => n - 1,
        };
    }

    pub fn move_selection_down(&mut self) {
        if self.max_options == 0 {
            return;
        }
        self.selected = (self.selected + 1) % self.max_options;
    }

    /// 处理一帧的按键。取消优先于导航和确认；`allow_cancel` 为假时忽略 B 键
    pub fn handle_input(&mut self, buttons: &Buttons, allow_cancel: bool) -> MenuResult {
        if !self.active {
            return MenuResult::None;
        }

        if allow_cancel && buttons.pressed(Button::B) {
            return MenuResult::Cancelled;
        }
        if buttons.pressed(Button::Up) {
            self.move_selection_up();
            return MenuResult::None;
        }
        if buttons.pressed(Button::Down) {
            self.move_selection_down();
            return MenuResult::None;
        }
        if buttons.pressed(Button::A) {
            self.selection_made = Some(self.selected);
            return MenuResult::Selected(self.selected);
        }

        MenuResult::None
    }
}

/// 主菜单选项
#[derive(Clone, Copy, Debug, PartialEq, Eq, FromRepr, EnumIter, EnumCount)]
#[repr(u8)]
pub enum MainMenuOption {
    StartGame = 0,
    Settings = 1,
    Credits = 2,
}

impl MainMenuOption {
    pub fn label(self) -> &'static str {
        match self {
            MainMenuOption::StartGame => "Start Game",
            MainMenuOption::Settings => "Settings",
            MainMenuOption::Credits => "Credits",
        }
    }
}

/// 主菜单控件
#[derive(Clone, Debug)]
pub struct MainMenu {
    menu: MenuBase,
    last_rendered_selection: Option<usize>,
    needs_redraw: bool,
}

impl Default for MainMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl MainMenu {
    pub fn new() -> Self {
        Self {
            menu: MenuBase::new(MainMenuOption::COUNT),
            last_rendered_selection: None,
            needs_redraw: true,
        }
    }

    pub fn activate(&mut self) {
        self.menu.activate();
        self.last_rendered_selection = None;
        self.needs_redraw = true;
    }

    pub fn deactivate(&mut self) {
        self.menu.deactivate();
    }

    pub fn is_active(&self) -> bool {
        self.menu.is_active()
    }

    pub fn selected(&self) -> usize {
        self.menu.selected()
    }

    /// 主菜单没有取消项
    pub fn handle_input(&mut self, buttons: &Buttons) -> MenuResult {
        self.menu.handle_input(buttons, false)
    }

    /// 最近一次确认的主菜单选项
    pub fn selected_option(&self) -> Option<MainMenuOption> {
        self.menu
            .selection_made()
            .and_then(|i| u8::try_from(i).ok())
            .and_then(MainMenuOption::from_repr)
    }

    /// 只有选中项变化或被要求重绘时才重画，返回是否画了
    pub fn render<D: Display + ?Sized>(&mut self, display: &mut D) -> bool {
        if !self.menu.is_active() {
            return false;
        }
        if !self.needs_redraw && self.last_rendered_selection == Some(self.menu.selected()) {
            return false;
        }

        display.clear();
        Self::draw_title(display);
        self.draw_menu_options(display);
        self.last_rendered_selection = Some(self.menu.selected());
        self.needs_redraw = false;
        true
    }

    fn draw_title<D: Display + ?Sized>(display: &mut D) {
        display.draw_text("ESP32", 50, 40, Color::CYAN, 2);
        display.draw_text("DUNGEON", 30, 65, Color::CYAN, 2);
        display.draw_text("CRAWLER", 25, 90, Color::CYAN, 2);
        display.draw_text("v0.1.0", 60, 120, Color::WHITE, 1);
    }

    fn draw_menu_options<D: Display + ?Sized>(&self, display: &mut D) {
        let x = 35;
        for (i, option) in MainMenuOption::iter().enumerate() {
            let y = 160 + i as i32 * 30;
            if i == self.menu.selected() {
                display.fill_rect(x - 5, y - 3, 100, 20, Color::BLUE);
            }
            display.draw_text(option.label(), x, y, Color::WHITE, 2);
        }

        display.draw_text("UP/DOWN: Navigate", 15, 280, Color::YELLOW, 1);
        display.draw_text("A: Select", 55, 295, Color::YELLOW, 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::MockDisplay;

    #[test]
    fn selection_wraps_both_ways() {
        let mut menu = MenuBase::new(3);
        menu.activate();

        menu.move_selection_up();
        assert_eq!(menu.selected(), 2);
        menu.move_selection_down();
        assert_eq!(menu.selected(), 0);
    }

    #[test]
    fn inactive_menu_ignores_input() {
        let mut menu = MenuBase::new(3);
        assert_eq!(menu.handle_input(&Buttons::only(Button::A), true), MenuResult::None);
        assert_eq!(menu.selection_made(), None);
    }

    #[test]
    fn cancel_only_when_allowed() {
        let mut menu = MenuBase::new(3);
        menu.activate();
        assert_eq!(menu.handle_input(&Buttons::only(Button::B), false), MenuResult::None);
        assert_eq!(menu.handle_input(&Buttons::only(Button::B), true), MenuResult::Cancelled);
    }

    #[test]
    fn cancel_wins_over_other_buttons_in_same_frame() {
        let mut menu = MenuBase::new(3);
        menu.activate();

        let down_and_b = Buttons {
            down: true,
            b: true,
            ..Buttons::default()
        };
        assert_eq!(menu.handle_input(&down_and_b, true), MenuResult::Cancelled);
        assert_eq!(menu.selected(), 0);

        let a_and_b = Buttons {
            a: true,
            b: true,
            ..Buttons::default()
        };
        assert_eq!(menu.handle_input(&a_and_b, true), MenuResult::Cancelled);
        assert_eq!(menu.selection_made(), None);

        // 不允许取消时照常导航
        assert_eq!(menu.handle_input(&down_and_b, false), MenuResult::None);
        assert_eq!(menu.selected(), 1);
    }

    #[test]
    fn main_menu_maps_selection_to_option() {
        let mut menu = MainMenu::new();
        menu.activate();

        menu.handle_input(&Buttons::only(Button::Down));
        menu.handle_input(&Buttons::only(Button::Down));
        assert_eq!(menu.handle_input(&Buttons::only(Button::A)), MenuResult::Selected(2));
        assert_eq!(menu.selected_option(), Some(MainMenuOption::Credits));
    }

    #[test]
    fn main_menu_redraws_only_on_change() {
        let mut display = MockDisplay::new();
        display.expect_clear().times(2).return_const(());
        display.expect_draw_text().return_const(());
        display.expect_fill_rect().times(2).return_const(());

        let mut menu = MainMenu::new();
        menu.activate();
        assert!(menu.render(&mut display));
        assert!(!menu.render(&mut display));

        menu.handle_input(&Buttons::only(Button::Down));
        assert!(menu.render(&mut display));
        assert!(!menu.render(&mut display));
    }
}
