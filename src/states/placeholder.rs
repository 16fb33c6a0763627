use ui::{Button, Buttons, Color, Display};

use crate::core::{GameContext, Transition};

/// 尚未实现完整界面的静态画面
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaceholderKind {
    GameOver,
    Settings,
    Credits,
}

impl PlaceholderKind {
    pub fn title(self) -> &'static str {
        match self {
            PlaceholderKind::GameOver => "GameOver",
            PlaceholderKind::Settings => "Settings",
            PlaceholderKind::Credits => "Credits",
        }
    }

    fn lines(self) -> &'static [&'static str] {
        match self {
            PlaceholderKind::GameOver => &["You have fallen.", "", "Press any button"],
            PlaceholderKind::Settings => &["Nothing to tune yet.", "", "A: Back"],
            PlaceholderKind::Credits => &["Code & pixels:", "the crawler team", "", "A: Back"],
        }
    }
}

/// 占位界面，每帧重画
#[derive(Clone, Debug)]
pub struct PlaceholderState {
    kind: PlaceholderKind,
}

impl PlaceholderState {
    pub fn new(kind: PlaceholderKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> PlaceholderKind {
        self.kind
    }

    pub fn enter(&mut self, _ctx: &mut GameContext, display: &mut dyn Display) {
        self.render(display);
    }

    /// 游戏结束画面任意键完全重置后回主菜单；其余画面只响应 A
    pub fn update(
        &mut self,
        ctx: &mut GameContext,
        buttons: &Buttons,
        display: &mut dyn Display,
    ) -> Option<Transition> {
        match self.kind {
            PlaceholderKind::GameOver if buttons.any() => {
                ctx.full_game_reset();
                return Some(Transition::MainMenu);
            }
            PlaceholderKind::Settings | PlaceholderKind::Credits if buttons.pressed(Button::A) => {
                return Some(Transition::MainMenu);
            }
            _ => {}
        }

        self.render(display);
        None
    }

    fn render(&self, display: &mut dyn Display) {
        display.clear();
        let (title, color) = match self.kind {
            PlaceholderKind::GameOver => ("GAME OVER", Color::RED),
            PlaceholderKind::Settings => ("SETTINGS", Color::CYAN),
            PlaceholderKind::Credits => ("CREDITS", Color::CYAN),
        };
        display.draw_text(title, 20, 60, color, 2);
        for (i, line) in self.kind.lines().iter().enumerate() {
            display.draw_text(line, 10, 120 + i as i32 * 20, Color::WHITE, 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ui::HeadlessDisplay;

    #[test]
    fn settings_only_leaves_on_a() {
        let mut ctx = GameContext::new("Hero", 1);
        let mut display = HeadlessDisplay::new();
        let mut state = PlaceholderState::new(PlaceholderKind::Settings);
        state.enter(&mut ctx, &mut display);

        assert_eq!(state.update(&mut ctx, &Buttons::only(Button::B), &mut display), None);
        assert!(display.shows("SETTINGS"));
        assert_eq!(
            state.update(&mut ctx, &Buttons::only(Button::A), &mut display),
            Some(Transition::MainMenu)
        );
    }

    #[test]
    fn game_over_resets_on_any_button() {
        let mut ctx = GameContext::new("Hero", 1);
        ctx.player.set_gold(999);
        ctx.player.set_hp(0);
        ctx.dungeon.advance_floor();

        let mut display = HeadlessDisplay::new();
        let mut state = PlaceholderState::new(PlaceholderKind::GameOver);
        state.enter(&mut ctx, &mut display);
        assert_eq!(state.update(&mut ctx, &Buttons::default(), &mut display), None);
        assert_eq!(display.clear_count(), 2);

        assert_eq!(
            state.update(&mut ctx, &Buttons::only(Button::Down), &mut display),
            Some(Transition::MainMenu)
        );
        assert_eq!(ctx.player.gold(), hero::STARTING_GOLD);
        assert_eq!(ctx.dungeon.floor_number(), 1);
    }
}
