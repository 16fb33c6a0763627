use ui::{Buttons, Display, MainMenu, MainMenuOption, MenuResult};

use crate::core::{GameContext, Transition};

/// 标题画面
#[derive(Clone, Debug, Default)]
pub struct MainMenuState {
    menu: MainMenu,
}

impl MainMenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> usize {
        self.menu.selected()
    }

    pub fn enter(&mut self, _ctx: &mut GameContext, display: &mut dyn Display) {
        self.menu.activate();
        self.menu.render(display);
    }

    pub fn update(
        &mut self,
        _ctx: &mut GameContext,
        buttons: &Buttons,
        display: &mut dyn Display,
    ) -> Option<Transition> {
        if let MenuResult::Selected(_) = self.menu.handle_input(buttons) {
            let option = self.menu.selected_option()?;
            log::info!("Main menu: {}", option.label());
            return Some(match option {
                MainMenuOption::StartGame => Transition::DoorChoice,
                MainMenuOption::Settings => Transition::Settings,
                MainMenuOption::Credits => Transition::Credits,
            });
        }

        self.menu.render(display);
        None
    }

    pub fn exit(&mut self, _ctx: &mut GameContext) {
        self.menu.deactivate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ui::{Button, HeadlessDisplay};

    fn entered() -> (MainMenuState, GameContext, HeadlessDisplay) {
        let mut ctx = GameContext::new("Hero", 1);
        let mut display = HeadlessDisplay::new();
        let mut state = MainMenuState::new();
        state.enter(&mut ctx, &mut display);
        (state, ctx, display)
    }

    #[test]
    fn start_game_goes_to_door_choice() {
        let (mut state, mut ctx, mut display) = entered();
        assert!(display.shows("Start Game"));
        assert_eq!(
            state.update(&mut ctx, &Buttons::only(Button::A), &mut display),
            Some(Transition::DoorChoice)
        );
    }

    #[test]
    fn settings_and_credits_are_reachable() {
        let (mut state, mut ctx, mut display) = entered();
        state.update(&mut ctx, &Buttons::only(Button::Down), &mut display);
        assert_eq!(
            state.update(&mut ctx, &Buttons::only(Button::A), &mut display),
            Some(Transition::Settings)
        );

        let (mut state, mut ctx, mut display) = entered();
        state.update(&mut ctx, &Buttons::only(Button::Up), &mut display);
        assert_eq!(
            state.update(&mut ctx, &Buttons::only(Button::A), &mut display),
            Some(Transition::Credits)
        );
    }

    #[test]
    fn cancel_does_nothing_on_title_screen() {
        let (mut state, mut ctx, mut display) = entered();
        assert_eq!(state.update(&mut ctx, &Buttons::only(Button::B), &mut display), None);
        assert_eq!(state.selected(), 0);
    }
}
