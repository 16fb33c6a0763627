//! Test helpers for driving the game state manager frame by frame.
//!
//! `TestGame` wraps a seeded manager and a headless display so tests can
//! press buttons and inspect the screen without a terminal.

#![allow(dead_code)]

use tft_dungeon_crawler::{GameContext, GameStateManager, Transition};
use ui::{Button, Buttons, HeadlessDisplay};

/// Builder for a deterministic game session
pub struct TestGameBuilder {
    seed: u64,
    gold: Option<u32>,
    hp: Option<u32>,
}

impl TestGameBuilder {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            gold: None,
            hp: None,
        }
    }

    pub fn with_gold(mut self, gold: u32) -> Self {
        self.gold = Some(gold);
        self
    }

    pub fn with_hp(mut self, hp: u32) -> Self {
        self.hp = Some(hp);
        self
    }

    pub fn build(self) -> TestGame {
        let mut ctx = GameContext::new("Tester", self.seed);
        if let Some(gold) = self.gold {
            ctx.player.set_gold(gold);
        }
        if let Some(hp) = self.hp {
            ctx.player.set_hp(hp);
        }

        let mut display = HeadlessDisplay::new();
        let mut manager = GameStateManager::new(ctx);
        manager.initialize(&mut display);
        TestGame { manager, display }
    }
}

/// A running session with a headless screen
pub struct TestGame {
    pub manager: GameStateManager,
    pub display: HeadlessDisplay,
}

impl TestGame {
    /// Run one frame with a single button held
    pub fn press(&mut self, button: Button) -> Option<Transition> {
        self.manager.update_with(Buttons::only(button), &mut self.display)
    }

    /// Run one frame with nothing pressed
    pub fn idle(&mut self) -> Option<Transition> {
        self.manager.update_with(Buttons::default(), &mut self.display)
    }

    /// Press a sequence of buttons, one per frame
    pub fn press_all(&mut self, buttons: &[Button]) {
        for &button in buttons {
            self.press(button);
        }
    }

    pub fn current(&self) -> Transition {
        self.manager.current()
    }

    /// Walk from the main menu to the campfire
    pub fn go_to_campfire(&mut self) {
        self.press(Button::A);
        assert_eq!(self.current(), Transition::DoorChoice);
        self.press(Button::Up);
        self.press(Button::A);
        assert_eq!(self.current(), Transition::Campfire);
    }
}
