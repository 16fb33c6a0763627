use ui::{Buttons, Display, Input};

use crate::core::{GameContext, Transition};
use crate::states::GameState;

/// 顶层状态机：持有共享实体和唯一的当前界面
pub struct GameStateManager {
    ctx: GameContext,
    state: GameState,
    current: Transition,
    initialized: bool,
}

impl GameStateManager {
    pub fn new(ctx: GameContext) -> Self {
        Self {
            ctx,
            state: GameState::for_transition(Transition::MainMenu),
            current: Transition::MainMenu,
            initialized: false,
        }
    }

    /// 打印启动信息并进入主菜单
    pub fn initialize(&mut self, display: &mut dyn Display) {
        if self.initialized {
            return;
        }
        log::info!("=== ESP32 Dungeon Crawler v0.1.0 ===");
        log::info!("Welcome, {}", self.ctx.player.name);
        self.state.enter(&mut self.ctx, display);
        self.initialized = true;
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// 一帧：采集按键，运行当前界面，执行转换请求
    pub fn update<I: Input + ?Sized>(&mut self, display: &mut dyn Display, input: &mut I) -> Option<Transition> {
        let buttons = Buttons::poll(input);
        self.update_with(buttons, display)
    }

    /// 用已有的按键快照运行一帧
    pub fn update_with(&mut self, buttons: Buttons, display: &mut dyn Display) -> Option<Transition> {
        self.initialize(display);

        let request = self.state.update(&mut self.ctx, &buttons, display);
        if let Some(transition) = request {
            self.change_state(transition, display);
        }
        request
    }

    /// exit 当前界面，切换后 enter 新界面
    pub fn change_state(&mut self, transition: Transition, display: &mut dyn Display) {
        log::info!("{} -> {}", self.current, transition);
        self.state.exit(&mut self.ctx);
        self.state = GameState::for_transition(transition);
        self.current = transition;
        self.state.enter(&mut self.ctx, display);
    }

    /// 按原始编号切换；`0` 不做任何事，未知编号回到主菜单
    pub fn apply_transition_code(&mut self, code: u8, display: &mut dyn Display) {
        match Transition::from_code(code) {
            Ok(Some(transition)) => self.change_state(transition, display),
            Ok(None) => {}
            Err(code) => {
                log::warn!("Unknown transition code {}, returning to main menu", code);
                self.change_state(Transition::MainMenu, display);
            }
        }
    }

    /// 当前所在的界面
    pub fn current(&self) -> Transition {
        self.current
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn context(&self) -> &GameContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut GameContext {
        &mut self.ctx
    }

    pub fn reset_player(&mut self) {
        self.ctx.reset_player();
    }

    pub fn reset_dungeon_progress(&mut self) {
        self.ctx.reset_dungeon_progress();
    }

    pub fn full_game_reset(&mut self) {
        self.ctx.full_game_reset();
    }
}
