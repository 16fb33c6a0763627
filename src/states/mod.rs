//! 各个游戏界面
//!
//! 所有界面都放在 [`GameState`] 这个和类型里，由管理器用 match 分发。
//! 每个变体只保存自己的局部状态（光标、模式），共享实体从
//! [`GameContext`] 借用。

mod campfire;
mod combat_room;
mod door_choice;
mod main_menu;
mod placeholder;

pub use campfire::{CampfireMode, CampfireOption, CampfireRoomState, REST_COST, perform_rest};
pub use combat_room::{CombatMode, CombatOption, CombatRoomState};
pub use door_choice::{CAMPFIRE_SLOT, DoorChoiceState};
pub use main_menu::MainMenuState;
pub use placeholder::{PlaceholderKind, PlaceholderState};

use dungeon::RoomResolution;
use ui::{Buttons, Display};

use crate::core::{GameContext, Transition};

/// 当前激活的界面
#[derive(Clone, Debug)]
pub enum GameState {
    MainMenu(MainMenuState),
    DoorChoice(DoorChoiceState),
    Combat(CombatRoomState),
    Campfire(CampfireRoomState),
    Placeholder(PlaceholderState),
}

impl GameState {
    /// 转换请求对应的新界面（尚未 enter）
    pub fn for_transition(transition: Transition) -> Self {
        match transition {
            Transition::MainMenu => GameState::MainMenu(MainMenuState::new()),
            Transition::DoorChoice => GameState::DoorChoice(DoorChoiceState::new()),
            Transition::Combat => GameState::Combat(CombatRoomState::new()),
            Transition::Campfire => GameState::Campfire(CampfireRoomState::new()),
            Transition::GameOver => GameState::Placeholder(PlaceholderState::new(PlaceholderKind::GameOver)),
            Transition::Settings => GameState::Placeholder(PlaceholderState::new(PlaceholderKind::Settings)),
            Transition::Credits => GameState::Placeholder(PlaceholderState::new(PlaceholderKind::Credits)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GameState::MainMenu(_) => "MainMenu",
            GameState::DoorChoice(_) => "DoorChoice",
            GameState::Combat(_) => "CombatRoom",
            GameState::Campfire(_) => "CampfireRoom",
            GameState::Placeholder(state) => state.kind().title(),
        }
    }

    pub fn enter(&mut self, ctx: &mut GameContext, display: &mut dyn Display) {
        log::info!("Entering {}", self.name());
        match self {
            GameState::MainMenu(state) => state.enter(ctx, display),
            GameState::DoorChoice(state) => state.enter(ctx, display),
            GameState::Combat(state) => state.enter(ctx, display),
            GameState::Campfire(state) => state.enter(ctx, display),
            GameState::Placeholder(state) => state.enter(ctx, display),
        }
    }

    /// 运行一帧，返回本帧的转换请求（一次性）
    pub fn update(
        &mut self,
        ctx: &mut GameContext,
        buttons: &Buttons,
        display: &mut dyn Display,
    ) -> Option<Transition> {
        match self {
            GameState::MainMenu(state) => state.update(ctx, buttons, display),
            GameState::DoorChoice(state) => state.update(ctx, buttons, display),
            GameState::Combat(state) => state.update(ctx, buttons, display),
            GameState::Campfire(state) => state.update(ctx, buttons, display),
            GameState::Placeholder(state) => state.update(ctx, buttons, display),
        }
    }

    pub fn exit(&mut self, ctx: &mut GameContext) {
        log::info!("Exiting {}", self.name());
        match self {
            GameState::MainMenu(state) => state.exit(ctx),
            GameState::DoorChoice(state) => state.exit(ctx),
            GameState::Combat(state) => state.exit(ctx),
            GameState::Campfire(state) => state.exit(ctx),
            GameState::Placeholder(_) => {}
        }
    }
}

/// 房间结束后去哪：楼层房间回到选门，其余回主菜单
pub fn transition_after(resolution: RoomResolution) -> Transition {
    match resolution {
        RoomResolution::RoomCleared { .. } | RoomResolution::FloorCleared { .. } => {
            Transition::DoorChoice
        }
        RoomResolution::Unchanged => Transition::MainMenu,
    }
}
