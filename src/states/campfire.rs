use combat::Combatant;
use error::{GameError, GameResult, handle_error};
use hero::{EquipmentSlot, Player};
use strum::{EnumCount, EnumIter, FromRepr, IntoEnumIterator};
use ui::{Button, Buttons, Color, Display, MenuBase, MenuResult};

use crate::core::{GameContext, Transition};
use crate::states::transition_after;

/// 休息一次的花费
pub const REST_COST: u32 = 20;

/// 营火菜单选项
#[derive(Clone, Copy, Debug, PartialEq, Eq, FromRepr, EnumIter, EnumCount)]
#[repr(u8)]
pub enum CampfireOption {
    Rest = 0,
    Inventory = 1,
    Leave = 2,
}

impl CampfireOption {
    pub fn label(self) -> &'static str {
        match self {
            CampfireOption::Rest => "Rest (20g)",
            CampfireOption::Inventory => "Inventory",
            CampfireOption::Leave => "Leave",
        }
    }
}

/// 营火界面的模式
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CampfireMode {
    Menu,
    Inventory,
    /// 提示消息，任意键关闭
    Notice(String),
}

/// 花 [`REST_COST`] 金币回满生命值，返回恢复的生命值
///
/// 先检查金币再检查生命值，失败时玩家不受影响。
pub fn perform_rest(player: &mut Player) -> GameResult<u32> {
    if player.gold() < REST_COST {
        return Err(GameError::InsufficientGold {
            cost: REST_COST,
            gold: player.gold(),
        });
    }
    if player.is_full_health() {
        return Err(GameError::AlreadyAtFullHealth);
    }

    player.spend_gold(REST_COST)?;
    let before = player.current_hp();
    player.set_hp(player.max_hp());
    Ok(player.current_hp() - before)
}

/// 营火房间：休息、查看背包、离开
#[derive(Clone, Debug)]
pub struct CampfireRoomState {
    mode: CampfireMode,
    menu: MenuBase,
    last_drawn: Option<usize>,
    needs_redraw: bool,
}

impl Default for CampfireRoomState {
    fn default() -> Self {
        Self::new()
    }
}

impl CampfireRoomState {
    pub fn new() -> Self {
        Self {
            mode: CampfireMode::Menu,
            menu: MenuBase::new(CampfireOption::COUNT),
            last_drawn: None,
            needs_redraw: true,
        }
    }

    pub fn mode(&self) -> &CampfireMode {
        &self.mode
    }

    pub fn selected(&self) -> usize {
        self.menu.selected()
    }

    pub fn enter(&mut self, ctx: &mut GameContext, display: &mut dyn Display) {
        self.menu.activate();
        self.set_mode(CampfireMode::Menu);
        self.render(ctx, display);
    }

    pub fn update(
        &mut self,
        ctx: &mut GameContext,
        buttons: &Buttons,
        display: &mut dyn Display,
    ) -> Option<Transition> {
        match self.mode {
            CampfireMode::Notice(_) => {
                if buttons.any() {
                    self.set_mode(CampfireMode::Menu);
                }
            }
            CampfireMode::Inventory => {
                if buttons.pressed(Button::B) {
                    self.set_mode(CampfireMode::Menu);
                }
            }
            CampfireMode::Menu => {
                let option = match self.menu.handle_input(buttons, true) {
                    MenuResult::Selected(index) => {
                        u8::try_from(index).ok().and_then(CampfireOption::from_repr)
                    }
                    MenuResult::Cancelled => Some(CampfireOption::Leave),
                    MenuResult::None => None,
                };
                match option {
                    Some(CampfireOption::Rest) => self.rest(ctx),
                    Some(CampfireOption::Inventory) => self.set_mode(CampfireMode::Inventory),
                    Some(CampfireOption::Leave) => {
                        log::info!("Leaving the campfire");
                        return Some(transition_after(ctx.dungeon.complete_room()));
                    }
                    None => {}
                }
            }
        }

        self.render(ctx, display);
        None
    }

    pub fn exit(&mut self, _ctx: &mut GameContext) {
        self.menu.deactivate();
    }

    fn rest(&mut self, ctx: &mut GameContext) {
        let message = match perform_rest(&mut ctx.player) {
            Ok(restored) => {
                log::info!("Rested at the campfire, restored {} HP", restored);
                "You feel refreshed!".to_string()
            }
            Err(err) => {
                log::info!("Cannot rest: {}", err);
                handle_error(&err)
            }
        };
        self.set_mode(CampfireMode::Notice(message));
    }

    fn set_mode(&mut self, mode: CampfireMode) {
        self.mode = mode;
        self.needs_redraw = true;
    }

    fn render(&mut self, ctx: &GameContext, display: &mut dyn Display) {
        if !self.needs_redraw && self.last_drawn == Some(self.menu.selected()) {
            return;
        }

        display.clear();
        display.draw_text("CAMPFIRE", 30, 15, Color::ORANGE, 2);
        let player = &ctx.player;
        let status = format!(
            "HP {}/{}  Gold {}",
            player.current_hp(),
            player.max_hp(),
            player.gold()
        );
        display.draw_text(&status, 10, 50, Color::GREEN, 1);

        match &self.mode {
            CampfireMode::Menu => self.draw_menu(display),
            CampfireMode::Inventory => Self::draw_inventory(player, display),
            CampfireMode::Notice(message) => {
                display.draw_text(message, 10, 150, Color::YELLOW, 1);
                display.draw_text("Press any button", 10, 290, Color::WHITE, 1);
            }
        }

        self.last_drawn = Some(self.menu.selected());
        self.needs_redraw = false;
    }

    fn draw_menu(&self, display: &mut dyn Display) {
        for (i, option) in CampfireOption::iter().enumerate() {
            let y = 100 + i as i32 * 40;
            if i == self.menu.selected() {
                display.fill_rect(15, y - 5, 140, 26, Color::BLUE);
            }
            display.draw_text(option.label(), 25, y, Color::WHITE, 2);
        }
        display.draw_text("A: Select  B: Leave", 10, 290, Color::YELLOW, 1);
    }

    fn draw_inventory(player: &Player, display: &mut dyn Display) {
        display.draw_text("INVENTORY", 10, 80, Color::CYAN, 2);
        let lines = [
            format!("Level {}  Exp {}", player.level(), player.experience()),
            format!("Potions: {}", player.potions()),
            format!("Attack {}  Defense {}", player.attack_power(), player.defense()),
        ];
        for (i, line) in lines.iter().enumerate() {
            display.draw_text(line, 10, 115 + i as i32 * 20, Color::WHITE, 1);
        }

        let equipment = player.equipment();
        let mut y = 185;
        if equipment.is_empty() {
            display.draw_text("No gear equipped", 10, y, Color::WHITE, 1);
        }
        let slots = [EquipmentSlot::Weapon, EquipmentSlot::Armor];
        for gear in slots.into_iter().filter_map(|slot| equipment.get(slot)) {
            display.draw_text(&gear.name, 10, y, Color::WHITE, 1);
            y += 20;
        }
        display.draw_text("B: Back", 10, 290, Color::YELLOW, 1);
    }
}
