use combat::Combatant;
use dungeon::{DoorChoice, ROOMS_BEFORE_BOSS, RoomType};
use error::handle_error;
use ui::{Buttons, Color, Display, MenuBase, MenuResult};

use crate::core::{GameContext, Transition};

/// 两扇门之后固定的营火选项
pub const CAMPFIRE_SLOT: usize = 2;

const OPTION_COUNT: usize = 3;
const DOOR_TOP: i32 = 60;
const DOOR_SPACING: i32 = 70;
const BOX_WIDTH: i32 = 150;
const BOX_HEIGHT: i32 = 60;

/// 选门界面
///
/// 进入时只取一次门的列表并缓存，光标在两扇门和营火之间循环。
#[derive(Clone, Debug)]
pub struct DoorChoiceState {
    choices: Vec<DoorChoice>,
    menu: MenuBase,
    last_drawn: Option<usize>,
}

impl Default for DoorChoiceState {
    fn default() -> Self {
        Self::new()
    }
}

impl DoorChoiceState {
    pub fn new() -> Self {
        Self {
            choices: Vec::new(),
            menu: MenuBase::new(OPTION_COUNT),
            last_drawn: None,
        }
    }

    /// 缓存的门
    pub fn choices(&self) -> &[DoorChoice] {
        &self.choices
    }

    pub fn selected(&self) -> usize {
        self.menu.selected()
    }

    pub fn enter(&mut self, ctx: &mut GameContext, display: &mut dyn Display) {
        self.choices = ctx.dungeon.available_rooms();
        for choice in &self.choices {
            log::debug!(
                "Door {}: {} {}",
                choice.slot,
                choice.icon.label(),
                choice.description
            );
        }
        self.menu.activate();
        self.last_drawn = None;
        self.render(ctx, display);
    }

    pub fn update(
        &mut self,
        ctx: &mut GameContext,
        buttons: &Buttons,
        display: &mut dyn Display,
    ) -> Option<Transition> {
        match self.menu.handle_input(buttons, true) {
            MenuResult::Selected(CAMPFIRE_SLOT) => return Some(Transition::Campfire),
            MenuResult::Selected(slot) => {
                if let Some(transition) = self.open_door(ctx, slot) {
                    return Some(transition);
                }
            }
            MenuResult::Cancelled => return Some(Transition::MainMenu),
            MenuResult::None => {}
        }

        self.render(ctx, display);
        None
    }

    pub fn exit(&mut self, _ctx: &mut GameContext) {
        self.menu.deactivate();
    }

    /// 打开第 `slot` 扇门。空门（只剩首领时的右门）不做任何事
    fn open_door(&mut self, ctx: &mut GameContext, slot: usize) -> Option<Transition> {
        if slot >= self.choices.len() {
            log::debug!("Door {} is sealed", slot);
            return None;
        }

        let room_type = match ctx.dungeon.select_room(slot) {
            Ok(room) => room.room_type(),
            Err(err) => {
                log::warn!("{}", handle_error(&err));
                return None;
            }
        };

        if room_type.is_combat() {
            Some(Transition::Combat)
        } else {
            // 宝箱和商店还没有自己的界面
            log::info!("{} room is not open yet, back to the menu", room_type);
            ctx.dungeon.abandon_room();
            Some(Transition::MainMenu)
        }
    }

    fn render(&mut self, ctx: &GameContext, display: &mut dyn Display) {
        if self.last_drawn == Some(self.menu.selected()) {
            return;
        }

        display.clear();
        display.draw_text("CHOOSE A DOOR", 10, 10, Color::CYAN, 2);
        let progress = format!(
            "Floor {}  Rooms {}/{}",
            ctx.dungeon.floor_number(),
            ctx.dungeon.current_floor().rooms_completed(),
            ROOMS_BEFORE_BOSS
        );
        display.draw_text(&progress, 10, 35, Color::WHITE, 1);

        for slot in 0..CAMPFIRE_SLOT {
            let y = DOOR_TOP + slot as i32 * DOOR_SPACING;
            self.draw_box(display, slot, y);
            match self.choices.get(slot) {
                Some(choice) => {
                    let color = if choice.room_type == RoomType::Boss {
                        Color::RED
                    } else {
                        Color::WHITE
                    };
                    display.draw_text(choice.icon.label(), 20, y + 10, color, 2);
                    display.draw_text(&choice.description, 20, y + 38, Color::WHITE, 1);
                }
                None => display.draw_text("(sealed)", 20, y + 22, Color::WHITE, 1),
            }
        }

        let y = DOOR_TOP + CAMPFIRE_SLOT as i32 * DOOR_SPACING;
        self.draw_box(display, CAMPFIRE_SLOT, y);
        display.draw_text("Campfire", 20, y + 10, Color::ORANGE, 2);
        display.draw_text("Rest and recover", 20, y + 38, Color::WHITE, 1);

        let stats = format!(
            "HP {}/{}  Gold {}",
            ctx.player.current_hp(),
            ctx.player.max_hp(),
            ctx.player.gold()
        );
        display.draw_text(&stats, 10, 275, Color::GREEN, 1);
        display.draw_text("A: Enter  B: Menu", 10, 295, Color::YELLOW, 1);

        self.last_drawn = Some(self.menu.selected());
    }

    fn draw_box(&self, display: &mut dyn Display, slot: usize, y: i32) {
        let color = if slot == self.menu.selected() {
            Color::YELLOW
        } else {
            Color::BLUE
        };
        display.draw_rect(10, y, BOX_WIDTH, BOX_HEIGHT, color);
    }
}
