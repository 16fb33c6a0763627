use combat::{Combat, Combatant, Enemy, EnemyKind};
use dungeon::RoomType;
use error::handle_error;
use strum::{EnumCount, EnumIter, FromRepr, IntoEnumIterator};
use ui::{Button, Buttons, Color, Display, MenuBase, MenuResult};

use crate::core::{GameContext, Transition};
use crate::states::transition_after;

const BAR_WIDTH: i32 = 150;

/// 战斗菜单选项
#[derive(Clone, Copy, Debug, PartialEq, Eq, FromRepr, EnumIter, EnumCount)]
#[repr(u8)]
pub enum CombatOption {
    Attack = 0,
    Potion = 1,
}

impl CombatOption {
    pub fn label(self) -> &'static str {
        match self {
            CombatOption::Attack => "Attack",
            CombatOption::Potion => "Potion",
        }
    }
}

/// 战斗界面的模式
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CombatMode {
    Menu,
    /// 提示消息，任意键回到菜单
    Notice(String),
    /// 敌人已被击败，按 A 离开房间
    Victory(String),
}

/// 战斗房间
#[derive(Clone, Debug)]
pub struct CombatRoomState {
    mode: CombatMode,
    menu: MenuBase,
    log: Vec<String>,
    last_drawn: Option<usize>,
    needs_redraw: bool,
}

impl Default for CombatRoomState {
    fn default() -> Self {
        Self::new()
    }
}

impl CombatRoomState {
    pub fn new() -> Self {
        Self {
            mode: CombatMode::Menu,
            menu: MenuBase::new(CombatOption::COUNT),
            log: Vec::new(),
            last_drawn: None,
            needs_redraw: true,
        }
    }

    pub fn mode(&self) -> &CombatMode {
        &self.mode
    }

    /// 最近一回合的战斗记录
    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn enter(&mut self, ctx: &mut GameContext, display: &mut dyn Display) {
        ctx.enemy = spawn_for_current_room(ctx);
        log::info!(
            "{} appears on floor {} (hp {})",
            ctx.enemy.title(),
            ctx.dungeon.floor_number(),
            ctx.enemy.hp
        );

        self.menu.activate();
        self.log = vec![format!("A {} appears!", ctx.enemy.title())];
        self.set_mode(CombatMode::Menu);
        self.render(ctx, display);
    }

    pub fn update(
        &mut self,
        ctx: &mut GameContext,
        buttons: &Buttons,
        display: &mut dyn Display,
    ) -> Option<Transition> {
        match self.mode {
            CombatMode::Victory(_) => {
                if buttons.pressed(Button::A) {
                    return Some(transition_after(ctx.dungeon.complete_room()));
                }
            }
            CombatMode::Notice(_) => {
                if buttons.any() {
                    self.set_mode(CombatMode::Menu);
                }
            }
            CombatMode::Menu => {
                let option = match self.menu.handle_input(buttons, false) {
                    MenuResult::Selected(index) => {
                        u8::try_from(index).ok().and_then(CombatOption::from_repr)
                    }
                    MenuResult::Cancelled | MenuResult::None => None,
                };
                let outcome = match option {
                    Some(CombatOption::Attack) => self.attack(ctx),
                    Some(CombatOption::Potion) => self.drink_potion(ctx),
                    None => None,
                };
                if outcome.is_some() {
                    return outcome;
                }
            }
        }

        self.render(ctx, display);
        None
    }

    pub fn exit(&mut self, _ctx: &mut GameContext) {
        self.menu.deactivate();
    }

    /// 玩家攻击；敌人存活时反击
    fn attack(&mut self, ctx: &mut GameContext) -> Option<Transition> {
        let strike = Combat::strike(&ctx.player, &mut ctx.enemy, &mut ctx.rng);
        self.log = vec![strike.message];

        if !strike.defender_alive {
            self.win(ctx);
            return None;
        }
        self.enemy_turn(ctx)
    }

    fn drink_potion(&mut self, ctx: &mut GameContext) -> Option<Transition> {
        match ctx.player.use_potion() {
            Ok(healed) => {
                log::info!("{} drinks a potion (+{} hp)", ctx.player.name, healed);
                self.log = vec![format!("Healed {} HP", healed)];
                self.enemy_turn(ctx)
            }
            Err(err) => {
                self.set_mode(CombatMode::Notice(handle_error(&err)));
                None
            }
        }
    }

    fn enemy_turn(&mut self, ctx: &mut GameContext) -> Option<Transition> {
        let strike = Combat::strike(&ctx.enemy, &mut ctx.player, &mut ctx.rng);
        self.log.push(strike.message);
        self.needs_redraw = true;

        if strike.defender_alive {
            None
        } else {
            log::info!("{} was slain by {}", ctx.player.name, ctx.enemy.title());
            Some(Transition::GameOver)
        }
    }

    fn win(&mut self, ctx: &mut GameContext) {
        let enemy = &ctx.enemy;
        ctx.player.add_gold(enemy.gold_reward);
        let leveled = ctx.player.gain_experience(enemy.exp_reward);
        log::info!(
            "{} defeated: +{} gold, +{} exp",
            enemy.title(),
            enemy.gold_reward,
            enemy.exp_reward
        );

        let mut message = format!("Victory! +{} gold", enemy.gold_reward);
        if leveled {
            message = format!("{} Level {}!", message, ctx.player.level());
        }
        self.set_mode(CombatMode::Victory(message));
    }

    fn set_mode(&mut self, mode: CombatMode) {
        self.mode = mode;
        self.needs_redraw = true;
    }

    fn render(&mut self, ctx: &GameContext, display: &mut dyn Display) {
        if !self.needs_redraw && self.last_drawn == Some(self.menu.selected()) {
            return;
        }

        display.clear();
        let enemy = &ctx.enemy;
        let title_color = if enemy.is_boss { Color::RED } else { Color::WHITE };
        display.draw_text(&enemy.title(), 10, 10, title_color, 2);
        draw_bar(display, 40, enemy.hp(), enemy.max_hp(), Color::RED);

        let player = &ctx.player;
        display.draw_text(&player.name, 10, 120, Color::CYAN, 2);
        draw_bar(display, 150, player.hp(), player.max_hp(), Color::GREEN);
        let supplies = format!("Potions {}  Gold {}", player.potions(), player.gold());
        display.draw_text(&supplies, 10, 180, Color::WHITE, 1);

        for (i, line) in self.log.iter().enumerate() {
            display.draw_text(line, 5, 200 + i as i32 * 12, Color::YELLOW, 1);
        }

        match &self.mode {
            CombatMode::Menu => {
                for (i, option) in CombatOption::iter().enumerate() {
                    let y = 235 + i as i32 * 25;
                    if i == self.menu.selected() {
                        display.fill_rect(15, y - 3, 100, 20, Color::BLUE);
                    }
                    display.draw_text(option.label(), 25, y, Color::WHITE, 2);
                }
            }
            CombatMode::Notice(message) => {
                display.draw_text(message, 10, 240, Color::ORANGE, 1);
                display.draw_text("Press any button", 10, 295, Color::WHITE, 1);
            }
            CombatMode::Victory(message) => {
                display.draw_text(message, 10, 240, Color::GREEN, 1);
                display.draw_text("A: Continue", 10, 295, Color::WHITE, 1);
            }
        }

        self.last_drawn = Some(self.menu.selected());
        self.needs_redraw = false;
    }
}

/// 按当前房间生成敌人；没有房间时（例如直接跳转）出现一只哥布林
fn spawn_for_current_room(ctx: &GameContext) -> Enemy {
    let floor = ctx.dungeon.floor_number();
    match ctx.dungeon.current_room() {
        Some(room) if room.room_type() == RoomType::Boss => {
            Enemy::spawn(room.enemy_kind().unwrap_or(EnemyKind::Orc), floor, true)
        }
        Some(room) => Enemy::spawn(room.enemy_kind().unwrap_or_default(), floor, false),
        None => Enemy::spawn(EnemyKind::Goblin, floor, false),
    }
}

fn draw_bar(display: &mut dyn Display, y: i32, hp: u32, max_hp: u32, color: Color) {
    let filled = if max_hp == 0 {
        0
    } else {
        (BAR_WIDTH as u32 * hp / max_hp) as i32
    };
    display.draw_rect(10, y, BAR_WIDTH, 10, Color::WHITE);
    if filled > 0 {
        display.fill_rect(10, y, filled, 10, color);
    }
    display.draw_text(&format!("HP {}/{}", hp, max_hp), 10, y + 15, Color::WHITE, 1);
}
