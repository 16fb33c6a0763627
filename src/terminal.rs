//! 终端宿主：用字符格子模拟 TFT 屏幕，用键盘模拟四个按键
//!
//! 屏幕坐标按 6x8 像素一个字符格换算（字号 1 的一个字符正好一格）。
//! [`TerminalDisplay`] 只维护格子缓冲区，[`TerminalHost`] 负责用
//! ratatui 把缓冲区和日志面板画到终端上。

use std::collections::HashSet;
use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Context;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color as TuiColor, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use ui::{Button, Color, Display, Input, SCREEN_HEIGHT, SCREEN_WIDTH};

use crate::logger::LogBuffer;

/// 一个字符格对应的像素宽度
pub const CELL_WIDTH: i32 = 6;
/// 一个字符格对应的像素高度
pub const CELL_HEIGHT: i32 = 8;
pub const COLUMNS: usize = (SCREEN_WIDTH / CELL_WIDTH) as usize;
pub const ROWS: usize = (SCREEN_HEIGHT / CELL_HEIGHT) as usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
    bold: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::WHITE,
            bg: Color::BLACK,
            bold: false,
        }
    }
}

impl Cell {
    fn style(&self) -> Style {
        let style = Style::default().fg(tui_color(self.fg)).bg(tui_color(self.bg));
        if self.bold {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }
}

fn tui_color(color: Color) -> TuiColor {
    let (r, g, b) = color.to_rgb888();
    TuiColor::Rgb(r, g, b)
}

/// 字符格缓冲区
#[derive(Clone, Debug)]
pub struct TerminalDisplay {
    cells: Vec<Cell>,
}

impl Default for TerminalDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalDisplay {
    pub fn new() -> Self {
        Self {
            cells: vec![Cell::default(); COLUMNS * ROWS],
        }
    }

    /// 某一行的文字（测试和调试用）
    pub fn row_text(&self, row: usize) -> String {
        self.cells[row * COLUMNS..(row + 1) * COLUMNS]
            .iter()
            .map(|cell| cell.ch)
            .collect()
    }

    /// 转换为 ratatui 的行，相同样式的相邻格子合并为一个 span
    pub fn to_lines(&self) -> Vec<Line<'static>> {
        self.cells
            .chunks(COLUMNS)
            .map(|row| {
                let mut spans = Vec::new();
                let mut text = String::new();
                let mut style = row[0].style();
                for cell in row {
                    let cell_style = cell.style();
                    if cell_style != style {
                        spans.push(Span::styled(std::mem::take(&mut text), style));
                        style = cell_style;
                    }
                    text.push(cell.ch);
                }
                spans.push(Span::styled(text, style));
                Line::from(spans)
            })
            .collect()
    }

    fn cell_mut(&mut self, col: i32, row: i32) -> Option<&mut Cell> {
        if col < 0 || row < 0 || col as usize >= COLUMNS || row as usize >= ROWS {
            return None;
        }
        self.cells.get_mut(row as usize * COLUMNS + col as usize)
    }

    /// 像素矩形覆盖的格子范围（含两端）
    fn cell_span(x: i32, y: i32, w: i32, h: i32) -> Option<(i32, i32, i32, i32)> {
        if w <= 0 || h <= 0 {
            return None;
        }
        Some((
            x.div_euclid(CELL_WIDTH),
            y.div_euclid(CELL_HEIGHT),
            (x + w - 1).div_euclid(CELL_WIDTH),
            (y + h - 1).div_euclid(CELL_HEIGHT),
        ))
    }
}

impl Display for TerminalDisplay {
    fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Color, scale: u8) {
        let scale = i32::from(scale.max(1));
        let col = x.div_euclid(CELL_WIDTH);
        let row = y.div_euclid(CELL_HEIGHT);
        for (i, ch) in text.chars().enumerate() {
            if let Some(cell) = self.cell_mut(col + i as i32 * scale, row) {
                cell.ch = ch;
                cell.fg = color;
                cell.bold = scale > 1;
            }
        }
    }

    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        let Some((left, top, right, bottom)) = Self::cell_span(x, y, w, h) else {
            return;
        };
        for row in top..=bottom {
            for col in left..=right {
                let on_edge_row = row == top || row == bottom;
                let on_edge_col = col == left || col == right;
                let ch = match (on_edge_row, on_edge_col) {
                    (true, true) if top == bottom => '─',
                    (true, true) if left == right => '│',
                    (true, true) => match (row == top, col == left) {
                        (true, true) => '┌',
                        (true, false) => '┐',
                        (false, true) => '└',
                        (false, false) => '┘',
                    },
                    (true, false) => '─',
                    (false, true) => '│',
                    (false, false) => continue,
                };
                if let Some(cell) = self.cell_mut(col, row) {
                    cell.ch = ch;
                    cell.fg = color;
                }
            }
        }
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        let Some((left, top, right, bottom)) = Self::cell_span(x, y, w, h) else {
            return;
        };
        for row in top..=bottom {
            for col in left..=right {
                if let Some(cell) = self.cell_mut(col, row) {
                    cell.bg = color;
                }
            }
        }
    }
}

/// ratatui 终端，把缓冲区和日志面板画出来
pub struct TerminalHost {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    log: Option<LogBuffer>,
}

impl TerminalHost {
    pub fn new(log: Option<LogBuffer>) -> anyhow::Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend).context("Failed to create terminal")?;
        Ok(Self { terminal, log })
    }

    pub fn present(&mut self, display: &TerminalDisplay) -> anyhow::Result<()> {
        let screen = display.to_lines();
        let log_lines: Option<Vec<Line>> = self
            .log
            .as_ref()
            .map(|log| log.lines().into_iter().map(Line::from).collect());

        self.terminal
            .draw(|frame| {
                let chunks = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([
                        Constraint::Length(COLUMNS as u16 + 2), // TFT 视口
                        Constraint::Min(0),                     // 日志面板
                    ])
                    .split(frame.area());

                let viewport = Paragraph::new(screen)
                    .block(Block::default().borders(Borders::ALL).title("TFT"));
                frame.render_widget(viewport, chunks[0]);

                if let Some(lines) = log_lines {
                    let panel = Paragraph::new(lines)
                        .style(Style::default().fg(TuiColor::Gray))
                        .wrap(Wrap { trim: true })
                        .block(Block::default().borders(Borders::ALL).title("Log"));
                    frame.render_widget(panel, chunks[1]);
                }
            })
            .context("Failed to draw frame")?;
        Ok(())
    }
}

/// 按键映射结果
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Press(Button),
    Quit,
}

/// 方向键 = 上/下，z/Enter = A，x/Esc = B，q 或 Ctrl-C 退出
pub fn map_key(key: KeyEvent) -> Option<KeyAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(KeyAction::Quit);
    }
    match key.code {
        KeyCode::Up => Some(KeyAction::Press(Button::Up)),
        KeyCode::Down => Some(KeyAction::Press(Button::Down)),
        KeyCode::Enter | KeyCode::Char('z') => Some(KeyAction::Press(Button::A)),
        KeyCode::Esc | KeyCode::Char('x') => Some(KeyAction::Press(Button::B)),
        KeyCode::Char('q') => Some(KeyAction::Quit),
        _ => None,
    }
}

/// 键盘输入：收集按下的键，每个键被查询一次后清除
#[derive(Debug, Default)]
pub struct KeyboardInput {
    pressed: HashSet<Button>,
    quit: bool,
}

impl KeyboardInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// 读取所有待处理的终端事件，最多等待 `timeout`
    pub fn pump(&mut self, timeout: Duration) -> anyhow::Result<()> {
        let mut wait = timeout;
        while event::poll(wait).context("Failed to poll terminal events")? {
            if let Event::Key(key) = event::read().context("Failed to read terminal event")? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
            wait = Duration::ZERO;
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match map_key(key) {
            Some(KeyAction::Press(button)) => {
                self.pressed.insert(button);
            }
            Some(KeyAction::Quit) => self.quit = true,
            None => {}
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }
}

impl Input for KeyboardInput {
    fn was_pressed(&mut self, button: Button) -> bool {
        self.pressed.remove(&button)
    }
}
