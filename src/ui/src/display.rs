//! 显示接口

/// TFT 屏幕宽度（像素）
pub const SCREEN_WIDTH: i32 = 170;
/// TFT 屏幕高度（像素）
pub const SCREEN_HEIGHT: i32 = 320;

/// RGB565 颜色
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color(pub u16);

impl Color {
    pub const BLACK: Color = Color(0x0000);
    pub const WHITE: Color = Color(0xFFFF);
    pub const CYAN: Color = Color(0x07FF);
    pub const YELLOW: Color = Color(0xFFE0);
    pub const BLUE: Color = Color(0x001F);
    pub const RED: Color = Color(0xF800);
    pub const GREEN: Color = Color(0x07E0);
    pub const ORANGE: Color = Color(0xFDA0);

    /// 展开为 8 位 RGB 分量
    pub fn to_rgb888(self) -> (u8, u8, u8) {
        let r = ((self.0 >> 11) & 0x1F) as u8;
        let g = ((self.0 >> 5) & 0x3F) as u8;
        let b = (self.0 & 0x1F) as u8;
        ((r << 3) | (r >> 2), (g << 2) | (g >> 4), (b << 3) | (b >> 2))
    }
}

/// 立即模式的绘制接口，所有调用同步完成
#[cfg_attr(test, mockall::automock)]
pub trait Display {
    /// 用黑色清空整个屏幕
    fn clear(&mut self);

    /// 在 (x, y) 绘制文字，`scale` 为字号倍数（1 = 6x8 像素）
    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Color, scale: u8);

    /// 绘制矩形边框
    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color);

    /// 绘制实心矩形
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color);
}
