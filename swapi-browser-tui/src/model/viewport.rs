//! 终端尺寸

/// 终端尺寸（字符单元）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// 卡片网格列数
    pub fn grid_columns(&self) -> usize {
        grid_columns(self.width)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(80, 24)
    }
}

/// 根据终端宽度计算卡片网格列数
///
/// 窄终端单列，随宽度增加为 3 / 4 / 5 列。
pub fn grid_columns(width: u16) -> usize {
    match width {
        0..80 => 1,
        80..120 => 3,
        120..160 => 4,
        _ => 5,
    }
}
