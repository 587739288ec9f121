//! 应用主状态结构

use std::time::Duration;

use super::state::{ModalState, NotificationState, PaginationState};
use super::Viewport;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 翻页状态（当前页、记录与加载阶段）
    pub pagination: PaginationState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 状态栏通知
    pub notifications: NotificationState,

    /// 终端尺寸
    pub viewport: Viewport,

    /// 主循环计数
    pub tick: u64,
}

impl App {
    /// 创建新的应用实例
    pub fn new(notification_ttl: Duration) -> Self {
        Self {
            should_quit: false,
            pagination: PaginationState::new(),
            modal: ModalState::new(),
            notifications: NotificationState::new(notification_ttl),
            viewport: Viewport::default(),
            tick: 0,
        }
    }

    /// 当前终端宽度下的网格列数
    pub fn grid_columns(&self) -> usize {
        self.viewport.grid_columns()
    }
}
