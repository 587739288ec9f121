//! 应用主消息枚举

use swapi_browser_client::PageNumber;

use super::{GridMessage, ModalMessage, PaginationMessage};
use crate::backend::FetchOutcome;

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 时钟推进（每轮主循环一次）
    Tick,

    /// 终端大小变化
    Resize { width: u16, height: u16 },

    /// 翻页相关消息
    Pagination(PaginationMessage),

    /// 卡片网格相关消息
    Grid(GridMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 后台页面请求完成
    PageFetched {
        /// 发起请求时的代数
        generation: u64,
        page: PageNumber,
        outcome: FetchOutcome,
    },

    /// 显示帮助
    ShowHelp,

    /// 关闭最新的通知
    DismissNotification,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
