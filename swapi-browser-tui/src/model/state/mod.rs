//! 页面状态模块
//!
//! 定义翻页、弹窗与通知的状态数据结构

mod modal;
mod notification;
mod pagination;

pub use modal::{Modal, ModalState};
pub use notification::{NotificationLevel, NotificationState};
pub use pagination::{LoadPhase, PaginationState};
