//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁。
//! 所有的用户操作、后台结果和时钟推进都通过 Message 来表达，
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息 AppMessage
//!         mod command;        // 副作用命令 Command（Update → 主循环）
//!         mod grid;           // 卡片网格子消息
//!         mod modal;          // 弹窗子消息
//!         mod pagination;     // 翻页子消息
//!
//!
//!     消息的来源有三处：
//!         - event/handler.rs      键盘输入 → AppMessage
//!         - app.rs                每轮循环的 AppMessage::Tick
//!         - backend               后台请求完成 → AppMessage::PageFetched
//!
//!     消息的去向只有一处：update::update(app, msg)。
//!
//!
//!     Command 则反方向流动：
//!         update::update 返回 Option<Command>，
//!         主循环（app.rs）负责执行它（例如 spawn 一个页面请求）。
//!         Update 层因此保持同步、纯粹，便于测试。
//!

mod app;
mod command;
mod grid;
mod modal;
mod pagination;

pub use app::AppMessage;
pub use command::Command;
pub use grid::{Direction, GridMessage};
pub use modal::ModalMessage;
pub use pagination::PaginationMessage;
