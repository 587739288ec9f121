//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘与终端事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 src/app.rs 调用
//!
//!             if event::poll(timeout)? {                  // 此处阻塞以等待事件，最长等待 timeout
//!                 Ok(Some(event::read()?))
//!             } else {
//!                 Ok(None)
//!             }
//!
//!
//!         · handle_event    事件分发
//!
//!         接收以下 Event 类型：
//!             Event::Key(KeyEvent)                // 键盘事件
//!             Event::Resize(width, height)        // 终端窗口大小变化 → AppMessage::Resize
//!             其它                                 // 忽略
//!
//!             键盘事件的判断顺序：
//!                 1. 只处理 Press，忽略 Release / Repeat
//!                 2. Ctrl+C 任何时候都退出
//!                 3. 有弹窗打开时，交给 handle_modal_keys
//!                 4. 全局快捷键（帮助、刷新、翻页、退出）
//!                 5. 卡片网格按键（方向键 / hjkl / Home / End / Enter）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 快捷键一览
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     ←↓↑→ / hjkl         移动选择光标
//!     Home / End          第一张 / 最后一张卡片
//!     Enter               打开人物详情
//!     n / PageDown        下一页
//!     p / PageUp          上一页
//!     Alt+r               刷新当前页
//!     ? / Alt+h           帮助
//!     Esc                 关闭弹窗，或关闭最新的通知
//!     q / Alt+q / Ctrl+C  退出
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
