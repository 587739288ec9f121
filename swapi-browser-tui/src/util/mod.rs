//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod logging;        // 日志初始化（写入文件）
//!         mod terminal;       // 终端初始化和恢复
//!         mod text;           // 按显示宽度截断文本
//!
//!
//!     终端：
//!         init_terminal()     启用 raw mode，进入备用屏幕
//!         restore_terminal()  禁用 raw mode，离开备用屏幕，显示光标
//!
//!         注意：无论程序是正常退出还是发生错误，都必须调用 restore_terminal！
//!               否则终端会保持在原始模式，用户输入不会正常显示。
//!
//!
//!     日志：
//!         TUI 独占终端，日志不能写到 stdout / stderr，
//!         因此 init_logging() 把 tracing 输出写入文件：
//!
//!             ~/.local/share/swapi-browser-tui/swapi-browser.log
//!
//!         日志级别优先取 RUST_LOG，其次是配置文件中的 log_level。
//!         swapi-browser-client 通过 log 宏输出，同样会被收集。
//!
//!
//!     文本：
//!         truncate_to_width() 按终端显示宽度（而非字节或字符数）截断，
//!         中文等宽字符占两列。
//!

mod logging;
mod terminal;
mod text;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
pub use text::truncate_to_width;
