//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，从不修改它。
//! 每轮主循环都会从头重绘整个界面。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 主布局
//!         mod components;     // 分页控件、状态栏、弹窗、加载动画
//!         mod pages;          // 人物卡片网格
//!         pub mod theme;      // 主题与样式
//!
//!
//!     屏幕自上而下：
//!
//!         ┌──────────────────────────────────────────────┐
//!         │ 标题栏                                        │
//!         ├──────────────────────────────────────────────┤
//!         │ ┌────────┐ ┌────────┐ ┌────────┐             │
//!         │ │ 卡片   │ │ 卡片   │ │ 卡片   │   卡片网格   │
//!         │ └────────┘ └────────┘ └────────┘             │
//!         ├──────────────────────────────────────────────┤
//!         │        ◀ Previous   [ 1 ]   Next ▶           │
//!         ├──────────────────────────────────────────────┤
//!         │ 快捷键提示 │ 最新通知                          │
//!         └──────────────────────────────────────────────┘
//!
//!     加载中时在网格上方叠加加载动画，弹窗绘制在最上层。
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
