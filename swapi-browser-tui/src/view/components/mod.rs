//! 通用组件

pub mod loader;
pub mod modal;
pub mod pagination;
pub mod statusbar;
