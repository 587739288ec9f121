//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const QUIT_ALT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::alt(KeyCode::Char('h'));
    pub const REFRESH: KeyBinding = KeyBinding::alt(KeyCode::Char('r'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // 翻页
    pub const NEXT_PAGE: KeyBinding = KeyBinding::key(KeyCode::Char('n'));
    pub const NEXT_PAGE_ALT: KeyBinding = KeyBinding::key(KeyCode::PageDown);
    pub const PREV_PAGE: KeyBinding = KeyBinding::key(KeyCode::Char('p'));
    pub const PREV_PAGE_ALT: KeyBinding = KeyBinding::key(KeyCode::PageUp);

    // 网格
    pub const ACTIVATE: KeyBinding = KeyBinding::key(KeyCode::Enter);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binding_requires_exact_modifiers() {
        let alt_r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::ALT);
        let plain_r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
        assert!(DefaultKeymap::REFRESH.matches(&alt_r));
        assert!(!DefaultKeymap::REFRESH.matches(&plain_r));
    }
}
