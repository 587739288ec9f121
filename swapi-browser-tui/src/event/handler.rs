//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, Direction, GridMessage, ModalMessage, PaginationMessage};
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        Event::Resize(width, height) => AppMessage::Resize { width, height },
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，Windows 终端会额外发送 Release
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    if DefaultKeymap::QUIT.matches(&key) || DefaultKeymap::QUIT_ALT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::HELP.matches(&key) || is_plain_char(&key, '?') {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Pagination(PaginationMessage::Reload);
    }

    if DefaultKeymap::NEXT_PAGE.matches(&key) || DefaultKeymap::NEXT_PAGE_ALT.matches(&key) {
        return AppMessage::Pagination(PaginationMessage::Next);
    }

    if DefaultKeymap::PREV_PAGE.matches(&key) || DefaultKeymap::PREV_PAGE_ALT.matches(&key) {
        return AppMessage::Pagination(PaginationMessage::Previous);
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::DismissNotification;
    }

    handle_grid_keys(key)
}

/// `?` 在部分终端上带 Shift 修饰
fn is_plain_char(key: &KeyEvent, c: char) -> bool {
    key.code == KeyCode::Char(c)
        && (key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT)
}

/// 处理卡片网格的按键
fn handle_grid_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::ACTIVATE.matches(&key) {
        return AppMessage::Grid(GridMessage::Activate);
    }
    if !key.modifiers.is_empty() {
        return AppMessage::Noop;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Grid(GridMessage::Move(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Grid(GridMessage::Move(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => AppMessage::Grid(GridMessage::Move(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => {
            AppMessage::Grid(GridMessage::Move(Direction::Right))
        }
        KeyCode::Home => AppMessage::Grid(GridMessage::First),
        KeyCode::End => AppMessage::Grid(GridMessage::Last),
        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('c' | 'q')) => {
            AppMessage::Modal(ModalMessage::Close)
        }
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crossterm::event::KeyEventState;
    use swapi_browser_client::Character;

    use super::*;

    fn app() -> App {
        App::new(Duration::from_secs(5))
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn with(modifiers: KeyModifiers, code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn grid_keys() {
        let app = app();
        assert!(matches!(
            handle_event(press(KeyCode::Char('j')), &app),
            AppMessage::Grid(GridMessage::Move(Direction::Down))
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Left), &app),
            AppMessage::Grid(GridMessage::Move(Direction::Left))
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Enter), &app),
            AppMessage::Grid(GridMessage::Activate)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::End), &app),
            AppMessage::Grid(GridMessage::Last)
        ));
    }

    #[test]
    fn pagination_keys() {
        let app = app();
        assert!(matches!(
            handle_event(press(KeyCode::Char('n')), &app),
            AppMessage::Pagination(PaginationMessage::Next)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::PageUp), &app),
            AppMessage::Pagination(PaginationMessage::Previous)
        ));
        assert!(matches!(
            handle_event(with(KeyModifiers::ALT, KeyCode::Char('r')), &app),
            AppMessage::Pagination(PaginationMessage::Reload)
        ));
    }

    #[test]
    fn global_keys() {
        let app = app();
        assert!(matches!(
            handle_event(press(KeyCode::Char('q')), &app),
            AppMessage::Quit
        ));
        assert!(matches!(
            handle_event(with(KeyModifiers::SHIFT, KeyCode::Char('?')), &app),
            AppMessage::ShowHelp
        ));
        assert!(matches!(
            handle_event(with(KeyModifiers::ALT, KeyCode::Char('h')), &app),
            AppMessage::ShowHelp
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Esc), &app),
            AppMessage::DismissNotification
        ));
    }

    #[test]
    fn modal_swallows_navigation() {
        let mut app = app();
        app.modal.show_detail(Character::default());

        assert!(matches!(
            handle_event(press(KeyCode::Char('n')), &app),
            AppMessage::Noop
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Esc), &app),
            AppMessage::Modal(ModalMessage::Close)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('q')), &app),
            AppMessage::Modal(ModalMessage::Close)
        ));
        assert!(matches!(
            handle_event(with(KeyModifiers::CONTROL, KeyCode::Char('c')), &app),
            AppMessage::Quit
        ));
    }

    #[test]
    fn release_is_ignored() {
        let app = app();
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(matches!(
            handle_event(Event::Key(release), &app),
            AppMessage::Noop
        ));
    }

    #[test]
    fn resize_is_forwarded() {
        let app = app();
        assert!(matches!(
            handle_event(Event::Resize(120, 40), &app),
            AppMessage::Resize {
                width: 120,
                height: 40
            }
        ));
    }
}
