//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod grid;               // 卡片网格子消息处理
//!         mod modal;              // 弹窗子消息处理
//!         mod pagination;         // 翻页子消息处理
//!
//!         pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {...}
//!
//!
//!     update 本身是同步的，不做任何 I/O。
//!     需要访问网络时，它返回一个 Command 交给主循环执行：
//!
//!         AppMessage::Pagination(Next)
//!             ↓
//!         pagination::update  →  page += 1, begin_load() 得到 generation
//!             ↓
//!         Some(Command::FetchPage { page, generation })
//!             ↓
//!         app.rs 中 spawn 请求，结果以 AppMessage::PageFetched 送回
//!             ↓
//!         update  →  pagination.finish_load(generation, records)
//!                    过期的 generation 直接丢弃
//!                    失败时推送一条错误通知
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod grid;
mod modal;
mod pagination;

use std::time::Instant;

use swapi_browser_client::PageNumber;

use crate::backend::FetchOutcome;
use crate::i18n::t;
use crate::message::{AppMessage, Command};
use crate::model::{App, Viewport};

/// 处理应用消息，更新状态，返回需要执行的副作用
pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            None
        }

        AppMessage::Tick => {
            app.tick = app.tick.wrapping_add(1);
            if !app.notifications.is_empty() {
                app.notifications.prune(Instant::now());
            }
            None
        }

        AppMessage::Resize { width, height } => {
            app.viewport = Viewport::new(width, height);
            log::debug!(
                "终端大小变化：{}x{}，{} 列",
                app.viewport.width,
                app.viewport.height,
                app.grid_columns()
            );
            None
        }

        AppMessage::Pagination(pagination_msg) => pagination::update(app, pagination_msg),

        AppMessage::Grid(grid_msg) => {
            grid::update(app, grid_msg);
            None
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
            None
        }

        AppMessage::PageFetched {
            generation,
            page,
            outcome,
        } => {
            apply_fetch_result(app, generation, page, outcome);
            None
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
            None
        }

        AppMessage::DismissNotification => {
            app.notifications.dismiss_latest();
            None
        }

        AppMessage::Noop => None,
    }
}

/// 应用后台请求结果
fn apply_fetch_result(app: &mut App, generation: u64, page: PageNumber, outcome: FetchOutcome) {
    let FetchOutcome { records, failure } = outcome;
    let count = records.len();

    if !app.pagination.finish_load(generation, records) {
        log::debug!(
            "丢弃过期结果：第 {page} 页 (generation {generation}, 当前 {})",
            app.pagination.generation()
        );
        return;
    }

    let texts = &t().notification;
    match failure {
        Some(reason) => {
            let prefix = texts.fetch_failed.replace("{page}", &page.to_string());
            app.notifications.push_error(format!("{prefix}: {reason}"));
        }
        None => {
            log::debug!("第 {page} 页已加载：{count} 条");
            if !app.pagination.can_go_next() && count > 0 {
                app.notifications
                    .push_info(texts.last_page.replace("{page}", &page.to_string()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use swapi_browser_client::Character;

    use super::*;
    use crate::message::{GridMessage, ModalMessage, PaginationMessage};
    use crate::model::state::{LoadPhase, NotificationLevel};

    fn app() -> App {
        App::new(Duration::from_secs(5))
    }

    fn character(i: usize) -> Character {
        Character {
            name: Some(format!("Character {i}")),
            height: Some("172".to_string()),
            mass: Some("77".to_string()),
            birth_year: Some("19BBY".to_string()),
            created: Some("2014-12-09T13:50:51.644000Z".to_string()),
            films: Some(vec!["https://swapi.dev/api/films/1/".to_string(); 4]),
            ..Character::default()
        }
    }

    fn success(n: usize) -> FetchOutcome {
        FetchOutcome {
            records: (0..n).map(character).collect(),
            failure: None,
        }
    }

    fn fetched(command: Option<Command>, outcome: FetchOutcome) -> AppMessage {
        let Some(Command::FetchPage { page, generation }) = command else {
            panic!("expected a fetch command, got {command:?}");
        };
        AppMessage::PageFetched {
            generation,
            page,
            outcome,
        }
    }

    #[test]
    fn mount_browse_and_close() {
        let mut app = app();

        // 挂载：请求第 1 页
        let command = update(&mut app, AppMessage::Pagination(PaginationMessage::Reload));
        assert_eq!(
            command,
            Some(Command::FetchPage {
                page: PageNumber::first(),
                generation: 1
            })
        );
        assert!(app.pagination.is_loading());

        // 收到 10 条记录
        assert!(update(&mut app, fetched(command, success(10))).is_none());
        assert_eq!(app.pagination.phase, LoadPhase::Loaded);
        assert_eq!(app.pagination.records.len(), 10);
        assert!(app.pagination.can_go_next());
        assert!(!app.pagination.can_go_previous());

        // 选中第二张卡片并打开详情
        update(
            &mut app,
            AppMessage::Grid(GridMessage::Move(crate::message::Direction::Right)),
        );
        update(&mut app, AppMessage::Grid(GridMessage::Activate));
        assert!(app.modal.is_detail_visible());
        let details = app.modal.details().expect("detail open");
        assert_eq!(details.name, "Character 1");
        assert_eq!(details.height.as_deref(), Some("1.72"));
        assert_eq!(details.mass.as_deref(), Some("77 kg"));
        assert_eq!(details.date_added.as_deref(), Some("09-12-2014"));
        assert_eq!(details.appearances.as_deref(), Some("4"));

        // 关闭
        update(&mut app, AppMessage::Modal(ModalMessage::Close));
        assert!(!app.modal.is_open());
        assert!(app.modal.selected_character().is_none());
    }

    #[test]
    fn fetch_failure_notifies_and_empties_grid() {
        let mut app = app();
        let command = update(&mut app, AppMessage::Pagination(PaginationMessage::Reload));
        update(&mut app, fetched(command, success(10)));
        assert!(app.notifications.is_empty());

        let command = update(&mut app, AppMessage::Pagination(PaginationMessage::Next));
        let failure = FetchOutcome {
            records: Vec::new(),
            failure: Some("HTTP 500: oops".to_string()),
        };
        update(&mut app, fetched(command, failure));

        assert!(app.pagination.records.is_empty());
        assert_eq!(app.pagination.phase, LoadPhase::Loaded);
        assert!(!app.pagination.can_go_next());
        assert!(app.pagination.can_go_previous());

        let latest = app.notifications.latest().expect("notification");
        assert_eq!(latest.level, NotificationLevel::Error);
        assert!(latest.message.contains("HTTP 500: oops"));
    }

    #[test]
    fn stale_result_does_not_modify_state() {
        let mut app = app();
        let first = update(&mut app, AppMessage::Pagination(PaginationMessage::Reload));
        let second = update(&mut app, AppMessage::Pagination(PaginationMessage::Reload));

        update(
            &mut app,
            fetched(
                first,
                FetchOutcome {
                    records: Vec::new(),
                    failure: Some("late failure".to_string()),
                },
            ),
        );
        assert!(app.pagination.is_loading());
        assert!(app.notifications.is_empty());

        update(&mut app, fetched(second, success(7)));
        assert_eq!(app.pagination.records.len(), 7);
    }

    #[test]
    fn short_page_announces_last_page() {
        let mut app = app();
        let command = update(&mut app, AppMessage::Pagination(PaginationMessage::Reload));
        update(&mut app, fetched(command, success(2)));

        let latest = app.notifications.latest().expect("notification");
        assert_eq!(latest.level, NotificationLevel::Info);
        assert!(latest.message.contains('1'));
    }

    #[test]
    fn tick_prunes_and_counts() {
        let mut app = App::new(Duration::ZERO);
        app.notifications.push_info("gone next tick");
        update(&mut app, AppMessage::Tick);
        assert_eq!(app.tick, 1);
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn resize_updates_viewport() {
        let mut app = app();
        update(
            &mut app,
            AppMessage::Resize {
                width: 200,
                height: 50,
            },
        );
        assert_eq!(app.grid_columns(), 5);
    }

    #[test]
    fn help_and_quit() {
        let mut app = app();
        update(&mut app, AppMessage::ShowHelp);
        assert!(app.modal.is_open());
        assert!(!app.modal.is_detail_visible());

        assert!(update(&mut app, AppMessage::Quit).is_none());
        assert!(app.should_quit);
    }
}
