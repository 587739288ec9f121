//! 翻页更新逻辑

use crate::message::{Command, PaginationMessage};
use crate::model::App;

/// 处理翻页消息
pub fn update(app: &mut App, msg: PaginationMessage) -> Option<Command> {
    let changed = match msg {
        PaginationMessage::Next => app.pagination.go_next(),
        PaginationMessage::Previous => app.pagination.go_previous(),
        PaginationMessage::Reload => true,
    };

    changed.then(|| load_current_page(app))
}

/// 进入加载阶段并生成请求命令
fn load_current_page(app: &mut App) -> Command {
    let generation = app.pagination.begin_load();
    Command::FetchPage {
        page: app.pagination.page,
        generation,
    }
}
