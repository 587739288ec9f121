//!
//! app.rs
//! 应用主循环
//!
//!
//! 启动时先派发一次 `Reload`（相当于“挂载”），触发第一页的请求。
//!
//! 主循环每轮执行：
//! loop {
//!
//!     update(app, Tick)                           // 推进加载动画、清理过期通知
//!     while let Ok(msg) = rx.try_recv() {...}     // 取出后台任务送回的请求结果
//!     terminal.draw(|f| view::render(&app, f))    // 渲染 UI
//!     if app.should_quit { break }
//!     if let Some(event) = poll_event() {         // 轮询输入，最多等待 100ms
//!         let msg = handle_event(event, &app);
//!         dispatch(app, msg)
//!     }
//! }
//!
//! update 返回的 Command 在此执行：请求被 spawn 到 tokio 上，
//! 结果以 `AppMessage::PageFetched` 的形式经 channel 送回主循环。

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::{self, UnboundedSender};

use crate::backend::PeopleService;
use crate::event;
use crate::message::{AppMessage, Command, PaginationMessage};
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 事件轮询超时
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, service: &PeopleService) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();

    // 挂载：加载当前页
    dispatch(app, AppMessage::Pagination(PaginationMessage::Reload), service, &tx);

    loop {
        dispatch(app, AppMessage::Tick, service, &tx);

        // 1. 处理后台任务的结果
        while let Ok(msg) = rx.try_recv() {
            dispatch(app, msg, service, &tx);
        }

        // 2. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 3. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 4. 轮询事件并更新状态
        if let Some(event) = event::poll_event(POLL_TIMEOUT)? {
            let msg = event::handle_event(event, app);
            dispatch(app, msg, service, &tx);
        }
    }

    Ok(())
}

/// 更新状态，并执行产生的命令
fn dispatch(
    app: &mut App,
    msg: AppMessage,
    service: &PeopleService,
    tx: &UnboundedSender<AppMessage>,
) {
    if let Some(command) = update::update(app, msg) {
        execute(command, service, tx);
    }
}

/// 执行副作用命令
fn execute(command: Command, service: &PeopleService, tx: &UnboundedSender<AppMessage>) {
    match command {
        Command::FetchPage { page, generation } => {
            service.spawn_fetch(page, generation, tx.clone());
        }
    }
}
