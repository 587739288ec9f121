//! SWAPI Browser TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息与副作用命令 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 数据获取与配置 (`backend/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     load_config()           // 读取配置文件（不存在则写入默认值）
//!     init_logging()          // 日志写入文件，失败时不写日志继续运行
//!     init_terminal()         // 进入 raw mode 与备用屏幕
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod event;
mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::Result;
use swapi_browser_client::SwapiClient;

use backend::{AppConfig, ConfigError, ConfigService, LocalConfigService, PeopleService};
use util::{init_logging, init_terminal, restore_terminal};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. 加载配置
    let config_service = LocalConfigService::new();
    let (config, config_error) = load_config(&config_service);

    // 2. 初始化日志（写入文件）；失败时不写日志继续运行
    let logging_error = match init_logging(&config.log_level) {
        Ok(log_path) => {
            tracing::info!("SWAPI Browser starting, log file: {}", log_path.display());
            None
        }
        Err(e) => Some(e),
    };
    tracing::info!("Config file: {}", config_service.path().display());
    tracing::info!("API base URL: {}", config.api_base_url);

    // 3. 应用主题与语言
    view::theme::set_theme(config.theme);
    i18n::set_language(config.language());

    // 4. 初始化终端
    let mut terminal = init_terminal()?;
    let size = terminal.size()?;

    // 5. 创建应用实例与数据服务
    let mut app = model::App::new(config.notification_ttl());
    app.viewport = model::Viewport::new(size.width, size.height);
    report_startup_problems(&mut app, config_error.as_ref(), logging_error.as_ref());
    let service = PeopleService::new(Arc::new(SwapiClient::with_base_url(&config.api_base_url)));

    // 6. 运行主循环
    let result = app::run(&mut terminal, &mut app, &service);

    // 7. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        tracing::error!("Main loop exited with error: {e:#}");
    }
    result
}

/// 读取配置；首次运行时写入默认配置，配置损坏时回退到默认值
///
/// 出错时仍返回可用的配置，错误交给调用方在日志就绪后报告。
fn load_config(service: &impl ConfigService) -> (AppConfig, Option<ConfigError>) {
    if !service.exists() {
        let config = AppConfig::default();
        let error = service.save(&config).err();
        return (config, error);
    }

    match service.load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    }
}

/// 启动阶段的问题写入日志，并作为通知显示在状态栏
fn report_startup_problems(
    app: &mut model::App,
    config_error: Option<&ConfigError>,
    logging_error: Option<&anyhow::Error>,
) {
    let texts = &i18n::t().notification;

    if let Some(e) = config_error {
        log::warn!("Config problem, using defaults: {e}");
        app.notifications
            .push_error(texts.config_fallback.replace("{reason}", &e.to_string()));
    }

    if let Some(e) = logging_error {
        app.notifications
            .push_error(texts.logging_disabled.replace("{reason}", &format!("{e:#}")));
    }
}
