//!
//!
//! src/backend/mod.rs
//! Backend 层：数据获取与配置
//!
//! Backend 层与 UI 完全解耦：
//!
//!     mod people_service;     // 人物分页获取（封装 swapi-browser-client）
//!     mod config_service;     // 配置文件读写
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、人物服务（PeopleService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     持有一个 `Arc<dyn PeopleSource>`（生产环境为 SwapiClient）。
//!
//!     fetch(page) 是请求失败的“边界”：
//!         - 成功：返回该页人物
//!         - 失败：记录日志，返回空列表 + 失败描述（由 Update 层转为通知）
//!       失败永远不会继续向上传播。
//!
//!     spawn_fetch(page, generation, tx) 在 tokio 上执行 fetch，
//!     完成后发送 AppMessage::PageFetched 回主循环。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、配置服务（LocalConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     存储位置：~/.config/swapi-browser-tui/config.json
//!
//!     主要方法：
//!         - exists()          配置文件是否存在
//!         - load()            读取配置（缺失的键使用默认值）
//!         - save(config)      写入配置
//!

mod config_service;
mod people_service;

pub use config_service::{AppConfig, ConfigError, ConfigService, LocalConfigService};
pub use people_service::{FetchOutcome, PeopleService};
