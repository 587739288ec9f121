use async_trait::async_trait;

use crate::error::Result;
use crate::types::{PageNumber, PeoplePage};

/// 人物数据源 Trait
///
/// 由 [`SwapiClient`](crate::SwapiClient) 通过 HTTP 实现；
/// 上层（TUI）只依赖此 trait，测试时可替换为内存实现。
#[async_trait]
pub trait PeopleSource: Send + Sync {
    /// 数据源标识符（用于日志）
    fn id(&self) -> &'static str;

    /// 获取指定页的人物列表
    ///
    /// 每次调用只发出一次请求，不重试、不缓存。
    async fn fetch_page(&self, page: PageNumber) -> Result<PeoplePage>;
}
