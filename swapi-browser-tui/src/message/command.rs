//! 副作用命令

use swapi_browser_client::PageNumber;

/// Update 层请求主循环执行的副作用
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// 获取指定页，结果携带 `generation` 返回
    FetchPage { page: PageNumber, generation: u64 },
}
