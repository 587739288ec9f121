//! 翻页消息类型

/// 翻页相关消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationMessage {
    /// 下一页（仅当本页满 10 条时生效）
    Next,

    /// 上一页（第 1 页时无效）
    Previous,

    /// 重新加载当前页（挂载与刷新）
    Reload,
}
